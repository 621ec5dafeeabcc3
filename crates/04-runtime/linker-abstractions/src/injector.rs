//! 依赖注入器抽象接口
//!
//! 按类型令牌查找依赖实例的最小接口

use std::any::{Any, TypeId};
use std::sync::Arc;

/// 依赖注入器 trait
///
/// 组件创建时从注入器获取其依赖的提供者实例
pub trait Injector: Send + Sync {
    /// 按类型ID查找提供者实例
    fn get_by_type_id(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>>;

    /// 检查是否提供指定类型
    fn provides(&self, type_id: TypeId) -> bool {
        self.get_by_type_id(type_id).is_some()
    }
}

/// 注入器扩展方法
///
/// 为注入器补充基于类型参数的便捷形式
pub trait InjectorExt: Injector {
    /// 按具体类型查找提供者实例
    fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.get_by_type_id(TypeId::of::<T>())
            .and_then(|instance| instance.downcast::<T>().ok())
    }
}

impl<I: Injector + ?Sized> InjectorExt for I {}

/// 空注入器
///
/// 不提供任何依赖，用作无依赖场景的占位
#[derive(Debug, Default)]
pub struct NullInjector;

impl NullInjector {
    /// 创建新的空注入器
    pub fn new() -> Self {
        Self
    }
}

impl Injector for NullInjector {
    fn get_by_type_id(&self, _type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }

    fn provides(&self, _type_id: TypeId) -> bool {
        false
    }
}
