//! 组件工厂解析器抽象接口
//!
//! 提供组件工厂的查找与作用域链回退能力

use crate::factory::ComponentFactory;
use runtime_common::{ComponentIdentity, ResolveError};
use std::sync::Arc;
use tracing::debug;

/// 组件工厂解析器 trait
///
/// 渲染管线动态实例化组件时，通过解析器查找对应的工厂
pub trait ComponentFactoryResolver: Send + Sync {
    /// 按组件身份解析工厂
    fn resolve_factory(
        &self,
        identity: &ComponentIdentity,
    ) -> Result<Arc<dyn ComponentFactory>, ResolveError>;

    /// 检查是否可以解析指定身份
    fn can_resolve(&self, identity: &ComponentIdentity) -> bool {
        self.resolve_factory(identity).is_ok()
    }
}

/// 解析器扩展方法
///
/// 为解析器补充基于类型参数的便捷形式
pub trait ComponentFactoryResolverExt: ComponentFactoryResolver {
    /// 按组件类型解析工厂
    fn resolve<T: 'static>(&self) -> Result<Arc<dyn ComponentFactory>, ResolveError> {
        self.resolve_factory(&ComponentIdentity::of::<T>())
    }
}

impl<R: ComponentFactoryResolver + ?Sized> ComponentFactoryResolverExt for R {}

/// 空解析器
///
/// 作用域链的终结者，任何解析请求都确定性失败
#[derive(Debug, Default)]
pub struct NullFactoryResolver;

impl NullFactoryResolver {
    /// 创建新的空解析器
    pub fn new() -> Self {
        Self
    }

    /// 获取共享的空解析器实例
    pub fn shared() -> Arc<dyn ComponentFactoryResolver> {
        static SHARED: once_cell::sync::Lazy<Arc<NullFactoryResolver>> =
            once_cell::sync::Lazy::new(|| Arc::new(NullFactoryResolver));
        SHARED.clone()
    }
}

impl ComponentFactoryResolver for NullFactoryResolver {
    fn resolve_factory(
        &self,
        identity: &ComponentIdentity,
    ) -> Result<Arc<dyn ComponentFactory>, ResolveError> {
        debug!("解析链终止, 组件未注册: {}", identity);
        Err(ResolveError::not_registered(identity.clone()))
    }

    fn can_resolve(&self, _identity: &ComponentIdentity) -> bool {
        false
    }
}
