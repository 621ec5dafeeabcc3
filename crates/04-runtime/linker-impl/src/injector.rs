//! 静态注入器实现

use linker_abstractions::Injector;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 静态注入器
///
/// 提供者在构造时一次性登记；本地未命中时回退到父级注入器
pub struct StaticInjector {
    providers: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    parent: Option<Arc<dyn Injector>>,
}

impl StaticInjector {
    /// 创建注入器构建器
    pub fn builder() -> StaticInjectorBuilder {
        StaticInjectorBuilder::new()
    }

    /// 创建不提供任何依赖的注入器
    pub fn empty() -> Self {
        Self {
            providers: HashMap::new(),
            parent: None,
        }
    }

    /// 已登记的提供者数量
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

impl Injector for StaticInjector {
    fn get_by_type_id(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        if let Some(instance) = self.providers.get(&type_id) {
            return Some(instance.clone());
        }

        self.parent
            .as_ref()
            .and_then(|parent| parent.get_by_type_id(type_id))
    }
}

impl fmt::Debug for StaticInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticInjector")
            .field("providers", &self.providers.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// 静态注入器构建器
#[derive(Default)]
pub struct StaticInjectorBuilder {
    providers: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    parent: Option<Arc<dyn Injector>>,
}

impl StaticInjectorBuilder {
    /// 创建新的注入器构建器
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            parent: None,
        }
    }

    /// 登记提供者实例
    pub fn with_provider<T: Send + Sync + 'static>(mut self, instance: Arc<T>) -> Self {
        self.providers
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
        self
    }

    /// 设置父级注入器
    pub fn with_parent(mut self, parent: Arc<dyn Injector>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// 构建注入器
    pub fn build(self) -> StaticInjector {
        StaticInjector {
            providers: self.providers,
            parent: self.parent,
        }
    }
}
