//! 组件工厂注册表
//!
//! 将组件身份映射到预生成工厂，并支持父级作用域回退

use crate::bound::ModuleBoundFactory;
use linker_abstractions::{
    ComponentFactory, ComponentFactoryResolver, ModuleHandle,
};
use runtime_common::{ComponentIdentity, FactoryDescriptor, ResolveError};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 组件工厂注册表
///
/// 映射在构造时一次性建立，此后不可变；由单个模块作用域持有。
/// 本地未命中时委托父级解析器，解析结果始终绑定本注册表的模块上下文。
pub struct FactoryRegistry {
    factories: HashMap<TypeId, Arc<dyn ComponentFactory>>,
    parent: Arc<dyn ComponentFactoryResolver>,
    module: ModuleHandle,
}

impl FactoryRegistry {
    /// 创建新的工厂注册表
    pub fn new(
        factories: Vec<Arc<dyn ComponentFactory>>,
        parent: Arc<dyn ComponentFactoryResolver>,
        module: ModuleHandle,
    ) -> Self {
        let mut mapping = HashMap::with_capacity(factories.len());
        for factory in factories {
            mapping.insert(factory.identity().id, factory);
        }

        Self {
            factories: mapping,
            parent,
            module,
        }
    }

    /// 所属模块上下文
    pub fn module(&self) -> &ModuleHandle {
        &self.module
    }

    /// 本地映射中的工厂数量
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// 本地映射是否为空
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// 描述本地映射中的所有工厂
    pub fn describe_all(&self) -> Vec<FactoryDescriptor> {
        self.factories
            .values()
            .map(|factory| factory.describe())
            .collect()
    }
}

impl ComponentFactoryResolver for FactoryRegistry {
    fn resolve_factory(
        &self,
        identity: &ComponentIdentity,
    ) -> Result<Arc<dyn ComponentFactory>, ResolveError> {
        let factory = match self.factories.get(&identity.id) {
            Some(factory) => factory.clone(),
            None => {
                debug!(
                    "本地未命中, 委托父级解析: {} (模块 {})",
                    identity,
                    self.module.name()
                );
                self.parent.resolve_factory(identity)?
            }
        };

        Ok(Arc::new(ModuleBoundFactory::new(
            factory,
            self.module.clone(),
        )))
    }

    fn can_resolve(&self, identity: &ComponentIdentity) -> bool {
        self.factories.contains_key(&identity.id) || self.parent.can_resolve(identity)
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("module", &self.module)
            .field("local_factories", &self.factories.len())
            .finish()
    }
}
