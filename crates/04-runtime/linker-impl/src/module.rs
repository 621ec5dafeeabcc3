//! 模块运行时
//!
//! 将声明的工厂装配为模块级注册表，并管理模块作用域的登记与注销

use crate::registry::FactoryRegistry;
use linker_abstractions::{
    ComponentFactory, ComponentFactoryResolver, Injector, ModuleHandle, NullFactoryResolver,
    NullInjector,
};
use runtime_common::{
    global_scope_tracker, ModuleError, ModuleScope, RegistryConfig, ScopeTracker,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 模块运行时
///
/// 持有模块句柄与该模块的组件工厂注册表
#[derive(Debug)]
pub struct ModuleRuntime {
    handle: ModuleHandle,
    registry: Arc<FactoryRegistry>,
    tracker: Arc<ScopeTracker>,
}

impl ModuleRuntime {
    /// 创建模块运行时构建器
    pub fn builder(name: impl Into<String>) -> ModuleRuntimeBuilder {
        ModuleRuntimeBuilder::new(name)
    }

    /// 模块句柄
    pub fn handle(&self) -> &ModuleHandle {
        &self.handle
    }

    /// 模块的组件工厂注册表
    pub fn registry(&self) -> &Arc<FactoryRegistry> {
        &self.registry
    }

    /// 模块的组件工厂解析器
    pub fn resolver(&self) -> Arc<dyn ComponentFactoryResolver> {
        self.registry.clone()
    }

    /// 销毁模块作用域
    ///
    /// 注销作用域登记并废弃注册表
    pub fn destroy(self) {
        info!("销毁模块作用域: {}", self.handle.name());
        self.tracker.release(self.handle.scope().id);
    }
}

/// 模块运行时构建器
pub struct ModuleRuntimeBuilder {
    name: String,
    factories: Vec<Arc<dyn ComponentFactory>>,
    parent: Arc<dyn ComponentFactoryResolver>,
    injector: Arc<dyn Injector>,
    config: RegistryConfig,
    tracker: Option<Arc<ScopeTracker>>,
}

impl ModuleRuntimeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factories: Vec::new(),
            parent: NullFactoryResolver::shared(),
            injector: Arc::new(NullInjector),
            config: RegistryConfig::default(),
            tracker: None,
        }
    }

    /// 声明组件工厂
    pub fn declare_factory(mut self, factory: Arc<dyn ComponentFactory>) -> Self {
        self.factories.push(factory);
        self
    }

    /// 设置父级解析器
    pub fn with_parent(mut self, parent: Arc<dyn ComponentFactoryResolver>) -> Self {
        self.parent = parent;
        self
    }

    /// 设置模块注入器
    pub fn with_injector(mut self, injector: Arc<dyn Injector>) -> Self {
        self.injector = injector;
        self
    }

    /// 设置注册表配置
    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// 指定作用域追踪器（默认使用全局追踪器）
    pub fn with_scope_tracker(mut self, tracker: Arc<ScopeTracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// 构建模块运行时
    pub fn build(self) -> Result<ModuleRuntime, ModuleError> {
        if self.config.enable_declaration_validation {
            self.validate_declarations()?;
        }

        if self.config.warn_on_shadowed_parent {
            for factory in &self.factories {
                if self.parent.can_resolve(factory.identity()) {
                    warn!(
                        "本地工厂遮蔽了父级可解析的组件: {} (模块 {})",
                        factory.identity(),
                        self.name
                    );
                }
            }
        }

        let Self {
            name,
            factories,
            parent,
            injector,
            tracker,
            ..
        } = self;

        let scope = ModuleScope::new(name);
        let handle = ModuleHandle::new(scope.clone(), injector);
        let registry = FactoryRegistry::new(factories, parent, handle.clone());

        let tracker = tracker.unwrap_or_else(global_scope_tracker);
        tracker.track(scope);

        info!(
            "模块装配完成: {} (本地工厂 {} 个)",
            handle.name(),
            registry.len()
        );

        Ok(ModuleRuntime {
            handle,
            registry: Arc::new(registry),
            tracker,
        })
    }

    fn validate_declarations(&self) -> Result<(), ModuleError> {
        let mut seen = HashSet::new();
        for factory in &self.factories {
            let identity = factory.identity();
            if !seen.insert(identity.id) {
                return Err(ModuleError::DuplicateComponent {
                    identity: identity.clone(),
                });
            }

            if factory.selector().trim().is_empty() {
                return Err(ModuleError::InvalidSelector {
                    identity: identity.clone(),
                    message: "选择器不能为空".to_string(),
                });
            }

            debug!("声明组件工厂: {} ({})", identity, factory.selector());
        }
        Ok(())
    }
}
