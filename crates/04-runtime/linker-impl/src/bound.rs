//! 模块绑定工厂包装

use linker_abstractions::{
    ComponentFactory, ComponentRef, CreateRequest, ModuleHandle,
};
use runtime_common::{ComponentIdentity, CreationError, InputBinding, OutputBinding};
use std::fmt;
use std::sync::Arc;

/// 模块绑定工厂
///
/// 包装已解析的工厂，转发全部描述性元数据；创建时若调用方未显式
/// 指定模块上下文，则补充绑定的模块上下文
pub struct ModuleBoundFactory {
    inner: Arc<dyn ComponentFactory>,
    module: ModuleHandle,
}

impl ModuleBoundFactory {
    /// 创建新的模块绑定工厂
    pub fn new(inner: Arc<dyn ComponentFactory>, module: ModuleHandle) -> Self {
        Self { inner, module }
    }

    /// 绑定的模块上下文
    pub fn module(&self) -> &ModuleHandle {
        &self.module
    }
}

impl ComponentFactory for ModuleBoundFactory {
    fn identity(&self) -> &ComponentIdentity {
        self.inner.identity()
    }

    fn selector(&self) -> &str {
        self.inner.selector()
    }

    fn content_selectors(&self) -> &[String] {
        self.inner.content_selectors()
    }

    fn inputs(&self) -> &[InputBinding] {
        self.inner.inputs()
    }

    fn outputs(&self) -> &[OutputBinding] {
        self.inner.outputs()
    }

    fn create(&self, mut request: CreateRequest) -> Result<ComponentRef, CreationError> {
        // 调用方显式指定的模块上下文优先
        if request.module.is_none() {
            request.module = Some(self.module.clone());
        }
        self.inner.create(request)
    }
}

impl fmt::Debug for ModuleBoundFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleBoundFactory")
            .field("identity", self.inner.identity())
            .field("module", &self.module)
            .finish()
    }
}
