//! 静态组件工厂
//!
//! 预生成工厂的标准实现：元数据在构造时给定，创建逻辑由闭包提供

use linker_abstractions::{ComponentFactory, ComponentRef, CreateRequest};
use runtime_common::{ComponentIdentity, CreationError, InputBinding, OutputBinding};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// 组件实例构造函数类型
pub type CreateFn = Arc<
    dyn Fn(&CreateRequest) -> Result<Arc<dyn Any + Send + Sync>, CreationError> + Send + Sync,
>;

/// 静态组件工厂
///
/// 携带构造期固定的组件元数据与创建闭包
pub struct StaticComponentFactory {
    identity: ComponentIdentity,
    selector: String,
    content_selectors: Vec<String>,
    inputs: Vec<InputBinding>,
    outputs: Vec<OutputBinding>,
    create_fn: CreateFn,
}

impl StaticComponentFactory {
    /// 创建新的静态组件工厂
    pub fn new<T, F>(selector: impl Into<String>, create_fn: F) -> Self
    where
        T: 'static,
        F: Fn(&CreateRequest) -> Result<Arc<dyn Any + Send + Sync>, CreationError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            identity: ComponentIdentity::of::<T>(),
            selector: selector.into(),
            content_selectors: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            create_fn: Arc::new(create_fn),
        }
    }

    /// 添加内容投影槽位选择器
    pub fn with_content_selector(mut self, selector: impl Into<String>) -> Self {
        self.content_selectors.push(selector.into());
        self
    }

    /// 添加输入绑定
    pub fn with_input(
        mut self,
        property_name: impl Into<String>,
        template_name: impl Into<String>,
    ) -> Self {
        self.inputs.push(InputBinding::new(property_name, template_name));
        self
    }

    /// 添加输出绑定
    pub fn with_output(
        mut self,
        property_name: impl Into<String>,
        template_name: impl Into<String>,
    ) -> Self {
        self.outputs.push(OutputBinding::new(property_name, template_name));
        self
    }
}

impl ComponentFactory for StaticComponentFactory {
    fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    fn selector(&self) -> &str {
        &self.selector
    }

    fn content_selectors(&self) -> &[String] {
        &self.content_selectors
    }

    fn inputs(&self) -> &[InputBinding] {
        &self.inputs
    }

    fn outputs(&self) -> &[OutputBinding] {
        &self.outputs
    }

    fn create(&self, request: CreateRequest) -> Result<ComponentRef, CreationError> {
        if request.projected_nodes.len() > self.content_selectors.len() {
            warn!(
                "内容投影分组数超过槽位数: {}, 槽位 {}, 实际 {}",
                self.identity,
                self.content_selectors.len(),
                request.projected_nodes.len()
            );
        }

        let instance = (self.create_fn)(&request)?;
        let CreateRequest {
            injector, module, ..
        } = request;

        Ok(ComponentRef::new(
            self.identity.clone(),
            instance,
            injector,
            module,
        ))
    }
}

impl fmt::Debug for StaticComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticComponentFactory")
            .field("identity", &self.identity)
            .field("selector", &self.selector)
            .field("content_selectors", &self.content_selectors)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .field("create_fn", &"<function>")
            .finish()
    }
}
