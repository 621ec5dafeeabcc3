//! 组件工厂抽象接口
//!
//! 提供组件实例创建的工厂模式支持

use crate::injector::Injector;
use crate::module::ModuleHandle;
use runtime_common::{
    ComponentIdentity, CreationError, FactoryDescriptor, InputBinding, OutputBinding,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 内容投影节点
///
/// 按投影槽位分组的宿主内容节点
pub type ProjectedNodes = Vec<Vec<Arc<dyn Any + Send + Sync>>>;

/// 组件工厂 trait
///
/// 携带组件的描述性元数据，并负责创建组件实例
pub trait ComponentFactory: Send + Sync {
    /// 工厂对应的组件身份
    fn identity(&self) -> &ComponentIdentity;

    /// 组件选择器
    fn selector(&self) -> &str;

    /// 内容投影槽位选择器
    fn content_selectors(&self) -> &[String];

    /// 输入绑定
    fn inputs(&self) -> &[InputBinding];

    /// 输出绑定
    fn outputs(&self) -> &[OutputBinding];

    /// 创建组件实例
    fn create(&self, request: CreateRequest) -> Result<ComponentRef, CreationError>;

    /// 获取工厂描述符
    fn describe(&self) -> FactoryDescriptor {
        FactoryDescriptor {
            component_type: self.identity().module_path.clone(),
            selector: self.selector().to_string(),
            content_selectors: self.content_selectors().to_vec(),
            inputs: self.inputs().to_vec(),
            outputs: self.outputs().to_vec(),
        }
    }
}

impl fmt::Debug for dyn ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("identity", self.identity())
            .field("selector", &self.selector())
            .finish()
    }
}

/// 组件创建请求
///
/// 打包创建组件实例所需的全部上下文
pub struct CreateRequest {
    /// 依赖注入器
    pub injector: Arc<dyn Injector>,
    /// 内容投影节点
    pub projected_nodes: ProjectedNodes,
    /// 宿主选择器
    pub host_selector: Option<String>,
    /// 模块上下文（为空时由绑定工厂补充）
    pub module: Option<ModuleHandle>,
}

impl CreateRequest {
    /// 创建新的组件创建请求
    pub fn new(injector: Arc<dyn Injector>) -> Self {
        Self {
            injector,
            projected_nodes: Vec::new(),
            host_selector: None,
            module: None,
        }
    }

    /// 设置内容投影节点
    pub fn with_projected_nodes(mut self, nodes: ProjectedNodes) -> Self {
        self.projected_nodes = nodes;
        self
    }

    /// 设置宿主选择器
    pub fn with_host_selector(mut self, selector: impl Into<String>) -> Self {
        self.host_selector = Some(selector.into());
        self
    }

    /// 显式指定模块上下文
    pub fn with_module(mut self, module: ModuleHandle) -> Self {
        self.module = Some(module);
        self
    }
}

impl fmt::Debug for CreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateRequest")
            .field("injector", &"<dyn Injector>")
            .field("projected_node_groups", &self.projected_nodes.len())
            .field("host_selector", &self.host_selector)
            .field("module", &self.module)
            .finish()
    }
}

/// 组件引用
///
/// 工厂创建操作的返回值，持有组件实例及其创建上下文
pub struct ComponentRef {
    identity: ComponentIdentity,
    instance: Arc<dyn Any + Send + Sync>,
    injector: Arc<dyn Injector>,
    module: Option<ModuleHandle>,
}

impl ComponentRef {
    /// 创建新的组件引用
    pub fn new(
        identity: ComponentIdentity,
        instance: Arc<dyn Any + Send + Sync>,
        injector: Arc<dyn Injector>,
        module: Option<ModuleHandle>,
    ) -> Self {
        Self {
            identity,
            instance,
            injector,
            module,
        }
    }

    /// 组件身份
    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    /// 组件实例
    pub fn instance(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.instance
    }

    /// 以具体类型访问组件实例
    pub fn instance_as<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.instance.clone().downcast::<T>().ok()
    }

    /// 创建时使用的注入器
    pub fn injector(&self) -> &Arc<dyn Injector> {
        &self.injector
    }

    /// 承载组件的模块上下文
    pub fn module(&self) -> Option<&ModuleHandle> {
        self.module.as_ref()
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("identity", &self.identity)
            .field("instance", &"<dyn Any>")
            .field("module", &self.module)
            .finish()
    }
}
