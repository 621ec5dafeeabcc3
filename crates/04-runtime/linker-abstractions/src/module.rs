//! 模块上下文定义

use crate::injector::Injector;
use runtime_common::ModuleScope;
use std::fmt;
use std::sync::Arc;

/// 模块上下文句柄
///
/// 标识组件所属的模块作用域，并携带该作用域的注入器。
/// 句柄可廉价克隆，在注册表与绑定工厂之间共享。
#[derive(Clone)]
pub struct ModuleHandle {
    scope: ModuleScope,
    injector: Arc<dyn Injector>,
}

impl ModuleHandle {
    /// 创建新的模块句柄
    pub fn new(scope: ModuleScope, injector: Arc<dyn Injector>) -> Self {
        Self { scope, injector }
    }

    /// 模块作用域
    pub fn scope(&self) -> &ModuleScope {
        &self.scope
    }

    /// 模块名称
    pub fn name(&self) -> &str {
        &self.scope.name
    }

    /// 模块注入器
    pub fn injector(&self) -> &Arc<dyn Injector> {
        &self.injector
    }
}

impl fmt::Debug for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle")
            .field("scope", &self.scope)
            .field("injector", &"<dyn Injector>")
            .finish()
    }
}
