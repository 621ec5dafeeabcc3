//! 模块作用域管理

use tracing::debug;
use uuid::Uuid;

/// 模块作用域
///
/// 标识一组组件的所属上下文，作用域销毁时其注册表一并废弃
#[derive(Debug, Clone)]
pub struct ModuleScope {
    /// 作用域ID
    pub id: Uuid,
    /// 作用域名称
    pub name: String,
    /// 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ModuleScope {
    /// 创建新作用域
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: chrono::Utc::now(),
        }
    }

    /// 创建根作用域
    pub fn root() -> Self {
        Self::new("root")
    }

    /// 创建子作用域
    pub fn child(&self, name: impl Into<String>) -> Self {
        Self::new(format!("{}.{}", self.name, name.into()))
    }
}

/// 作用域追踪器
///
/// 记录当前存活的模块作用域，供工具枚举
#[derive(Debug, Default)]
pub struct ScopeTracker {
    active_scopes: dashmap::DashMap<Uuid, ModuleScope>,
}

impl ScopeTracker {
    /// 创建新的作用域追踪器
    pub fn new() -> Self {
        Self {
            active_scopes: dashmap::DashMap::new(),
        }
    }

    /// 登记作用域
    pub fn track(&self, scope: ModuleScope) {
        debug!("登记模块作用域: {} ({})", scope.name, scope.id);
        self.active_scopes.insert(scope.id, scope);
    }

    /// 注销作用域
    pub fn release(&self, scope_id: Uuid) -> Option<ModuleScope> {
        let released = self.active_scopes.remove(&scope_id).map(|(_, scope)| scope);
        if let Some(scope) = &released {
            debug!("注销模块作用域: {} ({})", scope.name, scope.id);
        }
        released
    }

    /// 作用域是否存活
    pub fn is_active(&self, scope_id: Uuid) -> bool {
        self.active_scopes.contains_key(&scope_id)
    }

    /// 存活作用域数量
    pub fn active_count(&self) -> usize {
        self.active_scopes.len()
    }

    /// 获取所有存活作用域
    pub fn active_scopes(&self) -> Vec<ModuleScope> {
        self.active_scopes
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
