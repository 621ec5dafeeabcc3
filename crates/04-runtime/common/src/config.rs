//! 运行时配置

use serde::{Deserialize, Serialize};

/// 注册表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 是否在模块装配时校验工厂声明
    pub enable_declaration_validation: bool,
    /// 本地声明遮蔽父级可解析组件时是否告警
    pub warn_on_shadowed_parent: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enable_declaration_validation: true,
            warn_on_shadowed_parent: false,
        }
    }
}
