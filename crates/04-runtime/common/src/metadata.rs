//! 组件元数据定义
//!
//! 提供组件身份标识和工厂描述信息

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;

/// 组件身份标识
///
/// 每个组件定义对应唯一的类型令牌，用于注册表查找和诊断输出
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentIdentity {
    /// 组件类型名称
    pub name: String,
    /// 组件类型ID
    pub id: TypeId,
    /// 模块路径
    pub module_path: String,
}

impl ComponentIdentity {
    /// 从组件类型获取身份标识
    pub fn of<T: 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>()
                .split("::")
                .last()
                .unwrap_or("Unknown")
                .to_string(),
            id: TypeId::of::<T>(),
            module_path: std::any::type_name::<T>().to_string(),
        }
    }

    /// 获取简短的组件名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.split("::").last().unwrap_or(&self.name)
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_path)
    }
}

/// 输入绑定描述
///
/// 组件属性名与模板绑定名的对应关系
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBinding {
    /// 组件属性名称
    pub property_name: String,
    /// 模板绑定名称
    pub template_name: String,
}

impl InputBinding {
    /// 创建新的输入绑定
    pub fn new(property_name: impl Into<String>, template_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            template_name: template_name.into(),
        }
    }
}

/// 输出绑定描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBinding {
    /// 组件属性名称
    pub property_name: String,
    /// 模板绑定名称
    pub template_name: String,
}

impl OutputBinding {
    /// 创建新的输出绑定
    pub fn new(property_name: impl Into<String>, template_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            template_name: template_name.into(),
        }
    }
}

/// 工厂描述符
///
/// 工厂元数据的可序列化摘要，用于诊断和工具输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryDescriptor {
    /// 组件类型名称（含模块路径）
    pub component_type: String,
    /// 组件选择器
    pub selector: String,
    /// 内容投影槽位选择器
    pub content_selectors: Vec<String>,
    /// 输入绑定
    pub inputs: Vec<InputBinding>,
    /// 输出绑定
    pub outputs: Vec<OutputBinding>,
}

impl FactoryDescriptor {
    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
