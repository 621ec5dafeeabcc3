//! # Runtime Common
//!
//! 这个 crate 提供了 Yunque UI 运行时层的公共类型和工具。
//!
//! ## 核心类型
//!
//! - [`ComponentIdentity`] - 组件身份标识（类型令牌）
//! - [`FactoryDescriptor`] - 工厂元数据的可序列化摘要
//! - [`ModuleScope`] - 模块作用域
//! - [`ResolveError`] - 组件解析错误
//! - [`RegistryConfig`] - 注册表配置
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 解析路径同步、无挂起点
//! - 构造后不可变的注册数据

pub mod config;
pub mod errors;
pub mod metadata;
pub mod scope;

pub use config::*;
pub use errors::*;
pub use metadata::*;
pub use scope::*;

/// 全局作用域追踪器
static GLOBAL_SCOPE_TRACKER: once_cell::sync::Lazy<
    parking_lot::RwLock<Option<std::sync::Arc<ScopeTracker>>>,
> = once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(None));

/// 获取全局作用域追踪器，首次访问时惰性创建
pub fn global_scope_tracker() -> std::sync::Arc<ScopeTracker> {
    if let Some(tracker) = GLOBAL_SCOPE_TRACKER.read().as_ref() {
        return tracker.clone();
    }

    let mut slot = GLOBAL_SCOPE_TRACKER.write();
    slot.get_or_insert_with(|| std::sync::Arc::new(ScopeTracker::new()))
        .clone()
}

/// 设置全局作用域追踪器
pub fn set_global_scope_tracker(tracker: std::sync::Arc<ScopeTracker>) {
    *GLOBAL_SCOPE_TRACKER.write() = Some(tracker);
}
