//! 错误类型定义

use crate::metadata::ComponentIdentity;
use thiserror::Error;

/// 组件解析错误类型
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("组件未注册: {identity}, 请检查模块的组件声明列表")]
    ComponentNotRegistered { identity: ComponentIdentity },
}

impl ResolveError {
    /// 创建组件未注册错误
    pub fn not_registered(identity: ComponentIdentity) -> Self {
        Self::ComponentNotRegistered { identity }
    }

    /// 获取未能解析的组件身份
    pub fn identity(&self) -> &ComponentIdentity {
        match self {
            Self::ComponentNotRegistered { identity } => identity,
        }
    }
}

/// 组件创建错误类型
#[derive(Error, Debug)]
pub enum CreationError {
    #[error("组件实例创建失败: {identity}, 原因: {source}")]
    InstantiationFailed {
        identity: ComponentIdentity,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("依赖提供者缺失: {identity}, 依赖: {dependency}")]
    MissingProvider {
        identity: ComponentIdentity,
        dependency: String,
    },
}

impl CreationError {
    /// 创建实例化失败错误
    pub fn instantiation_failed(
        identity: ComponentIdentity,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InstantiationFailed {
            identity,
            source: Box::new(source),
        }
    }

    /// 创建依赖缺失错误
    pub fn missing_provider(identity: ComponentIdentity, dependency: impl Into<String>) -> Self {
        Self::MissingProvider {
            identity,
            dependency: dependency.into(),
        }
    }
}

/// 模块装配错误类型
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("组件重复声明: {identity}")]
    DuplicateComponent { identity: ComponentIdentity },

    #[error("组件选择器无效: {identity}, 原因: {message}")]
    InvalidSelector {
        identity: ComponentIdentity,
        message: String,
    },
}

/// 运行时错误类型
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("组件解析错误: {source}")]
    Resolve {
        #[from]
        source: ResolveError,
    },

    #[error("组件创建错误: {source}")]
    Creation {
        #[from]
        source: CreationError,
    },

    #[error("模块装配错误: {source}")]
    Module {
        #[from]
        source: ModuleError,
    },

    #[error("运行时启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ResolveResult<T> = Result<T, ResolveError>;
pub type CreationResult<T> = Result<T, CreationError>;
pub type ModuleResult<T> = Result<T, ModuleError>;
pub type RuntimeResult<T> = Result<T, RuntimeError>;
