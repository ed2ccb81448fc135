//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
///
/// 初始化阶段的任何错误都会整体中止容器启动，不存在部分成功。
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("接口没有实现 Bean: {interface}")]
    NoImplementingBean { interface: String },

    #[error("检测到循环依赖: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("Bean 实例化失败: {type_name}, 原因: {source}")]
    InstantiationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Bean 没有可用的构造函数: {type_name}")]
    NoUsableConstructor { type_name: String },

    #[error("Bean 未注册: {type_name}")]
    BeanNotFound { type_name: String },

    #[error("Bean 类型转换失败: 期望 {expected}")]
    BeanTypeMismatch { expected: String },

    #[error("候选集合中缺少 Bean 定义: {type_name}")]
    DefinitionMissing { type_name: String },

    #[error("接口绑定缺失: {interface} 在 {type_name} 上未声明")]
    BindingMissing {
        interface: String,
        type_name: String,
    },

    #[error("容器尚未就绪: 当前状态 {state}")]
    ContainerNotReady { state: String },

    #[error("容器已完成初始化，不允许重复初始化")]
    AlreadyInitialized,
}

/// Bean 扫描与定义错误类型
#[derive(Error, Debug)]
pub enum BeanError {
    #[error("Bean 扫描失败: {message}")]
    ScanError { message: String },

    #[error("Bean 定义重复: {type_name}")]
    DuplicateDefinition { type_name: String },

    #[error("Bean 定义无效: {message}")]
    InvalidDefinition { message: String },
}

impl BeanError {
    /// 创建扫描错误
    pub fn scan_error(message: impl Into<String>) -> Self {
        Self::ScanError {
            message: message.into(),
        }
    }

    /// 创建定义无效错误
    pub fn invalid_definition(message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            message: message.into(),
        }
    }
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type BeanResult<T> = Result<T, BeanError>;
