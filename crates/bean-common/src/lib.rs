//! # Bean Common
//!
//! 这个 crate 提供 Bean 容器各层共享的公共类型和工具。
//!
//! ## 核心组件
//!
//! - [`Bean`] - 受管 Bean 标记 trait
//! - [`BeanDefinition`] - 静态声明的 Bean 构造定义
//! - [`CandidateBeanSet`] - 扫描产出的候选 Bean 集合
//! - [`TypeInfo`] / [`BeanMetadata`] - 类型与 Bean 元数据
//!
//! ## 设计原则
//!
//! - 以静态声明的工厂函数取代运行时反射
//! - 显式构造，不提供环境全局单例访问
//! - 基于 Rust 类型系统的编译时安全

pub mod bean;
pub mod candidate;
pub mod definition;
pub mod errors;
pub mod metadata;

pub use bean::*;
pub use candidate::*;
pub use definition::*;
pub use errors::*;
pub use metadata::*;

/// Bean 定义提供函数
pub type BeanDefinitionProvider = fn() -> BeanDefinition;

/// 启动期注册的 Bean 定义项
///
/// 由 `#[bean]` 宏在程序启动时通过 `ctor` 提交，`module_path`
/// 供扫描器按基础模块路径过滤。
#[derive(Debug, Clone, Copy)]
pub struct BeanRegistration {
    /// 定义所在模块路径
    pub module_path: &'static str,
    /// 定义提供函数
    pub provider: BeanDefinitionProvider,
}

/// 全局 Bean 定义注册表
static GLOBAL_BEAN_REGISTRATIONS: once_cell::sync::Lazy<
    parking_lot::RwLock<Vec<BeanRegistration>>,
> = once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(Vec::new()));

/// 向全局注册表提交 Bean 定义
pub fn register_bean_definition(registration: BeanRegistration) {
    GLOBAL_BEAN_REGISTRATIONS.write().push(registration);
}

/// 获取全局注册表中的全部 Bean 定义项
pub fn registered_bean_definitions() -> Vec<BeanRegistration> {
    GLOBAL_BEAN_REGISTRATIONS.read().clone()
}
