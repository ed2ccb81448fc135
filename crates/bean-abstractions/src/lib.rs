//! # Bean Abstractions
//!
//! 提供 Bean 容器的抽象接口与内省工具。
//!
//! ## 核心组件
//!
//! - [`BeanContainer`] - 容器 trait（初始化与查找）
//! - [`BeanScanner`] - 扫描器 trait
//! - [`introspection`] - 构造函数选取与具体类型解析
//! - [`ResolveContext`] - 循环依赖检测的解析链

pub mod container;
pub mod introspection;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use resolver::*;
pub use scanner::*;
