//! # Bean 容器具体实现
//!
//! 提供 [`BeanContainerImpl`]（单例注册表与依赖图递归构建）
//! 和 [`BeanScannerImpl`]（全局注册表扫描）。

pub mod container;
pub mod scanner;

pub use container::BeanContainerImpl;
pub use scanner::BeanScannerImpl;
