//! # Bean Macros
//!
//! 这个 crate 提供把结构体声明为受管 Bean 的过程宏。
//!
//! ## 核心宏
//!
//! - [`bean`] - 生成 Bean 定义并在启动时注册到全局注册表
//!
//! ## 使用示例
//!
//! ```ignore
//! use bean_macros::bean;
//! use std::sync::Arc;
//!
//! pub trait UserRepository: Send + Sync {
//!     fn count(&self) -> usize;
//! }
//!
//! #[bean(implements(UserRepository))]
//! pub struct JdbcUserRepository;
//!
//! impl UserRepository for JdbcUserRepository {
//!     fn count(&self) -> usize {
//!         0
//!     }
//! }
//!
//! #[bean]
//! pub struct UserController {
//!     repository: Arc<dyn UserRepository>,
//! }
//! ```

use proc_macro::TokenStream;

mod bean;

/// Bean 声明宏
///
/// 为结构体生成 `Bean` trait 实现、一个静态 Bean 定义提供函数，
/// 以及程序启动时向全局注册表提交该定义的 `ctor` 注册函数。
///
/// 依赖通过结构体字段声明：每个字段必须是 `Arc<T>`（具体类型依赖）
/// 或 `Arc<dyn Trait>`（接口依赖），宏据此生成注入构造函数。
/// 无字段的结构体回退到默认构造。
///
/// # 参数
///
/// - `name = "custom_name"` - 自定义 Bean 名称（默认为结构体名的蛇形命名）
/// - `default` - 强制使用 `Default::default()` 构造，忽略字段注入
/// - `implements(TraitA, TraitB)` - 声明直接实现的接口，供按接口查找
///
/// # 示例
///
/// ```ignore
/// #[bean(name = "primary_repository", implements(UserRepository))]
/// pub struct JdbcUserRepository;
/// ```
#[proc_macro_attribute]
pub fn bean(args: TokenStream, input: TokenStream) -> TokenStream {
    bean::bean_impl(args, input)
}
