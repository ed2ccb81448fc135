//! Bean 基础接口定义

/// 受管 Bean 标记 trait
///
/// 所有由容器管理的组件都必须实现此 trait，通常由 `#[bean]` 宏生成。
pub trait Bean: Send + Sync + 'static {
    /// Bean 名称
    fn bean_name(&self) -> &'static str;
}
