//! Bean 扫描器抽象接口
//!
//! 容器只消费扫描结果；标记语义（`#[bean]` 宏与 `ctor` 注册）
//! 是上层约定，不属于容器核心逻辑。

use bean_common::{BeanResult, CandidateBeanSet};

/// Bean 扫描器 trait
///
/// 给定一组基础模块路径，产出携带受管标记的候选 Bean 集合。
pub trait BeanScanner: Send + Sync {
    /// 扫描指定基础模块路径下的 Bean 定义
    ///
    /// `base_modules` 为空时返回全部已注册定义。
    fn scan(&self, base_modules: &[&str]) -> BeanResult<CandidateBeanSet>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
