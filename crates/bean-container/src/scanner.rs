//! Bean 扫描器实现
//!
//! 读取 `ctor` 启动期填充的全局注册表，按基础模块路径过滤后
//! 产出候选 Bean 集合。

use bean_abstractions::BeanScanner;
use bean_common::{
    registered_bean_definitions, BeanDefinition, BeanResult, CandidateBeanSet,
};
use tracing::debug;

/// 扫描器实现
///
/// 候选集合按 (模块路径, Bean 名称) 排序，保证跨运行的确定性
/// 迭代顺序。
pub struct BeanScannerImpl;

impl BeanScannerImpl {
    /// 创建新的扫描器
    pub fn new() -> Self {
        Self
    }

    fn matches(module_path: &str, base_modules: &[&str]) -> bool {
        base_modules.is_empty()
            || base_modules.iter().any(|base| {
                module_path == *base
                    || module_path
                        .strip_prefix(base)
                        .is_some_and(|rest| rest.starts_with("::"))
            })
    }
}

impl Default for BeanScannerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl BeanScanner for BeanScannerImpl {
    fn scan(&self, base_modules: &[&str]) -> BeanResult<CandidateBeanSet> {
        let mut entries: Vec<(String, BeanDefinition)> = registered_bean_definitions()
            .into_iter()
            .filter(|registration| Self::matches(registration.module_path, base_modules))
            .map(|registration| {
                let definition = (registration.provider)();
                let sort_key = format!("{}::{}", registration.module_path, definition.bean_name());
                (sort_key, definition)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        debug!(
            "扫描基础模块 {:?}，得到 {} 个候选 Bean",
            base_modules,
            entries.len()
        );

        CandidateBeanSet::from_definitions(entries.into_iter().map(|(_, d)| d).collect())
    }

    fn name(&self) -> &str {
        "BeanScannerImpl"
    }
}
