//! 解析上下文
//!
//! 初始化期间的临时簿记：记录"构建已开始但未完成"的类型链，
//! 用于在递归构建中检测循环依赖，避免栈耗尽。

use bean_common::{DependencyError, DependencyResult, TypeInfo};

/// 解析上下文
///
/// 仅存在于一次 `initialize` 调用期间。
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    resolution_chain: Vec<TypeInfo>,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 将类型压入解析链
    ///
    /// 类型已在链上时立即失败，错误信息包含完整依赖链。
    pub fn push_type(&mut self, type_info: &TypeInfo) -> DependencyResult<()> {
        if self
            .resolution_chain
            .iter()
            .any(|entry| entry.id == type_info.id)
        {
            return Err(DependencyError::CircularDependency {
                dependency_chain: self.format_chain(type_info),
            });
        }
        self.resolution_chain.push(type_info.clone());
        Ok(())
    }

    /// 从解析链中弹出最近压入的类型
    pub fn pop_type(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    fn format_chain(&self, repeated: &TypeInfo) -> String {
        let mut chain: Vec<&str> = self
            .resolution_chain
            .iter()
            .map(TypeInfo::short_name)
            .collect();
        chain.push(repeated.short_name());
        chain.join(" -> ")
    }
}
