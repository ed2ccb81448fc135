//! 候选 Bean 集合
//!
//! 扫描阶段产出的不可变集合，是容器允许构造的类型全集。

use crate::definition::BeanDefinition;
use crate::errors::BeanError;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

/// 候选 Bean 集合
///
/// 创建后不可变；迭代顺序即注册顺序，保证接口解析"取首个"
/// 的结果是确定的。
#[derive(Clone, Default)]
pub struct CandidateBeanSet {
    definitions: Vec<BeanDefinition>,
    index: HashMap<TypeId, usize>,
}

impl CandidateBeanSet {
    /// 创建空集合
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从定义列表创建候选集合
    ///
    /// 同一具体类型出现两次视为配置错误。
    pub fn from_definitions(definitions: Vec<BeanDefinition>) -> Result<Self, BeanError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            let type_info = definition.type_info();
            if index.insert(type_info.id, position).is_some() {
                return Err(BeanError::DuplicateDefinition {
                    type_name: type_info.module_path.clone(),
                });
            }
        }
        Ok(Self { definitions, index })
    }

    /// 按类型ID查找定义
    pub fn get(&self, type_id: TypeId) -> Option<&BeanDefinition> {
        self.index
            .get(&type_id)
            .map(|position| &self.definitions[*position])
    }

    /// 检查类型是否在候选集合中
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.index.contains_key(&type_id)
    }

    /// 按注册顺序迭代定义
    pub fn iter(&self) -> impl Iterator<Item = &BeanDefinition> {
        self.definitions.iter()
    }

    /// 候选数量
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl fmt::Debug for CandidateBeanSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.definitions.iter().map(|d| d.bean_name()))
            .finish()
    }
}
