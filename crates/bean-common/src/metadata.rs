//! 元数据定义
//!
//! 提供 Bean 和类型的元数据信息

use std::any::TypeId;

/// 类型信息
///
/// `is_trait_object` 区分抽象类型（trait object）与具体类型：
/// 抽象依赖需解析为实现类，具体依赖原样构造。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub module_path: String,
    /// 是否为 trait object
    pub is_trait_object: bool,
}

impl TypeInfo {
    /// 从具体类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        Self {
            name: Self::short_type_name::<T>(),
            id: TypeId::of::<T>(),
            module_path: std::any::type_name::<T>().to_string(),
            is_trait_object: false,
        }
    }

    /// 从 trait object 类型获取类型信息
    pub fn of_trait<T: ?Sized + 'static>() -> Self {
        Self {
            name: Self::short_type_name::<T>(),
            id: TypeId::of::<T>(),
            module_path: std::any::type_name::<T>().to_string(),
            is_trait_object: true,
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }

    fn short_type_name<T: ?Sized>() -> String {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
            .to_string()
    }
}

/// Bean 元数据
#[derive(Debug, Clone)]
pub struct BeanMetadata {
    /// 类型信息
    pub type_info: TypeInfo,
    /// Bean 名称
    pub name: String,
    /// Bean 描述
    pub description: Option<String>,
}

impl BeanMetadata {
    /// 创建新的 Bean 元数据
    pub fn new(type_info: TypeInfo, name: impl Into<String>) -> Self {
        Self {
            type_info,
            name: name.into(),
            description: None,
        }
    }

    /// 设置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
