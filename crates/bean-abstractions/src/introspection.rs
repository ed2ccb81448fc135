//! Bean 内省工具
//!
//! 作用于单个定义或候选集合的无状态辅助函数：选取注入构造函数，
//! 以及把抽象依赖类型解析为候选集合中的具体实现类型。

use bean_common::{
    BeanDefinition, CandidateBeanSet, DependencyError, DependencyResult, InjectionConstructor,
    InterfaceBinding, TypeInfo,
};
use std::any::TypeId;
use tracing::warn;

/// 选取 Bean 的注入构造函数
///
/// 未声明时返回 `None`，容器随后回退到默认（无参）构造。
/// 声明多个属于编写错误，此处保留"取首个"的行为并告警，
/// 不做唯一性校验。
pub fn select_injection_constructor(
    definition: &BeanDefinition,
) -> Option<&InjectionConstructor> {
    let constructors = &definition.injection_constructors;
    if constructors.len() > 1 {
        warn!(
            "Bean {} 声明了 {} 个注入构造函数，取首个",
            definition.bean_name(),
            constructors.len()
        );
    }
    constructors.first()
}

/// 将请求类型解析为具体实现类型
///
/// 非 trait object 类型本身即具体类型，原样返回，与候选集合内容无关。
/// trait object 类型按集合迭代顺序查找*直接*声明实现该接口的候选：
/// 零个实现是致命配置错误；多个实现时取首个并告警（歧义不拒绝）。
pub fn resolve_concrete_type(
    requested: &TypeInfo,
    candidates: &CandidateBeanSet,
) -> DependencyResult<TypeInfo> {
    if !requested.is_trait_object {
        return Ok(requested.clone());
    }

    let mut implementers = candidates
        .iter()
        .filter(|definition| definition.implements_interface(requested.id));

    let first = implementers
        .next()
        .ok_or_else(|| DependencyError::NoImplementingBean {
            interface: requested.module_path.clone(),
        })?;

    let extra: Vec<&str> = implementers.map(BeanDefinition::bean_name).collect();
    if !extra.is_empty() {
        warn!(
            "接口 {} 存在多个实现 Bean: {} 与 {:?}，取首个",
            requested.module_path,
            first.bean_name(),
            extra
        );
    }

    Ok(first.type_info().clone())
}

/// 查找定义上指定接口的绑定
pub fn find_interface_binding(
    definition: &BeanDefinition,
    interface_id: TypeId,
) -> Option<&InterfaceBinding> {
    definition
        .interfaces
        .iter()
        .find(|binding| binding.interface.id == interface_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bean_common::{interface_binding, InjectionConstructor, SharedBean};
    use std::sync::Arc;

    trait Storage: Send + Sync {
        fn kind(&self) -> &'static str;
    }

    trait Unbound: Send + Sync {}

    #[derive(Default)]
    struct MemStorage;

    impl Storage for MemStorage {
        fn kind(&self) -> &'static str {
            "mem"
        }
    }

    #[derive(Default)]
    struct DiskStorage;

    impl Storage for DiskStorage {
        fn kind(&self) -> &'static str {
            "disk"
        }
    }

    fn mem_storage_definition() -> BeanDefinition {
        BeanDefinition::new::<MemStorage>("mem_storage")
            .with_default_constructor(|| Ok(Arc::new(MemStorage) as SharedBean))
            .with_interface(interface_binding!(MemStorage => dyn Storage))
    }

    fn disk_storage_definition() -> BeanDefinition {
        BeanDefinition::new::<DiskStorage>("disk_storage")
            .with_default_constructor(|| Ok(Arc::new(DiskStorage) as SharedBean))
            .with_interface(interface_binding!(DiskStorage => dyn Storage))
    }

    #[test]
    fn concrete_type_resolves_to_itself_regardless_of_set() {
        let requested = TypeInfo::of::<MemStorage>();
        let resolved = resolve_concrete_type(&requested, &CandidateBeanSet::empty()).unwrap();
        assert_eq!(resolved.id, requested.id);
        assert!(!resolved.is_trait_object);
    }

    #[test]
    fn interface_with_no_implementer_fails() {
        let requested = TypeInfo::of_trait::<dyn Unbound>();
        let err = resolve_concrete_type(&requested, &CandidateBeanSet::empty()).unwrap_err();
        match err {
            DependencyError::NoImplementingBean { interface } => {
                assert!(interface.contains("Unbound"));
            }
            other => panic!("意外的错误类型: {other}"),
        }
    }

    #[test]
    fn interface_resolves_to_single_implementer() {
        let candidates =
            CandidateBeanSet::from_definitions(vec![mem_storage_definition()]).unwrap();
        let requested = TypeInfo::of_trait::<dyn Storage>();
        let resolved = resolve_concrete_type(&requested, &candidates).unwrap();
        assert_eq!(resolved.id, TypeInfo::of::<MemStorage>().id);
    }

    #[test]
    fn ambiguous_interface_takes_first_in_registration_order() {
        // 两个实现均合法：按注册顺序取首个，顺序在此固定为 disk 在前
        let candidates = CandidateBeanSet::from_definitions(vec![
            disk_storage_definition(),
            mem_storage_definition(),
        ])
        .unwrap();
        let requested = TypeInfo::of_trait::<dyn Storage>();
        let resolved = resolve_concrete_type(&requested, &candidates).unwrap();
        assert_eq!(resolved.id, TypeInfo::of::<DiskStorage>().id);
    }

    #[test]
    fn unmarked_definition_has_no_injection_constructor() {
        let definition = mem_storage_definition();
        assert!(select_injection_constructor(&definition).is_none());
    }

    #[test]
    fn first_injection_constructor_wins() {
        let first = InjectionConstructor::new(Vec::new(), |_| Ok(Arc::new(MemStorage) as SharedBean));
        let second =
            InjectionConstructor::new(vec![TypeInfo::of::<DiskStorage>()], |_| {
                Ok(Arc::new(MemStorage) as SharedBean)
            });
        let definition = BeanDefinition::new::<MemStorage>("mem_storage")
            .with_injection_constructor(first)
            .with_injection_constructor(second);

        let selected = select_injection_constructor(&definition).unwrap();
        assert!(selected.parameters.is_empty());
    }

    #[test]
    fn binding_lookup_matches_declared_interface() {
        let definition = mem_storage_definition();
        let storage_id = TypeInfo::of_trait::<dyn Storage>().id;
        assert!(find_interface_binding(&definition, storage_id).is_some());
        let unbound_id = TypeInfo::of_trait::<dyn Unbound>().id;
        assert!(find_interface_binding(&definition, unbound_id).is_none());
    }
}
