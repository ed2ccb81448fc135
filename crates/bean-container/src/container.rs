//! Bean 容器具体实现

use bean_abstractions::introspection::{
    find_interface_binding, resolve_concrete_type, select_injection_constructor,
};
use bean_abstractions::{BeanContainer, ContainerState, ResolveContext};
use bean_common::{
    BeanMetadata, CandidateBeanSet, DependencyError, DependencyResult, SharedBean, TypeInfo,
};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::{debug, info};

/// Bean 容器实现
///
/// 持有单例注册表并负责依赖图的递归构建。初始化成功后注册表条目
/// 不再替换或移除，读取无需加锁。
pub struct BeanContainerImpl {
    /// 容器状态
    state: ContainerState,
    /// 初始化时传入的候选集合，就绪后用于接口查找
    candidates: CandidateBeanSet,
    /// 单例注册表，按具体类型ID索引
    singletons: HashMap<TypeId, SharedBean>,
}

impl BeanContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self {
            state: ContainerState::Uninitialized,
            candidates: CandidateBeanSet::empty(),
            singletons: HashMap::new(),
        }
    }

    /// 递归构建指定具体类型的 Bean
    ///
    /// 对应的构建步骤：注册表命中即返回（共享依赖不重复构建）；
    /// 解析链命中即报循环依赖；否则压链、构造、弹链、入表。
    fn build_bean(
        candidates: &CandidateBeanSet,
        singletons: &mut HashMap<TypeId, SharedBean>,
        type_info: &TypeInfo,
        context: &mut ResolveContext,
    ) -> DependencyResult<SharedBean> {
        if let Some(existing) = singletons.get(&type_info.id) {
            return Ok(existing.clone());
        }

        context.push_type(type_info)?;
        let constructed = Self::construct_bean(candidates, singletons, type_info, context);
        context.pop_type();

        let instance = constructed?;
        singletons.insert(type_info.id, instance.clone());
        debug!("注册单例 Bean: {}", type_info.module_path);
        Ok(instance)
    }

    /// 选择构造函数并实例化
    ///
    /// 优先使用注入构造函数，否则回退到默认构造；两者皆无视为
    /// 实例化错误。参数针对*完整*候选集合解析，而非局部邻居。
    fn construct_bean(
        candidates: &CandidateBeanSet,
        singletons: &mut HashMap<TypeId, SharedBean>,
        type_info: &TypeInfo,
        context: &mut ResolveContext,
    ) -> DependencyResult<SharedBean> {
        let definition =
            candidates
                .get(type_info.id)
                .ok_or_else(|| DependencyError::DefinitionMissing {
                    type_name: type_info.module_path.clone(),
                })?;

        if let Some(constructor) = select_injection_constructor(definition) {
            let mut arguments = Vec::with_capacity(constructor.parameters.len());
            for parameter in &constructor.parameters {
                let concrete = resolve_concrete_type(parameter, candidates)?;
                let instance = Self::build_bean(candidates, singletons, &concrete, context)?;
                let argument = if parameter.is_trait_object {
                    Self::widen_to_interface(candidates, &concrete, parameter, instance)?
                } else {
                    instance
                };
                arguments.push(argument);
            }
            (constructor.factory)(arguments).map_err(|source| {
                DependencyError::InstantiationFailed {
                    type_name: type_info.module_path.clone(),
                    source,
                }
            })
        } else if let Some(default_constructor) = &definition.default_constructor {
            (default_constructor)().map_err(|source| DependencyError::InstantiationFailed {
                type_name: type_info.module_path.clone(),
                source,
            })
        } else {
            Err(DependencyError::NoUsableConstructor {
                type_name: type_info.module_path.clone(),
            })
        }
    }

    /// 通过接口绑定把具体单例加宽为 trait object
    fn widen_to_interface(
        candidates: &CandidateBeanSet,
        concrete: &TypeInfo,
        interface: &TypeInfo,
        instance: SharedBean,
    ) -> DependencyResult<SharedBean> {
        let implementer =
            candidates
                .get(concrete.id)
                .ok_or_else(|| DependencyError::DefinitionMissing {
                    type_name: concrete.module_path.clone(),
                })?;
        let binding = find_interface_binding(implementer, interface.id).ok_or_else(|| {
            DependencyError::BindingMissing {
                interface: interface.module_path.clone(),
                type_name: concrete.module_path.clone(),
            }
        })?;
        (binding.cast)(instance)
    }
}

impl Default for BeanContainerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl BeanContainer for BeanContainerImpl {
    fn initialize(&mut self, candidates: CandidateBeanSet) -> DependencyResult<()> {
        if self.state != ContainerState::Uninitialized {
            return Err(DependencyError::AlreadyInitialized);
        }
        self.state = ContainerState::Initializing;
        info!("开始初始化 Bean 容器，共 {} 个候选 Bean", candidates.len());

        let mut singletons = HashMap::with_capacity(candidates.len());
        let mut context = ResolveContext::new();
        for definition in candidates.iter() {
            let type_info = definition.type_info();
            if singletons.contains_key(&type_info.id) {
                continue;
            }
            if let Err(error) =
                Self::build_bean(&candidates, &mut singletons, type_info, &mut context)
            {
                // 尚未提交任何单例，回到未初始化状态，允许用修正后的候选集合重试
                self.state = ContainerState::Uninitialized;
                return Err(error);
            }
        }

        self.singletons = singletons;
        self.candidates = candidates;
        self.state = ContainerState::Ready;
        info!("Bean 容器初始化完成，注册了 {} 个单例", self.singletons.len());
        Ok(())
    }

    fn get_bean_dyn(&self, requested: &TypeInfo) -> DependencyResult<SharedBean> {
        if self.state != ContainerState::Ready {
            return Err(DependencyError::ContainerNotReady {
                state: self.state.to_string(),
            });
        }

        let concrete = resolve_concrete_type(requested, &self.candidates)?;
        let singleton = self
            .singletons
            .get(&concrete.id)
            .cloned()
            .ok_or_else(|| DependencyError::BeanNotFound {
                type_name: concrete.module_path.clone(),
            })?;

        if requested.is_trait_object {
            Self::widen_to_interface(&self.candidates, &concrete, requested, singleton)
        } else {
            Ok(singleton)
        }
    }

    fn state(&self) -> ContainerState {
        self.state
    }

    fn contains_bean(&self, type_id: TypeId) -> bool {
        self.singletons.contains_key(&type_id)
    }

    fn registered_beans(&self) -> Vec<BeanMetadata> {
        self.candidates
            .iter()
            .filter(|definition| self.singletons.contains_key(&definition.type_info().id))
            .map(|definition| definition.metadata.clone())
            .collect()
    }
}
