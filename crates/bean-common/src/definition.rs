//! Bean 定义
//!
//! 以静态声明的构造方式取代运行时反射：每个受管类型携带一份
//! [`BeanDefinition`]，按类型枚举其构造依赖并提供工厂闭包。

use crate::errors::DependencyError;
use crate::metadata::{BeanMetadata, TypeInfo};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 注册表持有的类型擦除单例指针
pub type SharedBean = Arc<dyn Any + Send + Sync>;

/// 构造过程抛出的底层错误
pub type BeanConstructionError = Box<dyn std::error::Error + Send + Sync>;

/// 注入构造函数的工厂函数类型
///
/// 入参为按参数声明顺序排列的已构建依赖实例。
pub type BeanFactoryFn =
    Arc<dyn Fn(Vec<SharedBean>) -> Result<SharedBean, BeanConstructionError> + Send + Sync>;

/// 默认（无参）构造函数的工厂函数类型
pub type DefaultFactoryFn =
    Arc<dyn Fn() -> Result<SharedBean, BeanConstructionError> + Send + Sync>;

/// 接口装箱函数类型
///
/// 将具体单例 `Arc<T>` 加宽为 `Arc<dyn Trait>` 后重新装入 [`SharedBean`]。
pub type InterfaceCastFn =
    Arc<dyn Fn(SharedBean) -> Result<SharedBean, DependencyError> + Send + Sync>;

/// 注入构造函数
///
/// 每个 Bean 至多声明一个；声明多个属于编写错误，选取时取首个。
#[derive(Clone)]
pub struct InjectionConstructor {
    /// 参数类型列表（具体类型或 trait object），顺序即调用顺序
    pub parameters: Vec<TypeInfo>,
    /// 工厂函数
    pub factory: BeanFactoryFn,
}

impl InjectionConstructor {
    /// 创建新的注入构造函数
    pub fn new(
        parameters: Vec<TypeInfo>,
        factory: impl Fn(Vec<SharedBean>) -> Result<SharedBean, BeanConstructionError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            parameters,
            factory: Arc::new(factory),
        }
    }
}

impl fmt::Debug for InjectionConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionConstructor")
            .field("parameters", &self.parameters)
            .field("factory", &"<factory>")
            .finish()
    }
}

/// 接口绑定
///
/// 声明 Bean *直接*实现的某个接口（trait object），不做传递式展开。
#[derive(Clone)]
pub struct InterfaceBinding {
    /// 接口类型信息
    pub interface: TypeInfo,
    /// 装箱函数
    pub cast: InterfaceCastFn,
}

impl InterfaceBinding {
    /// 创建新的接口绑定
    pub fn new<I: ?Sized + 'static>(cast: InterfaceCastFn) -> Self {
        Self {
            interface: TypeInfo::of_trait::<I>(),
            cast,
        }
    }
}

impl fmt::Debug for InterfaceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceBinding")
            .field("interface", &self.interface)
            .field("cast", &"<cast>")
            .finish()
    }
}

/// Bean 定义
#[derive(Clone)]
pub struct BeanDefinition {
    /// Bean 元数据
    pub metadata: BeanMetadata,
    /// 声明的注入构造函数（预期至多一个）
    pub injection_constructors: Vec<InjectionConstructor>,
    /// 默认（无参）构造函数
    pub default_constructor: Option<DefaultFactoryFn>,
    /// 直接实现的接口绑定列表
    pub interfaces: Vec<InterfaceBinding>,
}

impl BeanDefinition {
    /// 创建新的 Bean 定义
    pub fn new<T: Send + Sync + 'static>(name: impl Into<String>) -> Self {
        Self {
            metadata: BeanMetadata::new(TypeInfo::of::<T>(), name),
            injection_constructors: Vec::new(),
            default_constructor: None,
            interfaces: Vec::new(),
        }
    }

    /// Bean 的类型信息
    pub fn type_info(&self) -> &TypeInfo {
        &self.metadata.type_info
    }

    /// Bean 名称
    pub fn bean_name(&self) -> &str {
        &self.metadata.name
    }

    /// 添加注入构造函数
    pub fn with_injection_constructor(mut self, constructor: InjectionConstructor) -> Self {
        self.injection_constructors.push(constructor);
        self
    }

    /// 设置默认构造函数
    pub fn with_default_constructor(
        mut self,
        factory: impl Fn() -> Result<SharedBean, BeanConstructionError> + Send + Sync + 'static,
    ) -> Self {
        self.default_constructor = Some(Arc::new(factory));
        self
    }

    /// 添加接口绑定
    pub fn with_interface(mut self, binding: InterfaceBinding) -> Self {
        self.interfaces.push(binding);
        self
    }

    /// 检查是否直接实现指定接口
    pub fn implements_interface(&self, interface_id: TypeId) -> bool {
        self.interfaces
            .iter()
            .any(|binding| binding.interface.id == interface_id)
    }
}

impl fmt::Debug for BeanDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanDefinition")
            .field("metadata", &self.metadata)
            .field("injection_constructors", &self.injection_constructors)
            .field(
                "default_constructor",
                &self.default_constructor.as_ref().map(|_| "<factory>"),
            )
            .field("interfaces", &self.interfaces)
            .finish()
    }
}

/// 将类型擦除的单例指针还原为具体类型
pub fn downcast_bean<T: Send + Sync + 'static>(bean: SharedBean) -> Result<Arc<T>, DependencyError> {
    bean.downcast::<T>()
        .map_err(|_| DependencyError::BeanTypeMismatch {
            expected: std::any::type_name::<T>().to_string(),
        })
}

/// 将接口装箱后的单例指针还原为 `Arc<dyn Trait>`
///
/// 装箱形式为 `Arc<Arc<dyn Trait>>`，见 [`InterfaceCastFn`]。
pub fn downcast_trait_bean<I: ?Sized + Send + Sync + 'static>(
    bean: SharedBean,
) -> Result<Arc<I>, DependencyError> {
    let wrapped = bean
        .downcast::<Arc<I>>()
        .map_err(|_| DependencyError::BeanTypeMismatch {
            expected: std::any::type_name::<I>().to_string(),
        })?;
    Ok(wrapped.as_ref().clone())
}

/// 构造 `$concrete => $interface` 的接口绑定
///
/// 展开为一个将 `Arc<$concrete>` 加宽为 `Arc<$interface>` 的装箱闭包。
#[macro_export]
macro_rules! interface_binding {
    ($concrete:ty => $interface:ty) => {
        $crate::InterfaceBinding::new::<$interface>(::std::sync::Arc::new(
            |bean: $crate::SharedBean| {
                let concrete = bean.downcast::<$concrete>().map_err(|_| {
                    $crate::DependencyError::BeanTypeMismatch {
                        expected: ::std::any::type_name::<$concrete>().to_string(),
                    }
                })?;
                let widened: ::std::sync::Arc<$interface> = concrete;
                Ok(::std::sync::Arc::new(widened) as $crate::SharedBean)
            },
        ))
    };
}
