//! Bean 容器抽象接口
//!
//! 提供容器的核心抽象

use bean_common::{
    downcast_bean, downcast_trait_bean, Bean, BeanMetadata, CandidateBeanSet, DependencyResult,
    SharedBean, TypeInfo,
};
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// 容器状态
///
/// 只允许 `Uninitialized -> Initializing -> Ready` 单向迁移，
/// 就绪后不再回到初始化状态。初始化失败时尚未提交任何单例，
/// 容器回到 `Uninitialized`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// 未初始化
    Uninitialized,
    /// 初始化中
    Initializing,
    /// 就绪
    Ready,
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerState::Uninitialized => write!(f, "Uninitialized"),
            ContainerState::Initializing => write!(f, "Initializing"),
            ContainerState::Ready => write!(f, "Ready"),
        }
    }
}

/// Bean 容器 trait
///
/// 提供单例 Bean 图的初始化与查找。初始化在启动期单线程执行一次；
/// 进入 [`ContainerState::Ready`] 后注册表不可变，可被任意多个线程
/// 无锁并发读取。
pub trait BeanContainer: Send + Sync {
    /// 使用候选集合初始化容器
    ///
    /// 对集合中每个尚未注册的候选执行递归构建。任何构建失败都会
    /// 整体中止初始化，不存在部分成功的容器；失败后容器回到
    /// 未初始化状态。
    fn initialize(&mut self, candidates: CandidateBeanSet) -> DependencyResult<()>;

    /// 按请求类型查找 Bean（类型擦除形式）
    ///
    /// trait object 类型先经具体类型解析，再从注册表取回单例。
    fn get_bean_dyn(&self, requested: &TypeInfo) -> DependencyResult<SharedBean>;

    /// 当前容器状态
    fn state(&self) -> ContainerState;

    /// 检查指定具体类型是否已注册
    fn contains_bean(&self, type_id: TypeId) -> bool;

    /// 获取所有已注册 Bean 的元数据
    fn registered_beans(&self) -> Vec<BeanMetadata>;

    /// 按具体类型查找 Bean
    fn get_bean<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Bean,
        Self: Sized,
    {
        downcast_bean(self.get_bean_dyn(&TypeInfo::of::<T>())?)
    }

    /// 按接口（trait object）查找 Bean
    ///
    /// 返回的 `Arc<dyn Trait>` 与具体类型查找到的是同一个底层实例。
    fn get_bean_by_trait<I>(&self) -> DependencyResult<Arc<I>>
    where
        I: ?Sized + Send + Sync + 'static,
        Self: Sized,
    {
        downcast_trait_bean(self.get_bean_dyn(&TypeInfo::of_trait::<I>())?)
    }
}
