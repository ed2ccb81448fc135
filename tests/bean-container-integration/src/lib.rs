//! 容器与宏的端到端测试夹具
//!
//! Bean 按业务模块分布，供集成测试验证扫描器的模块路径过滤
//! 与容器的依赖装配。

/// 订单模块：接口依赖注入
pub mod orders {
    use bean_macros::bean;
    use std::sync::Arc;

    pub trait OrderRepository: Send + Sync {
        fn order_count(&self) -> usize;
    }

    #[bean(implements(OrderRepository))]
    pub struct SqlOrderRepository;

    impl OrderRepository for SqlOrderRepository {
        fn order_count(&self) -> usize {
            3
        }
    }

    #[bean]
    pub struct OrderService {
        repository: Arc<dyn OrderRepository>,
    }

    impl OrderService {
        pub fn pending_orders(&self) -> usize {
            self.repository.order_count()
        }

        pub fn repository(&self) -> &Arc<dyn OrderRepository> {
            &self.repository
        }
    }
}

/// 计费模块：具体类型依赖与 Default 构造
pub mod billing {
    use bean_macros::bean;
    use std::sync::Arc;

    #[bean(default)]
    #[derive(Default)]
    pub struct BillingGateway {
        endpoint: Option<String>,
    }

    impl BillingGateway {
        pub fn endpoint(&self) -> Option<&str> {
            self.endpoint.as_deref()
        }
    }

    #[bean(name = "invoice_service")]
    pub struct BillingService {
        gateway: Arc<BillingGateway>,
    }

    impl BillingService {
        pub fn gateway(&self) -> &Arc<BillingGateway> {
            &self.gateway
        }
    }
}

/// 通知模块：同一接口的多个实现
pub mod notify {
    use bean_macros::bean;

    pub trait Notifier: Send + Sync {
        fn channel(&self) -> &'static str;
    }

    #[bean(implements(Notifier))]
    pub struct AlphaNotifier;

    impl Notifier for AlphaNotifier {
        fn channel(&self) -> &'static str {
            "alpha"
        }
    }

    #[bean(implements(Notifier))]
    pub struct ZetaNotifier;

    impl Notifier for ZetaNotifier {
        fn channel(&self) -> &'static str {
            "zeta"
        }
    }
}
