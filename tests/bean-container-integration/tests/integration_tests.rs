//! 扫描、宏展开与容器装配的端到端集成测试

use bean_abstractions::{BeanContainer, BeanScanner, ContainerState};
use bean_container::{BeanContainerImpl, BeanScannerImpl};
use bean_container_integration_tests::billing::{BillingGateway, BillingService};
use bean_container_integration_tests::notify::Notifier;
use bean_container_integration_tests::orders::{OrderRepository, OrderService, SqlOrderRepository};
use std::sync::Arc;

fn initialized_container(base_modules: &[&str]) -> BeanContainerImpl {
    let scanner = BeanScannerImpl::new();
    let candidates = scanner.scan(base_modules).unwrap();
    let mut container = BeanContainerImpl::new();
    container.initialize(candidates).unwrap();
    container
}

#[test]
fn scan_filters_by_module_path() {
    let scanner = BeanScannerImpl::new();

    let orders = scanner
        .scan(&["bean_container_integration_tests::orders"])
        .unwrap();
    assert_eq!(orders.len(), 2);

    let billing = scanner
        .scan(&["bean_container_integration_tests::billing"])
        .unwrap();
    assert_eq!(billing.len(), 2);

    let everything = scanner.scan(&["bean_container_integration_tests"]).unwrap();
    assert_eq!(everything.len(), 6);
}

#[test]
fn scan_of_unknown_module_yields_empty_set() {
    let scanner = BeanScannerImpl::new();
    let candidates = scanner.scan(&["no_such_crate"]).unwrap();
    assert!(candidates.is_empty());

    // 空候选集合的初始化也应成功
    let mut container = BeanContainerImpl::new();
    container.initialize(candidates).unwrap();
    assert_eq!(container.state(), ContainerState::Ready);
    assert!(container.registered_beans().is_empty());
}

#[test]
fn macro_declared_beans_are_wired_through_interface() -> anyhow::Result<()> {
    let container = initialized_container(&["bean_container_integration_tests::orders"]);

    let service = container.get_bean::<OrderService>()?;
    assert_eq!(service.pending_orders(), 3);

    // 服务持有的依赖与按接口、按具体类型查找均为同一底层实例
    let via_trait = container.get_bean_by_trait::<dyn OrderRepository>()?;
    let concrete = container.get_bean::<SqlOrderRepository>()?;
    assert!(Arc::ptr_eq(service.repository(), &via_trait));
    assert_eq!(
        Arc::as_ptr(&via_trait) as *const (),
        Arc::as_ptr(&concrete) as *const ()
    );
    Ok(())
}

#[test]
fn concrete_dependency_and_default_construction() -> anyhow::Result<()> {
    let container = initialized_container(&["bean_container_integration_tests::billing"]);

    let service = container.get_bean::<BillingService>()?;
    let gateway = container.get_bean::<BillingGateway>()?;
    assert!(Arc::ptr_eq(service.gateway(), &gateway));
    assert_eq!(gateway.endpoint(), None);
    Ok(())
}

#[test]
fn bean_names_follow_declaration() {
    use bean_common::Bean;

    let container = initialized_container(&["bean_container_integration_tests::billing"]);

    let service = container.get_bean::<BillingService>().unwrap();
    assert_eq!(service.bean_name(), "invoice_service");

    let gateway = container.get_bean::<BillingGateway>().unwrap();
    assert_eq!(gateway.bean_name(), "billing_gateway");
}

#[test]
fn ambiguous_interface_takes_first_in_scan_order() {
    let container = initialized_container(&["bean_container_integration_tests::notify"]);

    // 候选集合按 (模块路径, Bean 名称) 排序，alpha_notifier 在前
    let notifier = container.get_bean_by_trait::<dyn Notifier>().unwrap();
    assert_eq!(notifier.channel(), "alpha");
}

#[test]
fn containers_from_same_registry_are_independent() {
    let first = initialized_container(&["bean_container_integration_tests::orders"]);
    let second = initialized_container(&["bean_container_integration_tests::orders"]);

    let service_a = first.get_bean::<OrderService>().unwrap();
    let service_b = second.get_bean::<OrderService>().unwrap();
    assert!(!Arc::ptr_eq(&service_a, &service_b));
}
