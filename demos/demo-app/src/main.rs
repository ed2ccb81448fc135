//! # 演示应用程序
//!
//! 演示如何使用 Bean 容器：扫描受管 Bean、初始化单例依赖图、
//! 按具体类型与按接口查找。

use anyhow::Context;
use bean_abstractions::{BeanContainer, BeanScanner};
use bean_container::{BeanContainerImpl, BeanScannerImpl};
use std::sync::Arc;
use tracing::info;

mod repository;
mod web;

use repository::UserRepository;
use web::UserController;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("启动 Bean 容器演示应用");

    // 扫描本 crate 的受管 Bean 并初始化容器
    let scanner = BeanScannerImpl::new();
    let candidates = scanner.scan(&["demo_app"]).context("扫描 Bean 定义失败")?;
    let mut container = BeanContainerImpl::new();
    container
        .initialize(candidates)
        .context("初始化 Bean 容器失败")?;

    for metadata in container.registered_beans() {
        info!("已注册 Bean: {} ({})", metadata.name, metadata.type_info.module_path);
    }

    // 控制器由容器装配，其仓储依赖与按接口查找的是同一个单例
    let controller = container.get_bean::<UserController>()?;
    controller.register("alice");
    controller.register("bob");

    let repository = container.get_bean_by_trait::<dyn UserRepository>()?;
    assert!(Arc::ptr_eq(&repository, controller.repository()));
    info!("当前用户: {:?}", controller.list_users());

    info!("演示完成");
    Ok(())
}
