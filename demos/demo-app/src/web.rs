//! 表示层

use crate::repository::UserRepository;
use bean_macros::bean;
use std::sync::Arc;
use tracing::info;

/// 用户控制器
///
/// 通过接口依赖仓储，具体实现由容器在初始化时装配。
#[bean]
pub struct UserController {
    repository: Arc<dyn UserRepository>,
}

impl UserController {
    pub fn register(&self, account: &str) {
        self.repository.save(account);
        info!("注册用户: {account}");
    }

    pub fn list_users(&self) -> Vec<String> {
        self.repository.find_all()
    }

    pub fn repository(&self) -> &Arc<dyn UserRepository> {
        &self.repository
    }
}
