//! 数据访问层

use bean_macros::bean;
use parking_lot::RwLock;
use std::sync::Arc;

/// 进程内共享的数据存储
///
/// 由容器构建一次并作为普通构造依赖注入，不提供全局访问入口。
#[bean(default)]
#[derive(Default)]
pub struct Database {
    accounts: RwLock<Vec<String>>,
}

impl Database {
    pub fn insert(&self, account: &str) {
        self.accounts.write().push(account.to_string());
    }

    pub fn select_all(&self) -> Vec<String> {
        self.accounts.read().clone()
    }
}

/// 用户仓储接口
pub trait UserRepository: Send + Sync {
    fn save(&self, account: &str);
    fn find_all(&self) -> Vec<String>;
}

/// 基于共享数据存储的用户仓储
#[bean(implements(UserRepository))]
pub struct DbUserRepository {
    database: Arc<Database>,
}

impl UserRepository for DbUserRepository {
    fn save(&self, account: &str) {
        self.database.insert(account);
    }

    fn find_all(&self) -> Vec<String> {
        self.database.select_all()
    }
}
