//! 会员仓储接口

use async_trait::async_trait;
use pos_errors::AppResult;

use crate::domain::entities::{Customer, NewCustomer};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// 新建会员（初始积分由调用方决定）
    async fn insert(&self, customer: &NewCustomer, points: i32) -> AppResult<Customer>;
}
