//! 员工仓储接口

use async_trait::async_trait;
use pos_errors::AppResult;
use rust_decimal::Decimal;

use crate::domain::entities::{Employee, NewEmployee};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// 未绑定 Google 账号的员工
    async fn list_unlinked(&self) -> AppResult<Vec<Employee>>;

    async fn insert(&self, employee: &NewEmployee) -> AppResult<i32>;

    async fn delete(&self, id: i32) -> AppResult<bool>;

    async fn update_wage(&self, id: i32, wage: Decimal) -> AppResult<Option<Employee>>;

    async fn link_google(&self, id: i32, google_id: &str) -> AppResult<Option<Employee>>;

    async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<Employee>>;

    /// 登录校验：邮箱与员工号同时匹配
    async fn find_by_credentials(&self, email: &str, id: i32) -> AppResult<Option<Employee>>;
}
