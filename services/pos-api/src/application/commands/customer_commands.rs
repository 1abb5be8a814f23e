//! 会员命令

use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{amount_in_range, non_blank, required_text};
use crate::domain::entities::NewCustomer;

/// 结账命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashoutCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "phone_number")]
    pub phone_number: Option<String>,
    pub total_price: Option<Decimal>,
}

impl CashoutCommand {
    pub fn total(&self) -> AppResult<Decimal> {
        match self.total_price {
            Some(total) => amount_in_range(total, "totalPrice"),
            None => Err(AppError::validation("totalPrice is required")),
        }
    }

    /// 会员邮箱（空串视为匿名）
    pub fn member_email(&self) -> Option<String> {
        non_blank(self.email.clone())
    }

    /// 首次结账时创建的会员资料
    pub fn new_customer(&self, email: String) -> AppResult<NewCustomer> {
        Ok(NewCustomer {
            name: required_text(self.name.clone(), "name")?,
            email,
            phone_number: non_blank(self.phone_number.clone()),
        })
    }
}

/// 新增会员命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCustomerCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl AddCustomerCommand {
    pub fn into_new_customer(self) -> AppResult<NewCustomer> {
        Ok(NewCustomer {
            name: required_text(self.name, "name")?,
            email: required_text(self.email, "email")?,
            phone_number: non_blank(self.phone_number),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cashout_reads_wire_names() {
        let cmd: CashoutCommand = serde_json::from_str(
            r#"{"name":"Ada","email":"","phone_number":"555","totalPrice":"12.50"}"#,
        )
        .unwrap();
        assert_eq!(cmd.total().unwrap(), Decimal::new(1250, 2));
        assert_eq!(cmd.member_email(), None);
        assert_eq!(cmd.phone_number.as_deref(), Some("555"));
    }

    #[test]
    fn test_cashout_requires_total() {
        assert!(CashoutCommand::default().total().is_err());
    }

    #[test]
    fn test_cashout_total_must_fit_amount_column() {
        let cmd = CashoutCommand {
            total_price: Some(Decimal::MAX),
            ..Default::default()
        };
        assert_eq!(cmd.total().unwrap_err().status_code(), 400);

        let cmd = CashoutCommand {
            total_price: Some(crate::application::commands::MAX_AMOUNT),
            ..Default::default()
        };
        assert!(cmd.total().is_ok());
    }
}
