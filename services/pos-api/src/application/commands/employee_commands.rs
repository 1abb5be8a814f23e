//! 员工命令

use chrono::{NaiveDate, Utc};
use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{amount_in_range, non_blank, required_id, required_text};
use crate::domain::entities::NewEmployee;

/// 新增员工命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddEmployeeCommand {
    pub employee_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub job_title: Option<String>,
    pub wage: Option<Decimal>,
    pub hire_date: Option<NaiveDate>,
}

impl AddEmployeeCommand {
    pub fn into_new_employee(self) -> AppResult<NewEmployee> {
        let wage = self
            .wage
            .ok_or_else(|| AppError::validation("wage is required"))?;
        if wage <= Decimal::ZERO {
            return Err(AppError::validation("wage must be positive"));
        }
        let wage = amount_in_range(wage, "wage")?;

        Ok(NewEmployee {
            employee_name: required_text(self.employee_name, "employee_name")?,
            email: required_text(self.email, "email")?,
            phone_number: non_blank(self.phone_number),
            job_title: required_text(self.job_title, "job_title")?,
            wage,
            hire_date: self.hire_date.unwrap_or_else(|| Utc::now().date_naive()),
        })
    }
}

/// 调整工资命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetWageCommand {
    pub id: Option<i32>,
    pub wage: Option<Decimal>,
}

impl SetWageCommand {
    pub fn validate(&self) -> AppResult<(i32, Decimal)> {
        match (self.id, self.wage) {
            (Some(id), Some(wage)) if id > 0 && wage > Decimal::ZERO => {
                Ok((id, amount_in_range(wage, "wage")?))
            }
            _ => Err(AppError::validation("Employee ID and wage are required")),
        }
    }
}

/// 绑定 Google 账号命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkGoogleCommand {
    pub google_id: Option<String>,
    pub employee_id: Option<i32>,
}

impl LinkGoogleCommand {
    pub fn validate(self) -> AppResult<(i32, String)> {
        let employee_id = required_id(self.employee_id, "employeeId")?;
        let google_id = required_text(self.google_id, "googleId")?;
        Ok((employee_id, google_id))
    }
}

/// 员工号既可能是数字也可能是字符串
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EmployeeIdInput {
    Number(i64),
    Text(String),
}

impl EmployeeIdInput {
    pub fn to_id(&self) -> Option<i32> {
        match self {
            EmployeeIdInput::Number(n) => i32::try_from(*n).ok(),
            EmployeeIdInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// 登录命令（邮箱 + 员工号的查找，不涉及密码）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginCommand {
    pub email: Option<String>,
    pub employee_id: Option<EmployeeIdInput>,
}

impl LoginCommand {
    /// 缺少或无法解析的凭据一律视为登录失败
    pub fn credentials(self) -> AppResult<(String, i32)> {
        let email = non_blank(self.email);
        let id = self.employee_id.as_ref().and_then(EmployeeIdInput::to_id);
        match (email, id) {
            (Some(email), Some(id)) => Ok((email, id)),
            _ => Err(AppError::unauthorized("Invalid credentials")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wage_must_be_positive() {
        let cmd = SetWageCommand {
            id: Some(1),
            wage: Some(Decimal::ZERO),
        };
        assert!(cmd.validate().is_err());
        let cmd = SetWageCommand {
            id: None,
            wage: Some(Decimal::new(1500, 2)),
        };
        assert!(cmd.validate().is_err());
        let cmd = SetWageCommand {
            id: Some(1),
            wage: Some(Decimal::new(1500, 2)),
        };
        assert_eq!(cmd.validate().unwrap(), (1, Decimal::new(1500, 2)));
    }

    #[test]
    fn test_login_accepts_numeric_or_text_id() {
        let cmd: LoginCommand =
            serde_json::from_str(r#"{"email":"a@wok.com","employee_id":"7"}"#).unwrap();
        assert_eq!(cmd.credentials().unwrap(), ("a@wok.com".to_string(), 7));

        let cmd: LoginCommand =
            serde_json::from_str(r#"{"email":"a@wok.com","employee_id":7}"#).unwrap();
        assert_eq!(cmd.credentials().unwrap().1, 7);

        let cmd: LoginCommand =
            serde_json::from_str(r#"{"email":"a@wok.com","employee_id":"abc"}"#).unwrap();
        assert_eq!(cmd.credentials().unwrap_err().status_code(), 401);
    }

    #[test]
    fn test_add_employee_requires_name() {
        let cmd = AddEmployeeCommand {
            email: Some("cook@wok.com".to_string()),
            job_title: Some("Cook".to_string()),
            wage: Some(Decimal::new(1600, 2)),
            ..Default::default()
        };
        assert!(cmd.into_new_employee().is_err());
    }
}
