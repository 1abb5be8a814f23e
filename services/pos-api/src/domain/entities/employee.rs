//! 员工实体

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub employee_id: i32,
    pub employee_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub job_title: String,
    pub wage: Decimal,
    pub hire_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub employee_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub job_title: String,
    pub wage: Decimal,
    pub hire_date: NaiveDate,
}
