//! 命令

mod customer_commands;
mod employee_commands;
mod inventory_commands;
mod menu_commands;
mod order_commands;

pub use customer_commands::*;
pub use employee_commands::*;
pub use inventory_commands::*;
pub use menu_commands::*;
pub use order_commands::*;

use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;

/// `NUMERIC(10, 2)` 金额列能存下的最大值
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 2);

/// 去掉首尾空白，空串视为未提供
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 必填文本字段
pub(crate) fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    non_blank(value).ok_or_else(|| AppError::validation(format!("{} is required", field)))
}

/// 必填正整数 ID
pub(crate) fn required_id(value: Option<i32>, field: &str) -> AppResult<i32> {
    match value {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(AppError::validation(format!("{} must be positive, got {}", field, id))),
        None => Err(AppError::validation(format!("{} is required", field))),
    }
}

/// 金额字段：不能为负，不能超出金额列范围
pub(crate) fn amount_in_range(value: Decimal, field: &str) -> AppResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(AppError::validation(format!("{} must not be negative", field)));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} must not exceed {}",
            field, MAX_AMOUNT
        )));
    }
    Ok(value)
}
