//! 库存命令

use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{amount_in_range, required_id};

/// 更新采购单价命令
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitCostCommand {
    pub inventory_id: Option<i32>,
    pub new_unit_cost: Option<Decimal>,
}

impl UpdateUnitCostCommand {
    pub fn validate(&self) -> AppResult<(i32, Decimal)> {
        let id = required_id(self.inventory_id, "inventoryId")?;
        match self.new_unit_cost {
            Some(cost) => Ok((id, amount_in_range(cost, "newUnitCost")?)),
            None => Err(AppError::validation(
                "Invalid request. Missing inventoryId or newUnitCost.",
            )),
        }
    }
}

/// 删除库存项命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteInventoryItemCommand {
    pub name: Option<String>,
}
