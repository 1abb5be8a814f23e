//! 订单命令

use pos_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{amount_in_range, non_blank, required_id};
use crate::domain::entities::{NewOrder, OrderLine};
use crate::domain::enums::OrderStatus;

/// 未填写的组合类型/规格
pub const NOT_APPLICABLE: &str = "N/A";

/// 订单总价与行价合计允许的误差
const PRICE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// 下单命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceOrderCommand {
    #[serde(default)]
    pub employee_id: Option<i32>,
    #[serde(default)]
    pub order_price: Option<Decimal>,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub order_items: Vec<CartLine>,
}

/// 购物车行
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub menu_item_id: Option<i32>,
    #[serde(default)]
    pub combo: Option<bool>,
    #[serde(default)]
    pub combo_type: Option<String>,
    #[serde(default)]
    pub item_size: Option<String>,
    #[serde(default)]
    pub recorded_quantity: Option<i32>,
    /// 行金额（可选）
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl PlaceOrderCommand {
    /// 校验并填充默认值
    ///
    /// 所有行都带价格时，订单总价取行价合计；提交的总价与合计相差超过一分则拒绝
    pub fn into_new_order(self) -> AppResult<NewOrder> {
        if self.order_items.is_empty() {
            return Err(AppError::validation("Order must contain at least one item"));
        }

        let status = match non_blank(self.order_status) {
            Some(value) => value.parse::<OrderStatus>()?,
            None => OrderStatus::default(),
        };

        let mut line_total = Some(Decimal::ZERO);
        let mut lines = Vec::with_capacity(self.order_items.len());
        for (index, item) in self.order_items.into_iter().enumerate() {
            let position = index + 1;
            let menu_item_id =
                required_id(item.menu_item_id, &format!("order_items[{}].menu_item_id", position))?;

            let recorded_quantity = item.recorded_quantity.unwrap_or(1);
            if recorded_quantity < 1 {
                return Err(AppError::validation(format!(
                    "order_items[{}].recorded_quantity must be at least 1",
                    position
                )));
            }

            let price = item
                .price
                .map(|price| amount_in_range(price, &format!("order_items[{}].price", position)))
                .transpose()?;
            line_total = match (line_total, price) {
                (Some(sum), Some(price)) => Some(
                    sum.checked_add(price)
                        .ok_or_else(|| AppError::validation("Line total is out of range"))?,
                ),
                _ => None,
            };

            lines.push(OrderLine {
                menu_item_id,
                combo: item.combo.unwrap_or(false),
                combo_type: non_blank(item.combo_type)
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
                item_size: non_blank(item.item_size).unwrap_or_else(|| NOT_APPLICABLE.to_string()),
                recorded_quantity,
            });
        }

        let supplied = self
            .order_price
            .map(|price| amount_in_range(price, "order_price"))
            .transpose()?;
        let total = match (line_total, supplied) {
            (Some(sum), Some(supplied)) => {
                let diff = sum
                    .checked_sub(supplied)
                    .ok_or_else(|| AppError::validation("Line total is out of range"))?;
                if diff.abs() > PRICE_TOLERANCE {
                    return Err(AppError::validation(format!(
                        "order_price {} does not match line total {}",
                        supplied, sum
                    )));
                }
                sum
            }
            (Some(sum), None) => sum,
            (None, Some(supplied)) => supplied,
            (None, None) => {
                return Err(AppError::validation(
                    "order_price is required when items carry no price",
                ));
            }
        };
        let total = amount_in_range(total, "order_price")?;

        Ok(NewOrder {
            employee_id: self.employee_id,
            total,
            status,
            lines,
        })
    }
}

/// 更新订单状态命令
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusCommand {
    pub order_id: i32,
    pub new_status: OrderStatus,
}

/// 删除订单行命令
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteOrderItemCommand {
    #[serde(default, rename = "orderId")]
    pub order_id: Option<i32>,
    #[serde(default)]
    pub menu_item_id: Option<i32>,
}

impl DeleteOrderItemCommand {
    pub fn validate(&self) -> AppResult<(i32, i32)> {
        match (self.order_id, self.menu_item_id) {
            (Some(order_id), Some(menu_item_id)) if order_id > 0 && menu_item_id > 0 => {
                Ok((order_id, menu_item_id))
            }
            _ => Err(AppError::validation(
                "Both order_id and menu_item_id are required",
            )),
        }
    }
}
