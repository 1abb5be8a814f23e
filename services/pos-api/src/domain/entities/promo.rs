use rust_decimal::Decimal;
use serde::Serialize;

/// 促销（只展示在售菜品的促销）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Promo {
    pub promo_id: i32,
    pub menu_item_name: String,
    pub discount_amount: Decimal,
}
