//! 库存实体

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub inventory_id: i32,
    pub inventory_item_name: String,
    pub quantity: i32,
    pub fill_level: i32,
    pub unit_cost_to_order: Decimal,
}

/// 库存水位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLevel {
    pub name: String,
    pub quantity: i32,
    pub fill_level: i32,
}

impl InventoryLevel {
    /// 补货阈值：满库存的 10%，四舍五入
    pub fn min_required_quantity(&self) -> i32 {
        // 结果绝对值不超过 fill_level，必然落在 i32 内
        (i64::from(self.fill_level) + 5).div_euclid(10) as i32
    }

    /// 库存不高于满库存的 10% 时需要补货
    pub fn needs_restock(&self) -> bool {
        i64::from(self.quantity) * 10 <= i64::from(self.fill_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(quantity: i32, fill_level: i32) -> InventoryLevel {
        InventoryLevel {
            name: "Rice".to_string(),
            quantity,
            fill_level,
        }
    }

    #[test]
    fn test_min_required_rounds_half_up() {
        assert_eq!(level(0, 100).min_required_quantity(), 10);
        assert_eq!(level(0, 45).min_required_quantity(), 5);
        assert_eq!(level(0, 44).min_required_quantity(), 4);
        assert_eq!(level(0, 0).min_required_quantity(), 0);
    }

    #[test]
    fn test_min_required_at_extreme_fill_level() {
        assert_eq!(level(0, i32::MAX).min_required_quantity(), 214_748_365);
        assert!(level(i32::MAX / 10, i32::MAX).needs_restock());
    }

    #[test]
    fn test_restock_threshold_is_inclusive() {
        assert!(level(10, 100).needs_restock());
        assert!(!level(11, 100).needs_restock());
        assert!(level(-3, 100).needs_restock());
    }
}
