//! 报表视图

use rust_decimal::Decimal;

/// 已完成订单金额（Z 报表）
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotal {
    pub order_id: i32,
    pub price: Decimal,
}

/// 按小时汇总销售额（X 报表）
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySales {
    pub hour: u32,
    pub total_sales: Decimal,
}

impl HourlySales {
    /// 小时显示为 "HH:00"
    pub fn hour_label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

/// 菜品销量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSales {
    pub name: String,
    pub category: String,
    pub count: i64,
}

/// 库存消耗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUsage {
    pub name: String,
    pub amount_used: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label_is_zero_padded() {
        let sales = HourlySales {
            hour: 9,
            total_sales: Decimal::ZERO,
        };
        assert_eq!(sales.hour_label(), "09:00");
        let sales = HourlySales {
            hour: 17,
            total_sales: Decimal::ZERO,
        };
        assert_eq!(sales.hour_label(), "17:00");
    }
}
