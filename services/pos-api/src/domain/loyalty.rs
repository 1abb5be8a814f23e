//! 会员积分规则
//!
//! 每单积 5 分；累计满 25 分时本单打九折并扣除 25 分

use rust_decimal::{Decimal, RoundingStrategy};

/// 每单获得积分
pub const POINTS_PER_ORDER: i32 = 5;
/// 兑换折扣所需积分
pub const REDEEM_THRESHOLD: i32 = 25;
/// 兑换后的价格系数（九折）
pub const DISCOUNTED_RATE: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// 结账积分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyOutcome {
    pub points: i32,
    pub discount_applied: bool,
}

impl LoyaltyOutcome {
    /// 匿名顾客：不积分不打折
    pub fn anonymous() -> Self {
        Self {
            points: 0,
            discount_applied: false,
        }
    }

    /// 新会员：首单积分，不打折
    pub fn new_member() -> Self {
        Self {
            points: POINTS_PER_ORDER,
            discount_applied: false,
        }
    }

    /// 老会员：先积分，达到阈值则兑换
    pub fn accrue(current_points: i32) -> Self {
        let points = current_points.saturating_add(POINTS_PER_ORDER);
        if points >= REDEEM_THRESHOLD {
            Self {
                points: points - REDEEM_THRESHOLD,
                discount_applied: true,
            }
        } else {
            Self {
                points,
                discount_applied: false,
            }
        }
    }

    /// 应付金额（保留两位小数）
    pub fn final_price(&self, total: Decimal) -> Decimal {
        if self.discount_applied {
            (total * DISCOUNTED_RATE)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        } else {
            total
        }
    }
}
