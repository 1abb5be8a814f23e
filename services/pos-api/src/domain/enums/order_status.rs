//! 订单状态

use std::str::FromStr;

use derive_more::Display;
use pos_errors::AppError;
use serde::{Deserialize, Serialize};

/// 订单状态：Awaiting → Processing → Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// 待制作
    #[default]
    Awaiting,
    /// 制作中
    Processing,
    /// 已完成
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Awaiting,
        OrderStatus::Processing,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Awaiting => "Awaiting",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            OrderStatus::Awaiting => 0,
            OrderStatus::Processing => 1,
            OrderStatus::Completed => 2,
        }
    }

    /// 只允许前进或保持不变
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        next.rank() >= self.rank()
    }

    /// 可以前进到 `self` 的其他状态
    pub fn sources(&self) -> Vec<OrderStatus> {
        Self::ALL
            .into_iter()
            .filter(|from| from != self && from.can_transition_to(*self))
            .collect()
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "awaiting" => Ok(OrderStatus::Awaiting),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(AppError::validation(format!("Unknown order status: {}", other))),
        }
    }
}
