//! 价格规格

use std::str::FromStr;

use pos_errors::AppError;

/// 价格查询支持的规格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSize {
    Small,
    Medium,
    Large,
    Bowl,
    Plate,
    BiggerPlate,
}

impl FromStr for ItemSize {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "small" => Ok(ItemSize::Small),
            "medium" => Ok(ItemSize::Medium),
            "large" => Ok(ItemSize::Large),
            "bowl" => Ok(ItemSize::Bowl),
            "plate" => Ok(ItemSize::Plate),
            "bigger_plate" => Ok(ItemSize::BiggerPlate),
            _ => Err(AppError::not_found("Invalid size")),
        }
    }
}
