//! 通用类型定义

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 日期解析/区间错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Start date {start} is after end date {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// 解析 `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DateRangeError::InvalidDate(value.to_string()))
}

/// 闭区间日期范围 `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// 单日范围
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2024-10-01", "2024-10-31").unwrap();
        assert_eq!(range.start(), day(2024, 10, 1));
        assert_eq!(range.end(), day(2024, 10, 31));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::parse("2024-10-31", "2024-10-01").unwrap_err();
        assert!(matches!(err, DateRangeError::Inverted { .. }));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert_eq!(
            parse_date("10/31/2024"),
            Err(DateRangeError::InvalidDate("10/31/2024".to_string()))
        );
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::single_day(day(2024, 12, 1));
        assert_eq!(range.start(), range.end());
    }
}
