//! 报表查询参数

use chrono::NaiveDate;
use pos_common::{DateRange, parse_date};
use pos_errors::{AppError, AppResult};
use serde::Deserialize;

use crate::application::commands::non_blank;

/// 单日报表查询（`?date=YYYY-MM-DD`）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportDateQuery {
    pub date: Option<String>,
}

impl ReportDateQuery {
    pub fn date(&self) -> AppResult<NaiveDate> {
        let value =
            non_blank(self.date.clone()).ok_or_else(|| AppError::validation("Date is required"))?;
        parse_date(&value).map_err(|e| AppError::validation(e.to_string()))
    }
}

/// 区间报表查询（`?startDate=&endDate=`）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReportRangeQuery {
    pub fn range(&self) -> AppResult<DateRange> {
        match (non_blank(self.start_date.clone()), non_blank(self.end_date.clone())) {
            (Some(start), Some(end)) => {
                DateRange::parse(&start, &end).map_err(|e| AppError::validation(e.to_string()))
            }
            _ => Err(AppError::validation("Start and End dates are required.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_is_rejected() {
        let err = ReportDateQuery::default().date().unwrap_err();
        assert_eq!(err.to_body().message, "Date is required");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let query = ReportDateQuery {
            date: Some("12/01/2024".to_string()),
        };
        assert_eq!(query.date().unwrap_err().status_code(), 400);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let query = ReportRangeQuery {
            start_date: Some("2024-12-05".to_string()),
            end_date: Some("2024-12-01".to_string()),
        };
        assert_eq!(query.range().unwrap_err().status_code(), 400);

        let query = ReportRangeQuery {
            start_date: Some("2024-12-01".to_string()),
            end_date: Some("2024-12-05".to_string()),
        };
        let range = query.range().unwrap();
        assert_eq!(range.start().to_string(), "2024-12-01");
    }
}
