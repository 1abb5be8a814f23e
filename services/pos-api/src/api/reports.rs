//! 报表接口

use axum::{extract::State, Json};
use pos_errors::AppResult;

use crate::application::{ReportDateQuery, ReportRangeQuery};

use super::dto::{
    MessageResponse, ProductUsageResponse, RestockReportResponse, SalesReportResponse,
    XReportResponse, ZReportResponse,
};
use super::{ApiQuery, AppState};

pub async fn z_report(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<ReportDateQuery>,
) -> AppResult<Json<ZReportResponse>> {
    let report = handler.daily_report(query).await?;
    Ok(Json(report.into()))
}

pub async fn x_report(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<ReportDateQuery>,
) -> AppResult<Json<XReportResponse>> {
    let rows = handler.hourly_report(query).await?;
    Ok(Json(XReportResponse {
        hourly_sales: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn sales_report(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<ReportRangeQuery>,
) -> AppResult<Json<SalesReportResponse>> {
    let rows = handler.sales_report(query).await?;
    Ok(Json(SalesReportResponse {
        menu_items: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn product_usage(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<ReportRangeQuery>,
) -> AppResult<Json<ProductUsageResponse>> {
    let rows = handler.product_usage(query).await?;
    Ok(Json(ProductUsageResponse {
        product_usage: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn restock_report(
    State(handler): State<AppState>,
) -> AppResult<Json<RestockReportResponse>> {
    let rows = handler.restock_report().await?;
    Ok(Json(RestockReportResponse {
        restock_report: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn restock(State(handler): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let updated = handler.restock().await?;
    Ok(Json(MessageResponse::new(format!(
        "{} items restocked.",
        updated
    ))))
}
