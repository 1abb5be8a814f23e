//! 会员接口

use axum::{extract::State, http::StatusCode, Json};
use pos_errors::AppResult;

use crate::application::{AddCustomerCommand, CashoutCommand};
use crate::domain::entities::Customer;

use super::dto::CashoutResponse;
use super::{ApiJson, ApiPath, AppState};

pub async fn cashout(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<CashoutCommand>,
) -> AppResult<Json<CashoutResponse>> {
    let result = handler.cashout(cmd).await?;
    Ok(Json(result.into()))
}

pub async fn add_customer(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<AddCustomerCommand>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = handler.add_customer(cmd).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn customer_by_email(
    State(handler): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> AppResult<Json<Customer>> {
    Ok(Json(handler.customer_by_email(&email).await?))
}
