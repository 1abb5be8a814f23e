//! 员工接口

use axum::{extract::State, http::StatusCode, Json};
use pos_errors::AppResult;

use crate::application::{AddEmployeeCommand, LinkGoogleCommand, LoginCommand, SetWageCommand};
use crate::domain::entities::Employee;

use super::dto::{EmployeeCreated, GoogleLinked, LoginResponse, MessageResponse, UserResponse};
use super::{ApiJson, ApiPath, AppState};

pub async fn login(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<LoginCommand>,
) -> AppResult<Json<LoginResponse>> {
    let employee = handler.login(cmd).await?;
    Ok(Json(employee.into()))
}

pub async fn list_employees(State(handler): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(handler.list_employees().await?))
}

pub async fn list_unlinked_employees(
    State(handler): State<AppState>,
) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(handler.list_unlinked_employees().await?))
}

pub async fn add_employee(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<AddEmployeeCommand>,
) -> AppResult<(StatusCode, Json<EmployeeCreated>)> {
    let employee_id = handler.add_employee(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(EmployeeCreated {
            message: "Employee added successfully".to_string(),
            employee_id,
        }),
    ))
}

pub async fn remove_employee(
    State(handler): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    handler.remove_employee(id).await?;
    Ok(Json(MessageResponse::new("Employee removed successfully.")))
}

pub async fn set_wage(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<SetWageCommand>,
) -> AppResult<Json<Employee>> {
    Ok(Json(handler.set_wage(cmd).await?))
}

pub async fn link_google(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<LinkGoogleCommand>,
) -> AppResult<Json<GoogleLinked>> {
    let employee = handler.link_google(cmd).await?;
    Ok(Json(GoogleLinked {
        message: "Google account linked successfully.".to_string(),
        employee,
    }))
}

pub async fn user_by_google(
    State(handler): State<AppState>,
    ApiPath(google_id): ApiPath<String>,
) -> AppResult<Json<UserResponse>> {
    let user = handler.employee_by_google_id(&google_id).await?;
    Ok(Json(UserResponse { user }))
}
