//! 菜单接口

use axum::{extract::State, http::StatusCode, Json};
use pos_errors::AppResult;

use crate::application::{
    AddMenuItemCommand, MenuListQuery, RemoveMenuItemCommand, SetCaloriesCommand,
};
use crate::domain::entities::{
    MenuFlag, MenuItem, MenuItemInfo, MenuItemName, MenuItemSummary, Promo,
};

use super::dto::{MenuItemCreated, MenuItemIdResponse, MessageResponse, PriceResponse};
use super::{ApiJson, ApiPath, ApiQuery, AppState};

pub async fn list_menu(
    State(handler): State<AppState>,
    ApiQuery(query): ApiQuery<MenuListQuery>,
) -> AppResult<Json<Vec<MenuItemSummary>>> {
    Ok(Json(handler.list_menu(query).await?))
}

pub async fn get_menu_item(
    State(handler): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(handler.get_menu_item(id).await?))
}

pub async fn spicy_items(State(handler): State<AppState>) -> AppResult<Json<Vec<MenuItemName>>> {
    Ok(Json(handler.flagged_menu_names(MenuFlag::Spicy).await?))
}

pub async fn wok_smart_items(
    State(handler): State<AppState>,
) -> AppResult<Json<Vec<MenuItemName>>> {
    Ok(Json(handler.flagged_menu_names(MenuFlag::WokSmart).await?))
}

pub async fn premium_items(State(handler): State<AppState>) -> AppResult<Json<Vec<MenuItemName>>> {
    Ok(Json(handler.flagged_menu_names(MenuFlag::Premium).await?))
}

pub async fn menu_info(State(handler): State<AppState>) -> AppResult<Json<Vec<MenuItemInfo>>> {
    Ok(Json(handler.menu_info(None).await?))
}

pub async fn menu_item_info(
    State(handler): State<AppState>,
    ApiPath(item): ApiPath<String>,
) -> AppResult<Json<Vec<MenuItemInfo>>> {
    Ok(Json(handler.menu_info(Some(&item)).await?))
}

pub async fn get_price(
    State(handler): State<AppState>,
    ApiPath((item, size)): ApiPath<(String, String)>,
) -> AppResult<Json<PriceResponse>> {
    let quote = handler.price_of(&item, &size).await?;
    Ok(Json(quote.into()))
}

pub async fn item_id_by_name(
    State(handler): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> AppResult<Json<MenuItemIdResponse>> {
    let menu_item_id = handler.menu_item_id_by_name(&name).await?;
    Ok(Json(MenuItemIdResponse { menu_item_id }))
}

pub async fn add_menu_item(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<AddMenuItemCommand>,
) -> AppResult<(StatusCode, Json<MenuItemCreated>)> {
    let menu_item_id = handler.add_menu_item(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(MenuItemCreated {
            message: "Menu item added successfully".to_string(),
            menu_item_id,
        }),
    ))
}

pub async fn remove_menu_item(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<RemoveMenuItemCommand>,
) -> AppResult<Json<MessageResponse>> {
    handler.remove_menu_item(cmd).await?;
    Ok(Json(MessageResponse::new("Menu item removed successfully")))
}

pub async fn set_calories(
    State(handler): State<AppState>,
    ApiJson(cmd): ApiJson<SetCaloriesCommand>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let item = handler.set_calories(cmd).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn promos(State(handler): State<AppState>) -> AppResult<Json<Vec<Promo>>> {
    Ok(Json(handler.promos().await?))
}
