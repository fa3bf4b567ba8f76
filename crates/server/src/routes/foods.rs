use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;

use service::errors::ServiceError;
use service::foods::domain::{Food, FoodChanges, NewFood};

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub food_id: String,
    pub food_name: String,
    /// `YYYY-MM-DD`
    pub exp: String,
    pub user_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateFoodRequest {
    pub food_id: Option<String>,
    pub food_name: Option<String>,
    pub exp: Option<String>,
}

fn parse_exp(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ServiceError::Validation(format!("exp must be a YYYY-MM-DD date, got {raw:?}")))
}

#[utoipa::path(post, path = "/foods", tag = "foods", request_body = crate::openapi::CreateFoodRequestDoc, responses((status = 201, description = "Created", body = crate::openapi::FoodDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc), (status = 422, description = "Unknown owner", body = crate::openapi::ErrorBodyDoc)))]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<CreateFoodRequest>) -> Result<(StatusCode, Json<Food>), ApiError> {
    let exp = parse_exp(&input.exp)?;
    let food = state.foods
        .create(NewFood { food_id: input.food_id, food_name: input.food_name, exp, user_id: input.user_id })
        .await?;
    Ok((StatusCode::CREATED, Json(food)))
}

#[utoipa::path(get, path = "/users/{user_id}/foods", tag = "foods", params(("user_id" = String, Path, description = "Owning user")), responses((status = 200, description = "Foods in id order", body = [crate::openapi::FoodDoc]), (status = 404, description = "User not found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn list_by_user(State(state): State<ServerState>, ApiPath(user_id): ApiPath<String>) -> Result<Json<Vec<Food>>, ApiError> {
    Ok(Json(state.foods.list_by_user(&user_id).await?))
}

#[utoipa::path(get, path = "/foods/{id}", tag = "foods", params(("id" = i32, Path, description = "Food row id")), responses((status = 200, description = "OK", body = crate::openapi::FoodDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<Food>, ApiError> {
    Ok(Json(state.foods.get(id).await?))
}

#[utoipa::path(patch, path = "/foods/{id}", tag = "foods", params(("id" = i32, Path, description = "Food row id")), request_body = crate::openapi::UpdateFoodRequestDoc, responses((status = 200, description = "Updated", body = crate::openapi::FoodDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn update(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>, ApiJson(input): ApiJson<UpdateFoodRequest>) -> Result<Json<Food>, ApiError> {
    let exp = input.exp.as_deref().map(parse_exp).transpose()?;
    let changes = FoodChanges { food_id: input.food_id, food_name: input.food_name, exp };
    Ok(Json(state.foods.update(id, changes).await?))
}

#[utoipa::path(delete, path = "/foods/{id}", tag = "foods", params(("id" = i32, Path, description = "Food row id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    state.foods.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
