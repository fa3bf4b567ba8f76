use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use service::password::hash_password_blocking;
use service::users::domain::{NewUser, PublicUser, UserChanges};

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::ServerState;

/// Body of `POST /users`; `password` arrives in plaintext and is hashed here.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user_id: String,
    pub user_name: String,
    pub mail: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

#[utoipa::path(post, path = "/users", tag = "users", request_body = crate::openapi::CreateUserRequestDoc, responses((status = 201, description = "Created", body = crate::openapi::PublicUserDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorBodyDoc), (status = 409, description = "user_id taken", body = crate::openapi::ErrorBodyDoc)))]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<CreateUserRequest>) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let password = hash_password_blocking(input.password).await?;
    let user = state.users
        .create(NewUser { user_id: input.user_id, user_name: input.user_name, mail: input.mail, password })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(get, path = "/users/{user_id}", tag = "users", params(("user_id" = String, Path, description = "External user identifier")), responses((status = 200, description = "OK", body = crate::openapi::PublicUserDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn get(State(state): State<ServerState>, ApiPath(user_id): ApiPath<String>) -> Result<Json<PublicUser>, ApiError> {
    let user = state.users.get_by_user_id(&user_id).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(patch, path = "/users/{user_id}", tag = "users", params(("user_id" = String, Path, description = "External user identifier")), request_body = crate::openapi::UpdateUserRequestDoc, responses((status = 200, description = "Updated", body = crate::openapi::PublicUserDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc), (status = 409, description = "user_id taken", body = crate::openapi::ErrorBodyDoc)))]
pub async fn update(State(state): State<ServerState>, ApiPath(user_id): ApiPath<String>, ApiJson(input): ApiJson<UpdateUserRequest>) -> Result<Json<PublicUser>, ApiError> {
    let password = match input.password {
        Some(plain) => Some(hash_password_blocking(plain).await?),
        None => None,
    };
    let changes = UserChanges { user_id: input.user_id, user_name: input.user_name, mail: input.mail, password };
    let user = state.users.update(&user_id, changes).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(delete, path = "/users/{user_id}", tag = "users", params(("user_id" = String, Path, description = "External user identifier")), responses((status = 204, description = "Deleted with all owned foods"), (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)))]
pub async fn delete(State(state): State<ServerState>, ApiPath(user_id): ApiPath<String>) -> Result<StatusCode, ApiError> {
    state.users.delete(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
