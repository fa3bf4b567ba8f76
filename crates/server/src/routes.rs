use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;
use service::{
    foods::repo::SeaOrmFoodRepository,
    users::repo::SeaOrmUserRepository,
    FoodStore, UserStore,
};

use crate::openapi::ApiDoc;

pub mod foods;
pub mod users;

pub type Users = UserStore<SeaOrmUserRepository>;
pub type Foods = FoodStore<SeaOrmFoodRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub users: Users,
    pub foods: Foods,
}

impl ServerState {
    /// Wire both stores onto one pool, each bounded by `timeout`.
    pub fn new(db: DatabaseConnection, timeout: Option<Duration>) -> Self {
        let users = UserStore::new(Arc::new(SeaOrmUserRepository { db: db.clone() })).with_timeout(timeout);
        let foods = FoodStore::new(Arc::new(SeaOrmFoodRepository { db: db.clone() })).with_timeout(timeout);
        Self { db, users, foods }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse), (status = 503, description = "Database unreachable")))]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match models::db::ping(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, docs, users and foods
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let user_routes = Router::new()
        .route("/users", post(users::create))
        .route("/users/:user_id", get(users::get).patch(users::update).delete(users::delete))
        .route("/users/:user_id/foods", get(foods::list_by_user));

    let food_routes = Router::new()
        .route("/foods", post(foods::create))
        .route("/foods/:id", get(foods::get).patch(foods::update).delete(foods::delete));

    public
        .merge(user_routes)
        .merge(food_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
