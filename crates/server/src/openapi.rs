use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    /// Machine-readable kind, e.g. `duplicate_key`
    pub error: String,
    pub code: u16,
    pub detail: String,
}

#[derive(ToSchema)]
pub struct CreateUserRequestDoc {
    #[schema(max_length = 40)]
    pub user_id: String,
    #[schema(max_length = 255)]
    pub user_name: String,
    #[schema(max_length = 255)]
    pub mail: String,
    /// Plaintext; stored as an Argon2id hash
    pub password: String,
}

#[derive(ToSchema)]
pub struct UpdateUserRequestDoc {
    /// Renaming moves every owned food along
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub mail: Option<String>,
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct PublicUserDoc {
    pub id: i32,
    pub user_id: String,
    pub user_name: String,
    pub mail: String,
}

#[derive(ToSchema)]
pub struct CreateFoodRequestDoc {
    #[schema(max_length = 40)]
    pub food_id: String,
    pub food_name: String,
    #[schema(example = "2024-01-01")]
    pub exp: String,
    pub user_id: String,
}

#[derive(ToSchema)]
pub struct UpdateFoodRequestDoc {
    pub food_id: Option<String>,
    pub food_name: Option<String>,
    #[schema(example = "2024-01-01")]
    pub exp: Option<String>,
}

#[derive(ToSchema)]
pub struct FoodDoc {
    pub id: i32,
    pub food_id: String,
    pub food_name: String,
    #[schema(example = "2024-01-01")]
    pub exp: String,
    pub user_id: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::foods::list_by_user,
        crate::routes::foods::create,
        crate::routes::foods::get,
        crate::routes::foods::update,
        crate::routes::foods::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBodyDoc,
            CreateUserRequestDoc,
            UpdateUserRequestDoc,
            PublicUserDoc,
            CreateFoodRequestDoc,
            UpdateFoodRequestDoc,
            FoodDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "foods")
    )
)]
pub struct ApiDoc;
