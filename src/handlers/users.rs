use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse, MessageResponse, PaginationQuery};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use model::entities::user;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a new user
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    /// Unique user name
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Pre-computed password hash, stored as given
    #[validate(length(min = 1))]
    pub password_hash: String,
}

/// User response model. The password hash is never returned.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid request or name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn create_user(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreateUserRequest>>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    trace!("Entering create_user handler");

    let user_model =
        service::users::create_user(&state.db, &request.name, &request.password_hash).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user_model))))
}

/// Get all users with pagination
#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 400, description = "Invalid or out-of-range pagination parameters"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Valid(Query(pagination)): Valid<Query<PaginationQuery>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    trace!("Entering get_users handler");

    let users = service::users::list_users(&state.db, pagination.skip, pagination.limit).await?;

    info!("Successfully retrieved {} users", users.len());
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_model = service::users::get_user(&state.db, user_id).await?;
    Ok(Json(UserResponse::from(user_model)))
}

/// Delete a user together with all of their accounts
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering delete_user handler for user_id: {}", user_id);

    service::users::delete_user(&state.db, user_id).await?;
    Ok(Json(MessageResponse {
        message: format!("User {} deleted successfully", user_id),
    }))
}
