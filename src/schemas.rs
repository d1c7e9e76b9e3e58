use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

use crate::handlers::{
    accounts::{AccountResponse, CreateAccountRequest, UpdateAccountRequest},
    users::{CreateUserRequest, UserResponse},
};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

/// Pagination parameters for list endpoints.
///
/// Both values are bound as signed 64-bit integers, so anything above
/// `i64::MAX` is rejected with 400.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Number of rows to skip (default: 0)
    #[serde(default)]
    #[validate(range(max = 9223372036854775807u64))]
    pub skip: u64,
    /// Maximum number of rows to return (default: 100)
    #[serde(default = "default_limit")]
    #[validate(range(max = 9223372036854775807u64))]
    pub limit: u64,
}

fn default_limit() -> u64 {
    service::DEFAULT_PAGE_LIMIT
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Service metadata returned by `GET /`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Service name
    pub message: String,
    /// Path of the interactive API documentation
    pub docs: String,
    /// Route groups this server mounts, by name
    pub services: BTreeMap<String, String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root::root,
        crate::handlers::health::health_check,
        crate::handlers::accounts::create_account,
        crate::handlers::accounts::get_accounts,
        crate::handlers::accounts::get_user_accounts,
        crate::handlers::accounts::get_account,
        crate::handlers::accounts::update_account,
        crate::handlers::accounts::delete_account,
        crate::handlers::users::create_user,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::delete_user,
    ),
    components(
        schemas(
            AccountResponse,
            CreateAccountRequest,
            UpdateAccountRequest,
            UserResponse,
            CreateUserRequest,
            common::Provider,
            ErrorResponse,
            MessageResponse,
            RootResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "root", description = "Service metadata"),
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Social media account management"),
        (name = "users", description = "Account owners"),
    ),
    info(
        title = "Forwarder API",
        description = "Stores per-user social media accounts (YouTube, Facebook, Instagram) and their posting configuration",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
