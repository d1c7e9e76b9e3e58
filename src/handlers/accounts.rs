use crate::error::ApiError;
use crate::schemas::{AppState, ErrorResponse, MessageResponse, PaginationQuery};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ConfigMap, Patch, Provider};
use model::entities::account;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service::accounts::{AccountChanges, NewAccount};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

/// Request body for creating a new account
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Owner user ID (must exist)
    pub user_id: i32,
    /// Social media platform
    pub provider: Provider,
    /// Whether posting is enabled (default: true)
    #[serde(default = "default_post_enabled")]
    pub post_enabled: bool,
    /// Provider-specific configuration (e.g., access tokens, page IDs)
    #[schema(value_type = Object)]
    pub config: ConfigMap,
}

fn default_post_enabled() -> bool {
    true
}

/// Request body for updating an account.
///
/// Omitted fields are left unchanged. Both fields are non-nullable, so an
/// explicit `null` is rejected.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateAccountRequest {
    /// Toggle posting on/off
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<bool>)]
    pub post_enabled: Patch<bool>,
    /// Replacement provider configuration
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    #[schema(value_type = Option<Object>)]
    pub config: Patch<ConfigMap>,
}

impl From<UpdateAccountRequest> for AccountChanges {
    fn from(request: UpdateAccountRequest) -> Self {
        AccountChanges {
            post_enabled: request.post_enabled,
            config: request.config,
        }
    }
}

/// Account response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub user_id: i32,
    pub provider: Provider,
    pub post_enabled: bool,
    #[schema(value_type = Object)]
    pub config: Value,
}

impl From<account::Model> for AccountResponse {
    fn from(model: account::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            provider: model.provider.into(),
            post_enabled: model.post_enabled,
            config: model.config,
        }
    }
}

/// Create a new social media account for a user
#[utoipa::path(
    post,
    path = "/accounts/",
    tag = "accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created successfully", body = AccountResponse),
        (status = 400, description = "Account for this provider already exists", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(user_id = request.user_id, provider = %request.provider))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    trace!("Entering create_account handler");
    debug!(
        "Creating {} account for user {} (post_enabled: {})",
        request.provider, request.user_id, request.post_enabled
    );

    let new_account = NewAccount {
        user_id: request.user_id,
        provider: request.provider.into(),
        post_enabled: request.post_enabled,
        config: request.config,
    };

    let account_model = service::accounts::create_account(&state.db, new_account).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account_model))))
}

/// Get all accounts with pagination
#[utoipa::path(
    get,
    path = "/accounts/",
    tag = "accounts",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Accounts retrieved successfully", body = Vec<AccountResponse>),
        (status = 400, description = "Invalid or out-of-range pagination parameters"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_accounts(
    State(state): State<AppState>,
    Valid(Query(pagination)): Valid<Query<PaginationQuery>>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    trace!("Entering get_accounts handler");

    let accounts =
        service::accounts::list_accounts(&state.db, pagination.skip, pagination.limit).await?;

    info!("Successfully retrieved {} accounts", accounts.len());
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Get all accounts for a specific user
#[utoipa::path(
    get,
    path = "/accounts/user/{user_id}",
    tag = "accounts",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Accounts retrieved successfully", body = Vec<AccountResponse>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user_accounts(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    trace!("Entering get_user_accounts handler for user_id: {}", user_id);

    let accounts = service::accounts::list_user_accounts(&state.db, user_id).await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Get a specific account by ID
#[utoipa::path(
    get,
    path = "/accounts/{account_id}",
    tag = "accounts",
    params(
        ("account_id" = i32, Path, description = "Account ID"),
    ),
    responses(
        (status = 200, description = "Account retrieved successfully", body = AccountResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_account(
    Path(account_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, ApiError> {
    trace!("Entering get_account handler for account_id: {}", account_id);

    let account_model = service::accounts::get_account(&state.db, account_id).await?;
    Ok(Json(AccountResponse::from(account_model)))
}

/// Update account settings
#[utoipa::path(
    patch,
    path = "/accounts/{account_id}",
    tag = "accounts",
    params(
        ("account_id" = i32, Path, description = "Account ID"),
    ),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated successfully", body = AccountResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 422, description = "Null sent for a non-nullable field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_account(
    Path(account_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    trace!("Entering update_account handler for account_id: {}", account_id);

    let changes = AccountChanges::from(request);
    if changes.is_empty() {
        debug!("Update request for account {} carries no fields", account_id);
    }

    let updated = service::accounts::update_account(&state.db, account_id, changes).await?;
    Ok(Json(AccountResponse::from(updated)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/accounts/{account_id}",
    tag = "accounts",
    params(
        ("account_id" = i32, Path, description = "Account ID"),
    ),
    responses(
        (status = 200, description = "Account deleted successfully", body = MessageResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_account(
    Path(account_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering delete_account handler for account_id: {}", account_id);

    service::accounts::delete_account(&state.db, account_id).await?;
    Ok(Json(MessageResponse {
        message: format!("Account {} deleted successfully", account_id),
    }))
}
