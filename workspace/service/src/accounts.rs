use common::{ConfigMap, Patch};
use model::entities::account::{self, Provider};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::error::{Result, ServiceError, is_foreign_key_violation, is_unique_violation};
use crate::users::ensure_user_exists;

/// Everything needed to insert an account row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub user_id: i32,
    pub provider: Provider,
    pub post_enabled: bool,
    pub config: ConfigMap,
}

/// A partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountChanges {
    pub post_enabled: Patch<bool>,
    pub config: Patch<ConfigMap>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.post_enabled.is_absent() && self.config.is_absent()
    }
}

/// Get a single account by id
#[instrument(skip(db))]
pub async fn get_account(db: &DatabaseConnection, account_id: i32) -> Result<account::Model> {
    trace!("Entering get_account function for account_id: {}", account_id);

    match account::Entity::find_by_id(account_id).one(db).await? {
        Some(account_model) => {
            debug!(
                "Found account with ID: {}, provider: {}",
                account_model.id, account_model.provider
            );
            Ok(account_model)
        }
        None => {
            warn!("Account with ID {} not found", account_id);
            Err(ServiceError::AccountNotFound(account_id))
        }
    }
}

/// Accounts ordered by id, `skip` rows in, at most `limit` rows.
#[instrument(skip(db))]
pub async fn list_accounts(
    db: &DatabaseConnection,
    skip: u64,
    limit: u64,
) -> Result<Vec<account::Model>> {
    trace!("Entering list_accounts function");

    let accounts = account::Entity::find()
        .order_by_asc(account::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?;

    debug!("Retrieved {} accounts (skip: {}, limit: {})", accounts.len(), skip, limit);
    Ok(accounts)
}

/// All accounts owned by a user; fails if the user itself is missing.
#[instrument(skip(db))]
pub async fn list_user_accounts(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<account::Model>> {
    trace!("Entering list_user_accounts function for user_id: {}", user_id);

    ensure_user_exists(db, user_id).await?;

    let accounts = account::Entity::find()
        .filter(account::Column::UserId.eq(user_id))
        .order_by_asc(account::Column::Id)
        .all(db)
        .await?;

    debug!("User {} owns {} accounts", user_id, accounts.len());
    Ok(accounts)
}

/// Create an account for an existing user.
///
/// The duplicate check is the `uq_user_provider` index itself, so two
/// concurrent creators for the same pair cannot both succeed.
#[instrument(
    skip(db, new_account),
    fields(user_id = new_account.user_id, provider = %new_account.provider)
)]
pub async fn create_account(db: &DatabaseConnection, new_account: NewAccount) -> Result<account::Model> {
    trace!("Entering create_account function");

    ensure_user_exists(db, new_account.user_id).await?;

    let NewAccount {
        user_id,
        provider,
        post_enabled,
        config,
    } = new_account;

    let active = account::ActiveModel {
        user_id: Set(user_id),
        provider: Set(provider),
        post_enabled: Set(post_enabled),
        config: Set(Value::Object(config)),
        ..Default::default()
    };

    match active.insert(db).await {
        Ok(account_model) => {
            info!(
                "Account created successfully with ID: {}, user: {}, provider: {}",
                account_model.id, account_model.user_id, account_model.provider
            );
            Ok(account_model)
        }
        Err(db_error) if is_unique_violation(&db_error) => {
            warn!("User {} already has a {} account", user_id, provider);
            Err(ServiceError::DuplicateAccount { user_id, provider })
        }
        Err(db_error) if is_foreign_key_violation(&db_error) => {
            // The user was deleted between the existence check and the insert
            warn!("User {} disappeared before the account could be created", user_id);
            Err(ServiceError::UserNotFound(user_id))
        }
        Err(db_error) => {
            error!("Failed to create {} account for user {}: {}", provider, user_id, db_error);
            Err(db_error.into())
        }
    }
}

/// Apply a partial update. With no fields present the stored account is
/// returned untouched and nothing is written.
#[instrument(skip(db, changes))]
pub async fn update_account(
    db: &DatabaseConnection,
    account_id: i32,
    changes: AccountChanges,
) -> Result<account::Model> {
    trace!("Entering update_account function for account_id: {}", account_id);

    let existing = get_account(db, account_id).await?;

    let post_enabled = non_null(changes.post_enabled, "post_enabled")?;
    let config = non_null(changes.config, "config")?;

    if post_enabled.is_none() && config.is_none() {
        debug!("No fields to update for account ID: {}", account_id);
        return Ok(existing);
    }

    let mut account_active: account::ActiveModel = existing.into();
    let mut updated_fields = Vec::new();

    if let Some(post_enabled) = post_enabled {
        account_active.post_enabled = Set(post_enabled);
        updated_fields.push("post_enabled");
    }
    if let Some(config) = config {
        account_active.config = Set(Value::Object(config));
        updated_fields.push("config");
    }

    debug!("Updating fields: {}", updated_fields.join(", "));

    match account_active.update(db).await {
        Ok(updated) => {
            info!(
                "Account with ID {} updated successfully. Updated fields: {}",
                account_id,
                updated_fields.join(", ")
            );
            Ok(updated)
        }
        Err(DbErr::RecordNotUpdated) => {
            warn!("Account with ID {} vanished before the update", account_id);
            Err(ServiceError::AccountNotFound(account_id))
        }
        Err(db_error) => {
            error!("Failed to update account with ID {}: {}", account_id, db_error);
            Err(db_error.into())
        }
    }
}

/// Delete an account by id
#[instrument(skip(db))]
pub async fn delete_account(db: &DatabaseConnection, account_id: i32) -> Result<()> {
    trace!("Entering delete_account function for account_id: {}", account_id);

    let delete_result = account::Entity::delete_by_id(account_id).exec(db).await?;
    debug!("Delete operation completed. Rows affected: {}", delete_result.rows_affected);

    if delete_result.rows_affected == 0 {
        warn!("Account with ID {} not found for deletion (no rows affected)", account_id);
        return Err(ServiceError::AccountNotFound(account_id));
    }

    info!("Account with ID {} deleted successfully", account_id);
    Ok(())
}

fn non_null<T>(patch: Patch<T>, field: &'static str) -> Result<Option<T>> {
    match patch.into_option() {
        None => Ok(None),
        Some(Some(value)) => Ok(Some(value)),
        Some(None) => {
            warn!("Rejecting explicit null for non-nullable field '{}'", field);
            Err(ServiceError::NullField(field))
        }
    }
}
