use model::entities::user;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::error::{Result, ServiceError, is_unique_violation};

/// Create a user. Names are unique; a clash maps to [`ServiceError::DuplicateUser`].
#[instrument(skip(db, password_hash))]
pub async fn create_user(
    db: &DatabaseConnection,
    name: &str,
    password_hash: &str,
) -> Result<user::Model> {
    trace!("Entering create_user function");

    let new_user = user::ActiveModel {
        name: Set(name.to_string()),
        password_hash: Set(password_hash.to_string()),
        ..Default::default()
    };

    match new_user.insert(db).await {
        Ok(user_model) => {
            info!("User created successfully with ID: {}, name: {}", user_model.id, user_model.name);
            Ok(user_model)
        }
        Err(db_error) if is_unique_violation(&db_error) => {
            warn!("User name '{}' already exists", name);
            Err(ServiceError::DuplicateUser(name.to_string()))
        }
        Err(db_error) => {
            error!("Failed to create user '{}': {}", name, db_error);
            Err(db_error.into())
        }
    }
}

#[instrument(skip(db))]
pub async fn get_user(db: &DatabaseConnection, user_id: i32) -> Result<user::Model> {
    trace!("Entering get_user function for user_id: {}", user_id);

    match user::Entity::find_by_id(user_id).one(db).await? {
        Some(user_model) => {
            debug!("Found user with ID: {}", user_model.id);
            Ok(user_model)
        }
        None => {
            warn!("User with ID {} not found", user_id);
            Err(ServiceError::UserNotFound(user_id))
        }
    }
}

/// Users ordered by id, `skip` rows in, at most `limit` rows.
#[instrument(skip(db))]
pub async fn list_users(db: &DatabaseConnection, skip: u64, limit: u64) -> Result<Vec<user::Model>> {
    trace!("Entering list_users function");

    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await?;

    debug!("Retrieved {} users (skip: {}, limit: {})", users.len(), skip, limit);
    Ok(users)
}

/// Delete a user. The database cascades the delete to the user's accounts.
#[instrument(skip(db))]
pub async fn delete_user(db: &DatabaseConnection, user_id: i32) -> Result<()> {
    trace!("Entering delete_user function for user_id: {}", user_id);

    let delete_result = user::Entity::delete_by_id(user_id).exec(db).await?;
    debug!("Delete operation completed. Rows affected: {}", delete_result.rows_affected);

    if delete_result.rows_affected == 0 {
        warn!("User with ID {} not found for deletion (no rows affected)", user_id);
        return Err(ServiceError::UserNotFound(user_id));
    }

    info!("User with ID {} deleted successfully", user_id);
    Ok(())
}

/// Fails with [`ServiceError::UserNotFound`] unless a user with this id exists.
pub(crate) async fn ensure_user_exists(db: &DatabaseConnection, user_id: i32) -> Result<()> {
    let count = user::Entity::find_by_id(user_id).count(db).await?;
    if count == 0 {
        warn!("User with ID {} not found", user_id);
        return Err(ServiceError::UserNotFound(user_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{NewAccount, create_account};
    use crate::testing::{setup_db, youtube_config};
    use model::entities::{account, account::Provider};

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = setup_db().await;

        let created = create_user(&db, "alice", "hash").await.unwrap();
        assert!(created.id > 0);

        let fetched = get_user(&db, created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_duplicate_user_name_is_rejected() {
        let db = setup_db().await;

        create_user(&db, "bob", "hash").await.unwrap();
        let result = create_user(&db, "bob", "other").await;

        assert!(matches!(result, Err(ServiceError::DuplicateUser(ref name)) if name == "bob"));
        assert_eq!(list_users(&db, 0, 100).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let db = setup_db().await;
        assert!(matches!(get_user(&db, 404).await, Err(ServiceError::UserNotFound(404))));
    }

    #[tokio::test]
    async fn test_list_users_paginates() {
        let db = setup_db().await;
        for name in ["a", "b", "c"] {
            create_user(&db, name, "hash").await.unwrap();
        }

        let page = list_users(&db, 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "b");
    }

    #[tokio::test]
    async fn test_delete_user_cascades_accounts() {
        let db = setup_db().await;
        let user = create_user(&db, "carol", "hash").await.unwrap();
        create_account(
            &db,
            NewAccount {
                user_id: user.id,
                provider: Provider::Youtube,
                post_enabled: true,
                config: youtube_config(),
            },
        )
        .await
        .unwrap();

        delete_user(&db, user.id).await.unwrap();

        assert!(account::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(matches!(
            delete_user(&db, user.id).await,
            Err(ServiceError::UserNotFound(_))
        ));
    }
}
