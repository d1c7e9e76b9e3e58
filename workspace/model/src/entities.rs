//! This file serves as the root for all SeaORM entity modules.
//! Two tables: `users` and the social media `accounts` they own.

pub mod account;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::account::Entity as Account;
    pub use super::account::Provider;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, Set, SqlErr,
    };
    use serde_json::json;

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn insert_user(db: &DatabaseConnection, name: &str) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            name: Set(name.to_string()),
            password_hash: Set(format!("hash-of-{}", name)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let user1 = insert_user(&db, "user1").await?;
        let user2 = insert_user(&db, "user2").await?;

        let youtube = account::ActiveModel {
            user_id: Set(user1.id),
            provider: Set(Provider::Youtube),
            post_enabled: Set(true),
            config: Set(json!({ "channel_id": "UC_x5XG1OV2P6uZZ5FSM9Ttw" })),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let instagram = account::ActiveModel {
            user_id: Set(user1.id),
            provider: Set(Provider::Instagram),
            post_enabled: Set(false),
            config: Set(json!({ "page_id": 42, "tags": ["a", "b"] })),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Same provider for a different user is fine
        account::ActiveModel {
            user_id: Set(user2.id),
            provider: Set(Provider::Youtube),
            post_enabled: Set(true),
            config: Set(json!({})),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.name == "user1"));

        let stored = Account::find_by_id(instagram.id).one(&db).await?.unwrap();
        assert_eq!(stored.provider, Provider::Instagram);
        assert!(!stored.post_enabled);
        assert_eq!(stored.config, json!({ "page_id": 42, "tags": ["a", "b"] }));

        // Related accounts through the user
        let user1_accounts = user1.find_related(Account).all(&db).await?;
        assert_eq!(user1_accounts.len(), 2);
        assert!(user1_accounts.iter().any(|a| a.id == youtube.id));

        let owner = youtube.find_related(User).one(&db).await?.unwrap();
        assert_eq!(owner.id, user1.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_provider_violates_unique_index() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = insert_user(&db, "dup").await?;

        let new_account = || account::ActiveModel {
            user_id: Set(user.id),
            provider: Set(Provider::Facebook),
            post_enabled: Set(true),
            config: Set(json!({ "page_id": "1" })),
            ..Default::default()
        };

        new_account().insert(&db).await?;
        let err = new_account().insert(&db).await.unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));

        let count = Account::find()
            .filter(account::Column::UserId.eq(user.id))
            .all(&db)
            .await?
            .len();
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_user_violates_foreign_key() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let err = account::ActiveModel {
            user_id: Set(999),
            provider: Set(Provider::Youtube),
            post_enabled: Set(true),
            config: Set(json!({})),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();

        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        ));
        assert!(Account::find().all(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_accounts() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let doomed = insert_user(&db, "doomed").await?;
        let survivor = insert_user(&db, "survivor").await?;

        for (user_id, provider) in [
            (doomed.id, Provider::Youtube),
            (doomed.id, Provider::Facebook),
            (survivor.id, Provider::Youtube),
        ] {
            account::ActiveModel {
                user_id: Set(user_id),
                provider: Set(provider),
                post_enabled: Set(true),
                config: Set(json!({})),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        User::delete_by_id(doomed.id).exec(&db).await?;

        let remaining = Account::find().all(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user_id, survivor.id);

        Ok(())
    }

    #[test]
    fn test_provider_converts_both_ways() {
        for provider in common::Provider::ALL {
            let stored = Provider::from(provider);
            assert_eq!(common::Provider::from(stored), provider);
            assert_eq!(stored.to_string(), provider.as_str());
        }
    }
}
