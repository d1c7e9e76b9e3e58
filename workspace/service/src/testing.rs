//! Shared fixtures for the service tests: a migrated in-memory SQLite
//! database and a couple of seeded users.

use std::sync::atomic::{AtomicU64, Ordering};

use common::ConfigMap;
use migration::{Migrator, MigratorTrait};
use model::entities::user;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
use serde_json::json;

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn new_user(db: &DatabaseConnection) -> user::Model {
    static USER_ID: AtomicU64 = AtomicU64::new(0);

    let current_id = USER_ID.fetch_add(1, Ordering::SeqCst);
    user::ActiveModel {
        name: Set(format!("user_{}", current_id)),
        password_hash: Set("$argon2id$v=19$placeholder".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test user")
}

pub fn config(value: serde_json::Value) -> ConfigMap {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("test config must be a JSON object, got {}", other),
    }
}

pub fn youtube_config() -> ConfigMap {
    config(json!({
        "channel_id": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
        "access_token": "ya29.a0AfH6SMBx"
    }))
}
