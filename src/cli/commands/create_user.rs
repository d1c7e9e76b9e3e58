use anyhow::Result;
use tracing::{error, info, trace};

use crate::config::connect;

pub async fn create_user(database_url: &str, name: &str, password_hash: &str) -> Result<()> {
    trace!("Entering create_user command");

    let db = connect(database_url).await?;

    match service::users::create_user(&db, name, password_hash).await {
        Ok(user) => {
            info!("Created user '{}' with ID {}", user.name, user.id);
            println!("{}", user.id);
            Ok(())
        }
        Err(e) => {
            error!("Failed to create user '{}': {}", name, e);
            Err(e.into())
        }
    }
}
