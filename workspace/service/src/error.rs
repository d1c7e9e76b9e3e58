use model::entities::account::Provider;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error types for the account service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The referenced user does not exist
    #[error("User not found")]
    UserNotFound(i32),

    /// The referenced account does not exist
    #[error("Account not found")]
    AccountNotFound(i32),

    /// The user already has an account for this provider
    #[error("Account for provider '{provider}' already exists for this user")]
    DuplicateAccount { user_id: i32, provider: Provider },

    /// Another user already has this name
    #[error("User with name '{0}' already exists")]
    DuplicateUser(String),

    /// A partial update sent `null` for a column that cannot hold it
    #[error("Field '{0}' cannot be null")]
    NullField(&'static str),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Type alias for Result with ServiceError
pub type Result<T> = std::result::Result<T, ServiceError>;

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(ServiceError::UserNotFound(7).to_string(), "User not found");
        assert_eq!(ServiceError::AccountNotFound(7).to_string(), "Account not found");
        assert_eq!(
            ServiceError::DuplicateAccount {
                user_id: 1,
                provider: Provider::Youtube
            }
            .to_string(),
            "Account for provider 'youtube' already exists for this user"
        );
        assert_eq!(
            ServiceError::NullField("config").to_string(),
            "Field 'config' cannot be null"
        );
    }

    #[test]
    fn test_plain_db_errors_are_not_constraint_violations() {
        let err = DbErr::Custom("boom".to_string());
        assert!(!is_unique_violation(&err));
        assert!(!is_foreign_key_violation(&err));
    }
}
