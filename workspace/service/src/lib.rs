//! Account management on top of the SeaORM entities.
//!
//! Every operation here is a single statement against the database plus the
//! existence and uniqueness checks around it. The database enforces the
//! `(user_id, provider)` uniqueness and the user foreign key; this crate only
//! translates those failures into [`ServiceError`] variants.

pub mod accounts;
pub mod error;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Result, ServiceError};

/// Default page size for list operations when the caller does not pass one.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;
