pub mod accounts;
pub mod health;
pub mod root;
pub mod users;
