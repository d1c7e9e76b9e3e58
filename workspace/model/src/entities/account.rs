use super::user;
use sea_orm::entity::prelude::*;
use std::fmt;

/// Social media platform, as stored in the `provider` column.
///
/// Mirrors [`common::Provider`], which is the shape used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Provider {
    #[sea_orm(string_value = "youtube")]
    Youtube,
    #[sea_orm(string_value = "facebook")]
    Facebook,
    #[sea_orm(string_value = "instagram")]
    Instagram,
}

impl From<common::Provider> for Provider {
    fn from(provider: common::Provider) -> Self {
        match provider {
            common::Provider::Youtube => Provider::Youtube,
            common::Provider::Facebook => Provider::Facebook,
            common::Provider::Instagram => Provider::Instagram,
        }
    }
}

impl From<Provider> for common::Provider {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Youtube => common::Provider::Youtube,
            Provider::Facebook => common::Provider::Facebook,
            Provider::Instagram => common::Provider::Instagram,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&common::Provider::from(*self), f)
    }
}

/// A per-user, per-provider posting configuration.
///
/// At most one row exists per `(user_id, provider)`; the `uq_user_provider`
/// unique index enforces it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The user who owns this account.
    pub user_id: i32,
    pub provider: Provider,
    /// If false, nothing is posted to this provider for the user.
    #[sea_orm(default_value = "true")]
    pub post_enabled: bool,
    /// Provider-specific settings. Always a JSON object, never null.
    #[sea_orm(column_type = "JsonBinary")]
    pub config: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// An account belongs to one user.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
