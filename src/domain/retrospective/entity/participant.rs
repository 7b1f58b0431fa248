use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One anonymous identity, scoped to one retrospective and one client
/// session. Never deleted; uniqueness on (session_id, retrospective_id) is
/// enforced by a database index (see `config::database`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub participant_id: i64,
    pub retrospective_id: i64,
    pub anonymous_name: String,
    /// Client-generated session identifier; acts as the bearer credential
    /// for this anonymous identity and must not be echoed to other clients.
    pub session_id: String,
    pub is_moderator: bool,
    /// Set only for the moderator's own participant row.
    pub user_id: Option<i64>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::retrospective::Entity",
        from = "Column::RetrospectiveId",
        to = "super::retrospective::Column::RetrospectiveId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Retrospective,
    #[sea_orm(has_many = "crate::domain::card::entity::card::Entity")]
    Card,
    #[sea_orm(has_many = "crate::domain::vote::entity::vote::Entity")]
    Vote,
}

impl Related<super::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl Related<crate::domain::card::entity::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl Related<crate::domain::vote::entity::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
