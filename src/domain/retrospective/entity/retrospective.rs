use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "retrospectives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub retrospective_id: i64,
    pub name: String,
    /// User id of the moderator (JWT subject).
    pub moderator_id: i64,
    pub votes_per_participant: i32,
    /// Transitions true -> false only; a retrospective is never reactivated.
    pub is_active: bool,
    #[sea_orm(unique)]
    pub invite_code: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::participant::Entity")]
    Participant,
    #[sea_orm(has_many = "crate::domain::card::entity::card::Entity")]
    Card,
    #[sea_orm(has_many = "crate::domain::vote::entity::vote::Entity")]
    Vote,
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
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
