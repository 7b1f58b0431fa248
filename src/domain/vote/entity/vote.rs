use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One participant's endorsement of one card. Unique per
/// (card_id, participant_id) via a database index; carries the
/// retrospective_id so budget counting needs no join.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub vote_id: i64,
    pub card_id: i64,
    pub participant_id: i64,
    pub retrospective_id: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::card::entity::card::Entity",
        from = "Column::CardId",
        to = "crate::domain::card::entity::card::Column::CardId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Card,
    #[sea_orm(
        belongs_to = "crate::domain::retrospective::entity::participant::Entity",
        from = "Column::ParticipantId",
        to = "crate::domain::retrospective::entity::participant::Column::ParticipantId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Participant,
    #[sea_orm(
        belongs_to = "crate::domain::retrospective::entity::retrospective::Entity",
        from = "Column::RetrospectiveId",
        to = "crate::domain::retrospective::entity::retrospective::Column::RetrospectiveId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Retrospective,
}

impl Related<crate::domain::card::entity::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl Related<crate::domain::retrospective::entity::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl Related<crate::domain::retrospective::entity::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
