use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Feedback categories shown as board columns.
///
/// Stored as plain strings so the same entity works on MySQL and the SQLite
/// test backend; the wire values are the kebab-case names.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(16))",
    enum_name = "card_category"
)]
#[serde(rename_all = "kebab-case")]
pub enum CardCategory {
    #[sea_orm(string_value = "went-well")]
    WentWell,
    #[sea_orm(string_value = "went-poorly")]
    WentPoorly,
    #[sea_orm(string_value = "ideas")]
    Ideas,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub card_id: i64,
    pub retrospective_id: i64,
    /// Author; immutable after creation.
    pub participant_id: i64,
    pub category: CardCategory,
    pub content: String,
    /// Denormalized count of live vote rows for this card; co-updated with
    /// the votes table inside the same transaction.
    pub vote_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::retrospective::entity::retrospective::Entity",
        from = "Column::RetrospectiveId",
        to = "crate::domain::retrospective::entity::retrospective::Column::RetrospectiveId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Retrospective,
    #[sea_orm(
        belongs_to = "crate::domain::retrospective::entity::participant::Entity",
        from = "Column::ParticipantId",
        to = "crate::domain::retrospective::entity::participant::Column::ParticipantId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Participant,
    #[sea_orm(has_many = "crate::domain::vote::entity::vote::Entity")]
    Vote,
}

impl Related<crate::domain::retrospective::entity::retrospective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retrospective.def()
    }
}

impl Related<crate::domain::retrospective::entity::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl Related<crate::domain::vote::entity::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
