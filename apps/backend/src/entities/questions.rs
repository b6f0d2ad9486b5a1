use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Which bank a question belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    #[sea_orm(string_value = "TRUE_FALSE")]
    TrueFalse,
    #[sea_orm(string_value = "SELF_ASSESSMENT")]
    SelfAssessment,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: QuestionKind,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    #[sea_orm(column_name = "is_true")]
    pub is_true: Option<bool>,
    pub answered: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_questions::Entity")]
    PlayerQuestions,
}

impl Related<super::player_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerQuestions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
