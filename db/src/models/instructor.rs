use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents an instructor profile in the `instructors` table.
///
/// This is presentation data for the public instructor listing; the
/// authorization role lives on the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub classes_count: i32,
    pub students_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}
impl Model {}
