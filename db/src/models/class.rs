use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Represents an offered class in the `classes` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub available_seats: i32,
    /// Price in the display currency; the payment-intent endpoint converts
    /// this to minor units before calling the provider.
    pub price: f64,
}

/// Cart items reference a class; deleting a class cascades to them.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cart_item::Entity")]
    CartItem,
}

impl Related<super::cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
impl Model {}
