use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};
use serde::Serialize;

/// Represents a completed payment in the `payments` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Paying user, identified by email (the JWT subject).
    pub user_email: String,
    /// Provider-side payment-intent identifier.
    pub transaction_id: String,
    pub amount: f64,
    /// JSON array of the class IDs covered by this payment.
    pub class_ids: Json,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Lists a user's payments, newest first.
    pub async fn list_for_user(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserEmail.eq(email))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }
}
