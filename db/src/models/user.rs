use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
///
/// Users are created on first login with the `none` role; role upgrades
/// happen through the role-mutation endpoints.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name supplied by the login provider.
    pub name: String,
    /// User's unique email address. Doubles as the JWT subject identifier.
    pub email: String,
    /// Role tag restricting which protected operations the user may invoke.
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Enum representing a user's role across the application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "none")]
    None,

    #[sea_orm(string_value = "student")]
    Student,

    #[sea_orm(string_value = "instructor")]
    Instructor,

    #[sea_orm(string_value = "admin")]
    Admin,
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
    /// Looks up a user record by email address.
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Inserts a new user with the `none` role, or returns the existing
    /// record untouched when the email is already known.
    pub async fn create_if_absent(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
    ) -> Result<(Model, bool), DbErr> {
        if let Some(existing) = Model::find_by_email(db, email).await? {
            return Ok((existing, false));
        }

        let now = Utc::now();
        let user = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            role: Set(Role::None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok((user, true))
    }

    /// Reports whether the record for `email` carries exactly `role`.
    ///
    /// Absent records never match, so the gate falls through to Forbidden.
    pub async fn has_role(
        db: &DatabaseConnection,
        email: &str,
        role: Role,
    ) -> Result<bool, DbErr> {
        Ok(Model::find_by_email(db, email)
            .await?
            .map(|u| u.role == role)
            .unwrap_or(false))
    }

    /// Sets the role tag on an existing record.
    pub async fn set_role(
        db: &DatabaseConnection,
        user_id: i64,
        role: Role,
    ) -> Result<Model, DbErr> {
        let user = Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User {} not found", user_id)))?;

        let mut active: ActiveModel = user.into();
        active.role = Set(role);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }
}
