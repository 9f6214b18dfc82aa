//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .full_name("Jordan Smith")
///     .division(Some("Finance".to_string()))
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    telegram_id: i64,
    username: Option<String>,
    full_name: String,
    division: Option<String>,
    admin: bool,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - telegram_id: auto-incremented unique id
    /// - username: `Some("user_{id}")`
    /// - full_name: `"User {id}"`
    /// - division: `Some("Engineering")`
    /// - admin: `false`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            telegram_id: id as i64,
            username: Some(format!("user_{}", id)),
            full_name: format!("User {}", id),
            division: Some("Engineering".to_string()),
            admin: false,
            active: true,
        }
    }

    pub fn telegram_id(mut self, telegram_id: i64) -> Self {
        self.telegram_id = telegram_id;
        self
    }

    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn division(mut self, division: Option<String>) -> Self {
        self.division = division;
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            telegram_id: ActiveValue::Set(self.telegram_id),
            username: ActiveValue::Set(self.username),
            full_name: ActiveValue::Set(self.full_name),
            division: ActiveValue::Set(self.division),
            is_admin: ActiveValue::Set(self.admin),
            is_active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
