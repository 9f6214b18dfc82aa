//! Telegram group factory for creating test notification group entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notification groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::telegram_group::GroupFactory;
///
/// let group = GroupFactory::new(&db)
///     .group_type("verification")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i64,
    title: String,
    group_type: String,
    active: bool,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - chat_id: negative auto-incremented id (Telegram group ids are negative)
    /// - title: `"Group {id}"`
    /// - group_type: `"booking"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            chat_id: -(1_000_000 + id as i64),
            title: format!("Group {}", id),
            group_type: "booking".to_string(),
            active: true,
        }
    }

    pub fn chat_id(mut self, chat_id: i64) -> Self {
        self.chat_id = chat_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn group_type(mut self, group_type: impl Into<String>) -> Self {
        self.group_type = group_type.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the group entity into the database.
    pub async fn build(self) -> Result<entity::telegram_group::Model, DbErr> {
        entity::telegram_group::ActiveModel {
            id: ActiveValue::NotSet,
            chat_id: ActiveValue::Set(self.chat_id),
            title: ActiveValue::Set(self.title),
            group_type: ActiveValue::Set(self.group_type),
            is_active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking notification group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::telegram_group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

/// Creates a notification group with the given type.
pub async fn create_group_with_type(
    db: &DatabaseConnection,
    group_type: impl Into<String>,
) -> Result<entity::telegram_group::Model, DbErr> {
    GroupFactory::new(db).group_type(group_type).build().await
}
