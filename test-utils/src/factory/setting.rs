//! Setting factory for creating test runtime setting entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a setting row with the given key and value.
///
/// Settings are keyed uniquely, so tests should call this at most once per
/// key within a single test database.
///
/// # Example
///
/// ```rust,ignore
/// set_setting(&db, "operating_hours_start", "09:00").await?;
/// ```
pub async fn set_setting(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::setting::Model, DbErr> {
    entity::setting::ActiveModel {
        id: ActiveValue::NotSet,
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.into()),
        description: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
