use sea_orm::DatabaseConnection;

use crate::{
    data::setting::{self, SettingRepository},
    error::AppError,
    service::policy::{DEFAULT_OPERATING_END, DEFAULT_OPERATING_START},
};

/// Seeds default settings at boot so the common path never hits a missing
/// row. Existing values are left untouched — admins own them after that.
pub async fn bootstrap_defaults(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = SettingRepository::new(db);

    seed_if_absent(
        &repo,
        setting::OPERATING_HOURS_START,
        DEFAULT_OPERATING_START,
        "Daily opening time for non-admin bookings",
    )
    .await?;
    seed_if_absent(
        &repo,
        setting::OPERATING_HOURS_END,
        DEFAULT_OPERATING_END,
        "Daily closing time for non-admin bookings",
    )
    .await?;
    seed_if_absent(
        &repo,
        setting::BOOKING_COUNTER,
        "0",
        "Counter for generating booking numbers",
    )
    .await?;

    Ok(())
}

async fn seed_if_absent(
    repo: &SettingRepository<'_, DatabaseConnection>,
    key: &str,
    value: &str,
    description: &str,
) -> Result<(), AppError> {
    if repo.get(key).await?.is_none() {
        repo.upsert(key, value, Some(description)).await?;
        tracing::info!("Seeded default setting {} = {}", key, value);
    }

    Ok(())
}

/// Resolves a default notification chat id from settings. Absent or
/// unparseable values resolve to `None` — the booking simply carries no
/// group of that kind.
pub async fn default_chat_id(db: &DatabaseConnection, key: &str) -> Result<Option<i64>, AppError> {
    let Some(value) = SettingRepository::new(db).get_value(key).await? else {
        return Ok(None);
    };

    match value.parse::<i64>() {
        Ok(chat_id) => Ok(Some(chat_id)),
        Err(_) => {
            tracing::warn!("Ignoring invalid chat id in setting {}: '{}'", key, value);
            Ok(None)
        }
    }
}
