use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub const OPERATING_HOURS_START: &str = "operating_hours_start";
pub const OPERATING_HOURS_END: &str = "operating_hours_end";
pub const BOOKING_COUNTER: &str = "booking_counter";
pub const DEFAULT_CONSUMPTION_CHAT_ID: &str = "default_consumption_chat_id";
pub const DEFAULT_VERIFICATION_CHAT_ID: &str = "default_verification_chat_id";

pub struct SettingRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get(&self, key: &str) -> Result<Option<entity::setting::Model>, DbErr> {
        entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.conn)
            .await
    }

    pub async fn get_value(&self, key: &str) -> Result<Option<String>, DbErr> {
        Ok(self.get(key).await?.map(|setting| setting.value))
    }

    /// Creates or replaces a setting row.
    pub async fn upsert(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
    ) -> Result<entity::setting::Model, DbErr> {
        match self.get(key).await? {
            Some(existing) => {
                let mut active: entity::setting::ActiveModel = existing.into();
                active.value = ActiveValue::Set(value.to_string());
                if let Some(description) = description {
                    active.description = ActiveValue::Set(Some(description.to_string()));
                }
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.conn).await
            }
            None => {
                entity::setting::ActiveModel {
                    key: ActiveValue::Set(key.to_string()),
                    value: ActiveValue::Set(value.to_string()),
                    description: ActiveValue::Set(description.map(str::to_string)),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.conn)
                .await
            }
        }
    }

    /// Allocates the next booking number, formatted `BK-NNNNN`.
    ///
    /// Increment-and-read on the counter row. Callers must run this inside the
    /// same transaction as the booking insert so concurrent allocations are
    /// serialized and never produce duplicates. Numbers are never reused; gaps
    /// are permitted when a transaction rolls back after allocation.
    pub async fn next_booking_number(&self) -> Result<String, DbErr> {
        let counter = match self.get(BOOKING_COUNTER).await? {
            Some(row) => {
                let current: i64 = row.value.parse().map_err(|_| {
                    DbErr::Custom(format!("Invalid booking counter value '{}'", row.value))
                })?;
                let next = current + 1;

                let mut active: entity::setting::ActiveModel = row.into();
                active.value = ActiveValue::Set(next.to_string());
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.conn).await?;

                next
            }
            None => {
                entity::setting::ActiveModel {
                    key: ActiveValue::Set(BOOKING_COUNTER.to_string()),
                    value: ActiveValue::Set("1".to_string()),
                    description: ActiveValue::Set(Some(
                        "Counter for generating booking numbers".to_string(),
                    )),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.conn)
                .await?;

                1
            }
        };

        Ok(format!("BK-{:05}", counter))
    }
}
