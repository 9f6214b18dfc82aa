use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::booking::{BookingAction, HistoryData};

pub struct RecordHistoryParams<'a> {
    pub booking_id: i32,
    pub booking_number: &'a str,
    pub changed_by: i32,
    pub action: BookingAction,
    pub old_data: Option<&'a HistoryData>,
    pub new_data: Option<&'a HistoryData>,
}

pub struct HistoryRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> HistoryRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Appends one audit row. Rows are immutable once written; there is no
    /// update or delete path.
    pub async fn record(
        &self,
        params: RecordHistoryParams<'_>,
    ) -> Result<entity::booking_history::Model, DbErr> {
        let old_data = params
            .old_data
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to serialize old_data: {}", e)))?;
        let new_data = params
            .new_data
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to serialize new_data: {}", e)))?;

        entity::booking_history::ActiveModel {
            booking_id: ActiveValue::Set(params.booking_id),
            booking_number: ActiveValue::Set(params.booking_number.to_string()),
            changed_by: ActiveValue::Set(params.changed_by),
            action: ActiveValue::Set(params.action.as_str().to_string()),
            old_data: ActiveValue::Set(old_data),
            new_data: ActiveValue::Set(new_data),
            changed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn list_by_booking(
        &self,
        booking_id: i32,
    ) -> Result<Vec<entity::booking_history::Model>, DbErr> {
        entity::prelude::BookingHistory::find()
            .filter(entity::booking_history::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::booking_history::Column::ChangedAt)
            .all(self.conn)
            .await
    }
}
