use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::booking::BookingStatus;

/// Column values for a new booking row. Snapshot fields are resolved by the
/// service layer before they reach the repository.
pub struct NewBookingParams {
    pub booking_number: String,
    pub user_id: i32,
    pub requester_name: String,
    pub requester_username: Option<String>,
    pub requester_division: Option<String>,
    pub requester_telegram_id: i64,
    pub room_id: i32,
    pub room_name: String,
    pub chat_id: i64,
    pub title: String,
    pub division: Option<String>,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub has_consumption: bool,
    pub consumption_note: Option<String>,
    pub consumption_chat_id: Option<i64>,
    pub verification_chat_id: Option<i64>,
}

/// Field changes applied by an update. `None` leaves the column untouched.
#[derive(Default)]
pub struct BookingUpdateValues {
    /// New room id plus its name snapshot.
    pub room: Option<(i32, String)>,
    pub title: Option<String>,
    pub division: Option<String>,
    pub description: Option<String>,
    pub interval: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

pub struct BookingRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new booking as an unpublished draft.
    pub async fn create(&self, params: NewBookingParams) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            booking_number: ActiveValue::Set(params.booking_number),
            user_id: ActiveValue::Set(params.user_id),
            requester_name: ActiveValue::Set(params.requester_name),
            requester_username: ActiveValue::Set(params.requester_username),
            requester_division: ActiveValue::Set(params.requester_division),
            requester_telegram_id: ActiveValue::Set(params.requester_telegram_id),
            room_id: ActiveValue::Set(params.room_id),
            room_name: ActiveValue::Set(params.room_name),
            chat_id: ActiveValue::Set(params.chat_id),
            title: ActiveValue::Set(params.title),
            division: ActiveValue::Set(params.division),
            description: ActiveValue::Set(params.description),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            status: ActiveValue::Set(BookingStatus::Active.as_str().to_string()),
            published: ActiveValue::Set(false),
            has_consumption: ActiveValue::Set(params.has_consumption),
            consumption_note: ActiveValue::Set(params.consumption_note),
            consumption_chat_id: ActiveValue::Set(params.consumption_chat_id),
            verification_chat_id: ActiveValue::Set(params.verification_chat_id),
            hrd_notified: ActiveValue::Set(false),
            cancelled_at: ActiveValue::Set(None),
            cancelled_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.conn).await
    }

    pub async fn get_by_number(
        &self,
        booking_number: &str,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookingNumber.eq(booking_number))
            .one(self.conn)
            .await
    }

    /// Finds an active booking in the room whose interval overlaps the
    /// candidate. Half-open semantics: a booking ending exactly when another
    /// starts does not conflict. Drafts participate — an unpublished booking
    /// still reserves its slot.
    ///
    /// # Arguments
    /// - `exclude_booking_id` - Skip this booking (update path, so a booking
    ///   can be moved without conflicting with itself)
    pub async fn find_conflict(
        &self,
        room_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_booking_id: Option<i32>,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::StartTime.lt(end))
            .filter(entity::booking::Column::EndTime.gt(start));

        if let Some(exclude_id) = exclude_booking_id {
            query = query.filter(entity::booking::Column::Id.ne(exclude_id));
        }

        query.one(self.conn).await
    }

    /// Lists a user's bookings, newest first, optionally filtered by status.
    pub async fn list_by_user(
        &self,
        user_id: i32,
        status: Option<BookingStatus>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }

        query.all(self.conn).await
    }

    /// Marks a booking as published.
    pub async fn set_published(
        &self,
        booking: entity::booking::Model,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active: entity::booking::ActiveModel = booking.into();
        active.published = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.conn).await
    }

    /// Applies the supplied field changes to a booking.
    pub async fn apply_update(
        &self,
        booking: entity::booking::Model,
        values: BookingUpdateValues,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active: entity::booking::ActiveModel = booking.into();

        if let Some((room_id, room_name)) = values.room {
            active.room_id = ActiveValue::Set(room_id);
            active.room_name = ActiveValue::Set(room_name);
        }
        if let Some(title) = values.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(division) = values.division {
            active.division = ActiveValue::Set(Some(division));
        }
        if let Some(description) = values.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some((start, end)) = values.interval {
            active.start_time = ActiveValue::Set(start);
            active.end_time = ActiveValue::Set(end);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.conn).await
    }

    /// Cancels a booking, recording when and by whom.
    pub async fn cancel(
        &self,
        booking: entity::booking::Model,
        cancelled_by: i32,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(BookingStatus::Cancelled.as_str().to_string());
        active.cancelled_at = ActiveValue::Set(Some(now));
        active.cancelled_by = ActiveValue::Set(Some(cancelled_by));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.conn).await
    }

    /// Active, published bookings that have ended and not yet triggered the
    /// cleanup notification, oldest first.
    pub async fn pending_cleanup(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::Published.eq(true))
            .filter(entity::booking::Column::EndTime.lt(now))
            .filter(entity::booking::Column::HrdNotified.eq(false))
            .order_by_asc(entity::booking::Column::EndTime)
            .all(self.conn)
            .await
    }

    pub async fn pending_cleanup_count(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::Published.eq(true))
            .filter(entity::booking::Column::EndTime.lt(now))
            .filter(entity::booking::Column::HrdNotified.eq(false))
            .count(self.conn)
            .await
    }

    /// Recently ended published bookings, most recent first. Read-only view
    /// for operational monitoring.
    pub async fn recent_ended(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::Published.eq(true))
            .filter(entity::booking::Column::EndTime.lt(now))
            .order_by_desc(entity::booking::Column::EndTime)
            .limit(limit)
            .all(self.conn)
            .await
    }

    /// Flips `hrd_notified` for a booking, guarded so the flip happens at most
    /// once and never touches a cancelled row.
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the flip
    /// - `Ok(false)` - Already flipped, or the booking is no longer active
    pub async fn mark_hrd_notified(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::HrdNotified, Expr::value(true))
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .filter(entity::booking::Column::HrdNotified.eq(false))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
