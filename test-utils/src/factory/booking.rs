//! Booking factory for creating test booking entities.
//!
//! Bookings snapshot requester and room display fields at write time, so the
//! factory takes the user and room models and copies those fields the same
//! way the application does.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, &user, &room)
///     .title("Sprint Planning")
///     .interval(start, end)
///     .published(true)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    booking_number: String,
    user: &'a entity::user::Model,
    room: &'a entity::room::Model,
    chat_id: i64,
    title: String,
    division: Option<String>,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    published: bool,
    has_consumption: bool,
    consumption_note: Option<String>,
    consumption_chat_id: Option<i64>,
    verification_chat_id: Option<i64>,
    hrd_notified: bool,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - booking_number: `"TB-{id:05}"` where id is auto-incremented (the `TB`
    ///   prefix keeps factory numbers clear of service-allocated `BK` numbers)
    /// - chat_id: `-1000` (a stand-in booking group)
    /// - title: `"Booking {id}"`
    /// - interval: one hour, starting one hour from now
    /// - status: `"active"`, unpublished, no consumption, not notified
    pub fn new(
        db: &'a DatabaseConnection,
        user: &'a entity::user::Model,
        room: &'a entity::room::Model,
    ) -> Self {
        let id = next_id();
        let start = Utc::now() + Duration::hours(1);
        Self {
            db,
            booking_number: format!("TB-{:05}", id),
            user,
            room,
            chat_id: -1000,
            title: format!("Booking {}", id),
            division: user.division.clone(),
            description: None,
            start_time: start,
            end_time: start + Duration::hours(1),
            status: "active".to_string(),
            published: false,
            has_consumption: false,
            consumption_note: None,
            consumption_chat_id: None,
            verification_chat_id: None,
            hrd_notified: false,
        }
    }

    pub fn booking_number(mut self, booking_number: impl Into<String>) -> Self {
        self.booking_number = booking_number.into();
        self
    }

    pub fn chat_id(mut self, chat_id: i64) -> Self {
        self.chat_id = chat_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the booking interval.
    pub fn interval(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn consumption(mut self, note: Option<String>, chat_id: Option<i64>) -> Self {
        self.has_consumption = true;
        self.consumption_note = note;
        self.consumption_chat_id = chat_id;
        self
    }

    pub fn verification_chat_id(mut self, chat_id: Option<i64>) -> Self {
        self.verification_chat_id = chat_id;
        self
    }

    pub fn hrd_notified(mut self, hrd_notified: bool) -> Self {
        self.hrd_notified = hrd_notified;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            booking_number: ActiveValue::Set(self.booking_number),
            user_id: ActiveValue::Set(self.user.id),
            requester_name: ActiveValue::Set(self.user.full_name.clone()),
            requester_username: ActiveValue::Set(self.user.username.clone()),
            requester_division: ActiveValue::Set(self.user.division.clone()),
            requester_telegram_id: ActiveValue::Set(self.user.telegram_id),
            room_id: ActiveValue::Set(self.room.id),
            room_name: ActiveValue::Set(self.room.name.clone()),
            chat_id: ActiveValue::Set(self.chat_id),
            title: ActiveValue::Set(self.title),
            division: ActiveValue::Set(self.division),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            published: ActiveValue::Set(self.published),
            has_consumption: ActiveValue::Set(self.has_consumption),
            consumption_note: ActiveValue::Set(self.consumption_note),
            consumption_chat_id: ActiveValue::Set(self.consumption_chat_id),
            verification_chat_id: ActiveValue::Set(self.verification_chat_id),
            hrd_notified: ActiveValue::Set(self.hrd_notified),
            cancelled_at: ActiveValue::Set(None),
            cancelled_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given user and room.
///
/// Shorthand for `BookingFactory::new(db, user, room).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    room: &entity::room::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user, room).build().await
}
