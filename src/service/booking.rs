use chrono::FixedOffset;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use crate::{
    data::{
        booking::{BookingRepository, BookingUpdateValues, NewBookingParams},
        history::{HistoryRepository, RecordHistoryParams},
        setting::{self, SettingRepository},
    },
    error::AppError,
    model::booking::{
        BookingAction, BookingStatus, CreateBookingParams, HistoryData, UpdateBookingParams,
    },
    service::{
        conflict::ConflictDetector,
        notification::{BookingNotificationService, Notifier},
        policy::OperatingPolicy,
        settings,
    },
    util::text,
};

/// Booking lifecycle state machine: create (draft) → publish → update /
/// cancel, plus read operations.
///
/// Every precondition is checked before the first persistent write. Once the
/// primary state change commits, audit and notification are best-effort and
/// never roll it back.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    tz: FixedOffset,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier, tz: FixedOffset) -> Self {
        Self { db, notifier, tz }
    }

    /// Creates a booking as an unpublished draft.
    ///
    /// The draft already reserves its slot — it blocks conflicting bookings
    /// before publish — but no notification fires until `publish`.
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, AppError> {
        let room = entity::prelude::Room::find_by_id(params.room_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;
        if !room.is_active {
            return Err(AppError::BadRequest("Room is not active".to_string()));
        }

        let user = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let group = entity::prelude::TelegramGroup::find_by_id(params.group_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification group not found".to_string()))?;
        if !group.is_active {
            return Err(AppError::BadRequest(
                "Notification group is not active".to_string(),
            ));
        }

        let policy = OperatingPolicy::new(self.db, self.tz);
        policy
            .validate_operating_hours(params.start_time, params.end_time, params.is_admin)
            .await?;
        policy.validate_duration(params.start_time, params.end_time, params.is_admin)?;

        let title = text::normalize_title(&params.title);
        let description = params
            .description
            .as_deref()
            .map(text::normalize_description);

        let (has_consumption, consumption_note, consumption_chat_id) = match params.consumption {
            Some(consumption) => {
                let chat_id = match consumption.chat_id {
                    Some(chat_id) => Some(chat_id),
                    None => {
                        settings::default_chat_id(self.db, setting::DEFAULT_CONSUMPTION_CHAT_ID)
                            .await?
                    }
                };
                (true, consumption.note, chat_id)
            }
            None => (false, None, None),
        };

        let verification_chat_id = match params.verification_chat_id {
            Some(chat_id) => Some(chat_id),
            None => {
                settings::default_chat_id(self.db, setting::DEFAULT_VERIFICATION_CHAT_ID).await?
            }
        };

        // Conflict check, number allocation, and insert share one transaction
        // so two simultaneous requests for the same slot cannot both pass.
        let txn = self.db.begin().await?;

        let detector = ConflictDetector::new(&txn, self.tz);
        if let Some(conflicting) = detector
            .find_conflict(params.room_id, params.start_time, params.end_time, None)
            .await?
        {
            return Err(AppError::Conflict(
                detector.format_conflict_message(&conflicting),
            ));
        }

        let booking_number = SettingRepository::new(&txn).next_booking_number().await?;

        let booking = BookingRepository::new(&txn)
            .create(NewBookingParams {
                booking_number,
                user_id: user.id,
                requester_name: user.full_name.clone(),
                requester_username: user.username.clone(),
                requester_division: user.division.clone(),
                requester_telegram_id: user.telegram_id,
                room_id: room.id,
                room_name: room.name.clone(),
                chat_id: group.chat_id,
                title,
                division: params.division,
                description,
                start_time: params.start_time,
                end_time: params.end_time,
                has_consumption,
                consumption_note,
                consumption_chat_id,
                verification_chat_id,
            })
            .await?;

        txn.commit().await?;

        self.record_history(
            &booking,
            user.id,
            BookingAction::Created,
            None,
            Some(&HistoryData::snapshot(&booking)),
        )
        .await;

        Ok(booking)
    }

    /// Publishes a draft, firing the one-time announcement to its groups.
    pub async fn publish(
        &self,
        booking_id: i32,
        actor_id: i32,
        is_admin: bool,
    ) -> Result<entity::booking::Model, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status != BookingStatus::Active.as_str() {
            return Err(AppError::BadRequest(
                "Booking has been cancelled".to_string(),
            ));
        }
        if booking.published {
            return Err(AppError::BadRequest(
                "Booking is already published".to_string(),
            ));
        }
        if booking.user_id != actor_id && !is_admin {
            return Err(AppError::Forbidden(
                "Only the requester or an admin may publish this booking".to_string(),
            ));
        }

        let booking = repo.set_published(booking).await?;

        self.record_history(
            &booking,
            actor_id,
            BookingAction::Published,
            None,
            Some(&HistoryData::snapshot(&booking)),
        )
        .await;

        BookingNotificationService::new(self.notifier, self.tz)
            .notify_published(&booking)
            .await;

        Ok(booking)
    }

    /// Applies a partial update. Interval or room changes re-run the policy
    /// and conflict checks; the conflict check excludes the booking itself so
    /// it can be moved within (or overlapping) its own slot.
    pub async fn update(
        &self,
        booking_id: i32,
        actor_id: i32,
        params: UpdateBookingParams,
        is_admin: bool,
    ) -> Result<entity::booking::Model, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status != BookingStatus::Active.as_str() {
            return Err(AppError::BadRequest(
                "Booking has been cancelled".to_string(),
            ));
        }
        if booking.user_id != actor_id && !is_admin {
            return Err(AppError::Forbidden(
                "Only the requester or an admin may modify this booking".to_string(),
            ));
        }

        let actor = entity::prelude::User::find_by_id(actor_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        // The policy bypass follows the current user record, not the caller
        // flag; the actor may have been promoted or demoted since
        // authenticating and a stale flag must not bypass the rules.
        let effective_admin = actor.is_admin;

        let old_data = HistoryData::snapshot(&booking);

        let mut values = BookingUpdateValues::default();
        let mut target_room_id = booking.room_id;

        if let Some(room_id) = params.room_id {
            let room = entity::prelude::Room::find_by_id(room_id)
                .one(self.db)
                .await?
                .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;
            if !room.is_active {
                return Err(AppError::BadRequest("Room is not active".to_string()));
            }
            target_room_id = room.id;
            values.room = Some((room.id, room.name));
        }

        if let Some(title) = params.title {
            values.title = Some(text::normalize_title(&title));
        }
        if let Some(division) = params.division {
            values.division = Some(division);
        }
        if let Some(description) = params.description {
            values.description = Some(text::normalize_description(&description));
        }

        let interval_changed = params.start_time.is_some() || params.end_time.is_some();
        let new_start = params.start_time.unwrap_or(booking.start_time);
        let new_end = params.end_time.unwrap_or(booking.end_time);

        if interval_changed {
            let policy = OperatingPolicy::new(self.db, self.tz);
            policy
                .validate_operating_hours(new_start, new_end, effective_admin)
                .await?;
            policy.validate_duration(new_start, new_end, effective_admin)?;
            values.interval = Some((new_start, new_end));
        }

        let booking = if interval_changed || values.room.is_some() {
            // Moving the booking: the conflict check must be atomic with the
            // write, same as on create.
            let txn = self.db.begin().await?;

            let detector = ConflictDetector::new(&txn, self.tz);
            if let Some(conflicting) = detector
                .find_conflict(target_room_id, new_start, new_end, Some(booking.id))
                .await?
            {
                return Err(AppError::Conflict(
                    detector.format_conflict_message(&conflicting),
                ));
            }

            let updated = BookingRepository::new(&txn)
                .apply_update(booking, values)
                .await?;
            txn.commit().await?;
            updated
        } else {
            repo.apply_update(booking, values).await?
        };

        self.record_history(
            &booking,
            actor_id,
            BookingAction::Updated,
            Some(&old_data),
            Some(&HistoryData::snapshot(&booking)),
        )
        .await;

        BookingNotificationService::new(self.notifier, self.tz)
            .notify_updated(&booking, &old_data, &actor.full_name)
            .await;

        Ok(booking)
    }

    /// Cancels a booking. Cancellation is terminal.
    pub async fn cancel(
        &self,
        booking_id: i32,
        actor_id: i32,
        is_admin: bool,
    ) -> Result<entity::booking::Model, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status != BookingStatus::Active.as_str() {
            return Err(AppError::BadRequest(
                "Booking has already been cancelled".to_string(),
            ));
        }
        if booking.user_id != actor_id && !is_admin {
            return Err(AppError::Forbidden(
                "Only the requester or an admin may cancel this booking".to_string(),
            ));
        }

        let old_data = HistoryData::snapshot(&booking);

        let booking = repo.cancel(booking, actor_id).await?;

        self.record_history(
            &booking,
            actor_id,
            BookingAction::Cancelled,
            Some(&old_data),
            None,
        )
        .await;

        BookingNotificationService::new(self.notifier, self.tz)
            .notify_cancelled(&booking)
            .await;

        Ok(booking)
    }

    /// Lists a user's bookings, newest first.
    pub async fn list_user_bookings(
        &self,
        user_id: i32,
        status: Option<BookingStatus>,
    ) -> Result<Vec<entity::booking::Model>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .list_by_user(user_id, status)
            .await?;

        Ok(bookings)
    }

    pub async fn get_by_number(
        &self,
        booking_number: &str,
    ) -> Result<Option<entity::booking::Model>, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_number(booking_number)
            .await?;

        Ok(booking)
    }

    /// Best-effort audit write. Audit is observability, not a correctness
    /// invariant: a failed write is logged and the lifecycle transition
    /// stands.
    async fn record_history(
        &self,
        booking: &entity::booking::Model,
        changed_by: i32,
        action: BookingAction,
        old_data: Option<&HistoryData>,
        new_data: Option<&HistoryData>,
    ) {
        let result = HistoryRepository::new(self.db)
            .record(RecordHistoryParams {
                booking_id: booking.id,
                booking_number: &booking.booking_number,
                changed_by,
                action,
                old_data,
                new_data,
            })
            .await;

        if let Err(e) = result {
            tracing::warn!(
                "Failed to write audit record for booking {}: {}",
                booking.booking_number,
                e
            );
        }
    }
}
