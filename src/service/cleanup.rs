use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::booking::BookingRepository,
    error::AppError,
    service::notification::{BookingNotificationService, Notifier},
};

/// Result of one cleanup sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweptBatch {
    /// Bookings whose cleanup flag this sweep flipped.
    pub notified: u64,
    /// Bookings still pending after the sweep (should be zero unless another
    /// writer raced us).
    pub remaining: u64,
}

/// End-of-meeting cleanup sweep.
///
/// Delivery is deliberately not guaranteed: the `hrd_notified` flag flips
/// after one dispatch attempt whether or not the message went out, so a
/// booking is never reconsidered and the group is never spammed. The flag
/// flip itself is guarded to happen at most once per booking.
pub struct CleanupService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    tz: FixedOffset,
}

impl<'a> CleanupService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier, tz: FixedOffset) -> Self {
        Self { db, notifier, tz }
    }

    /// Finds published, active bookings that ended before `now` and have not
    /// been notified, dispatches their cleanup message, and marks them
    /// notified. Idempotent per call: a second sweep at the same instant
    /// processes nothing, because the first already flipped the flags.
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<SweptBatch, AppError> {
        let repo = BookingRepository::new(self.db);

        let pending = repo.pending_cleanup(now).await?;
        if pending.is_empty() {
            return Ok(SweptBatch {
                notified: 0,
                remaining: 0,
            });
        }

        tracing::info!("Found {} bookings needing cleanup notification", pending.len());

        let notifications = BookingNotificationService::new(self.notifier, self.tz);
        let mut notified = 0;

        for booking in pending {
            notifications.notify_cleanup(&booking).await;

            if repo.mark_hrd_notified(booking.id).await? {
                notified += 1;
                tracing::info!(
                    "Cleanup notification processed for booking {}",
                    booking.booking_number
                );
            }
        }

        let remaining = repo.pending_cleanup_count(now).await?;

        Ok(SweptBatch { notified, remaining })
    }

    /// Number of bookings currently awaiting a cleanup notification.
    /// Read-only.
    pub async fn pending_count(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let count = BookingRepository::new(self.db)
            .pending_cleanup_count(now)
            .await?;

        Ok(count)
    }

    /// Recently ended published bookings, for monitoring. Read-only.
    pub async fn recent_ended(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<entity::booking::Model>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .recent_ended(now, limit)
            .await?;

        Ok(bookings)
    }
}
