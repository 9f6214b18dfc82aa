use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::ConnectionTrait;

use crate::{data::booking::BookingRepository, error::AppError};

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` conflict iff
/// `s1 < e2 && e1 > s2`. Boundary-touching intervals do not overlap.
pub fn intervals_overlap(
    s1: DateTime<Utc>,
    e1: DateTime<Utc>,
    s2: DateTime<Utc>,
    e2: DateTime<Utc>,
) -> bool {
    s1 < e2 && e1 > s2
}

/// Checks a candidate interval against the active bookings of a room.
///
/// Generic over the connection so callers can run the check inside the same
/// transaction as the write it guards.
pub struct ConflictDetector<'a, C: ConnectionTrait> {
    conn: &'a C,
    tz: FixedOffset,
}

impl<'a, C: ConnectionTrait> ConflictDetector<'a, C> {
    pub fn new(conn: &'a C, tz: FixedOffset) -> Self {
        Self { conn, tz }
    }

    /// Returns the first active booking in the room overlapping the candidate
    /// interval, if any. Exhaustive listing is not required — one blocking
    /// booking is enough to reject, and its details feed the error message.
    pub async fn find_conflict(
        &self,
        room_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_booking_id: Option<i32>,
    ) -> Result<Option<entity::booking::Model>, AppError> {
        let conflict = BookingRepository::new(self.conn)
            .find_conflict(room_id, start, end, exclude_booking_id)
            .await?;

        Ok(conflict)
    }

    /// Human-readable description of the blocking booking: requester,
    /// optional division, local wall-clock range and room name.
    pub fn format_conflict_message(&self, conflicting: &entity::booking::Model) -> String {
        let start = conflicting.start_time.with_timezone(&self.tz);
        let end = conflicting.end_time.with_timezone(&self.tz);

        let mut message = format!("Room already booked by {}", conflicting.requester_name);

        if let Some(division) = &conflicting.requester_division {
            message.push_str(&format!(" ({})", division));
        }

        message.push_str(&format!(
            " from {} to {} in {}",
            start.format("%H:%M"),
            end.format("%H:%M"),
            conflicting.room_name
        ));

        message
    }
}
