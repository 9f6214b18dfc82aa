use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};

use crate::model::booking::HistoryData;

/// Outbound message dispatch.
///
/// Implementations are best-effort: failures are reported as `false` and must
/// never propagate. Lifecycle state transitions commit before any dispatch is
/// attempted, so a dead messaging service cannot corrupt the booking ledger.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: i64, text: &str) -> bool;
}

/// Builds and dispatches booking lifecycle messages.
pub struct BookingNotificationService<'a> {
    notifier: &'a dyn Notifier,
    tz: FixedOffset,
}

impl<'a> BookingNotificationService<'a> {
    pub fn new(notifier: &'a dyn Notifier, tz: FixedOffset) -> Self {
        Self { notifier, tz }
    }

    /// Announces a freshly published booking.
    ///
    /// Always posts to the booking's primary snapshot group; additionally to
    /// the verification group when one is set, and to the catering group when
    /// the booking has a consumption request. Each dispatch is independent —
    /// one failing does not block the others.
    pub async fn notify_published(&self, booking: &entity::booking::Model) {
        let text = self.new_booking_message(booking);
        self.dispatch(booking, booking.chat_id, &text).await;

        if let Some(chat_id) = booking.verification_chat_id {
            self.dispatch(booking, chat_id, &text).await;
        }

        if booking.has_consumption {
            if let Some(chat_id) = booking.consumption_chat_id {
                let text = self.consumption_message(booking);
                self.dispatch(booking, chat_id, &text).await;
            }
        }
    }

    /// Reports an update, listing only the fields that actually changed.
    /// A no-op diff still identifies the actor.
    pub async fn notify_updated(
        &self,
        booking: &entity::booking::Model,
        old_data: &HistoryData,
        actor_name: &str,
    ) {
        let mut text = format!(
            "✏️ *Booking Updated*\n\n👤 By : {}\n🆔 #{}\n\nChanges:\n",
            actor_name, booking.booking_number
        );

        if let Some(old_room) = &old_data.room_name {
            if *old_room != booking.room_name {
                text.push_str(&format!("🚪 Room : {} → {}\n", old_room, booking.room_name));
            }
        }

        if let (Some(old_start), Some(old_end)) = (old_data.start_time, old_data.end_time) {
            let old_range = self.format_time_range(old_start, old_end);
            let new_range = self.format_time_range(booking.start_time, booking.end_time);
            if old_range != new_range {
                text.push_str(&format!("🕐 Time : {} → {}\n", old_range, new_range));
            }
        }

        if let Some(old_title) = &old_data.title {
            if *old_title != booking.title {
                text.push_str(&format!("📌 Title : {} → {}\n", old_title, booking.title));
            }
        }

        if old_data.description != booking.description {
            text.push_str("📝 Description updated\n");
        }

        self.dispatch(booking, booking.chat_id, &text).await;
    }

    pub async fn notify_cancelled(&self, booking: &entity::booking::Model) {
        let text = format!(
            "❌ *Booking Cancelled*\n\n\
             👤 Name : {}\n\
             🚪 Room : {}\n\
             🕐 Time : {} | {}\n\n\
             🆔 #{}",
            booking.requester_name,
            booking.room_name,
            self.format_date(booking.start_time),
            self.format_time_range(booking.start_time, booking.end_time),
            booking.booking_number
        );

        self.dispatch(booking, booking.chat_id, &text).await;
    }

    /// End-of-meeting housekeeping message to the verification group. Skips
    /// silently when the booking has no verification group configured.
    pub async fn notify_cleanup(&self, booking: &entity::booking::Model) {
        let Some(chat_id) = booking.verification_chat_id else {
            tracing::debug!(
                "Booking {} has no verification group, skipping cleanup notification",
                booking.booking_number
            );
            return;
        };

        let text = format!(
            "🧹 *Meeting Ended*\n\n\
             🚪 Room : {}\n\
             📌 Purpose : {}\n\
             🕐 Ended : {} | {}\n\
             🆔 #{}\n\n\
             Please verify the room is tidy and ready for the next meeting.",
            booking.room_name,
            booking.title,
            self.format_date(booking.end_time),
            booking
                .end_time
                .with_timezone(&self.tz)
                .format("%H:%M"),
            booking.booking_number
        );

        self.dispatch(booking, chat_id, &text).await;
    }

    fn new_booking_message(&self, booking: &entity::booking::Model) -> String {
        let mut text = format!(
            "📅 *New Booking*\n\n👤 Name : {}\n",
            booking.requester_name
        );

        if let Some(division) = &booking.requester_division {
            text.push_str(&format!("🏢 Division : {}\n", division));
        }

        text.push_str(&format!(
            "🚪 Room : {}\n📌 Purpose : {}\n",
            booking.room_name, booking.title
        ));

        if let Some(description) = &booking.description {
            text.push_str(&format!("📝 Details : {}\n", description));
        }

        text.push_str(&format!(
            "🕐 Time : {} | {}\n\n🆔 #{}",
            self.format_date(booking.start_time),
            self.format_time_range(booking.start_time, booking.end_time),
            booking.booking_number
        ));

        text
    }

    fn consumption_message(&self, booking: &entity::booking::Model) -> String {
        let mut text = format!(
            "🍽 *Catering Request*\n\n\
             👤 Name : {}\n\
             🚪 Room : {}\n\
             🕐 Time : {} | {}\n",
            booking.requester_name,
            booking.room_name,
            self.format_date(booking.start_time),
            self.format_time_range(booking.start_time, booking.end_time),
        );

        if let Some(note) = &booking.consumption_note {
            text.push_str(&format!("📝 Note : {}\n", note));
        }

        text.push_str(&format!("\n🆔 #{}", booking.booking_number));

        text
    }

    async fn dispatch(&self, booking: &entity::booking::Model, chat_id: i64, text: &str) {
        if !self.notifier.send(chat_id, text).await {
            tracing::warn!(
                "Failed to deliver notification for booking {} to chat {}",
                booking.booking_number,
                chat_id
            );
        }
    }

    fn format_date(&self, t: DateTime<Utc>) -> String {
        t.with_timezone(&self.tz).format("%a, %d %b %Y").to_string()
    }

    fn format_time_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!(
            "{} – {}",
            start.with_timezone(&self.tz).format("%H:%M"),
            end.with_timezone(&self.tz).format("%H:%M")
        )
    }
}
