use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking. Cancelled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Active,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Audit trail action recorded for each lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Created,
    Updated,
    Published,
    Cancelled,
}

impl BookingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingAction::Created => "created",
            BookingAction::Updated => "updated",
            BookingAction::Published => "published",
            BookingAction::Cancelled => "cancelled",
        }
    }
}

/// Parameters for creating a booking.
pub struct CreateBookingParams {
    pub user_id: i32,
    pub room_id: i32,
    /// Destination notification group (telegram_group row id). Its chat id is
    /// snapshotted onto the booking.
    pub group_id: i32,
    pub title: String,
    pub division: Option<String>,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub consumption: Option<ConsumptionParams>,
    /// Explicit cleanup/verification group chat id; resolved from settings
    /// when absent.
    pub verification_chat_id: Option<i64>,
    pub is_admin: bool,
}

/// Optional catering sub-record supplied at creation time.
pub struct ConsumptionParams {
    pub note: Option<String>,
    /// Explicit catering group chat id; resolved from settings when absent.
    pub chat_id: Option<i64>,
}

/// Partial update for a booking. Only supplied fields change.
#[derive(Default)]
pub struct UpdateBookingParams {
    pub room_id: Option<i32>,
    pub title: Option<String>,
    pub division: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Snapshot of a booking's mutable fields, stored as JSON in the audit trail
/// and used to diff "updated" notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryData {
    pub room_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub division: Option<String>,
}

impl HistoryData {
    /// Captures the mutable display fields of a booking.
    pub fn snapshot(booking: &entity::booking::Model) -> Self {
        Self {
            room_name: Some(booking.room_name.clone()),
            start_time: Some(booking.start_time),
            end_time: Some(booking.end_time),
            title: Some(booking.title.clone()),
            description: booking.description.clone(),
            division: booking.division.clone(),
        }
    }
}
