use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::setting::{self, SettingRepository},
    error::AppError,
};

/// Minimum booking duration for non-admin requesters, in minutes.
pub const MIN_BOOKING_MINUTES: i64 = 15;

pub const DEFAULT_OPERATING_START: &str = "08:00";
pub const DEFAULT_OPERATING_END: &str = "18:00";

/// Validates candidate intervals against configured operating hours and the
/// minimum duration rule. Admin callers bypass both checks.
pub struct OperatingPolicy<'a> {
    db: &'a DatabaseConnection,
    tz: FixedOffset,
}

impl<'a> OperatingPolicy<'a> {
    pub fn new(db: &'a DatabaseConnection, tz: FixedOffset) -> Self {
        Self { db, tz }
    }

    /// Checks that both boundaries fall within the configured operating
    /// window, compared on local wall-clock time of day only — the date is
    /// not bounded here.
    ///
    /// A missing or unparseable operating-hours setting fails open: a
    /// misconfigured system must not block all bookings.
    pub async fn validate_operating_hours(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_admin: bool,
    ) -> Result<(), AppError> {
        if is_admin {
            return Ok(());
        }

        let (open, close) = match self.operating_hours().await {
            Ok(window) => window,
            Err(e) => {
                tracing::warn!("Could not load operating hours, allowing booking: {}", e);
                return Ok(());
            }
        };

        let booking_start = start.with_timezone(&self.tz).time();
        let booking_end = end.with_timezone(&self.tz).time();

        if booking_start < open || booking_end > close {
            return Err(AppError::PolicyViolation(format!(
                "Operating hours: {} - {}. Your booking: {} - {}",
                open.format("%H:%M"),
                close.format("%H:%M"),
                booking_start.format("%H:%M"),
                booking_end.format("%H:%M")
            )));
        }

        Ok(())
    }

    /// Checks the minimum duration rule. The violation message reports whole
    /// minutes, truncated.
    pub fn validate_duration(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_admin: bool,
    ) -> Result<(), AppError> {
        if is_admin {
            return Ok(());
        }

        let minutes = (end - start).num_minutes();

        if minutes < MIN_BOOKING_MINUTES {
            return Err(AppError::PolicyViolation(format!(
                "Minimum booking duration is {} minutes. You selected {} minutes.",
                MIN_BOOKING_MINUTES, minutes
            )));
        }

        Ok(())
    }

    /// Reads the operating window from settings. Missing rows fall back to
    /// the defaults; unparseable values are an error (handled fail-open by
    /// the caller).
    async fn operating_hours(&self) -> Result<(NaiveTime, NaiveTime), AppError> {
        let repo = SettingRepository::new(self.db);

        let start = repo
            .get_value(setting::OPERATING_HOURS_START)
            .await?
            .unwrap_or_else(|| DEFAULT_OPERATING_START.to_string());
        let end = repo
            .get_value(setting::OPERATING_HOURS_END)
            .await?
            .unwrap_or_else(|| DEFAULT_OPERATING_END.to_string());

        Ok((parse_hhmm(&start)?, parse_hhmm(&end)?))
    }
}

fn parse_hhmm(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::InternalError(format!("Invalid operating hours value '{}'", value)))
}
