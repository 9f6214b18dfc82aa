//! Application error types.
//!
//! `AppError` is the top-level error type for every fallible operation in the
//! crate. Domain failures (`NotFound`, `Forbidden`, `PolicyViolation`,
//! `Conflict`) are recoverable, user-facing outcomes that callers surface
//! verbatim; infrastructure variants wrap the underlying library errors.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Referenced resource (room, user, group, booking) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Actor is neither the booking owner nor an admin.
    #[error("{0}")]
    Forbidden(String),

    /// Booking violates operating hours or minimum duration rules.
    #[error("{0}")]
    PolicyViolation(String),

    /// Requested interval overlaps an existing active booking. The message
    /// describes the blocking booking.
    #[error("{0}")]
    Conflict(String),

    /// Invalid request input (inactive room, already published, etc.).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    #[error("{0}")]
    InternalError(String),
}
