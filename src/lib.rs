//! Meeting-room reservation backend with Telegram notification dispatch.
//!
//! The crate follows a layered architecture:
//!
//! - **Service Layer** (`service/`) - Booking lifecycle, validation policy,
//!   conflict detection, cleanup sweep, and notification dispatch
//! - **Data Layer** (`data/`) - Repository structs over SeaORM entities
//! - **Model Layer** (`model/`) - Parameter types and audit snapshots
//! - **Error Layer** (`error/`) - Application error types
//! - **Scheduler** (`scheduler/`) - Cron job for cleanup notifications
//!
//! HTTP routing, bot command parsing, and authentication are external
//! collaborators and intentionally not part of this crate.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
