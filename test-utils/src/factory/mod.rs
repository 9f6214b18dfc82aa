//! Factory methods for creating test data.
//!
//! This module provides factory patterns for creating test entities with sensible
//! defaults, making tests more concise and maintainable. Each factory supports
//! both simple creation functions and builder patterns for customization.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Simple creation with defaults
//! let room = factory::create_room(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let group = factory::create_group(&db).await?;
//!
//! // Builder pattern for customization
//! let booking = factory::BookingFactory::new(&db, &user, &room)
//!     .title("Quarterly Review")
//!     .published(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `room` - Create meeting room entities
//! - `user` - Create user entities
//! - `telegram_group` - Create notification group entities
//! - `setting` - Create runtime setting entities
//! - `booking` - Create booking entities
//! - `helpers` - Unique ID generation shared by all factories

pub mod booking;
pub mod helpers;
pub mod room;
pub mod setting;
pub mod telegram_group;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::{create_booking, BookingFactory};
pub use room::create_room;
pub use setting::set_setting;
pub use telegram_group::{create_group, create_group_with_type};
pub use user::{create_admin, create_user};
