pub mod prelude;

pub mod booking;
pub mod booking_history;
pub mod room;
pub mod setting;
pub mod telegram_group;
pub mod user;
