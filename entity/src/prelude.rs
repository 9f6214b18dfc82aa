pub use super::booking::Entity as Booking;
pub use super::booking_history::Entity as BookingHistory;
pub use super::room::Entity as Room;
pub use super::setting::Entity as Setting;
pub use super::telegram_group::Entity as TelegramGroup;
pub use super::user::Entity as User;
