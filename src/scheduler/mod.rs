pub mod cleanup_notifications;
