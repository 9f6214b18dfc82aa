pub use sea_orm_migration::prelude::*;

mod m20250915_000001_create_room_table;
mod m20250915_000002_create_user_table;
mod m20250915_000003_create_telegram_group_table;
mod m20250915_000004_create_setting_table;
mod m20250915_000005_create_booking_table;
mod m20250915_000006_create_booking_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250915_000001_create_room_table::Migration),
            Box::new(m20250915_000002_create_user_table::Migration),
            Box::new(m20250915_000003_create_telegram_group_table::Migration),
            Box::new(m20250915_000004_create_setting_table::Migration),
            Box::new(m20250915_000005_create_booking_table::Migration),
            Box::new(m20250915_000006_create_booking_history_table::Migration),
        ]
    }
}
