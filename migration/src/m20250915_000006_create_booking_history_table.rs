use sea_orm_migration::{prelude::*, schema::*};

use super::m20250915_000005_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingHistory::Id))
                    .col(integer(BookingHistory::BookingId))
                    .col(string(BookingHistory::BookingNumber))
                    .col(integer(BookingHistory::ChangedBy))
                    .col(string(BookingHistory::Action))
                    .col(text_null(BookingHistory::OldData))
                    .col(text_null(BookingHistory::NewData))
                    .col(
                        timestamp(BookingHistory::ChangedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_history_booking_id")
                            .from(BookingHistory::Table, BookingHistory::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_history_booking_id")
                    .table(BookingHistory::Table)
                    .col(BookingHistory::BookingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingHistory {
    Table,
    Id,
    BookingId,
    BookingNumber,
    ChangedBy,
    Action,
    OldData,
    NewData,
    ChangedAt,
}
