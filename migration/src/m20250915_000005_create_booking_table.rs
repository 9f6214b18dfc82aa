use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250915_000001_create_room_table::Room, m20250915_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(string_uniq(Booking::BookingNumber))
                    .col(integer(Booking::UserId))
                    .col(string(Booking::RequesterName))
                    .col(string_null(Booking::RequesterUsername))
                    .col(string_null(Booking::RequesterDivision))
                    .col(big_integer(Booking::RequesterTelegramId))
                    .col(integer(Booking::RoomId))
                    .col(string(Booking::RoomName))
                    .col(big_integer(Booking::ChatId))
                    .col(string(Booking::Title))
                    .col(string_null(Booking::Division))
                    .col(text_null(Booking::Description))
                    .col(timestamp(Booking::StartTime))
                    .col(timestamp(Booking::EndTime))
                    .col(string(Booking::Status).default("active"))
                    .col(boolean(Booking::Published).default(false))
                    .col(boolean(Booking::HasConsumption).default(false))
                    .col(text_null(Booking::ConsumptionNote))
                    .col(big_integer_null(Booking::ConsumptionChatId))
                    .col(big_integer_null(Booking::VerificationChatId))
                    .col(boolean(Booking::HrdNotified).default(false))
                    .col(timestamp_null(Booking::CancelledAt))
                    .col(integer_null(Booking::CancelledBy))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict checks filter on room + interval; keep that path indexed.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_interval")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::StartTime)
                    .col(Booking::EndTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_user_id")
                    .table(Booking::Table)
                    .col(Booking::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    BookingNumber,
    UserId,
    RequesterName,
    RequesterUsername,
    RequesterDivision,
    RequesterTelegramId,
    RoomId,
    RoomName,
    ChatId,
    Title,
    Division,
    Description,
    StartTime,
    EndTime,
    Status,
    Published,
    HasConsumption,
    ConsumptionNote,
    ConsumptionChatId,
    VerificationChatId,
    HrdNotified,
    CancelledAt,
    CancelledBy,
    CreatedAt,
    UpdatedAt,
}
