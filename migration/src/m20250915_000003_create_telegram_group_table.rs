use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TelegramGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TelegramGroup::Id))
                    .col(big_integer_uniq(TelegramGroup::ChatId))
                    .col(string(TelegramGroup::Title))
                    .col(string(TelegramGroup::GroupType))
                    .col(boolean(TelegramGroup::IsActive).default(true))
                    .col(
                        timestamp(TelegramGroup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TelegramGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TelegramGroup {
    Table,
    Id,
    ChatId,
    Title,
    GroupType,
    IsActive,
    CreatedAt,
}
