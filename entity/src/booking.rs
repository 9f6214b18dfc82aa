use sea_orm::entity::prelude::*;

/// A room reservation.
///
/// Requester, room and destination-group display fields are denormalized
/// snapshots taken at write time so historical bookings render correctly
/// even after the referenced records are renamed or reconfigured.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub booking_number: String,
    pub user_id: i32,
    pub requester_name: String,
    pub requester_username: Option<String>,
    pub requester_division: Option<String>,
    pub requester_telegram_id: i64,
    pub room_id: i32,
    pub room_name: String,
    /// Snapshot of the destination group's chat id at creation time.
    pub chat_id: i64,
    pub title: String,
    pub division: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    /// `active` or `cancelled`. Cancelled is terminal.
    pub status: String,
    /// False means draft: the slot is reserved but no notification has fired.
    pub published: bool,
    pub has_consumption: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub consumption_note: Option<String>,
    pub consumption_chat_id: Option<i64>,
    pub verification_chat_id: Option<i64>,
    /// Set once the end-of-meeting cleanup notification has fired.
    pub hrd_notified: bool,
    pub cancelled_at: Option<DateTimeUtc>,
    pub cancelled_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::booking_history::Entity")]
    BookingHistory,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::booking_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
