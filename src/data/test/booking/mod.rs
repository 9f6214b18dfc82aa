use crate::{
    data::booking::{BookingRepository, NewBookingParams},
    model::booking::BookingStatus,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_hrd_notified;
mod pending_cleanup;
