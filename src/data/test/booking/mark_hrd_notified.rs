use super::*;

/// Tests the guarded cleanup flag flip.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second
#[tokio::test]
async fn flips_flag_at_most_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let now = Utc::now();

    let booking = factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(2), now - Duration::hours(1))
        .published(true)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(repo.mark_hrd_notified(booking.id).await?);
    assert!(!repo.mark_hrd_notified(booking.id).await?);

    let reloaded = repo.get_by_id(booking.id).await?.unwrap();
    assert!(reloaded.hrd_notified);

    Ok(())
}

/// Tests that the flip never touches a cancelled booking.
///
/// Expected: Ok(false) and the row left unchanged
#[tokio::test]
async fn does_not_touch_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let now = Utc::now();

    let booking = factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(2), now - Duration::hours(1))
        .published(true)
        .status("cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(!repo.mark_hrd_notified(booking.id).await?);

    let reloaded = repo.get_by_id(booking.id).await?.unwrap();
    assert!(!reloaded.hrd_notified);
    assert_eq!(reloaded.status, "cancelled");

    Ok(())
}
