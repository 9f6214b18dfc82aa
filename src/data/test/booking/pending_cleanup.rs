use super::*;

/// Tests the cleanup candidate query.
///
/// Only active, published bookings whose end time has passed and whose
/// cleanup flag is still clear should be returned.
///
/// Expected: Ok with exactly the ended, published, unnotified booking
#[tokio::test]
async fn returns_only_ended_published_unnotified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let now = Utc::now();

    let due = factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(2), now - Duration::hours(1))
        .published(true)
        .build()
        .await?;

    // Ended but never published
    factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(4), now - Duration::hours(3))
        .published(false)
        .build()
        .await?;

    // Ended but cancelled
    factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(6), now - Duration::hours(5))
        .published(true)
        .status("cancelled")
        .build()
        .await?;

    // Ended and already notified
    factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(8), now - Duration::hours(7))
        .published(true)
        .hrd_notified(true)
        .build()
        .await?;

    // Still in progress
    factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::minutes(30), now + Duration::minutes(30))
        .published(true)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let pending = repo.pending_cleanup(now).await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, due.id);

    assert_eq!(repo.pending_cleanup_count(now).await?, 1);

    Ok(())
}

/// Tests that cleanup candidates come back oldest first.
///
/// Expected: Ok with bookings ordered by ascending end time
#[tokio::test]
async fn orders_candidates_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let now = Utc::now();

    let newer = factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(2), now - Duration::hours(1))
        .published(true)
        .build()
        .await?;
    let older = factory::BookingFactory::new(db, &user, &room)
        .interval(now - Duration::hours(5), now - Duration::hours(4))
        .published(true)
        .build()
        .await?;

    let pending = BookingRepository::new(db).pending_cleanup(now).await?;

    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].id, older.id);
    assert_eq!(pending[1].id, newer.id);

    Ok(())
}

/// Tests the recent-ended monitoring query.
///
/// Expected: Ok with ended published bookings, most recent first, capped
/// at the limit
#[tokio::test]
async fn recent_ended_is_limited_and_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let now = Utc::now();

    for hours in [2, 4, 6] {
        factory::BookingFactory::new(db, &user, &room)
            .interval(
                now - Duration::hours(hours + 1),
                now - Duration::hours(hours),
            )
            .published(true)
            .build()
            .await?;
    }

    let recent = BookingRepository::new(db).recent_ended(now, 2).await?;

    assert_eq!(recent.len(), 2);
    assert!(recent[0].end_time > recent[1].end_time);

    Ok(())
}
