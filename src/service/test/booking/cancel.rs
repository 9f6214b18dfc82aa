use super::*;

/// Tests cancelling a booking.
///
/// Expected: Ok with status cancelled, who and when recorded, a
/// `cancelled` audit row with old data only, and a notification dispatched
#[tokio::test]
async fn cancels_booking_and_records_audit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    let cancelled = service.cancel(booking.id, user.id, false).await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled.as_str());
    assert_eq!(cancelled.cancelled_by, Some(user.id));
    assert!(cancelled.cancelled_at.is_some());

    let history = HistoryRepository::new(db).list_by_booking(booking.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].action, BookingAction::Cancelled.as_str());
    assert!(history[1].old_data.is_some());
    assert!(history[1].new_data.is_none());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, group.chat_id);
    assert!(messages[0].1.contains(&booking.booking_number));

    Ok(())
}

/// Tests that cancellation is terminal.
///
/// Expected: Err(BadRequest) on the second cancel, with exactly one
/// `cancelled` audit row and one notification
#[tokio::test]
async fn rejects_double_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    service.cancel(booking.id, user.id, false).await?;
    let again = service.cancel(booking.id, user.id, false).await;

    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert_eq!(notifier.messages().len(), 1);

    // The rejected second cancel leaves no trace in the audit trail
    let history = HistoryRepository::new(db).list_by_booking(booking.id).await?;
    let cancelled_rows = history
        .iter()
        .filter(|row| row.action == BookingAction::Cancelled.as_str())
        .count();
    assert_eq!(cancelled_rows, 1);
    assert_eq!(history.len(), 2);

    Ok(())
}

/// Tests cancel authorization.
///
/// Expected: Err(Forbidden) for a stranger, Ok for an admin
#[tokio::test]
async fn only_owner_or_admin_may_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    let denied = service.cancel(booking.id, stranger.id, false).await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    service.cancel(booking.id, admin.id, true).await?;

    Ok(())
}

/// Tests that cancellation releases the slot.
///
/// Expected: Ok creating a new booking over the cancelled interval
#[tokio::test]
async fn cancelled_booking_releases_its_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;
    service.cancel(booking.id, user.id, false).await?;

    service.create(params_for(&user, &room, &group, start, end)).await?;

    Ok(())
}
