use super::*;

/// Tests a plain field update.
///
/// Expected: Ok with the title normalized, an `updated` audit row carrying
/// both snapshots, and an update notification to the booking's group
#[tokio::test]
async fn updates_title_and_records_audit() -> Result<(), AppError> {
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

    let updated = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                title: Some("sprint planning".to_string()),
                ..Default::default()
            },
            false,
        )
        .await?;

    assert_eq!(updated.title, "Sprint Planning");

    let history = HistoryRepository::new(db).list_by_booking(booking.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].action, BookingAction::Updated.as_str());
    assert!(history[1].old_data.is_some());
    assert!(history[1].new_data.is_some());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, group.chat_id);
    assert!(messages[0].1.contains("Team Sync"));
    assert!(messages[0].1.contains("Sprint Planning"));
    assert!(messages[0].1.contains(&user.full_name));

    Ok(())
}

/// Tests moving a booking within its own slot.
///
/// The conflict check must exclude the booking itself, so extending its
/// interval over its current one succeeds.
///
/// Expected: Ok with the new interval applied
#[tokio::test]
async fn booking_can_be_moved_over_itself() -> Result<(), AppError> {
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

    let updated = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                start_time: Some(start),
                end_time: Some(end + Duration::hours(1)),
                ..Default::default()
            },
            false,
        )
        .await?;

    assert_eq!(updated.end_time, end + Duration::hours(1));

    Ok(())
}

/// Tests conflict rejection when moving onto another booking.
///
/// Expected: Err(Conflict) and the original interval untouched
#[tokio::test]
async fn rejects_moving_onto_another_booking() -> Result<(), AppError> {
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

    let (other_start, other_end) = slot(2, 11);
    service
        .create(params_for(&user, &room, &group, other_start, other_end))
        .await?;

    let result = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                start_time: Some(other_start + Duration::minutes(30)),
                end_time: Some(other_end + Duration::minutes(30)),
                ..Default::default()
            },
            false,
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unchanged = service.get_by_number(&booking.booking_number).await?.unwrap();
    assert_eq!(unchanged.start_time, start);
    assert_eq!(unchanged.end_time, end);

    Ok(())
}

/// Tests policy re-validation when the interval changes.
///
/// Expected: Err(PolicyViolation) moving out of hours, Ok for an admin actor
#[tokio::test]
async fn revalidates_policy_on_interval_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let admin = factory::create_admin(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    let (night_start, night_end) = slot(2, 21);
    let result = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                start_time: Some(night_start),
                end_time: Some(night_end),
                ..Default::default()
            },
            false,
        )
        .await;
    assert!(matches!(result, Err(AppError::PolicyViolation(_))));

    // An admin moving the same booking bypasses the window
    let moved = service
        .update(
            booking.id,
            admin.id,
            UpdateBookingParams {
                start_time: Some(night_start),
                end_time: Some(night_end),
                ..Default::default()
            },
            true,
        )
        .await?;
    assert_eq!(moved.start_time, night_start);

    Ok(())
}

/// Tests that the policy bypass follows the current user record.
///
/// A caller-supplied admin flag may be stale: an actor demoted since
/// authenticating must not bypass the operating window, and a promoted
/// actor bypasses it even when the caller flag lags behind.
///
/// Expected: Err(PolicyViolation) for the demoted actor despite the
/// caller flag, Ok for the promoted actor without it
#[tokio::test]
async fn policy_bypass_follows_current_user_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let promoted = factory::create_admin(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    // Demoted: record says non-admin, caller flag still claims admin
    let (night_start, night_end) = slot(2, 21);
    let result = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                start_time: Some(night_start),
                end_time: Some(night_end),
                ..Default::default()
            },
            true,
        )
        .await;
    assert!(matches!(result, Err(AppError::PolicyViolation(_))));

    // Promoted: record says admin, caller flag has not caught up
    let (other_start, other_end) = slot(3, 9);
    let theirs = service
        .create(params_for(&promoted, &room, &group, other_start, other_end))
        .await?;
    let (late_start, late_end) = slot(3, 21);
    let moved = service
        .update(
            theirs.id,
            promoted.id,
            UpdateBookingParams {
                start_time: Some(late_start),
                end_time: Some(late_end),
                ..Default::default()
            },
            false,
        )
        .await?;
    assert_eq!(moved.start_time, late_start);

    Ok(())
}

/// Tests moving a booking to another room.
///
/// Expected: Ok with the room snapshot refreshed; Err(Conflict) when the
/// target room's slot is taken
#[tokio::test]
async fn moves_booking_between_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let other_room = factory::create_room(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    let moved = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                room_id: Some(other_room.id),
                ..Default::default()
            },
            false,
        )
        .await?;

    assert_eq!(moved.room_id, other_room.id);
    assert_eq!(moved.room_name, other_room.name);

    // Target room now occupied: moving a second booking there must fail
    let (start2, end2) = slot(3, 9);
    let second = service
        .create(params_for(&user, &room, &group, start2, end2))
        .await?;

    let result = service
        .update(
            second.id,
            user.id,
            UpdateBookingParams {
                room_id: Some(other_room.id),
                start_time: Some(start),
                end_time: Some(end),
                ..Default::default()
            },
            false,
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests update authorization and the terminal cancelled state.
///
/// Expected: Err(Forbidden) for a stranger, Err(BadRequest) once cancelled
#[tokio::test]
async fn rejects_unauthorized_and_cancelled_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let stranger = factory::create_user(db).await?;
    let notifier = RecordingNotifier::new();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let booking = service.create(params_for(&user, &room, &group, start, end)).await?;

    let denied = service
        .update(
            booking.id,
            stranger.id,
            UpdateBookingParams {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
            false,
        )
        .await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    service.cancel(booking.id, user.id, false).await?;

    let after_cancel = service
        .update(
            booking.id,
            user.id,
            UpdateBookingParams {
                title: Some("Too Late".to_string()),
                ..Default::default()
            },
            false,
        )
        .await;
    assert!(matches!(after_cancel, Err(AppError::BadRequest(_))));

    Ok(())
}
