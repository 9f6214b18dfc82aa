use super::*;

/// Tests publishing a draft.
///
/// Expected: Ok with published set, a `published` audit row, and one
/// announcement dispatched to the booking's group
#[tokio::test]
async fn publishes_draft_and_announces() -> Result<(), AppError> {
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
    let draft = service.create(params_for(&user, &room, &group, start, end)).await?;

    let published = service.publish(draft.id, user.id, false).await?;

    assert!(published.published);

    let history = HistoryRepository::new(db).list_by_booking(draft.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].action, BookingAction::Published.as_str());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, group.chat_id);
    assert!(messages[0].1.contains(&published.booking_number));
    assert!(messages[0].1.contains(&user.full_name));

    Ok(())
}

/// Tests the announcement fan-out for a fully configured booking.
///
/// Expected: three dispatches — booking group, verification group copy,
/// and catering group with the consumption note
#[tokio::test]
async fn announces_to_all_configured_groups() -> Result<(), AppError> {
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
    let mut params = params_for(&user, &room, &group, start, end);
    params.verification_chat_id = Some(-3001);
    params.consumption = Some(ConsumptionParams {
        note: Some("Snacks".to_string()),
        chat_id: Some(-3002),
    });
    let draft = service.create(params).await?;

    service.publish(draft.id, user.id, false).await?;

    let messages = notifier.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].0, group.chat_id);
    assert_eq!(messages[1].0, -3001);
    assert_eq!(messages[2].0, -3002);
    assert!(messages[2].1.contains("Snacks"));

    Ok(())
}

/// Tests that publishing is one-shot.
///
/// Expected: Err(BadRequest) on the second publish
#[tokio::test]
async fn rejects_double_publish() -> Result<(), AppError> {
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
    let draft = service.create(params_for(&user, &room, &group, start, end)).await?;

    service.publish(draft.id, user.id, false).await?;
    let again = service.publish(draft.id, user.id, false).await;

    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert_eq!(notifier.messages().len(), 1);

    Ok(())
}

/// Tests publish authorization.
///
/// Expected: Err(Forbidden) for a stranger, Ok for an admin
#[tokio::test]
async fn only_owner_or_admin_may_publish() -> Result<(), AppError> {
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
    let draft = service.create(params_for(&user, &room, &group, start, end)).await?;

    let denied = service.publish(draft.id, stranger.id, false).await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    service.publish(draft.id, admin.id, true).await?;

    Ok(())
}

/// Tests that a dead messaging service does not block publishing.
///
/// Expected: Ok with published set even though every dispatch fails
#[tokio::test]
async fn publish_survives_notifier_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room, group) = seed(db).await?;
    let notifier = RecordingNotifier::failing();
    let service = BookingService::new(db, &notifier, tz());

    let (start, end) = slot(2, 9);
    let draft = service.create(params_for(&user, &room, &group, start, end)).await?;

    let published = service.publish(draft.id, user.id, false).await?;

    assert!(published.published);

    Ok(())
}

/// Tests that a cancelled booking cannot be published.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_publishing_cancelled_booking() -> Result<(), AppError> {
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
    let draft = service.create(params_for(&user, &room, &group, start, end)).await?;
    service.cancel(draft.id, user.id, false).await?;

    let result = service.publish(draft.id, user.id, false).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
