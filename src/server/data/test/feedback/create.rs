use super::*;

/// Tests creating feedback assigns an ID and the current time.
///
/// Expected: Ok with the record stored and `date_created` no earlier than the call
#[tokio::test]
async fn creates_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = FeedbackRepository::new(db);
    let feedback = repo
        .create(CreateFeedbackParam {
            rating: Some(4),
            text: Some("Quick delivery".to_string()),
        })
        .await?;

    assert_eq!(feedback.rating, Some(4));
    assert_eq!(feedback.text.as_deref(), Some("Quick delivery"));
    assert!(feedback.date_created >= before);

    let stored = entity::prelude::Feedback::find_by_id(feedback.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.rating, Some(4));
    assert_eq!(stored.text.as_deref(), Some("Quick delivery"));

    Ok(())
}

/// Tests both fields may be empty.
///
/// Expected: Ok with rating and text stored as NULL
#[tokio::test]
async fn creates_feedback_without_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = FeedbackRepository::new(db)
        .create(CreateFeedbackParam {
            rating: None,
            text: None,
        })
        .await?;

    let stored = entity::prelude::Feedback::find_by_id(feedback.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.rating, None);
    assert_eq!(stored.text, None);

    Ok(())
}

/// Tests every created record gets its own ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let first = repo
        .create(CreateFeedbackParam {
            rating: Some(1),
            text: None,
        })
        .await?;
    let second = repo
        .create(CreateFeedbackParam {
            rating: Some(1),
            text: None,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
