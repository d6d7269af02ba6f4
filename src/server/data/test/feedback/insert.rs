use super::*;

/// Tests inserting a record whose ID is already taken fails with a unique violation.
///
/// Expected: Err(DbErr) recognised by `is_unique_constraint_error`
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_feedback(db).await?;

    let result = FeedbackRepository::new(db)
        .insert(crate::server::model::feedback::Feedback {
            id: existing.id,
            rating: Some(1),
            text: None,
            date_created: Utc::now(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(is_unique_constraint_error(&err), "{err}");

    Ok(())
}
