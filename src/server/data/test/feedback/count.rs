use super::*;

/// Tests counting feedback.
///
/// Expected: Ok(0) for an empty table, then the number of records inserted
#[tokio::test]
async fn counts_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_feedback(db).await?;
    factory::create_feedback(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
