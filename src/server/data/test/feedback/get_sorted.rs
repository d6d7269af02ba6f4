use super::*;
use uuid::Uuid;

/// Inserts feedback dated `days_ago` days back for each entry, in the given order.
async fn seed(db: &sea_orm::DatabaseConnection, days_ago: &[i64]) -> Result<(), DbErr> {
    let now = Utc::now();

    for days in days_ago {
        factory::feedback::FeedbackFactory::new(db)
            .rating(*days as i32)
            .text(format!("{} days ago", days))
            .date_created(now - Duration::days(*days))
            .build()
            .await?;
    }

    Ok(())
}

fn texts(feedback: &[crate::server::model::feedback::Feedback]) -> Vec<&str> {
    feedback.iter().filter_map(|f| f.text.as_deref()).collect()
}

/// Tests the default listing is newest first whatever the insertion order.
///
/// Expected: Ok with records ordered by `date_created` descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, &[2, 5, 0, 3]).await?;

    let feedback = FeedbackRepository::new(db)
        .get_sorted(&ListFeedbackParam::default())
        .await?;

    assert_eq!(
        texts(&feedback),
        ["0 days ago", "2 days ago", "3 days ago", "5 days ago"]
    );

    Ok(())
}

/// Tests ascending order by an alternative column.
///
/// Expected: Ok with records ordered by rating ascending
#[tokio::test]
async fn lists_by_rating_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, &[4, 1, 3]).await?;

    let feedback = FeedbackRepository::new(db)
        .get_sorted(&ListFeedbackParam {
            sort_by: FeedbackSortField::Rating,
            ascending: true,
            page: None,
        })
        .await?;

    let ratings: Vec<_> = feedback.iter().map(|f| f.rating).collect();
    assert_eq!(ratings, [Some(1), Some(3), Some(4)]);

    Ok(())
}

/// Tests ties on the sort column fall back to ID order.
///
/// Expected: Ok with equal timestamps ordered by ID descending
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let low = Uuid::from_u128(1);
    let high = Uuid::from_u128(2);

    for id in [low, high] {
        factory::feedback::FeedbackFactory::new(db)
            .id(id)
            .date_created(now)
            .build()
            .await?;
    }

    let feedback = FeedbackRepository::new(db)
        .get_sorted(&ListFeedbackParam::default())
        .await?;

    let ids: Vec<_> = feedback.iter().map(|f| f.id).collect();
    assert_eq!(ids, [high, low]);

    Ok(())
}

/// Tests a 1-based page returns the matching slice.
///
/// Expected: Ok with the second page of two, then an empty page past the end
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, &[0, 1, 2, 3, 4]).await?;

    let repo = FeedbackRepository::new(db);
    let page = repo
        .get_sorted(&ListFeedbackParam {
            page: Some((2, 2)),
            ..Default::default()
        })
        .await?;

    assert_eq!(texts(&page), ["2 days ago", "3 days ago"]);

    let past_end = repo
        .get_sorted(&ListFeedbackParam {
            page: Some((4, 2)),
            ..Default::default()
        })
        .await?;

    assert!(past_end.is_empty());

    Ok(())
}

/// Tests a page whose offset overflows is empty rather than a failure.
///
/// Expected: Ok with no records
#[tokio::test]
async fn returns_empty_page_when_offset_overflows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, &[0, 1]).await?;

    let repo = FeedbackRepository::new(db);
    for page in [(4_294_967_297, 4_294_967_296), (u64::MAX, 2)] {
        let feedback = repo
            .get_sorted(&ListFeedbackParam {
                page: Some(page),
                ..Default::default()
            })
            .await?;

        assert!(feedback.is_empty(), "{page:?}");
    }

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with no records
#[tokio::test]
async fn lists_nothing_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Feedback).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let feedback = FeedbackRepository::new(db)
        .get_sorted(&ListFeedbackParam::default())
        .await?;

    assert!(feedback.is_empty());

    Ok(())
}
