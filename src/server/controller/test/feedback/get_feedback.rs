use super::*;

fn texts(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["text"].as_str().unwrap())
        .collect()
}

/// Tests listing with no stored feedback.
///
/// Expected: 200 with `{"ok": true, "data": []}`
#[tokio::test]
async fn lists_empty_table() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db, None), get("/get_feedback")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"ok": true, "data": []}));
}

/// Tests the default listing is newest first and serializes every field.
///
/// Expected: 200 with records ordered by `date_created` descending
#[tokio::test]
async fn lists_newest_first() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (days, text) in [(3, "old"), (0, "new"), (1, "middle")] {
        factory::feedback::FeedbackFactory::new(db)
            .text(text)
            .rating(2)
            .date_created(now - Duration::days(days))
            .build()
            .await
            .unwrap();
    }

    let (status, body) = send(app(db, None), get("/get_feedback")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(texts(&body), ["new", "middle", "old"]);

    let first = &body["data"][0];
    assert!(first["id"].is_string());
    assert_eq!(first["rating"], 2);
    assert!(first["date_created"].is_string());
}

/// Tests sorting by rating ascending.
///
/// Expected: 200 with lowest rating first
#[tokio::test]
async fn sorts_by_requested_field() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (rating, text) in [(5, "five"), (1, "one"), (3, "three")] {
        factory::feedback::FeedbackFactory::new(db)
            .rating(rating)
            .text(text)
            .build()
            .await
            .unwrap();
    }

    let (status, body) = send(
        app(db, None),
        get("/get_feedback?sort_by=rating&is_ascending=true"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(texts(&body), ["one", "three", "five"]);
}

/// Tests an explicit page returns only that slice.
///
/// Expected: 200 with the second record only
#[tokio::test]
async fn returns_requested_page() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (days, text) in [(0, "a"), (1, "b"), (2, "c")] {
        factory::feedback::FeedbackFactory::new(db)
            .text(text)
            .date_created(now - Duration::days(days))
            .build()
            .await
            .unwrap();
    }

    let (status, body) = send(app(db, None), get("/get_feedback?page=2&items_per_page=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(texts(&body), ["b"]);
}

/// Tests invalid pagination parameters are rejected.
///
/// Expected: 400 naming the offending parameter
#[tokio::test]
async fn rejects_invalid_pagination() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (query, message) in [
        ("sort_by=text", "Invalid sort_by Value For Pagination"),
        ("page=0", "Invalid page Value For Pagination"),
        ("page=abc", "Invalid page Value For Pagination"),
        ("items_per_page=-2", "Invalid items_per_page Value For Pagination"),
        ("is_ascending=maybe", "Invalid is_ascending Value For Pagination"),
    ] {
        let (status, body) = send(app(db, None), get(&format!("/get_feedback?{query}"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], message);
    }
}

/// Tests the list route refuses other verbs.
///
/// Expected: 400 `Invalid Method`
#[tokio::test]
async fn rejects_post() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db, None),
        post_json("/get_feedback", r#"{"rating": 1, "text": "x"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"ok": false, "error": "Invalid Method"}));
    assert_eq!(FeedbackRepository::new(db).count().await.unwrap(), 0);
}

/// Tests pages whose row offset cannot be represented are rejected.
///
/// Expected: 400 `Invalid page Value For Pagination`; a far but representable page is empty
#[tokio::test]
async fn rejects_page_beyond_offset_range() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_feedback(db).await.unwrap();

    for query in [
        "page=4294967297&items_per_page=4294967296",
        "page=9223372036854775807&items_per_page=2",
    ] {
        let (status, body) = send(app(db, None), get(&format!("/get_feedback?{query}"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
        assert_eq!(body["error"], "Invalid page Value For Pagination");
    }

    let (status, body) = send(
        app(db, None),
        get("/get_feedback?page=9223372036854775807&items_per_page=1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"ok": true, "data": []}));
}
