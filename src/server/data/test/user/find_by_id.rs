use super::*;
use entity::prelude::User;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("finder")
        .active(false)
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "finder");
    assert!(!user.is_active);

    Ok(())
}

/// Tests looking up an ID with no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let user = UserRepository::new(db).find_by_id(9999).await?;

    assert!(user.is_none());

    Ok(())
}
