use super::*;

/// Tests an active user stored in the session is returned.
///
/// Expected: Ok(User) matching the factory-created account
#[tokio::test]
async fn returns_active_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("reviewer")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require().await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.username, "reviewer");
    assert!(result.is_active);

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::create_user(db).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale ID
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests a deactivated account is rejected even though it is logged in.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn fails_for_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require().await;

    match result {
        Err(AppError::AuthErr(AuthError::InactiveUser(id))) => assert_eq!(id, user.id),
        other => panic!("expected InactiveUser, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
