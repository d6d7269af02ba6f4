use super::*;

/// Tests the stored user ID can be read back and cleared.
///
/// Expected: Some(id) after set, None after clear
#[tokio::test]
async fn stores_and_clears_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert!(!auth_session.is_authenticated().await?);

    auth_session.set_user_id(7).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(7));
    assert!(auth_session.is_authenticated().await?);

    auth_session.clear().await;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
