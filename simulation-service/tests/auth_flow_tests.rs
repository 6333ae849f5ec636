mod common;

use std::collections::BTreeSet;

use auth::PasswordHasher;
use simulation_service::domain::auth::errors::AuthError;
use simulation_service::domain::auth::models::Credential;
use simulation_service::domain::auth::models::Role;
use simulation_service::domain::auth::models::Username;
use simulation_service::domain::auth::ports::AuthServicePort;
use simulation_service::domain::auth::ports::CredentialStore;
use simulation_service::domain::auth::scopes::scopes_for;
use simulation_service::domain::auth::scopes::Scope;

#[tokio::test]
async fn test_register_then_login_roundtrip() {
    let service = common::auth_service();

    let response = service.register("nicola", "pass_word!").await.unwrap();
    assert_eq!(response.username, "nicola");
    assert_eq!(response.roles, BTreeSet::from(["USER".to_string()]));

    let token = service.login("nicola", "pass_word!").await.unwrap();

    let identity = service.verify_token(&token).unwrap();
    assert_eq!(identity.subject, "nicola");
    assert_eq!(identity.roles, BTreeSet::from([Role::User]));
    assert_eq!(
        identity.scopes,
        scopes_for(Role::User).iter().copied().collect::<BTreeSet<_>>()
    );
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let service = common::auth_service();

    service.register("nicola", "pass_word!").await.unwrap();

    let result = service.register("nicola", "different_password").await;
    assert!(matches!(
        result.unwrap_err(),
        AuthError::UsernameAlreadyExists(_)
    ));
}

#[tokio::test]
async fn test_login_rejections_are_constant_shape() {
    let service = common::auth_service();

    service.register("nicola", "pass_word!").await.unwrap();

    let wrong_password = service.login("nicola", "not_the_password").await.unwrap_err();
    let unknown_user = service.login("phantom", "not_the_password").await.unwrap_err();

    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert!(matches!(unknown_user, AuthError::InvalidCredentials));
    // Nothing in the rendered error distinguishes the two cases
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn test_verify_rejects_tampered_token() {
    let service = common::auth_service();

    let response = service.register("nicola", "pass_word!").await.unwrap();
    assert!(service.verify_token(&response.token).is_ok());

    // Flip one character in the payload section
    let payload_index = response.token.find('.').unwrap() + 2;
    let mut chars: Vec<char> = response.token.chars().collect();
    chars[payload_index] = if chars[payload_index] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    assert_ne!(tampered, response.token);
    let result = service.verify_token(&tampered);
    assert!(matches!(result.unwrap_err(), AuthError::InvalidToken));
}

#[tokio::test]
async fn test_admin_login_carries_full_scope_union() {
    let (service, store) = common::auth_service_with_store();

    // Seed an admin the way the excluded administration surface would
    let hash = PasswordHasher::new().hash("s3cure_admin!").unwrap();
    store
        .save(Credential::new(
            Username::new("root".to_string()).unwrap(),
            hash,
            BTreeSet::from([Role::Admin]),
        ))
        .await
        .unwrap();

    let token = service.login("root", "s3cure_admin!").await.unwrap();
    let identity = service.verify_token(&token).unwrap();

    assert_eq!(identity.roles, BTreeSet::from([Role::Admin]));
    assert!(identity.scopes.contains(&Scope::ManageUsers));
    assert!(identity.scopes.contains(&Scope::ReadSimulations));

    let user_scopes: BTreeSet<Scope> = scopes_for(Role::User).iter().copied().collect();
    assert!(identity.scopes.is_superset(&user_scopes));
    assert!(identity.scopes.len() > user_scopes.len());
}

#[tokio::test]
async fn test_change_password_rotates_credential() {
    let service = common::auth_service();

    service.register("nicola", "old_password").await.unwrap();

    service
        .change_password("nicola", "old_password", "new_password")
        .await
        .unwrap();

    // The old password stops working; the new one logs in
    let stale = service.login("nicola", "old_password").await;
    assert!(matches!(stale.unwrap_err(), AuthError::InvalidCredentials));

    let token = service.login("nicola", "new_password").await.unwrap();
    assert_eq!(service.verify_token(&token).unwrap().subject, "nicola");
}
