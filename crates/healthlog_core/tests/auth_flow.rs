use healthlog_core::{
    AuthError, AuthService, KeyValueStore, MemoryKeyValueStore, ProfileRepository, UserProfile,
};

#[test]
fn register_then_login_succeeds_and_records_the_current_user() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);

    auth.register("13800138000", "secret").unwrap();
    auth.login("13800138000", "secret").unwrap();

    assert_eq!(
        store.get("currentUserPhone").unwrap().as_deref(),
        Some("13800138000")
    );
}

#[test]
fn login_rejects_empty_and_mismatched_credentials() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);
    auth.register("13800138000", "secret").unwrap();

    assert!(matches!(
        auth.login("", "secret"),
        Err(AuthError::EmptyCredentials)
    ));
    assert!(matches!(
        auth.login("13800138000", ""),
        Err(AuthError::EmptyCredentials)
    ));
    assert!(matches!(
        auth.login("13800138000", "wrong"),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        auth.login("13900000000", "secret"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn change_password_replaces_the_logged_in_users_credential() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);

    auth.register("13800138000", "old-pass").unwrap();
    auth.login("13800138000", "old-pass").unwrap();
    auth.change_password("old-pass", "new-pass", "new-pass")
        .unwrap();

    assert!(matches!(
        auth.login("13800138000", "old-pass"),
        Err(AuthError::InvalidCredentials)
    ));
    auth.login("13800138000", "new-pass").unwrap();
}

#[test]
fn change_password_checks_run_in_order() {
    let store = MemoryKeyValueStore::new();
    let auth = AuthService::new(&store);

    assert!(matches!(
        auth.change_password("a", "b", "b"),
        Err(AuthError::NotLoggedIn)
    ));

    auth.register("13800138000", "secret").unwrap();
    auth.login("13800138000", "secret").unwrap();

    assert!(matches!(
        auth.change_password("wrong", "b", "b"),
        Err(AuthError::WrongOldPassword)
    ));
    assert!(matches!(
        auth.change_password("secret", "", ""),
        Err(AuthError::EmptyNewPassword)
    ));
    assert!(matches!(
        auth.change_password("secret", "b", "c"),
        Err(AuthError::ConfirmationMismatch)
    ));

    // All checks passed; login with the original password still works
    // because no failed attempt may alter the credential.
    auth.login("13800138000", "secret").unwrap();
}

#[test]
fn profile_fields_round_trip_and_default_to_empty() {
    let store = MemoryKeyValueStore::new();
    let repo = ProfileRepository::new(&store);

    assert_eq!(repo.profile().unwrap(), UserProfile::default());

    let profile = UserProfile {
        name: "Ada".to_string(),
        phone: "13800138000".to_string(),
        avatar: "avatar-01".to_string(),
    };
    repo.set_profile(&profile).unwrap();
    assert_eq!(repo.profile().unwrap(), profile);
}
