// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::{Role, ViewerProfile};
use ponto_ops_persistence::SqlitePersistence;

use crate::tests::helpers::{AcceptingVerifier, db_with_registry, signup_request};
use crate::{AuthError, AuthenticationService, LoginOutcome, SignupPolicy, signup};

fn db_with_account() -> SqlitePersistence {
    let mut db: SqlitePersistence = db_with_registry();
    signup(
        &mut db,
        &SignupPolicy::default(),
        &AcceptingVerifier,
        &signup_request("160767", "marcos@empresa.com"),
    )
    .unwrap_or_else(|e| panic!("signup failed: {e}"));
    db
}

#[test]
fn test_login_issues_a_session() {
    let mut db: SqlitePersistence = db_with_account();
    let outcome: LoginOutcome = AuthenticationService::login(
        &mut db,
        "marcos@empresa.com",
        "correta-batata-cavalo-grampo",
    )
    .unwrap_or_else(|e| panic!("login failed: {e}"));

    assert!(!outcome.session_token.is_empty());
    assert_eq!(outcome.profile.matricula, "160767");
    assert_eq!(outcome.profile.role, Role::User);
}

#[test]
fn test_login_is_case_insensitive_on_email() {
    let mut db: SqlitePersistence = db_with_account();
    let outcome: Result<LoginOutcome, AuthError> = AuthenticationService::login(
        &mut db,
        "MARCOS@Empresa.com",
        "correta-batata-cavalo-grampo",
    );
    assert!(outcome.is_ok());
}

#[test]
fn test_wrong_password_and_unknown_email_share_one_message() {
    let mut db: SqlitePersistence = db_with_account();

    let wrong_password: AuthError = AuthenticationService::login(
        &mut db,
        "marcos@empresa.com",
        "senha-errada",
    )
    .map_or_else(|e| e, |_| panic!("login should fail"));

    let unknown_email: AuthError = AuthenticationService::login(
        &mut db,
        "ninguem@empresa.com",
        "correta-batata-cavalo-grampo",
    )
    .map_or_else(|e| e, |_| panic!("login should fail"));

    assert_eq!(wrong_password, unknown_email);
}

#[test]
fn test_session_validation_round_trip() {
    let mut db: SqlitePersistence = db_with_account();
    let outcome: LoginOutcome = AuthenticationService::login(
        &mut db,
        "marcos@empresa.com",
        "correta-batata-cavalo-grampo",
    )
    .unwrap_or_else(|e| panic!("login failed: {e}"));

    let profile: ViewerProfile =
        AuthenticationService::validate_session(&mut db, &outcome.session_token)
            .unwrap_or_else(|e| panic!("validate failed: {e}"));
    assert_eq!(profile, outcome.profile);
}

#[test]
fn test_garbage_token_is_rejected() {
    let mut db: SqlitePersistence = db_with_account();
    let result: Result<ViewerProfile, AuthError> =
        AuthenticationService::validate_session(&mut db, "token-inventado");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_expired_session_is_rejected() {
    let mut db: SqlitePersistence = db_with_account();
    let outcome: LoginOutcome = AuthenticationService::login(
        &mut db,
        "marcos@empresa.com",
        "correta-batata-cavalo-grampo",
    )
    .unwrap_or_else(|e| panic!("login failed: {e}"));

    // Rewrite the expiry into the past; the validator must refuse it.
    let session = db
        .get_session_by_token(&outcome.session_token)
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    let session = session.map_or_else(|| panic!("session should exist"), |s| s);
    db.create_session(
        "token-vencido",
        session.profile_id,
        "2020-01-01T00:00:00Z",
        "2020-01-31T00:00:00Z",
    )
    .unwrap_or_else(|e| panic!("create failed: {e}"));

    let result: Result<ViewerProfile, AuthError> =
        AuthenticationService::validate_session(&mut db, "token-vencido");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { reason }) if reason == "Session expired"
    ));
}

#[test]
fn test_logout_invalidates_the_token() {
    let mut db: SqlitePersistence = db_with_account();
    let outcome: LoginOutcome = AuthenticationService::login(
        &mut db,
        "marcos@empresa.com",
        "correta-batata-cavalo-grampo",
    )
    .unwrap_or_else(|e| panic!("login failed: {e}"));

    AuthenticationService::logout(&mut db, &outcome.session_token)
        .unwrap_or_else(|e| panic!("logout failed: {e}"));

    let result: Result<ViewerProfile, AuthError> =
        AuthenticationService::validate_session(&mut db, &outcome.session_token);
    assert!(result.is_err());
}
