// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::{Filial, Role};

use crate::tests::helpers::{new_profile, supervisor_colaborador, test_db};
use crate::{PersistenceError, ProfileData, SqlitePersistence};

const CREATED_AT: &str = "2026-02-03T08:00:00Z";

#[test]
fn test_create_and_lookup_profile() {
    let mut db: SqlitePersistence = test_db();
    let created: ProfileData = db
        .create_profile(&new_profile("160767", "Marcos@Empresa.com"), CREATED_AT)
        .unwrap_or_else(|e| panic!("create_profile failed: {e}"));

    assert!(created.profile_id > 0);
    // Email is normalized on the way in.
    assert_eq!(created.email, "marcos@empresa.com");

    let by_id: Option<ProfileData> = db
        .get_profile_by_id(created.profile_id)
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(by_id, Some(created.clone()));

    let by_email: Option<ProfileData> = db
        .get_profile_by_email("MARCOS@empresa.com")
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(by_email, Some(created.clone()));

    let by_matricula: Option<ProfileData> = db
        .get_profile_by_matricula("160767")
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(by_matricula, Some(created));
}

#[test]
fn test_missing_profile_is_none_not_error() {
    let mut db: SqlitePersistence = test_db();
    let result: Option<ProfileData> = db
        .get_profile_by_id(4242)
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(result, None);
}

#[test]
fn test_duplicate_matricula_is_a_unique_violation() {
    let mut db: SqlitePersistence = test_db();
    db.create_profile(&new_profile("160767", "um@empresa.com"), CREATED_AT)
        .unwrap_or_else(|e| panic!("create_profile failed: {e}"));

    let duplicate: Result<ProfileData, PersistenceError> =
        db.create_profile(&new_profile("160767", "dois@empresa.com"), CREATED_AT);
    assert!(matches!(
        duplicate,
        Err(PersistenceError::UniqueViolation(_))
    ));
}

#[test]
fn test_password_round_trip() {
    let mut db: SqlitePersistence = test_db();
    let created: ProfileData = db
        .create_profile(&new_profile("160767", "marcos@empresa.com"), CREATED_AT)
        .unwrap_or_else(|e| panic!("create_profile failed: {e}"));

    // The stored value is a hash, never the password.
    assert_ne!(created.password_hash, "correta-batata-cavalo-grampo");

    let ok: bool = db
        .verify_password("correta-batata-cavalo-grampo", &created.password_hash)
        .unwrap_or_else(|e| panic!("verify failed: {e}"));
    assert!(ok);

    let wrong: bool = db
        .verify_password("senha-errada", &created.password_hash)
        .unwrap_or_else(|e| panic!("verify failed: {e}"));
    assert!(!wrong);
}

#[test]
fn test_last_login_update() {
    let mut db: SqlitePersistence = test_db();
    let created: ProfileData = db
        .create_profile(&new_profile("160767", "marcos@empresa.com"), CREATED_AT)
        .unwrap_or_else(|e| panic!("create_profile failed: {e}"));
    assert_eq!(created.last_login_at, None);

    db.update_last_login(created.profile_id, "2026-02-03T09:00:00Z")
        .unwrap_or_else(|e| panic!("update failed: {e}"));

    let reloaded: Option<ProfileData> = db
        .get_profile_by_id(created.profile_id)
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(
        reloaded.and_then(|profile| profile.last_login_at),
        Some(String::from("2026-02-03T09:00:00Z"))
    );
}

#[test]
fn test_profile_converts_to_viewer_identity() {
    let mut db: SqlitePersistence = test_db();
    let mut request = new_profile("521", "ana@empresa.com");
    request.role = String::from("admin");
    let created: ProfileData = db
        .create_profile(&request, CREATED_AT)
        .unwrap_or_else(|e| panic!("create_profile failed: {e}"));

    let viewer = created.to_viewer_profile();
    assert_eq!(viewer.id, created.profile_id);
    assert_eq!(viewer.role, Role::Admin);
    assert_eq!(viewer.filial, Some(Filial::new("GRU")));
}

#[test]
fn test_registry_lookup() {
    let mut db: SqlitePersistence = test_db();
    db.upsert_colaborador(&supervisor_colaborador("160767"))
        .unwrap_or_else(|e| panic!("upsert failed: {e}"));

    let found = db
        .get_colaborador_by_matricula("160767")
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(found, Some(supervisor_colaborador("160767")));

    let missing = db
        .get_colaborador_by_matricula("999999")
        .unwrap_or_else(|e| panic!("lookup failed: {e}"));
    assert_eq!(missing, None);
}
