// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Portal account mutations.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::data_models::ProfileData;
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;
use crate::sqlite;

/// Fields required to create a portal account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    /// Employee id, unique per account.
    pub matricula: String,
    /// Login email; normalized to lowercase before storage.
    pub email: String,
    /// Plain-text password; hashed with bcrypt before storage.
    pub password: String,
    /// Display name from the registry.
    pub nome: Option<String>,
    /// Home base from the registry.
    pub filial: Option<String>,
    /// Job title from the registry.
    pub funcao: Option<String>,
    /// Stored role value (`admin` or `user`).
    pub role: String,
}

/// Creates a portal account.
///
/// # Errors
///
/// Returns an error if hashing fails, a uniqueness constraint is violated
/// (matricula or email already registered), or the insert fails.
pub fn create_profile(
    conn: &mut SqliteConnection,
    new_profile: &NewProfile,
    created_at: &str,
) -> Result<ProfileData, PersistenceError> {
    let password_hash: String = bcrypt::hash(&new_profile.password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::PasswordHashFailed(e.to_string()))?;
    let email: String = new_profile.email.trim().to_lowercase();
    let matricula: String = new_profile.matricula.trim().to_string();

    diesel::insert_into(profiles::table)
        .values((
            profiles::matricula.eq(&matricula),
            profiles::email.eq(&email),
            profiles::password_hash.eq(&password_hash),
            profiles::nome.eq(&new_profile.nome),
            profiles::filial.eq(&new_profile.filial),
            profiles::funcao.eq(&new_profile.funcao),
            profiles::role.eq(&new_profile.role),
            profiles::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let profile_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(profile_id, matricula = %matricula, "Created profile");

    Ok(ProfileData {
        profile_id,
        matricula,
        email,
        password_hash,
        nome: new_profile.nome.clone(),
        filial: new_profile.filial.clone(),
        funcao: new_profile.funcao.clone(),
        role: new_profile.role.clone(),
        created_at: created_at.to_string(),
        last_login_at: None,
    })
}

/// Records a successful login.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_last_login(
    conn: &mut SqliteConnection,
    profile_id: i64,
    logged_in_at: &str,
) -> Result<(), PersistenceError> {
    debug!(profile_id, "Updating last login");
    diesel::update(profiles::table.filter(profiles::profile_id.eq(profile_id)))
        .set(profiles::last_login_at.eq(logged_in_at))
        .execute(conn)?;
    Ok(())
}
