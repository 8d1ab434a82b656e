// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Portal account queries.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::ProfileData;
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Diesel Queryable struct for profile rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = profiles)]
pub(crate) struct ProfileRow {
    pub profile_id: i64,
    pub matricula: String,
    pub email: String,
    pub password_hash: String,
    pub nome: Option<String>,
    pub filial: Option<String>,
    pub funcao: Option<String>,
    pub role: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl From<ProfileRow> for ProfileData {
    fn from(row: ProfileRow) -> Self {
        Self {
            profile_id: row.profile_id,
            matricula: row.matricula,
            email: row.email,
            password_hash: row.password_hash,
            nome: row.nome,
            filial: row.filial,
            funcao: row.funcao,
            role: row.role,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}

fn first_or_none(
    result: Result<ProfileRow, diesel::result::Error>,
) -> Result<Option<ProfileData>, PersistenceError> {
    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a profile by its canonical identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the profile is not found.
pub fn get_profile_by_id(
    conn: &mut SqliteConnection,
    profile_id: i64,
) -> Result<Option<ProfileData>, PersistenceError> {
    debug!(profile_id, "Looking up profile by id");
    first_or_none(
        profiles::table
            .filter(profiles::profile_id.eq(profile_id))
            .select(ProfileRow::as_select())
            .first(conn),
    )
}

/// Retrieves a profile by login email.
///
/// The email is normalized to lowercase for case-insensitive lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the profile is not found.
pub fn get_profile_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<ProfileData>, PersistenceError> {
    let normalized: String = email.trim().to_lowercase();
    debug!(email = %normalized, "Looking up profile by email");
    first_or_none(
        profiles::table
            .filter(profiles::email.eq(&normalized))
            .select(ProfileRow::as_select())
            .first(conn),
    )
}

/// Retrieves a profile by matricula.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the profile is not found.
pub fn get_profile_by_matricula(
    conn: &mut SqliteConnection,
    matricula: &str,
) -> Result<Option<ProfileData>, PersistenceError> {
    debug!(matricula, "Looking up profile by matricula");
    first_or_none(
        profiles::table
            .filter(profiles::matricula.eq(matricula.trim()))
            .select(ProfileRow::as_select())
            .first(conn),
    )
}

/// Verifies a password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::PasswordHashFailed(e.to_string()))
}
