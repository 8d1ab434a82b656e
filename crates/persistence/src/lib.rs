// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Ponto-Ops portal.
//!
//! This crate provides `SQLite` persistence (via Diesel with embedded
//! migrations) for portal accounts, sessions, the employee registry, and
//! the read-only dashboard feed relation materialised by the external
//! punch aggregation job.
//!
//! ## Ownership boundaries
//!
//! - `profiles` and `sessions` are owned by the portal.
//! - `colaboradores` is owned by the HR feed; the portal only reads it.
//! - `painel_ponto` is owned by the aggregation job; the portal only reads
//!   it, in rowid order, page by page. The seeding helpers that write it
//!   exist for tests and local development only.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use ponto_ops::{DashboardFeed, FeedError};
use ponto_ops_domain::PunchRow;
use tracing::info;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{ColaboradorData, ProfileData, SessionData};
pub use error::PersistenceError;
pub use mutations::profiles::NewProfile;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// parallel tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter.
///
/// Owns a single connection; callers serialize access (the server wraps
/// the adapter in a mutex).
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates an in-memory database with a unique name and runs
    /// migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let url: String = format!("file:ponto_ops_mem_{id}?mode=memory&cache=shared");
        info!("Initializing in-memory database");
        Ok(Self {
            conn: sqlite::initialize(&url)?,
        })
    }

    /// Opens (or creates) a file-based database and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if connection or migration fails.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        info!(path, "Initializing file-based database");
        Ok(Self {
            conn: sqlite::initialize(path)?,
        })
    }

    // --- profiles ---

    /// Retrieves a profile by its canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` when not found.
    pub fn get_profile_by_id(
        &mut self,
        profile_id: i64,
    ) -> Result<Option<ProfileData>, PersistenceError> {
        queries::profiles::get_profile_by_id(&mut self.conn, profile_id)
    }

    /// Retrieves a profile by login email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` when not found.
    pub fn get_profile_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<ProfileData>, PersistenceError> {
        queries::profiles::get_profile_by_email(&mut self.conn, email)
    }

    /// Retrieves a profile by matricula.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` when not found.
    pub fn get_profile_by_matricula(
        &mut self,
        matricula: &str,
    ) -> Result<Option<ProfileData>, PersistenceError> {
        queries::profiles::get_profile_by_matricula(&mut self.conn, matricula)
    }

    /// Creates a portal account with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails, the matricula or email is
    /// already registered, or the insert fails.
    pub fn create_profile(
        &mut self,
        new_profile: &NewProfile,
        created_at: &str,
    ) -> Result<ProfileData, PersistenceError> {
        mutations::profiles::create_profile(&mut self.conn, new_profile, created_at)
    }

    /// Records a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(
        &mut self,
        profile_id: i64,
        logged_in_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::profiles::update_last_login(&mut self.conn, profile_id, logged_in_at)
    }

    /// Verifies a password against a stored bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash is malformed.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        queries::profiles::verify_password(password, password_hash)
    }

    // --- sessions ---

    /// Retrieves a session by its token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` when not found.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::sessions::get_session_by_token(&mut self.conn, session_token)
    }

    /// Creates a session for a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        profile_id: i64,
        created_at: &str,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::sessions::create_session(
            &mut self.conn,
            session_token,
            profile_id,
            created_at,
            expires_at,
        )
    }

    /// Touches a session's last-activity timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(
        &mut self,
        session_id: i64,
        active_at: &str,
    ) -> Result<(), PersistenceError> {
        mutations::sessions::update_session_activity(&mut self.conn, session_id, active_at)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, session_token)
    }

    // --- registry ---

    /// Retrieves a registry entry by matricula.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` when unknown.
    pub fn get_colaborador_by_matricula(
        &mut self,
        matricula: &str,
    ) -> Result<Option<ColaboradorData>, PersistenceError> {
        queries::colaboradores::get_colaborador_by_matricula(&mut self.conn, matricula)
    }

    /// Inserts or replaces a registry entry (tests and seeding only).
    ///
    /// # Errors
    ///
    /// Returns an error if the upsert fails.
    pub fn upsert_colaborador(
        &mut self,
        colaborador: &ColaboradorData,
    ) -> Result<(), PersistenceError> {
        mutations::seed::upsert_colaborador(&mut self.conn, colaborador)
    }

    // --- dashboard feed ---

    /// Fetches one page of the dashboard feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn fetch_painel_page(
        &mut self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<PunchRow>, PersistenceError> {
        queries::painel::fetch_page(&mut self.conn, offset, limit)
    }

    /// Appends a row to the dashboard relation (tests and seeding only).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_painel_row(&mut self, row: &PunchRow) -> Result<(), PersistenceError> {
        mutations::seed::insert_painel_row(&mut self.conn, row)
    }

    /// Clears the dashboard relation (tests and seeding only).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_painel(&mut self) -> Result<(), PersistenceError> {
        mutations::seed::clear_painel(&mut self.conn)
    }
}

impl DashboardFeed for SqlitePersistence {
    fn fetch_page(&mut self, offset: usize, limit: usize) -> Result<Vec<PunchRow>, FeedError> {
        self.fetch_painel_page(offset, limit)
            .map_err(|e| FeedError::Backend(e.to_string()))
    }
}
