// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication.

use time::{Duration, OffsetDateTime};

use ponto_ops_domain::ViewerProfile;
use ponto_ops_persistence::{ProfileData, SessionData, SqlitePersistence};

use crate::error::AuthError;

/// The result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Opaque bearer token for subsequent requests.
    pub session_token: String,
    /// The authenticated viewer.
    pub profile: ViewerProfile,
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates a viewer by email and password and creates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is unknown, the password does not
    /// match, or session creation fails. The unknown-email and
    /// wrong-password failures share one message so the endpoint does not
    /// leak which emails exist.
    pub fn login(
        persistence: &mut SqlitePersistence,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let profile: ProfileData = persistence
            .get_profile_by_email(email)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid email or password"),
            })?;

        let password_ok: bool = persistence
            .verify_password(password, &profile.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Credential check failed: {e}"),
            })?;
        if !password_ok {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid email or password"),
            });
        }

        let session_token: String = Self::generate_session_token();
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let created_at: String = Self::format_timestamp(now)?;
        let expires_at: String = Self::format_timestamp(now + Self::DEFAULT_SESSION_EXPIRATION)?;

        persistence
            .create_session(&session_token, profile.profile_id, &created_at, &expires_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(profile.profile_id, &created_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        Ok(LoginOutcome {
            session_token,
            profile: profile.to_viewer_profile(),
        })
    }

    /// Validates a session token and returns the authenticated viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or the
    /// owning profile no longer exists.
    pub fn validate_session(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<ViewerProfile, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let profile: ProfileData = persistence
            .get_profile_by_id(session.profile_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Profile not found"),
            })?;

        let active_at: String = Self::format_timestamp(OffsetDateTime::now_utc())?;
        persistence
            .update_session_activity(session.session_id, &active_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update session activity: {e}"),
            })?;

        Ok(profile.to_viewer_profile())
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })
    }

    /// Formats a timestamp as ISO-8601.
    fn format_timestamp(value: OffsetDateTime) -> Result<String, AuthError> {
        value
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format timestamp: {e}"),
            })
    }

    /// Generates a session token.
    ///
    /// Timestamp plus 128 bits of randomness; the token is opaque to
    /// clients.
    fn generate_session_token() -> String {
        let timestamp: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
        format!(
            "session_{timestamp}_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }
}
