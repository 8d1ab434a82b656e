// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The human-verification (captcha) boundary.
//!
//! The challenge provider is an external collaborator: the portal only
//! needs a yes/no on a proof-of-humanity token. Deployments plug in a real
//! verifier; development and tests use the insecure stand-ins.

use thiserror::Error;
use tracing::warn;

/// Challenge verification errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// The provider rejected the token.
    #[error("challenge rejected: {codes}")]
    Rejected {
        /// Provider error codes, comma-separated.
        codes: String,
    },
    /// The provider could not be reached.
    #[error("challenge provider unreachable: {reason}")]
    Unreachable {
        /// Transport-level failure description.
        reason: String,
    },
}

/// Verifies proof-of-humanity tokens.
pub trait ChallengeVerifier {
    /// Verifies a challenge token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or the provider is
    /// unavailable.
    fn verify(&self, token: &str, remote_ip: Option<&str>) -> Result<(), ChallengeError>;
}

/// A verifier that accepts every non-empty token.
///
/// For local development only; it defeats the purpose of the challenge and
/// logs a warning on every use.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsecureAcceptAll;

impl ChallengeVerifier for InsecureAcceptAll {
    fn verify(&self, token: &str, _remote_ip: Option<&str>) -> Result<(), ChallengeError> {
        warn!("Challenge verification is disabled; accepting token without checking");
        if token.trim().is_empty() {
            return Err(ChallengeError::Rejected {
                codes: String::from("missing-input-response"),
            });
        }
        Ok(())
    }
}
