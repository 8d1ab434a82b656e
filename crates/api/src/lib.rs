// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod auth;
mod challenge;
mod dashboard;
mod error;
mod signup;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, LoginOutcome};
pub use challenge::{ChallengeError, ChallengeVerifier, InsecureAcceptAll};
pub use dashboard::{load_viewer_profile, refresh_dashboard};
pub use error::{ApiError, AuthError};
pub use signup::{
    ColaboradorLookup, SignupPolicy, SignupRequest, SignupResponse, lookup_colaborador,
    masked_name, signup,
};
