// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard orchestration: the profile load and the paged refresh that
//! feed the view model.

use tracing::info;

use ponto_ops::{FeedError, fetch_all};
use ponto_ops_domain::{PunchRow, ViewerProfile};
use ponto_ops_persistence::SqlitePersistence;

use crate::error::{ApiError, translate_persistence_error};

/// Loads the viewer identity for a session.
///
/// A failure here blocks the whole dashboard view.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the profile does not exist and
/// `Internal` for database failures.
pub fn load_viewer_profile(
    persistence: &mut SqlitePersistence,
    profile_id: i64,
) -> Result<ViewerProfile, ApiError> {
    persistence
        .get_profile_by_id(profile_id)
        .map_err(translate_persistence_error)?
        .map(|profile| profile.to_viewer_profile())
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Profile"),
            message: format!("Profile {profile_id} not found"),
        })
}

/// Runs one complete paged fetch of the dashboard feed.
///
/// # Errors
///
/// Returns the feed error when any page fails; a partial result is never
/// returned.
pub fn refresh_dashboard(
    persistence: &mut SqlitePersistence,
    page_size: usize,
) -> Result<Vec<PunchRow>, FeedError> {
    let rows: Vec<PunchRow> = fetch_all(persistence, page_size)?;
    info!(rows = rows.len(), "Dashboard refresh complete");
    Ok(rows)
}
