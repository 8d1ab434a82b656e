// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-session dashboard ownership.
//!
//! Each authenticated session owns one [`DashboardViewModel`] plus the
//! task that drives it: an initial fetch, a periodic refresh timer, and a
//! manual-refresh trigger. The timer is rescheduled from the completion of
//! each refresh (manual or periodic) and is torn down on logout.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use ponto_ops::{DashboardViewModel, FeedError};
use ponto_ops_api::refresh_dashboard;
use ponto_ops_domain::ViewerProfile;
use ponto_ops_persistence::SqlitePersistence;

use crate::AppState;
use crate::live::LiveEvent;

/// Upper bound on one refresh; a hung backend surfaces as a fetch error
/// instead of wedging the view model in its fetching phase.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Handle to one session's dashboard.
#[derive(Clone)]
pub struct DashboardHandle {
    /// The session's view model.
    pub view_model: Arc<Mutex<DashboardViewModel>>,
    refresh: Arc<Notify>,
    task: Arc<JoinHandle<()>>,
}

impl DashboardHandle {
    /// Requests an immediate refresh, superseding the pending timer.
    pub fn request_refresh(&self) {
        self.refresh.notify_one();
    }

    /// Stops the refresh task. The view model itself is dropped with the
    /// last handle.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

/// Creates the view model for an authenticated viewer and spawns its
/// refresh task.
pub fn spawn_dashboard_session(state: &AppState, profile: ViewerProfile) -> DashboardHandle {
    let mut model: DashboardViewModel =
        DashboardViewModel::new(state.config.classifier.clone());
    // The profile arrived with the authenticated session, so the load is
    // immediate; a failed lookup never reaches this point.
    model.begin_profile_load();
    model.complete_profile_load(Ok(profile));

    let view_model: Arc<Mutex<DashboardViewModel>> = Arc::new(Mutex::new(model));
    let refresh: Arc<Notify> = Arc::new(Notify::new());

    let task: JoinHandle<()> = tokio::spawn(refresh_loop(
        state.clone(),
        view_model.clone(),
        refresh.clone(),
    ));

    DashboardHandle {
        view_model,
        refresh,
        task: Arc::new(task),
    }
}

/// Drives one session: refresh, then wait for the timer or a manual
/// trigger, forever. The interval restarts after each completed refresh.
async fn refresh_loop(
    state: AppState,
    view_model: Arc<Mutex<DashboardViewModel>>,
    refresh: Arc<Notify>,
) {
    let interval: Duration = Duration::from_secs(state.config.refresh_interval_secs);
    info!(interval_secs = state.config.refresh_interval_secs, "Dashboard session started");

    loop {
        run_refresh(&state, &view_model).await;

        tokio::select! {
            () = tokio::time::sleep(interval) => {
                debug!("Periodic refresh due");
            }
            () = refresh.notified() => {
                debug!("Manual refresh requested");
            }
        }
    }
}

/// Runs one fetch against the feed and applies it to the view model.
///
/// The view model's generation token makes this last-fetch-wins: if a
/// newer fetch started while this one ran, the completion is discarded.
async fn run_refresh(state: &AppState, view_model: &Arc<Mutex<DashboardViewModel>>) {
    let Some(generation) = view_model.lock().await.begin_fetch() else {
        debug!("No profile loaded; skipping refresh");
        return;
    };

    let persistence: Arc<Mutex<SqlitePersistence>> = state.persistence.clone();
    let page_size: usize = state.config.page_size;
    let outcome: Result<_, FeedError> = match tokio::time::timeout(FETCH_TIMEOUT, async move {
        let mut persistence = persistence.lock().await;
        refresh_dashboard(&mut persistence, page_size)
    })
    .await
    {
        Ok(result) => result,
        Err(_) => Err(FeedError::Backend(String::from("fetch timed out"))),
    };

    let at: String = state.now_label();
    let event: LiveEvent = match &outcome {
        Ok(rows) => LiveEvent::DashboardRefreshed {
            at: at.clone(),
            total_rows: rows.len(),
        },
        Err(e) => LiveEvent::RefreshFailed {
            message: e.to_string(),
        },
    };

    let applied: bool = view_model
        .lock()
        .await
        .complete_fetch(generation, outcome, &at);

    if applied {
        state.broadcaster.broadcast(&event);
    }
}
