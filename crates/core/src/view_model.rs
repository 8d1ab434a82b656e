// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dashboard view model state machine.
//!
//! One view model exists per viewer session. It owns the row set, the
//! filter and sort state, and the fetch lifecycle; the refresh timer and
//! the actual I/O live with the caller. All derivation is synchronous and
//! pure, so a snapshot can be recomputed on every render.

use ponto_ops_domain::{
    ClassifiedRow, ClassifierRules, Filial, FunctionGroup, PunchRow, ViewerProfile, ViewerScope,
    resolve_scope,
};
use tracing::debug;

use crate::engine::{DashboardCounts, DashboardView, apply, base_options};
use crate::error::FeedError;
use crate::filter::{ContractFilter, FilterState, StatusFilter};
use crate::sort::{SortColumn, SortState, sort_rows};

/// Lifecycle phase of a dashboard session.
///
/// `Idle → ProfileLoading → ProfileError | ProfileReady`, then
/// `Fetching → FetchError | FetchReady` and back to `Fetching` on each
/// refresh. There is no terminal phase while the session lives; logout
/// returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase {
    /// No profile loaded.
    Idle,
    /// Profile lookup in flight.
    ProfileLoading,
    /// Profile lookup failed; blocks the whole view.
    ProfileError(String),
    /// Profile loaded, no fetch started yet.
    ProfileReady,
    /// A row fetch is in flight.
    Fetching,
    /// The last fetch failed; the previous row set stays visible.
    FetchError(String),
    /// Rows are loaded and current.
    FetchReady,
}

/// Token identifying one initiated fetch.
///
/// Completions carrying a superseded generation are discarded, so only the
/// most recently initiated fetch can ever publish rows (last-fetch-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

/// An immutable snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// The authenticated viewer, once loaded.
    pub profile: Option<ViewerProfile>,
    /// Visible rows in display order.
    pub visible: Vec<ClassifiedRow>,
    /// Summary counters.
    pub counts: DashboardCounts,
    /// Selectable bases derived from the current row set.
    pub base_options: Vec<Filial>,
    /// Current filter state.
    pub filters: FilterState,
    /// Current sort state.
    pub sort: SortState,
    /// Wall-clock label of the last successful refresh.
    pub last_updated: Option<String>,
    /// Whether a profile load or fetch is in flight.
    pub loading: bool,
    /// Blocking profile-load failure, if any.
    pub profile_error: Option<String>,
    /// Non-blocking fetch failure, if any.
    pub fetch_error: Option<String>,
}

/// The composed fetch → classify → scope/filter → aggregate → sort
/// pipeline, re-run on refresh and on every filter or sort mutation.
#[derive(Debug)]
pub struct DashboardViewModel {
    rules: ClassifierRules,
    phase: DashboardPhase,
    profile: Option<ViewerProfile>,
    scope: Option<ViewerScope>,
    rows: Vec<ClassifiedRow>,
    filters: FilterState,
    sort: SortState,
    last_updated: Option<String>,
    generation: u64,
}

impl DashboardViewModel {
    /// Creates an idle view model with the given classification rules.
    #[must_use]
    pub fn new(rules: ClassifierRules) -> Self {
        Self {
            rules,
            phase: DashboardPhase::Idle,
            profile: None,
            scope: None,
            rows: Vec::new(),
            filters: FilterState::default(),
            sort: SortState::default(),
            last_updated: None,
            generation: 0,
        }
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &DashboardPhase {
        &self.phase
    }

    /// Returns the viewer profile once loaded.
    #[must_use]
    pub const fn profile(&self) -> Option<&ViewerProfile> {
        self.profile.as_ref()
    }

    /// Returns the resolved viewer scope once the profile is loaded.
    #[must_use]
    pub const fn scope(&self) -> Option<&ViewerScope> {
        self.scope.as_ref()
    }

    /// Marks the profile lookup as in flight.
    pub fn begin_profile_load(&mut self) {
        self.phase = DashboardPhase::ProfileLoading;
    }

    /// Applies the outcome of the profile lookup.
    ///
    /// Success resolves the scope and initializes the filter defaults
    /// (scoped viewers get their own base preselected). Failure is
    /// blocking.
    pub fn complete_profile_load(&mut self, outcome: Result<ViewerProfile, String>) {
        match outcome {
            Ok(profile) => {
                let scope: ViewerScope = resolve_scope(&profile);
                self.filters = FilterState::for_scope(&scope);
                self.profile = Some(profile);
                self.scope = Some(scope);
                self.phase = DashboardPhase::ProfileReady;
            }
            Err(message) => {
                self.profile = None;
                self.scope = None;
                self.phase = DashboardPhase::ProfileError(message);
            }
        }
    }

    /// Starts a fetch and returns its generation token.
    ///
    /// Returns `None` while no profile is loaded. Starting a fetch while
    /// one is already in flight supersedes the earlier one: its completion
    /// will be discarded.
    pub fn begin_fetch(&mut self) -> Option<FetchGeneration> {
        self.profile.as_ref()?;
        self.generation += 1;
        self.phase = DashboardPhase::Fetching;
        Some(FetchGeneration(self.generation))
    }

    /// Applies a fetch outcome.
    ///
    /// Returns `false` when the outcome belongs to a superseded fetch and
    /// was discarded. On success the accumulated rows wholesale-replace the
    /// prior set and are classified; on failure the prior rows stay
    /// visible and only the phase records the error. The refresh label is
    /// updated on success only.
    pub fn complete_fetch(
        &mut self,
        generation: FetchGeneration,
        outcome: Result<Vec<PunchRow>, FeedError>,
        refreshed_at: &str,
    ) -> bool {
        if generation.0 != self.generation {
            debug!(
                stale = generation.0,
                current = self.generation,
                "Discarding superseded fetch result"
            );
            return false;
        }

        match outcome {
            Ok(rows) => {
                self.rows = rows
                    .into_iter()
                    .map(|row| {
                        let grupo: FunctionGroup = self.rules.classify(
                            row.funcao.as_deref().unwrap_or(""),
                            row.colaborador_filial.as_deref().unwrap_or(""),
                        );
                        ClassifiedRow::new(row, grupo)
                    })
                    .collect();
                self.last_updated = Some(refreshed_at.to_string());
                self.phase = DashboardPhase::FetchReady;
            }
            Err(err) => {
                self.phase = DashboardPhase::FetchError(err.to_string());
            }
        }
        true
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: &str) {
        self.filters.search = search.to_string();
    }

    /// Sets the base selection. Meaningful only for all-base viewers;
    /// scoped viewers are pinned to their own base by the engine.
    pub fn set_base(&mut self, base: Option<Filial>) {
        self.filters.base = base;
    }

    /// Sets the status selection.
    pub fn set_status(&mut self, status: StatusFilter) {
        self.filters.status = status;
    }

    /// Sets the contract-type selection.
    pub fn set_contrato(&mut self, contrato: ContractFilter) {
        self.filters.contrato = contrato;
    }

    /// Toggles a function group in or out of the selection.
    pub fn toggle_grupo(&mut self, grupo: FunctionGroup) {
        self.filters.grupos.toggle(grupo);
    }

    /// Clears the group selection back to "all groups".
    pub fn clear_grupos(&mut self) {
        self.filters.grupos.clear();
    }

    /// Restores the filter defaults for the viewer's scope.
    pub fn reset_filters(&mut self) {
        if let Some(scope) = &self.scope {
            self.filters.reset(scope);
        } else {
            self.filters = FilterState::default();
        }
    }

    /// Applies a column-header click to the sort state.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort.click(column);
    }

    /// Derives the current snapshot from the last successful fetch.
    ///
    /// Pure with respect to the stored state: no fetch is triggered and
    /// repeated calls yield identical output.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let (visible, counts) = self.scope.as_ref().map_or_else(
            || (Vec::new(), DashboardCounts::default()),
            |scope| {
                let view: DashboardView = apply(&self.rows, scope, &self.filters);
                let mut visible: Vec<ClassifiedRow> = view.visible;
                sort_rows(&mut visible, self.sort);
                (visible, view.counts)
            },
        );

        DashboardSnapshot {
            profile: self.profile.clone(),
            visible,
            counts,
            base_options: base_options(&self.rows),
            filters: self.filters.clone(),
            sort: self.sort,
            last_updated: self.last_updated.clone(),
            loading: matches!(
                self.phase,
                DashboardPhase::ProfileLoading | DashboardPhase::Fetching
            ),
            profile_error: match &self.phase {
                DashboardPhase::ProfileError(message) => Some(message.clone()),
                _ => None,
            },
            fetch_error: match &self.phase {
                DashboardPhase::FetchError(message) => Some(message.clone()),
                _ => None,
            },
        }
    }

    /// Tears the session down to idle, dropping rows, profile and filters.
    pub fn logout(&mut self) {
        self.phase = DashboardPhase::Idle;
        self.profile = None;
        self.scope = None;
        self.rows.clear();
        self.filters = FilterState::default();
        self.sort = SortState::default();
        self.last_updated = None;
    }
}
