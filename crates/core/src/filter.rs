// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;
use std::str::FromStr;

use ponto_ops_domain::{Filial, FunctionGroup, PunchRow, PunchStatus, ViewerScope};

use crate::error::CoreError;

/// The "all statuses" / single-status selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    Todas,
    /// Exactly one status.
    Only(PunchStatus),
}

impl StatusFilter {
    /// Returns whether a row status passes this filter.
    ///
    /// A concrete selection requires an exact match; rows with an absent or
    /// unrecognized status only pass `Todas`.
    #[must_use]
    pub fn matches(&self, status: Option<PunchStatus>) -> bool {
        match self {
            Self::Todas => true,
            Self::Only(wanted) => status == Some(*wanted),
        }
    }

    /// Converts this selection to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todas => "todas",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("todas") {
            return Ok(Self::Todas);
        }
        PunchStatus::from_str(s)
            .map(Self::Only)
            .map_err(|_| CoreError::InvalidStatusFilter(s.to_string()))
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contract-type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractFilter {
    /// No restriction.
    #[default]
    Todas,
    /// Contracted hours in the full-time set.
    Full,
    /// Everything else, including rows with no contracted hours.
    Part,
}

impl ContractFilter {
    /// Returns whether a row passes this filter.
    #[must_use]
    pub fn matches(&self, row: &PunchRow) -> bool {
        match self {
            Self::Todas => true,
            Self::Full => row.is_full_time(),
            Self::Part => !row.is_full_time(),
        }
    }

    /// Converts this selection to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todas => "todas",
            Self::Full => "full",
            Self::Part => "part",
        }
    }
}

impl FromStr for ContractFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todas" => Ok(Self::Todas),
            "full" => Ok(Self::Full),
            "part" => Ok(Self::Part),
            other => Err(CoreError::InvalidContractFilter(other.to_string())),
        }
    }
}

impl std::fmt::Display for ContractFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Function-group selection.
///
/// "All groups" and a concrete set are mutually exclusive by construction:
/// selecting a concrete group leaves `Todas`, and deselecting the last
/// concrete group restores it, so the selection is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupSelection {
    /// No group restriction.
    #[default]
    Todas,
    /// A non-empty set of concrete groups.
    Only(BTreeSet<FunctionGroup>),
}

impl GroupSelection {
    /// Returns whether a classified group passes this selection.
    #[must_use]
    pub fn allows(&self, grupo: FunctionGroup) -> bool {
        match self {
            Self::Todas => true,
            Self::Only(groups) => groups.contains(&grupo),
        }
    }

    /// Toggles a concrete group in or out of the selection.
    pub fn toggle(&mut self, grupo: FunctionGroup) {
        match self {
            Self::Todas => {
                *self = Self::Only(BTreeSet::from([grupo]));
            }
            Self::Only(groups) => {
                if !groups.remove(&grupo) {
                    groups.insert(grupo);
                }
                if groups.is_empty() {
                    *self = Self::Todas;
                }
            }
        }
    }

    /// Clears the selection back to "all groups".
    pub fn clear(&mut self) {
        *self = Self::Todas;
    }

    /// Returns the selection as wire values, with `todas` standing in for
    /// the unrestricted selection.
    #[must_use]
    pub fn as_wire(&self) -> Vec<&'static str> {
        match self {
            Self::Todas => vec!["todas"],
            Self::Only(groups) => groups.iter().map(FunctionGroup::as_str).collect(),
        }
    }
}

/// The complete filter state for one dashboard session.
///
/// Initialized from the viewer's scope (scoped viewers get their own base
/// preselected), mutated by user interaction, and restored to those
/// defaults on reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Search text matched against name and matricula.
    pub search: String,
    /// Selected base; `None` means all bases. Only meaningful for viewers
    /// with all-base visibility — scoped viewers are pinned to their own
    /// base regardless.
    pub base: Option<Filial>,
    /// Status selection.
    pub status: StatusFilter,
    /// Contract-type selection.
    pub contrato: ContractFilter,
    /// Function-group selection.
    pub grupos: GroupSelection,
}

impl FilterState {
    /// Creates the default filter state for a viewer scope.
    #[must_use]
    pub fn for_scope(scope: &ViewerScope) -> Self {
        Self {
            base: scope.default_base.clone(),
            ..Self::default()
        }
    }

    /// Restores the defaults for the scope, clearing every dimension.
    pub fn reset(&mut self, scope: &ViewerScope) {
        *self = Self::for_scope(scope);
    }
}
