// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::types::Filial;

/// Portal roles.
///
/// Roles gate base-level visibility only; every other capability is the
/// same for all authenticated viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May see every base.
    Admin,
    /// Scoped to the viewer's own base unless it is head office.
    User,
}

impl Role {
    /// Parses a stored role value leniently.
    ///
    /// Anything other than `admin` (including absence) is a plain user;
    /// profiles written before roles existed carry no value at all.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::User,
        }
    }

    /// Converts this role to its stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated viewer's identity record.
///
/// Loaded once per session and immutable for its duration; there is no
/// in-app edit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerProfile {
    /// Canonical profile identifier.
    pub id: i64,
    /// Employee id.
    pub matricula: String,
    /// Display name.
    pub nome: Option<String>,
    /// Home base code.
    pub filial: Option<Filial>,
    /// Job title.
    pub funcao: Option<String>,
    /// Portal role.
    pub role: Role,
}

/// Base-level visibility derived from a viewer profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerScope {
    /// Whether the viewer may see rows from every base.
    pub can_view_all_bases: bool,
    /// The preselected base for scoped viewers; `None` means no restriction
    /// has been chosen yet.
    pub default_base: Option<Filial>,
}

/// Derives base-level visibility from a viewer profile.
///
/// All-base visibility is granted to admins and to head-office staff.
/// Scoped viewers default to their own base when they have one. Pure and
/// total.
#[must_use]
pub fn resolve_scope(profile: &ViewerProfile) -> ViewerScope {
    let head_office: bool = profile
        .filial
        .as_ref()
        .is_some_and(Filial::is_head_office);

    let can_view_all_bases: bool = profile.role == Role::Admin || head_office;

    let default_base: Option<Filial> = if can_view_all_bases {
        None
    } else {
        profile
            .filial
            .as_ref()
            .filter(|filial| !filial.is_empty())
            .cloned()
    };

    ViewerScope {
        can_view_all_bases,
        default_base,
    }
}
