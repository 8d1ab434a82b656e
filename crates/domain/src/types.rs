// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents an operational site (base) code.
///
/// Filial codes are normalized to trimmed uppercase so comparisons are
/// case-insensitive everywhere. `SEDE` and `HQ2` identify head-office
/// locations, which are treated specially by classification and scoping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filial {
    /// The normalized site code (e.g., "GRU", "BSB").
    value: String,
}

impl Filial {
    /// The primary head-office code.
    pub const SEDE: &'static str = "SEDE";
    /// The secondary head-office code.
    pub const HQ2: &'static str = "HQ2";

    /// Creates a new `Filial`, trimming and upper-casing the code.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_uppercase(),
        }
    }

    /// Returns the normalized site code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the code is empty after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns whether this is a head-office location.
    ///
    /// Head-office staff are never operationally classified and head-office
    /// codes never appear in base filter options.
    #[must_use]
    pub fn is_head_office(&self) -> bool {
        self.value == Self::SEDE || self.value == Self::HQ2
    }
}

impl std::fmt::Display for Filial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Coarse classification of a job title into one operational category.
///
/// Groups are used for filtering and reporting only; they carry no
/// authorization semantics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionGroup {
    /// Passenger handling (check-in, boarding, weight and balance).
    Pax,
    /// Operations and ramp leads, loadmasters.
    Lider,
    /// Ramp and logistics staff.
    Rampa,
    /// Aircraft cleaning staff.
    Limpeza,
    /// Equipment operators.
    Operador,
    /// Security and protection staff.
    Security,
    /// Ground support equipment maintenance trades.
    Gse,
    /// Airport supervisors.
    Supervisor,
    /// Everything else, including head-office staff.
    #[default]
    Outros,
}

impl FunctionGroup {
    /// All groups in display order.
    pub const ALL: [Self; 9] = [
        Self::Pax,
        Self::Lider,
        Self::Rampa,
        Self::Limpeza,
        Self::Operador,
        Self::Security,
        Self::Gse,
        Self::Supervisor,
        Self::Outros,
    ];

    /// Converts this group to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pax => "PAX",
            Self::Lider => "LIDER",
            Self::Rampa => "RAMPA",
            Self::Limpeza => "LIMPEZA",
            Self::Operador => "OPERADOR",
            Self::Security => "SECURITY",
            Self::Gse => "GSE",
            Self::Supervisor => "SUPERVISOR",
            Self::Outros => "OUTROS",
        }
    }
}

impl FromStr for FunctionGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAX" => Ok(Self::Pax),
            "LIDER" => Ok(Self::Lider),
            "RAMPA" => Ok(Self::Rampa),
            "LIMPEZA" => Ok(Self::Limpeza),
            "OPERADOR" => Ok(Self::Operador),
            "SECURITY" => Ok(Self::Security),
            "GSE" => Ok(Self::Gse),
            "SUPERVISOR" => Ok(Self::Supervisor),
            "OUTROS" => Ok(Self::Outros),
            other => Err(DomainError::InvalidFunctionGroup(other.to_string())),
        }
    }
}

impl std::fmt::Display for FunctionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shift status of a punch row, as computed by the external aggregation job.
///
/// The wire strings are the exact values the aggregation relation carries;
/// the labels are what operators see. Both mappings are exhaustive so a new
/// status cannot drift through the UI unnoticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunchStatus {
    /// No punch yet for the window.
    #[serde(rename = "aguardando")]
    Aguardando,
    /// Currently working beyond expected hours.
    #[serde(rename = "trabalhando em hora extra")]
    TrabalhandoHoraExtra,
    /// Currently working within expected hours.
    #[serde(rename = "trabalhando ok")]
    TrabalhandoOk,
    /// Shift finished within expected hours.
    #[serde(rename = "finalizado ok")]
    FinalizadoOk,
    /// Shift finished with overtime.
    #[serde(rename = "finalizado com hora extra")]
    FinalizadoComHoraExtra,
}

impl PunchStatus {
    /// All statuses in filter display order.
    pub const ALL: [Self; 5] = [
        Self::Aguardando,
        Self::TrabalhandoHoraExtra,
        Self::TrabalhandoOk,
        Self::FinalizadoOk,
        Self::FinalizadoComHoraExtra,
    ];

    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aguardando => "aguardando",
            Self::TrabalhandoHoraExtra => "trabalhando em hora extra",
            Self::TrabalhandoOk => "trabalhando ok",
            Self::FinalizadoOk => "finalizado ok",
            Self::FinalizadoComHoraExtra => "finalizado com hora extra",
        }
    }

    /// Returns the operator-facing label for this status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aguardando => "Sem batida",
            Self::TrabalhandoHoraExtra => "Em hora extra",
            Self::TrabalhandoOk => "Em jornada",
            Self::FinalizadoOk => "Finalizado",
            Self::FinalizadoComHoraExtra => "Finalizado c/ HE",
        }
    }

    /// Returns whether the shift has finished, with or without overtime.
    #[must_use]
    pub const fn is_finalizado(&self) -> bool {
        matches!(self, Self::FinalizadoOk | Self::FinalizadoComHoraExtra)
    }

    /// Parses a wire status leniently.
    ///
    /// Unknown values degrade to `None` instead of failing so an unexpected
    /// status in the feed can never take the dashboard down.
    #[must_use]
    pub fn parse_opt(value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

impl FromStr for PunchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aguardando" => Ok(Self::Aguardando),
            "trabalhando em hora extra" => Ok(Self::TrabalhandoHoraExtra),
            "trabalhando ok" => Ok(Self::TrabalhandoOk),
            "finalizado ok" => Ok(Self::FinalizadoOk),
            "finalizado com hora extra" => Ok(Self::FinalizadoComHoraExtra),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for PunchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
