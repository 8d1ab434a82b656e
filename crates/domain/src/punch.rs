// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::types::{Filial, FunctionGroup, PunchStatus};

/// Contracted weekly-hours figures recognized as full-time.
pub const FULL_TIME_CARGAS: [i32; 3] = [180, 210, 220];

/// One employee's shift snapshot for the viewing window.
///
/// Rows are produced entirely by the external aggregation job and are
/// read-only input to the dashboard pipeline. Every field the job may omit
/// is optional; the pipeline degrades gracefully instead of failing.
///
/// Rows carry no identity beyond (matricula, feed position): duplicate
/// matriculas across refresh cycles are possible and are never deduplicated.
/// Each fetch replaces the prior row set wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRow {
    /// Employee id.
    pub matricula: Option<String>,
    /// Display name.
    pub nome: Option<String>,
    /// Home base code, as the feed carries it (unnormalized).
    pub colaborador_filial: Option<String>,
    /// Contracted weekly-hours figure.
    pub carga_horaria: Option<i32>,
    /// Job title.
    pub funcao: Option<String>,
    /// Scheduled shift start (ISO-8601).
    pub entrada_escala: Option<String>,
    /// Scheduled shift end (ISO-8601).
    pub saida_escala: Option<String>,
    /// First punch in (ISO-8601).
    pub entrada1: Option<String>,
    /// First punch out (ISO-8601).
    pub saida1: Option<String>,
    /// Second punch in (ISO-8601).
    pub entrada2: Option<String>,
    /// Second punch out (ISO-8601).
    pub saida2: Option<String>,
    /// Break length in minutes.
    pub intervalo_min: Option<i32>,
    /// Worked hours (decimal).
    pub horas_trabalhadas: Option<f64>,
    /// Expected hours for the window (decimal).
    pub expected_hours: Option<f64>,
    /// Overtime hours (decimal).
    pub hora_extra: Option<f64>,
    /// Shift status; `None` when absent or unrecognized.
    pub status: Option<PunchStatus>,
}

impl PunchRow {
    /// Returns whether the row has at least one actual punch timestamp.
    ///
    /// A row with no punches represents an employee with no activity this
    /// window and is excluded from every view.
    #[must_use]
    pub const fn has_any_punch(&self) -> bool {
        self.entrada1.is_some()
            || self.saida1.is_some()
            || self.entrada2.is_some()
            || self.saida2.is_some()
    }

    /// Returns whether the contracted hours figure is a full-time value.
    ///
    /// Missing contracted hours count as part-time.
    #[must_use]
    pub fn is_full_time(&self) -> bool {
        self.carga_horaria
            .is_some_and(|carga| FULL_TIME_CARGAS.contains(&carga))
    }

    /// Returns the normalized home base, empty when the feed omitted it.
    #[must_use]
    pub fn filial(&self) -> Filial {
        Filial::new(self.colaborador_filial.as_deref().unwrap_or(""))
    }
}

/// A [`PunchRow`] augmented with its derived function group.
///
/// Classification is pure and recomputed on every fetch; it is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRow {
    /// The underlying feed row.
    #[serde(flatten)]
    pub row: PunchRow,
    /// The derived function group.
    pub grupo: FunctionGroup,
}

impl ClassifiedRow {
    /// Creates a classified row.
    #[must_use]
    pub const fn new(row: PunchRow, grupo: FunctionGroup) -> Self {
        Self { row, grupo }
    }
}
