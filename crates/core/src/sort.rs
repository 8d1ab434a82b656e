// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use ponto_ops_domain::ClassifiedRow;

use crate::error::CoreError;

/// The sortable dashboard columns.
///
/// Wire names match the feed column names so the presentation layer can
/// echo them straight into header clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Display name.
    #[default]
    Nome,
    /// Employee id.
    Matricula,
    /// Job title.
    Funcao,
    /// Home base.
    Filial,
    /// Contracted weekly hours.
    CargaHoraria,
    /// Scheduled shift start.
    EntradaEscala,
    /// First punch in.
    Entrada1,
    /// Second punch in.
    Entrada2,
    /// Worked hours.
    HorasTrabalhadas,
    /// Overtime hours.
    HoraExtra,
    /// Shift status.
    Status,
}

impl SortColumn {
    /// Converts this column to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nome => "nome",
            Self::Matricula => "matricula",
            Self::Funcao => "funcao",
            Self::Filial => "colaborador_filial",
            Self::CargaHoraria => "carga_horaria",
            Self::EntradaEscala => "entrada_escala",
            Self::Entrada1 => "entrada1",
            Self::Entrada2 => "entrada2",
            Self::HorasTrabalhadas => "horas_trabalhadas",
            Self::HoraExtra => "hora_extra",
            Self::Status => "status",
        }
    }
}

impl FromStr for SortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nome" => Ok(Self::Nome),
            "matricula" => Ok(Self::Matricula),
            "funcao" => Ok(Self::Funcao),
            "colaborador_filial" => Ok(Self::Filial),
            "carga_horaria" => Ok(Self::CargaHoraria),
            "entrada_escala" => Ok(Self::EntradaEscala),
            "entrada1" => Ok(Self::Entrada1),
            "entrada2" => Ok(Self::Entrada2),
            "horas_trabalhadas" => Ok(Self::HorasTrabalhadas),
            "hora_extra" => Ok(Self::HoraExtra),
            "status" => Ok(Self::Status),
            other => Err(CoreError::InvalidSortColumn(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Converts this direction to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The (column, direction) pair driving the sort stage.
///
/// Defaults to name ascending. Column-header interaction flips the
/// direction of the active column and selects a new column ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// The active column.
    pub column: SortColumn,
    /// The active direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Applies a column-header click.
    pub fn click(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Extracts the comparable key for a column: the stringified value,
/// lower-cased, with missing values as the empty string.
fn sort_key(row: &ClassifiedRow, column: SortColumn) -> String {
    let value: String = match column {
        SortColumn::Nome => row.row.nome.clone().unwrap_or_default(),
        SortColumn::Matricula => row.row.matricula.clone().unwrap_or_default(),
        SortColumn::Funcao => row.row.funcao.clone().unwrap_or_default(),
        SortColumn::Filial => row.row.colaborador_filial.clone().unwrap_or_default(),
        SortColumn::CargaHoraria => row
            .row
            .carga_horaria
            .map(|carga| carga.to_string())
            .unwrap_or_default(),
        SortColumn::EntradaEscala => row.row.entrada_escala.clone().unwrap_or_default(),
        SortColumn::Entrada1 => row.row.entrada1.clone().unwrap_or_default(),
        SortColumn::Entrada2 => row.row.entrada2.clone().unwrap_or_default(),
        SortColumn::HorasTrabalhadas => row
            .row
            .horas_trabalhadas
            .map(|hours| hours.to_string())
            .unwrap_or_default(),
        SortColumn::HoraExtra => row
            .row
            .hora_extra
            .map(|hours| hours.to_string())
            .unwrap_or_default(),
        SortColumn::Status => row
            .row
            .status
            .map(|status| status.as_str().to_string())
            .unwrap_or_default(),
    };
    value.to_lowercase()
}

/// Sorts rows by the given state.
///
/// The sort is stable and the direction is applied inside the comparator,
/// not by reversing the output, so rows with equal keys keep their input
/// order in both directions.
pub fn sort_rows(rows: &mut [ClassifiedRow], state: SortState) {
    rows.sort_by(|a, b| {
        let ordering: std::cmp::Ordering = sort_key(a, state.column).cmp(&sort_key(b, state.column));
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
