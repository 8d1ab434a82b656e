// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The filter and aggregation engine.
//!
//! Filtering runs in two stages: the scope stage applies every dimension
//! except status (activity, base visibility, contract type, function group,
//! search), and the status stage narrows the scoped set to the selected
//! status. Per-status counters are computed over the scoped set so the
//! status tiles keep showing the whole scoped population while one status
//! is being viewed.

use ponto_ops_domain::{ClassifiedRow, Filial, PunchStatus, ViewerScope};

use crate::filter::FilterState;

/// Row counts per status bucket over the scoped set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    /// Rows still waiting for a punch.
    pub aguardando: usize,
    /// Rows currently in overtime.
    pub em_hora_extra: usize,
    /// Rows currently within expected hours.
    pub em_jornada: usize,
    /// Rows finished within expected hours.
    pub finalizado_ok: usize,
    /// Rows finished with overtime.
    pub finalizado_com_hora_extra: usize,
}

impl StatusCounts {
    /// Rows finished either way.
    #[must_use]
    pub const fn finalizados(&self) -> usize {
        self.finalizado_ok + self.finalizado_com_hora_extra
    }

    fn bump(&mut self, status: Option<PunchStatus>) {
        match status {
            Some(PunchStatus::Aguardando) => self.aguardando += 1,
            Some(PunchStatus::TrabalhandoHoraExtra) => self.em_hora_extra += 1,
            Some(PunchStatus::TrabalhandoOk) => self.em_jornada += 1,
            Some(PunchStatus::FinalizadoOk) => self.finalizado_ok += 1,
            Some(PunchStatus::FinalizadoComHoraExtra) => {
                self.finalizado_com_hora_extra += 1;
            }
            None => {}
        }
    }
}

/// Summary counters for a dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardCounts {
    /// Visible rows after the status stage.
    pub total: usize,
    /// Sum of overtime hours over the visible rows; absent values count as
    /// zero.
    pub hora_extra_total: f64,
    /// Per-status buckets over the scoped (pre-status) set.
    pub por_status: StatusCounts,
}

/// The product of one engine run: the visible rows and their counters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    /// Rows passing every filter dimension, in feed order.
    pub visible: Vec<ClassifiedRow>,
    /// Summary counters.
    pub counts: DashboardCounts,
}

fn in_scope(row: &ClassifiedRow, scope: &ViewerScope, filters: &FilterState) -> bool {
    // Cheapest checks first; every dimension must hold.
    if !row.row.has_any_punch() {
        return false;
    }

    let row_base: Filial = row.row.filial();
    let base_ok: bool = if scope.can_view_all_bases {
        filters.base.as_ref().is_none_or(|base| &row_base == base)
    } else {
        let own: Filial = scope
            .default_base
            .clone()
            .unwrap_or_else(|| Filial::new(""));
        row_base == own
    };
    if !base_ok {
        return false;
    }

    if !filters.contrato.matches(&row.row) {
        return false;
    }

    if !filters.grupos.allows(row.grupo) {
        return false;
    }

    let needle: String = filters.search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let nome: String = row.row.nome.as_deref().unwrap_or("").to_lowercase();
    let matricula: String = row.row.matricula.as_deref().unwrap_or("").to_lowercase();
    nome.contains(&needle) || matricula.contains(&needle)
}

/// Runs the scope and status stages over a classified row set.
///
/// Never fails: malformed or missing fields degrade to "excluded" or zero.
/// Applying the same filters to the same rows twice yields identical
/// output.
#[must_use]
pub fn apply(rows: &[ClassifiedRow], scope: &ViewerScope, filters: &FilterState) -> DashboardView {
    let scoped: Vec<&ClassifiedRow> = rows
        .iter()
        .filter(|row| in_scope(row, scope, filters))
        .collect();

    let mut por_status: StatusCounts = StatusCounts::default();
    for row in &scoped {
        por_status.bump(row.row.status);
    }

    let visible: Vec<ClassifiedRow> = scoped
        .into_iter()
        .filter(|row| filters.status.matches(row.row.status))
        .cloned()
        .collect();

    let hora_extra_total: f64 = visible
        .iter()
        .filter_map(|row| row.row.hora_extra)
        .sum();

    DashboardView {
        counts: DashboardCounts {
            total: visible.len(),
            hora_extra_total,
            por_status,
        },
        visible,
    }
}

/// Collects the distinct selectable bases present in a row set.
///
/// Head-office codes and empty bases are never offered as filter options.
/// The result is sorted for stable presentation.
#[must_use]
pub fn base_options(rows: &[ClassifiedRow]) -> Vec<Filial> {
    let mut bases: Vec<Filial> = rows
        .iter()
        .map(|row| row.row.filial())
        .filter(|base| !base.is_empty() && !base.is_head_office())
        .collect();
    bases.sort();
    bases.dedup();
    bases
}
