// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard feed queries.
//!
//! `painel_ponto` is materialised by the external punch aggregation job;
//! the portal reads it in rowid order, page by page, and treats the
//! contents as opaque input.

use diesel::prelude::*;
use ponto_ops_domain::{PunchRow, PunchStatus};
use tracing::debug;

use crate::diesel_schema::painel_ponto;
use crate::error::PersistenceError;

/// Diesel Queryable struct for feed rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = painel_ponto)]
pub(crate) struct PainelRow {
    pub matricula: Option<String>,
    pub nome: Option<String>,
    pub colaborador_filial: Option<String>,
    pub carga_horaria: Option<i32>,
    pub funcao: Option<String>,
    pub entrada_escala: Option<String>,
    pub saida_escala: Option<String>,
    pub entrada1: Option<String>,
    pub saida1: Option<String>,
    pub entrada2: Option<String>,
    pub saida2: Option<String>,
    pub intervalo_min: Option<i32>,
    pub horas_trabalhadas: Option<f64>,
    pub expected_hours: Option<f64>,
    pub hora_extra: Option<f64>,
    pub status: Option<String>,
}

impl From<PainelRow> for PunchRow {
    fn from(row: PainelRow) -> Self {
        Self {
            matricula: row.matricula,
            nome: row.nome,
            colaborador_filial: row.colaborador_filial,
            carga_horaria: row.carga_horaria,
            funcao: row.funcao,
            entrada_escala: row.entrada_escala,
            saida_escala: row.saida_escala,
            entrada1: row.entrada1,
            saida1: row.saida1,
            entrada2: row.entrada2,
            saida2: row.saida2,
            intervalo_min: row.intervalo_min,
            horas_trabalhadas: row.horas_trabalhadas,
            expected_hours: row.expected_hours,
            hora_extra: row.hora_extra,
            // Unknown statuses degrade to None rather than failing the page.
            status: row.status.as_deref().and_then(PunchStatus::parse_opt),
        }
    }
}

/// Fetches one page of the dashboard feed.
///
/// Rows come back in rowid order so repeated pagination over an unchanged
/// relation is deterministic.
///
/// # Errors
///
/// Returns an error if the database query fails.
#[allow(clippy::cast_possible_wrap)]
pub fn fetch_page(
    conn: &mut SqliteConnection,
    offset: usize,
    limit: usize,
) -> Result<Vec<PunchRow>, PersistenceError> {
    debug!(offset, limit, "Fetching painel page");
    let rows: Vec<PainelRow> = painel_ponto::table
        .order(painel_ponto::painel_id.asc())
        .offset(offset as i64)
        .limit(limit as i64)
        .select(PainelRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
