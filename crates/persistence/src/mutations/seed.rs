// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seeding helpers standing in for the external systems that own the
//! registry and the dashboard relation. Used by tests and `cargo xtask
//! seed`; the portal itself never writes either table.

use diesel::prelude::*;

use crate::data_models::ColaboradorData;
use crate::diesel_schema::{colaboradores, painel_ponto};
use crate::error::PersistenceError;
use ponto_ops_domain::{PunchRow, PunchStatus};

/// Inserts or replaces a registry entry.
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub fn upsert_colaborador(
    conn: &mut SqliteConnection,
    colaborador: &ColaboradorData,
) -> Result<(), PersistenceError> {
    diesel::replace_into(colaboradores::table)
        .values((
            colaboradores::matricula.eq(&colaborador.matricula),
            colaboradores::nome.eq(&colaborador.nome),
            colaboradores::filial.eq(&colaborador.filial),
            colaboradores::funcao.eq(&colaborador.funcao),
        ))
        .execute(conn)?;
    Ok(())
}

/// Appends a row to the dashboard relation.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_painel_row(
    conn: &mut SqliteConnection,
    row: &PunchRow,
) -> Result<(), PersistenceError> {
    diesel::insert_into(painel_ponto::table)
        .values((
            painel_ponto::matricula.eq(&row.matricula),
            painel_ponto::nome.eq(&row.nome),
            painel_ponto::colaborador_filial.eq(&row.colaborador_filial),
            painel_ponto::carga_horaria.eq(row.carga_horaria),
            painel_ponto::funcao.eq(&row.funcao),
            painel_ponto::entrada_escala.eq(&row.entrada_escala),
            painel_ponto::saida_escala.eq(&row.saida_escala),
            painel_ponto::entrada1.eq(&row.entrada1),
            painel_ponto::saida1.eq(&row.saida1),
            painel_ponto::entrada2.eq(&row.entrada2),
            painel_ponto::saida2.eq(&row.saida2),
            painel_ponto::intervalo_min.eq(row.intervalo_min),
            painel_ponto::horas_trabalhadas.eq(row.horas_trabalhadas),
            painel_ponto::expected_hours.eq(row.expected_hours),
            painel_ponto::hora_extra.eq(row.hora_extra),
            painel_ponto::status.eq(row.status.as_ref().map(PunchStatus::as_str)),
        ))
        .execute(conn)?;
    Ok(())
}

/// Clears the dashboard relation, as the aggregation job does before each
/// materialisation.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear_painel(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::delete(painel_ponto::table).execute(conn)?;
    Ok(())
}
