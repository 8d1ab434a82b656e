// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee registry queries.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::ColaboradorData;
use crate::diesel_schema::colaboradores;
use crate::error::PersistenceError;

/// Diesel Queryable struct for registry rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = colaboradores)]
pub(crate) struct ColaboradorRow {
    pub matricula: String,
    pub nome: Option<String>,
    pub filial: Option<String>,
    pub funcao: Option<String>,
}

/// Retrieves a registry entry by matricula.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the matricula is unknown.
pub fn get_colaborador_by_matricula(
    conn: &mut SqliteConnection,
    matricula: &str,
) -> Result<Option<ColaboradorData>, PersistenceError> {
    debug!(matricula, "Looking up colaborador");
    let result: Result<ColaboradorRow, diesel::result::Error> = colaboradores::table
        .filter(colaboradores::matricula.eq(matricula.trim()))
        .select(ColaboradorRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ColaboradorData {
            matricula: row.matricula,
            nome: row.nome,
            filial: row.filial,
            funcao: row.funcao,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
