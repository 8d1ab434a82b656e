// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::{PunchRow, PunchStatus};

use crate::{ColaboradorData, NewProfile, SqlitePersistence};

/// Creates a fresh in-memory database.
pub fn test_db() -> SqlitePersistence {
    match SqlitePersistence::new_in_memory() {
        Ok(db) => db,
        Err(e) => panic!("failed to create in-memory database: {e}"),
    }
}

/// A registry entry for an eligible supervisor.
pub fn supervisor_colaborador(matricula: &str) -> ColaboradorData {
    ColaboradorData {
        matricula: matricula.to_string(),
        nome: Some(String::from("Marcos Paulo Andrade")),
        filial: Some(String::from("GRU")),
        funcao: Some(String::from("SUPERVISOR DE AEROPORTO")),
    }
}

/// A signup request for the given matricula.
pub fn new_profile(matricula: &str, email: &str) -> NewProfile {
    NewProfile {
        matricula: matricula.to_string(),
        email: email.to_string(),
        password: String::from("correta-batata-cavalo-grampo"),
        nome: Some(String::from("Marcos Paulo Andrade")),
        filial: Some(String::from("GRU")),
        funcao: Some(String::from("SUPERVISOR DE AEROPORTO")),
        role: String::from("user"),
    }
}

/// An active feed row for the given employee.
pub fn painel_row(matricula: &str, nome: &str, filial: &str) -> PunchRow {
    PunchRow {
        matricula: Some(matricula.to_string()),
        nome: Some(nome.to_string()),
        colaborador_filial: Some(filial.to_string()),
        carga_horaria: Some(220),
        funcao: Some(String::from("AGENTE DE RAMPA")),
        entrada_escala: Some(String::from("2026-02-03T06:00:00-03:00")),
        saida_escala: Some(String::from("2026-02-03T14:00:00-03:00")),
        entrada1: Some(String::from("2026-02-03T06:02:00-03:00")),
        saida1: None,
        entrada2: None,
        saida2: None,
        intervalo_min: Some(60),
        horas_trabalhadas: Some(4.5),
        expected_hours: Some(8.0),
        hora_extra: Some(0.0),
        status: Some(PunchStatus::TrabalhandoOk),
    }
}
