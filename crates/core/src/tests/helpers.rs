// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::{
    ClassifiedRow, ClassifierRules, Filial, PunchRow, PunchStatus, Role, ViewerProfile,
    ViewerScope,
};

/// A bare row with no punches and no fields set.
pub fn empty_row() -> PunchRow {
    PunchRow {
        matricula: None,
        nome: None,
        colaborador_filial: None,
        carga_horaria: None,
        funcao: None,
        entrada_escala: None,
        saida_escala: None,
        entrada1: None,
        saida1: None,
        entrada2: None,
        saida2: None,
        intervalo_min: None,
        horas_trabalhadas: None,
        expected_hours: None,
        hora_extra: None,
        status: None,
    }
}

/// An active row (first punch present) for the given employee.
pub fn active_row(matricula: &str, nome: &str, filial: &str, funcao: &str) -> PunchRow {
    PunchRow {
        matricula: Some(matricula.to_string()),
        nome: Some(nome.to_string()),
        colaborador_filial: Some(filial.to_string()),
        funcao: Some(funcao.to_string()),
        entrada_escala: Some(String::from("2026-02-03T06:00:00-03:00")),
        saida_escala: Some(String::from("2026-02-03T14:00:00-03:00")),
        entrada1: Some(String::from("2026-02-03T06:02:00-03:00")),
        status: Some(PunchStatus::TrabalhandoOk),
        ..empty_row()
    }
}

/// Classifies a row with the default rules.
pub fn classify(row: PunchRow) -> ClassifiedRow {
    let rules: ClassifierRules = ClassifierRules::default();
    let grupo = rules.classify(
        row.funcao.as_deref().unwrap_or(""),
        row.colaborador_filial.as_deref().unwrap_or(""),
    );
    ClassifiedRow::new(row, grupo)
}

/// Scope of an all-base viewer.
pub fn scope_all() -> ViewerScope {
    ViewerScope {
        can_view_all_bases: true,
        default_base: None,
    }
}

/// Scope of a viewer pinned to one base.
pub fn scope_base(base: &str) -> ViewerScope {
    ViewerScope {
        can_view_all_bases: false,
        default_base: Some(Filial::new(base)),
    }
}

/// An admin profile at head office.
pub fn admin_profile() -> ViewerProfile {
    ViewerProfile {
        id: 1,
        matricula: String::from("521"),
        nome: Some(String::from("Ana Lima")),
        filial: Some(Filial::new("SEDE")),
        funcao: Some(String::from("GERENTE DE OPERACOES")),
        role: Role::Admin,
    }
}

/// A plain viewer profile at the given base.
pub fn user_profile(base: &str) -> ViewerProfile {
    ViewerProfile {
        id: 2,
        matricula: String::from("160767"),
        nome: Some(String::from("Carlos Prado")),
        filial: Some(Filial::new(base)),
        funcao: Some(String::from("SUPERVISOR DE AEROPORTO")),
        role: Role::User,
    }
}
