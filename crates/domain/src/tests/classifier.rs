// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ClassifierRules, FunctionGroup};

#[test]
fn test_classify_ramp_agent() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("AGENTE DE RAMPA", "GRU"),
        FunctionGroup::Rampa
    );
}

#[test]
fn test_classify_is_case_insensitive() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("agente de rampa", "gru"),
        FunctionGroup::Rampa
    );
    assert_eq!(
        rules.classify("Agente De Rampa", "Gru"),
        FunctionGroup::Rampa
    );
}

#[test]
fn test_classify_head_office_always_outros() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("QUALQUER COISA", "SEDE"),
        FunctionGroup::Outros
    );
    assert_eq!(
        rules.classify("AGENTE DE RAMPA", "SEDE"),
        FunctionGroup::Outros
    );
}

#[test]
fn test_classify_head_office_preempts_lider_rule() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("LIDER DE RAMPA", "HQ2"),
        FunctionGroup::Outros
    );
}

#[test]
fn test_classify_lider_precedes_rampa() {
    // "LIDER DE RAMPA" contains "RAMPA"; the lead rule must win.
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("LIDER DE RAMPA", "GRU"),
        FunctionGroup::Lider
    );
    assert_eq!(rules.classify("LOADMASTER", "GRU"), FunctionGroup::Lider);
}

#[test]
fn test_classify_pax_terms() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("AGENTE DE PASSAGENS", "CGH"),
        FunctionGroup::Pax
    );
    assert_eq!(rules.classify("BALANCEIRO", "CGH"), FunctionGroup::Pax);
    assert_eq!(rules.classify("AGENTE DE PESO", "CGH"), FunctionGroup::Pax);
    assert_eq!(
        rules.classify("ATENDENTE DE AEROPORTO", "CGH"),
        FunctionGroup::Pax
    );
}

#[test]
fn test_classify_supervisor_after_trades() {
    // "SUPERVISOR DE MANUTENCAO" contains a maintenance term, which has
    // higher precedence than the supervisor rule.
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("SUPERVISOR DE MANUTENCAO", "GRU"),
        FunctionGroup::Gse
    );
    assert_eq!(
        rules.classify("SUPERVISOR DE AEROPORTO", "GRU"),
        FunctionGroup::Supervisor
    );
}

#[test]
fn test_classify_remaining_groups() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(
        rules.classify("AUXILIAR DE LIMPEZA", "GRU"),
        FunctionGroup::Limpeza
    );
    assert_eq!(
        rules.classify("OPERADOR DE EQUIPAMENTOS", "GRU"),
        FunctionGroup::Operador
    );
    assert_eq!(
        rules.classify("AGENTE DE PROTECAO", "GRU"),
        FunctionGroup::Security
    );
    assert_eq!(
        rules.classify("MECANICO DE GSE", "GRU"),
        FunctionGroup::Gse
    );
}

#[test]
fn test_classify_unmatched_falls_through_to_outros() {
    let rules: ClassifierRules = ClassifierRules::default();
    assert_eq!(rules.classify("ANALISTA FISCAL", "GRU"), FunctionGroup::Outros);
    assert_eq!(rules.classify("", "GRU"), FunctionGroup::Outros);
}

#[test]
fn test_classify_is_deterministic() {
    let rules: ClassifierRules = ClassifierRules::default();
    let first: FunctionGroup = rules.classify("AGENTE DE RAMPA", "GRU");
    let second: FunctionGroup = rules.classify("AGENTE DE RAMPA", "GRU");
    assert_eq!(first, second);
}

#[test]
fn test_custom_rules_override_defaults() {
    let rules: ClassifierRules = ClassifierRules {
        rampa_terms: vec![String::from("CARGA")],
        ..ClassifierRules::default()
    };
    assert_eq!(
        rules.classify("AGENTE DE CARGA", "GRU"),
        FunctionGroup::Rampa
    );
    // The default RAMPA term is gone once overridden.
    assert_eq!(
        rules.classify("AGENTE DE RAMPA", "GRU"),
        FunctionGroup::Outros
    );
}
