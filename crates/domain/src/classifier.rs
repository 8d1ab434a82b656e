// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job-title classification rules.
//!
//! Titles are mapped to a [`FunctionGroup`] by an ordered cascade of
//! substring-containment rules. The keyword tables are configuration data
//! so new titles can be routed without a rebuild; the defaults match the
//! production tables.

use serde::Deserialize;

use crate::types::{Filial, FunctionGroup};

fn terms(values: &[&str]) -> Vec<String> {
    values.iter().map(|term| (*term).to_string()).collect()
}

/// Keyword tables driving title classification.
///
/// Rules are evaluated top to bottom and the first match wins, so the table
/// order encodes precedence (e.g., "LIDER DE RAMPA" must be caught before
/// the plain "RAMPA" rule). All matching is on upper-cased substrings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Base codes whose staff always classify as `OUTROS`.
    pub head_office_bases: Vec<String>,
    /// Passenger-handling terms.
    pub pax_terms: Vec<String>,
    /// Lead/loadmaster terms.
    pub lider_terms: Vec<String>,
    /// Ramp and logistics terms.
    pub rampa_terms: Vec<String>,
    /// Cleaning terms.
    pub limpeza_terms: Vec<String>,
    /// Equipment-operator terms.
    pub operador_terms: Vec<String>,
    /// Security terms.
    pub security_terms: Vec<String>,
    /// Maintenance-trade terms.
    pub gse_terms: Vec<String>,
    /// Supervisor terms.
    pub supervisor_terms: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            head_office_bases: terms(&[Filial::SEDE, Filial::HQ2]),
            pax_terms: terms(&["PASSAG", "PAX", "BALANCEIRO", "AGENTE DE PESO", "ATEND"]),
            lider_terms: terms(&["LIDER DE OPERACOES", "LIDER DE RAMPA", "LOADMASTER"]),
            rampa_terms: terms(&["RAMPA", "LOGISTICA"]),
            limpeza_terms: terms(&["LIMPEZA"]),
            operador_terms: terms(&["OPERADOR"]),
            security_terms: terms(&["SECURITY", "PROTECAO"]),
            gse_terms: terms(&[
                "MANUTENCAO",
                "MECANICO",
                "ELETRICISTA",
                "MONTADOR",
                "PINTOR",
                "SERRALHEIRO",
                "SOLDADOR",
                "TECNICO",
                "OFICINA",
            ]),
            supervisor_terms: terms(&["SUPERVISOR DE AEROPORTO", "SUPERVISOR"]),
        }
    }
}

impl ClassifierRules {
    /// Classifies a (job title, base) pair into exactly one function group.
    ///
    /// Total and deterministic: the same inputs always yield the same group
    /// and no input can fail. Head-office bases short-circuit to `OUTROS`
    /// regardless of title; an unmatched title falls through to `OUTROS`.
    #[must_use]
    pub fn classify(&self, funcao: &str, filial: &str) -> FunctionGroup {
        let funcao_upper: String = funcao.to_uppercase();
        let filial_upper: String = filial.trim().to_uppercase();

        if self
            .head_office_bases
            .iter()
            .any(|base| base == &filial_upper)
        {
            return FunctionGroup::Outros;
        }

        let matches = |table: &[String]| table.iter().any(|term| funcao_upper.contains(term));

        if matches(&self.pax_terms) {
            FunctionGroup::Pax
        } else if matches(&self.lider_terms) {
            FunctionGroup::Lider
        } else if matches(&self.rampa_terms) {
            FunctionGroup::Rampa
        } else if matches(&self.limpeza_terms) {
            FunctionGroup::Limpeza
        } else if matches(&self.operador_terms) {
            FunctionGroup::Operador
        } else if matches(&self.security_terms) {
            FunctionGroup::Security
        } else if matches(&self.gse_terms) {
            FunctionGroup::Gse
        } else if matches(&self.supervisor_terms) {
            FunctionGroup::Supervisor
        } else {
            FunctionGroup::Outros
        }
    }
}
