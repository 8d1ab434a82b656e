// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use ponto_ops_domain::{Filial, FunctionGroup, PunchStatus};

use crate::tests::helpers::{scope_all, scope_base};
use crate::{ContractFilter, CoreError, FilterState, GroupSelection, StatusFilter};

#[test]
fn test_group_selection_starts_unrestricted() {
    let grupos: GroupSelection = GroupSelection::default();
    for grupo in FunctionGroup::ALL {
        assert!(grupos.allows(grupo));
    }
    assert_eq!(grupos.as_wire(), vec!["todas"]);
}

#[test]
fn test_selecting_a_group_drops_todas() {
    let mut grupos: GroupSelection = GroupSelection::default();
    grupos.toggle(FunctionGroup::Rampa);

    assert!(grupos.allows(FunctionGroup::Rampa));
    assert!(!grupos.allows(FunctionGroup::Pax));
    assert_eq!(grupos.as_wire(), vec!["RAMPA"]);
}

#[test]
fn test_removing_last_group_restores_todas() {
    let mut grupos: GroupSelection = GroupSelection::default();
    grupos.toggle(FunctionGroup::Rampa);
    grupos.toggle(FunctionGroup::Rampa);

    assert_eq!(grupos, GroupSelection::Todas);
    assert!(grupos.allows(FunctionGroup::Pax));
}

#[test]
fn test_group_selection_accumulates() {
    let mut grupos: GroupSelection = GroupSelection::default();
    grupos.toggle(FunctionGroup::Rampa);
    grupos.toggle(FunctionGroup::Pax);

    assert!(grupos.allows(FunctionGroup::Rampa));
    assert!(grupos.allows(FunctionGroup::Pax));
    assert!(!grupos.allows(FunctionGroup::Gse));

    grupos.toggle(FunctionGroup::Rampa);
    assert!(!grupos.allows(FunctionGroup::Rampa));
    assert!(grupos.allows(FunctionGroup::Pax));
}

#[test]
fn test_clear_restores_todas() {
    let mut grupos: GroupSelection = GroupSelection::default();
    grupos.toggle(FunctionGroup::Rampa);
    grupos.toggle(FunctionGroup::Pax);
    grupos.clear();
    assert_eq!(grupos, GroupSelection::Todas);
}

#[test]
fn test_status_filter_matching() {
    let todas: StatusFilter = StatusFilter::Todas;
    assert!(todas.matches(Some(PunchStatus::TrabalhandoOk)));
    assert!(todas.matches(None));

    let only: StatusFilter = StatusFilter::Only(PunchStatus::TrabalhandoHoraExtra);
    assert!(only.matches(Some(PunchStatus::TrabalhandoHoraExtra)));
    assert!(!only.matches(Some(PunchStatus::TrabalhandoOk)));
    assert!(!only.matches(None));
}

#[test]
fn test_status_filter_parsing() {
    assert_eq!(
        StatusFilter::from_str("todas"),
        Ok(StatusFilter::Todas)
    );
    assert_eq!(
        StatusFilter::from_str("trabalhando em hora extra"),
        Ok(StatusFilter::Only(PunchStatus::TrabalhandoHoraExtra))
    );
    assert!(matches!(
        StatusFilter::from_str("dormindo"),
        Err(CoreError::InvalidStatusFilter(_))
    ));
}

#[test]
fn test_contract_filter_parsing() {
    assert_eq!(ContractFilter::from_str("todas"), Ok(ContractFilter::Todas));
    assert_eq!(ContractFilter::from_str("FULL"), Ok(ContractFilter::Full));
    assert_eq!(ContractFilter::from_str("part"), Ok(ContractFilter::Part));
    assert!(matches!(
        ContractFilter::from_str("meio"),
        Err(CoreError::InvalidContractFilter(_))
    ));
}

#[test]
fn test_filter_state_preselects_scoped_base() {
    let filters: FilterState = FilterState::for_scope(&scope_base("GRU"));
    assert_eq!(filters.base, Some(Filial::new("GRU")));
    assert_eq!(filters.status, StatusFilter::Todas);
    assert_eq!(filters.contrato, ContractFilter::Todas);
    assert_eq!(filters.grupos, GroupSelection::Todas);
}

#[test]
fn test_filter_state_for_all_base_viewer_has_no_base() {
    let filters: FilterState = FilterState::for_scope(&scope_all());
    assert_eq!(filters.base, None);
}

#[test]
fn test_reset_restores_scope_defaults() {
    let mut filters: FilterState = FilterState::for_scope(&scope_base("GRU"));
    filters.search = String::from("prado");
    filters.status = StatusFilter::Only(PunchStatus::TrabalhandoOk);
    filters.contrato = ContractFilter::Full;
    filters.grupos.toggle(FunctionGroup::Rampa);
    filters.base = Some(Filial::new("BSB"));

    filters.reset(&scope_base("GRU"));

    assert_eq!(filters, FilterState::for_scope(&scope_base("GRU")));
}
