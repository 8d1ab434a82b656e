// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Filial, Role, ViewerProfile, ViewerScope, resolve_scope};

fn profile(role: Role, filial: Option<&str>) -> ViewerProfile {
    ViewerProfile {
        id: 1,
        matricula: String::from("140440"),
        nome: Some(String::from("Maria Souza")),
        filial: filial.map(Filial::new),
        funcao: Some(String::from("SUPERVISOR DE AEROPORTO")),
        role,
    }
}

#[test]
fn test_admin_sees_all_bases() {
    let scope: ViewerScope = resolve_scope(&profile(Role::Admin, Some("GRU")));
    assert!(scope.can_view_all_bases);
    assert_eq!(scope.default_base, None);
}

#[test]
fn test_plain_viewer_is_scoped_to_own_base() {
    let scope: ViewerScope = resolve_scope(&profile(Role::User, Some("GRU")));
    assert!(!scope.can_view_all_bases);
    assert_eq!(scope.default_base, Some(Filial::new("GRU")));
}

#[test]
fn test_head_office_viewer_sees_all_bases() {
    for base in ["SEDE", "HQ2"] {
        let scope: ViewerScope = resolve_scope(&profile(Role::User, Some(base)));
        assert!(scope.can_view_all_bases, "base {base} should be unscoped");
        assert_eq!(scope.default_base, None);
    }
}

#[test]
fn test_viewer_base_is_normalized() {
    let scope: ViewerScope = resolve_scope(&profile(Role::User, Some("  gru ")));
    assert_eq!(scope.default_base, Some(Filial::new("GRU")));
}

#[test]
fn test_viewer_without_base_has_no_default() {
    let scope: ViewerScope = resolve_scope(&profile(Role::User, None));
    assert!(!scope.can_view_all_bases);
    assert_eq!(scope.default_base, None);
}

#[test]
fn test_role_parsing_is_lenient() {
    assert_eq!(Role::from_stored(Some("admin")), Role::Admin);
    assert_eq!(Role::from_stored(Some("ADMIN")), Role::Admin);
    assert_eq!(Role::from_stored(Some("user")), Role::User);
    assert_eq!(Role::from_stored(Some("gerente")), Role::User);
    assert_eq!(Role::from_stored(None), Role::User);
}
