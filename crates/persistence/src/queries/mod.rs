// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries. All queries use Diesel DSL; point lookups return
//! `Ok(None)` when nothing matches.

pub mod colaboradores;
pub mod painel;
pub mod profiles;
pub mod sessions;
