// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classifier;
mod error;
mod format;
mod profile;
mod punch;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::ClassifierRules;
pub use error::DomainError;
pub use format::{decimal_hours_to_hhmm, format_datetime, format_pair};
pub use profile::{Role, ViewerProfile, ViewerScope, resolve_scope};
pub use punch::{ClassifiedRow, FULL_TIME_CARGAS, PunchRow};
pub use types::{Filial, FunctionGroup, PunchStatus};
