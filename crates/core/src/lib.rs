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

mod engine;
mod error;
mod fetch;
mod filter;
mod sort;
mod view_model;

#[cfg(test)]
mod tests;

pub use engine::{DashboardCounts, DashboardView, StatusCounts, apply, base_options};
pub use error::{CoreError, FeedError};
pub use fetch::{DEFAULT_PAGE_SIZE, DashboardFeed, fetch_all};
pub use filter::{ContractFilter, FilterState, GroupSelection, StatusFilter};
pub use sort::{SortColumn, SortDirection, SortState, sort_rows};
pub use view_model::{DashboardPhase, DashboardSnapshot, DashboardViewModel, FetchGeneration};
