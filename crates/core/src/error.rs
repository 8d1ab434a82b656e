// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::DomainError;

/// Errors raised while parsing filter and sort selections from their wire
/// form.
///
/// The pipeline itself (classify, filter, aggregate, sort) is total and
/// never produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The string does not name a sortable column.
    InvalidSortColumn(String),
    /// The string is not a contract-type selection.
    InvalidContractFilter(String),
    /// The string is not a status selection.
    InvalidStatusFilter(String),
    /// A domain value failed to parse.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSortColumn(value) => write!(f, "Unknown sort column: {value}"),
            Self::InvalidContractFilter(value) => {
                write!(f, "Unknown contract filter: {value}")
            }
            Self::InvalidStatusFilter(value) => write!(f, "Unknown status filter: {value}"),
            Self::DomainViolation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Errors surfaced by a dashboard feed.
///
/// A feed error aborts the whole fetch: partial pages are never merged
/// into a successful result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The backend reported an error for a page request.
    Backend(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "Dashboard feed error: {message}"),
        }
    }
}

impl std::error::Error for FeedError {}
