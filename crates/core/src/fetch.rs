// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::PunchRow;
use tracing::debug;

use crate::error::FeedError;

/// Default number of rows requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// A paginated source of dashboard rows.
///
/// The backend returns fewer rows than requested exactly at end of data;
/// an empty feed is valid.
pub trait DashboardFeed {
    /// Fetches one page of rows starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects or fails the page request.
    fn fetch_page(&mut self, offset: usize, limit: usize) -> Result<Vec<PunchRow>, FeedError>;
}

/// Fetches the complete row set from a feed.
///
/// Pages are requested from offset 0 in `page_size` steps and accumulated
/// until a short page signals end of data. Any page error aborts the whole
/// fetch; a partial accumulation is never returned as success. The result
/// wholesale-replaces any prior row set at the caller.
///
/// # Errors
///
/// Returns the first error the feed reports.
pub fn fetch_all<F>(feed: &mut F, page_size: usize) -> Result<Vec<PunchRow>, FeedError>
where
    F: DashboardFeed + ?Sized,
{
    let page_size: usize = page_size.max(1);
    let mut rows: Vec<PunchRow> = Vec::new();
    let mut offset: usize = 0;

    loop {
        let page: Vec<PunchRow> = feed.fetch_page(offset, page_size)?;
        let page_len: usize = page.len();
        rows.extend(page);

        debug!(offset, page_len, total = rows.len(), "Fetched dashboard page");

        if page_len < page_size {
            break;
        }
        offset += page_size;
    }

    Ok(rows)
}
