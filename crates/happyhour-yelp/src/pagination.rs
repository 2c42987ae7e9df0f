//! Offset-based pagination rules for the search endpoint.
//!
//! The service pages with `limit`/`offset` and reports a `total` match count
//! with every page. It refuses to serve anything past the first
//! [`MAX_RESULTS`] matches, whatever `total` says.

/// Hard cap on results the service will return for a single query.
pub const MAX_RESULTS: usize = 1000;

/// Why a pagination run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last page came back with no businesses.
    EmptyPage,
    /// Everything the service reported in `total` has been fetched.
    Exhausted,
    /// [`MAX_RESULTS`] businesses have been fetched.
    ResultCap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Continue,
    Stop(StopReason),
}

/// Decides whether another page should be requested.
///
/// `fetched` is the cumulative count including the page just received,
/// `page_len` the size of that page, and `total` the count the service
/// reported with it. Conditions are checked in order: empty page, exhausted,
/// result cap.
#[must_use]
pub fn next_step(fetched: usize, page_len: usize, total: u64) -> PageStep {
    if page_len == 0 {
        return PageStep::Stop(StopReason::EmptyPage);
    }
    if u64::try_from(fetched).unwrap_or(u64::MAX) >= total {
        return PageStep::Stop(StopReason::Exhausted);
    }
    if fetched >= MAX_RESULTS {
        return PageStep::Stop(StopReason::ResultCap);
    }
    PageStep::Continue
}

/// The `limit` to request at `offset` so the run never crosses
/// [`MAX_RESULTS`].
#[must_use]
pub fn request_limit(page_size: u32, offset: u32) -> u32 {
    let remaining = u32::try_from(MAX_RESULTS)
        .unwrap_or(u32::MAX)
        .saturating_sub(offset);
    page_size.min(remaining)
}
