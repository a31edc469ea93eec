//! Page slicing and pagination metadata.

use std::num::IntErrorKind;

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_ENV, MAX_PAGE_SIZE, MAX_PAGE_SIZE_ENV};
use crate::env_config::env_positive_usize;

/// Bounds applied when turning untrusted `page`/`size` into a [`PageSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self { default_size: DEFAULT_PAGE_SIZE, max_size: MAX_PAGE_SIZE }
    }
}

impl PageLimits {
    /// Builds limits, forcing `1 <= default_size <= max_size`.
    pub fn new(default_size: usize, max_size: usize) -> Self {
        let max_size = max_size.max(1);
        let default_size = default_size.clamp(1, max_size);
        Self { default_size, max_size }
    }

    /// Reads `CONTACTBOOK_DEFAULT_PAGE_SIZE` / `CONTACTBOOK_MAX_PAGE_SIZE`.
    pub fn from_env() -> Self {
        let default_size = env_positive_usize(DEFAULT_PAGE_SIZE_ENV, DEFAULT_PAGE_SIZE);
        let max_size = env_positive_usize(MAX_PAGE_SIZE_ENV, MAX_PAGE_SIZE);
        if default_size > max_size {
            tracing::warn!(default_size, max_size, "default page size exceeds maximum, clamping");
        }
        Self::new(default_size, max_size)
    }
}

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: usize,
    size: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self { page: 1, size: DEFAULT_PAGE_SIZE }
    }
}

/// Positive integers too large for `usize` saturate instead of falling back.
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let parsed = match raw?.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => return None,
    };
    (parsed > 0).then_some(parsed)
}

impl PageSpec {
    /// Zero is bumped to one.
    pub const fn new(page: usize, size: usize) -> Self {
        let page = if page == 0 { 1 } else { page };
        let size = if size == 0 { 1 } else { size };
        Self { page, size }
    }

    /// Lenient parse: absent, non-numeric or non-positive values take the
    /// defaults (page 1, `limits.default_size`); sizes above `limits.max_size`
    /// are clamped. Never fails.
    pub fn parse(page: Option<&str>, size: Option<&str>, limits: &PageLimits) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let size = parse_positive(size).unwrap_or(limits.default_size).min(limits.max_size);
        Self::new(page, size)
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }
}

/// Metadata describing one page of a filtered and sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Matching records before slicing.
    pub total: usize,
    pub page: usize,
    pub size: usize,
    /// Following page, if it holds at least one record.
    pub next: Option<usize>,
    /// Preceding non-empty page, if any.
    pub prev: Option<usize>,
}

impl PageMeta {
    /// Number of non-empty pages.
    pub const fn last_page(&self) -> usize {
        self.total.div_ceil(self.size)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page { items: self.items.into_iter().map(f).collect(), meta: self.meta }
    }
}

/// Slices `records` according to `spec`.
///
/// `total` is the length of `records`, which the caller has already filtered.
/// A page past the end is empty with no `next`; its `prev` points at the last
/// non-empty page.
pub fn paginate<T>(records: Vec<T>, spec: PageSpec) -> Page<T> {
    let total = records.len();
    let PageSpec { page, size } = spec;
    let start = (page - 1).saturating_mul(size);
    let items: Vec<T> = records.into_iter().skip(start).take(size).collect();

    let last_page = total.div_ceil(size);
    let next = (page.saturating_mul(size) < total).then(|| page + 1);
    let prev = (page > 1 && total > 0).then(|| (page - 1).min(last_page));

    Page { items, meta: PageMeta { total, page, size, next, prev } }
}
