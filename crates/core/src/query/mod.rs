//! List query pipeline: filter, then sort, then paginate.
//!
//! Every stage is a pure function over a borrowed snapshot. Only the records
//! that land on the returned page are cloned.

mod filter;
mod pager;
mod sort;

pub use filter::filter;
pub use pager::{Page, PageLimits, PageMeta, PageSpec, paginate};
pub use sort::{SortDirection, sort};

use crate::error::Result;
use crate::field::Queryable;

/// Optional single-field equality predicate, straight from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: Option<String>,
    pub value: Option<String>,
}

impl FilterSpec {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self { field: Some(field.into()), value: Some(value.into()) }
    }
}

/// Optional single-field ordering, straight from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: Option<String>,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: Option<&str>) -> Self {
        Self { field: Some(field.into()), direction: direction.map(ToOwned::to_owned) }
    }
}

/// Everything a list request carries, still unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListQuery {
    pub fn page_spec(&self, limits: &PageLimits) -> PageSpec {
        PageSpec::parse(self.page.as_deref(), self.size.as_deref(), limits)
    }
}

/// Runs the pipeline in its fixed order. Any stage error is returned as is;
/// there are no partial results.
pub fn query<T: Queryable + Clone>(
    records: &[T],
    filter_spec: &FilterSpec,
    sort_spec: &SortSpec,
    page_spec: PageSpec,
) -> Result<Page<T>> {
    let filtered = filter(records, filter_spec.field.as_deref(), filter_spec.value.as_deref())?;
    let sorted = sort(filtered, sort_spec.field.as_deref(), sort_spec.direction.as_deref())?;
    Ok(paginate(sorted, page_spec).map(T::clone))
}

/// Treats empty and whitespace-only names as absent.
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Days, NaiveDate};

    use crate::contact::Contact;

    /// `n` contacts with ids `1..=n`.
    ///
    /// First names alternate `Odd`/`Even` by id parity, last names run in
    /// reverse id order with mixed case, emails are `user{id}@example.com`.
    pub(crate) fn contacts(n: i64) -> Vec<Contact> {
        let base = NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date");
        (1..=n)
            .map(|id| {
                let rank = n + 1 - id;
                let last_name = if id % 3 == 0 {
                    format!("SURNAME{rank:03}")
                } else {
                    format!("Surname{rank:03}")
                };
                Contact {
                    id,
                    first_name: if id % 2 == 0 { "Even" } else { "Odd" }.to_owned(),
                    last_name,
                    email: format!("user{id}@example.com"),
                    phone: format!("555-{id:04}"),
                    birthday: base
                        .checked_add_days(Days::new(u64::try_from(id * 37).unwrap_or(0)))
                        .expect("date in range"),
                }
            })
            .collect()
    }

    pub(crate) fn ids(records: &[&Contact]) -> Vec<i64> {
        records.iter().map(|c| c.id).collect()
    }
}
