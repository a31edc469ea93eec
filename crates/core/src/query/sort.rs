//! Single-field stable ordering.

use std::cmp::Ordering;
use std::fmt;

use super::non_empty;
use crate::error::Result;
use crate::field::Queryable;

/// Sort direction. Defaults to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Accepts `asc`, `ascending`, `desc` and `descending` in any case.
    /// Anything else, including absence, is ascending.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let Some(raw) = non_empty(raw) else {
            return Self::Ascending;
        };
        match raw.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Self::Ascending,
            "desc" | "descending" => Self::Descending,
            _ => {
                tracing::debug!(direction = %raw, "unrecognized sort direction, using ascending");
                Self::Ascending
            },
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders records by `field`. Without a field the input order is returned as is.
///
/// Equal keys keep their input order in both directions: descending flips the
/// comparator, it never reverses the sequence.
pub fn sort<'a, T: Queryable>(
    mut records: Vec<&'a T>,
    field: Option<&str>,
    direction: Option<&str>,
) -> Result<Vec<&'a T>> {
    let Some(field) = non_empty(field) else {
        return Ok(records);
    };
    let field: T::Field = field.parse()?;
    let direction = SortDirection::parse_lenient(direction);
    tracing::debug!(%direction, records = records.len(), "sorting");
    records.sort_by(|a, b| direction.apply(a.compare_field(b, field)));
    Ok(records)
}
