//! Single-field equality filtering.

use super::non_empty;
use crate::error::Result;
use crate::field::Queryable;

/// Keeps records whose `field` renders exactly as `value`, in input order.
///
/// Absent or empty `field`/`value` means no filtering. A non-empty `field` is
/// always resolved, so a typo fails with `UnknownField` instead of looking like
/// "no matches".
pub fn filter<'a, T: Queryable>(
    records: &'a [T],
    field: Option<&str>,
    value: Option<&str>,
) -> Result<Vec<&'a T>> {
    let field = non_empty(field).map(str::parse::<T::Field>).transpose()?;
    let value = value.filter(|v| !v.is_empty());
    let (Some(field), Some(value)) = (field, value) else {
        return Ok(records.iter().collect());
    };
    Ok(records.iter().filter(|record| record.field_text(field) == value).collect())
}
