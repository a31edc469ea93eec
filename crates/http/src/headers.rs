//! Filter criteria in, pagination metadata out: both travel as headers.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use contactbook_core::{FilterSpec, PageMeta};

use crate::api_error::ApiError;

pub const FILTER_BY: HeaderName = HeaderName::from_static("x-filter-by");
pub const FILTER_VALUE: HeaderName = HeaderName::from_static("x-filter-value");
pub const PAGE_TOTAL: HeaderName = HeaderName::from_static("x-page-total");
pub const PAGE_NEXT: HeaderName = HeaderName::from_static("x-page-next");
pub const PAGE_PREV: HeaderName = HeaderName::from_static("x-page-prev");

/// Sent for an absent next/prev page.
const NULL: HeaderValue = HeaderValue::from_static("null");

/// Header bytes decoded as UTF-8. Undecodable bytes are a client error, never
/// an absent filter.
fn header_string(headers: &HeaderMap, name: &HeaderName) -> Result<Option<String>, ApiError> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };
    std::str::from_utf8(value.as_bytes())
        .map(|s| Some(s.to_owned()))
        .map_err(|_| ApiError::BadRequest(format!("{name} header is not valid UTF-8")))
}

/// `X-Filter-By` / `X-Filter-Value`, verbatim.
pub fn filter_from_headers(headers: &HeaderMap) -> Result<FilterSpec, ApiError> {
    Ok(FilterSpec {
        field: header_string(headers, &FILTER_BY)?,
        value: header_string(headers, &FILTER_VALUE)?,
    })
}

/// `X-Page-Total`, `X-Page-Next`, `X-Page-Prev`.
pub fn page_headers(meta: &PageMeta) -> HeaderMap {
    let page_value = |page: Option<usize>| page.map_or(NULL, HeaderValue::from);
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(PAGE_TOTAL, HeaderValue::from(meta.total));
    headers.insert(PAGE_NEXT, page_value(meta.next));
    headers.insert(PAGE_PREV, page_value(meta.prev));
    headers
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test code")]
mod tests {
    use super::*;

    #[test]
    fn reads_filter_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(FILTER_BY, HeaderValue::from_static("email"));
        headers.insert(FILTER_VALUE, HeaderValue::from_static("a@x.com"));
        assert_eq!(filter_from_headers(&headers).unwrap(), FilterSpec::new("email", "a@x.com"));
        assert_eq!(filter_from_headers(&HeaderMap::new()).unwrap(), FilterSpec::default());
    }

    #[test]
    fn decodes_utf8_filter_values() {
        let mut headers = HeaderMap::new();
        headers.insert(FILTER_BY, HeaderValue::from_static("firstName"));
        headers.insert(FILTER_VALUE, HeaderValue::from_bytes("Zoë".as_bytes()).unwrap());
        assert_eq!(filter_from_headers(&headers).unwrap(), FilterSpec::new("firstName", "Zoë"));
    }

    #[test]
    fn undecodable_filter_header_is_bad_request() {
        let mut headers = HeaderMap::new();
        headers.insert(FILTER_BY, HeaderValue::from_bytes(&[0x66, 0xff, 0xfe]).unwrap());
        let err = filter_from_headers(&headers).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg.contains("x-filter-by")));
    }

    #[test]
    fn absent_neighbours_are_null() {
        let meta = PageMeta { total: 1, page: 1, size: 10, next: None, prev: None };
        let headers = page_headers(&meta);
        assert_eq!(headers[&PAGE_TOTAL], "1");
        assert_eq!(headers[&PAGE_NEXT], "null");
        assert_eq!(headers[&PAGE_PREV], "null");
    }

    #[test]
    fn present_neighbours_are_numbers() {
        let meta = PageMeta { total: 25, page: 2, size: 10, next: Some(3), prev: Some(1) };
        let headers = page_headers(&meta);
        assert_eq!(headers[&PAGE_TOTAL], "25");
        assert_eq!(headers[&PAGE_NEXT], "3");
        assert_eq!(headers[&PAGE_PREV], "1");
    }
}
