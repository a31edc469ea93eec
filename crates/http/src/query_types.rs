//! Request/query types (Deserialize)

use contactbook_core::{FilterSpec, ListQuery, SortSpec};
use serde::Deserialize;

/// Query string of `GET /contacts`.
///
/// Everything stays a string: a non-numeric `page` or `size` falls back to
/// the default instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListParams {
    pub fn into_list_query(self, filter: FilterSpec) -> ListQuery {
        ListQuery {
            filter,
            sort: SortSpec { field: self.sort, direction: self.direction },
            page: self.page,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_params_optional() {
        let params: ListParams = serde_json::from_value(json!({})).expect("valid ListParams");
        let list = params.into_list_query(FilterSpec::default());
        assert_eq!(list, ListQuery::default());
    }

    #[test]
    fn garbage_page_is_kept_for_lenient_parsing() {
        let params: ListParams =
            serde_json::from_value(json!({"sort": "lastName", "page": "abc", "size": "5"}))
                .expect("valid ListParams");
        let list = params.into_list_query(FilterSpec::new("email", "a@x.com"));
        assert_eq!(list.sort.field.as_deref(), Some("lastName"));
        assert_eq!(list.page.as_deref(), Some("abc"));
        assert_eq!(list.filter.value.as_deref(), Some("a@x.com"));
    }
}
