use anyhow::Result;
use contactbook_core::{FilterSpec, ListQuery, SortSpec};

use crate::{build_service, open_storage};

pub(crate) struct ListArgs {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
    pub filter_by: Option<String>,
    pub filter_value: Option<String>,
}

/// Runs one list query against the configured store. Without `DATABASE_URL`
/// this queries the demo contacts.
pub(crate) async fn run(args: ListArgs) -> Result<()> {
    let storage = open_storage(true).await?;
    let service = build_service(storage);
    let list = ListQuery {
        filter: FilterSpec { field: args.filter_by, value: args.filter_value },
        sort: SortSpec { field: args.sort, direction: args.direction },
        page: args.page,
        size: args.size,
    };
    let page = service.list_contacts(&list).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
