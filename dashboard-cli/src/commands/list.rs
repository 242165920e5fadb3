use dashboard_lib::api::AdQuery;
use dashboard_lib::model::shape::shape_all;
use dashboard_lib::model::{Resource, Row};
use dashboard_lib::view::{SearchMode, SortConfig, TableState, ViewOptions};

use super::Context;
use crate::cli::ListArgs;
use crate::error::CliError;
use crate::table;

async fn fetch(ctx: &Context, resource: Resource, args: &ListArgs) -> Result<Vec<Row>, CliError> {
    let client = &ctx.client;
    let rows = match resource {
        Resource::Users => client.list_users().await?,
        Resource::Posts => client.list_posts().await?,
        Resource::Ads => {
            let mut query = AdQuery::new().limit(args.limit);
            query.status = args.status.clone();
            query.category = args.category.clone();
            client.list_ads(&query).await?
        }
        Resource::Vendors => client.list_vendors().await?,
        Resource::AdComments => {
            let ad = args
                .ad
                .as_deref()
                .ok_or_else(|| CliError::usage("listing comments needs --ad <id>"))?;
            client.list_ad_comments(ad).await?
        }
    };
    Ok(rows)
}

/// Builds the table state a `list` invocation asks for.
pub fn table_state(
    args: &ListArgs,
    resource: Resource,
    default_page_size: usize,
    columns: &[dashboard_lib::view::ColumnDescriptor],
) -> Result<TableState, CliError> {
    let options = ViewOptions {
        search_mode: if args.fuzzy {
            SearchMode::Fuzzy
        } else {
            SearchMode::Substring
        },
        ..ViewOptions::default()
    };
    let mut state = TableState::new(args.page_size.unwrap_or(default_page_size))
        .with_options(options)
        .with_empty_message(format!("No {} found", resource));

    if let Some(search) = &args.search {
        state.set_search(search.as_str());
    }
    if let Some(name) = &args.sort {
        let column = table::find_column(columns, name)
            .filter(|column| column.is_sortable())
            .ok_or_else(|| CliError::usage(format!("cannot sort {} by '{}'", resource, name)))?;
        state.set_sort(if args.desc {
            SortConfig::desc(column.key())
        } else {
            SortConfig::asc(column.key())
        });
    }
    // Search and sort reset the page, so it goes last.
    state.set_page(args.page);
    Ok(state)
}

pub async fn run(ctx: &Context, args: ListArgs) -> Result<String, CliError> {
    let resource: Resource = args.resource.parse()?;
    let columns = table::columns(resource);
    let state = table_state(&args, resource, ctx.config.page_size, &columns)?;

    let raw = fetch(ctx, resource, &args).await?;
    log::debug!("Fetched {} {}", raw.len(), resource);
    let rows = shape_all(resource, &raw);

    Ok(table::render(&state, &rows, &columns))
}
