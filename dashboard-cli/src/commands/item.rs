use dashboard_lib::model::Resource;

use super::Context;
use crate::error::CliError;
use crate::table;

pub async fn show(ctx: &Context, resource: &str, id: &str) -> Result<String, CliError> {
    let client = &ctx.client;
    let row = match resource.parse::<Resource>()? {
        Resource::Users => client.get_user(id).await?,
        Resource::Posts => client.get_post(id).await?,
        Resource::Ads => client.get_ad(id).await?,
        Resource::Vendors => client.get_vendor(id).await?,
        Resource::AdComments => {
            return Err(CliError::usage(
                "comments cannot be shown one at a time; use `list comments --ad <id>`",
            ));
        }
    };
    if row.is_empty() {
        return Ok(format!("{} {} has no fields", resource, id));
    }
    Ok(table::render_item(&row))
}

pub async fn delete(ctx: &Context, resource: &str, id: &str) -> Result<String, CliError> {
    let client = &ctx.client;
    let resource: Resource = resource.parse()?;
    match resource {
        Resource::Users => client.delete_user(id).await?,
        Resource::Posts => client.delete_post(id).await?,
        Resource::Ads => client.delete_ad(id).await?,
        Resource::Vendors => client.delete_vendor(id).await?,
        Resource::AdComments => client.delete_ad_comment(id).await?,
    }
    Ok(format!("Deleted {} {}", resource, id))
}
