use dashboard_lib::model::shape::user_row;

use super::Context;
use crate::error::CliError;

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<String, CliError> {
    let session = ctx.client.login(email, password).await?;
    let user = user_row(&session.user);
    Ok(format!(
        "Logged in as {}",
        user.get("name").map(ToString::to_string).unwrap_or_default()
    ))
}

pub async fn logout(ctx: &Context) -> Result<String, CliError> {
    ctx.client.logout().await?;
    Ok("Logged out".to_string())
}

pub async fn whoami(ctx: &Context) -> Result<String, CliError> {
    let Some(session) = ctx.client.session().current().await else {
        return Ok("Not logged in".to_string());
    };
    let user = user_row(&session.user);
    let field = |key: &str| user.get(key).map(ToString::to_string).unwrap_or_default();
    Ok(format!(
        "{} <{}>\nrole: {}\nid:   {}\napi:  {}",
        field("name"),
        field("email"),
        field("role"),
        session.user_id().unwrap_or_default(),
        ctx.client.base_url()
    ))
}
