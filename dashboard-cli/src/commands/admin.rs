use dashboard_lib::api::NewAdmin;
use dashboard_lib::model::shape::user_row;

use super::Context;
use crate::cli::AdminCommand;
use crate::error::CliError;

pub async fn run(ctx: &Context, command: AdminCommand) -> Result<String, CliError> {
    match command {
        AdminCommand::Create {
            username,
            full_name,
            email,
            password,
            phone,
        } => {
            let admin = NewAdmin {
                username,
                full_name,
                email,
                password,
                phone: phone.filter(|phone| !phone.trim().is_empty()),
            };
            let user = user_row(&ctx.client.register_admin(&admin).await?);
            let id = user.get("id").map(ToString::to_string).unwrap_or_default();
            Ok(if id.is_empty() {
                format!("Created admin {}", admin.email)
            } else {
                format!("Created admin {} ({})", admin.email, id)
            })
        }
    }
}
