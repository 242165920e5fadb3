//! Ad moderation and vendor validation.

use dashboard_lib::api::AdStatusUpdate;
use dashboard_lib::error::AuthError;

use super::Context;
use crate::cli::{AdCommand, VendorCommand};
use crate::error::CliError;

pub async fn ad(ctx: &Context, command: AdCommand) -> Result<String, CliError> {
    let (id, update) = match command {
        AdCommand::Approve { id } => (id, AdStatusUpdate::approve()),
        AdCommand::Pause { id } => (id, AdStatusUpdate::pause()),
        AdCommand::Reject { id, reason } => (id, AdStatusUpdate::reject(reason.as_deref())),
    };
    let patch = ctx.client.set_ad_status(&id, &update).await?;
    let status = patch
        .get("status")
        .map(ToString::to_string)
        .unwrap_or_else(|| update.status.to_string());
    Ok(match &update.rejection_reason {
        Some(reason) => format!("Ad {} is now {} ({})", id, status, reason),
        None => format!("Ad {} is now {}", id, status),
    })
}

pub async fn vendor(ctx: &Context, command: VendorCommand) -> Result<String, CliError> {
    match command {
        VendorCommand::Validate { id, revoke } => {
            let admin_id = ctx
                .client
                .session()
                .current()
                .await
                .and_then(|session| session.user_id())
                .ok_or(AuthError::NoToken)?;
            ctx.client
                .set_vendor_validation(&id, &admin_id, !revoke)
                .await?;
            Ok(if revoke {
                format!("Vendor {} validation revoked", id)
            } else {
                format!("Vendor {} validated", id)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use dashboard_lib::error::Error;

    use super::*;
    use crate::commands::test_context;

    #[tokio::test]
    async fn test_validation_needs_an_admin_id() {
        let ctx = test_context("validate").await;
        let command = VendorCommand::Validate {
            id: "v1".into(),
            revoke: false,
        };
        assert!(matches!(
            vendor(&ctx, command).await,
            Err(CliError::Api(Error::Auth(AuthError::NoToken)))
        ));
    }
}
