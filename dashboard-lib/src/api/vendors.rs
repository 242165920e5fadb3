//! Vendor endpoints
//!
//! Reads and validation send the token when there is one but do not require
//! it; deletion does.

use serde_json::json;

use super::envelope::{body_row, top_level_rows};
use super::request::{segment, Auth, Call};
use crate::client::AdminClient;
use crate::error::Error;
use crate::model::Row;

impl AdminClient {
    /// Lists vendors. Only a bare top-level array is understood.
    pub async fn list_vendors(&self) -> Result<Vec<Row>, Error> {
        let body = self
            .send(Call::get("/api/vendors", "Failed to load vendors").auth(Auth::Optional))
            .await?;
        Ok(top_level_rows(body))
    }

    /// Fetches one vendor; the body is returned unwrapped.
    pub async fn get_vendor(&self, id: &str) -> Result<Row, Error> {
        let path = format!("/api/vendors/{}", segment(id));
        let body = self
            .send(Call::get(path, "Failed to load vendor").auth(Auth::Optional))
            .await?;
        Ok(body_row(body))
    }

    /// Marks a vendor as validated (or revokes it) on behalf of `admin_user_id`.
    ///
    /// Returns the patch to apply to the vendor row.
    pub async fn set_vendor_validation(
        &self,
        id: &str,
        admin_user_id: &str,
        validated: bool,
    ) -> Result<Row, Error> {
        let path = format!("/api/vendors/{}/validation", segment(id));
        self.send(
            Call::patch(path, "Failed to update validation")
                .auth(Auth::Optional)
                .json(json!({ "admin_user_id": admin_user_id, "validated": validated })),
        )
        .await?;
        log::info!("Vendor {} validated={}", id, validated);
        Ok(Row::new().set("validated", validated))
    }

    pub async fn delete_vendor(&self, id: &str) -> Result<(), Error> {
        let path = format!("/api/admin/vendors/{}", segment(id));
        self.send(Call::delete(path, "Failed to delete vendor")).await?;
        Ok(())
    }
}
