//! Ad moderation endpoints

use std::fmt;
use std::str::FromStr;

use serde_json::json;

use super::envelope::{list_rows, list_values, single_row};
use super::request::{segment, Auth, Call};
use crate::client::AdminClient;
use crate::error::Error;
use crate::model::Row;
use crate::model::Value;

/// Filters and paging for the admin ad list.
///
/// A `status` or `category` of `"all"` (or empty) is the same as no filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl Default for AdQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
            category: None,
        }
    }
}

impl AdQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn apply(&self, mut call: Call) -> Call {
        if self.page > 0 {
            call = call.query("page", self.page);
        }
        if self.limit > 0 {
            call = call.query("limit", self.limit);
        }
        if let Some(status) = active_filter(&self.status) {
            call = call.query("status", status);
        }
        if let Some(category) = active_filter(&self.category) {
            call = call.query("category", category);
        }
        call
    }
}

fn active_filter(filter: &Option<String>) -> Option<&str> {
    filter
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

/// Moderation states an admin can put an ad into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdStatus {
    Pending,
    Active,
    Paused,
    Rejected,
}

impl AdStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AdStatus::Pending => "pending",
            AdStatus::Active => "active",
            AdStatus::Paused => "paused",
            AdStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for AdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AdStatus::Pending),
            "active" | "approved" => Ok(AdStatus::Active),
            "paused" => Ok(AdStatus::Paused),
            "rejected" => Ok(AdStatus::Rejected),
            other => Err(format!("unknown ad status '{}'", other)),
        }
    }
}

/// Body of an ad status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdStatusUpdate {
    pub status: AdStatus,
    pub rejection_reason: Option<String>,
}

impl AdStatusUpdate {
    pub fn new(status: AdStatus) -> Self {
        Self {
            status,
            rejection_reason: None,
        }
    }

    /// Approval makes the ad active.
    pub fn approve() -> Self {
        Self::new(AdStatus::Active)
    }

    pub fn pause() -> Self {
        Self::new(AdStatus::Paused)
    }

    /// Rejection with an optional reason; a blank reason is dropped.
    pub fn reject(reason: Option<&str>) -> Self {
        Self {
            status: AdStatus::Rejected,
            rejection_reason: reason
                .map(str::trim)
                .filter(|reason| !reason.is_empty())
                .map(str::to_string),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        let mut body = json!({ "status": self.status.as_str() });
        if let Some(reason) = &self.rejection_reason {
            body["rejection_reason"] = json!(reason);
        }
        body
    }
}

impl AdminClient {
    /// Lists ad categories. Entries may be plain strings or objects.
    pub async fn list_ad_categories(&self) -> Result<Vec<Value>, Error> {
        let body = self
            .send(Call::get("/api/ads/categories", "Failed to fetch ad categories").auth(Auth::Anonymous))
            .await?;
        Ok(list_values(body))
    }

    /// Lists ads for moderation.
    pub async fn list_ads(&self, query: &AdQuery) -> Result<Vec<Row>, Error> {
        let call = query.apply(Call::get("/api/ads", "Failed to fetch ads"));
        let body = self.send(call).await?;
        Ok(list_rows(body))
    }

    pub async fn get_ad(&self, id: &str) -> Result<Row, Error> {
        let path = format!("/api/ads/{}", segment(id));
        let body = self.send(Call::get(path, "Failed to fetch ad")).await?;
        Ok(single_row(body))
    }

    /// Changes an ad's status.
    ///
    /// Returns a patch for the ad: whatever the server sent back, with the
    /// new `status` applied on top.
    pub async fn set_ad_status(&self, id: &str, update: &AdStatusUpdate) -> Result<Row, Error> {
        let path = format!("/api/admin/ads/{}", segment(id));
        let body = self
            .send(Call::patch(path, "Failed to update ad status").json(update.to_json()))
            .await?;
        let mut patch = single_row(body);
        patch.insert("status", update.status.as_str());
        log::info!("Ad {} set to {}", id, update.status);
        Ok(patch)
    }

    pub async fn approve_ad(&self, id: &str) -> Result<Row, Error> {
        self.set_ad_status(id, &AdStatusUpdate::approve()).await
    }

    pub async fn reject_ad(&self, id: &str, reason: Option<&str>) -> Result<Row, Error> {
        self.set_ad_status(id, &AdStatusUpdate::reject(reason)).await
    }

    pub async fn delete_ad(&self, id: &str) -> Result<(), Error> {
        let path = format!("/api/admin/ads/{}", segment(id));
        self.send(Call::delete(path, "Failed to delete ad")).await?;
        Ok(())
    }

    /// Lists the comments on an ad.
    pub async fn list_ad_comments(&self, ad_id: &str) -> Result<Vec<Row>, Error> {
        let path = format!("/api/ads/{}/comments", segment(ad_id));
        let body = self.send(Call::get(path, "Failed to fetch ad comments")).await?;
        Ok(list_rows(body))
    }

    pub async fn delete_ad_comment(&self, comment_id: &str) -> Result<(), Error> {
        let path = format!("/api/ads/comments/{}", segment(comment_id));
        self.send(Call::delete(path, "Failed to delete comment")).await?;
        Ok(())
    }
}
