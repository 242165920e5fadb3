//! Client-side list state for one resource.
//!
//! Holds what the host last fetched and reconciles it after mutations, so a
//! delete or status change shows up without refetching. It never talks to
//! the API itself.

use crate::error::Error;
use crate::model::Resource;
use crate::model::Row;

/// Where a load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    /// The load failed with this message.
    Failed(String),
}

/// Rows of one resource plus the item currently open in a detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList {
    resource: Resource,
    items: Vec<Row>,
    status: LoadStatus,
    current: Option<Row>,
}

impl ResourceList {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            items: Vec::new(),
            status: LoadStatus::Idle,
            current: None,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Raw rows, in the order the API returned them.
    pub fn items(&self) -> &[Row] {
        &self.items
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn current(&self) -> Option<&Row> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Marks a load as started. Existing items stay visible.
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Applies the outcome of a load.
    ///
    /// On failure the previous items are kept and the error message recorded.
    pub fn finish_load(&mut self, result: Result<Vec<Row>, Error>) {
        match result {
            Ok(items) => {
                log::debug!("Loaded {} {}", items.len(), self.resource);
                self.items = items;
                self.status = LoadStatus::Succeeded;
            }
            Err(e) => {
                log::warn!("Loading {} failed: {}", self.resource, e);
                self.status = LoadStatus::Failed(failure_message(&e));
            }
        }
    }

    /// Sets the item open in a detail view.
    pub fn set_current(&mut self, row: Option<Row>) {
        self.current = row;
    }

    /// Drops every item whose id is `id`, and the current item if it matches.
    ///
    /// Returns the number of list items removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        let resource = self.resource;
        self.items
            .retain(|row| resource.row_id(row).as_deref() != Some(id));
        if self.current_matches(id) {
            self.current = None;
        }
        before - self.items.len()
    }

    /// Shallow-merges `patch` into every item whose id is `id`, and into the
    /// current item if it matches.
    ///
    /// Returns the number of list items updated.
    pub fn merge(&mut self, id: &str, patch: &Row) -> usize {
        let resource = self.resource;
        let mut updated = 0;
        for row in self
            .items
            .iter_mut()
            .filter(|row| resource.row_id(row).as_deref() == Some(id))
        {
            row.merge(patch);
            updated += 1;
        }
        if self.current_matches(id) {
            if let Some(current) = self.current.as_mut() {
                current.merge(patch);
            }
        }
        updated
    }

    fn current_matches(&self, id: &str) -> bool {
        self.current
            .as_ref()
            .and_then(|row| self.resource.row_id(row))
            .as_deref()
            == Some(id)
    }
}

fn failure_message(error: &Error) -> String {
    match error {
        Error::Api(api) => api.message().map(str::to_string).unwrap_or_else(|| api.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, AuthError};

    fn ads() -> ResourceList {
        let mut list = ResourceList::new(Resource::Ads);
        list.begin_load();
        list.finish_load(Ok(vec![
            Row::new().set("_id", "a1").set("status", "pending"),
            Row::new().set("ad_id", "a2").set("status", "pending"),
        ]));
        list
    }

    #[test]
    fn test_load_cycle() {
        let mut list = ads();
        assert_eq!(list.status(), &LoadStatus::Succeeded);
        assert_eq!(list.items().len(), 2);

        list.begin_load();
        assert!(list.is_loading());
        list.finish_load(Err(ApiError::http(500, "Failed to fetch ads").into()));
        assert_eq!(list.status(), &LoadStatus::Failed("Failed to fetch ads".into()));
        assert_eq!(list.items().len(), 2);

        list.finish_load(Err(AuthError::NoToken.into()));
        assert_eq!(list.status(), &LoadStatus::Failed("No token".into()));
    }

    #[test]
    fn test_remove_clears_current() {
        let mut list = ads();
        list.set_current(Some(Row::new().set("ad_id", "a2")));
        assert_eq!(list.remove("a2"), 1);
        assert!(list.current().is_none());
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.remove("missing"), 0);
    }

    #[test]
    fn test_merge_patch() {
        let mut list = ads();
        list.set_current(Some(Row::new().set("_id", "a1").set("title", "Sale")));
        let patch = Row::new().set("status", "active");
        assert_eq!(list.merge("a1", &patch), 1);
        assert_eq!(list.items()[0].get_string("status").unwrap(), Some("active"));
        assert_eq!(list.items()[1].get_string("status").unwrap(), Some("pending"));

        let current = list.current().unwrap();
        assert_eq!(current.get_string("status").unwrap(), Some("active"));
        assert_eq!(current.get_string("title").unwrap(), Some("Sale"));
    }
}
