//! User endpoints

use super::envelope::{list_rows, single_row};
use super::request::{segment, Call};
use crate::client::AdminClient;
use crate::error::Error;
use crate::model::Row;

impl AdminClient {
    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<Row>, Error> {
        let body = self.send(Call::get("/api/users", "Failed to fetch users")).await?;
        Ok(list_rows(body))
    }

    /// Fetches one user.
    pub async fn get_user(&self, id: &str) -> Result<Row, Error> {
        let path = format!("/api/users/{}", segment(id));
        let body = self.send(Call::get(path, "Failed to fetch user")).await?;
        Ok(single_row(body))
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        let path = format!("/api/admin/users/{}", segment(id));
        self.send(Call::delete(path, "Failed to delete user")).await?;
        Ok(())
    }
}
