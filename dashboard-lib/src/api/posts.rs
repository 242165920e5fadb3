//! Post and reel endpoints

use super::envelope::{list_rows, single_row};
use super::request::{segment, Call};
use crate::client::AdminClient;
use crate::error::Error;
use crate::model::Row;

impl AdminClient {
    /// Lists the post feed, reels included.
    pub async fn list_posts(&self) -> Result<Vec<Row>, Error> {
        let body = self.send(Call::get("/api/posts/feed", "Failed to fetch posts")).await?;
        Ok(list_rows(body))
    }

    pub async fn get_post(&self, id: &str) -> Result<Row, Error> {
        let path = format!("/api/posts/{}", segment(id));
        let body = self.send(Call::get(path, "Failed to fetch post")).await?;
        Ok(single_row(body))
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), Error> {
        let path = format!("/api/admin/posts/{}", segment(id));
        self.send(Call::delete(path, "Failed to delete post")).await?;
        Ok(())
    }
}
