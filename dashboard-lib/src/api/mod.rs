//! Admin REST API operations
//!
//! Each resource module adds its endpoints as methods on
//! [`AdminClient`](crate::AdminClient). Endpoints return raw rows as the API
//! sent them; use [`model::shape`](crate::model::shape) to flatten them for
//! display.

mod account;
mod ads;
pub mod envelope;
mod posts;
mod request;
mod users;
mod vendors;

pub use account::*;
pub use ads::*;
