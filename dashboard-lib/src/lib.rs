//! Admin dashboard client library
//!
//! Data layer for the platform's admin dashboard: a typed client for the admin
//! REST API, a dynamic row model with display shaping, and the table view
//! pipeline (search, sort, paginate) that hosts render from.

pub mod api;
pub mod auth;
pub mod error;
pub mod format;
pub mod model;
pub mod store;
pub mod view;

mod client;

pub use client::*;
