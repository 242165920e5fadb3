//! Read-only checks against a running admin API.
//!
//! These tests need a real admin account and are ignored by default.
//! To run them, create a `.env` file in the dashboard-lib directory with:
//!
//! ```env
//! DASHBOARD_URL=https://bsmart.asynk.store
//! DASHBOARD_EMAIL=admin@example.com
//! DASHBOARD_PASSWORD=your-password
//! ```
//!
//! Then run: `cargo test -p dashboard-lib --test live -- --ignored`

use std::env;

use dashboard_lib::api::AdQuery;
use dashboard_lib::auth::SessionHandle;
use dashboard_lib::model::shape::shape_all;
use dashboard_lib::model::Resource;
use dashboard_lib::view::{ColumnDescriptor, TableState};
use dashboard_lib::AdminClient;

fn load_env() -> Option<(String, String, String)> {
    let _ = dotenvy::dotenv();

    let url = env::var("DASHBOARD_URL").ok()?;
    let email = env::var("DASHBOARD_EMAIL").ok()?;
    let password = env::var("DASHBOARD_PASSWORD").ok()?;

    Some((url, email, password))
}

async fn logged_in() -> AdminClient {
    let (url, email, password) =
        load_env().expect("Missing required environment variables. See module docs.");

    let client = AdminClient::builder()
        .url(url)
        .session(SessionHandle::in_memory())
        .build()
        .expect("Failed to build client");

    client
        .login(&email, &password)
        .await
        .expect("Login failed");
    client
}

// =============================================================================
// Account
// =============================================================================

mod account {
    use super::*;

    #[tokio::test]
    #[ignore = "requires real credentials in .env file"]
    async fn test_login_and_logout() {
        let client = logged_in().await;

        let session = client.session().current().await.expect("No session after login");
        assert!(!session.token.is_empty(), "Token should not be empty");
        println!("Logged in as user {:?}", session.user_id());

        client.logout().await.expect("Logout failed");
        assert!(!client.session().is_authenticated().await);
    }
}

// =============================================================================
// Listings
// =============================================================================

mod listings {
    use super::*;

    #[tokio::test]
    #[ignore = "requires real credentials in .env file"]
    async fn test_users_table() {
        let client = logged_in().await;

        let users = client.list_users().await.expect("Failed to fetch users");
        let rows = shape_all(Resource::Users, &users);
        let columns = vec![
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::new("email", "Email"),
        ];
        let state = TableState::default();
        let view = state.view(&rows, &columns);

        assert_eq!(view.filtered_count, rows.len());
        assert!(view.len() <= state.page_size());
        println!("{} users over {} pages", rows.len(), view.total_pages);
    }

    #[tokio::test]
    #[ignore = "requires real credentials in .env file"]
    async fn test_pending_ads() {
        let client = logged_in().await;

        let ads = client
            .list_ads(&AdQuery::new().status("pending").limit(5))
            .await
            .expect("Failed to fetch ads");

        assert!(ads.len() <= 5, "Server ignored the limit");
        for ad in shape_all(Resource::Ads, &ads) {
            println!("{:?}", ad.get("title"));
        }
    }

    #[tokio::test]
    #[ignore = "requires real credentials in .env file"]
    async fn test_vendors_and_categories() {
        let client = logged_in().await;

        let vendors = client.list_vendors().await.expect("Failed to load vendors");
        let categories = client
            .list_ad_categories()
            .await
            .expect("Failed to fetch ad categories");

        println!("{} vendors, {} categories", vendors.len(), categories.len());
    }
}
