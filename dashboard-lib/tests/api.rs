//! Integration tests driving `AdminClient` against an in-process HTTP server.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value as Json};
use tokio::net::TcpListener;

use dashboard_lib::api::{AdQuery, AdStatusUpdate, NewAdmin};
use dashboard_lib::auth::{MemorySessionStore, Session, SessionHandle};
use dashboard_lib::error::{ApiError, AuthError, Error};
use dashboard_lib::model::{shape, Resource, Row};
use dashboard_lib::store::ResourceList;
use dashboard_lib::view::{ColumnDescriptor, SortConfig, TableState};
use dashboard_lib::AdminClient;

// =============================================================================
// Mock server
// =============================================================================

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    uri: String,
    authorization: Option<String>,
    body: Json,
}

type Routes = Arc<HashMap<(String, String), (u16, String)>>;
type Log = Arc<Mutex<Vec<Recorded>>>;

struct MockApi {
    addr: SocketAddr,
    log: Log,
}

impl MockApi {
    async fn start(routes: &[(&str, &str, u16, &str)]) -> Self {
        let routes: Routes = Arc::new(
            routes
                .iter()
                .map(|(method, path, status, body)| {
                    ((method.to_string(), path.to_string()), (*status, body.to_string()))
                })
                .collect(),
        );
        let log: Log = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server_log = log.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = server_log.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req| handle(req, routes.clone(), log.clone()));
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, log }
    }

    fn client(&self, session: SessionHandle) -> AdminClient {
        AdminClient::builder()
            .url(format!("http://{}", self.addr))
            .session(session)
            .build()
            .unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    fn last(&self) -> Recorded {
        self.requests().pop().expect("no request was made")
    }
}

async fn handle(
    req: Request<Incoming>,
    routes: Routes,
    log: Log,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let path = req.uri().path().to_string();
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = req
        .into_body()
        .collect()
        .await
        .map(|body| body.to_bytes())
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(Json::Null);

    log.lock().unwrap().push(Recorded {
        method: method.clone(),
        uri,
        authorization,
        body,
    });

    let (status, text) = routes
        .get(&(method, path))
        .cloned()
        .unwrap_or((404, r#"{"message":"Route not mocked"}"#.to_string()));

    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(text)))
        .unwrap())
}

async fn logged_in() -> SessionHandle {
    let session = Session::new("tok-1", Row::new().set("_id", "admin-1"));
    SessionHandle::init(MemorySessionStore::with_session(session)).await
}

fn assert_http(err: Error, expected_status: u16, expected_message: &str) {
    match err {
        Error::Api(ApiError::Http { status, message }) => {
            assert_eq!(status, expected_status);
            assert_eq!(message, expected_message);
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_login_stores_session_and_authorizes_later_calls() {
    let api = MockApi::start(&[
        (
            "POST",
            "/api/auth/login",
            200,
            r#"{"data":{"token":"jwt-9","user":{"_id":"admin-7","email":"a@b.c"}}}"#,
        ),
        ("GET", "/api/users", 200, r#"{"data":[{"_id":"u1"},{"_id":"u2"}]}"#),
    ])
    .await;
    let session = SessionHandle::in_memory();
    let client = api.client(session.clone());

    let logged = client.login("a@b.c", "pw").await.unwrap();
    assert_eq!(logged.token, "jwt-9");
    assert_eq!(logged.user_id().as_deref(), Some("admin-7"));
    assert_eq!(session.token().await.as_deref(), Some("jwt-9"));

    let login = api.last();
    assert_eq!(login.authorization, None);
    assert_eq!(login.body, json!({"email": "a@b.c", "password": "pw"}));

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(api.last().authorization.as_deref(), Some("Bearer jwt-9"));
}

#[tokio::test]
async fn test_login_failure_uses_server_message() {
    let api = MockApi::start(&[(
        "POST",
        "/api/auth/login",
        401,
        r#"{"message":"Invalid credentials"}"#,
    )])
    .await;
    let session = SessionHandle::in_memory();
    let client = api.client(session.clone());

    let err = client.login("a@b.c", "bad").await.unwrap_err();
    assert_http(err, 401, "Invalid credentials");
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let api = MockApi::start(&[("POST", "/api/auth/login", 200, r#"{"ok":true}"#)]).await;
    let session = SessionHandle::in_memory();
    let client = api.client(session.clone());

    let err = client.login("a@b.c", "pw").await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::MissingToken)));
    assert!(!session.is_authenticated().await);
}

#[tokio::test]
async fn test_register_admin_keeps_current_session() {
    let api = MockApi::start(&[(
        "POST",
        "/api/auth/register",
        201,
        r#"{"token":"new-admin-token"}"#,
    )])
    .await;
    let session = logged_in().await;
    let client = api.client(session.clone());

    let admin = NewAdmin {
        username: "ops".into(),
        full_name: "Ops Team".into(),
        email: "ops@example.com".into(),
        password: "pw".into(),
        phone: None,
    };
    let user = client.register_admin(&admin).await.unwrap();
    assert_eq!(user.get_string("role").unwrap(), Some("admin"));
    assert_eq!(user.get_string("username").unwrap(), Some("ops"));

    let request = api.last();
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-1"));
    assert_eq!(request.body["role"], "admin");
    assert_eq!(session.token().await.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let api = MockApi::start(&[]).await;
    let session = logged_in().await;
    let client = api.client(session.clone());

    client.logout().await.unwrap();
    assert!(!session.is_authenticated().await);

    let err = client.list_posts().await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::NoToken)));
    assert!(api.requests().is_empty());
}

// =============================================================================
// Resources
// =============================================================================

#[tokio::test]
async fn test_error_default_message_for_non_json_body() {
    let api = MockApi::start(&[("GET", "/api/posts/feed", 502, "<html>Bad gateway</html>")]).await;
    let client = api.client(logged_in().await);

    let err = client.list_posts().await.unwrap_err();
    assert_http(err, 502, "Failed to fetch posts");
}

#[tokio::test]
async fn test_non_json_success_body_is_empty() {
    let api = MockApi::start(&[("DELETE", "/api/admin/users/u1", 204, "")]).await;
    let client = api.client(logged_in().await);

    client.delete_user("u1").await.unwrap();
    let request = api.last();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.uri, "/api/admin/users/u1");
}

#[tokio::test]
async fn test_get_user_unwraps_data() {
    let api = MockApi::start(&[(
        "GET",
        "/api/users/u%201",
        200,
        r#"{"data":{"_id":"u 1","full_name":"Amy Lee"}}"#,
    )])
    .await;
    let client = api.client(logged_in().await);

    let user = client.get_user("u 1").await.unwrap();
    assert_eq!(user.get_string("full_name").unwrap(), Some("Amy Lee"));
    assert_eq!(api.last().uri, "/api/users/u%201");
}

#[tokio::test]
async fn test_list_ads_query_string() {
    let api = MockApi::start(&[(
        "GET",
        "/api/ads",
        200,
        r#"{"results":[{"_id":"a1","title":"Sale"}]}"#,
    )])
    .await;
    let client = api.client(logged_in().await);

    let query = AdQuery::new().page(2).limit(5).status("pending").category("all");
    let ads = client.list_ads(&query).await.unwrap();
    assert_eq!(ads.len(), 1);
    assert_eq!(api.last().uri, "/api/ads?page=2&limit=5&status=pending");
}

#[tokio::test]
async fn test_ad_categories_are_anonymous() {
    let api = MockApi::start(&[(
        "GET",
        "/api/ads/categories",
        200,
        r#"["Fashion","Food"]"#,
    )])
    .await;
    let client = api.client(SessionHandle::in_memory());

    let categories = client.list_ad_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(api.last().authorization, None);
}

#[tokio::test]
async fn test_reject_ad_and_reconcile() {
    let api = MockApi::start(&[
        ("GET", "/api/ads", 200, r#"[{"_id":"a1","status":"pending"},{"_id":"a2","status":"pending"}]"#),
        ("PATCH", "/api/admin/ads/a1", 200, r#"{"data":{"_id":"a1","reviewed_by":"admin-1"}}"#),
    ])
    .await;
    let client = api.client(logged_in().await);

    let mut ads = ResourceList::new(Resource::Ads);
    ads.begin_load();
    ads.finish_load(client.list_ads(&AdQuery::default()).await);

    let patch = client.reject_ad("a1", Some("Misleading")).await.unwrap();
    assert_eq!(
        api.last().body,
        json!({"status": "rejected", "rejection_reason": "Misleading"})
    );
    assert_eq!(patch.get_string("status").unwrap(), Some("rejected"));

    assert_eq!(ads.merge("a1", &patch), 1);
    assert_eq!(ads.items()[0].get_string("status").unwrap(), Some("rejected"));
    assert_eq!(ads.items()[0].get_string("reviewed_by").unwrap(), Some("admin-1"));
    assert_eq!(ads.items()[1].get_string("status").unwrap(), Some("pending"));
}

#[tokio::test]
async fn test_approve_sends_active() {
    let api = MockApi::start(&[("PATCH", "/api/admin/ads/a9", 200, "{}")]).await;
    let client = api.client(logged_in().await);

    client
        .set_ad_status("a9", &AdStatusUpdate::approve())
        .await
        .unwrap();
    assert_eq!(api.last().body, json!({"status": "active"}));
}

#[tokio::test]
async fn test_ad_comments() {
    let api = MockApi::start(&[
        ("GET", "/api/ads/a1/comments", 200, r#"{"items":[{"comment_id":"c1","text":"hi"}]}"#),
        ("DELETE", "/api/ads/comments/c1", 200, r#"{"success":true}"#),
    ])
    .await;
    let client = api.client(logged_in().await);

    let comments = client.list_ad_comments("a1").await.unwrap();
    assert_eq!(Resource::AdComments.row_id(&comments[0]).as_deref(), Some("c1"));
    client.delete_ad_comment("c1").await.unwrap();
}

#[tokio::test]
async fn test_vendor_reads_without_token() {
    let api = MockApi::start(&[
        ("GET", "/api/vendors", 200, r#"[{"_id":"v1","business_name":"Acme","validated":false}]"#),
        ("GET", "/api/vendors/v1", 200, r#"{"data":{"nested":true},"_id":"v1"}"#),
        ("PATCH", "/api/vendors/v1/validation", 200, "{}"),
    ])
    .await;
    let client = api.client(SessionHandle::in_memory());

    let vendors = client.list_vendors().await.unwrap();
    assert_eq!(vendors.len(), 1);
    assert_eq!(api.last().authorization, None);

    let vendor = client.get_vendor("v1").await.unwrap();
    assert!(vendor.contains("data"));

    let patch = client.set_vendor_validation("v1", "admin-1", true).await.unwrap();
    assert_eq!(api.last().body, json!({"admin_user_id": "admin-1", "validated": true}));
    assert_eq!(patch.get_bool("validated").unwrap(), Some(true));
}

#[tokio::test]
async fn test_vendor_list_ignores_envelopes() {
    let api = MockApi::start(&[("GET", "/api/vendors", 200, r#"{"data":[{"_id":"v1"}]}"#)]).await;
    let client = api.client(logged_in().await);

    assert!(client.list_vendors().await.unwrap().is_empty());
    assert_eq!(api.last().authorization.as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_delete_vendor_requires_token() {
    let api = MockApi::start(&[]).await;
    let client = api.client(SessionHandle::in_memory());

    let err = client.delete_vendor("v1").await.unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::NoToken)));
    assert!(api.requests().is_empty());
}

// =============================================================================
// End to end: fetch, shape, view
// =============================================================================

#[tokio::test]
async fn test_users_table_end_to_end() {
    let api = MockApi::start(&[(
        "GET",
        "/api/users",
        200,
        r#"[
            {"_id":"u1","full_name":"carol","email":"carol@x.io","wallet":{"balance":5}},
            {"user":{"_id":"u2","username":"amy","email":"amy@x.io"}},
            {"_id":"u3","first_name":"Bob","last_name":"Stone","email":"bob@x.io","coins":20}
        ]"#,
    )])
    .await;
    let client = api.client(logged_in().await);

    let rows = shape::shape_all(Resource::Users, &client.list_users().await.unwrap());
    let columns: Vec<ColumnDescriptor> = vec![
        ColumnDescriptor::new("name", "User"),
        ColumnDescriptor::new("email", "Email"),
        ColumnDescriptor::new("coins", "Coins"),
    ];

    let mut state = TableState::new(2).with_sort(SortConfig::asc("name"));
    let view = state.view(&rows, &columns);
    let names: Vec<String> = view
        .rows()
        .map(|row| columns[0].cell(row).to_string())
        .collect();
    assert_eq!(names, ["amy", "Bob Stone"]);
    assert_eq!(view.total_pages, 2);

    state.set_search("x.io");
    state.toggle_sort(&columns[2]);
    let view = state.view(&rows, &columns);
    let coins: Vec<String> = view
        .rows()
        .map(|row| columns[2].cell(row).to_string())
        .collect();
    assert_eq!(coins, ["0", "5"]);
}
