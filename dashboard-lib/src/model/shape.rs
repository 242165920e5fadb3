//! Projection of raw API rows into flat display rows.
//!
//! The API returns deeply nested, inconsistently named payloads. Each function
//! here produces a flat [`Row`] with stable keys that table columns can point
//! at. Missing timestamps stay `Null` so they sort last.

use super::Fallback;
use super::Resource;
use super::Row;
use super::Value;

/// Shapes a raw row for the given resource.
pub fn shape(resource: Resource, raw: &Row) -> Row {
    match resource {
        Resource::Users => user_row(raw),
        Resource::Posts => post_row(raw),
        Resource::Ads => ad_row(raw),
        Resource::Vendors => vendor_row(raw),
        Resource::AdComments => comment_row(raw),
    }
}

/// Shapes every raw row of a list.
pub fn shape_all(resource: Resource, raw: &[Row]) -> Vec<Row> {
    raw.iter().map(|row| shape(resource, row)).collect()
}

fn string_or(chain: Fallback, row: &Row, default: &str) -> Value {
    Value::String(chain.resolve_string(row).unwrap_or_else(|| default.to_string()))
}

fn created_at(row: &Row) -> Value {
    Fallback::truthy(["createdAt", "created_at"]).resolve_or(row, Value::Null)
}

fn first_media(row: &Row) -> Option<&Row> {
    row.get("media")?.as_list()?.first()?.as_row()
}

/// `id, name, email, avatar, role, status, coins, joined_date`
pub fn user_row(raw: &Row) -> Row {
    let base = raw.get("user").and_then(Value::as_row).unwrap_or(raw);

    let first_last = match (
        Fallback::truthy(["first_name"]).resolve_string(base),
        Fallback::truthy(["last_name"]).resolve_string(base),
    ) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        _ => None,
    };
    let name = Fallback::truthy(["full_name", "fullName"])
        .resolve_string(base)
        .or(first_last)
        .or_else(|| Fallback::truthy(["name", "username", "email"]).resolve_string(base))
        .unwrap_or_else(|| "Unknown".to_string());

    let status = match Fallback::truthy(["status"]).resolve_string(base) {
        Some(status) => status,
        None if base.get("active") == Some(&Value::Bool(false)) => "suspended".to_string(),
        None => "active".to_string(),
    };

    // A wallet balance only counts when it is an actual number.
    let coins = base
        .get_path("wallet.balance")
        .filter(|v| v.as_f64().is_some() && v.is_truthy())
        .cloned()
        .unwrap_or_else(|| Fallback::truthy(["coins", "balance"]).resolve_or(base, 0));

    Row::new()
        .set("id", string_or(Fallback::truthy(["id", "_id", "uuid"]), base, ""))
        .set("name", name)
        .set("email", string_or(Fallback::truthy(["email"]), base, ""))
        .set(
            "avatar",
            Fallback::truthy(["avatar_url", "avatar", "image", "photo"]).resolve_or(base, Value::Null),
        )
        .set("role", string_or(Fallback::truthy(["role", "type"]), base, "member"))
        .set("status", status)
        .set("coins", coins)
        .set("joined_date", created_at(base))
}

/// `id, owner, type, likes, comments, created_at`
pub fn post_row(raw: &Row) -> Row {
    let is_video = first_media(raw)
        .and_then(|media| media.get("type"))
        .and_then(Value::as_str)
        == Some("video");

    let comments = match raw.get("comments") {
        Some(Value::List(items)) => Value::Long(items.len() as i64),
        _ => Fallback::non_null(["commentsCount"]).resolve_or(raw, 0),
    };

    Row::new()
        .set(
            "id",
            string_or(Resource::Posts.id_fallback(), raw, ""),
        )
        .set(
            "owner",
            string_or(
                Fallback::truthy(["user_id.full_name", "user_id.username", "username"]),
                raw,
                "Unknown",
            ),
        )
        .set("type", if is_video { "reel" } else { "post" })
        .set(
            "likes",
            Fallback::non_null(["likes_count", "likes", "likesCount"]).resolve_or(raw, 0),
        )
        .set("comments", comments)
        .set("created_at", created_at(raw))
}

/// `id, title, creator, category, type, coins_reward, views, status, created_at`
pub fn ad_row(raw: &Row) -> Row {
    let category = match Fallback::truthy(["category", "targeting_rules.category_label"]).resolve(raw) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Row(obj)) => Fallback::truthy(["label", "name", "title"])
            .resolve_string(obj)
            .unwrap_or_default(),
        _ => String::new(),
    };

    let media_type = first_media(raw)
        .and_then(|media| Fallback::truthy(["media_type", "type", "mime_type"]).resolve_string(media))
        .unwrap_or_default();
    let is_video = media_type.to_lowercase().contains("video");

    Row::new()
        .set("id", string_or(Resource::Ads.id_fallback(), raw, ""))
        .set(
            "title",
            string_or(Fallback::truthy(["title", "headline", "caption"]), raw, "Untitled ad"),
        )
        .set(
            "creator",
            string_or(
                Fallback::truthy([
                    "vendor.business_name",
                    "vendor.user.username",
                    "user.full_name",
                    "user.username",
                    "creator.username",
                ]),
                raw,
                "Unknown",
            ),
        )
        .set("category", category)
        .set("type", if is_video { "video" } else { "image" })
        .set(
            "coins_reward",
            Fallback::non_null(["coins_reward", "reward_config.coins_per_view"]).resolve_or(raw, 0),
        )
        .set(
            "views",
            Fallback::non_null(["views_count", "views", "view_count"]).resolve_or(raw, 0),
        )
        .set("status", string_or(Fallback::truthy(["status"]), raw, "pending"))
        .set("created_at", created_at(raw))
}

/// `id, business, username, full_name, phone, role, validated`
pub fn vendor_row(raw: &Row) -> Row {
    Row::new()
        .set("id", raw.get("_id").cloned().unwrap_or_default())
        .set("business", string_or(Fallback::truthy(["business_name"]), raw, ""))
        .set("username", string_or(Fallback::truthy(["user.username"]), raw, ""))
        .set("full_name", string_or(Fallback::truthy(["user.full_name"]), raw, ""))
        .set("phone", string_or(Fallback::truthy(["user.phone"]), raw, ""))
        .set("role", string_or(Fallback::truthy(["user.role"]), raw, "vendor"))
        .set(
            "validated",
            raw.get("validated").is_some_and(Value::is_truthy),
        )
}

/// `id, username, text, created_at`
pub fn comment_row(raw: &Row) -> Row {
    Row::new()
        .set("id", string_or(Resource::AdComments.id_fallback(), raw, ""))
        .set(
            "username",
            string_or(Fallback::truthy(["user.username", "username"]), raw, "user"),
        )
        .set("text", string_or(Fallback::truthy(["text", "comment"]), raw, ""))
        .set("created_at", created_at(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> Row {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_user_row_wrapped_and_named() {
        let raw = parse(serde_json::json!({
            "user": {
                "_id": "u1",
                "first_name": "Amy",
                "last_name": "Lee",
                "email": "amy@example.com",
                "active": false,
                "wallet": { "balance": 20 }
            }
        }));
        let row = user_row(&raw);
        assert_eq!(row.get_string("id").unwrap(), Some("u1"));
        assert_eq!(row.get_string("name").unwrap(), Some("Amy Lee"));
        assert_eq!(row.get_string("status").unwrap(), Some("suspended"));
        assert_eq!(row.get_string("role").unwrap(), Some("member"));
        assert_eq!(row.get_long("coins").unwrap(), Some(20));
        assert!(row.get("joined_date").unwrap().is_null());
    }

    #[test]
    fn test_user_row_defaults() {
        let row = user_row(&Row::new());
        assert_eq!(row.get_string("name").unwrap(), Some("Unknown"));
        assert_eq!(row.get_string("status").unwrap(), Some("active"));
        assert_eq!(row.get_long("coins").unwrap(), Some(0));
        assert_eq!(row.get_string("email").unwrap(), Some(""));
    }

    #[test]
    fn test_user_wallet_string_balance_ignored() {
        let raw = parse(serde_json::json!({"wallet": {"balance": "12"}, "coins": 3}));
        assert_eq!(user_row(&raw).get_long("coins").unwrap(), Some(3));
    }

    #[test]
    fn test_post_row() {
        let raw = parse(serde_json::json!({
            "_id": "p1",
            "user_id": { "username": "bob" },
            "media": [{ "type": "video", "fileUrl": "x.mp4" }],
            "likes_count": 0,
            "likes": 9,
            "comments": [{}, {}],
            "created_at": "2024-01-15T10:30:00Z"
        }));
        let row = post_row(&raw);
        assert_eq!(row.get_string("id").unwrap(), Some("p1"));
        assert_eq!(row.get_string("owner").unwrap(), Some("bob"));
        assert_eq!(row.get_string("type").unwrap(), Some("reel"));
        assert_eq!(row.get_long("likes").unwrap(), Some(0));
        assert_eq!(row.get_long("comments").unwrap(), Some(2));
        assert_eq!(row.get_string("created_at").unwrap(), Some("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_ad_row() {
        let raw = parse(serde_json::json!({
            "ad_id": "a9",
            "caption": "Spring promo",
            "vendor": { "user": { "username": "shop" } },
            "category": { "label": "Fashion" },
            "media": [{ "mime_type": "Video/MP4" }],
            "reward_config": { "coins_per_view": 4 },
            "views": 100
        }));
        let row = ad_row(&raw);
        assert_eq!(row.get_string("id").unwrap(), Some("a9"));
        assert_eq!(row.get_string("title").unwrap(), Some("Spring promo"));
        assert_eq!(row.get_string("creator").unwrap(), Some("shop"));
        assert_eq!(row.get_string("category").unwrap(), Some("Fashion"));
        assert_eq!(row.get_string("type").unwrap(), Some("video"));
        assert_eq!(row.get_long("coins_reward").unwrap(), Some(4));
        assert_eq!(row.get_long("views").unwrap(), Some(100));
        assert_eq!(row.get_string("status").unwrap(), Some("pending"));
    }

    #[test]
    fn test_vendor_row() {
        let raw = parse(serde_json::json!({
            "_id": "v1",
            "business_name": "Acme",
            "validated": 1,
            "user": { "username": "acme", "phone": "555" }
        }));
        let row = vendor_row(&raw);
        assert_eq!(row.get_string("business").unwrap(), Some("Acme"));
        assert_eq!(row.get_string("phone").unwrap(), Some("555"));
        assert_eq!(row.get_string("role").unwrap(), Some("vendor"));
        assert_eq!(row.get_bool("validated").unwrap(), Some(true));
    }

    #[test]
    fn test_comment_row() {
        let raw = parse(serde_json::json!({"comment_id": "c1", "comment": "nice"}));
        let row = shape(Resource::AdComments, &raw);
        assert_eq!(row.get_string("id").unwrap(), Some("c1"));
        assert_eq!(row.get_string("username").unwrap(), Some("user"));
        assert_eq!(row.get_string("text").unwrap(), Some("nice"));
    }
}
