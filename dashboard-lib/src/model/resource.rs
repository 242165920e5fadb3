//! Resource kinds exposed by the admin API

use std::fmt;
use std::str::FromStr;

use super::Fallback;
use super::Row;

/// The collections the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Posts,
    Ads,
    Vendors,
    AdComments,
}

/// Returned when parsing an unknown resource name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource '{0}' (expected users, posts, ads, vendors or comments)")]
pub struct UnknownResource(pub String);

impl Resource {
    /// All resources, in sidebar order.
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::Posts,
        Resource::Ads,
        Resource::Vendors,
        Resource::AdComments,
    ];

    /// Short name used on the command line and in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Posts => "posts",
            Resource::Ads => "ads",
            Resource::Vendors => "vendors",
            Resource::AdComments => "comments",
        }
    }

    /// Where this resource's identifier lives in a raw API row.
    ///
    /// User list entries are sometimes wrapped as `{ user: {...} }`, so the
    /// wrapped keys are tried first.
    pub fn id_fallback(self) -> Fallback {
        match self {
            Resource::Users => Fallback::truthy(["user._id", "user.id", "_id", "id", "uuid"]),
            Resource::Posts => Fallback::truthy(["post_id", "_id", "id", "uuid"]),
            Resource::Ads => Fallback::truthy(["_id", "ad_id", "id"]),
            Resource::Vendors => Fallback::truthy(["_id", "id"]),
            Resource::AdComments => Fallback::truthy(["comment_id", "_id", "id"]),
        }
    }

    /// Extracts the identifier of a raw API row.
    pub fn row_id(self, row: &Row) -> Option<String> {
        self.id_fallback().resolve_string(row)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" | "user" => Ok(Resource::Users),
            "posts" | "post" | "reels" => Ok(Resource::Posts),
            "ads" | "ad" => Ok(Resource::Ads),
            "vendors" | "vendor" => Ok(Resource::Vendors),
            "comments" | "comment" => Ok(Resource::AdComments),
            other => Err(UnknownResource(other.to_string())),
        }
    }
}
