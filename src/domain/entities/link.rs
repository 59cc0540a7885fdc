//! Link entities mirroring the backend link-store wire format.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// A shortened link as returned by `GET /api/links`.
///
/// Owned by whichever page render fetched it; never mutated locally.
/// `total_clicks` only ever moves forward from this client's perspective,
/// because it is refreshed from the server rather than updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "shortId")]
    pub short_code: String,

    #[serde(rename = "redirectURL")]
    pub destination_url: String,

    #[serde(rename = "totalClicks")]
    pub total_clicks: u64,

    #[serde(rename = "lastAccessed")]
    pub last_accessed: Option<DateTime<Utc>>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// One page of links with pagination metadata.
///
/// Transient: recomputed on every fetch and replaced wholesale, never merged
/// with a previously loaded page. Invariants upheld by the backend:
/// `items.len() <= limit` and `total_pages == ceil(total / limit)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPage {
    pub page: u32,
    pub limit: u32,
    pub total: u64,

    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    #[serde(rename = "data")]
    pub items: Vec<ShortLink>,
}

/// Per-code analytics projection returned by `GET /api/links/{code}`.
///
/// The `created_At` / `last_acessed` spellings are the backend's actual wire
/// fields; renaming here keeps the quirk out of the rest of the codebase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStats {
    #[serde(rename = "shortId")]
    pub short_code: String,

    #[serde(rename = "redirectURL")]
    pub destination_url: String,

    #[serde(rename = "totalClicks")]
    pub total_clicks: u64,

    #[serde(rename = "created_At")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "last_acessed")]
    pub last_accessed: Option<DateTime<Utc>>,
}

/// Request body for `POST /api/links`.
///
/// Validated locally before any network call: an invalid URL or custom code
/// never reaches the backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewShortLink {
    /// The destination URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Please enter a valid URL starting with http:// or https://"))]
    pub url: String,

    /// Optional custom short code (validated for length and characters).
    #[serde(rename = "customCode", skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 3,
        max = 20,
        message = "Custom code must be between 3 and 20 characters"
    ))]
    #[validate(regex(
        path = "*CUSTOM_CODE_REGEX",
        message = "Custom code can only contain letters, numbers, hyphens, and underscores"
    ))]
    pub custom_code: Option<String>,
}

/// Response body for a successful `POST /api/links`.
///
/// `short_url` as delivered by the backend is rooted at the backend's own
/// origin; the client boundary rewrites it to the public origin before it
/// reaches anything user-facing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedLink {
    pub id: String,

    #[serde(rename = "shortURL")]
    pub short_url: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
