//! Catalog record types.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Upstream-assigned application identifier.
///
/// # Examples
///
/// ```
/// use appfinder_core::AppId;
///
/// let id: AppId = "284882215".parse().unwrap();
/// assert_eq!(id.to_string(), "284882215");
/// assert!("chess".parse::<AppId>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct AppId(i64);

impl AppId {
    /// Wrap a raw identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for AppId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// One application entry as returned by the upstream catalog.
///
/// Field names on the wire are the upstream names, and the same encoding is
/// used for cached values. Every field except the identifier falls back to
/// its default when the upstream omits it or sends `null` (unrated apps carry
/// no rating, for example).
///
/// A record is a snapshot: it is replaced wholesale, never patched.
///
/// # Examples
///
/// ```
/// use appfinder_core::{AppId, CatalogRecord};
///
/// let record: CatalogRecord = serde_json::from_str(
///     r#"{"trackId": 42, "trackName": "Chess Pro", "price": 1.99}"#,
/// ).unwrap();
///
/// assert_eq!(*record.id(), AppId::new(42));
/// assert_eq!(record.name(), "Chess Pro");
/// assert!(record.screenshot_urls().is_empty());
/// ```
///
/// The identifier is fixed at construction:
///
/// ```compile_fail
/// use appfinder_core::{AppId, CatalogRecord};
///
/// let record = CatalogRecord::new(AppId::new(42), "Chess").with_id(AppId::new(7));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
pub struct CatalogRecord {
    /// Unique upstream identifier
    #[serde(rename = "trackId")]
    #[setters(skip)]
    id: AppId,

    /// Display name
    #[serde(rename = "trackName", default, deserialize_with = "null_as_default")]
    name: String,

    /// 100px icon URL
    #[serde(rename = "artworkUrl100", default, deserialize_with = "null_as_default")]
    icon_url: String,

    /// Screenshot URLs in upstream order
    #[serde(rename = "screenshotUrls", default, deserialize_with = "null_as_default")]
    screenshot_urls: Vec<String>,

    /// Average user rating
    #[serde(rename = "averageUserRating", default, deserialize_with = "null_as_default")]
    average_rating: f64,

    /// File size as supplied upstream
    #[serde(rename = "fileSizeBytes", default, deserialize_with = "null_as_default")]
    file_size: String,

    /// Content advisory rating (e.g. "4+")
    #[serde(rename = "contentAdvisoryRating", default, deserialize_with = "null_as_default")]
    content_rating: String,

    /// Minimum supported OS version
    #[serde(rename = "minimumOsVersion", default, deserialize_with = "null_as_default")]
    minimum_os_version: String,

    /// Seller / publisher name
    #[serde(rename = "sellerName", default, deserialize_with = "null_as_default")]
    publisher: String,

    /// Price in the store's currency
    #[serde(default, deserialize_with = "null_as_default")]
    price: f64,

    /// Free-form store description
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,

    /// Bundle identifier
    #[serde(rename = "bundleId", default, deserialize_with = "null_as_default")]
    bundle_id: String,

    /// Primary category
    #[serde(rename = "primaryGenreName", default, deserialize_with = "null_as_default")]
    category: String,

    /// Release date as supplied upstream
    #[serde(rename = "releaseDate", default, deserialize_with = "null_as_default")]
    release_date: String,

    /// Store page URL
    #[serde(rename = "trackViewUrl", default, deserialize_with = "null_as_default")]
    store_url: String,
}

/// Decode a missing or `null` value as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogRecord {
    /// Create a record with the given identifier and name, all other fields empty.
    pub fn new(id: AppId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon_url: String::new(),
            screenshot_urls: Vec::new(),
            average_rating: 0.0,
            file_size: String::new(),
            content_rating: String::new(),
            minimum_os_version: String::new(),
            publisher: String::new(),
            price: 0.0,
            description: String::new(),
            bundle_id: String::new(),
            category: String::new(),
            release_date: String::new(),
            store_url: String::new(),
        }
    }
}
