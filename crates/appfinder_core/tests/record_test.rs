//! Tests for catalog record decoding.

use appfinder_core::{AppId, CatalogRecord, SearchResponse};

const UPSTREAM_BODY: &str = r#"{
  "resultCount": 1,
  "results": [{
    "trackId": 1234567890,
    "trackName": "Chess <Deluxe>",
    "artworkUrl100": "https://example.com/icon.png",
    "screenshotUrls": ["https://example.com/1.png", "https://example.com/2.png"],
    "averageUserRating": 4.65,
    "fileSizeBytes": "104857600",
    "contentAdvisoryRating": "4+",
    "minimumOsVersion": "12.0",
    "sellerName": "Board Games Ltd",
    "price": 2.99,
    "description": "Play chess & win.",
    "bundleId": "com.example.chess",
    "primaryGenreName": "Games",
    "releaseDate": "2015-03-02T08:00:00Z",
    "trackViewUrl": "https://apps.example.com/app/id1234567890",
    "kind": "software",
    "currency": "USD"
  }]
}"#;

#[test]
fn test_decodes_upstream_fields() -> Result<(), Box<dyn std::error::Error>> {
    let response: SearchResponse = serde_json::from_str(UPSTREAM_BODY)?;
    let records = response.into_records(8);
    let record = &records[0];

    assert_eq!(*record.id(), AppId::new(1234567890));
    assert_eq!(record.name(), "Chess <Deluxe>");
    assert_eq!(record.screenshot_urls().len(), 2);
    assert_eq!(*record.average_rating(), 4.65);
    assert_eq!(record.file_size(), "104857600");
    assert_eq!(record.content_rating(), "4+");
    assert_eq!(record.minimum_os_version(), "12.0");
    assert_eq!(record.publisher(), "Board Games Ltd");
    assert_eq!(*record.price(), 2.99);
    assert_eq!(record.bundle_id(), "com.example.chess");
    assert_eq!(record.category(), "Games");
    assert_eq!(record.release_date(), "2015-03-02T08:00:00Z");
    assert_eq!(record.store_url(), "https://apps.example.com/app/id1234567890");
    Ok(())
}

#[test]
fn test_cached_encoding_restores_every_field() -> Result<(), Box<dyn std::error::Error>> {
    let response: SearchResponse = serde_json::from_str(UPSTREAM_BODY)?;
    let original = response.into_records(8).remove(0);

    let stored = serde_json::to_string(&original)?;
    let restored: CatalogRecord = serde_json::from_str(&stored)?;

    assert_eq!(restored, original);
    assert!(stored.contains("\"trackId\":1234567890"));
    Ok(())
}

#[test]
fn test_missing_identifier_is_rejected() {
    let result = serde_json::from_str::<CatalogRecord>(r#"{"trackName": "Nameless"}"#);
    assert!(result.is_err());
}

#[test]
fn test_unrated_app_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let record: CatalogRecord =
        serde_json::from_str(r#"{"trackId": 5, "trackName": "New App"}"#)?;
    assert_eq!(*record.average_rating(), 0.0);
    assert_eq!(*record.price(), 0.0);
    assert!(record.description().is_empty());
    Ok(())
}

#[test]
fn test_null_fields_decode_as_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let body = r#"{
      "resultCount": 2,
      "results": [
        {"trackId": 1, "trackName": "Chess", "averageUserRating": null,
         "screenshotUrls": null, "description": null, "price": null},
        {"trackId": 2, "trackName": "Checkers", "averageUserRating": 3.5}
      ]
    }"#;

    let records = serde_json::from_str::<SearchResponse>(body)?.into_records(8);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "Chess");
    assert_eq!(*records[0].average_rating(), 0.0);
    assert_eq!(*records[0].price(), 0.0);
    assert!(records[0].screenshot_urls().is_empty());
    assert!(records[0].description().is_empty());
    assert_eq!(*records[1].average_rating(), 3.5);
    Ok(())
}

#[test]
fn test_null_identifier_is_rejected() {
    let result = serde_json::from_str::<CatalogRecord>(r#"{"trackId": null, "trackName": "Ghost"}"#);
    assert!(result.is_err());
}
