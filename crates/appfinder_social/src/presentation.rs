//! Rendering of catalog records for chat replies.
//!
//! Detail blocks are HTML; every interpolated field is escaped so upstream
//! text can never be read as markup. Choice labels have the fixed shape
//! `(ID: <id>) - <name>` and are parsed back by [`parse_choice_label`].

use appfinder_core::{AppId, CatalogRecord};
use html_escape::encode_text;

/// Marker opening every choice label.
pub const CHOICE_PREFIX: &str = "(ID: ";

/// Separator between the identifier and the display name.
pub const CHOICE_SEPARATOR: &str = ") - ";

const DESCRIPTION_RULE: &str = "-----------------------------";

/// Render the full detail block for a record.
///
/// # Examples
///
/// ```
/// use appfinder_core::{AppId, CatalogRecord};
/// use appfinder_social::render_detail;
///
/// let record = CatalogRecord::new(AppId::new(7), "Chess").with_price(0.5).with_average_rating(4.24);
/// let html = render_detail(&record);
///
/// assert!(html.starts_with("<b>Chess</b>\n<b>ID:</b> 7\n"));
/// assert!(html.contains("<b>Price:</b> 0.50\n"));
/// assert!(html.contains("<b>Score:</b> 4.2\n"));
/// ```
pub fn render_detail(record: &CatalogRecord) -> String {
    let mut html = format!("<b>{}</b>\n", encode_text(record.name()));
    push_field(&mut html, "ID", &record.id().to_string());
    push_field(&mut html, "Bundle name", record.bundle_id());
    push_field(&mut html, "Category", record.category());
    push_field(&mut html, "Publisher", record.publisher());
    push_field(&mut html, "Release date", record.release_date());
    push_field(&mut html, "File size", record.file_size());
    push_field(&mut html, "Min iOS version", record.minimum_os_version());
    push_field(&mut html, "Content rating", record.content_rating());
    push_field(&mut html, "Price", &format!("{:.2}", record.price()));
    push_field(&mut html, "Score", &format!("{:.1}", record.average_rating()));
    push_field(&mut html, "Store url", record.store_url());
    html.push('\n');
    html.push_str(DESCRIPTION_RULE);
    html.push_str("\n\n");
    push_field(&mut html, "Description", record.description());
    html
}

fn push_field(html: &mut String, label: &str, value: &str) {
    html.push_str("<b>");
    html.push_str(label);
    html.push_str(":</b> ");
    html.push_str(&encode_text(value));
    html.push('\n');
}

/// Render the selectable label for a search result.
///
/// # Examples
///
/// ```
/// use appfinder_core::{AppId, CatalogRecord};
/// use appfinder_social::render_choice_label;
///
/// let record = CatalogRecord::new(AppId::new(284882215), "Chess");
/// assert_eq!(render_choice_label(&record), "(ID: 284882215) - Chess");
/// ```
pub fn render_choice_label(record: &CatalogRecord) -> String {
    format!("{}{}{}{}", CHOICE_PREFIX, record.id(), CHOICE_SEPARATOR, record.name())
}

/// Extract the raw identifier text from a choice label.
///
/// Returns `None` unless the text starts with the marker and contains the
/// separator. The identifier itself is not validated.
///
/// # Examples
///
/// ```
/// use appfinder_social::presentation::choice_label_id;
///
/// assert_eq!(choice_label_id("(ID: 42) - Chess"), Some("42"));
/// assert_eq!(choice_label_id("(ID: abc) - Chess"), Some("abc"));
/// assert_eq!(choice_label_id("(ID: 42"), None);
/// ```
pub fn choice_label_id(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(CHOICE_PREFIX)?;
    let end = rest.find(CHOICE_SEPARATOR)?;
    Some(&rest[..end])
}

/// Extract the identifier from a choice label.
///
/// Returns `None` when the text lacks the marker, lacks the separator, or
/// carries something other than a decimal identifier between them.
///
/// # Examples
///
/// ```
/// use appfinder_core::AppId;
/// use appfinder_social::parse_choice_label;
///
/// assert_eq!(parse_choice_label("(ID: 42) - Chess"), Some(AppId::new(42)));
/// assert_eq!(parse_choice_label("(ID: 42"), None);
/// assert_eq!(parse_choice_label("chess"), None);
/// ```
pub fn parse_choice_label(text: &str) -> Option<AppId> {
    choice_label_id(text)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CatalogRecord {
        CatalogRecord::new(AppId::new(1234), "Chess & Co <Pro>")
            .with_bundle_id("com.example.chess")
            .with_category("Games")
            .with_publisher("Example Ltd")
            .with_release_date("2015-03-02T08:00:00Z")
            .with_file_size("104857600")
            .with_minimum_os_version("12.0")
            .with_content_rating("4+")
            .with_price(2.999)
            .with_average_rating(4.66)
            .with_store_url("https://apps.example.com/app/id1234")
            .with_description("<script>alert('x')</script> & \"more\"")
    }

    #[test]
    fn test_detail_field_order() {
        let html = render_detail(&sample());
        let labels = [
            "ID:",
            "Bundle name:",
            "Category:",
            "Publisher:",
            "Release date:",
            "File size:",
            "Min iOS version:",
            "Content rating:",
            "Price:",
            "Score:",
            "Store url:",
            DESCRIPTION_RULE,
            "Description:",
        ];

        let positions: Vec<usize> = labels
            .iter()
            .map(|label| html.find(label).unwrap_or_else(|| panic!("missing {label}")))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_detail_number_precision() {
        let html = render_detail(&sample());
        assert!(html.contains("<b>Price:</b> 3.00\n"));
        assert!(html.contains("<b>Score:</b> 4.7\n"));
    }

    #[test]
    fn test_description_is_escaped() {
        let html = render_detail(&sample());
        let description = html.split("<b>Description:</b> ").nth(1).unwrap();

        assert!(!description.contains('<'));
        assert!(!description.contains('>'));
        assert!(description.contains("&lt;script&gt;"));
        assert!(description.contains("&amp;"));
    }

    #[test]
    fn test_name_is_escaped() {
        let html = render_detail(&sample());
        assert!(html.starts_with("<b>Chess &amp; Co &lt;Pro&gt;</b>\n"));
    }

    #[test]
    fn test_label_round_trip() {
        for (id, name) in [(0, "Zero"), (1, ""), (284882215, "Chess (Classic)"), (i64::MAX, "Big")] {
            let record = CatalogRecord::new(AppId::new(id), name);
            assert_eq!(parse_choice_label(&render_choice_label(&record)), Some(AppId::new(id)));
        }
    }

    #[test]
    fn test_label_with_separator_in_name() {
        let record = CatalogRecord::new(AppId::new(5), "Chess) - Deluxe");
        assert_eq!(parse_choice_label(&render_choice_label(&record)), Some(AppId::new(5)));
    }

    #[test]
    fn test_label_with_non_numeric_id() {
        assert_eq!(parse_choice_label("(ID: abc) - Chess"), None);
        assert_eq!(choice_label_id("(ID: abc) - Chess"), Some("abc"));
    }
}
