//! Catalog responses as the service returns them, before mapping into the
//! domain model.

use serde::Deserialize;

/// Search response envelope. The service omits `items` entirely when a
/// query matches nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeList {
    #[serde(default)]
    pub items: Vec<VolumeRecord>,
}

/// One catalog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecord {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

/// Nested volume metadata; everything except the title is optional on the
/// wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_record() {
        let record: VolumeRecord = serde_json::from_str(
            r#"{
                "id": "zyTCAlFPjgYC",
                "volumeInfo": {
                    "title": "The Google Story",
                    "authors": ["David A. Vise", "Mark Malseed"],
                    "description": "Here is the story behind one of the most remarkable Internet successes of our time.",
                    "imageLinks": {
                        "thumbnail": "http://books.google.com/books/content?id=zyTCAlFPjgYC&img=1"
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, "zyTCAlFPjgYC");
        assert_eq!(record.volume_info.title, "The Google Story");
        assert_eq!(
            record.volume_info.authors.as_deref().map(<[String]>::len),
            Some(2)
        );
    }

    #[test]
    fn absent_optional_fields_deserialize() {
        let record: VolumeRecord =
            serde_json::from_str(r#"{"id": "abc", "volumeInfo": {"title": "Bare"}}"#).unwrap();
        assert!(record.volume_info.authors.is_none());
        assert!(record.volume_info.description.is_none());
        assert!(record.volume_info.image_links.is_none());
    }

    #[test]
    fn empty_search_body_yields_no_items() {
        let list: VolumeList = serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(list.items.is_empty());
    }
}
