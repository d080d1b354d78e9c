use time::OffsetDateTime;
use uuid::Uuid;

use crate::wire::VolumeRecord;

/// One catalog entry as shown to the user.
///
/// `is_saved` and `reviews` are local-only: the catalog knows nothing of
/// them, and they are only ever changed through a screen store's intents.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Stable identity assigned by the catalog; never empty.
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub cover_url: Option<String>,
    pub is_saved: bool,
    /// Insertion-ordered, newest appended last.
    pub reviews: Vec<Review>,
}

impl From<VolumeRecord> for Book {
    /// Total mapping from the wire: absent optional fields become the
    /// type's neutral defaults rather than propagating partiality.
    fn from(record: VolumeRecord) -> Self {
        let info = record.volume_info;
        Self {
            id: record.id,
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            description: info.description.unwrap_or_default(),
            cover_url: info.image_links.and_then(|links| links.thumbnail),
            is_saved: false,
            reviews: Vec::new(),
        }
    }
}

/// One user comment attached to a book. Never edited or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub rating: f32,
    pub comment: String,
    pub created_at: String,
}

impl Review {
    pub const MIN_RATING: f32 = 0.0;
    pub const MAX_RATING: f32 = 5.0;

    /// Build a locally generated review stamped with the given identity
    /// and the current UTC time.
    pub fn new(reviewer: &Reviewer, rating: f32, comment: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: reviewer.id.clone(),
            author_name: reviewer.name.clone(),
            rating,
            comment: comment.into(),
            created_at: OffsetDateTime::now_utc().to_string(),
        }
    }

    pub fn rating_in_scale(rating: f32) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&rating)
    }
}

/// Identity stamped onto reviews created by a detail screen.
#[derive(Debug, Clone)]
pub struct Reviewer {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{ImageLinks, VolumeInfo};

    fn bare_record(id: &str, title: &str) -> VolumeRecord {
        VolumeRecord {
            id: id.to_string(),
            volume_info: VolumeInfo {
                title: title.to_string(),
                ..VolumeInfo::default()
            },
        }
    }

    #[test]
    fn mapping_substitutes_neutral_defaults() {
        let book = Book::from(bare_record("abc", "Bare"));
        assert_eq!(book.id, "abc");
        assert_eq!(book.title, "Bare");
        assert!(book.authors.is_empty());
        assert!(book.description.is_empty());
        assert!(book.cover_url.is_none());
        assert!(!book.is_saved);
        assert!(book.reviews.is_empty());
    }

    #[test]
    fn mapping_keeps_present_fields() {
        let mut record = bare_record("abc", "Full");
        record.volume_info.authors = Some(vec!["A. Author".to_string()]);
        record.volume_info.description = Some("About things.".to_string());
        record.volume_info.image_links = Some(ImageLinks {
            thumbnail: Some("http://covers.example/abc".to_string()),
        });

        let book = Book::from(record);
        assert_eq!(book.authors, vec!["A. Author".to_string()]);
        assert_eq!(book.description, "About things.");
        assert_eq!(book.cover_url.as_deref(), Some("http://covers.example/abc"));
    }

    #[test]
    fn review_scale_is_inclusive() {
        assert!(Review::rating_in_scale(0.0));
        assert!(Review::rating_in_scale(5.0));
        assert!(!Review::rating_in_scale(5.5));
        assert!(!Review::rating_in_scale(-0.5));
    }

    #[test]
    fn new_reviews_carry_the_reviewer_identity() {
        let reviewer = Reviewer {
            id: "user-1".to_string(),
            name: "Reader".to_string(),
        };
        let review = Review::new(&reviewer, 4.0, "Solid.");
        assert_eq!(review.author_id, "user-1");
        assert_eq!(review.author_name, "Reader");
        assert!(!review.id.is_empty());
        assert!(!review.created_at.is_empty());
    }
}
