use std::sync::Arc;

use tokio::sync::watch;

use bookbud_catalog::{Book, CatalogApi, Review, Reviewer};
use bookbud_kernel::{StateCell, ViewState};

/// Store behind the book detail screen.
///
/// Reviews and the saved flag are local-only features: they mutate the
/// loaded snapshot and are gone when the screen is. That scope is
/// deliberate; nothing here talks to a backend besides `load`.
pub struct BookDetailStore {
    catalog: Arc<dyn CatalogApi>,
    reviewer: Reviewer,
    state: StateCell<Book>,
}

impl BookDetailStore {
    /// `reviewer` is the identity stamped onto reviews created here.
    pub fn new(catalog: Arc<dyn CatalogApi>, reviewer: Reviewer) -> Self {
        Self {
            catalog,
            reviewer,
            state: StateCell::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Book>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState<Book> {
        self.state.snapshot()
    }

    /// Fetch one book by its catalog identifier. A missing entry surfaces
    /// as a failure message while the previously shown book stays visible.
    pub async fn load(&self, volume_id: &str) {
        let ticket = self.state.begin();
        let outcome = self.catalog.get_by_id(volume_id).await.map(Book::from);
        if let Err(err) = &outcome {
            tracing::warn!(volume_id, error = %err, "loading book failed");
        }
        self.state.complete(ticket, outcome);
    }

    /// Append a review to the loaded book and republish.
    ///
    /// Returns `false` (leaving the snapshot untouched) when no book is
    /// loaded or the rating falls outside the 0–5 scale.
    pub fn add_review(&self, rating: f32, comment: &str) -> bool {
        if !Review::rating_in_scale(rating) {
            tracing::warn!(rating, "rejecting review with out-of-scale rating");
            return false;
        }
        let review = Review::new(&self.reviewer, rating, comment);
        let applied = self.state.mutate_loaded(|book| book.reviews.push(review));
        if !applied {
            tracing::warn!("ignoring add_review with no book loaded");
        }
        applied
    }

    /// Flip the local saved flag. Returns `false` when no book is loaded.
    pub fn toggle_saved(&self) -> bool {
        let applied = self
            .state
            .mutate_loaded(|book| book.is_saved = !book.is_saved);
        if !applied {
            tracing::warn!("ignoring toggle_saved with no book loaded");
        }
        applied
    }

    /// Discard any in-flight completion; call on screen teardown.
    pub fn close(&self) {
        self.state.invalidate();
    }
}
