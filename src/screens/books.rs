use std::sync::Arc;

use tokio::sync::watch;

use bookbud_catalog::{Book, CatalogApi};
use bookbud_kernel::{StateCell, ViewState};

/// Store behind the browse/list screen.
///
/// Holds the result of the screen's defining search; `refresh` wholesale-
/// replaces it. An empty result list is content (the empty state), not an
/// error.
pub struct BooksStore {
    catalog: Arc<dyn CatalogApi>,
    query: String,
    page_size: u32,
    state: StateCell<Vec<Book>>,
}

impl BooksStore {
    /// `query` and `page_size` form the screen's defining search.
    pub fn new(catalog: Arc<dyn CatalogApi>, query: impl Into<String>, page_size: u32) -> Self {
        Self {
            catalog,
            query: query.into(),
            page_size,
            state: StateCell::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<Book>>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState<Vec<Book>> {
        self.state.snapshot()
    }

    /// Re-run the defining query. On failure the previous list stays
    /// visible next to the error message; no automatic retry.
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        let outcome = self
            .catalog
            .search(&self.query, self.page_size)
            .await
            .map(|records| records.into_iter().map(Book::from).collect::<Vec<_>>());
        if let Err(err) = &outcome {
            tracing::warn!(query = %self.query, error = %err, "catalog search failed");
        }
        self.state.complete(ticket, outcome);
    }

    /// Discard any in-flight completion; call on screen teardown.
    pub fn close(&self) {
        self.state.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{record, GatedCatalog, StubCatalog};
    use bookbud_catalog::CatalogError;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn refresh_replaces_the_list_wholesale() {
        let catalog = Arc::new(StubCatalog::default());
        catalog.push_search(Ok(vec![record("a", "First")]));
        catalog.push_search(Ok(vec![record("b", "Second"), record("c", "Third")]));
        let store = BooksStore::new(catalog, "fiction", 20);

        store.refresh().await;
        store.refresh().await;

        let snapshot = store.snapshot();
        let books = snapshot.data().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "b");
        assert!(snapshot.error().is_none());
    }

    #[tokio::test]
    async fn empty_search_results_are_content_not_errors() {
        let catalog = Arc::new(StubCatalog::default());
        catalog.push_search(Ok(vec![]));
        let store = BooksStore::new(catalog, "fiction", 20);

        store.refresh().await;

        assert_eq!(store.snapshot(), ViewState::Loaded(vec![]));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_list() {
        let catalog = Arc::new(StubCatalog::default());
        catalog.push_search(Ok(vec![record("a", "Kept")]));
        catalog.push_search(Err(CatalogError::network("connection refused")));
        let store = BooksStore::new(catalog, "fiction", 20);

        store.refresh().await;
        let before = store.snapshot().data().cloned().unwrap();
        store.refresh().await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.data(), Some(&before));
        assert_eq!(
            snapshot.error(),
            Some("catalog unreachable: connection refused")
        );
    }

    #[tokio::test]
    async fn later_refresh_wins_even_when_it_completes_first() {
        let catalog = Arc::new(GatedCatalog::default());
        let (release_first, gate) = oneshot::channel();
        catalog.push_search(Some(gate), Ok(vec![record("a", "Stale")]));
        catalog.push_search(None, Ok(vec![record("b", "Fresh")]));
        let store = Arc::new(BooksStore::new(catalog, "fiction", 20));

        let first = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.refresh().await }
        });
        tokio::task::yield_now().await;

        store.refresh().await;
        release_first.send(()).unwrap();
        first.await.unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.data().unwrap()[0].id, "b");
    }

    #[tokio::test]
    async fn close_discards_in_flight_completions() {
        let catalog = Arc::new(GatedCatalog::default());
        let (release, gate) = oneshot::channel();
        catalog.push_search(Some(gate), Ok(vec![record("a", "Late")]));
        let store = Arc::new(BooksStore::new(catalog, "fiction", 20));

        let refresh = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.refresh().await }
        });
        tokio::task::yield_now().await;

        store.close();
        release.send(()).unwrap();
        refresh.await.unwrap();

        // The teardown leaves the loading snapshot as the final word; the
        // late completion must not surface.
        assert!(store.snapshot().data().is_none());
    }
}
