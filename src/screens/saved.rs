use tokio::sync::watch;

use bookbud_catalog::Book;
use bookbud_kernel::{StateCell, ViewState};

/// Store behind the saved-items screen.
///
/// An in-memory shelf: saves are local-only and discarded with the
/// screen, matching the save feature's current product scope. The shelf
/// starts as loaded-but-empty so renderers show the empty state rather
/// than an idle one.
pub struct SavedBooksStore {
    state: StateCell<Vec<Book>>,
}

impl SavedBooksStore {
    pub fn new() -> Self {
        Self {
            state: StateCell::loaded(Vec::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<Book>>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState<Vec<Book>> {
        self.state.snapshot()
    }

    /// Replace the shelf contents wholesale.
    pub fn replace(&self, books: Vec<Book>) {
        self.state.mutate_loaded(|shelf| *shelf = books);
    }

    /// Put a book on the shelf, marking it saved. Adding a book that is
    /// already shelved is a no-op.
    pub fn add(&self, book: Book) {
        self.state.mutate_loaded(|shelf| {
            if shelf.iter().any(|shelved| shelved.id == book.id) {
                return;
            }
            let mut book = book;
            book.is_saved = true;
            shelf.push(book);
        });
    }

    /// Take a book off the shelf by its identifier.
    pub fn remove(&self, book_id: &str) {
        self.state
            .mutate_loaded(|shelf| shelf.retain(|book| book.id != book_id));
    }
}

impl Default for SavedBooksStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::record;

    fn book(id: &str, title: &str) -> Book {
        Book::from(record(id, title))
    }

    #[test]
    fn starts_as_an_empty_shelf_not_idle() {
        let store = SavedBooksStore::new();
        assert_eq!(store.snapshot(), ViewState::Loaded(vec![]));
    }

    #[test]
    fn added_books_are_marked_saved() {
        let store = SavedBooksStore::new();
        store.add(book("a", "Kept"));

        let snapshot = store.snapshot();
        let shelf = snapshot.data().unwrap();
        assert_eq!(shelf.len(), 1);
        assert!(shelf[0].is_saved);
    }

    #[test]
    fn adding_the_same_book_twice_keeps_one_copy() {
        let store = SavedBooksStore::new();
        store.add(book("a", "Once"));
        store.add(book("a", "Once"));
        assert_eq!(store.snapshot().data().unwrap().len(), 1);
    }

    #[test]
    fn remove_takes_the_book_off_the_shelf() {
        let store = SavedBooksStore::new();
        store.add(book("a", "Gone"));
        store.add(book("b", "Stays"));

        store.remove("a");

        let snapshot = store.snapshot();
        let shelf = snapshot.data().unwrap();
        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf[0].id, "b");
    }
}
