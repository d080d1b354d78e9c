//! Navigable destinations and their opaque route strings. Rendering and
//! navigation chrome live outside this crate; only the route data is
//! modeled here.

/// One destination, carrying at most one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    EmailLogin,
    Register,
    Main,
    SavedBooks,
    Profile,
    BookDetail { book_id: String },
}

impl Route {
    /// Opaque route string for this destination.
    pub fn as_route(&self) -> String {
        match self {
            Route::Login => "login".to_string(),
            Route::EmailLogin => "email_login".to_string(),
            Route::Register => "register".to_string(),
            Route::Main => "main".to_string(),
            Route::SavedBooks => "saved_books".to_string(),
            Route::Profile => "profile".to_string(),
            Route::BookDetail { book_id } => format!("book/{book_id}"),
        }
    }

    /// Parse an opaque route string back into a destination.
    pub fn parse(route: &str) -> Option<Route> {
        match route {
            "login" => Some(Route::Login),
            "email_login" => Some(Route::EmailLogin),
            "register" => Some(Route::Register),
            "main" => Some(Route::Main),
            "saved_books" => Some(Route::SavedBooks),
            "profile" => Some(Route::Profile),
            _ => route
                .strip_prefix("book/")
                .filter(|id| !id.is_empty())
                .map(|id| Route::BookDetail {
                    book_id: id.to_string(),
                }),
        }
    }
}
