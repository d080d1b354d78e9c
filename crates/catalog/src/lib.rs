//! Remote book-catalog client, wire types, and the BookBud domain model.

pub mod client;
pub mod error;
pub mod model;
pub mod wire;

pub use client::{CatalogApi, GoogleBooksClient};
pub use error::CatalogError;
pub use model::{Book, Review, Reviewer};
