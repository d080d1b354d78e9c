//! Sign-in, registration, and profile persistence against the hosted
//! identity backend.

pub mod client;
pub mod error;
pub mod provider;
pub mod session;

pub use client::{HttpIdentityClient, HttpProfileStore};
pub use error::AuthError;
pub use provider::{IdentityProvider, ProfileStore};
pub use session::{UserProfile, UserSession};
