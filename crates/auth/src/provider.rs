use async_trait::async_trait;

use crate::error::AuthError;
use crate::session::{UserProfile, UserSession};

/// Port onto the hosted identity backend.
///
/// Stores take one as an `Arc<dyn IdentityProvider>` so tests can
/// substitute a fake; implementations must not keep per-call state.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, AuthError>;

    async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, AuthError>;

    /// Federated sign-in with an ID token minted by an external provider.
    async fn sign_in_with_token(&self, id_token: &str) -> Result<UserSession, AuthError>;
}

/// Port onto the hosted profile document store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write (or overwrite) the profile record keyed by `profile.uid`.
    async fn put_profile(&self, profile: &UserProfile) -> Result<(), AuthError>;
}
