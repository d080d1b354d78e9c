use std::sync::Arc;

use tokio::sync::watch;

use bookbud_auth::{AuthError, IdentityProvider, ProfileStore, UserProfile, UserSession};
use bookbud_kernel::{StateCell, ViewState};

/// Store behind the login and registration screens.
///
/// `Idle` is the not-signed-in state; a loaded snapshot is an
/// authenticated session. Registration and federated sign-in write a
/// profile record keyed by the new session's uid.
pub struct AuthStore {
    provider: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileStore>,
    state: StateCell<UserSession>,
}

impl AuthStore {
    pub fn new(provider: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            provider,
            profiles,
            state: StateCell::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<UserSession>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState<UserSession> {
        self.state.snapshot()
    }

    pub async fn sign_in_with_email(&self, email: &str, password: &str) {
        let ticket = self.state.begin();
        let outcome = self.provider.sign_in_with_email(email, password).await;
        if let Err(err) = &outcome {
            tracing::warn!(email, error = %err, "email sign-in failed");
        }
        self.state.complete(ticket, outcome);
    }

    /// Register a new account.
    ///
    /// The confirmation check runs locally and publishes a failure without
    /// touching the network when it misses; a successful registration is
    /// followed by one profile write.
    pub async fn sign_up_with_email(&self, email: &str, password: &str, confirm: &str) {
        if let Err(err) = validate_registration(email, password, confirm) {
            tracing::warn!(email, error = %err, "registration rejected locally");
            self.state.reject(err.to_string());
            return;
        }

        let ticket = self.state.begin();
        let outcome = self.register(email, password).await;
        if let Err(err) = &outcome {
            tracing::warn!(email, error = %err, "registration failed");
        }
        self.state.complete(ticket, outcome);
    }

    /// Federated sign-in with an externally minted ID token, followed by a
    /// profile write for the (possibly new) account.
    pub async fn sign_in_with_google(&self, id_token: &str) {
        let ticket = self.state.begin();
        let outcome = self.federated_sign_in(id_token).await;
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "federated sign-in failed");
        }
        self.state.complete(ticket, outcome);
    }

    /// Discard any in-flight completion; call on screen teardown.
    pub fn close(&self) {
        self.state.invalidate();
    }

    async fn register(&self, email: &str, password: &str) -> Result<UserSession, AuthError> {
        let session = self.provider.sign_up_with_email(email, password).await?;
        self.profiles
            .put_profile(&UserProfile::for_session(&session))
            .await?;
        Ok(session)
    }

    async fn federated_sign_in(&self, id_token: &str) -> Result<UserSession, AuthError> {
        let session = self.provider.sign_in_with_token(id_token).await?;
        self.profiles
            .put_profile(&UserProfile::for_session(&session))
            .await?;
        Ok(session)
    }
}

fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(AuthError::validation("email must not be empty"));
    }
    if password.is_empty() {
        return Err(AuthError::validation("password must not be empty"));
    }
    if password != confirm {
        return Err(AuthError::validation("passwords do not match"));
    }
    Ok(())
}
