use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use bookbud_kernel::settings::AuthSettings;

use crate::error::AuthError;
use crate::provider::{IdentityProvider, ProfileStore};
use crate::session::{UserProfile, UserSession};

/// Account response from the identity REST endpoint, reduced to the
/// fields the application reads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorBody {
    error: IdentityErrorDetail,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorDetail {
    message: String,
}

/// [`IdentityProvider`] against the hosted identity REST service.
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpIdentityClient {
    pub fn new(settings: &AuthSettings) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|err| AuthError::network(err.to_string()))?;
        let base_url = Url::parse(&settings.identity_url)
            .map_err(|err| AuthError::network(format!("invalid identity base url: {err}")))?;
        Ok(Self {
            http,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    fn endpoint(&self, action: &str) -> Result<Url, AuthError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AuthError::network("identity base url cannot carry paths"))?
            .push(&format!("accounts:{action}"));
        if !self.api_key.is_empty() {
            url.query_pairs_mut().append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    async fn post_account(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<UserSession, AuthError> {
        let url = self.endpoint(action)?;
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| AuthError::network(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| AuthError::network(err.to_string()))?;

        if !status.is_success() {
            // The service reports refusals as a structured error body;
            // fall back to the bare status when it is absent.
            let message = serde_json::from_str::<IdentityErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("identity service returned status {}", status.as_u16()));
            return Err(AuthError::rejected(message));
        }

        let account: AccountResponse =
            serde_json::from_str(&text).map_err(|err| AuthError::malformed(err.to_string()))?;
        Ok(UserSession {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name,
            photo_url: account.photo_url,
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityClient {
    async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, AuthError> {
        tracing::debug!(email, "signing in with password");
        self.post_account(
            "signInWithPassword",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, AuthError> {
        tracing::debug!(email, "registering account");
        self.post_account(
            "signUp",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    async fn sign_in_with_token(&self, id_token: &str) -> Result<UserSession, AuthError> {
        tracing::debug!("signing in with federated token");
        self.post_account(
            "signInWithIdp",
            json!({
                "postBody": format!("id_token={id_token}&providerId=google.com"),
                "requestUri": "http://localhost",
                "returnSecureToken": true,
            }),
        )
        .await
    }
}

/// [`ProfileStore`] writing profile documents to the hosted document
/// store, one document per uid.
pub struct HttpProfileStore {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpProfileStore {
    pub fn new(settings: &AuthSettings) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|err| AuthError::network(err.to_string()))?;
        let base_url = Url::parse(&settings.profile_url)
            .map_err(|err| AuthError::network(format!("invalid profile base url: {err}")))?;
        Ok(Self { http, base_url })
    }

    fn document_url(&self, uid: &str) -> Result<Url, AuthError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AuthError::network("profile base url cannot carry paths"))?
            .push(uid);
        Ok(url)
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn put_profile(&self, profile: &UserProfile) -> Result<(), AuthError> {
        let url = self.document_url(&profile.uid)?;
        tracing::debug!(uid = %profile.uid, "writing profile record");
        let response = self
            .http
            .put(url)
            .json(profile)
            .send()
            .await
            .map_err(|err| AuthError::network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::rejected(format!(
                "profile write failed with status {}",
                status.as_u16()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_client(base_url: &str, api_key: &str) -> HttpIdentityClient {
        HttpIdentityClient::new(&AuthSettings {
            identity_url: base_url.to_string(),
            api_key: api_key.to_string(),
            ..AuthSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_targets_the_account_action() {
        let client = identity_client("https://identity.example/v1", "k");
        let url = client.endpoint("signUp").unwrap();
        assert_eq!(url.as_str(), "https://identity.example/v1/accounts:signUp?key=k");
    }

    #[test]
    fn account_response_parses_without_optional_fields() {
        let account: AccountResponse =
            serde_json::from_str(r#"{"localId": "uid-9", "idToken": "opaque"}"#).unwrap();
        assert_eq!(account.local_id, "uid-9");
        assert!(account.email.is_none());
        assert!(account.display_name.is_none());
    }

    #[test]
    fn error_body_parses_the_service_message() {
        let body: IdentityErrorBody = serde_json::from_str(
            r#"{"error": {"code": 400, "message": "EMAIL_EXISTS", "errors": []}}"#,
        )
        .unwrap();
        assert_eq!(body.error.message, "EMAIL_EXISTS");
    }

    #[test]
    fn profile_documents_are_keyed_by_uid() {
        let store = HttpProfileStore::new(&AuthSettings {
            profile_url: "https://documents.example/profiles".to_string(),
            ..AuthSettings::default()
        })
        .unwrap();
        let url = store.document_url("uid-3").unwrap();
        assert_eq!(url.as_str(), "https://documents.example/profiles/uid-3");
    }
}
