use serde::Serialize;
use time::OffsetDateTime;

/// Authenticated user as returned by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    /// Stable user identifier; profile records are keyed by it.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Profile document written after registration or federated sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: String,
}

impl UserProfile {
    /// Profile record for a freshly signed-in session, stamped with the
    /// current UTC time.
    pub fn for_session(session: &UserSession) -> Self {
        Self {
            uid: session.uid.clone(),
            email: session.email.clone(),
            name: session.display_name.clone(),
            photo_url: session.photo_url.clone(),
            created_at: OffsetDateTime::now_utc().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_keyed_by_the_session_uid() {
        let session = UserSession {
            uid: "uid-1".to_string(),
            email: Some("reader@example.com".to_string()),
            display_name: Some("Reader".to_string()),
            photo_url: None,
        };
        let profile = UserProfile::for_session(&session);
        assert_eq!(profile.uid, "uid-1");
        assert_eq!(profile.email.as_deref(), Some("reader@example.com"));
        assert_eq!(profile.name.as_deref(), Some("Reader"));
        assert!(!profile.created_at.is_empty());
    }

    #[test]
    fn profile_serializes_with_camel_case_keys() {
        let profile = UserProfile {
            uid: "uid-1".to_string(),
            email: None,
            name: None,
            photo_url: Some("http://photos.example/1".to_string()),
            created_at: "2024-01-01 0:00:00.0 +00:00:00".to_string(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["photoUrl"], "http://photos.example/1");
        assert!(json["createdAt"].is_string());
    }
}
