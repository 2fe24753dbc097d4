//! Session presence snapshot.

use ajfses_core::auth::SessionPresence;

use crate::overlays::{OverlayRequest, Severity};

/// Result of one presence check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Cached user when a full credential pair is present.
    pub user: Option<String>,
}

impl SessionSnapshot {
    pub fn from_presence(presence: &SessionPresence<'_>) -> Self {
        Self {
            user: presence.current_user(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Overlay reporting this snapshot.
    pub fn status_request(&self) -> OverlayRequest {
        match &self.user {
            Some(user) => OverlayRequest::new(
                "Session",
                format!("Signed in as {user}"),
                Severity::Success,
            ),
            None => OverlayRequest::new("Session", "Not signed in", Severity::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use ajfses_core::auth::{AUTH_TOKEN_KEY, AUTH_USER_KEY};
    use ajfses_core::storage::{MemoryStorage, Storage};

    use super::*;

    #[test]
    fn test_snapshot_requires_both_fields() {
        let persistent = MemoryStorage::new().with(AUTH_TOKEN_KEY, "abc");
        let session = MemoryStorage::new().with(AUTH_USER_KEY, "ana");

        let token_only: [&dyn Storage; 1] = [&persistent];
        let snapshot = SessionSnapshot::from_presence(&SessionPresence::new(&token_only));
        assert!(!snapshot.is_authenticated());

        let both: [&dyn Storage; 2] = [&persistent, &session];
        let snapshot = SessionSnapshot::from_presence(&SessionPresence::new(&both));
        assert_eq!(snapshot.user.as_deref(), Some("ana"));
    }

    #[test]
    fn test_status_request_severity() {
        let signed_in = SessionSnapshot {
            user: Some("ana".to_string()),
        };
        let request = signed_in.status_request();
        assert_eq!(request.severity, Severity::Success);
        assert_eq!(request.message, "Signed in as ana");

        let request = SessionSnapshot::default().status_request();
        assert_eq!(request.severity, Severity::Error);
        assert_eq!(request.message, "Not signed in");
    }
}
