//! Effect handlers for the console runtime.
//!
//! Handlers perform I/O and return `UiEvent`s; they never mutate state.

use ajfses_core::auth::SessionPresence;
use ajfses_core::storage::Scopes;

use crate::events::UiEvent;
use crate::session::SessionSnapshot;

/// Reads the credential scopes off the UI thread.
pub async fn load_session(scopes: Scopes) -> SessionSnapshot {
    let result = tokio::task::spawn_blocking(move || {
        let providers = scopes.lookup_order();
        SessionSnapshot::from_presence(&SessionPresence::new(&providers))
    })
    .await;

    result.unwrap_or_else(|err| {
        tracing::warn!("session check task failed: {err}");
        SessionSnapshot::default()
    })
}

pub async fn check_session(scopes: Scopes) -> UiEvent {
    UiEvent::SessionChecked(load_session(scopes).await)
}

#[cfg(test)]
mod tests {
    use ajfses_core::auth::store_credentials;
    use ajfses_core::storage::{EnvStorage, FileStorage};
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_check_session_reads_persistent_scope() {
        let dir = tempdir().unwrap();
        let mut persistent = FileStorage::new(dir.path().join("storage.json"));
        store_credentials(&mut persistent, "abc", "ana").unwrap();
        let scopes = Scopes::new(persistent, EnvStorage::new("AJFSES_TEST_UNSET_"));

        match check_session(scopes).await {
            UiEvent::SessionChecked(snapshot) => assert_eq!(snapshot.user.as_deref(), Some("ana")),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
