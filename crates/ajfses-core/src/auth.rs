//! Client-side session presence check.
//!
//! Answers whether a cached credential pair exists. Nothing is validated
//! against the backend; this only looks at the storage scopes.

use crate::storage::{Storage, StorageMut};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const AUTH_USER_KEY: &str = "auth_user";

/// Presence check over storage scopes in priority order.
///
/// Each field is resolved independently: the token may come from one scope
/// and the user from another.
pub struct SessionPresence<'a> {
    providers: &'a [&'a dyn Storage],
}

impl<'a> SessionPresence<'a> {
    /// Providers are queried first to last (persistent first, then session).
    pub fn new(providers: &'a [&'a dyn Storage]) -> Self {
        Self { providers }
    }

    /// Returns the first non-empty value for `key`.
    ///
    /// Unreadable scopes are logged and skipped.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.providers
            .iter()
            .find_map(|provider| match provider.get(key) {
                Ok(value) => value.filter(|v| !v.is_empty()),
                Err(err) => {
                    tracing::warn!(scope = provider.scope(), key, "storage read failed: {err:#}");
                    None
                }
            })
    }

    pub fn is_authenticated(&self) -> bool {
        self.lookup(AUTH_TOKEN_KEY).is_some() && self.lookup(AUTH_USER_KEY).is_some()
    }

    /// Returns the cached user when a full credential pair is present.
    pub fn current_user(&self) -> Option<String> {
        if self.lookup(AUTH_TOKEN_KEY).is_some() {
            self.lookup(AUTH_USER_KEY)
        } else {
            None
        }
    }
}

/// Stores a credential pair in `storage`.
///
/// # Errors
/// Returns an error if the scope cannot be written.
pub fn store_credentials(
    storage: &mut dyn StorageMut,
    token: &str,
    user: &str,
) -> anyhow::Result<()> {
    storage.set(AUTH_TOKEN_KEY, token)?;
    storage.set(AUTH_USER_KEY, user)?;
    Ok(())
}

/// Removes the credential pair from `storage`.
///
/// # Errors
/// Returns an error if the scope cannot be written.
pub fn clear_credentials(storage: &mut dyn StorageMut) -> anyhow::Result<()> {
    storage.remove(AUTH_TOKEN_KEY)?;
    storage.remove(AUTH_USER_KEY)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::storage::{FileStorage, MemoryStorage, Storage};

    fn scope(token: Option<&str>, user: Option<&str>) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        if let Some(token) = token {
            storage = storage.with(AUTH_TOKEN_KEY, token);
        }
        if let Some(user) = user {
            storage = storage.with(AUTH_USER_KEY, user);
        }
        storage
    }

    #[test]
    fn test_presence_truth_table() {
        let cases = [
            // (persistent token, persistent user, session token, session user, expected)
            (Some("t"), Some("u"), None, None, true),
            (None, None, Some("t"), Some("u"), true),
            (Some("t"), None, None, Some("u"), true),
            (None, Some("u"), Some("t"), None, true),
            (None, None, None, None, false),
            (Some("t"), None, Some("t"), None, false),
            (None, Some("u"), None, Some("u"), false),
            (Some(""), Some("u"), Some(""), None, false),
        ];

        for (pt, pu, st, su, expected) in cases {
            let persistent = scope(pt, pu);
            let session = scope(st, su);
            let providers: [&dyn Storage; 2] = [&persistent, &session];
            let presence = SessionPresence::new(&providers);
            assert_eq!(
                presence.is_authenticated(),
                expected,
                "persistent=({pt:?},{pu:?}) session=({st:?},{su:?})"
            );
        }
    }

    #[test]
    fn test_persistent_scope_wins() {
        let persistent = scope(Some("p-token"), Some("ana"));
        let session = scope(Some("s-token"), Some("bruno"));
        let providers: [&dyn Storage; 2] = [&persistent, &session];
        let presence = SessionPresence::new(&providers);

        assert_eq!(presence.lookup(AUTH_TOKEN_KEY).as_deref(), Some("p-token"));
        assert_eq!(presence.current_user().as_deref(), Some("ana"));
    }

    #[test]
    fn test_empty_persistent_value_falls_back() {
        let persistent = scope(Some(""), Some(""));
        let session = scope(Some("s-token"), Some("bruno"));
        let providers: [&dyn Storage; 2] = [&persistent, &session];
        let presence = SessionPresence::new(&providers);

        assert_eq!(presence.current_user().as_deref(), Some("bruno"));
    }

    #[test]
    fn test_current_user_requires_token() {
        let persistent = scope(None, Some("ana"));
        let providers: [&dyn Storage; 1] = [&persistent];
        let presence = SessionPresence::new(&providers);
        assert_eq!(presence.current_user(), None);
    }

    #[test]
    fn test_unreadable_scope_is_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let persistent = FileStorage::new(&path);
        let session = scope(Some("t"), Some("u"));

        let providers: [&dyn Storage; 2] = [&persistent, &session];
        let presence = SessionPresence::new(&providers);
        assert!(presence.is_authenticated());
    }

    #[test]
    fn test_store_and_clear_credentials() {
        let mut storage = MemoryStorage::new();
        store_credentials(&mut storage, "t", "ana").unwrap();
        let providers: [&dyn Storage; 1] = [&storage];
        assert!(SessionPresence::new(&providers).is_authenticated());

        clear_credentials(&mut storage).unwrap();
        let providers: [&dyn Storage; 1] = [&storage];
        assert!(!SessionPresence::new(&providers).is_authenticated());
    }
}
