use std::sync::{Arc, RwLock};

/// Single source of truth for the bearer token.
///
/// The token is held in memory only, so its lifetime is the process;
/// closing the application ends the session. `get`/`set`/`clear` are the
/// whole contract; nothing else reads or writes the token.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub fn set(&self, token: String) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    /// Token presence is the whole navigation guard.
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_round_trip() {
        let session = SessionStore::new();
        assert!(!session.is_authenticated());

        session.set("abc123".to_string());
        assert_eq!(session.get().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn clones_share_the_same_token() {
        let session = SessionStore::new();
        let other = session.clone();
        session.set("abc123".to_string());
        assert_eq!(other.get().as_deref(), Some("abc123"));
    }
}
