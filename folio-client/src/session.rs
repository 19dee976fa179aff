//! Session state — a thin wrapper around the authentication endpoints.
//!
//! No local password or session-validation logic exists; this only tracks
//! the current user and keeps the bearer token in sync between the API
//! handle and the token store. Collaborators are passed in explicitly, so
//! there is no ambient singleton to initialize.

use folio_core::User;

use crate::api::{ApiError, GalleryApi};
use crate::token_store::TokenStore;

#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authenticated user, `None` when unauthenticated.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Startup session restore: if a token is on disk, try `/user` with it.
    /// Any failure silently clears the token and leaves the session
    /// unauthenticated; restore itself never fails.
    pub fn restore(&mut self, api: &mut dyn GalleryApi, tokens: &TokenStore) {
        let Some(token) = tokens.load() else {
            self.user = None;
            return;
        };

        api.set_token(Some(token));
        match api.current_user() {
            Ok(user) => self.user = Some(user),
            Err(_) => {
                let _ = tokens.clear();
                api.set_token(None);
                self.user = None;
            }
        }
    }

    /// Authenticate and persist the returned token for later calls.
    /// A rejected login leaves session and stored token unchanged.
    pub fn login(
        &mut self,
        api: &mut dyn GalleryApi,
        tokens: &TokenStore,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let response = api.login(email, password)?;
        tokens.save(&response.token)?;
        api.set_token(Some(response.token));
        self.user = Some(response.user.clone());
        Ok(response.user)
    }

    /// End the session. The local token and user are discarded even when
    /// the server call fails, so a dead token never lingers on disk.
    pub fn logout(&mut self, api: &mut dyn GalleryApi, tokens: &TokenStore) -> Result<(), ApiError> {
        let result = api.logout();
        let _ = tokens.clear();
        api.set_token(None);
        self.user = None;
        result
    }
}
