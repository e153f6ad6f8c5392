//! Session persistence and the navigation/session controller.
//!
//! The controller is the injectable session-context object: front ends read
//! navigation state from it and drive login/logout through it instead of
//! threading flags around. It owns the in-memory [`Session`] and keeps the
//! [`SessionStore`] in sync with the persistable part of it.

mod store;

pub use store::{SessionStore, keys};

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use fairstore_core::{NavState, Session};

use crate::api::AuthClient;
use crate::error::Result;

/// Top-level session state machine.
///
/// Starts in [`NavState::Unknown`] until [`load`](Self::load) resolves the
/// persisted state; thereafter reports [`NavState::Auth`] or
/// [`NavState::Authenticated`]. Guest logins flip the in-memory flag only,
/// so a relaunch lands back on the auth screens - preserved behavior.
pub struct SessionController {
    auth: AuthClient,
    store: SessionStore,
    session: Option<Session>,
}

impl SessionController {
    /// Create a controller over an auth client and a session store.
    #[must_use]
    pub const fn new(auth: AuthClient, store: SessionStore) -> Self {
        Self {
            auth,
            store,
            session: None,
        }
    }

    /// Which screen group should be visible right now.
    #[must_use]
    pub fn nav_state(&self) -> NavState {
        self.session
            .as_ref()
            .map_or(NavState::Unknown, Session::nav_state)
    }

    /// The resolved session, if [`load`](Self::load) has run.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Resolve the session from the persisted store.
    ///
    /// Only the `isLoggedIn` flag decides authentication; a stray token
    /// without the flag does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<NavState> {
        let token = self.store.get_item(keys::TOKEN).await?;
        let logged_in = self.store.get_item(keys::IS_LOGGED_IN).await?;

        let mut session = Session::anonymous();
        session.is_logged_in = logged_in.as_deref() == Some("true");
        session.token = token.map(SecretString::from);

        self.session = Some(session);
        Ok(self.nav_state())
    }

    /// Credentialed login: authenticate upstream, then persist token + flag.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty credentials (no network call),
    /// the server's message on rejected credentials, or a persistence error
    /// if the store cannot be written.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let token = self.auth.login(username, password).await?;

        self.store.set_item(keys::TOKEN, token.expose_secret()).await?;
        self.store.set_item(keys::IS_LOGGED_IN, "true").await?;

        self.session
            .get_or_insert_with(Session::anonymous)
            .log_in(token);
        Ok(())
    }

    /// Guest login: authenticated for navigation, nothing persisted.
    pub fn login_as_guest(&mut self) {
        self.session
            .get_or_insert_with(Session::anonymous)
            .log_in_as_guest();
    }

    /// Logout: clear the persisted token and flag, drop the guest flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<()> {
        self.store.remove_item(keys::TOKEN).await?;
        self.store.remove_item(keys::USER_DETAILS).await?;
        self.store.set_item(keys::IS_LOGGED_IN, "false").await?;

        self.session
            .get_or_insert_with(Session::anonymous)
            .log_out();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::FairstoreConfig;

    fn controller() -> (SessionController, TempDir) {
        // Auth client pointed at the discard port; these tests never log in
        // over the network.
        let config = FairstoreConfig::with_api_url("http://127.0.0.1:9").expect("valid url");
        let dir = tempfile::tempdir().expect("temp dir");
        let controller =
            SessionController::new(AuthClient::new(&config), SessionStore::new(dir.path()));
        (controller, dir)
    }

    #[tokio::test]
    async fn test_starts_unknown_until_loaded() {
        let (mut controller, _dir) = controller();
        assert_eq!(controller.nav_state(), NavState::Unknown);

        let state = controller.load().await.expect("load");
        assert_eq!(state, NavState::Auth);
    }

    #[tokio::test]
    async fn test_guest_login_is_not_persisted() {
        let (mut controller, dir) = controller();
        controller.load().await.expect("load");
        controller.login_as_guest();
        assert_eq!(controller.nav_state(), NavState::Authenticated);

        // A relaunch (fresh controller over the same store) is back at Auth.
        let config = FairstoreConfig::with_api_url("http://127.0.0.1:9").expect("valid url");
        let mut relaunched =
            SessionController::new(AuthClient::new(&config), SessionStore::new(dir.path()));
        let state = relaunched.load().await.expect("load");
        assert_eq!(state, NavState::Auth);
    }

    #[tokio::test]
    async fn test_persisted_login_survives_relaunch() {
        let (mut controller, dir) = controller();
        // Simulate a prior credentialed login by seeding the store directly.
        let store = SessionStore::new(dir.path());
        store.set_item(keys::TOKEN, "opaque").await.expect("seed");
        store.set_item(keys::IS_LOGGED_IN, "true").await.expect("seed");

        let state = controller.load().await.expect("load");
        assert_eq!(state, NavState::Authenticated);
        assert!(controller.session().is_some_and(|s| s.is_logged_in));
    }

    #[tokio::test]
    async fn test_token_without_flag_stays_unauthenticated() {
        let (mut controller, dir) = controller();
        let store = SessionStore::new(dir.path());
        store.set_item(keys::TOKEN, "stale").await.expect("seed");

        let state = controller.load().await.expect("load");
        assert_eq!(state, NavState::Auth);
    }

    #[tokio::test]
    async fn test_logout_clears_store_and_session() {
        let (mut controller, dir) = controller();
        let store = SessionStore::new(dir.path());
        store.set_item(keys::TOKEN, "opaque").await.expect("seed");
        store.set_item(keys::IS_LOGGED_IN, "true").await.expect("seed");
        store.set_item(keys::USER_DETAILS, "{}").await.expect("seed");

        controller.load().await.expect("load");
        controller.logout().await.expect("logout");

        assert_eq!(controller.nav_state(), NavState::Auth);
        assert_eq!(store.get_item(keys::TOKEN).await.expect("read"), None);
        assert_eq!(store.get_item(keys::USER_DETAILS).await.expect("read"), None);
        assert_eq!(
            store.get_item(keys::IS_LOGGED_IN).await.expect("read"),
            Some("false".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_with_empty_password_is_local_failure() {
        let (mut controller, _dir) = controller();
        controller.load().await.expect("load");

        let err = controller
            .login("mor_2314", "")
            .await
            .expect_err("must fail");
        assert!(matches!(err, crate::error::StoreError::Validation(_)));
        assert_eq!(controller.nav_state(), NavState::Auth);
    }
}
