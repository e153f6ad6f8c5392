//! Session state and the navigation state machine.
//!
//! A session is authenticated-for-navigation when it is either credentialed
//! (`is_logged_in`, token persisted locally) or a guest (session-only,
//! dropped on relaunch). The navigation machine gates which screen group a
//! front end shows: `Unknown` before the session store read resolves, then
//! `Auth` or `Authenticated`.

use secrecy::SecretString;

/// Which screen group the front end should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Session store read has not resolved yet.
    Unknown,
    /// Login / guest entry screens.
    Auth,
    /// Catalog, cart, and profile screens.
    Authenticated,
}

/// In-memory session state.
///
/// Only `token` and `is_logged_in` survive a restart; `is_guest` lives and
/// dies with the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Opaque login token from the auth endpoint, if credentialed.
    pub token: Option<SecretString>,
    /// Credentialed login flag; persisted.
    pub is_logged_in: bool,
    /// Guest flag; never persisted.
    pub is_guest: bool,
}

impl Session {
    /// A fresh session with no authentication at all.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            token: None,
            is_logged_in: false,
            is_guest: false,
        }
    }

    /// Whether this session may see the authenticated screen group.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_logged_in || self.is_guest
    }

    /// Navigation state for a resolved session.
    #[must_use]
    pub const fn nav_state(&self) -> NavState {
        if self.is_authenticated() {
            NavState::Authenticated
        } else {
            NavState::Auth
        }
    }

    /// Credentialed login: store the token and set the persisted flag.
    pub fn log_in(&mut self, token: SecretString) {
        self.token = Some(token);
        self.is_logged_in = true;
    }

    /// Guest login: authenticated for navigation, nothing persisted.
    pub const fn log_in_as_guest(&mut self) {
        self.is_guest = true;
    }

    /// Logout: clears the token and both flags.
    pub fn log_out(&mut self) {
        self.token = None;
        self.is_logged_in = false;
        self.is_guest = false;
    }
}
