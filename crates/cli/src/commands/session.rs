//! Session commands: login, logout, status.

use fairstore_client::{Result, SessionController};
use fairstore_core::NavState;

/// Credentialed login; persists the token and login flag on success.
pub async fn login(
    controller: &mut SessionController,
    username: &str,
    password: &str,
) -> Result<()> {
    controller.login(username, password).await?;
    println!("Logged in as {username}.");
    Ok(())
}

/// Clear the persisted session.
pub async fn logout(controller: &mut SessionController) -> Result<()> {
    controller.logout().await?;
    println!("Logged out.");
    Ok(())
}

/// Print the current session and navigation state.
pub fn status(controller: &SessionController) {
    match controller.nav_state() {
        NavState::Unknown => println!("Session not loaded."),
        NavState::Auth => println!("Not logged in."),
        NavState::Authenticated => {
            let guest = controller.session().is_some_and(|s| s.is_guest);
            if guest {
                println!("Browsing as guest (not persisted).");
            } else {
                println!("Logged in.");
            }
        }
    }
}
