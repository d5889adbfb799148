//! Sign-in gate.
//!
//! There is no credential check: signing in or registering with any input
//! opens the dashboard, logging out closes it.

use super::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn sign_in(&mut self) {
        self.authenticated = true;
    }

    pub fn register(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

/// Which button of the sign-in overlay was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthIntent {
    /// Form submit (button or Enter key)
    SignIn,
    Register,
}

impl From<AuthIntent> for Action {
    fn from(intent: AuthIntent) -> Self {
        match intent {
            AuthIntent::SignIn => Action::SignIn,
            AuthIntent::Register => Action::Register,
        }
    }
}
