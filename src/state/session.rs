//! Demo-account session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the header (avatar chip vs. sign-in button), the footer (gated
//! carrier-portal link), and the rendering dispatch (role gating). Written
//! only by the login modal and the sign-out buttons, through the helpers in
//! `app`.
//!
//! Credential checking is a literal comparison against two demo accounts.
//! It stands in for a real authentication service and must not be mistaken
//! for one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;
use thiserror::Error;

use crate::state::nav::View;

const DEMO_PASSWORD: &str = "password";
const CARRIER_EMAIL: &str = "carrier@demo.com";
const SHIPPER_EMAIL: &str = "shipper@demo.com";

/// Account role for a logged-in demo user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Role {
    Carrier,
    Shipper,
}

/// The in-memory record for a logged-in user. Lives for the session only;
/// a page reload discards it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: &'static str,
    pub display_name: &'static str,
    pub email: String,
    pub role: Role,
    pub avatar_initials: &'static str,
}

/// Session state holding the current identity, if any.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<Identity>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_carrier(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|identity| identity.role == Role::Carrier)
    }
}

/// Login failure. The only variant today, kept as an enum so the message
/// stays attached to the error rather than scattered across call sites.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid credentials. Try the demo accounts above.")]
    InvalidCredentials,
}

/// Result of a successful login: the identity to install, the greeting to
/// toast, and an optional screen to redirect to.
///
/// Only the carrier account redirects (to the portal). The shipper account
/// has no destination screen of its own; the current view stays put.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub identity: Identity,
    pub greeting: &'static str,
    pub redirect: Option<View>,
}

/// Classify a credential pair against the two demo accounts.
///
/// Pure: no state is touched. The app wiring applies the outcome.
pub fn authenticate(email: &str, password: &str) -> Result<LoginOutcome, LoginError> {
    if password != DEMO_PASSWORD {
        return Err(LoginError::InvalidCredentials);
    }
    match email {
        CARRIER_EMAIL => Ok(LoginOutcome {
            identity: Identity {
                id: "1",
                display_name: "John Carrier",
                email: email.to_owned(),
                role: Role::Carrier,
                avatar_initials: "JC",
            },
            greeting: "Welcome back, John!",
            redirect: Some(View::CarrierPortal),
        }),
        SHIPPER_EMAIL => Ok(LoginOutcome {
            identity: Identity {
                id: "2",
                display_name: "Sarah Shipper",
                email: email.to_owned(),
                role: Role::Shipper,
                avatar_initials: "SS",
            },
            greeting: "Welcome back, Sarah!",
            redirect: None,
        }),
        _ => Err(LoginError::InvalidCredentials),
    }
}
