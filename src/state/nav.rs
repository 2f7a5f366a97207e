//! In-memory view router.
//!
//! DESIGN
//! ======
//! Navigation is a plain enum selector, not a URL router — the app has no
//! server-rendered routes, history stack, or deep links. The router itself
//! is policy-free: it never inspects the session. Role gating happens at
//! render time in [`screen_for`], which substitutes the home screen when
//! the carrier portal is requested without a carrier identity. The selector
//! is never silently corrected; only the rendered output is.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::{Identity, Role};

/// Top-level screens. A closed enumeration, so rendering dispatch is total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    LoadBoard,
    Services,
    Tracking,
    CarrierPortal,
    BecomeCarrier,
}

impl View {
    /// Human-readable label used by the header, mobile menu, and footer.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::LoadBoard => "Load Board",
            View::Services => "Services",
            View::Tracking => "Live Tracking",
            View::CarrierPortal => "Carrier Portal",
            View::BecomeCarrier => "Carrier Setup",
        }
    }
}

/// Navigation state: the selected screen plus the mobile menu flag.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub current: View,
    pub mobile_menu_open: bool,
}

impl NavState {
    /// Select a screen and collapse the mobile menu.
    ///
    /// Scroll reset is a browser side effect and lives in the component
    /// wiring (`app::navigate`), not here.
    pub fn navigate(&mut self, view: View) {
        self.current = view;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

/// Resolve the screen to render for a selected view and the current user.
///
/// The carrier portal renders only for a carrier identity; any other
/// request for it falls back to the home screen. Every other selector
/// renders itself.
pub fn screen_for(selected: View, user: Option<&Identity>) -> View {
    match selected {
        View::CarrierPortal => match user {
            Some(identity) if identity.role == Role::Carrier => View::CarrierPortal,
            _ => View::Home,
        },
        other => other,
    }
}
