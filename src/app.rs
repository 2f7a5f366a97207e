//! Root application component, shared state wiring, and screen dispatch.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::login_modal::LoginModal;
use crate::components::toaster::Toaster;
use crate::pages::become_carrier::BecomeCarrierPage;
use crate::pages::carrier_portal::CarrierPortalPage;
use crate::pages::home::HomePage;
use crate::pages::load_board::LoadBoardPage;
use crate::pages::services::ServicesPage;
use crate::pages::tracking::TrackingPage;
use crate::state::nav::{NavState, View, screen_for};
use crate::state::session::{LoginOutcome, SessionState};
use crate::state::toast::ToastState;
use crate::util::browser;

/// Controls the login modal. Newtype so the signal gets its own context
/// entry instead of colliding with other boolean signals.
#[derive(Clone, Copy)]
pub struct LoginPrompt(pub RwSignal<bool>);

impl LoginPrompt {
    pub fn open(self) {
        self.0.set(true);
    }

    pub fn close(self) {
        self.0.set(false);
    }
}

/// Whether the window is scrolled past the home-header threshold.
#[derive(Clone, Copy)]
pub struct ScrollFlag(pub RwSignal<bool>);

/// Select a screen: update the router state, then reset the window scroll.
pub fn navigate(nav: RwSignal<NavState>, view: View) {
    nav.update(|state| state.navigate(view));
    browser::scroll_to_top();
}

/// State transition for a successful login: greeting toast, identity,
/// optional redirect. Signal-free so the composite is testable; the
/// scroll side effect stays in [`apply_login`].
fn install_login(
    session: &mut SessionState,
    nav: &mut NavState,
    toasts: &mut ToastState,
    outcome: LoginOutcome,
) {
    toasts.success(outcome.greeting);
    session.user = Some(outcome.identity);
    if let Some(view) = outcome.redirect {
        nav.navigate(view);
    }
}

/// State transition for logout: identity cleared, toast queued, router
/// target forced back to home.
fn clear_session(session: &mut SessionState, nav: &mut NavState, toasts: &mut ToastState) {
    session.user = None;
    toasts.success("Logged out successfully");
    nav.navigate(View::Home);
}

/// Install a successful login: greeting toast, identity, optional redirect.
pub fn apply_login(
    session: RwSignal<SessionState>,
    nav: RwSignal<NavState>,
    toasts: RwSignal<ToastState>,
    outcome: LoginOutcome,
) {
    let redirected = outcome.redirect.is_some();
    session.update(|session| {
        nav.update(|nav| {
            toasts.update(|toasts| install_login(session, nav, toasts, outcome));
        });
    });
    if redirected {
        browser::scroll_to_top();
    }
}

/// Clear the session and return to the home screen.
pub fn logout(
    session: RwSignal<SessionState>,
    nav: RwSignal<NavState>,
    toasts: RwSignal<ToastState>,
) {
    session.update(|session| {
        nav.update(|nav| {
            toasts.update(|toasts| clear_session(session, nav, toasts));
        });
    });
    browser::scroll_to_top();
}

/// Root application component.
///
/// Owns the session store, the view router, and the toast queue, and
/// provides all three via context. Rendering dispatch goes through
/// [`screen_for`], so the carrier portal silently renders as home when no
/// carrier identity is present — the selector itself is left alone.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let nav = RwSignal::new(NavState::default());
    let toasts = RwSignal::new(ToastState::default());
    let login_prompt = LoginPrompt(RwSignal::new(false));
    let scrolled = ScrollFlag(RwSignal::new(false));

    provide_context(session);
    provide_context(nav);
    provide_context(toasts);
    provide_context(login_prompt);
    provide_context(scrolled);

    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        scrolled.0.set(browser::is_scrolled(browser::scroll_offset()));
    });
    on_cleanup(move || scroll_handle.remove());

    let screen = move || screen_for(nav.get().current, session.get().user.as_ref());

    view! {
        <Title text="Third Eye Freight"/>

        <div class="app">
            <SiteHeader/>
            <main class="app__screen">
                {move || match screen() {
                    View::Home => view! { <HomePage/> }.into_any(),
                    View::LoadBoard => view! { <LoadBoardPage/> }.into_any(),
                    View::Services => view! { <ServicesPage/> }.into_any(),
                    View::Tracking => view! { <TrackingPage/> }.into_any(),
                    View::CarrierPortal => view! { <CarrierPortalPage/> }.into_any(),
                    View::BecomeCarrier => view! { <BecomeCarrierPage/> }.into_any(),
                }}
            </main>
            // The portal brings its own chrome; every public screen gets the footer.
            <Show when=move || screen() != View::CarrierPortal>
                <SiteFooter/>
            </Show>
            <Show when=move || login_prompt.0.get()>
                <LoginModal/>
            </Show>
            <Toaster/>
        </div>
    }
}
