use super::*;

use crate::state::session::authenticate;
use crate::state::toast::ToastKind;

fn fresh() -> (SessionState, NavState, ToastState) {
    (SessionState::default(), NavState::default(), ToastState::default())
}

// =============================================================
// install_login
// =============================================================

#[test]
fn carrier_login_sets_identity_and_redirects_to_portal() {
    let (mut session, mut nav, mut toasts) = fresh();
    let outcome = authenticate("carrier@demo.com", "password").unwrap();

    install_login(&mut session, &mut nav, &mut toasts, outcome);

    assert!(session.is_carrier());
    assert_eq!(nav.current, View::CarrierPortal);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts.toasts[0].message, "Welcome back, John!");
}

#[test]
fn shipper_login_leaves_the_current_view_alone() {
    let (mut session, mut nav, mut toasts) = fresh();
    nav.navigate(View::Services);
    let outcome = authenticate("shipper@demo.com", "password").unwrap();

    install_login(&mut session, &mut nav, &mut toasts, outcome);

    assert!(session.is_authenticated());
    assert!(!session.is_carrier());
    assert_eq!(nav.current, View::Services);
    assert_eq!(toasts.toasts[0].message, "Welcome back, Sarah!");
}

// =============================================================
// clear_session
// =============================================================

#[test]
fn logout_clears_identity_and_returns_home() {
    let (mut session, mut nav, mut toasts) = fresh();
    let outcome = authenticate("carrier@demo.com", "password").unwrap();
    install_login(&mut session, &mut nav, &mut toasts, outcome);

    clear_session(&mut session, &mut nav, &mut toasts);

    assert!(session.user.is_none());
    assert_eq!(nav.current, View::Home);
    let last = toasts.toasts.last().unwrap();
    assert_eq!(last.kind, ToastKind::Success);
    assert_eq!(last.message, "Logged out successfully");
}

#[test]
fn logout_works_from_any_screen_and_closes_the_mobile_menu() {
    let (mut session, mut nav, mut toasts) = fresh();
    let outcome = authenticate("shipper@demo.com", "password").unwrap();
    install_login(&mut session, &mut nav, &mut toasts, outcome);
    nav.navigate(View::Tracking);
    nav.toggle_mobile_menu();

    clear_session(&mut session, &mut nav, &mut toasts);

    assert!(session.user.is_none());
    assert_eq!(nav.current, View::Home);
    assert!(!nav.mobile_menu_open);
}
