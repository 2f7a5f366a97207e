use super::*;
use crate::state::session::authenticate;

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_default_is_home_with_menu_closed() {
    let nav = NavState::default();
    assert_eq!(nav.current, View::Home);
    assert!(!nav.mobile_menu_open);
}

#[test]
fn navigate_sets_current_view() {
    let mut nav = NavState::default();
    nav.navigate(View::LoadBoard);
    assert_eq!(nav.current, View::LoadBoard);
}

#[test]
fn navigate_closes_open_mobile_menu() {
    let mut nav = NavState::default();
    nav.toggle_mobile_menu();
    assert!(nav.mobile_menu_open);
    nav.navigate(View::Services);
    assert!(!nav.mobile_menu_open);
}

#[test]
fn navigate_never_validates_against_role() {
    // The router is policy-free: selecting the portal while logged out is
    // allowed. Substitution happens in screen_for.
    let mut nav = NavState::default();
    nav.navigate(View::CarrierPortal);
    assert_eq!(nav.current, View::CarrierPortal);
}

#[test]
fn toggle_mobile_menu_flips_flag() {
    let mut nav = NavState::default();
    nav.toggle_mobile_menu();
    assert!(nav.mobile_menu_open);
    nav.toggle_mobile_menu();
    assert!(!nav.mobile_menu_open);
}

// =============================================================
// screen_for: role-gated rendering substitution
// =============================================================

#[test]
fn portal_without_identity_renders_home() {
    assert_eq!(screen_for(View::CarrierPortal, None), View::Home);
}

#[test]
fn portal_with_shipper_identity_renders_home() {
    let shipper = authenticate("shipper@demo.com", "password").unwrap().identity;
    assert_eq!(screen_for(View::CarrierPortal, Some(&shipper)), View::Home);
}

#[test]
fn portal_with_carrier_identity_renders_portal() {
    let carrier = authenticate("carrier@demo.com", "password").unwrap().identity;
    assert_eq!(
        screen_for(View::CarrierPortal, Some(&carrier)),
        View::CarrierPortal
    );
}

#[test]
fn ungated_views_render_themselves_regardless_of_identity() {
    let carrier = authenticate("carrier@demo.com", "password").unwrap().identity;
    for view in [
        View::Home,
        View::LoadBoard,
        View::Services,
        View::Tracking,
        View::BecomeCarrier,
    ] {
        assert_eq!(screen_for(view, None), view);
        assert_eq!(screen_for(view, Some(&carrier)), view);
    }
}

// =============================================================
// View labels
// =============================================================

#[test]
fn view_labels_are_distinct() {
    let views = [
        View::Home,
        View::LoadBoard,
        View::Services,
        View::Tracking,
        View::CarrierPortal,
        View::BecomeCarrier,
    ];
    for (i, a) in views.iter().enumerate() {
        for (j, b) in views.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
