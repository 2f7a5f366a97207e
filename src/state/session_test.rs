use super::*;

// =============================================================
// authenticate: demo credential matrix
// =============================================================

#[test]
fn carrier_demo_account_logs_in_with_carrier_role() {
    let outcome = authenticate("carrier@demo.com", "password").unwrap();
    assert_eq!(outcome.identity.role, Role::Carrier);
    assert_eq!(outcome.identity.display_name, "John Carrier");
    assert_eq!(outcome.identity.avatar_initials, "JC");
    assert_eq!(outcome.identity.email, "carrier@demo.com");
}

#[test]
fn carrier_login_redirects_to_carrier_portal() {
    let outcome = authenticate("carrier@demo.com", "password").unwrap();
    assert_eq!(outcome.redirect, Some(View::CarrierPortal));
}

#[test]
fn shipper_demo_account_logs_in_with_shipper_role() {
    let outcome = authenticate("shipper@demo.com", "password").unwrap();
    assert_eq!(outcome.identity.role, Role::Shipper);
    assert_eq!(outcome.identity.display_name, "Sarah Shipper");
    assert_eq!(outcome.identity.avatar_initials, "SS");
}

#[test]
fn shipper_login_has_no_redirect() {
    let outcome = authenticate("shipper@demo.com", "password").unwrap();
    assert_eq!(outcome.redirect, None);
}

#[test]
fn login_greetings_use_first_names() {
    assert_eq!(
        authenticate("carrier@demo.com", "password").unwrap().greeting,
        "Welcome back, John!"
    );
    assert_eq!(
        authenticate("shipper@demo.com", "password").unwrap().greeting,
        "Welcome back, Sarah!"
    );
}

#[test]
fn wrong_password_fails_for_known_email() {
    assert_eq!(
        authenticate("carrier@demo.com", "hunter2"),
        Err(LoginError::InvalidCredentials)
    );
}

#[test]
fn unknown_email_fails_even_with_demo_password() {
    assert_eq!(
        authenticate("someone@example.com", "password"),
        Err(LoginError::InvalidCredentials)
    );
}

#[test]
fn empty_credentials_fail() {
    assert_eq!(authenticate("", ""), Err(LoginError::InvalidCredentials));
}

#[test]
fn email_comparison_is_exact() {
    // No case folding or trimming; the demo accounts are literal pairs.
    assert!(authenticate("Carrier@Demo.com", "password").is_err());
    assert!(authenticate(" carrier@demo.com", "password").is_err());
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let session = SessionState::default();
    assert!(session.user.is_none());
    assert!(!session.is_authenticated());
    assert!(!session.is_carrier());
}

#[test]
fn session_with_carrier_identity_is_carrier() {
    let outcome = authenticate("carrier@demo.com", "password").unwrap();
    let session = SessionState {
        user: Some(outcome.identity),
    };
    assert!(session.is_authenticated());
    assert!(session.is_carrier());
}

#[test]
fn session_with_shipper_identity_is_not_carrier() {
    let outcome = authenticate("shipper@demo.com", "password").unwrap();
    let session = SessionState {
        user: Some(outcome.identity),
    };
    assert!(session.is_authenticated());
    assert!(!session.is_carrier());
}

#[test]
fn login_error_message_points_at_demo_accounts() {
    assert_eq!(
        LoginError::InvalidCredentials.to_string(),
        "Invalid credentials. Try the demo accounts above."
    );
}
