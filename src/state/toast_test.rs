use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_appends_with_message_and_kind() {
    let mut state = ToastState::default();
    state.success("Load booked successfully!");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].message, "Load booked successfully!");
}

#[test]
fn ids_are_unique_and_monotonic() {
    let mut state = ToastState::default();
    let a = state.success("a");
    let b = state.error("b");
    let c = state.info("c");
    assert!(a < b && b < c);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.success("a");
    let b = state.error("b");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.success("a");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.success("a");
    state.dismiss(a);
    let b = state.success("b");
    assert_ne!(a, b);
}

#[test]
fn kind_css_classes_are_distinct() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Info.css_class());
    assert_ne!(ToastKind::Error.css_class(), ToastKind::Info.css_class());
}
