use super::*;

// =============================================================
// PortalTab
// =============================================================

#[test]
fn default_tab_is_dashboard() {
    assert_eq!(PortalTab::default(), PortalTab::Dashboard);
}

#[test]
fn all_lists_every_tab_once() {
    assert_eq!(PortalTab::ALL.len(), 7);
    for (i, a) in PortalTab::ALL.iter().enumerate() {
        for b in &PortalTab::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn tab_labels_are_distinct() {
    for (i, a) in PortalTab::ALL.iter().enumerate() {
        for b in &PortalTab::ALL[i + 1..] {
            assert_ne!(a.label(), b.label());
        }
    }
}

#[test]
fn dashboard_is_first_in_the_sidebar() {
    assert_eq!(PortalTab::ALL[0], PortalTab::Dashboard);
}
