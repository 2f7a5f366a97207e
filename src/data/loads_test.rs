use super::*;

// =============================================================
// Board load fixtures
// =============================================================

#[test]
fn board_has_six_loads() {
    assert_eq!(BOARD_LOADS.len(), 6);
}

#[test]
fn load_ids_are_unique() {
    for (i, a) in BOARD_LOADS.iter().enumerate() {
        for b in &BOARD_LOADS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn rates_are_positive() {
    assert!(BOARD_LOADS.iter().all(|load| load.rate > 0));
}

#[test]
fn load_type_labels() {
    assert_eq!(LoadType::Ftl.label(), "FTL");
    assert_eq!(LoadType::Ltl.label(), "LTL");
}
