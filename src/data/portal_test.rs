use super::*;

// =============================================================
// Portal fixtures
// =============================================================

#[test]
fn monthly_earnings_cover_six_months() {
    assert_eq!(MONTHLY_EARNINGS.len(), 6);
}

#[test]
fn max_monthly_earning_matches_table() {
    let max = MONTHLY_EARNINGS
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap();
    assert_eq!(max, MAX_MONTHLY_EARNING);
}

#[test]
fn completed_load_ids_are_unique() {
    for (i, a) in COMPLETED_LOADS.iter().enumerate() {
        for b in &COMPLETED_LOADS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn ratings_fit_a_five_star_scale() {
    assert!(COMPLETED_LOADS
        .iter()
        .all(|load| (1..=5).contains(&load.rating)));
}

#[test]
fn active_load_progress_is_a_percentage() {
    assert!(ACTIVE_LOADS.iter().all(|load| load.progress <= 100));
}

#[test]
fn invoices_are_all_paid() {
    assert!(INVOICES.iter().all(|invoice| invoice.status == "Paid"));
}
