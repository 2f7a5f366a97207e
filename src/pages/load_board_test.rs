use super::*;

// =============================================================
// filter_loads
// =============================================================

#[test]
fn empty_filters_show_everything() {
    assert_eq!(filter_loads(BOARD_LOADS, "", "", "all").len(), BOARD_LOADS.len());
}

#[test]
fn origin_filter_is_case_insensitive_substring() {
    let hits = filter_loads(BOARD_LOADS, "hOuStOn", "", "all");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].origin, "Houston, TX");
}

#[test]
fn destination_filter_narrows() {
    let hits = filter_loads(BOARD_LOADS, "", "portland", "all");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].destination, "Portland, OR");
}

#[test]
fn type_filter_is_exact() {
    let ftl = filter_loads(BOARD_LOADS, "", "", "FTL");
    let ltl = filter_loads(BOARD_LOADS, "", "", "LTL");
    assert_eq!(ftl.len() + ltl.len(), BOARD_LOADS.len());
    assert!(ftl.iter().all(|load| load.load_type.label() == "FTL"));
    assert!(ltl.iter().all(|load| load.load_type.label() == "LTL"));
}

#[test]
fn filters_combine_conjunctively() {
    let hits = filter_loads(BOARD_LOADS, "denver", "salt lake", "LTL");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 5);
}

#[test]
fn non_matching_filter_yields_empty() {
    assert!(filter_loads(BOARD_LOADS, "nowhere", "", "all").is_empty());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let hits = filter_loads(BOARD_LOADS, "  seattle  ", "", "all");
    assert_eq!(hits.len(), 1);
}
