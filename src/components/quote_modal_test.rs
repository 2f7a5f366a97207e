use super::*;

// =============================================================
// QuoteDraft required fields
// =============================================================

fn filled_draft() -> QuoteDraft {
    QuoteDraft {
        name: "John Smith".to_owned(),
        email: "john@company.com".to_owned(),
        phone: "(555) 000-0000".to_owned(),
        origin: "Los Angeles, CA".to_owned(),
        destination: "Phoenix, AZ".to_owned(),
        weight: String::new(),
        date: String::new(),
        message: String::new(),
    }
}

#[test]
fn empty_draft_is_incomplete() {
    assert!(!QuoteDraft::default().required_complete());
}

#[test]
fn all_required_fields_filled_is_complete() {
    assert!(filled_draft().required_complete());
}

#[test]
fn optional_fields_are_not_required() {
    let mut draft = filled_draft();
    draft.weight = "25,000".to_owned();
    draft.date = "2026-09-01".to_owned();
    draft.message = "Liftgate needed".to_owned();
    assert!(draft.required_complete());
}

#[test]
fn any_blank_required_field_blocks_completion() {
    for blank in ["name", "email", "phone", "origin", "destination"] {
        let mut draft = filled_draft();
        match blank {
            "name" => draft.name.clear(),
            "email" => draft.email.clear(),
            "phone" => draft.phone.clear(),
            "origin" => draft.origin.clear(),
            _ => draft.destination.clear(),
        }
        assert!(!draft.required_complete(), "blank {blank} should block");
    }
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut draft = filled_draft();
    draft.phone = "   ".to_owned();
    assert!(!draft.required_complete());
}

#[test]
fn default_draft_is_all_empty() {
    let draft = QuoteDraft::default();
    assert_eq!(draft, filled_draft_reset());
}

fn filled_draft_reset() -> QuoteDraft {
    // A submitted draft resets to Default; spelled out for the comparison.
    QuoteDraft {
        name: String::new(),
        email: String::new(),
        phone: String::new(),
        origin: String::new(),
        destination: String::new(),
        weight: String::new(),
        date: String::new(),
        message: String::new(),
    }
}
