use super::*;

fn filled() -> CarrierApplication {
    CarrierApplication {
        company_name: "Acme Trucking LLC".into(),
        mc_number: "MC-445566".into(),
        contact_name: "Dana Lee".into(),
        phone: "(555) 867-5309".into(),
        email: "dispatch@acmetrucking.com".into(),
        equipment: EquipmentTypes::default(),
    }
}

// =============================================================
// required_complete
// =============================================================

#[test]
fn empty_draft_is_incomplete() {
    assert!(!CarrierApplication::default().required_complete());
}

#[test]
fn all_text_fields_filled_is_complete() {
    assert!(filled().required_complete());
}

#[test]
fn equipment_is_optional() {
    let mut draft = filled();
    draft.equipment = EquipmentTypes::default();
    assert!(draft.required_complete());

    draft.equipment.flatbed = true;
    assert!(draft.required_complete());
}

#[test]
fn whitespace_only_field_is_incomplete() {
    let mut draft = filled();
    draft.mc_number = "   ".into();
    assert!(!draft.required_complete());
}

#[test]
fn each_text_field_is_required() {
    for clear in [
        (|d: &mut CarrierApplication| d.company_name.clear()) as fn(&mut CarrierApplication),
        |d| d.mc_number.clear(),
        |d| d.contact_name.clear(),
        |d| d.phone.clear(),
        |d| d.email.clear(),
    ] {
        let mut draft = filled();
        clear(&mut draft);
        assert!(!draft.required_complete());
    }
}
