use super::*;

// =============================================================
// Activation keys
// =============================================================

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(is_activation_key("Spacebar"));
}

#[test]
fn other_keys_do_not_activate() {
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("Escape"));
    assert!(!is_activation_key("e"));
}

// =============================================================
// Dropdown keys
// =============================================================

#[test]
fn activation_on_trigger_toggles_dropdown() {
    assert_eq!(dropdown_key("Enter", true), DropdownKey::Toggle);
    assert_eq!(dropdown_key(" ", true), DropdownKey::Toggle);
}

#[test]
fn activation_bubbling_from_entry_is_left_alone() {
    assert_eq!(dropdown_key("Enter", false), DropdownKey::Ignore);
    assert_eq!(dropdown_key(" ", false), DropdownKey::Ignore);
}

#[test]
fn escape_closes_from_anywhere() {
    assert_eq!(dropdown_key("Escape", true), DropdownKey::Close);
    assert_eq!(dropdown_key("Escape", false), DropdownKey::Close);
}

#[test]
fn other_keys_are_ignored_by_dropdown() {
    assert_eq!(dropdown_key("Tab", true), DropdownKey::Ignore);
    assert_eq!(dropdown_key("ArrowDown", false), DropdownKey::Ignore);
}
