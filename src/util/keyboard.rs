//! Keyboard activation for non-button controls.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Enter and Space activate a focused link or image the same way a click does.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// What a dropdown does with a key that reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownKey {
    Close,
    Toggle,
    /// Left to the focused child, so links inside the menu keep navigating.
    Ignore,
}

/// Escape closes from anywhere inside the dropdown. Activation keys toggle it
/// only when the trigger itself has focus, not when they bubble up from an
/// entry.
pub fn dropdown_key(key: &str, on_trigger: bool) -> DropdownKey {
    if key == "Escape" {
        DropdownKey::Close
    } else if on_trigger && is_activation_key(key) {
        DropdownKey::Toggle
    } else {
        DropdownKey::Ignore
    }
}

/// Wrap `action` as a `keydown` handler that fires on activation keys.
pub fn fire_on_enter<F>(action: F) -> impl Fn(leptos::ev::KeyboardEvent) + Send + Sync + 'static
where
    F: Fn() + Send + Sync + 'static,
{
    move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            action();
        }
    }
}
