//! Dropdown container used by the help and settings menus.

use leptos::prelude::*;

use crate::util::keyboard::{DropdownKey, dropdown_key};

/// Icon button that shows its children as a menu while open.
///
/// Clicking an entry bubbles up and closes the menu again.
#[component]
pub fn DropdownMenuItem(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let aria_label = title.clone();
    let open = RwSignal::new(false);
    let toggle = move || open.update(|o| *o = !*o);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let on_trigger = ev.target() == ev.current_target();
        match dropdown_key(&ev.key(), on_trigger) {
            DropdownKey::Close => open.set(false),
            DropdownKey::Toggle => {
                ev.prevent_default();
                toggle();
            }
            DropdownKey::Ignore => {}
        }
    };

    view! {
        <div
            class=format!("ui dropdown item {class}")
            class:active=move || open.get()
            role="menuitem"
            title=title
            aria-label=aria_label
            aria-haspopup="true"
            aria-expanded=move || open.get().to_string()
            tabindex="0"
            on:click=move |_| toggle()
            on:keydown=on_keydown
        >
            <i class=format!("icon {icon}") aria-hidden="true"></i>
            <div class="menu" role="menu" class:visible=move || open.get()>
                {children()}
            </div>
        </div>
    }
}
