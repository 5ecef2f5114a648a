//! Clickable menu entry bound to a [`MenuAction`].

use leptos::prelude::*;

use crate::app::ChromeContext;
use crate::state::actions::MenuAction;

/// Menu entry that dispatches `action` on click or Enter/Space.
#[component]
pub fn MenuItem(
    #[prop(into)] text: String,
    action: MenuAction,
    #[prop(optional, into)] icon: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] text_class: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] aria_label: String,
    #[prop(optional)] active: bool,
    #[prop(optional)] tabindex: Option<i32>,
) -> impl IntoView {
    let ctx = expect_context::<ChromeContext>();
    let on_click = ctx.on_click(action.clone());
    let on_key = ctx.on_key(action);

    let title = (!title.is_empty()).then_some(title);
    let aria_label = if aria_label.is_empty() { text.clone() } else { aria_label };
    let icon = (!icon.is_empty()).then(|| view! { <i class=format!("icon {icon}") aria-hidden="true"></i> });
    let label = (!text.is_empty()).then(|| view! { <span class=format!("ui text {text_class}")>{text}</span> });

    view! {
        <div
            class=format!("ui item {class}")
            class:active=active
            role="menuitem"
            title=title
            aria-label=aria_label
            tabindex=tabindex.unwrap_or(0).to_string()
            on:click=on_click
            on:keydown=on_key
        >
            {icon}
            {label}
        </div>
    }
}
