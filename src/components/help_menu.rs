//! Help dropdown listing the theme's documentation entries.
//!
//! The entries are read once when the dropdown mounts and nothing in it is
//! reactive, so host state changes never re-render it.

use leptos::prelude::*;

use crate::app::ChromeContext;
use crate::components::dropdown::DropdownMenuItem;
use crate::components::menu_item::MenuItem;
use crate::state::help_menu::{DocItem, DocItemTarget, doc_items};

/// Help ("?") dropdown.
#[component]
pub fn HelpMenu() -> impl IntoView {
    let ctx = expect_context::<ChromeContext>();
    let items = doc_items(&ctx.config.theme.doc_menu);

    view! {
        <DropdownMenuItem icon="help circle large" title="Help" class="mobile hide help-dropdown-menuitem">
            {items.into_iter().map(|item| view! { <DocItemView item=item/> }).collect_view()}
        </DropdownMenuItem>
    }
}

/// One documentation entry: a host action for tutorials and docs pages, a
/// plain link for external pages.
#[component]
pub fn DocItemView(item: DocItem, #[prop(optional, into)] class: String) -> impl IntoView {
    if let Some(action) = item.action() {
        return view! { <MenuItem text=item.name class=class action=action/> }.into_any();
    }
    let href = match item.target {
        DocItemTarget::External(href) => href,
        DocItemTarget::Tutorial(path) | DocItemTarget::Docs(path) => path,
    };
    let name = item.name;
    let (label, title) = (name.clone(), name.clone());
    view! {
        <a
            role="menuitem"
            aria-label=name
            title=title
            class=format!("ui item link {class}")
            href=href
            target="docs"
        >
            {label}
        </a>
    }
    .into_any()
}
