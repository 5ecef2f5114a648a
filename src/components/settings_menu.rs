//! Settings ("More...") dropdown.

use leptos::prelude::*;

use crate::app::ChromeContext;
use crate::components::dropdown::DropdownMenuItem;
use crate::components::help_menu::DocItemView;
use crate::components::menu_item::MenuItem;
use crate::state::settings_menu::{
    SettingsEntry, SettingsMenuModel, SettingsMenuPush, SettingsMenuState, settings_entries,
};
use crate::state::view_model::{Transition, ViewModel};

/// Project settings dropdown; rebuilt only when `high_contrast` flips.
#[component]
pub fn SettingsMenu(#[prop(into)] high_contrast: Signal<bool>) -> impl IntoView {
    let ctx = expect_context::<ChromeContext>();
    let state = RwSignal::new(SettingsMenuState { high_contrast: high_contrast.get_untracked() });

    Effect::new(move || {
        let push = SettingsMenuPush { high_contrast: Some(high_contrast.get()) };
        let Transition { next, rerender } = SettingsMenuModel::compute_next_state(&state.get_untracked(), &push);
        if rerender {
            state.set(next);
        }
    });

    let entries = move || {
        settings_entries(&ctx.config, state.get())
            .into_iter()
            .map(entry_view)
            .collect_view()
    };

    view! {
        <DropdownMenuItem icon="setting large" title="More..." class="more-dropdown-menuitem">
            {entries}
        </DropdownMenuItem>
    }
}

fn entry_view(entry: SettingsEntry) -> AnyView {
    match entry {
        SettingsEntry::Action { icon, label, action } => view! {
            <MenuItem icon=icon.unwrap_or_default() text=label action=action tabindex=-1/>
        }
        .into_any(),
        SettingsEntry::Link { label, href } => view! {
            <a class="ui item" href=href role="menuitem" title=label target="_blank" rel="noopener" tabindex="-1">
                {label}
            </a>
        }
        .into_any(),
        SettingsEntry::Divider { mobile_only } => {
            let class = if mobile_only { "ui mobile only divider" } else { "ui divider" };
            view! { <div class=class></div> }.into_any()
        }
        SettingsEntry::MobileDoc(item) => view! { <DocItemView item=item class="mobile only"/> }.into_any(),
    }
}
