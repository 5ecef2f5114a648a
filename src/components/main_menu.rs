//! Main menu bar: branding, editor mode switch, help/settings dropdowns.
//!
//! ARCHITECTURE
//! ============
//! The bar's layout is recomputed from host state on every change through a
//! memo. Dropdowns sit behind `Show` so they stay mounted (and keep their own
//! update rules) while the rest of the bar re-renders around them.

use leptos::prelude::*;

use crate::app::ChromeContext;
use crate::components::help_menu::HelpMenu;
use crate::components::menu_item::MenuItem;
use crate::components::settings_menu::SettingsMenu;
use crate::host::HostState;
use crate::state::actions::MenuAction;
use crate::state::main_menu::{ActiveViews, Branding, LogoImages, ModeSwitch, OrganizationLink, RightCluster, layout};
use crate::util::encoding::to_data_uri;

/// Top menu bar. Renders an empty container on the home screen.
#[component]
pub fn MainMenu() -> impl IntoView {
    let ctx = expect_context::<ChromeContext>();
    let host_state = expect_context::<RwSignal<HostState>>();

    let menu = {
        let ctx = ctx.clone();
        Memo::new(move |_| {
            let state = host_state.get();
            layout(&state, ActiveViews::query(ctx.host.as_ref()), &ctx.config)
        })
    };

    let shown = move || menu.with(Option::is_some);
    let right = move |pick: fn(&RightCluster) -> bool| menu.with(|m| m.as_ref().is_some_and(|m| pick(&m.right)));
    let bar_class = move || {
        let inverted = menu.with(|m| m.as_ref().is_some_and(|m| m.inverted));
        format!("ui borderless fixed {}menu", if inverted { "inverted " } else { "" })
    };
    let high_contrast = Signal::derive(move || host_state.with(|s| s.high_contrast));

    let branding = {
        let ctx = ctx.clone();
        move || menu.with(|m| m.as_ref().map(|m| m.branding.clone())).map(|b| branding_view(&ctx, b))
    };
    let mode_switch = move || menu.with(|m| m.as_ref().and_then(|m| m.mode_switch)).map(mode_switch_view);
    let organization = {
        let ctx = ctx.clone();
        move || {
            menu.with(|m| m.as_ref().and_then(|m| m.right.organization.clone()))
                .map(|org| organization_view(&ctx, org))
        }
    };

    view! {
        <Show when=shown fallback=|| view! { <div></div> }>
            <div id="mainmenu" class=bar_class role="menubar" aria-label="Main menu">
                {branding.clone()}
                {mode_switch}
                <div class="right menu">
                    <Show when=move || right(|r| r.help)>
                        <HelpMenu/>
                    </Show>
                    <Show when=move || right(|r| r.settings)>
                        <SettingsMenu high_contrast=high_contrast/>
                    </Show>
                    <Show when=move || right(|r| r.edit)>
                        <MenuItem icon="external" text="Edit" text_class="mobile hide" action=MenuAction::LaunchFullEditor/>
                    </Show>
                    <Show when=move || right(|r| r.exit_tutorial)>
                        <MenuItem
                            class="exit-tutorial-btn"
                            icon="external"
                            text="Exit tutorial"
                            text_class="landscape only"
                            action=MenuAction::ExitTutorial
                        />
                    </Show>
                    {organization.clone()}
                </div>
            </div>
        </Show>
    }
}

fn branding_view(ctx: &ChromeContext, branding: Branding) -> AnyView {
    match branding {
        Branding::Sandbox { logo, board_name } => view! {
            <div class="left menu">
                <span id="logo" class="ui item logo">
                    <img
                        class="ui mini image"
                        src=logo.as_deref().map(to_data_uri).unwrap_or_default()
                        tabindex="0"
                        alt=format!("{board_name} Logo")
                        on:click=ctx.on_click(MenuAction::LaunchFullEditor)
                        on:keydown=ctx.on_key(MenuAction::LaunchFullEditor)
                    />
                </span>
            </div>
        }
        .into_any(),
        Branding::Full { logo, board_name, beta_url, home, share, tutorial_name } => {
            let beta = beta_url.map(|url| {
                view! { <a href=url class="ui red mini corner top left attached label betalabel" role="menuitem">"Beta"</a> }
            });
            let home = home.then(|| {
                view! {
                    <MenuItem
                        class="icon openproject"
                        icon="home large"
                        text="Home"
                        text_class="landscape only"
                        aria_label="Home screen"
                        action=MenuAction::GoHome
                    />
                }
            });
            let share = share.then(|| {
                view! {
                    <MenuItem
                        class="icon shareproject"
                        icon="share alternate large"
                        text="Share"
                        text_class="widedesktop only"
                        aria_label="Share Project"
                        action=MenuAction::Share
                    />
                }
            });
            let tutorial = tutorial_name.map(|name| {
                view! {
                    <div class="ui item tutorialname" tabindex="-1">
                        <span class="ui text landscape only">{name}</span>
                    </div>
                }
            });

            view! {
                <div class="left menu">
                    <a
                        aria-label=format!("{board_name} Logo")
                        role="menuitem"
                        class="ui item logo brand"
                        tabindex="0"
                        on:click=ctx.on_click(MenuAction::BrandClick)
                        on:keydown=ctx.on_key(MenuAction::BrandClick)
                    >
                        {logo_view(&logo, &board_name)}
                    </a>
                    {beta}
                    {home}
                    {share}
                    {tutorial}
                </div>
            }
            .into_any()
        }
    }
}

fn mode_switch_view(switch: ModeSwitch) -> impl IntoView + use<> {
    let open_javascript = MenuAction::OpenJavaScript { give_focus: false };
    let simulator = switch.simulator.map(|sim| {
        view! {
            <MenuItem
                class="sim-menuitem thin portrait only"
                icon=sim.icon.as_str()
                text="Simulator"
                text_class="landscape only"
                title=sim.tooltip
                active=sim.active
                action=MenuAction::OpenSimView
            />
        }
    });

    view! {
        <div class="ui item link editor-menuitem">
            <div class="ui grid padded">
                {simulator}
                <MenuItem
                    class="blocks-menuitem"
                    icon="xicon blocks"
                    text="Blocks"
                    text_class="landscape only"
                    title="Convert code to Blocks"
                    active=switch.blocks_active
                    action=MenuAction::OpenBlocks
                />
                <MenuItem
                    class="javascript-menuitem"
                    icon="xicon js"
                    text="JavaScript"
                    text_class="landscape only"
                    title="Convert code to JavaScript"
                    active=switch.javascript_active
                    action=open_javascript
                />
                <div class="ui item toggle"></div>
            </div>
        </div>
    }
}

fn organization_view(ctx: &ChromeContext, org: OrganizationLink) -> impl IntoView + use<> {
    let name = org.name.unwrap_or_default();
    view! {
        <a
            href=org.url
            aria-label=format!("{name} Logo")
            role="menuitem"
            target="blank"
            rel="noopener"
            class="ui item logo organization"
            on:click=ctx.on_click(MenuAction::OrgClick)
        >
            {logo_view(&org.logo, &name)}
        </a>
    }
}

/// Landscape logo (or the name as text) plus an optional portrait variant.
fn logo_view(logo: &LogoImages, name: &str) -> impl IntoView + use<> {
    let alt = format!("{name} Logo");
    let main = match logo.main.as_deref().or(logo.portrait.as_deref()) {
        Some(src) => {
            let class = if logo.main.is_some() { "ui logo portrait hide" } else { "ui logo" };
            view! { <img class=class src=to_data_uri(src) alt=alt.clone()/> }.into_any()
        }
        None => view! { <span class="name">{name.to_owned()}</span> }.into_any(),
    };
    let portrait = logo
        .portrait
        .as_deref()
        .map(|src| view! { <img class="ui mini image portrait only" src=to_data_uri(src) alt=alt.clone()/> });
    (main, portrait)
}
