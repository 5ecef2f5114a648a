//! Layout decisions for the main menu bar.
//!
//! ARCHITECTURE
//! ============
//! [`layout`] turns the host snapshot, the host's active-view queries and the
//! config into a plain description of which controls exist. The component
//! renders that description verbatim and recomputes it on every host change.
//! The component holds it in a memo, so a push that yields an equal layout
//! touches no DOM.

#[cfg(test)]
#[path = "main_menu_test.rs"]
mod main_menu_test;

use crate::config::ChromeConfig;
use crate::host::{HostController, HostState};

/// Which editor views the host currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveViews {
    pub simulator: bool,
    pub blocks: bool,
    pub javascript: bool,
}

impl ActiveViews {
    pub fn query(host: &dyn HostController) -> Self {
        Self {
            simulator: host.is_embed_sim_active(),
            blocks: host.is_blocks_active(),
            javascript: host.is_javascript_active(),
        }
    }
}

/// Landscape and portrait logo sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogoImages {
    pub main: Option<String>,
    pub portrait: Option<String>,
}

/// Left side of the bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Branding {
    /// Embedded sandbox: a lone logo that opens the full editor.
    Sandbox { logo: Option<String>, board_name: String },
    Full {
        logo: LogoImages,
        board_name: String,
        beta_url: Option<String>,
        home: bool,
        share: bool,
        /// Replaces home and share while a tutorial runs.
        tutorial_name: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimIcon {
    Play,
    Stop,
}

impl SimIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Stop => "stop",
        }
    }
}

/// Simulator entry of the mode switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimToggle {
    pub icon: SimIcon,
    pub tooltip: &'static str,
    pub active: bool,
}

impl SimToggle {
    pub fn new(active: bool, running: bool) -> Self {
        let icon = if active && running { SimIcon::Stop } else { SimIcon::Play };
        let tooltip = match (active, running) {
            (false, _) => "Show Simulator",
            (true, true) => "Stop the simulator",
            (true, false) => "Start the simulator",
        };
        Self { icon, tooltip, active }
    }
}

/// Simulator / blocks / text switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeSwitch {
    pub simulator: Option<SimToggle>,
    pub blocks_active: bool,
    pub javascript_active: bool,
}

/// Organization link at the far right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationLink {
    pub url: Option<String>,
    pub name: Option<String>,
    pub logo: LogoImages,
}

/// Right side of the bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RightCluster {
    pub help: bool,
    pub settings: bool,
    pub edit: bool,
    pub exit_tutorial: bool,
    pub organization: Option<OrganizationLink>,
}

/// Everything the menu bar shows for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainMenuLayout {
    pub inverted: bool,
    pub branding: Branding,
    pub mode_switch: Option<ModeSwitch>,
    pub right: RightCluster,
}

/// Compute the bar; `None` means render an empty container.
pub fn layout(state: &HostState, views: ActiveViews, config: &ChromeConfig) -> Option<MainMenuLayout> {
    if state.home {
        return None;
    }

    let theme = &config.theme;
    let sandbox = state.sandbox;
    let in_tutorial = state.in_tutorial();

    let branding = if sandbox {
        Branding::Sandbox { logo: theme.portrait_logo.clone(), board_name: theme.board_name.clone() }
    } else {
        let hc = state.high_contrast;
        let pick = |high_contrast: &Option<String>, normal: &Option<String>| {
            hc.then(|| high_contrast.clone()).flatten().or_else(|| normal.clone())
        };
        Branding::Full {
            logo: LogoImages {
                main: pick(&theme.high_contrast_logo, &theme.logo),
                portrait: pick(&theme.high_contrast_portrait_logo, &theme.portrait_logo),
            },
            board_name: theme.board_name.clone(),
            beta_url: theme.beta_url.clone(),
            home: !in_tutorial,
            share: !in_tutorial && state.header.is_some() && config.cloud.sharing,
            tutorial_name: in_tutorial.then(|| state.tutorial_name().unwrap_or_default().to_owned()),
        }
    };

    let mode_switch = (!in_tutorial && !theme.blocks_only).then(|| ModeSwitch {
        simulator: sandbox.then(|| SimToggle::new(views.simulator, state.running)),
        blocks_active: views.blocks,
        javascript_active: views.javascript,
    });

    let right = RightCluster {
        help: !theme.doc_menu.is_empty() && !sandbox && !in_tutorial,
        settings: !sandbox && !in_tutorial,
        edit: sandbox && !theme.hide_embed_edit,
        exit_tutorial: in_tutorial,
        organization: (!sandbox).then(|| OrganizationLink {
            url: theme.organization_url.clone(),
            name: theme.organization.clone(),
            logo: LogoImages {
                main: theme.organization_wide_logo.clone().or_else(|| theme.organization_logo.clone()),
                portrait: theme.organization_logo.clone(),
            },
        }),
    };

    Some(MainMenuLayout { inverted: theme.inverted_menu, branding, mode_switch, right })
}
