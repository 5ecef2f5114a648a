//! Settings ("More...") dropdown contents and its re-render rule.
//!
//! DESIGN
//! ======
//! The dropdown is rebuilt only when the mirrored high-contrast flag changes.
//! Host state churns on every editor tick and nothing else in the dropdown is
//! reactive. If another reactive item is ever added here, it must be folded
//! into [`SettingsMenuModel`] or it will render stale.

#[cfg(test)]
#[path = "settings_menu_test.rs"]
mod settings_menu_test;

use crate::config::ChromeConfig;
use crate::state::actions::MenuAction;
use crate::state::help_menu::{DocItem, doc_items};
use crate::state::view_model::{Transition, ViewModel};

/// Local mirror of the host flags the dropdown depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsMenuState {
    pub high_contrast: bool,
}

/// Props pushed by the main menu; `None` leaves the mirror untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsMenuPush {
    pub high_contrast: Option<bool>,
}

pub struct SettingsMenuModel;

impl ViewModel for SettingsMenuModel {
    type State = SettingsMenuState;
    type Props = SettingsMenuPush;

    fn compute_next_state(prev: &SettingsMenuState, incoming: &SettingsMenuPush) -> Transition<SettingsMenuState> {
        match incoming.high_contrast {
            Some(high_contrast) if high_contrast != prev.high_contrast => {
                Transition::render(SettingsMenuState { high_contrast })
            }
            _ => Transition::skip(*prev),
        }
    }
}

/// One row of the dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEntry {
    Action { icon: Option<&'static str>, label: &'static str, action: MenuAction },
    Link { label: &'static str, href: String },
    Divider { mobile_only: bool },
    /// Doc menu copy shown only on small screens where the help dropdown is hidden.
    MobileDoc(DocItem),
}

impl SettingsEntry {
    fn action(icon: Option<&'static str>, label: &'static str, action: MenuAction) -> Self {
        Self::Action { icon, label, action }
    }
}

/// Build the dropdown rows for the current config and mirrored state.
pub fn settings_entries(config: &ChromeConfig, state: SettingsMenuState) -> Vec<SettingsEntry> {
    let theme = &config.theme;
    let mut entries = vec![SettingsEntry::action(Some("options"), "Project Settings", MenuAction::OpenSettings)];

    if config.cloud.packages {
        entries.push(SettingsEntry::action(Some("disk outline"), "Extensions", MenuAction::AddPackage));
    }
    entries.push(SettingsEntry::action(Some("print"), "Print...", MenuAction::Print));
    entries.push(SettingsEntry::action(Some("trash"), "Delete Project", MenuAction::RemoveProject));
    if config.cloud.report_abuse_enabled() {
        entries.push(SettingsEntry::action(Some("warning circle"), "Report Abuse...", MenuAction::ReportAbuse));
    }
    entries.push(SettingsEntry::Divider { mobile_only: false });

    if theme.select_language {
        entries.push(SettingsEntry::action(Some("xicon globe"), "Language", MenuAction::SelectLang));
    }
    if theme.high_contrast {
        let label = if state.high_contrast { "High Contrast Off" } else { "High Contrast On" };
        entries.push(SettingsEntry::action(None, label, MenuAction::ToggleHighContrast));
    }
    // Storage must be clearable whether or not anyone is signed in.
    entries.push(SettingsEntry::action(Some("sign out"), "Reset", MenuAction::Reset));
    if config.usb_enabled {
        entries.push(SettingsEntry::action(Some("usb"), "Pair device", MenuAction::Pair));
    }

    entries.push(SettingsEntry::Divider { mobile_only: true });
    entries.extend(doc_items(&theme.doc_menu).into_iter().map(SettingsEntry::MobileDoc));
    entries.push(SettingsEntry::Divider { mobile_only: false });

    if let Some(href) = non_empty(theme.privacy_url.as_deref()) {
        entries.push(SettingsEntry::Link { label: "Privacy & Cookies", href });
    }
    if let Some(href) = non_empty(theme.terms_of_use_url.as_deref()) {
        entries.push(SettingsEntry::Link { label: "Terms Of Use", href });
    }
    entries.push(SettingsEntry::action(None, "About...", MenuAction::About));

    if let Some(href) = non_empty(theme.feedback_url.as_deref()) {
        entries.push(SettingsEntry::Divider { mobile_only: false });
        entries.push(SettingsEntry::Link { label: "Give Feedback", href });
    }
    entries
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}
