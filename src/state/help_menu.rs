//! Documentation menu items derived from the theme's doc menu.
//!
//! The same items appear in the help dropdown and, on mobile, at the bottom of
//! the settings dropdown. The help dropdown never re-renders: the doc menu is
//! fixed when the theme loads, so a theme swapped at runtime would not show up
//! here.

#[cfg(test)]
#[path = "help_menu_test.rs"]
mod help_menu_test;

use crate::config::DocMenuEntry;
use crate::state::actions::MenuAction;
use crate::state::view_model::{Transition, ViewModel};

/// What activating a doc item does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocItemTarget {
    /// Ask the host to start a tutorial.
    Tutorial(String),
    /// Plain outbound link opened in the `docs` browsing context.
    External(String),
    /// Ask the host to show the page in the side docs.
    Docs(String),
}

/// One rendered documentation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocItem {
    pub key: String,
    pub name: String,
    pub target: DocItemTarget,
}

impl DocItem {
    pub fn from_entry(entry: &DocMenuEntry) -> Self {
        let (prefix, target) = if entry.tutorial {
            ("docsmenututorial", DocItemTarget::Tutorial(entry.path.clone()))
        } else if entry.is_external() {
            ("docsmenulink", DocItemTarget::External(entry.path.clone()))
        } else {
            ("docsmenu", DocItemTarget::Docs(entry.path.clone()))
        };
        Self { key: format!("{prefix}{}", entry.path), name: entry.name.clone(), target }
    }

    /// Host action for this item; external links have none.
    pub fn action(&self) -> Option<MenuAction> {
        match &self.target {
            DocItemTarget::Tutorial(path) => Some(MenuAction::OpenTutorial(path.clone())),
            DocItemTarget::Docs(path) => Some(MenuAction::OpenDocs(path.clone())),
            DocItemTarget::External(_) => None,
        }
    }
}

/// Items for every doc menu entry, in theme order.
pub fn doc_items(entries: &[DocMenuEntry]) -> Vec<DocItem> {
    entries.iter().map(DocItem::from_entry).collect()
}

/// The help dropdown ignores every push after mount.
///
/// No component drives this model: `HelpMenu` reads no reactive state, which
/// is how the rule holds in the rendered tree. The model states it for the
/// render loop.
pub struct HelpMenuModel;

impl ViewModel for HelpMenuModel {
    type State = ();
    type Props = ();

    fn compute_next_state(_prev: &(), _incoming: &()) -> Transition<()> {
        Transition::skip(())
    }
}
