//! Contract between the chrome and the editor that embeds it.
//!
//! ARCHITECTURE
//! ============
//! The host owns all project and editor state. The chrome reads a
//! [`HostState`] snapshot (provided as an `RwSignal` so menus re-render when
//! it changes) and calls back into [`HostController`] for every user action.
//! The chrome never mutates the snapshot directly; it asks the host to merge a
//! [`HostStatePatch`].

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::sync::Arc;

/// Identity of the project currently open in the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectHeader {
    pub id: String,
    pub name: String,
}

/// Descriptor of an active tutorial.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorialOptions {
    /// Tutorial path; `None` while the descriptor is being set up.
    pub tutorial: Option<String>,
    pub tutorial_name: Option<String>,
}

/// Snapshot of host state read on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostState {
    /// Landing screen is showing; the menu bar is suppressed.
    pub home: bool,
    pub header: Option<ProjectHeader>,
    pub high_contrast: bool,
    /// Simulator is running.
    pub running: bool,
    pub tutorial_options: Option<TutorialOptions>,
    pub side_docs_collapsed: Option<bool>,
    pub side_docs_load_url: Option<String>,
    /// Restricted embed deployment.
    pub sandbox: bool,
}

impl HostState {
    /// A tutorial is active once its descriptor carries a tutorial path.
    pub fn in_tutorial(&self) -> bool {
        self.tutorial_options
            .as_ref()
            .is_some_and(|options| options.tutorial.is_some())
    }

    /// Display name of the active tutorial, if any.
    pub fn tutorial_name(&self) -> Option<&str> {
        self.tutorial_options
            .as_ref()
            .and_then(|options| options.tutorial_name.as_deref())
    }

    /// Merge the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: HostStatePatch) {
        if let Some(home) = patch.home {
            self.home = home;
        }
        if let Some(header) = patch.header {
            self.header = header;
        }
        if let Some(high_contrast) = patch.high_contrast {
            self.high_contrast = high_contrast;
        }
        if let Some(running) = patch.running {
            self.running = running;
        }
        if let Some(tutorial_options) = patch.tutorial_options {
            self.tutorial_options = tutorial_options;
        }
        if let Some(collapsed) = patch.side_docs_collapsed {
            self.side_docs_collapsed = Some(collapsed);
        }
        if let Some(url) = patch.side_docs_load_url {
            self.side_docs_load_url = Some(url);
        }
        if let Some(sandbox) = patch.sandbox {
            self.sandbox = sandbox;
        }
    }
}

/// Partial update for [`HostState`]; `None` means "leave as is".
///
/// Nullable fields use a nested option so a patch can clear them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostStatePatch {
    pub home: Option<bool>,
    pub header: Option<Option<ProjectHeader>>,
    pub high_contrast: Option<bool>,
    pub running: Option<bool>,
    pub tutorial_options: Option<Option<TutorialOptions>>,
    pub side_docs_collapsed: Option<bool>,
    pub side_docs_load_url: Option<String>,
    pub sandbox: Option<bool>,
}

/// Imperative operations the chrome forwards user actions to.
///
/// Implementations live in the embedding editor. Every method is expected to
/// return promptly; the chrome calls them from event handlers.
pub trait HostController: Send + Sync {
    fn open_tutorial(&self, path: &str);
    fn open_docs(&self, path: &str);
    fn open_settings(&self);
    fn add_package(&self);
    fn remove_project(&self);
    fn show_report_abuse(&self);
    fn select_lang(&self);
    fn toggle_high_contrast(&self);
    fn reset(&self);
    fn pair(&self);
    fn about(&self);
    fn print_code(&self);
    fn exit_and_save(&self);
    fn share(&self);
    fn launch_full_editor(&self);
    fn open_sim_view(&self);
    fn open_blocks(&self);
    fn open_javascript(&self, give_focus: bool);
    fn exit_tutorial(&self);
    fn compile(&self);

    fn is_embed_sim_active(&self) -> bool;
    fn is_blocks_active(&self) -> bool;
    fn is_javascript_active(&self) -> bool;
    /// The blocks editor (rather than the text editor) is the current editor.
    fn is_blocks_editor(&self) -> bool;

    /// Merge `patch` into the host's canonical state.
    fn set_state(&self, patch: HostStatePatch);
    /// Re-flow the code editor viewport after the chrome changed size.
    fn resize_editor(&self);
}

/// Shared handle to the embedding host.
pub type SharedHost = Arc<dyn HostController>;
