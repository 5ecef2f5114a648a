//! Footer shown under the embedded sandbox editor.

#[cfg(test)]
#[path = "sandbox_footer_test.rs"]
mod sandbox_footer_test;

use crate::config::ThemeConfig;
use crate::state::view_model::{Transition, ViewModel};

/// Everything the footer renders; computed once at mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandboxFooterModel {
    /// `(name, url)` when both are configured.
    pub organization: Option<(String, String)>,
    pub terms_url: String,
    pub privacy_url: String,
    pub compile_label: &'static str,
    pub compile_icon: String,
    pub compile_tooltip: String,
}

impl SandboxFooterModel {
    pub fn new(theme: &ThemeConfig) -> Self {
        let organization = match (&theme.organization, &theme.organization_url) {
            (Some(name), Some(url)) if !name.is_empty() && !url.is_empty() => Some((name.clone(), url.clone())),
            _ => None,
        };
        Self {
            organization,
            terms_url: theme.terms_of_use_url.clone().unwrap_or_default(),
            privacy_url: theme.privacy_url.clone().unwrap_or_default(),
            compile_label: if theme.use_upload_message { "Upload" } else { "Download" },
            compile_icon: theme.download_icon.clone().unwrap_or_else(|| "download".to_owned()),
            compile_tooltip: format!("Download your code to the {}", theme.board_name),
        }
    }
}

/// The footer ignores every push after mount. `SandboxFooter` reads no
/// reactive state, so nothing drives this impl outside the render loop.
impl ViewModel for SandboxFooterModel {
    type State = ();
    type Props = ();

    fn compute_next_state(_prev: &(), _incoming: &()) -> Transition<()> {
        Transition::skip(())
    }
}
