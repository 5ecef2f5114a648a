//! Target theme and deployment configuration consumed by the chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The target ships its theme as JSON next to the editor bundle. It is parsed
//! once at startup into [`ChromeConfig`] and threaded into the component tree
//! through context; nothing in the chrome mutates it afterwards.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Docs endpoint used when the deployment does not configure one.
pub const DEFAULT_DOCS_URL: &str = "/--docs";

/// Locale used when the deployment does not configure one.
pub const DEFAULT_LOCALE: &str = "en";

/// Error returned by [`ChromeConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document was not valid theme JSON.
    #[error("invalid chrome config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A doc menu entry has no path to open.
    #[error("doc menu entry {name:?} has an empty path")]
    EmptyDocPath { name: String },
    /// The locale was present but blank.
    #[error("locale must not be empty")]
    EmptyLocale,
}

/// One entry of the theme's documentation menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMenuEntry {
    pub name: String,
    pub path: String,
    /// Opens as a guided tutorial instead of a docs page.
    #[serde(default)]
    pub tutorial: bool,
}

impl DocMenuEntry {
    /// Paths without a leading `/` point off-site.
    pub fn is_external(&self) -> bool {
        !self.path.starts_with('/')
    }
}

/// Branding and feature switches from the target theme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub board_name: String,
    pub logo: Option<String>,
    pub high_contrast_logo: Option<String>,
    pub portrait_logo: Option<String>,
    pub high_contrast_portrait_logo: Option<String>,
    pub right_logo: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub organization_logo: Option<String>,
    pub organization_wide_logo: Option<String>,
    pub beta_url: Option<String>,
    pub inverted_menu: bool,
    pub select_language: bool,
    pub high_contrast: bool,
    pub blocks_only: bool,
    pub hide_embed_edit: bool,
    pub privacy_url: Option<String>,
    pub terms_of_use_url: Option<String>,
    pub feedback_url: Option<String>,
    pub download_icon: Option<String>,
    pub use_upload_message: bool,
    pub doc_menu: Vec<DocMenuEntry>,
}

/// Cloud capabilities of the deployment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudConfig {
    pub packages: bool,
    pub sharing: bool,
    pub publishing: bool,
    pub importing: bool,
}

impl CloudConfig {
    /// Abuse reports only make sense when projects can be published and imported.
    pub fn report_abuse_enabled(self) -> bool {
        self.sharing && self.publishing && self.importing
    }
}

/// Everything the chrome reads from its deployment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChromeConfig {
    pub theme: ThemeConfig,
    pub cloud: CloudConfig,
    /// Base URL of the documentation service.
    pub docs_url: Option<String>,
    pub locale: String,
    /// Device pairing support was compiled into this build.
    pub usb_enabled: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            cloud: CloudConfig::default(),
            docs_url: None,
            locale: DEFAULT_LOCALE.to_owned(),
            usb_enabled: false,
        }
    }
}

impl ChromeConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// variants described on [`ChromeConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        log::debug!(
            "loaded chrome config for {:?} ({} doc entries)",
            config.theme.board_name,
            config.theme.doc_menu.len()
        );
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDocPath`] when a doc menu entry has no path
    /// and [`ConfigError::EmptyLocale`] when the locale is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(entry) = self.theme.doc_menu.iter().find(|e| e.path.trim().is_empty()) {
            return Err(ConfigError::EmptyDocPath { name: entry.name.clone() });
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::EmptyLocale);
        }
        Ok(())
    }

    /// Documentation endpoint, falling back to [`DEFAULT_DOCS_URL`] when unset or empty.
    pub fn docs_base(&self) -> &str {
        match self.docs_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_DOCS_URL,
        }
    }
}
