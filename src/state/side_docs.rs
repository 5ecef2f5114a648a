//! Side documentation panel state machine.
//!
//! DESIGN
//! ======
//! The panel is Hidden until a URL is known, then Expanded or Collapsed. The
//! host is authoritative: every value it pushes overwrites the local copy, but
//! an absent value never clears one. Local actions update the local copy and
//! write the same values back to the host so both stay in step.
//!
//! Side effects that need the DOM (focusing the toggle, posting to the frame)
//! go through [`DocsSurface`] and [`OutboundChannel`] so the state machine can
//! run without a browser.

#[cfg(test)]
#[path = "side_docs_test.rs"]
mod side_docs_test;

use crate::config::ChromeConfig;
use crate::host::{HostController, HostState, HostStatePatch};
use crate::state::view_model::{Transition, ViewModel};
use crate::util::docs_frame::{DocsSurface, FrameMessage, OutboundChannel};
use crate::util::encoding::encode_uri_component;

/// Editor flavour the docs should render examples for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocsMode {
    Blocks,
    Js,
}

impl DocsMode {
    pub fn from_blocks(blocks: bool) -> Self {
        if blocks { Self::Blocks } else { Self::Js }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Js => "js",
        }
    }
}

/// `<base>#doc:<path>:<mode>:<locale>`
pub fn doc_url(base: &str, path: &str, mode: DocsMode, locale: &str) -> String {
    format!("{base}#doc:{path}:{}:{locale}", mode.as_str())
}

/// `<base>#md:<encoded markdown>:<mode>:<locale>`
pub fn markdown_url(base: &str, markdown: &str, mode: DocsMode, locale: &str) -> String {
    format!("{base}#md:{}:{}:{locale}", encode_uri_component(markdown), mode.as_str())
}

/// Visible phase of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideDocsPhase {
    Hidden,
    Expanded,
    Collapsed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideDocsState {
    pub current_url: Option<String>,
    pub collapsed: bool,
}

impl SideDocsState {
    pub fn phase(&self) -> SideDocsPhase {
        match (&self.current_url, self.collapsed) {
            (None, _) => SideDocsPhase::Hidden,
            (Some(_), false) => SideDocsPhase::Expanded,
            (Some(_), true) => SideDocsPhase::Collapsed,
        }
    }
}

/// Values the host pushes; `None` and empty URLs keep the local copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideDocsProps {
    pub url: Option<String>,
    pub collapsed: Option<bool>,
}

impl SideDocsProps {
    pub fn from_host(state: &HostState) -> Self {
        Self { url: state.side_docs_load_url.clone(), collapsed: state.side_docs_collapsed }
    }
}

pub struct SideDocsModel;

impl ViewModel for SideDocsModel {
    type State = SideDocsState;
    type Props = SideDocsProps;

    fn compute_next_state(prev: &SideDocsState, incoming: &SideDocsProps) -> Transition<SideDocsState> {
        let mut next = prev.clone();
        if let Some(collapsed) = incoming.collapsed {
            next.collapsed = collapsed;
        }
        if let Some(url) = incoming.url.as_deref().filter(|url| !url.is_empty()) {
            next.current_url = Some(url.to_owned());
        }
        if next == *prev { Transition::skip(next) } else { Transition::render(next) }
    }
}

/// Panel state plus the bookkeeping that lives outside the render.
#[derive(Clone, Debug)]
pub struct SideDocsController {
    state: SideDocsState,
    /// Set by [`Self::open_path`]; focus moves to the toggle once it is mounted.
    opening: bool,
    docs_base: String,
    locale: String,
}

impl SideDocsController {
    pub fn new(config: &ChromeConfig) -> Self {
        Self {
            state: SideDocsState::default(),
            opening: false,
            docs_base: config.docs_base().to_owned(),
            locale: config.locale.clone(),
        }
    }

    pub fn state(&self) -> &SideDocsState {
        &self.state
    }

    pub fn phase(&self) -> SideDocsPhase {
        self.state.phase()
    }

    pub fn is_opening(&self) -> bool {
        self.opening
    }

    /// Show a docs page. Returns whether the panel must re-render.
    pub fn open_path(&mut self, host: &dyn HostController, path: &str, blocks_editor: bool) -> bool {
        self.opening = true;
        let url = doc_url(&self.docs_base, path, DocsMode::from_blocks(blocks_editor), &self.locale);
        self.load(host, url)
    }

    /// Show rendered markdown in the mode of the host's current editor.
    pub fn open_markdown(&mut self, host: &dyn HostController, markdown: &str) -> bool {
        let mode = DocsMode::from_blocks(host.is_blocks_editor());
        let url = markdown_url(&self.docs_base, markdown, mode, &self.locale);
        self.load(host, url)
    }

    fn load(&mut self, host: &dyn HostController, url: String) -> bool {
        log::debug!("side docs loading {url}");
        host.set_state(HostStatePatch {
            side_docs_load_url: Some(url.clone()),
            side_docs_collapsed: Some(false),
            ..HostStatePatch::default()
        });
        self.receive(&SideDocsProps { url: Some(url), collapsed: Some(false) })
    }

    pub fn collapse(&mut self, host: &dyn HostController) -> bool {
        host.set_state(HostStatePatch { side_docs_collapsed: Some(true), ..HostStatePatch::default() });
        self.receive(&SideDocsProps { url: None, collapsed: Some(true) })
    }

    /// Flip collapsed/expanded and keep keyboard focus on the toggle.
    pub fn toggle(&mut self, host: &dyn HostController, surface: &dyn DocsSurface) -> bool {
        let collapsed = !self.state.collapsed;
        host.set_state(HostStatePatch { side_docs_collapsed: Some(collapsed), ..HostStatePatch::default() });
        let rerender = self.receive(&SideDocsProps { url: None, collapsed: Some(collapsed) });
        surface.focus_toggle();
        rerender
    }

    /// Ask the frame to open itself in a new window. Local state is untouched.
    pub fn pop_out(&self, channel: &dyn OutboundChannel) {
        channel.send(FrameMessage::Popout);
    }

    /// Fold a host push into local state. Returns whether the panel must re-render.
    pub fn receive(&mut self, props: &SideDocsProps) -> bool {
        let Transition { next, rerender } = SideDocsModel::compute_next_state(&self.state, props);
        self.state = next;
        rerender
    }

    /// Run after a render caused by a URL or collapse change.
    pub fn after_render(&mut self, host: &dyn HostController, surface: &dyn DocsSurface) {
        host.resize_editor();
        if self.opening && surface.focus_toggle() {
            self.opening = false;
        }
    }
}
