//! Browser glue for the embedded documentation frame.
//!
//! SYSTEM CONTEXT
//! ==============
//! The docs service runs inside an iframe owned by the side-docs panel. The
//! panel talks to it through a send-only channel and moves keyboard focus to
//! its toggle button. Both operations are best effort: a missing element or an
//! unresponsive frame is a silent no-op, and SSR/native builds never touch the
//! DOM.
//!
//! TRADE-OFFS
//! ==========
//! Messages are posted with target origin `*`. The docs frame is trusted to
//! ignore anything it does not understand.

#[cfg(test)]
#[path = "docs_frame_test.rs"]
mod docs_frame_test;

use serde_json::{Value, json};

/// Element id of the documentation iframe.
pub const DOCS_FRAME_ID: &str = "sidedocsframe";

/// Element id of the collapse/expand toggle button.
pub const DOCS_TOGGLE_ID: &str = "sidedocstoggle";

/// Message understood by the documentation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameMessage {
    /// Ask the frame to reopen itself in a separate window.
    Popout,
}

impl FrameMessage {
    /// JSON payload as posted to the frame.
    pub fn to_json(self) -> Value {
        match self {
            Self::Popout => json!({ "type": "popout" }),
        }
    }
}

/// One-way channel into the documentation frame. There is no acknowledgement
/// and no failure signal.
pub trait OutboundChannel: Send + Sync {
    fn send(&self, message: FrameMessage);
}

/// DOM operations the side-docs panel performs outside the reactive tree.
pub trait DocsSurface: Send + Sync {
    /// Focus the toggle button. Returns `false` when it is not mounted.
    fn focus_toggle(&self) -> bool;
}

/// Real frame and DOM, addressed by the well-known element ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocsFrame;

impl OutboundChannel for BrowserDocsFrame {
    fn send(&self, message: FrameMessage) {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(frame) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(DOCS_FRAME_ID))
                .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
            else {
                return;
            };
            let Some(target) = frame.content_window() else {
                return;
            };
            let Ok(payload) = js_sys::JSON::parse(&message.to_json().to_string()) else {
                return;
            };
            let _ = target.post_message(&payload, "*");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
        }
    }
}

impl DocsSurface for BrowserDocsFrame {
    fn focus_toggle(&self) -> bool {
        focus_element(DOCS_TOGGLE_ID)
    }
}

/// Focus the element with `id`, returning whether it exists.
pub fn focus_element(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        let _ = el.focus();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}
