//! Side documentation panel hosting the docs iframe.
//!
//! ARCHITECTURE
//! ============
//! [`SideDocsController`] lives in a `StoredValue`, outside the reactive graph,
//! and a separate `RwSignal` mirrors its state. The mirror is written only when
//! the controller reports a change, so host ticks that leave the URL and
//! collapse flag alone never re-render the panel (or reload the iframe).

use leptos::prelude::*;

use crate::config::ChromeConfig;
use crate::host::{HostController, HostState, SharedHost};
use crate::state::side_docs::{SideDocsController, SideDocsPhase, SideDocsProps, SideDocsState};
use crate::util::docs_frame::{BrowserDocsFrame, DOCS_FRAME_ID, DOCS_TOGGLE_ID};
use crate::util::keyboard::fire_on_enter;

/// Copyable handle the embedder uses to drive the panel.
#[derive(Clone, Copy)]
pub struct SideDocsHandle {
    controller: StoredValue<SideDocsController>,
    host: StoredValue<SharedHost>,
    view: RwSignal<SideDocsState>,
}

impl SideDocsHandle {
    pub fn new(config: &ChromeConfig, host: SharedHost) -> Self {
        Self {
            controller: StoredValue::new(SideDocsController::new(config)),
            host: StoredValue::new(host),
            view: RwSignal::new(SideDocsState::default()),
        }
    }

    /// Show a docs page, expanding the panel.
    pub fn open_path(&self, path: &str, blocks_editor: bool) {
        self.apply(|docs, host| docs.open_path(host, path, blocks_editor));
    }

    /// Show rendered markdown, expanding the panel.
    pub fn open_markdown(&self, markdown: &str) {
        self.apply(|docs, host| docs.open_markdown(host, markdown));
    }

    pub fn collapse(&self) {
        self.apply(|docs, host| docs.collapse(host));
    }

    pub fn toggle(&self) {
        self.apply(|docs, host| docs.toggle(host, &BrowserDocsFrame));
    }

    /// Ask the docs frame to open itself in a new window.
    pub fn pop_out(&self) {
        self.controller.with_value(|docs| docs.pop_out(&BrowserDocsFrame));
    }

    /// Current state; tracked when read inside a reactive scope.
    pub fn state(&self) -> SideDocsState {
        self.view.get()
    }

    pub fn phase(&self) -> SideDocsPhase {
        self.view.with(SideDocsState::phase)
    }

    fn receive(&self, props: &SideDocsProps) {
        let rerender = self.controller.try_update_value(|docs| docs.receive(props)).unwrap_or(false);
        if rerender {
            self.publish();
        }
    }

    fn after_render(&self) {
        let host = self.host.get_value();
        self.controller.update_value(|docs| docs.after_render(host.as_ref(), &BrowserDocsFrame));
    }

    fn apply(&self, f: impl FnOnce(&mut SideDocsController, &dyn HostController) -> bool) {
        let host = self.host.get_value();
        let rerender = self.controller.try_update_value(|docs| f(docs, host.as_ref())).unwrap_or(false);
        if rerender {
            self.publish();
        }
    }

    fn publish(&self) {
        let state = self.controller.with_value(|docs| docs.state().clone());
        self.view.set(state);
    }
}

/// Docs iframe with its collapse toggle and pop-out link. Renders nothing
/// until a URL is known.
#[component]
pub fn SideDocsPanel() -> impl IntoView {
    let host_state = expect_context::<RwSignal<HostState>>();
    let docs = expect_context::<SideDocsHandle>();

    docs.receive(&host_state.with_untracked(SideDocsProps::from_host));

    Effect::new(move || {
        let props = host_state.with(SideDocsProps::from_host);
        docs.receive(&props);
    });

    // Runs after every render the mirror triggers, not on mount.
    Effect::new(move |prev: Option<()>| {
        docs.view.track();
        if prev.is_some() {
            docs.after_render();
        }
    });

    let visible = move || docs.view.with(|s| s.current_url.is_some());
    let collapsed = move || docs.view.with(|s| s.collapsed);
    let url = move || docs.view.with(|s| s.current_url.clone().unwrap_or_default());

    view! {
        <Show when=visible>
            <div class="sidedocs-panel" class:sidedocs-panel--collapsed=collapsed>
                <button
                    id=DOCS_TOGGLE_ID
                    role="button"
                    class="ui icon button"
                    aria-label=move || {
                        if collapsed() { "Expand the side documentation" } else { "Collapse the side documentation" }
                    }
                    on:click=move |_| docs.toggle()
                >
                    <i
                        class=move || format!("icon large inverted {}", if collapsed() { "book" } else { "chevron right" })
                        aria-hidden="true"
                    ></i>
                    <Show when=collapsed>
                        <i class="icon large inverted chevron left hover" aria-hidden="true"></i>
                    </Show>
                </button>
                <div id="sidedocs">
                    <div id="sidedocsframe-wrapper">
                        <iframe
                            id=DOCS_FRAME_ID
                            src=url
                            title="Documentation"
                            aria-atomic="true"
                            aria-live="assertive"
                            sandbox="allow-scripts allow-same-origin allow-forms allow-popups"
                        ></iframe>
                    </div>
                    <div class="ui app hide" id="sidedocsbar">
                        <a
                            class="ui icon link"
                            role="link"
                            tabindex="0"
                            data-content="Open documentation in new tab"
                            aria-label="Open documentation in new tab"
                            on:click=move |_| docs.pop_out()
                            on:keydown=fire_on_enter(move || docs.pop_out())
                        >
                            <i class="icon external" aria-hidden="true"></i>
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
