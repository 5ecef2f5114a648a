//! Root chrome component and the context it provides.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::main_menu::MainMenu;
use crate::components::sandbox_footer::SandboxFooter;
use crate::components::side_docs::{SideDocsHandle, SideDocsPanel};
use crate::config::ChromeConfig;
use crate::host::{HostState, SharedHost};
use crate::state::actions::MenuAction;
use crate::telemetry::{NoopTelemetry, SharedTelemetry};
use crate::util::keyboard::fire_on_enter;

/// Collaborators shared by every chrome component.
#[derive(Clone)]
pub struct ChromeContext {
    pub config: Arc<ChromeConfig>,
    pub host: SharedHost,
    pub telemetry: SharedTelemetry,
}

impl ChromeContext {
    pub fn dispatch(&self, action: &MenuAction) {
        action.dispatch(self.host.as_ref(), self.telemetry.as_ref());
    }

    /// Click handler dispatching `action`.
    pub fn on_click(&self, action: MenuAction) -> impl Fn(leptos::ev::MouseEvent) + Send + Sync + 'static + use<> {
        let ctx = self.clone();
        move |_| ctx.dispatch(&action)
    }

    /// Keydown handler dispatching `action` on Enter or Space.
    pub fn on_key(&self, action: MenuAction) -> impl Fn(leptos::ev::KeyboardEvent) + Send + Sync + 'static + use<> {
        let ctx = self.clone();
        fire_on_enter(move || ctx.dispatch(&action))
    }
}

/// Menu bar, side docs and (in sandbox mode) footer for one editor instance.
///
/// `host_state` is the host's snapshot; the host keeps writing to it and the
/// chrome re-renders from it. `on_side_docs` hands the embedder the handle it
/// uses to open documentation pages.
#[component]
pub fn EditorChrome(
    config: ChromeConfig,
    host: SharedHost,
    host_state: RwSignal<HostState>,
    #[prop(optional)] telemetry: Option<SharedTelemetry>,
    #[prop(optional)] on_side_docs: Option<Callback<SideDocsHandle>>,
) -> impl IntoView {
    let side_docs = SideDocsHandle::new(&config, host.clone());
    let ctx = ChromeContext {
        config: Arc::new(config),
        host,
        telemetry: telemetry.unwrap_or_else(|| Arc::new(NoopTelemetry)),
    };

    provide_context(ctx);
    provide_context(host_state);
    provide_context(side_docs);

    if let Some(callback) = on_side_docs {
        callback.run(side_docs);
    }

    let sandbox = move || host_state.with(|s| s.sandbox);

    view! {
        <div class="editor-chrome">
            <MainMenu/>
            <SideDocsPanel/>
            <Show when=sandbox>
                <SandboxFooter/>
            </Show>
        </div>
    }
}
