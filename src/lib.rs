//! # editor-chrome
//!
//! Leptos components for the chrome around a block/text code editor: the main
//! menu bar, help and settings dropdowns, the side documentation panel, and
//! the sandbox footer.
//!
//! The embedding editor owns all project state. It hands the chrome a
//! [`host::HostController`] for actions and an `RwSignal<HostState>` snapshot
//! to render from. Pure layout and update rules live in [`state`] and are
//! tested natively; [`components`] renders them.

pub mod app;
pub mod components;
pub mod config;
pub mod host;
pub mod state;
pub mod telemetry;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Install browser logging and mount the chrome at the end of the host
/// page's `<body>`. The host page carries no chrome markup of its own.
#[cfg(feature = "csr")]
pub fn mount(
    config: config::ChromeConfig,
    host: host::SharedHost,
    host_state: leptos::prelude::RwSignal<host::HostState>,
) {
    use leptos::prelude::*;

    use crate::app::EditorChrome;
    use crate::telemetry::{LogTelemetry, SharedTelemetry};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let telemetry: SharedTelemetry = std::sync::Arc::new(LogTelemetry);
    leptos::mount::mount_to_body(move || {
        view! { <EditorChrome config=config host=host host_state=host_state telemetry=telemetry/> }
    });
}
