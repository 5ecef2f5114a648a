//! User actions raised by the chrome and their host dispatch.
//!
//! ARCHITECTURE
//! ============
//! Components never call the host directly. A click produces a [`MenuAction`];
//! dispatching it emits the matching telemetry event first and then forwards
//! to exactly one [`HostController`] operation. Telemetry is fire-and-forget,
//! so a failing sink cannot stop the forward.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::host::HostController;
use crate::telemetry::{self, TelemetryEvent, TelemetrySink};

/// Every action a chrome control can trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    OpenTutorial(String),
    OpenDocs(String),
    OpenSettings,
    AddPackage,
    Print,
    RemoveProject,
    ReportAbuse,
    SelectLang,
    ToggleHighContrast,
    Reset,
    Pair,
    About,
    BrandClick,
    GoHome,
    /// Organization logo; the link itself navigates, the host is not involved.
    OrgClick,
    Share,
    LaunchFullEditor,
    OpenSimView,
    OpenBlocks,
    OpenJavaScript { give_focus: bool },
    ExitTutorial,
    Compile,
}

impl MenuAction {
    /// Telemetry event emitted before the action runs, if any.
    pub fn telemetry_event(&self) -> Option<TelemetryEvent> {
        let event = match self {
            Self::OpenTutorial(path) | Self::OpenDocs(path) => {
                TelemetryEvent::interactive("docs").with("path", path.as_str())
            }
            Self::OpenSettings => TelemetryEvent::interactive("menu.settings"),
            Self::AddPackage => TelemetryEvent::interactive("menu.addpackage"),
            Self::Print => return None,
            Self::RemoveProject => TelemetryEvent::interactive("menu.removeproject"),
            Self::ReportAbuse => TelemetryEvent::interactive("menu.reportabuse"),
            Self::SelectLang => TelemetryEvent::interactive("menu.langpicker"),
            Self::ToggleHighContrast => TelemetryEvent::interactive("menu.togglecontrast"),
            Self::Reset => TelemetryEvent::interactive("menu.reset"),
            Self::Pair => TelemetryEvent::passive("menu.pair"),
            Self::About => TelemetryEvent::passive("menu.about"),
            Self::BrandClick => TelemetryEvent::interactive("menu.brand"),
            Self::GoHome => TelemetryEvent::interactive("menu.home"),
            Self::OrgClick => TelemetryEvent::interactive("menu.org"),
            Self::Share => TelemetryEvent::interactive("menu.share"),
            Self::LaunchFullEditor => TelemetryEvent::interactive("sandbox.openfulleditor"),
            Self::OpenSimView => TelemetryEvent::interactive("menu.simView"),
            Self::OpenBlocks => TelemetryEvent::interactive("menu.blocks"),
            Self::OpenJavaScript { .. } => TelemetryEvent::interactive("menu.javascript"),
            Self::ExitTutorial => TelemetryEvent::interactive("menu.exitTutorial"),
            Self::Compile => TelemetryEvent::interactive("sandboxfooter.compile"),
        };
        Some(event)
    }

    /// Emit telemetry, then forward to the host.
    pub fn dispatch(&self, host: &dyn HostController, sink: &dyn TelemetrySink) {
        if let Some(event) = self.telemetry_event() {
            telemetry::emit(sink, &event);
        }
        log::debug!("menu action {self:?}");
        match self {
            Self::OpenTutorial(path) => host.open_tutorial(path),
            Self::OpenDocs(path) => host.open_docs(path),
            Self::OpenSettings => host.open_settings(),
            Self::AddPackage => host.add_package(),
            Self::Print => host.print_code(),
            Self::RemoveProject => host.remove_project(),
            Self::ReportAbuse => host.show_report_abuse(),
            Self::SelectLang => host.select_lang(),
            Self::ToggleHighContrast => host.toggle_high_contrast(),
            Self::Reset => host.reset(),
            Self::Pair => host.pair(),
            Self::About => host.about(),
            Self::BrandClick | Self::GoHome => host.exit_and_save(),
            Self::OrgClick => {}
            Self::Share => host.share(),
            Self::LaunchFullEditor => host.launch_full_editor(),
            Self::OpenSimView => host.open_sim_view(),
            Self::OpenBlocks => host.open_blocks(),
            Self::OpenJavaScript { give_focus } => host.open_javascript(*give_focus),
            Self::ExitTutorial => host.exit_tutorial(),
            Self::Compile => host.compile(),
        }
    }
}
