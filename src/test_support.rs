//! Recording doubles for the host, telemetry and docs frame seams.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::host::{HostController, HostStatePatch};
use crate::telemetry::{TelemetryError, TelemetryEvent, TelemetrySink};
use crate::util::docs_frame::{DocsSurface, FrameMessage, OutboundChannel};

/// One call observed by [`RecordingHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    OpenTutorial(String),
    OpenDocs(String),
    OpenSettings,
    AddPackage,
    RemoveProject,
    ShowReportAbuse,
    SelectLang,
    ToggleHighContrast,
    Reset,
    Pair,
    About,
    PrintCode,
    ExitAndSave,
    Share,
    LaunchFullEditor,
    OpenSimView,
    OpenBlocks,
    OpenJavaScript(bool),
    ExitTutorial,
    Compile,
    SetState(HostStatePatch),
    ResizeEditor,
}

#[derive(Default)]
pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    pub sim_active: AtomicBool,
    pub blocks_active: AtomicBool,
    pub javascript_active: AtomicBool,
    pub blocks_editor: AtomicBool,
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl HostController for RecordingHost {
    fn open_tutorial(&self, path: &str) {
        self.record(HostCall::OpenTutorial(path.to_owned()));
    }
    fn open_docs(&self, path: &str) {
        self.record(HostCall::OpenDocs(path.to_owned()));
    }
    fn open_settings(&self) {
        self.record(HostCall::OpenSettings);
    }
    fn add_package(&self) {
        self.record(HostCall::AddPackage);
    }
    fn remove_project(&self) {
        self.record(HostCall::RemoveProject);
    }
    fn show_report_abuse(&self) {
        self.record(HostCall::ShowReportAbuse);
    }
    fn select_lang(&self) {
        self.record(HostCall::SelectLang);
    }
    fn toggle_high_contrast(&self) {
        self.record(HostCall::ToggleHighContrast);
    }
    fn reset(&self) {
        self.record(HostCall::Reset);
    }
    fn pair(&self) {
        self.record(HostCall::Pair);
    }
    fn about(&self) {
        self.record(HostCall::About);
    }
    fn print_code(&self) {
        self.record(HostCall::PrintCode);
    }
    fn exit_and_save(&self) {
        self.record(HostCall::ExitAndSave);
    }
    fn share(&self) {
        self.record(HostCall::Share);
    }
    fn launch_full_editor(&self) {
        self.record(HostCall::LaunchFullEditor);
    }
    fn open_sim_view(&self) {
        self.record(HostCall::OpenSimView);
    }
    fn open_blocks(&self) {
        self.record(HostCall::OpenBlocks);
    }
    fn open_javascript(&self, give_focus: bool) {
        self.record(HostCall::OpenJavaScript(give_focus));
    }
    fn exit_tutorial(&self) {
        self.record(HostCall::ExitTutorial);
    }
    fn compile(&self) {
        self.record(HostCall::Compile);
    }
    fn is_embed_sim_active(&self) -> bool {
        self.sim_active.load(Ordering::SeqCst)
    }
    fn is_blocks_active(&self) -> bool {
        self.blocks_active.load(Ordering::SeqCst)
    }
    fn is_javascript_active(&self) -> bool {
        self.javascript_active.load(Ordering::SeqCst)
    }
    fn is_blocks_editor(&self) -> bool {
        self.blocks_editor.load(Ordering::SeqCst)
    }
    fn set_state(&self, patch: HostStatePatch) {
        self.record(HostCall::SetState(patch));
    }
    fn resize_editor(&self) {
        self.record(HostCall::ResizeEditor);
    }
}

#[derive(Default)]
pub struct RecordingTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingTelemetry {
    pub fn names(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().map(|e| e.name.clone()).collect()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn tick(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Sink whose backend is always down.
pub struct FailingTelemetry;

impl TelemetrySink for FailingTelemetry {
    fn tick(&self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        Err(TelemetryError::Unavailable)
    }
}

/// Docs frame double; `toggle_mounted` controls whether focus succeeds.
pub struct RecordingSurface {
    sent: Mutex<Vec<FrameMessage>>,
    focus_calls: Mutex<usize>,
    pub toggle_mounted: AtomicBool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self { sent: Mutex::new(Vec::new()), focus_calls: Mutex::new(0), toggle_mounted: AtomicBool::new(true) }
    }
}

impl RecordingSurface {
    pub fn sent(&self) -> Vec<FrameMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn focus_calls(&self) -> usize {
        *self.focus_calls.lock().unwrap()
    }
}

impl OutboundChannel for RecordingSurface {
    fn send(&self, message: FrameMessage) {
        self.sent.lock().unwrap().push(message);
    }
}

impl DocsSurface for RecordingSurface {
    fn focus_toggle(&self) -> bool {
        *self.focus_calls.lock().unwrap() += 1;
        self.toggle_mounted.load(Ordering::SeqCst)
    }
}
