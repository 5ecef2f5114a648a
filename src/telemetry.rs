//! Fire-and-forget usage events emitted before menu actions run.
//!
//! ERROR HANDLING
//! ==============
//! Sinks may fail, but [`emit`] swallows every failure: a broken telemetry
//! backend must never block or alter the action the user asked for.

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod telemetry_test;

use std::sync::Arc;

use serde::Serialize;

/// Error reported by a [`TelemetrySink`].
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("telemetry sink unavailable")]
    Unavailable,
    #[error("failed to encode telemetry event: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Named usage event with optional string data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<(String, String)>,
    /// The event was triggered by a deliberate user interaction.
    pub interactive_consent: bool,
}

impl TelemetryEvent {
    /// Event raised by a direct user interaction.
    pub fn interactive(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new(), interactive_consent: true }
    }

    /// Event raised without interactive consent.
    pub fn passive(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new(), interactive_consent: false }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }
}

/// Destination for usage events.
pub trait TelemetrySink: Send + Sync {
    /// Record one event.
    ///
    /// # Errors
    ///
    /// Implementations report backend failures; callers go through [`emit`],
    /// which discards them.
    fn tick(&self, event: &TelemetryEvent) -> Result<(), TelemetryError>;
}

/// Default sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn tick(&self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// Sink that writes events as JSON lines to the `telemetry` log target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTelemetry;

impl TelemetrySink for LogTelemetry {
    fn tick(&self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        let line = serde_json::to_string(event)?;
        log::info!(target: "telemetry", "{line}");
        Ok(())
    }
}

/// Shared handle to the active sink.
pub type SharedTelemetry = Arc<dyn TelemetrySink>;

/// Send `event` to `sink`, discarding any failure.
pub fn emit(sink: &dyn TelemetrySink, event: &TelemetryEvent) {
    if let Err(err) = sink.tick(event) {
        log::debug!("dropped telemetry event {}: {err}", event.name);
    }
}
