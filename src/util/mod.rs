//! Utility helpers shared across chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the state modules stay testable without a DOM.

pub mod docs_frame;
pub mod encoding;
pub mod keyboard;
