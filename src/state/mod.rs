//! View models behind the chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module here holds the pure decisions for one component: what to show,
//! which host action a control triggers, and when a host push warrants a
//! re-render. Components in `crate::components` only render these results.

pub mod actions;
pub mod help_menu;
pub mod main_menu;
pub mod sandbox_footer;
pub mod settings_menu;
pub mod side_docs;
pub mod view_model;
