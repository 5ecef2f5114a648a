//! Chrome component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the decisions made in `crate::state`, reading the
//! `ChromeContext` and the host snapshot from Leptos context providers.

pub mod dropdown;
pub mod help_menu;
pub mod main_menu;
pub mod menu_item;
pub mod sandbox_footer;
pub mod settings_menu;
pub mod side_docs;
