//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the conversation surface while reading/writing shared
//! state from Leptos context providers.

pub mod chat_panel;
