//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat` for the conversation thread, `composer`
//! for the staged draft) as plain structs held in signals, so transition
//! logic stays natively testable.

pub mod chat;
pub mod composer;
