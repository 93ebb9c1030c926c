//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped chrome and delegate rendering details to
//! `components`.

pub mod chat;
