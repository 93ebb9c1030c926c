//! Networking modules for the ask endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the multipart HTTP call, `types` defines the error taxonomy
//! and the tolerant reply-field read.

pub mod api;
pub mod types;
