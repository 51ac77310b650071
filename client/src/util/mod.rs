//! Browser adapters for the controller's storage and navigation ports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeping `web_sys` and router access here lets pages construct the
//! controller without touching browser APIs directly.

pub mod navigation;
pub mod storage;
