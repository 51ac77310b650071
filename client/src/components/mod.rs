//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and notifications; pages own the controller
//! and pass data down as signals and callbacks.

pub mod form_field;
pub mod toaster;
