//! Client-side UI state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by the app root, so
//! their logic stays testable without a reactive runtime.

pub mod toast;
