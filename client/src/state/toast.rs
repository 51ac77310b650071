//! Toast stack state and the notifier port that feeds it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginFormController` reports outcomes through `signin::Notifier`;
//! [`ToastNotifier`] turns those into entries rendered by the `Toaster`
//! component, and schedules their dismissal in the browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use signin::{Notifier, Toast};

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// Upper bound on visible toasts; the oldest are dropped first.
pub const MAX_TOASTS: usize = 3;

/// A toast with a stable id for keyed rendering and dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        if self.entries.len() > MAX_TOASTS {
            let overflow = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// Notifier port backed by the shared toast signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let mut id = 0;
        self.toasts.update(|state| id = state.push(toast));

        #[cfg(feature = "csr")]
        {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
                toasts.try_update(|state| state.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
