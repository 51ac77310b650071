//! Terminal stand-ins for toasts and routing.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::io::{self, Write};

use signin::{Navigator, Notifier, Toast, ToastVariant};

/// Prints each toast as one line.
pub struct TerminalNotifier<W: Write> {
    out: RefCell<W>,
}

impl TerminalNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out) }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[must_use]
pub fn render_toast(toast: &Toast) -> String {
    let marker = match toast.variant {
        ToastVariant::Default => "ok",
        ToastVariant::Destructive => "error",
    };
    if toast.description.is_empty() {
        format!("[{marker}] {}", toast.title)
    } else {
        format!("[{marker}] {}: {}", toast.title, toast.description)
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&self, toast: Toast) {
        // Best effort.
        let _ = writeln!(self.out.borrow_mut(), "{}", render_toast(&toast));
    }
}

/// Remembers the last requested route. A terminal has nowhere to go.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last: RefCell<Option<String>>,
}

impl TerminalNavigator {
    #[cfg(test)]
    pub fn last_route(&self) -> Option<String> {
        self.last.borrow().clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        tracing::debug!(route, "redirect requested");
        self.last.replace(Some(route.to_owned()));
    }
}
