//! Router-backed navigator.

use leptos_router::NavigateOptions;
use signin::Navigator;

/// Adapts `leptos_router::hooks::use_navigate()` to the navigator port.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: &str) {
        (self.navigate)(route, NavigateOptions::default());
    }
}
