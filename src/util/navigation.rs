//! Navigation port injected into the form flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flows never reach for the router themselves. Pages hand them whatever
//! `use_navigate()` returned; tests hand them a recording closure.

use leptos_router::NavigateOptions;

pub trait Navigator {
    fn go_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn go_to(&self, path: &str) {
        self(path, NavigateOptions::default());
    }
}
