//! Delayed tasks scoped to a component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The set-password page waits a moment on its success message before
//! leaving. That wait must die with the page: timers live in a `TimerScope`
//! owned by the component, and dropping the scope cancels them.

use std::time::Duration;

use leptos::prelude::*;

/// Runs a task once after `delay`.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Pending browser timers. Dropping the scope clears every `Timeout` it holds.
#[derive(Default)]
pub struct TimerScope {
    #[cfg(feature = "hydrate")]
    pending: std::cell::RefCell<Vec<gloo_timers::callback::Timeout>>,
}

impl Scheduler for TimerScope {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, task);
            self.pending.borrow_mut().push(timeout);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
    }
}

/// Component-owned scope: disposed (and its timers cancelled) on unmount.
impl Scheduler for StoredValue<TimerScope, LocalStorage> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        if self.try_with_value(|scope| scope.schedule(delay, task)).is_none() {
            log::debug!("timer scope already disposed, task dropped");
        }
    }
}
