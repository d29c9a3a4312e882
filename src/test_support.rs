//! Fakes for driving the form flows without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use leptos_router::NavigateOptions;
use serde::Serialize;

use crate::net::transport::{HttpResponse, Transport, TransportError};
use crate::util::timer::Scheduler;

// =============================================================
// Transport
// =============================================================

/// Canned-response transport that records every request it receives.
#[derive(Clone, Default)]
pub struct StubTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    calls: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for StubTransport {
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<HttpResponse, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        self.calls.borrow_mut().push((url.to_owned(), value));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no stubbed response".to_owned())))
    }
}

// =============================================================
// Navigator
// =============================================================

/// Navigator closure plus the log of paths it was asked to visit.
pub fn recording_navigator() -> (impl Fn(&str, NavigateOptions) + Clone + 'static, Rc<RefCell<Vec<String>>>) {
    let visits = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&visits);
    let navigate = move |path: &str, _options: NavigateOptions| log.borrow_mut().push(path.to_owned());
    (navigate, visits)
}

// =============================================================
// Scheduler
// =============================================================

#[derive(Default)]
struct ManualClock {
    now: Duration,
    tasks: Vec<(Duration, Box<dyn FnOnce()>)>,
}

/// Scheduler driven by hand: tasks run only when `advance` passes their deadline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    pub fn advance(&self, by: Duration) {
        let ready: Vec<Box<dyn FnOnce()>> = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let (ready, waiting): (Vec<_>, Vec<_>) =
                std::mem::take(&mut clock.tasks).into_iter().partition(|(due, _)| *due <= now);
            clock.tasks = waiting;
            ready.into_iter().map(|(_, task)| task).collect()
        };
        for task in ready {
            task();
        }
    }

    /// Drop every pending task, as unmounting a page drops its timer scope.
    pub fn cancel_all(&self) {
        self.clock.borrow_mut().tasks.clear();
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.tasks.push((due, task));
    }
}
