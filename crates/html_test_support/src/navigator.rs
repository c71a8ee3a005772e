use std::cell::{Cell, RefCell};
use std::fmt::Debug;

use input_core::NavigationApi;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavCall<T> {
    Next,
    Prev,
    Goto(T),
}

/// Mock engine: records every call and answers with a scripted result.
#[derive(Debug)]
pub struct RecordingNavigator<T> {
    calls: RefCell<Vec<NavCall<T>>>,
    accepts: Cell<bool>,
}

impl<T> Default for RecordingNavigator<T> {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            accepts: Cell::new(true),
        }
    }
}

impl<T: Clone + Debug> RecordingNavigator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator whose every call reports "did not navigate".
    pub fn refusing() -> Self {
        let nav = Self::default();
        nav.set_accepts(false);
        nav
    }

    pub fn set_accepts(&self, accepts: bool) {
        self.accepts.set(accepts);
    }

    pub fn calls(&self) -> Vec<NavCall<T>> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<NavCall<T>> {
        self.calls.take()
    }

    fn record(&self, call: NavCall<T>) -> bool {
        self.calls.borrow_mut().push(call);
        self.accepts.get()
    }
}

impl<T: Clone + Debug> NavigationApi for RecordingNavigator<T> {
    type Target = T;

    fn next(&self) -> bool {
        self.record(NavCall::Next)
    }

    fn prev(&self) -> bool {
        self.record(NavCall::Prev)
    }

    fn goto(&self, target: &T) -> bool {
        self.record(NavCall::Goto(target.clone()))
    }
}
