//! The navigation capability the forwarder drives.
//!
//! The presentation engine lives in another context (the opener window, or
//! another thread). The forwarder only ever sees it through this trait, so
//! the lookup mechanism stays at the integration boundary and tests can pass
//! a mock.

use std::rc::Rc;

/// Navigation operations exposed by a presentation engine.
///
/// Every call reports whether navigation actually happened. That `bool` is
/// the only success signal the forwarder branches on: `false` means the
/// engine ignored the request and the host's default behavior must be kept.
///
/// Methods take `&self`; implementations needing mutation use interior
/// mutability. Handlers never re-enter the API.
pub trait NavigationApi {
    /// Handle the engine uses to identify a navigation target
    /// (a DOM element, a node id, ...).
    type Target;

    /// Advance one step.
    fn next(&self) -> bool;

    /// Go back one step.
    fn prev(&self) -> bool;

    /// Jump to the step associated with `target`.
    fn goto(&self, target: &Self::Target) -> bool;
}

impl<A: NavigationApi + ?Sized> NavigationApi for &A {
    type Target = A::Target;

    fn next(&self) -> bool {
        (**self).next()
    }

    fn prev(&self) -> bool {
        (**self).prev()
    }

    fn goto(&self, target: &Self::Target) -> bool {
        (**self).goto(target)
    }
}

impl<A: NavigationApi + ?Sized> NavigationApi for Box<A> {
    type Target = A::Target;

    fn next(&self) -> bool {
        (**self).next()
    }

    fn prev(&self) -> bool {
        (**self).prev()
    }

    fn goto(&self, target: &Self::Target) -> bool {
        (**self).goto(target)
    }
}

impl<A: NavigationApi + ?Sized> NavigationApi for Rc<A> {
    type Target = A::Target;

    fn next(&self) -> bool {
        (**self).next()
    }

    fn prev(&self) -> bool {
        (**self).prev()
    }

    fn goto(&self, target: &Self::Target) -> bool {
        (**self).goto(target)
    }
}

/// The two relative moves a key or tap can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
}

impl NavAction {
    /// Invoke the matching API operation and return its result.
    pub fn apply<A: NavigationApi + ?Sized>(self, api: &A) -> bool {
        match self {
            NavAction::Prev => api.prev(),
            NavAction::Next => api.next(),
        }
    }
}
