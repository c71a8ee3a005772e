//! The remote input forwarder.
//!
//! Five listeners, each turning one kind of raw input in the secondary
//! document into at most one navigation call:
//!
//! | listener    | event        | effect                                              |
//! |-------------|--------------|-----------------------------------------------------|
//! | `KeyDown`   | `keydown`    | block the browser default for bound keys            |
//! | `KeyUp`     | `keyup`      | `prev()`/`next()` for bound keys, block default     |
//! | `LinkClick` | `click`      | `goto()` the fragment target of the enclosing `<a>` |
//! | `StepClick` | `click`      | `goto()` the enclosing inactive step                |
//! | `TouchStart`| `touchstart` | `prev()`/`next()` for single taps near an edge      |
//!
//! Keys navigate on release and suppress on press: the press blocks native
//! scrolling before it happens, and the release fires once per keystroke no
//! matter how long the key is held.

use core_types::{EventOutcome, KeyCode, TouchStart, TouchZone};

use crate::api::{NavAction, NavigationApi};
use crate::config::RemoteConfig;
use crate::touch::touch_zone;
use crate::tree::{DocumentTree, closest};

/// A raw input event as delivered by the host, reduced to what the
/// listeners read.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent<N> {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Click { target: N },
    TouchStart(TouchStart),
}

impl<N> InputEvent<N> {
    pub fn event_type(&self) -> &'static str {
        match self {
            InputEvent::KeyDown(_) => "keydown",
            InputEvent::KeyUp(_) => "keyup",
            InputEvent::Click { .. } => "click",
            InputEvent::TouchStart(_) => "touchstart",
        }
    }
}

/// Identity of each registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listener {
    KeyDown,
    KeyUp,
    LinkClick,
    StepClick,
    TouchStart,
}

impl Listener {
    /// Registration order. Hosts must register in this order: for a click,
    /// `LinkClick` runs first and may stop `StepClick` from running.
    pub const ORDER: [Listener; 5] = [
        Listener::KeyDown,
        Listener::KeyUp,
        Listener::LinkClick,
        Listener::StepClick,
        Listener::TouchStart,
    ];

    pub fn event_type(self) -> &'static str {
        match self {
            Listener::KeyDown => "keydown",
            Listener::KeyUp => "keyup",
            Listener::LinkClick | Listener::StepClick => "click",
            Listener::TouchStart => "touchstart",
        }
    }
}

pub struct RemoteForwarder<A, T> {
    api: A,
    document: T,
    config: RemoteConfig,
}

impl<A, T> RemoteForwarder<A, T>
where
    T: DocumentTree,
    A: NavigationApi<Target = T::Node>,
{
    /// Takes the navigation handle up front: a forwarder cannot exist
    /// without one, so every listener can call it unconditionally.
    pub fn new(api: A, document: T, config: RemoteConfig) -> Self {
        Self {
            api,
            document,
            config,
        }
    }

    pub fn on_key_down(&self, key: KeyCode) -> EventOutcome {
        if self.config.is_handled_key(key) {
            EventOutcome::PREVENT_DEFAULT
        } else {
            EventOutcome::NONE
        }
    }

    /// The default is blocked for every bound key, whether or not the
    /// engine moved.
    pub fn on_key_up(&self, key: KeyCode) -> EventOutcome {
        let Some(action) = self.config.key_action(key) else {
            return EventOutcome::NONE;
        };
        let navigated = action.apply(&self.api);
        log::debug!(target: "remote.keys", "key {key} -> {action:?} (navigated: {navigated})");
        EventOutcome::PREVENT_DEFAULT
    }

    pub fn on_link_click(&self, target: &T::Node) -> EventOutcome {
        let Some(anchor) = closest(&self.document, target, |doc, n| doc.is_element(n, "a")) else {
            return EventOutcome::NONE;
        };

        let destination = match self.document.attribute(&anchor, "href") {
            Some(href) if href.starts_with('#') => {
                match self.document.element_by_id(&href[1..]) {
                    Some(element) => element,
                    None => {
                        log::debug!(target: "remote.click", "link {href:?} names no element");
                        return EventOutcome::NONE;
                    }
                }
            }
            _ => anchor,
        };

        if self.api.goto(&destination) {
            log::debug!(target: "remote.click", "link click -> goto {destination:?}");
            EventOutcome::CONSUMED
        } else {
            EventOutcome::NONE
        }
    }

    pub fn on_step_click(&self, target: &T::Node) -> EventOutcome {
        let step_class = self.config.step_class.as_str();
        let active_class = self.config.active_class.as_str();
        let Some(step) = closest(&self.document, target, |doc, n| {
            doc.has_class(n, step_class) && !doc.has_class(n, active_class)
        }) else {
            return EventOutcome::NONE;
        };

        if self.api.goto(&step) {
            log::debug!(target: "remote.click", "step click -> goto {step:?}");
            EventOutcome::PREVENT_DEFAULT
        } else {
            EventOutcome::NONE
        }
    }

    /// Multi-touch starts are gestures (pinch, two-finger scroll) and are
    /// left to the browser.
    pub fn on_touch_start(&self, touch: &TouchStart) -> EventOutcome {
        let &[x] = touch.touches.as_slice() else {
            return EventOutcome::NONE;
        };

        let action = match touch_zone(x, touch.viewport_width, self.config.touch_band) {
            TouchZone::Left => NavAction::Prev,
            TouchZone::Right => NavAction::Next,
            TouchZone::Middle => return EventOutcome::NONE,
        };

        if action.apply(&self.api) {
            log::debug!(target: "remote.touch", "tap at {x} of {} -> {action:?}", touch.viewport_width);
            EventOutcome::PREVENT_DEFAULT
        } else {
            EventOutcome::NONE
        }
    }

    /// Run a single listener against an event. Listeners registered for a
    /// different event type ignore it.
    pub fn handle(&self, listener: Listener, event: &InputEvent<T::Node>) -> EventOutcome {
        match (listener, event) {
            (Listener::KeyDown, InputEvent::KeyDown(key)) => self.on_key_down(*key),
            (Listener::KeyUp, InputEvent::KeyUp(key)) => self.on_key_up(*key),
            (Listener::LinkClick, InputEvent::Click { target }) => self.on_link_click(target),
            (Listener::StepClick, InputEvent::Click { target }) => self.on_step_click(target),
            (Listener::TouchStart, InputEvent::TouchStart(touch)) => self.on_touch_start(touch),
            _ => EventOutcome::NONE,
        }
    }

    /// Deliver `event` to every matching listener in registration order, the
    /// way the host's event loop would, and return the combined outcome.
    pub fn dispatch(&self, event: &InputEvent<T::Node>) -> EventOutcome {
        let mut outcome = EventOutcome::NONE;
        for listener in Listener::ORDER {
            if listener.event_type() != event.event_type() {
                continue;
            }
            outcome = outcome.merge(self.handle(listener, event));
            if outcome.stop_immediate_propagation {
                log::trace!(target: "remote.dispatch", "{listener:?} stopped {}", event.event_type());
                break;
            }
        }
        outcome
    }
}
