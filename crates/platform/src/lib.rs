use std::collections::BTreeMap;

use core_types::{EventOutcome, KeyCode, TouchStart};
use input_core::{DocumentTree, InputEvent, NavigationApi, RemoteForwarder};
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::{ElementState, KeyEvent, Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode as WinitKey, PhysicalKey},
    window::{Window, WindowId},
};

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
}

/// Run a native remote-control window until it is closed. Keyboard and touch
/// input in the window drive `forwarder`.
pub fn run<A, T>(forwarder: RemoteForwarder<A, T>) -> Result<(), PlatformError>
where
    T: DocumentTree,
    A: NavigationApi<Target = T::Node>,
{
    let event_loop = EventLoop::new()?;
    let mut app = RemoteWindow {
        window: None,
        forwarder,
        touches: TouchTracker::default(),
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct RemoteWindow<A, T> {
    window: Option<Window>,
    forwarder: RemoteForwarder<A, T>,
    touches: TouchTracker,
}

impl<A, T> RemoteWindow<A, T>
where
    T: DocumentTree,
    A: NavigationApi<Target = T::Node>,
{
    fn viewport_width(&self) -> f32 {
        self.window
            .as_ref()
            .map(|w| w.inner_size().width as f32)
            .unwrap_or(0.0)
    }

    fn on_key(&mut self, event: &KeyEvent) {
        let Some(key) = dom_key_code(event.physical_key) else {
            return;
        };
        let input = match event.state {
            ElementState::Pressed => InputEvent::KeyDown(key),
            ElementState::Released => InputEvent::KeyUp(key),
        };
        let outcome = self.forwarder.dispatch(&input);
        log_outcome(input.event_type(), outcome);
    }

    fn on_touch(&mut self, touch: &Touch) {
        let x = touch.location.x as f32;
        let width = self.viewport_width();
        let Some(start) = self.touches.update(touch.id, touch.phase, x, width) else {
            return;
        };
        let outcome = self.forwarder.dispatch(&InputEvent::TouchStart(start));
        log_outcome("touchstart", outcome);
    }
}

impl<A, T> ApplicationHandler for RemoteWindow<A, T>
where
    T: DocumentTree,
    A: NavigationApi<Target = T::Node>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(Window::default_attributes().with_title("impress remote")) {
            Ok(window) => self.window = Some(window),
            Err(err) => {
                log::error!("failed to create remote window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::Touch(touch) => self.on_touch(&touch),
            _ => {}
        }
    }
}

// Nothing in a native window has a default action to block; the outcome is
// only worth a trace.
fn log_outcome(event_type: &str, outcome: EventOutcome) {
    if !outcome.is_none() {
        log::trace!(target: "remote.platform", "{event_type}: {outcome:?}");
    }
}

/// DOM `keyCode` for a physical key, for the keys a presenter might bind.
pub fn dom_key_code(key: PhysicalKey) -> Option<KeyCode> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    Some(match code {
        WinitKey::Backspace => 8,
        WinitKey::Tab => 9,
        WinitKey::Enter | WinitKey::NumpadEnter => 13,
        WinitKey::Escape => 27,
        WinitKey::Space => 32,
        WinitKey::PageUp => 33,
        WinitKey::PageDown => 34,
        WinitKey::End => 35,
        WinitKey::Home => 36,
        WinitKey::ArrowLeft => 37,
        WinitKey::ArrowUp => 38,
        WinitKey::ArrowRight => 39,
        WinitKey::ArrowDown => 40,
        WinitKey::Delete => 46,
        _ => return None,
    })
}

/// Active touch points by id, so a new touch knows how many fingers are down.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: BTreeMap<u64, f32>,
}

impl TouchTracker {
    /// Feed one touch phase change. Returns the `touchstart` snapshot when a
    /// finger lands.
    pub fn update(&mut self, id: u64, phase: TouchPhase, x: f32, viewport_width: f32) -> Option<TouchStart> {
        match phase {
            TouchPhase::Started => {
                self.active.insert(id, x);
                Some(TouchStart {
                    touches: self.active.values().copied().collect(),
                    viewport_width,
                })
            }
            TouchPhase::Moved => {
                if let Some(pos) = self.active.get_mut(&id) {
                    *pos = x;
                }
                None
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.remove(&id);
                None
            }
        }
    }
}
