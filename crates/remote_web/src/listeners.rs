use std::rc::Rc;

use core_types::{EventOutcome, TouchStart};
use input_core::{InputEvent, Listener, RemoteConfig, RemoteForwarder};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, KeyboardEvent, TouchEvent, Window};

use crate::console;
use crate::document::WebDocument;
use crate::navigator::{JsNavigator, acquire_api};

type WebForwarder = RemoteForwarder<JsNavigator, WebDocument>;

/// Entry point for the remote window's page.
///
/// `config_toml` optionally overrides key bindings, tap bands and step
/// classes. Throws if the opener or its navigation API is unavailable.
#[wasm_bindgen]
pub fn start(config_toml: Option<String>) -> Result<(), JsValue> {
    console::init(log::LevelFilter::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = match config_toml {
        Some(src) => RemoteConfig::from_toml_str(&src).map_err(to_js)?,
        None => RemoteConfig::default(),
    };

    let api = acquire_api(&window).map_err(to_js)?;
    let forwarder = RemoteForwarder::new(api, WebDocument::new(document.clone()), config);
    install(Rc::new(forwarder), &window, &document)?;
    log::info!(target: "remote.web", "remote control attached");
    Ok(())
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Register the five listeners on `document`, in [`Listener::ORDER`]. Each
/// listener runs alone; ordering and immediate-propagation stops between the
/// two click listeners are left to the browser's dispatch.
pub fn install(forwarder: Rc<WebForwarder>, window: &Window, document: &Document) -> Result<(), JsValue> {
    for listener in Listener::ORDER {
        let forwarder = Rc::clone(&forwarder);
        let window = window.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = input_event(listener, &event, &window) else {
                return;
            };
            apply(&event, forwarder.handle(listener, &input));
        });
        document.add_event_listener_with_callback(
            listener.event_type(),
            callback.as_ref().unchecked_ref(),
        )?;
        // Listeners live as long as the window.
        callback.forget();
    }
    Ok(())
}

fn input_event(listener: Listener, event: &Event, window: &Window) -> Option<InputEvent<web_sys::Element>> {
    match listener {
        Listener::KeyDown => Some(InputEvent::KeyDown(event.dyn_ref::<KeyboardEvent>()?.key_code())),
        Listener::KeyUp => Some(InputEvent::KeyUp(event.dyn_ref::<KeyboardEvent>()?.key_code())),
        Listener::LinkClick | Listener::StepClick => {
            let target = WebDocument::element_for_target(event.target()?)?;
            Some(InputEvent::Click { target })
        }
        Listener::TouchStart => {
            let touches = event.dyn_ref::<TouchEvent>()?.touches();
            let xs = (0..touches.length())
                .filter_map(|i| touches.get(i))
                .map(|touch| touch.client_x() as f32)
                .collect();
            let viewport_width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0) as f32;
            Some(InputEvent::TouchStart(TouchStart {
                touches: xs,
                viewport_width,
            }))
        }
    }
}

fn apply(event: &Event, outcome: EventOutcome) {
    if outcome.stop_immediate_propagation {
        event.stop_immediate_propagation();
    }
    if outcome.prevent_default {
        event.prevent_default();
    }
}
