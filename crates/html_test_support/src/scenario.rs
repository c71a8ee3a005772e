//! TOML scenario fixtures for the remote forwarder.
//!
//! ```toml
//! document = """
//! html
//!   body
//!     div#s1.step
//! """
//!
//! [[events]]
//! click = "s1"
//! expect = "goto s1 -> prevent_default"
//! ```
//!
//! Each event is exactly one of `key_down`, `key_up`, `click` (a node label)
//! or `touch` (client x of every touch point, with `viewport`, default
//! 1000). `accepts = false` makes the mock engine refuse that event's calls.
//! `expect` is the recorded calls, comma separated (`-` for none), an arrow,
//! and the outcome: `none`, `prevent_default` or `consumed`.

use std::fs;
use std::path::Path;

use core_types::{EventOutcome, KeyCode, TouchStart};
use html::Id;
use input_core::{InputEvent, RemoteConfig, RemoteForwarder};
use serde::Deserialize;

use crate::navigator::{NavCall, RecordingNavigator};
use crate::outline::{Labels, ParsedOutline, parse_outline};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub document: String,
    #[serde(default)]
    pub config: Option<String>,
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioEvent {
    pub key_down: Option<KeyCode>,
    pub key_up: Option<KeyCode>,
    pub click: Option<String>,
    pub touch: Option<Vec<f32>>,
    #[serde(default = "default_viewport")]
    pub viewport: f32,
    #[serde(default = "default_accepts")]
    pub accepts: bool,
    pub expect: String,
}

fn default_viewport() -> f32 {
    1000.0
}

fn default_accepts() -> bool {
    true
}

pub fn load_scenario(path: &Path) -> Scenario {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario {path:?}: {err}"));
    toml::from_str(&content).unwrap_or_else(|err| panic!("invalid scenario {path:?}: {err}"))
}

/// Run every event of `scenario` through a fresh forwarder and return
/// `(expected, actual)` lines, one per event.
pub fn run_scenario(scenario: &Scenario) -> (Vec<String>, Vec<String>) {
    let ParsedOutline { dom, labels } = parse_outline(&scenario.document)
        .unwrap_or_else(|err| panic!("invalid scenario document: {err}"));
    let config = match &scenario.config {
        Some(src) => RemoteConfig::from_toml_str(src)
            .unwrap_or_else(|err| panic!("invalid scenario config: {err}")),
        None => RemoteConfig::default(),
    };

    let navigator = RecordingNavigator::<Id>::new();
    let forwarder = RemoteForwarder::new(&navigator, dom, config);

    let mut expected = Vec::new();
    let mut actual = Vec::new();
    for (i, event) in scenario.events.iter().enumerate() {
        let input = to_input(event, &labels);
        navigator.set_accepts(event.accepts);
        let outcome = forwarder.dispatch(&input);
        let calls = navigator.take_calls();

        expected.push(format!("#{i} {}", event.expect.trim()));
        actual.push(format!(
            "#{i} {} -> {}",
            render_calls(&calls, &labels),
            render_outcome(outcome)
        ));
    }
    (expected, actual)
}

fn to_input(event: &ScenarioEvent, labels: &Labels) -> InputEvent<Id> {
    let mut inputs = Vec::new();
    if let Some(key) = event.key_down {
        inputs.push(InputEvent::KeyDown(key));
    }
    if let Some(key) = event.key_up {
        inputs.push(InputEvent::KeyUp(key));
    }
    if let Some(label) = &event.click {
        inputs.push(InputEvent::Click {
            target: labels.id(label),
        });
    }
    if let Some(touches) = &event.touch {
        inputs.push(InputEvent::TouchStart(TouchStart {
            touches: touches.clone(),
            viewport_width: event.viewport,
        }));
    }
    assert_eq!(
        inputs.len(),
        1,
        "scenario event must set exactly one of key_down, key_up, click, touch: {event:?}"
    );
    inputs.remove(0)
}

fn render_calls(calls: &[NavCall<Id>], labels: &Labels) -> String {
    if calls.is_empty() {
        return "-".into();
    }
    calls
        .iter()
        .map(|call| match call {
            NavCall::Next => "next".to_string(),
            NavCall::Prev => "prev".to_string(),
            NavCall::Goto(id) => format!("goto {}", labels.label_of(*id)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_outcome(outcome: EventOutcome) -> &'static str {
    match (outcome.prevent_default, outcome.stop_immediate_propagation) {
        (false, false) => "none",
        (true, false) => "prevent_default",
        (_, true) => "consumed",
    }
}
