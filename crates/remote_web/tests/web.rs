#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use input_core::{DocumentTree, NavigationApi, RemoteConfig, RemoteForwarder, SetupError, closest};
use js_sys::{Array, Function, Object, Reflect};
use remote_web::{JsNavigator, WebDocument, install};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event, EventInit};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn api(next: &str, prev: &str, goto: &str) -> JsValue {
    let api = Object::new();
    for (name, body) in [("next", next), ("prev", prev), ("goto", goto)] {
        Reflect::set(&api, &JsValue::from_str(name), &Function::new_with_args("el", body)).unwrap();
    }
    api.into()
}

#[wasm_bindgen_test]
fn navigator_reports_js_truthiness() {
    let nav = JsNavigator::from_api(api("return 1;", "return '';", "return el.id === 'go';")).unwrap();
    assert!(nav.next());
    assert!(!nav.prev());

    let el = document().create_element("div").unwrap();
    assert!(!nav.goto(&el));
    el.set_id("go");
    assert!(nav.goto(&el));
}

#[wasm_bindgen_test]
fn throwing_operation_counts_as_no_navigation() {
    let nav = JsNavigator::from_api(api("throw new Error('x');", "return true;", "return true;")).unwrap();
    assert!(!nav.next());
}

#[wasm_bindgen_test]
fn api_without_goto_is_rejected() {
    let api = Object::new();
    Reflect::set(&api, &JsValue::from_str("next"), &Function::new_no_args("")).unwrap();
    Reflect::set(&api, &JsValue::from_str("prev"), &Function::new_no_args("")).unwrap();
    assert!(matches!(
        JsNavigator::from_api(api.into()),
        Err(SetupError::OperationMissing("goto"))
    ));
}

#[wasm_bindgen_test]
fn web_document_walks_to_nearest_inactive_step() {
    let doc = document();
    let body = doc.body().unwrap();
    let step = doc.create_element("div").unwrap();
    step.set_class_name("step");
    let active = doc.create_element("div").unwrap();
    active.set_class_name("step active");
    let p = doc.create_element("p").unwrap();
    active.append_child(&p).unwrap();
    step.append_child(&active).unwrap();
    body.append_child(&step).unwrap();

    let tree = WebDocument::new(doc.clone());
    let found = closest(&tree, &p, |t, n| t.has_class(n, "step") && !t.has_class(n, "active"));
    assert_eq!(found, Some(step.clone()));
    assert!(tree.is_root(&doc.document_element().unwrap()));

    body.remove_child(&step).unwrap();
}

#[wasm_bindgen_test]
fn function_object_api_is_accepted() {
    let api = Function::new_no_args("return true;");
    for name in ["next", "prev", "goto"] {
        Reflect::set(&api, &JsValue::from_str(name), &Function::new_no_args("return true;")).unwrap();
    }
    let nav = JsNavigator::from_api(api.into()).unwrap();
    assert!(nav.next());
}

/// Api whose operations append to `this.calls`; `goto` answers with
/// `goto_result` evaluated against `el`.
fn recording_api(goto_result: &str) -> (JsValue, Array) {
    let calls = Array::new();
    let api = Object::new();
    Reflect::set(&api, &JsValue::from_str("calls"), &calls).unwrap();
    for (name, body) in [
        ("next", "this.calls.push('next'); return true;".to_string()),
        ("prev", "this.calls.push('prev'); return true;".to_string()),
        ("goto", format!("this.calls.push('goto ' + el.id); return {goto_result};")),
    ] {
        Reflect::set(&api, &JsValue::from_str(name), &Function::new_with_args("el", &body)).unwrap();
    }
    (api.into(), calls)
}

fn recorded(calls: &Array) -> Vec<String> {
    calls.iter().filter_map(|v| v.as_string()).collect()
}

/// A detached document holding `div#s.step > a[href=#t]@link` and `div#t`,
/// with the remote listeners installed on it.
fn installed_deck(goto_result: &str) -> (Element, Element, Array) {
    let doc = document().implementation().unwrap().create_html_document().unwrap();
    let body = doc.body().unwrap();
    let step = doc.create_element("div").unwrap();
    step.set_id("s");
    step.set_class_name("step");
    let link = doc.create_element("a").unwrap();
    link.set_attribute("href", "#t").unwrap();
    step.append_child(&link).unwrap();
    let target = doc.create_element("div").unwrap();
    target.set_id("t");
    target.set_class_name("step");
    body.append_child(&step).unwrap();
    body.append_child(&target).unwrap();

    let (api, calls) = recording_api(goto_result);
    let forwarder = RemoteForwarder::new(
        JsNavigator::from_api(api).unwrap(),
        WebDocument::new(doc.clone()),
        RemoteConfig::default(),
    );
    install(Rc::new(forwarder), &web_sys::window().unwrap(), &doc).unwrap();
    (step, link, calls)
}

/// Dispatch a bubbling, cancelable click; returns `defaultPrevented`.
fn click(target: &Element) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

#[wasm_bindgen_test]
fn accepted_link_click_stops_the_step_listener() {
    let (_, link, calls) = installed_deck("true");
    assert!(click(&link));
    assert_eq!(recorded(&calls), vec!["goto t"]);
}

#[wasm_bindgen_test]
fn refused_link_click_falls_through_to_the_step_listener() {
    let (_, link, calls) = installed_deck("false");
    assert!(!click(&link));
    assert_eq!(recorded(&calls), vec!["goto t", "goto s"]);
}

#[wasm_bindgen_test]
fn click_inside_step_outside_links_goes_to_the_step() {
    let (step, _, calls) = installed_deck("true");
    assert!(click(&step));
    assert_eq!(recorded(&calls), vec!["goto s"]);
}
