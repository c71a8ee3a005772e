use input_core::{NavigationApi, SetupError};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::API_FACTORY;

/// The opener's navigation API object, with its three operations resolved
/// once at acquisition.
#[derive(Clone, Debug)]
pub struct JsNavigator {
    api: JsValue,
    next: Function,
    prev: Function,
    goto: Function,
}

impl JsNavigator {
    pub fn from_api(api: JsValue) -> Result<Self, SetupError> {
        // An engine may hand back a function object carrying the operations.
        if !(api.is_object() || api.is_function()) {
            return Err(SetupError::FactoryFailed(format!(
                "{API_FACTORY}() returned {api:?}"
            )));
        }
        let next = operation(&api, "next")?;
        let prev = operation(&api, "prev")?;
        let goto = operation(&api, "goto")?;
        Ok(Self {
            api,
            next,
            prev,
            goto,
        })
    }

    // JS truthiness of the return value is the success signal; a throwing
    // call counts as "did not navigate".
    fn truthy(&self, name: &str, result: Result<JsValue, JsValue>) -> bool {
        match result {
            Ok(value) => value.is_truthy(),
            Err(err) => {
                log::warn!(target: "remote.web", "{name}() threw: {err:?}");
                false
            }
        }
    }
}

fn operation(api: &JsValue, name: &'static str) -> Result<Function, SetupError> {
    Reflect::get(api, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(SetupError::OperationMissing(name))
}

/// Look up `window.opener.impress` and call it. Any missing piece is fatal.
pub fn acquire_api(window: &Window) -> Result<JsNavigator, SetupError> {
    let opener = window.opener().unwrap_or(JsValue::NULL);
    if opener.is_null() || opener.is_undefined() {
        return Err(SetupError::OpenerMissing);
    }

    // Cross-origin openers throw on property access.
    let factory = Reflect::get(&opener, &JsValue::from_str(API_FACTORY))
        .map_err(|err| SetupError::FactoryFailed(format!("{err:?}")))?
        .dyn_into::<Function>()
        .map_err(|_| SetupError::FactoryMissing(API_FACTORY.to_string()))?;

    let api = factory
        .call0(&opener)
        .map_err(|err| SetupError::FactoryFailed(format!("{err:?}")))?;
    JsNavigator::from_api(api)
}

impl NavigationApi for JsNavigator {
    type Target = Element;

    fn next(&self) -> bool {
        self.truthy("next", self.next.call0(&self.api))
    }

    fn prev(&self) -> bool {
        self.truthy("prev", self.prev.call0(&self.api))
    }

    fn goto(&self, target: &Element) -> bool {
        self.truthy("goto", self.goto.call1(&self.api, target))
    }
}
