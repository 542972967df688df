//! Browser-side tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use formcraft_wasm::{validate_schema_js, FormEditor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_on_change_receives_schema_json() {
    let editor = FormEditor::new(None).unwrap();

    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&seen);
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |json: JsValue| {
        sink.borrow_mut().push(json.as_string().unwrap_or_default());
    });
    let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    editor.on_change(Some(function));

    editor.apply(r#"{ "op": "addElement", "type": "text" }"#).unwrap();
    editor.undo().unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].contains(r#""type":"text""#));
    assert!(seen[1].contains(r#""elements":[]"#));
    drop(closure);
}

#[wasm_bindgen_test]
fn test_invalid_json_is_rejected() {
    assert!(FormEditor::new(Some("not json".to_string())).is_err());
    assert!(validate_schema_js("not json").is_err());
}
