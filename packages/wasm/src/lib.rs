use formcraft_editor::{parse_command, parse_script, EditorOptions, EditorSession};
use formcraft_schema::Schema;
use formcraft_validator::{validate, validate_schema, ValidateOptions};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryState {
    can_undo: bool,
    can_redo: bool,
    undo_levels: usize,
    redo_levels: usize,
}

type Listener = Rc<dyn Fn(&str)>;

/// State shared by a `FormEditor` and its change listener.
///
/// The session is only borrowed while an operation runs. Change
/// notifications are queued during that borrow and delivered after it ends,
/// so a listener may call back into the editor.
struct EditorState {
    session: RefCell<EditorSession>,
    pending: Rc<RefCell<VecDeque<String>>>,
    on_change: Rc<RefCell<Option<Listener>>>,
}

/// One editor session owned by a JS object
#[wasm_bindgen]
#[derive(Clone)]
pub struct FormEditor {
    state: Rc<EditorState>,
}

impl FormEditor {
    fn from_json(schema_json: Option<&str>) -> Result<FormEditor, String> {
        let mut session = match schema_json {
            Some(json) => {
                let schema =
                    Schema::from_json(json).map_err(|e| format!("Invalid format: {}", e))?;
                EditorSession::from_schema(schema, EditorOptions::default())
                    .map_err(|e| format!("Invalid format: {}", e))?
            }
            None => EditorSession::new(EditorOptions::default()),
        };

        let pending: Rc<RefCell<VecDeque<String>>> = Rc::new(RefCell::new(VecDeque::new()));
        let on_change: Rc<RefCell<Option<Listener>>> = Rc::new(RefCell::new(None));
        let queue = Rc::clone(&pending);
        let listening = Rc::clone(&on_change);
        session.set_change_listener(move |schema: &Schema| {
            if listening.borrow().is_none() {
                return;
            }
            if let Ok(json) = schema.to_json() {
                queue.borrow_mut().push_back(json);
            }
        });

        Ok(FormEditor {
            state: Rc::new(EditorState {
                session: RefCell::new(session),
                pending,
                on_change,
            }),
        })
    }

    /// Run `f` against the session, then deliver the notifications it queued
    fn edit<R>(&self, f: impl FnOnce(&mut EditorSession) -> R) -> Result<R, String> {
        let result = {
            let mut session = self
                .state
                .session
                .try_borrow_mut()
                .map_err(|_| "Editor is busy".to_string())?;
            f(&mut session)
        };
        self.flush();
        Ok(result)
    }

    /// Deliver queued notifications in order. Nested edits made by a listener
    /// queue their own notifications, which this same loop (or the nested
    /// call's own flush) delivers.
    fn flush(&self) {
        loop {
            let next = self.state.pending.borrow_mut().pop_front();
            let Some(json) = next else {
                break;
            };
            let listener = self.state.on_change.borrow().clone();
            if let Some(listener) = listener {
                listener(&json);
            }
        }
    }

    fn set_listener(&self, listener: Option<Listener>) {
        *self.state.on_change.borrow_mut() = listener;
    }

    fn session(&self) -> std::cell::Ref<'_, EditorSession> {
        self.state.session.borrow()
    }

    fn apply_json(&self, command_json: &str) -> Result<String, String> {
        let command = parse_command(command_json).map_err(|e| e.to_string())?;
        let outcome = self.edit(|session| session.apply(command))?;
        serde_json::to_string(&outcome).map_err(|e| e.to_string())
    }

    fn apply_script_json(&self, script_json: &str) -> Result<String, String> {
        let commands = parse_script(script_json).map_err(|e| e.to_string())?;
        let outcomes = self.edit(|session| session.apply_all(commands))?;
        serde_json::to_string(&outcomes).map_err(|e| e.to_string())
    }

    fn schema_string(&self) -> Result<String, String> {
        self.session().schema().to_json().map_err(|e| e.to_string())
    }

    fn history_state(&self) -> HistoryState {
        let session = self.session();
        let history = session.history();
        HistoryState {
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
            undo_levels: history.undo_levels(),
            redo_levels: history.redo_levels(),
        }
    }
}

#[wasm_bindgen]
impl FormEditor {
    /// Open a new form, or an existing one from its JSON
    #[wasm_bindgen(constructor)]
    pub fn new(schema_json: Option<String>) -> Result<FormEditor, JsValue> {
        FormEditor::from_json(schema_json.as_deref()).map_err(to_js)
    }

    /// Run one command (`{"op": ...}`) and return its outcome as JSON
    pub fn apply(&self, command_json: &str) -> Result<String, JsValue> {
        self.apply_json(command_json).map_err(to_js)
    }

    /// Run a JSON array of commands and return their outcomes as JSON
    #[wasm_bindgen(js_name = applyScript)]
    pub fn apply_script(&self, script_json: &str) -> Result<String, JsValue> {
        self.apply_script_json(script_json).map_err(to_js)
    }

    pub fn undo(&self) -> Result<bool, JsValue> {
        self.edit(EditorSession::undo).map_err(to_js)
    }

    pub fn redo(&self) -> Result<bool, JsValue> {
        self.edit(EditorSession::redo).map_err(to_js)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session().can_redo()
    }

    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.history_state()).map_err(|e| to_js(e.to_string()))
    }

    #[wasm_bindgen(js_name = schemaJson)]
    pub fn schema_json(&self) -> Result<String, JsValue> {
        self.schema_string().map_err(to_js)
    }

    /// Root element IDs on the active page
    #[wasm_bindgen(js_name = pageElementsJson)]
    pub fn page_elements_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session().page_elements()).map_err(|e| to_js(e.to_string()))
    }

    /// `{"selected": [...], "primary": ...}`
    #[wasm_bindgen(js_name = selectedJson)]
    pub fn selected_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session().selection()).map_err(|e| to_js(e.to_string()))
    }

    #[wasm_bindgen(js_name = activePage)]
    pub fn active_page(&self) -> Option<String> {
        self.session().active_page().map(|page| page.to_string())
    }

    /// Bumped on every change; cheap to poll for autosave
    pub fn revision(&self) -> f64 {
        self.session().revision() as f64
    }

    /// Called with the schema JSON after every change. Pass nothing to clear.
    /// The callback may call back into this editor; its own changes are
    /// reported after the current notification returns.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Option<js_sys::Function>) {
        let listener = callback.map(|function| {
            Rc::new(move |json: &str| {
                // Listener exceptions are ignored
                let _ = function.call1(&JsValue::NULL, &JsValue::from_str(json));
            }) as Listener
        });
        self.set_listener(listener);
    }
}

/// Publish-time errors for a schema, as a JSON array of messages
#[wasm_bindgen(js_name = validateSchema)]
pub fn validate_schema_js(schema_json: &str) -> Result<String, JsValue> {
    validate_messages(schema_json).map_err(to_js)
}

/// Every diagnostic (errors and warnings) for a schema, as JSON
#[wasm_bindgen(js_name = validateDiagnostics)]
pub fn validate_diagnostics_js(schema_json: &str) -> Result<String, JsValue> {
    let schema = Schema::from_json(schema_json).map_err(|e| to_js(format!("Invalid format: {}", e)))?;
    let diagnostics = validate(&schema, ValidateOptions::default());
    serde_json::to_string(&diagnostics).map_err(|e| to_js(e.to_string()))
}

fn validate_messages(schema_json: &str) -> Result<String, String> {
    let schema = Schema::from_json(schema_json).map_err(|e| format!("Invalid format: {}", e))?;
    serde_json::to_string(&validate_schema(&schema)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_round_trip() {
        let editor = FormEditor::from_json(None).unwrap();
        let created = editor
            .apply_json(r#"{ "op": "addElement", "type": "grid", "columns": 3 }"#)
            .unwrap();
        assert!(created.starts_with(r#"{"outcome":"created","id":"#));
        assert!(editor.can_undo());

        let schema = Schema::from_json(&editor.schema_string().unwrap()).unwrap();
        assert_eq!(schema.elements[0].elements.len(), 3);

        assert!(editor.undo().unwrap());
        assert!(editor.history_state().can_redo);
        assert_eq!(editor.revision(), 2.0);
    }

    #[test]
    fn test_open_existing_schema() {
        let json = Schema::new("Existing").to_json().unwrap();
        let editor = FormEditor::from_json(Some(&json)).unwrap();
        assert_eq!(editor.session().schema().name, "Existing");

        assert!(FormEditor::from_json(Some("{}")).is_err());
    }

    #[test]
    fn test_apply_script() {
        let editor = FormEditor::from_json(None).unwrap();
        let outcomes = editor
            .apply_script_json(r#"[{ "op": "undo" }, { "op": "setName", "name": "Quiz" }]"#)
            .unwrap();
        assert_eq!(outcomes, r#"[{"outcome":"unchanged"},{"outcome":"changed"}]"#);
        assert!(editor.apply_script_json("nope").is_err());
    }

    #[test]
    fn test_listener_can_edit_during_notification() {
        let editor = FormEditor::from_json(None).unwrap();
        let handle = editor.clone();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let log = Rc::clone(&seen);
        editor.set_listener(Some(Rc::new(move |json: &str| {
            log.borrow_mut().push(json.to_string());
            let first = log.borrow().len() == 1;
            if first {
                let outcome = handle
                    .apply_json(r#"{ "op": "setName", "name": "Nested" }"#)
                    .unwrap();
                assert_eq!(outcome, r#"{"outcome":"changed"}"#);
            }
        })));

        editor
            .apply_json(r#"{ "op": "addElement", "type": "text" }"#)
            .unwrap();

        let session = editor.session();
        assert_eq!(session.schema().name, "Nested");
        assert_eq!(session.element_count(), 1);
        assert_eq!(session.history().undo_levels(), 2);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains(r#""name":"Untitled Form""#));
        assert!(seen[1].contains(r#""name":"Nested""#));
    }

    #[test]
    fn test_notifications_follow_edit_order() {
        let editor = FormEditor::from_json(None).unwrap();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let log = Rc::clone(&seen);
        editor.set_listener(Some(Rc::new(move |json: &str| {
            log.borrow_mut().push(json.to_string());
        })));

        editor
            .apply_script_json(
                r#"[{ "op": "setName", "name": "A" }, { "op": "setName", "name": "B" }]"#,
            )
            .unwrap();
        editor.set_listener(None);
        editor.undo().unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains(r#""name":"A""#));
        assert!(seen[1].contains(r#""name":"B""#));
    }

    #[test]
    fn test_validate_messages() {
        let json = Schema::new("").to_json().unwrap();
        assert_eq!(
            validate_messages(&json).unwrap(),
            r#"["Form name is required","Form must have at least one element"]"#
        );
    }
}
