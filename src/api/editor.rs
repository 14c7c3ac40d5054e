//! `MarkdownEditor` JavaScript class
//!
//! Wraps an [`EditSession`] for the page. Every call that can arm a
//! debouncer re-arms one browser `setTimeout` at the session's next
//! deadline; when it fires the session ticks and the timer is re-armed for
//! whatever is still pending.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

use crate::api::helpers::{deserialize, offset_to_js, selection_from_js, serialize};
use crate::commands::EditorCommand;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::render::{ElementSurface, MarkdownRenderer};
use crate::schedule::PerformanceClock;
use crate::session::EditSession;
use crate::utils::utf16_to_byte;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

const DEFAULT_FILE_NAME: &str = "document.md";
const MARKDOWN_MIME: &str = "text/markdown";

struct Inner {
    session: RefCell<EditSession>,
    window: Window,
    /// Handle of the armed `setTimeout`, if any
    timer: Cell<Option<i32>>,
    on_timeout: Closure<dyn FnMut()>,
}

impl Inner {
    fn rearm(&self) -> Result<(), EditorError> {
        if let Some(handle) = self.timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }

        let Some(delay) = self.session.borrow().next_delay_ms() else {
            return Ok(());
        };

        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_timeout.as_ref().unchecked_ref(),
                i32::try_from(delay).unwrap_or(i32::MAX),
            )
            .map_err(EditorError::dom)?;
        self.timer.set(Some(handle));
        Ok(())
    }

    fn fire(&self) {
        self.timer.set(None);
        let fired = self.session.borrow_mut().tick();
        if fired.any() {
            wasm_log!("timer fired: rendered={}, saved={}", fired.rendered, fired.saved);
        } else {
            wasm_warn!("timer fired before any deadline was due");
        }

        if let Err(e) = self.rearm() {
            wasm_error!("Failed to re-arm editor timer: {}", e);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

#[wasm_bindgen]
pub struct MarkdownEditor {
    inner: Rc<Inner>,
}

#[wasm_bindgen]
impl MarkdownEditor {
    /// Create an editor rendering into the element with id `preview_id`
    ///
    /// `config` is an optional object with any of `renderDelayMs`,
    /// `historyDelayMs`, `historyLimit` and `initialText`.
    #[wasm_bindgen(constructor)]
    pub fn new(preview_id: &str, config: JsValue) -> Result<MarkdownEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            deserialize(config, "Invalid editor config")?
        };
        config.validate()?;

        let window = web_sys::window().ok_or(EditorError::NoWindow)?;
        let document = window.document().ok_or(EditorError::NoDocument)?;
        let preview = document
            .get_element_by_id(preview_id)
            .ok_or_else(|| EditorError::ElementNotFound(preview_id.to_string()))?;

        let session = EditSession::new(
            config,
            Box::new(MarkdownRenderer::new()),
            Box::new(ElementSurface::new(preview)),
            Box::new(PerformanceClock::new()),
        );

        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let weak = weak.clone();
            Inner {
                session: RefCell::new(session),
                window,
                timer: Cell::new(None),
                on_timeout: Closure::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.fire();
                    }
                }),
            }
        });

        wasm_info!("MarkdownEditor created (preview: #{})", preview_id);
        Ok(MarkdownEditor { inner })
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Wrap the current selection with `before`/`after`
    #[wasm_bindgen(js_name = wrapSelection)]
    pub fn wrap_selection(&self, before: &str, after: &str) -> Result<(), JsValue> {
        self.edit(|session| session.wrap_selection(before, after))
    }

    /// Prefix the current line
    #[wasm_bindgen(js_name = insertLinePrefix)]
    pub fn insert_line_prefix(&self, prefix: &str) -> Result<(), JsValue> {
        self.edit(|session| session.insert_line_prefix(prefix))
    }

    /// Replace the whole text; `cursor` is in UTF-16 units
    #[wasm_bindgen(js_name = replaceAll)]
    pub fn replace_all(&self, text: String, cursor: usize) -> Result<(), JsValue> {
        let cursor = utf16_to_byte(&text, cursor);
        self.edit(|session| session.replace_all(text, cursor))
    }

    pub fn undo(&self) -> Result<bool, JsValue> {
        self.edit(|session| session.request_undo())
    }

    pub fn redo(&self) -> Result<bool, JsValue> {
        self.edit(|session| session.request_redo())
    }

    /// Run a toolbar command by name (`bold`, `italic`, `heading`, `link`,
    /// `code`, `list`, `undo`, `redo`)
    #[wasm_bindgen(js_name = runCommand)]
    pub fn run_command(&self, name: &str) -> Result<bool, JsValue> {
        let command = EditorCommand::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown command: {}", name)))?;
        self.edit(|session| session.apply(command))
    }

    /// Handle a keydown; returns `true` if the event was consumed and the
    /// page should call `preventDefault()`
    #[wasm_bindgen(js_name = handleShortcut)]
    pub fn handle_shortcut(&self, key: &str, ctrl: bool, shift: bool) -> Result<bool, JsValue> {
        let Some(command) = EditorCommand::from_shortcut(key, ctrl, shift) else {
            return Ok(false);
        };
        wasm_log!("shortcut {} -> {}", key, command.name());
        self.edit(|session| {
            session.apply(command);
        })?;
        Ok(true)
    }

    // ========================================================================
    // Host plumbing
    // ========================================================================

    /// Textarea `input` event: new value and selection (UTF-16 units)
    pub fn input(
        &self,
        text: String,
        selection_start: usize,
        selection_end: usize,
    ) -> Result<(), JsValue> {
        let selection = selection_from_js(&text, selection_start, selection_end);
        self.edit(|session| session.input(text, selection))
    }

    /// Selection moved without a text change
    #[wasm_bindgen(js_name = setSelection)]
    pub fn set_selection(&self, selection_start: usize, selection_end: usize) {
        let mut session = self.inner.session.borrow_mut();
        let selection = selection_from_js(session.text(), selection_start, selection_end);
        session.set_selection(selection);
    }

    /// Load text read from a file; the cursor goes to the start
    #[wasm_bindgen(js_name = openText)]
    pub fn open_text(&self, text: String) -> Result<(), JsValue> {
        wasm_info!("openText: {} bytes", text.len());
        self.edit(|session| session.replace_all(text, 0))
    }

    /// Offer the buffer as a Markdown download
    #[wasm_bindgen(js_name = saveAsFile)]
    pub fn save_as_file(&self, suggested_name: Option<String>) -> Result<(), JsValue> {
        let name = suggested_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        let session = self.inner.session.borrow();
        download_text(&self.inner.window, session.text(), &name)?;
        wasm_info!("saveAsFile: {} ({} bytes)", name, session.text().len());
        Ok(())
    }

    pub fn text(&self) -> String {
        self.inner.session.borrow().text().to_string()
    }

    /// Cursor in UTF-16 units, ready for `textarea.selectionStart`
    pub fn cursor(&self) -> usize {
        let session = self.inner.session.borrow();
        offset_to_js(session.text(), session.cursor())
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.session.borrow().history().can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.session.borrow().history().can_redo()
    }

    /// Pending-work state (`{ state: "idle" }` or `{ state: "pending", render, save }`)
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.session.borrow().state(), "Serialization error")
    }

    /// History log as JSON, for debugging
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.session.borrow().history())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl MarkdownEditor {
    /// Run `f` on the session, then re-arm the timer
    fn edit<T>(&self, f: impl FnOnce(&mut EditSession) -> T) -> Result<T, JsValue> {
        let result = f(&mut self.inner.session.borrow_mut());
        self.inner.rearm()?;
        Ok(result)
    }
}

fn download_text(window: &Window, text: &str, file_name: &str) -> Result<(), EditorError> {
    let document = window.document().ok_or(EditorError::NoDocument)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(MARKDOWN_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(EditorError::dom)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(EditorError::dom)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(EditorError::dom)?
        .dyn_into()
        .map_err(|_| EditorError::Dom("created element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(EditorError::dom)
}
