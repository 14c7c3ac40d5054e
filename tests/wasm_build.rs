//! WASM build test
//!
//! Browser smoke test: the editor can be created against a real DOM element
//! and its commands round-trip through the JS-facing API.
#![cfg(target_arch = "wasm32")]

use markdown_editor_wasm::MarkdownEditor;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn preview_element(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_editor_creation_renders_sample() {
    preview_element("preview-sample");
    let editor = MarkdownEditor::new("preview-sample", JsValue::UNDEFINED).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let preview = document.get_element_by_id("preview-sample").unwrap();
    assert!(preview.inner_html().contains("<h1>"));
    assert!(editor.text().starts_with("# Welcome"));
}

#[wasm_bindgen_test]
fn test_missing_preview_element_is_an_error() {
    assert!(MarkdownEditor::new("does-not-exist", JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_commands_through_js_api() {
    preview_element("preview-commands");
    let editor = MarkdownEditor::new("preview-commands", JsValue::UNDEFINED).unwrap();

    editor.open_text("hello".to_string()).unwrap();
    editor.set_selection(1, 4);
    assert!(editor.run_command("bold").unwrap());
    assert_eq!(editor.text(), "h**ell**o");
    assert_eq!(editor.cursor(), 7);

    assert!(editor.handle_shortcut("z", true, false).unwrap());
    assert!(!editor.handle_shortcut("c", true, false).unwrap());
}

#[wasm_bindgen_test]
fn test_utf16_cursor_conversion() {
    preview_element("preview-utf16");
    let editor = MarkdownEditor::new("preview-utf16", JsValue::UNDEFINED).unwrap();

    // '🚀' is two UTF-16 units
    editor.replace_all("🚀ab".to_string(), 3).unwrap();
    assert_eq!(editor.cursor(), 3);
    editor.wrap_selection("*", "*").unwrap();
    assert_eq!(editor.text(), "🚀a**b");
}
