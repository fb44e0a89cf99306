//! WASM browser tests for the mounted editor.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, File, FilePropertyBag, HtmlElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

use vellum_editor_core::{EditorConfig, Fullscreen, Theme};
use vellum_editor_js::HtmlEditor;

thread_local! {
    static FIXTURE_ID: Cell<u32> = const { Cell::new(0) };
}

/// Full page markup with ids unique to one test.
struct Fixture {
    root: Element,
    config: EditorConfig,
}

impl Fixture {
    fn new() -> Self {
        let n = FIXTURE_ID.with(|id| {
            id.set(id.get() + 1);
            id.get()
        });
        let config = EditorConfig {
            editor_id: format!("editor-{n}"),
            preview_id: format!("preview-{n}"),
            status_id: format!("status-{n}"),
            line_count_id: format!("lines-{n}"),
            notification_id: format!("notification-{n}"),
            copy_button_id: format!("copy-{n}"),
            clear_button_id: format!("clear-{n}"),
            refresh_button_id: format!("refresh-{n}"),
            fullscreen_button_id: format!("fullscreen-{n}"),
            editor_wrapper_selector: format!("#wrapper-{n}"),
            panel_header_selector: format!("#header-{n}"),
            preview_panel_selector: format!("#panel-{n}"),
            welcome_delay_ms: 60_000,
            ..EditorConfig::default()
        };

        let doc = document();
        let root = doc.create_element("div").unwrap();
        root.set_inner_html(&format!(
            r#"<div class="editor-panel">
                 <div class="panel-header" id="header-{n}"></div>
                 <div class="editor-wrapper" id="wrapper-{n}"><textarea id="{}"></textarea></div>
               </div>
               <div class="preview-panel" id="panel-{n}"><iframe id="{}"></iframe></div>
               <span id="{}"></span><span id="{}"></span>
               <div id="{}" class="notification"></div>
               <button class="btn" id="{}" title="Copy"></button>
               <button class="btn" id="{}" title="Clear"></button>
               <button class="btn" id="{}" title="Refresh"></button>
               <button class="btn" id="{}" title="Fullscreen"></button>"#,
            config.editor_id,
            config.preview_id,
            config.status_id,
            config.line_count_id,
            config.notification_id,
            config.copy_button_id,
            config.clear_button_id,
            config.refresh_button_id,
            config.fullscreen_button_id,
        ));
        doc.body().unwrap().append_child(&root).unwrap();
        Self { root, config }
    }

    fn mount(&self, on_change: Option<js_sys::Function>) -> HtmlEditor {
        HtmlEditor::mount_with(self.config.clone(), on_change).unwrap()
    }

    fn find<T: JsCast>(&self, selector: &str) -> T {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn textarea(&self) -> HtmlTextAreaElement {
        self.find(&format!("#{}", self.config.editor_id))
    }

    fn panel(&self) -> HtmlElement {
        self.find(".autocomplete")
    }

    fn text_of(&self, id: &str) -> Option<String> {
        self.find::<HtmlElement>(&format!("#{id}")).text_content()
    }

    /// Replace the textarea value as if typed, caret at the end.
    fn type_text(&self, text: &str) {
        let textarea = self.textarea();
        textarea.set_value(text);
        let end = text.encode_utf16().count() as u32;
        textarea.set_selection_range(end, end).unwrap();
        textarea
            .dispatch_event(&Event::new("input").unwrap())
            .unwrap();
    }

    /// Dispatch a keydown on the textarea. Returns false if it was cancelled.
    fn press(&self, key: &str) -> bool {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let evt = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        self.textarea().dispatch_event(&evt).unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

type Changes = Rc<RefCell<Vec<String>>>;

/// A JS `onChange` function recording every source it receives.
fn change_recorder() -> (Closure<dyn FnMut(String)>, js_sys::Function, Changes) {
    let seen: Changes = Rc::new(RefCell::new(Vec::new()));
    let closure = {
        let seen = Rc::clone(&seen);
        Closure::<dyn FnMut(String)>::new(move |source: String| seen.borrow_mut().push(source))
    };
    let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    (closure, function, seen)
}

fn html_file(name: &str, media_type: &str, contents: &str) -> File {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let opts = FilePropertyBag::new();
    opts.set_type(media_type);
    File::new_with_str_sequence_and_options(&parts, name, &opts).unwrap()
}

// === Editing ===

#[wasm_bindgen_test]
fn test_tab_closes_suggestions_that_no_longer_match() {
    let fx = Fixture::new();
    let (_closure, on_change, seen) = change_recorder();
    let _editor = fx.mount(Some(on_change));

    fx.type_text("<d");
    assert!(fx.panel().class_list().contains("show"));

    assert!(!fx.press("Tab"), "Tab should be cancelled");
    assert_eq!(fx.textarea().value(), "<d    ");
    assert!(!fx.panel().class_list().contains("show"));

    // With the panel closed, arrows and Enter reach the textarea.
    assert!(fx.press("ArrowDown"));
    assert!(fx.press("Enter"));
    assert_eq!(fx.textarea().value(), "<d    ");

    assert_eq!(*seen.borrow(), vec!["<d".to_owned(), "<d    ".to_owned()]);
}

#[wasm_bindgen_test]
fn test_enter_inserts_selected_completion() {
    let fx = Fixture::new();
    let (_closure, on_change, seen) = change_recorder();
    let _editor = fx.mount(Some(on_change));

    fx.type_text("<body><d");
    assert!(!fx.press("ArrowDown"));
    assert!(!fx.press("Enter"));

    assert_eq!(fx.textarea().value(), "<body><div>");
    assert!(!fx.panel().class_list().contains("show"));
    assert_eq!(seen.borrow().last().map(String::as_str), Some("<body><div>"));
}

#[wasm_bindgen_test]
fn test_code_edits_reach_on_change() {
    let fx = Fixture::new();
    let (_closure, on_change, seen) = change_recorder();
    let editor = fx.mount(Some(on_change));

    editor.set_source("<p>a</p>\n<p>b</p>");
    assert_eq!(editor.get_source(), "<p>a</p>\n<p>b</p>");
    assert_eq!(fx.text_of(&fx.config.line_count_id).as_deref(), Some("Lines: 2"));
    assert_eq!(*seen.borrow(), vec!["<p>a</p>\n<p>b</p>".to_owned()]);

    // Row click inserts the picked tag.
    fx.type_text("<ul><l");
    let rows = fx.panel().query_selector_all(".autocomplete-item").unwrap();
    assert_eq!(rows.length(), 2);
    rows.get(1)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();

    assert_eq!(fx.textarea().value(), "<ul><link>");
    assert_eq!(seen.borrow().last().map(String::as_str), Some("<ul><link>"));
}

#[wasm_bindgen_test]
fn test_on_change_may_read_the_editor() {
    let fx = Fixture::new();
    let editor = Rc::new(RefCell::new(None::<HtmlEditor>));
    let read_back = Rc::new(RefCell::new(Vec::new()));

    let closure = {
        let editor = Rc::clone(&editor);
        let read_back = Rc::clone(&read_back);
        Closure::<dyn FnMut(String)>::new(move |_source: String| {
            if let Some(editor) = editor.borrow().as_ref() {
                read_back.borrow_mut().push(editor.get_source());
            }
        })
    };
    let on_change = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    *editor.borrow_mut() = Some(fx.mount(Some(on_change)));

    fx.type_text("<p>");
    assert_eq!(*read_back.borrow(), vec!["<p>".to_owned()]);

    // The callback holds the editor; break the cycle.
    editor.borrow_mut().take();
}

// === Theme and fullscreen ===

#[wasm_bindgen_test]
fn test_theme_switch_marks_editor_and_gutter() {
    let fx = Fixture::new();
    let editor = fx.mount(None);
    let gutter: HtmlElement = fx.find(".line-numbers");
    let select: HtmlSelectElement = fx.find("select");

    editor.toggle_theme();
    assert!(fx.textarea().class_list().contains(Theme::DARK_CLASS));
    assert!(gutter.class_list().contains(Theme::DARK_CLASS));
    assert_eq!(select.value(), Theme::Dark.as_str());
    assert_eq!(
        fx.text_of(&fx.config.notification_id),
        Some(Theme::Dark.switched_message())
    );

    editor.toggle_theme();
    assert!(!fx.textarea().class_list().contains(Theme::DARK_CLASS));
    assert!(!gutter.class_list().contains(Theme::DARK_CLASS));
    assert_eq!(select.value(), Theme::Light.as_str());
}

#[wasm_bindgen_test]
fn test_theme_select_change() {
    let fx = Fixture::new();
    let _editor = fx.mount(None);
    let select: HtmlSelectElement = fx.find("select");

    select.set_value(Theme::Dark.as_str());
    select.dispatch_event(&Event::new("change").unwrap()).unwrap();
    assert!(fx.textarea().class_list().contains(Theme::DARK_CLASS));
}

#[wasm_bindgen_test]
fn test_fullscreen_toggle_sets_panel_and_body() {
    let fx = Fixture::new();
    let editor = fx.mount(None);
    let panel: HtmlElement = fx.find(&fx.config.preview_panel_selector);
    let body = document().body().unwrap();

    editor.toggle_fullscreen();
    assert!(panel.class_list().contains(Fullscreen::PANEL_CLASS));
    assert!(body.class_list().contains(Fullscreen::BODY_CLASS));
    assert_eq!(
        fx.text_of(&fx.config.notification_id).as_deref(),
        Some("Fullscreen mode activated")
    );

    editor.toggle_fullscreen();
    assert!(!panel.class_list().contains(Fullscreen::PANEL_CLASS));
    assert!(!body.class_list().contains(Fullscreen::BODY_CLASS));
}

// === File loading ===

#[wasm_bindgen_test]
async fn test_html_file_replaces_source() {
    let fx = Fixture::new();
    let (_closure, on_change, seen) = change_recorder();
    let editor = fx.mount(Some(on_change));
    editor.set_source("<p>old</p>");

    editor.load_file(html_file("page.html", "text/html", "<h1>new</h1>"));
    TimeoutFuture::new(50).await;

    assert_eq!(editor.get_source(), "<h1>new</h1>");
    assert_eq!(
        fx.text_of(&fx.config.notification_id).as_deref(),
        Some("File loaded!")
    );
    assert_eq!(seen.borrow().last().map(String::as_str), Some("<h1>new</h1>"));
}

#[wasm_bindgen_test]
async fn test_rejected_file_leaves_source() {
    let fx = Fixture::new();
    let (_closure, on_change, seen) = change_recorder();
    let editor = fx.mount(Some(on_change));
    editor.set_source("<p>keep</p>");

    editor.load_file(html_file("page.txt", "text/plain", "not html"));
    TimeoutFuture::new(50).await;

    assert_eq!(editor.get_source(), "<p>keep</p>");
    assert_eq!(
        fx.text_of(&fx.config.notification_id).as_deref(),
        Some("Only HTML files are supported.")
    );
    assert_eq!(seen.borrow().len(), 1);
}

// === Lifecycle ===

#[wasm_bindgen_test]
fn test_tooltips_installed() {
    let fx = Fixture::new();
    let _editor = fx.mount(None);
    let copy: HtmlElement = fx.find(&format!("#{}", fx.config.copy_button_id));
    assert!(copy.class_list().contains("tooltip"));
    assert_eq!(copy.get_attribute("data-tooltip").as_deref(), Some("Copy"));
}

#[wasm_bindgen_test]
fn test_dispose_stops_listening() {
    let fx = Fixture::new();
    let (_closure, on_change, seen) = change_recorder();
    let mut editor = fx.mount(Some(on_change));
    assert_eq!(fx.text_of(&fx.config.line_count_id).as_deref(), Some("Lines: 1"));

    editor.dispose();
    fx.type_text("a\nb\nc");

    assert_eq!(fx.text_of(&fx.config.line_count_id).as_deref(), Some("Lines: 1"));
    assert!(seen.borrow().is_empty());
    // Tab is no longer intercepted either.
    assert!(fx.press("Tab"));
}
