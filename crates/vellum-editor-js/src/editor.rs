//! HtmlEditor - the mounted editor exposed to JavaScript.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ErrorEvent, File, HtmlElement, Window};

use vellum_editor_browser::dom::{self, element_by_id, query};
use vellum_editor_browser::{
    AutocompletePanel, BrowserEditor, DropZone, KeyDispatcher, LineGutter, SearchBar, ThemeSelect,
    inject_styles,
};
use vellum_editor_core::{
    EditorCommand, EditorConfig, EditorError, EditorHost, Keymap, NotificationKind,
};

use crate::enhancements::{
    EnhancedEditor, Session, SharedSession, Widgets, listen, spawn_copy, spawn_file_load,
    with_session,
};
use crate::types::JsEditorConfig;

const WELCOME_MESSAGE: &str = "Welcome to the HTML editor! Edit the code on the left.";
const CLEAR_PROMPT: &str = "Really clear all code?";

/// The editor mounted on the current page.
///
/// Owns every listener it registers; `dispose` (or dropping the handle)
/// removes them.
#[wasm_bindgen]
pub struct HtmlEditor {
    session: SharedSession,
    config: EditorConfig,
    window: Window,
    listeners: Vec<EventListener>,
    shortcuts: Option<KeyDispatcher>,
    welcome: Option<Timeout>,
}

#[wasm_bindgen]
impl HtmlEditor {
    /// Mount on the page's existing markup.
    ///
    /// `on_change` is called with the new source after every edit.
    /// Throws if a required element is missing.
    pub fn mount(
        config: Option<JsEditorConfig>,
        on_change: Option<js_sys::Function>,
    ) -> Result<HtmlEditor, JsError> {
        let config = config.map(EditorConfig::from).unwrap_or_default();
        Self::mount_with(config, on_change).map_err(JsError::from)
    }

    /// The effective config, with every default filled in.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&JsEditorConfig::from(&self.config))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Copy the source to the clipboard.
    pub fn copy(&self) {
        spawn_copy(&self.session);
    }

    /// Clear the source after confirmation.
    pub fn clear(&self) {
        clear_with_confirm(&self.session, &self.window);
    }

    /// Re-render the preview.
    pub fn refresh(&self) {
        with_session(&self.session, Session::render_preview);
    }

    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) {
        with_session(&self.session, Session::toggle_fullscreen);
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) {
        with_session(&self.session, Session::toggle_theme);
    }

    #[wasm_bindgen(js_name = toggleSearch)]
    pub fn toggle_search(&self) {
        with_session(&self.session, Session::toggle_search);
    }

    /// Get the current source.
    #[wasm_bindgen(js_name = getSource)]
    pub fn get_source(&self) -> String {
        with_session(&self.session, |s| s.host.source()).unwrap_or_default()
    }

    /// Replace the source and refresh every view.
    #[wasm_bindgen(js_name = setSource)]
    pub fn set_source(&self, source: &str) {
        with_session(&self.session, |s| s.set_source(source));
    }

    /// Load a file the page obtained itself (e.g. from a file input).
    ///
    /// Goes through the same checks as a dropped file.
    #[wasm_bindgen(js_name = loadFile)]
    pub fn load_file(&self, file: File) {
        spawn_file_load(&self.session, file);
    }

    /// Remove every listener and pending welcome message.
    pub fn dispose(&mut self) {
        self.listeners.clear();
        self.shortcuts = None;
        self.welcome = None;
        with_session(&self.session, Session::detach);
        tracing::debug!("editor disposed");
    }
}

impl HtmlEditor {
    /// Mount with a fully resolved config.
    pub fn mount_with(
        config: EditorConfig,
        on_change: Option<js_sys::Function>,
    ) -> Result<Self, EditorError> {
        let window = dom::window()?;
        let doc = dom::document()?;
        inject_styles(&doc)?;

        let base = BrowserEditor::mount(&doc, &config)?;
        let wrapper: Element = query(&doc, &config.editor_wrapper_selector)?;
        let header: Element = query(&doc, &config.panel_header_selector)?;
        let preview_panel: Element = query(&doc, &config.preview_panel_selector)?;
        let body = doc
            .body()
            .ok_or_else(|| EditorError::MissingElement("body".into()))?;

        let gutter = LineGutter::mount(&doc, &wrapper, base.textarea())?;
        let widgets = Widgets {
            theme_select: ThemeSelect::mount(&doc, &header)?,
            search_bar: SearchBar::mount(&doc, &wrapper)?,
            drop_zone: DropZone::mount(&doc, &wrapper)?,
            panel: AutocompletePanel::mount(
                &doc,
                &wrapper,
                &config.autocomplete_left,
                &config.autocomplete_top,
            )?,
            preview_panel,
            body,
        };

        let keymap = Keymap::default();
        let notifier = base.notifier().clone();
        let session: SharedSession = Rc::new(RefCell::new(Session::new(
            EnhancedEditor::new(base, gutter),
            widgets,
            keymap.clone(),
            config.indent(),
            on_change,
        )));

        let mut listeners = listen(&session);
        listeners.extend(button_listeners(&session, &doc, &window, &config)?);
        listeners.extend(window_listeners(&session, &window));
        install_tooltips(&doc);

        let shortcuts = {
            let session = Rc::clone(&session);
            let window = window.clone();
            KeyDispatcher::new(&doc, keymap, move |command| {
                run_command(&session, &window, command)
            })
        };

        let welcome = {
            let duration = config.welcome_duration_ms;
            Timeout::new(config.welcome_delay_ms, move || {
                notifier.show_for(WELCOME_MESSAGE, NotificationKind::Success, duration);
            })
        };

        tracing::info!("HTML editor mounted");
        Ok(Self {
            session,
            config,
            window,
            listeners,
            shortcuts: Some(shortcuts),
            welcome: Some(welcome),
        })
    }
}

fn run_command(session: &SharedSession, window: &Window, command: EditorCommand) {
    match command {
        EditorCommand::CopySource => spawn_copy(session),
        EditorCommand::ShowHelp => {
            // The alert blocks, so it runs outside the session borrow.
            if let Some(text) = with_session(session, |s| s.help_text()) {
                let _ = window.alert_with_message(&text);
            }
        }
        EditorCommand::ToggleSearch => {
            with_session(session, Session::toggle_search);
        }
        EditorCommand::ToggleTheme => {
            with_session(session, Session::toggle_theme);
        }
    }
}

fn clear_with_confirm(session: &SharedSession, window: &Window) {
    if window.confirm_with_message(CLEAR_PROMPT).unwrap_or(false) {
        with_session(session, Session::clear);
    }
}

fn button_listeners(
    session: &SharedSession,
    doc: &Document,
    window: &Window,
    config: &EditorConfig,
) -> Result<Vec<EventListener>, EditorError> {
    let on_click = |id: &str, action: Rc<dyn Fn()>| -> Result<EventListener, EditorError> {
        let button: HtmlElement = element_by_id(doc, id)?;
        Ok(EventListener::new(&button, "click", move |_| action()))
    };

    let copy = {
        let session = Rc::clone(session);
        on_click(&config.copy_button_id, Rc::new(move || spawn_copy(&session)))?
    };
    let clear = {
        let session = Rc::clone(session);
        let window = window.clone();
        on_click(
            &config.clear_button_id,
            Rc::new(move || clear_with_confirm(&session, &window)),
        )?
    };
    let refresh = {
        let session = Rc::clone(session);
        on_click(
            &config.refresh_button_id,
            Rc::new(move || {
                with_session(&session, Session::render_preview);
            }),
        )?
    };
    let fullscreen = {
        let session = Rc::clone(session);
        on_click(
            &config.fullscreen_button_id,
            Rc::new(move || {
                with_session(&session, Session::toggle_fullscreen);
            }),
        )?
    };

    Ok(vec![copy, clear, refresh, fullscreen])
}

fn window_listeners(session: &SharedSession, window: &Window) -> Vec<EventListener> {
    let resize = {
        let session = Rc::clone(session);
        EventListener::new(window, "resize", move |_| {
            with_session(&session, Session::render_preview);
        })
    };
    let error = EventListener::new(window, "error", |evt| {
        match evt.dyn_ref::<ErrorEvent>() {
            Some(evt) => tracing::error!(
                message = %evt.message(),
                file = %evt.filename(),
                line = evt.lineno(),
                "uncaught error"
            ),
            None => tracing::error!("uncaught error"),
        }
    });
    vec![resize, error]
}

/// Give every titled `.btn` a `tooltip` class and `data-tooltip` text.
fn install_tooltips(doc: &Document) {
    let Ok(buttons) = doc.query_selector_all(".btn") else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(title) = button.get_attribute("title").filter(|t| !t.is_empty()) else {
            continue;
        };
        dom::set_class(&button, "tooltip", true);
        let _ = button.set_attribute("data-tooltip", &title);
    }
}
