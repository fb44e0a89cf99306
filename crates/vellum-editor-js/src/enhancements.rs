//! Enhancement layer composed around the base editor.
//!
//! `EnhancedEditor` wraps `BrowserEditor` so that every refresh also redraws
//! the gutter. Everything else (search, autocomplete, drop loading, theme,
//! fullscreen) goes through `EditorHost` on that wrapper.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

use vellum_editor_browser::dom::set_class;
use vellum_editor_browser::{
    AutocompletePanel, BrowserClipboard, BrowserEditor, DropZone, LineGutter, SearchBar,
    SearchBarAction, ThemeSelect, dropped_file_info, parse_browser_key, read_file_text,
};
use vellum_editor_core::{
    Autocomplete, DroppedFile, EditorError, EditorHost, Fullscreen, Key, KeydownResult, Keymap,
    NotificationKind, Selection, Status, Theme, accept_dropped_file, apply_search, clear_source,
    copy_source, indent_selection, load_dropped_text, reject_drop, replace_and_refresh,
    report_copy,
};

/// The base editor plus the gutter.
pub(crate) struct EnhancedEditor {
    base: BrowserEditor,
    gutter: LineGutter,
}

impl EnhancedEditor {
    pub(crate) fn new(base: BrowserEditor, gutter: LineGutter) -> Self {
        Self { base, gutter }
    }

    pub(crate) fn base_mut(&mut self) -> &mut BrowserEditor {
        &mut self.base
    }

    pub(crate) fn textarea(&self) -> &HtmlTextAreaElement {
        self.base.textarea()
    }

    /// Remove the listeners the wrapper itself owns.
    pub(crate) fn detach(&mut self) {
        self.gutter.detach();
    }
}

impl EditorHost for EnhancedEditor {
    fn source(&self) -> String {
        self.base.source()
    }

    fn replace_source(&mut self, text: &str) {
        self.base.replace_source(text);
    }

    fn selection(&self) -> Selection {
        self.base.selection()
    }

    fn set_selection(&mut self, selection: Selection) {
        self.base.set_selection(selection);
    }

    fn focus(&mut self) {
        self.base.focus();
    }

    fn refresh(&mut self) {
        self.base.refresh();
        self.gutter.update(&self.base.source());
    }

    fn set_status(&mut self, status: Status) {
        self.base.set_status(status);
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.base.notify(message, kind);
    }
}

/// Widget handles owned by the session.
pub(crate) struct Widgets {
    pub(crate) search_bar: SearchBar,
    pub(crate) theme_select: ThemeSelect,
    pub(crate) drop_zone: DropZone,
    pub(crate) panel: AutocompletePanel,
    pub(crate) preview_panel: Element,
    pub(crate) body: HtmlElement,
}

/// All mutable editor state, shared by the event listeners.
pub(crate) struct Session {
    pub(crate) host: EnhancedEditor,
    widgets: Widgets,
    clipboard: BrowserClipboard,
    autocomplete: Autocomplete,
    theme: Theme,
    fullscreen: Fullscreen,
    keymap: Keymap,
    indent: String,
    on_change: Option<js_sys::Function>,
    /// Set by every edit; drained by `with_session` once the borrow ends.
    changed: bool,
}

pub(crate) type SharedSession = Rc<RefCell<Session>>;

/// Run `f` on the session unless it is already borrowed further up the stack.
///
/// If `f` edited the buffer, `onChange` is called after the borrow is
/// released, so the callback may call back into the editor.
pub(crate) fn with_session<R>(
    session: &SharedSession,
    f: impl FnOnce(&mut Session) -> R,
) -> Option<R> {
    let (result, change) = match session.try_borrow_mut() {
        Ok(mut s) => {
            let result = f(&mut s);
            (result, s.take_change())
        }
        Err(_) => {
            tracing::warn!("editor busy, dropping re-entrant event");
            return None;
        }
    };

    if let Some((callback, source)) = change {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&source)) {
            tracing::error!(?err, "onChange callback threw");
        }
    }
    Some(result)
}

impl Session {
    pub(crate) fn new(
        host: EnhancedEditor,
        widgets: Widgets,
        keymap: Keymap,
        indent: String,
        on_change: Option<js_sys::Function>,
    ) -> Self {
        let clipboard = BrowserClipboard::new(host.textarea().clone());
        Self {
            host,
            widgets,
            clipboard,
            autocomplete: Autocomplete::new(),
            theme: Theme::default(),
            fullscreen: Fullscreen::default(),
            keymap,
            indent,
            on_change,
            changed: false,
        }
    }

    /// Typing in the textarea: refresh all views, then run the edit hook.
    pub(crate) fn on_input(&mut self) {
        self.host.refresh();
        self.edited();
    }

    /// Runs after every buffer change, typed or not. Setting the textarea
    /// value from code fires no `input` event, so code paths call this
    /// themselves.
    fn edited(&mut self) {
        self.autocomplete.on_input(&self.host);
        self.widgets.panel.render(&self.autocomplete);
        self.changed = true;
    }

    /// The callback and new source, if the buffer changed since the last call.
    fn take_change(&mut self) -> Option<(js_sys::Function, String)> {
        if !std::mem::take(&mut self.changed) {
            return None;
        }
        let callback = self.on_change.clone()?;
        Some((callback, self.host.source()))
    }

    pub(crate) fn set_source(&mut self, text: &str) {
        replace_and_refresh(&mut self.host, text);
        self.edited();
    }

    pub(crate) fn clear(&mut self) {
        clear_source(&mut self.host);
        self.edited();
    }

    pub(crate) fn load_file(&mut self, info: &DroppedFile, text: &str) {
        load_dropped_text(&mut self.host, info, text);
        self.edited();
    }

    pub(crate) fn detach(&mut self) {
        self.host.detach();
    }

    /// Keydown inside the textarea. Returns whether to `preventDefault`.
    pub(crate) fn on_editor_keydown(&mut self, evt: &KeyboardEvent) -> bool {
        let key = parse_browser_key(&evt.key());

        if self.autocomplete.is_visible() {
            let result = self.autocomplete.handle_key(&key, &mut self.host);
            if result == KeydownResult::Handled && key == Key::Enter {
                // Enter only reports Handled after inserting a completion.
                self.edited();
                return true;
            }
            if self.autocomplete.is_visible() {
                self.widgets.panel.update_selection(&self.autocomplete);
            } else {
                self.widgets.panel.render(&self.autocomplete);
            }
            if result == KeydownResult::Handled {
                return true;
            }
        }

        if key == Key::Tab {
            indent_selection(&mut self.host, &self.indent);
            self.edited();
            return true;
        }
        false
    }

    pub(crate) fn pick_completion(&mut self, index: usize) {
        if self.autocomplete.choose(index, &mut self.host) {
            self.edited();
        } else {
            self.widgets.panel.render(&self.autocomplete);
        }
        self.host.focus();
    }

    pub(crate) fn on_search_action(&mut self, action: SearchBarAction) {
        match action {
            SearchBarAction::Search(direction) => {
                let query = self.widgets.search_bar.query();
                apply_search(&mut self.host, &query, direction);
            }
            SearchBarAction::Close => self.toggle_search(),
        }
    }

    pub(crate) fn toggle_search(&mut self) {
        let open = !self.widgets.search_bar.is_open();
        self.widgets.search_bar.set_open(open);
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        set_class(self.host.textarea(), Theme::DARK_CLASS, theme.is_dark());
        self.host.gutter.set_theme(theme);
        self.widgets.theme_select.set(theme);
        self.host
            .notify(&theme.switched_message(), NotificationKind::Info);
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    pub(crate) fn toggle_fullscreen(&mut self) {
        let panel = &self.widgets.preview_panel;
        self.fullscreen
            .set_active(panel.class_list().contains(Fullscreen::PANEL_CLASS));
        let active = self.fullscreen.toggle();
        set_class(panel, Fullscreen::PANEL_CLASS, active);
        set_class(&self.widgets.body, Fullscreen::BODY_CLASS, active);
        self.host
            .notify(self.fullscreen.message(), NotificationKind::Success);
    }

    pub(crate) fn help_text(&self) -> String {
        self.keymap.help_text()
    }

    pub(crate) fn render_preview(&mut self) {
        self.host.base_mut().render_preview();
    }
}

/// Copy the buffer without holding the session across the clipboard await.
pub(crate) fn spawn_copy(session: &SharedSession) {
    let Some((clipboard, source)) =
        with_session(session, |s| (s.clipboard.clone(), s.host.source()))
    else {
        return;
    };
    let session = Rc::clone(session);
    spawn_local(async move {
        let outcome = copy_source(&clipboard, &source).await;
        with_session(&session, |s| report_copy(&mut s.host, &outcome));
    });
}

/// Validate and read a dropped file, then load it.
pub(crate) fn spawn_file_load(session: &SharedSession, file: File) {
    let info = dropped_file_info(&file);
    if let Err(err) = accept_dropped_file(&info) {
        with_session(session, |s| reject_drop(&mut s.host, &err));
        return;
    }

    let session = Rc::clone(session);
    spawn_local(async move {
        match read_file_text(&file).await {
            Ok(text) => {
                with_session(&session, |s| s.load_file(&info, &text));
            }
            Err(source) => {
                let err = EditorError::FileRead {
                    name: info.name.clone(),
                    source,
                };
                with_session(&session, |s| reject_drop(&mut s.host, &err));
            }
        }
    });
}

/// Attach the textarea and widget listeners.
pub(crate) fn listen(session: &SharedSession) -> Vec<EventListener> {
    let (textarea, search_bar, theme_select, drop_zone, panel) = {
        let s = session.borrow();
        (
            s.host.textarea().clone(),
            s.widgets.search_bar.clone(),
            s.widgets.theme_select.clone(),
            s.widgets.drop_zone.clone(),
            s.widgets.panel.clone(),
        )
    };

    let mut listeners = Vec::new();

    listeners.push({
        let session = Rc::clone(session);
        EventListener::new(&textarea, "input", move |_| {
            with_session(&session, Session::on_input);
        })
    });

    listeners.push({
        let session = Rc::clone(session);
        EventListener::new_with_options(
            &textarea,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |evt| {
                let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if with_session(&session, |s| s.on_editor_keydown(evt)) == Some(true) {
                    evt.prevent_default();
                }
            },
        )
    });

    {
        let session = Rc::clone(session);
        listeners.extend(search_bar.listen(Rc::new(move |action: SearchBarAction| {
            with_session(&session, |s| s.on_search_action(action));
        })));
    }

    {
        let session = Rc::clone(session);
        listeners.push(theme_select.listen(Rc::new(move |theme: Theme| {
            with_session(&session, |s| s.set_theme(theme));
        })));
    }

    {
        let session = Rc::clone(session);
        listeners.extend(drop_zone.listen(Rc::new(move |file: File| {
            spawn_file_load(&session, file);
        })));
    }

    {
        let session = Rc::clone(session);
        listeners.push(panel.listen(Rc::new(move |index: usize| {
            with_session(&session, |s| s.pick_completion(index));
        })));
    }

    listeners
}
