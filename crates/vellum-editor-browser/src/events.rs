//! Keyboard event translation and the document-level shortcut dispatcher.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent};

use vellum_editor_core::{EditorCommand, Key, KeyCombo, Keymap, Modifiers};

/// Parse a `KeyboardEvent.key` value.
///
/// Single ASCII letters are lowercased so Caps Lock does not break shortcuts.
pub fn parse_browser_key(key: &str) -> Key {
    match key {
        "Backspace" => Key::Backspace,
        "Enter" => Key::Enter,
        "Tab" => Key::Tab,
        "Escape" | "Esc" => Key::Escape,
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        "ArrowUp" => Key::ArrowUp,
        "ArrowDown" => Key::ArrowDown,
        "" | "Unidentified" => Key::Unidentified,
        s if s.chars().count() == 1 => Key::character(s.to_ascii_lowercase()),
        _ => Key::Unidentified,
    }
}

pub fn modifiers_from_event(evt: &KeyboardEvent) -> Modifiers {
    Modifiers {
        ctrl: evt.ctrl_key(),
        alt: evt.alt_key(),
        shift: evt.shift_key(),
        meta: evt.meta_key(),
    }
}

pub fn combo_from_event(evt: &KeyboardEvent) -> KeyCombo {
    KeyCombo::with_modifiers(parse_browser_key(&evt.key()), modifiers_from_event(evt))
}

/// Owns the single document-level `keydown` registration for shortcuts.
///
/// Matched combos are `preventDefault`ed and handed to the callback.
/// Dropping the dispatcher removes the listener.
pub struct KeyDispatcher {
    _listener: EventListener,
}

impl KeyDispatcher {
    pub fn new<F>(target: &EventTarget, keymap: Keymap, mut on_command: F) -> Self
    where
        F: FnMut(EditorCommand) + 'static,
    {
        let listener = EventListener::new_with_options(
            target,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |evt| {
                let Some(evt) = evt.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let combo = combo_from_event(evt);
                if let Some(command) = keymap.lookup(&combo) {
                    evt.prevent_default();
                    tracing::debug!(%combo, ?command, "shortcut");
                    on_command(command);
                }
            },
        );
        Self {
            _listener: listener,
        }
    }
}
