//! Keys, key combinations and the global shortcut keymap.
//!
//! Platform code converts native key events into `KeyCombo`s; the `Keymap`
//! maps them onto `EditorCommand`s.

use smol_str::SmolStr;

/// Key values for keyboard input.
///
/// Only the keys the editor reacts to have their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    Backspace,
    Enter,
    Tab,
    Escape,

    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character(c) => write!(f, "{}", c.to_uppercase()),
            Self::Unidentified => write!(f, "?"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Enter => write!(f, "Enter"),
            Self::Tab => write!(f, "Tab"),
            Self::Escape => write!(f, "Esc"),
            Self::ArrowLeft => write!(f, "Left"),
            Self::ArrowRight => write!(f, "Right"),
            Self::ArrowUp => write!(f, "Up"),
            Self::ArrowDown => write!(f, "Down"),
        }
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }
}

impl std::fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Modifiers {
            ctrl,
            alt,
            shift,
            meta,
        } = self.modifiers;
        for (held, name) in [(ctrl, "Ctrl"), (alt, "Alt"), (shift, "Shift"), (meta, "Meta")] {
            if held {
                write!(f, "{name} + ")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Event was not a keybinding, let platform handle it.
    NotHandled,
    /// Event was acted on but the platform should still see it.
    PassThrough,
}

/// Commands reachable through global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    CopySource,
    ShowHelp,
    ToggleSearch,
    ToggleTheme,
}

impl EditorCommand {
    pub fn description(self) -> &'static str {
        match self {
            Self::CopySource => "Copy code",
            Self::ShowHelp => "Show this help",
            Self::ToggleSearch => "Search",
            Self::ToggleTheme => "Toggle dark theme",
        }
    }
}

const FEATURES: &[&str] = &[
    "Live HTML preview",
    "Copy code (shortcut or copy button)",
    "Clear code",
    "Fullscreen preview",
    "Drop an .html file to load it",
    "Tag autocomplete after typing <",
];

/// Global shortcut table.
///
/// Lookups require the exact modifier set: `Ctrl+Shift+S` does not trigger
/// the `Ctrl+S` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<(KeyCombo, EditorCommand)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCombo::ctrl(Key::character("s")), EditorCommand::CopySource),
                (KeyCombo::ctrl(Key::character("/")), EditorCommand::ShowHelp),
                (KeyCombo::ctrl(Key::character("f")), EditorCommand::ToggleSearch),
                (KeyCombo::ctrl(Key::character("d")), EditorCommand::ToggleTheme),
            ],
        }
    }
}

impl Keymap {
    /// An empty keymap.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `combo`, replacing any command already bound to it.
    pub fn bind(&mut self, combo: KeyCombo, command: EditorCommand) {
        if let Some(slot) = self.bindings.iter_mut().find(|(c, _)| *c == combo) {
            slot.1 = command;
        } else {
            self.bindings.push((combo, command));
        }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<EditorCommand> {
        self.bindings
            .iter()
            .find(|(c, _)| c == combo)
            .map(|(_, command)| *command)
    }

    pub fn bindings(&self) -> &[(KeyCombo, EditorCommand)] {
        &self.bindings
    }

    /// Text for the help dialog.
    pub fn help_text(&self) -> String {
        let mut out = String::from("Keyboard shortcuts:\n\n");
        for (combo, command) in &self.bindings {
            out.push_str(&format!("{combo}: {}\n", command.description()));
        }
        out.push_str("Tab: Indent\n\nFeatures:\n");
        for feature in FEATURES {
            out.push_str(&format!("- {feature}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl(Key::character("s"))),
            Some(EditorCommand::CopySource)
        );
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl(Key::character("d"))),
            Some(EditorCommand::ToggleTheme)
        );
        assert_eq!(keymap.lookup(&KeyCombo::new(Key::character("s"))), None);
    }

    #[test]
    fn test_lookup_requires_exact_modifiers() {
        let keymap = Keymap::default();
        let combo = KeyCombo::with_modifiers(
            Key::character("f"),
            Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(keymap.lookup(&combo), None);
    }

    #[test]
    fn test_bind_replaces() {
        let mut keymap = Keymap::empty();
        keymap.bind(KeyCombo::ctrl(Key::character("k")), EditorCommand::ShowHelp);
        keymap.bind(KeyCombo::ctrl(Key::character("k")), EditorCommand::ToggleSearch);
        assert_eq!(keymap.bindings().len(), 1);
        assert_eq!(
            keymap.lookup(&KeyCombo::ctrl(Key::character("k"))),
            Some(EditorCommand::ToggleSearch)
        );
    }

    #[test]
    fn test_combo_display() {
        assert_eq!(KeyCombo::ctrl(Key::character("/")).to_string(), "Ctrl + /");
        assert_eq!(
            KeyCombo::with_modifiers(Key::Enter, Modifiers::SHIFT).to_string(),
            "Shift + Enter"
        );
    }

    #[test]
    fn test_help_text() {
        insta::assert_snapshot!(Keymap::default().help_text(), @r"
        Keyboard shortcuts:

        Ctrl + S: Copy code
        Ctrl + /: Show this help
        Ctrl + F: Search
        Ctrl + D: Toggle dark theme
        Tab: Indent

        Features:
        - Live HTML preview
        - Copy code (shortcut or copy button)
        - Clear code
        - Fullscreen preview
        - Drop an .html file to load it
        - Tag autocomplete after typing <
        ");
    }
}
