//! Theme and fullscreen toggles.
//!
//! Both are pure class-state flips; the platform layer applies the classes
//! and shows the returned notification text.

use std::str::FromStr;

/// Editor color theme. Always starts as `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class added to the editor and gutter while dark.
    pub const DARK_CLASS: &'static str = "dark-theme";

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value of the matching `<option>` in the theme selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label shown in the theme selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light theme",
            Self::Dark => "Dark theme",
        }
    }

    /// Notification shown after switching to this theme.
    pub fn switched_message(self) -> String {
        format!("Switched to {} theme.", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Layout-level fullscreen overlay for the preview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fullscreen {
    active: bool,
}

impl Fullscreen {
    /// Class on the preview panel while active.
    pub const PANEL_CLASS: &'static str = "fullscreen";
    /// Class on `<body>` while active.
    pub const BODY_CLASS: &'static str = "fullscreen-mode";

    pub fn is_active(self) -> bool {
        self.active
    }

    /// Sync with the panel's current class state.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn message(self) -> &'static str {
        if self.active {
            "Fullscreen mode activated"
        } else {
            "Fullscreen mode deactivated"
        }
    }
}
