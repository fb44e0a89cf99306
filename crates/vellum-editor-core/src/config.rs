//! Editor configuration.
//!
//! Nothing here is persisted. The hosting page may hand a partial config to
//! the wasm entry point; every missing field falls back to its default.

use serde::Deserialize;

/// Element lookups and timings used when mounting the editor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Id of the source `<textarea>`.
    pub editor_id: String,
    /// Id of the preview `<iframe>`.
    pub preview_id: String,
    /// Id of the status line element.
    pub status_id: String,
    /// Id of the line count label.
    pub line_count_id: String,
    /// Id of the notification banner.
    pub notification_id: String,
    pub copy_button_id: String,
    pub clear_button_id: String,
    pub refresh_button_id: String,
    pub fullscreen_button_id: String,
    /// Container receiving the gutter, search bar, drop zone and
    /// autocomplete panel. Also the drop region.
    pub editor_wrapper_selector: String,
    /// Header the theme selector is appended to.
    pub panel_header_selector: String,
    /// Element toggled into fullscreen.
    pub preview_panel_selector: String,

    pub notification_timeout_ms: u32,
    pub welcome_delay_ms: u32,
    pub welcome_duration_ms: u32,
    /// Delay before a superseded preview blob URL is revoked.
    pub preview_release_delay_ms: u32,
    /// Spaces inserted by Tab.
    pub indent_width: usize,
    /// CSS `left` of the autocomplete panel.
    pub autocomplete_left: String,
    /// CSS `top` of the autocomplete panel.
    pub autocomplete_top: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            editor_id: "htmlEditor".to_owned(),
            preview_id: "preview".to_owned(),
            status_id: "status".to_owned(),
            line_count_id: "lineCount".to_owned(),
            notification_id: "notification".to_owned(),
            copy_button_id: "copyBtn".to_owned(),
            clear_button_id: "clearBtn".to_owned(),
            refresh_button_id: "refreshBtn".to_owned(),
            fullscreen_button_id: "fullscreenBtn".to_owned(),
            editor_wrapper_selector: ".editor-wrapper".to_owned(),
            panel_header_selector: ".editor-panel .panel-header".to_owned(),
            preview_panel_selector: ".preview-panel".to_owned(),
            notification_timeout_ms: 3000,
            welcome_delay_ms: 1000,
            welcome_duration_ms: 4000,
            preview_release_delay_ms: 1000,
            indent_width: 4,
            autocomplete_left: "20px".to_owned(),
            autocomplete_top: "100px".to_owned(),
        }
    }
}

impl EditorConfig {
    /// The string Tab inserts.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
