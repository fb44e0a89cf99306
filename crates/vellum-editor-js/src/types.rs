//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use vellum_editor_core::EditorConfig;

/// Optional overrides for element ids, selectors and timings.
///
/// Every field may be omitted; omitted fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsEditorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub editor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub preview_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub status_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub line_count_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub notification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub copy_button_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub clear_button_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub refresh_button_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub fullscreen_button_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub editor_wrapper_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub panel_header_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub preview_panel_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub notification_timeout_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub welcome_delay_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub welcome_duration_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub preview_release_delay_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub indent_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub autocomplete_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub autocomplete_top: Option<String>,
}

impl From<JsEditorConfig> for EditorConfig {
    fn from(js: JsEditorConfig) -> Self {
        let defaults = EditorConfig::default();
        EditorConfig {
            editor_id: js.editor_id.unwrap_or(defaults.editor_id),
            preview_id: js.preview_id.unwrap_or(defaults.preview_id),
            status_id: js.status_id.unwrap_or(defaults.status_id),
            line_count_id: js.line_count_id.unwrap_or(defaults.line_count_id),
            notification_id: js.notification_id.unwrap_or(defaults.notification_id),
            copy_button_id: js.copy_button_id.unwrap_or(defaults.copy_button_id),
            clear_button_id: js.clear_button_id.unwrap_or(defaults.clear_button_id),
            refresh_button_id: js.refresh_button_id.unwrap_or(defaults.refresh_button_id),
            fullscreen_button_id: js.fullscreen_button_id.unwrap_or(defaults.fullscreen_button_id),
            editor_wrapper_selector: js
                .editor_wrapper_selector
                .unwrap_or(defaults.editor_wrapper_selector),
            panel_header_selector: js
                .panel_header_selector
                .unwrap_or(defaults.panel_header_selector),
            preview_panel_selector: js
                .preview_panel_selector
                .unwrap_or(defaults.preview_panel_selector),
            notification_timeout_ms: js
                .notification_timeout_ms
                .unwrap_or(defaults.notification_timeout_ms),
            welcome_delay_ms: js.welcome_delay_ms.unwrap_or(defaults.welcome_delay_ms),
            welcome_duration_ms: js.welcome_duration_ms.unwrap_or(defaults.welcome_duration_ms),
            preview_release_delay_ms: js
                .preview_release_delay_ms
                .unwrap_or(defaults.preview_release_delay_ms),
            indent_width: js.indent_width.unwrap_or(defaults.indent_width),
            autocomplete_left: js.autocomplete_left.unwrap_or(defaults.autocomplete_left),
            autocomplete_top: js.autocomplete_top.unwrap_or(defaults.autocomplete_top),
        }
    }
}

impl From<&EditorConfig> for JsEditorConfig {
    fn from(config: &EditorConfig) -> Self {
        Self {
            editor_id: Some(config.editor_id.clone()),
            preview_id: Some(config.preview_id.clone()),
            status_id: Some(config.status_id.clone()),
            line_count_id: Some(config.line_count_id.clone()),
            notification_id: Some(config.notification_id.clone()),
            copy_button_id: Some(config.copy_button_id.clone()),
            clear_button_id: Some(config.clear_button_id.clone()),
            refresh_button_id: Some(config.refresh_button_id.clone()),
            fullscreen_button_id: Some(config.fullscreen_button_id.clone()),
            editor_wrapper_selector: Some(config.editor_wrapper_selector.clone()),
            panel_header_selector: Some(config.panel_header_selector.clone()),
            preview_panel_selector: Some(config.preview_panel_selector.clone()),
            notification_timeout_ms: Some(config.notification_timeout_ms),
            welcome_delay_ms: Some(config.welcome_delay_ms),
            welcome_duration_ms: Some(config.welcome_duration_ms),
            preview_release_delay_ms: Some(config.preview_release_delay_ms),
            indent_width: Some(config.indent_width),
            autocomplete_left: Some(config.autocomplete_left.clone()),
            autocomplete_top: Some(config.autocomplete_top.clone()),
        }
    }
}
