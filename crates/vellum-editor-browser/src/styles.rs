//! Stylesheet injected at mount.

use web_sys::{Document, Element};

use vellum_editor_core::{EditorError, Fullscreen};

use crate::dom::platform_error;

const STYLE_ID: &str = "vellum-editor-styles";

/// Rules for the fullscreen preview overlay.
pub fn fullscreen_css() -> String {
    let panel = Fullscreen::PANEL_CLASS;
    let body = Fullscreen::BODY_CLASS;
    format!(
        r#"
.{panel} {{
    position: fixed !important;
    top: 0 !important;
    left: 0 !important;
    width: 100vw !important;
    height: 100vh !important;
    z-index: 9999 !important;
    border-radius: 0 !important;
}}

.{body} {{
    overflow: hidden;
}}

.{panel} .preview-wrapper {{
    height: calc(100vh - 60px) !important;
}}
"#
    )
}

/// Append the editor's `<style>` to `<head>` unless it is already there.
pub fn inject_styles(doc: &Document) -> Result<(), EditorError> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = doc
        .head()
        .ok_or_else(|| EditorError::MissingElement("head".into()))?;
    let style: Element = doc
        .create_element("style")
        .map_err(|e| EditorError::Platform(platform_error(e)))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(&fullscreen_css()));
    head.append_child(&style)
        .map_err(|e| EditorError::Platform(platform_error(e)))?;
    Ok(())
}
