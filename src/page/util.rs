use serde::Serialize;

/// Escape the five HTML-significant characters. `&` goes first so every raw
/// character maps to exactly one entity.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Make text safe to place inside a `<style>` element.
pub(super) fn style_inline(css: &str) -> String {
    css.replace("</", "<\\/")
}

/// JSON encoding for embedding in inline JS. `</` is escaped as `<\/` so
/// the HTML parser cannot close the `<script>` block early.
pub(super) fn json_inline<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}
