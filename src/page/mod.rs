//! HTML page assembly: the drag-and-drop demo document and the error page.

use crate::generator::Generator;

mod css;
mod palette;
mod preview;
mod script;
mod util;

pub use util::html_escape;

use css::build_chrome_css;
use palette::{build_palette, build_toolbar};
use preview::build_workspace;
use script::build_inline_js;
use util::style_inline;

/// Build the full demo document for `generator`'s current state.
pub fn build_page(generator: &Generator) -> String {
    let config = generator.config();
    let primary = config
        .palette
        .first()
        .map(String::as_str)
        .unwrap_or(crate::templates::DEFAULT_PALETTE[0]);

    let chrome_css = build_chrome_css();
    let generated_css = style_inline(generator.stylesheet());
    let toolbar = build_toolbar(generator);
    let palette = build_palette();
    let workspace = build_workspace(generator.elements());
    let css_code = generator.get_css_code();
    let line_count = generator.stylesheet().lines().count();
    let inline_js = build_inline_js(&config.project_name, primary, generator.elements().len());

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — CSS Generator</title>
<style>
{generated_css}
</style>
<style>
{chrome_css}
</style>
</head>
<body class="sg-page">
{toolbar}
<div class="sg-layout">
{palette}
{workspace}
<div class="sg-code-panel">
  <div class="sg-code-header">
    <span>generated css — {line_count} lines</span>
    <button onclick="copyCss(this)">Copy</button>
  </div>
  <pre class="sg-code" id="sg-code">{css_code}</pre>
</div>
</div>
{inline_js}
</body>
</html>"##,
        title = html_escape(&config.project_name),
        generated_css = generated_css,
        chrome_css = chrome_css,
        toolbar = toolbar,
        palette = palette,
        workspace = workspace,
        line_count = line_count,
        css_code = css_code,
        inline_js = inline_js,
    )
}

/// User-visible error document for failures at the entry points. Shares
/// the demo page's chrome so both read as one tool.
pub fn build_error_page(error: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>CSS Generator — Error</title>
<style>
{chrome_css}
</style>
</head>
<body class="sg-page">
<div class="sg-toolbar">
  <span class="label">stylegen</span>
  <span class="sep">|</span>
  <span class="badge">error</span>
</div>
<div class="sg-error">
  <div class="sg-error-title">Page generation failed</div>
  <pre class="sg-error-message">{message}</pre>
  <a class="sg-error-back" href="/">Back to the generator</a>
</div>
</body>
</html>"##,
        chrome_css = build_chrome_css(),
        message = html_escape(error),
    )
}
