/// Stylesheet for the page's own chrome: toolbar, palette, workspace and
/// code panel. Generated element rules are id-scoped and never clash.
pub(super) fn build_chrome_css() -> String {
    r#"html, body { width: 100%; height: 100%; }
body.sg-page {
  background: #0A0A0A; color: #A0A0A0; overflow: hidden;
  font-family: 'JetBrains Mono', monospace; font-size: 12px;
}

/* ── Toolbar ─────────────────────────────────────── */
.sg-toolbar {
  height: 40px; display: flex; align-items: center; padding: 0 14px;
  border-bottom: 1px solid #2A2A2A; gap: 10px; user-select: none;
}
.sg-toolbar .label { color: #D4AF37; font-weight: 600; }
.sg-toolbar .sep { color: #333; }
.sg-toolbar .badge {
  color: #A0A0A0; background: #1F1F1F; padding: 2px 8px;
  border-radius: 3px; font-size: 10px;
}
.sg-toolbar .actions { margin-left: auto; display: flex; gap: 6px; }
.sg-toolbar .actions button, .sg-toolbar .actions a {
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 3px 10px; border-radius: 3px; font-size: 10px; cursor: pointer;
  font-family: inherit; text-decoration: none;
}
.sg-toolbar .actions button:hover, .sg-toolbar .actions a:hover {
  color: #FFF; border-color: #444;
}
.sg-toolbar .actions button.copied { color: #22C55E; border-color: #22C55E; }

/* ── Layout ──────────────────────────────────────── */
.sg-layout {
  display: grid; grid-template-columns: 200px 1fr 380px;
  height: calc(100vh - 40px);
}
.sg-panel-label {
  font-size: 10px; color: #444; text-transform: uppercase;
  letter-spacing: 1px; padding: 10px 12px;
}

/* ── Palette ─────────────────────────────────────── */
.sg-palette { border-right: 1px solid #2A2A2A; overflow-y: auto; }
.sg-palette-item {
  display: block; width: calc(100% - 24px); margin: 0 12px 6px;
  background: #141414; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 8px 10px; border-radius: 4px; text-align: left; cursor: grab;
  font-family: inherit; font-size: 11px;
}
.sg-palette-item:hover { border-color: #D4AF37; color: #FFF; }
.sg-palette-item:active { cursor: grabbing; }

/* ── Workspace ───────────────────────────────────── */
.sg-workspace {
  background: #f8f9fa; color: #333; overflow-y: auto; padding: 20px;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}
.sg-workspace.drag-over { outline: 2px dashed #D4AF37; outline-offset: -8px; }
.sg-drop-hint {
  border: 2px dashed #ccc; border-radius: 8px; padding: 24px;
  text-align: center; color: #999; margin-top: 16px;
}
.sg-preview-item {
  position: relative; transform: translateZ(0); overflow: hidden;
  max-height: 360px; margin-bottom: 16px; padding: 12px;
  border: 1px solid #e5e5e5; border-radius: 6px; background: #fff;
}
.sg-preview-item .sg-preview-tag {
  display: block; font-size: 10px; color: #999; margin-bottom: 8px;
  font-family: 'JetBrains Mono', monospace;
}
.sg-preview-item .sg-remove {
  position: absolute; top: 6px; right: 8px; border: none; background: none;
  color: #bbb; cursor: pointer; font-size: 14px;
}
.sg-preview-item .sg-remove:hover { color: #EF4444; }

/* ── Code panel ──────────────────────────────────── */
.sg-code-panel {
  border-left: 1px solid #2A2A2A; display: flex; flex-direction: column;
  min-width: 0;
}
.sg-code-header {
  display: flex; align-items: center; justify-content: space-between;
  padding: 8px 12px; border-bottom: 1px solid #2A2A2A; font-size: 10px;
}
.sg-code-header button {
  background: #1F1F1F; border: 1px solid #2A2A2A; color: #A0A0A0;
  padding: 2px 8px; border-radius: 3px; font-size: 10px; cursor: pointer;
  font-family: inherit;
}
.sg-code {
  flex: 1; overflow: auto; margin: 0; padding: 12px 14px;
  font-size: 11px; line-height: 1.6; color: #A0A0A0; white-space: pre;
}

/* ── Error page ──────────────────────────────────── */
.sg-error {
  max-width: 640px; margin: 64px auto; padding: 24px;
  background: #f8f9fa; color: #333; border-radius: 8px;
  border-top: 4px solid #e74c3c;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
}
.sg-error-title { font-size: 18px; font-weight: 600; margin-bottom: 12px; }
.sg-error-message {
  margin: 0 0 16px; padding: 12px 14px; background: #fff;
  border: 1px solid #e5e5e5; border-radius: 6px; color: #c0392b;
  font-family: 'JetBrains Mono', monospace; font-size: 12px;
  white-space: pre-wrap; word-break: break-word;
}
.sg-error-back { color: #3498db; text-decoration: none; font-size: 13px; }
.sg-error-back:hover { text-decoration: underline; }
"#
    .to_string()
}
