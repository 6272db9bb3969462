use crate::element::ElementType;
use crate::generator::Generator;
use super::util::html_escape;

pub(super) fn build_toolbar(generator: &Generator) -> String {
    let count = generator.elements().len();
    format!(
        r#"<div class="sg-toolbar">
  <span class="label">{project}</span>
  <span class="sep">|</span>
  <span class="badge" id="sg-count">{count} element{plural}</span>
  <div class="actions">
    <button onclick="copyCss(this)" title="Copy generated CSS">Copy CSS</button>
    <button onclick="clearWorkspace()" title="Remove dropped elements">Clear</button>
  </div>
</div>"#,
        project = html_escape(&generator.config().project_name),
        count = count,
        plural = if count == 1 { "" } else { "s" },
    )
}

/// One draggable button per element type.
pub(super) fn build_palette() -> String {
    let items: Vec<String> = ElementType::ALL
        .iter()
        .map(|kind| {
            format!(
                r#"  <button class="sg-palette-item" draggable="true" data-type="{kind}" title="Drag {kind} into the workspace">{label}</button>"#,
                kind = kind,
                label = kind.label(),
            )
        })
        .collect();

    format!(
        r#"<div class="sg-palette">
  <div class="sg-panel-label">elements</div>
{items}
</div>"#,
        items = items.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lists_every_kind() {
        let html = build_palette();
        for kind in ElementType::ALL {
            assert!(html.contains(&format!(r#"data-type="{kind}""#)));
        }
        assert_eq!(html.matches("sg-palette-item").count(), ElementType::ALL.len());
    }

    #[test]
    fn toolbar_counts_elements() {
        let generator = Generator::default();
        assert!(build_toolbar(&generator).contains("0 elements"));
    }
}
