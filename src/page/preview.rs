use crate::element::{ElementRecord, ElementType};
use super::util::html_escape;

/// Markup skeleton for a recorded element, carrying its id so the
/// generated rules apply.
pub(super) fn element_markup(record: &ElementRecord) -> String {
    let id = html_escape(&record.id);
    match record.kind {
        ElementType::Button => format!(r#"<button id="{id}">Button</button>"#),
        ElementType::Input => {
            format!(r#"<input id="{id}" type="text" placeholder="Enter text...">"#)
        }
        ElementType::Card => format!(
            r#"<div id="{id}">
  <div class="card-header">Card Title</div>
  <div class="card-body">Card content goes here.</div>
  <div class="card-footer">Card footer</div>
</div>"#
        ),
        ElementType::Navbar => format!(
            r##"<nav id="{id}">
  <div class="navbar-container">
    <a class="navbar-brand" href="#">Brand</a>
    <ul class="navbar-menu">
      <li><a href="#">Home</a></li>
      <li><a href="#">About</a></li>
      <li><a href="#">Contact</a></li>
    </ul>
  </div>
</nav>"##
        ),
        ElementType::Footer => format!(
            r#"<footer id="{id}">
  <div class="footer-content">
    <div class="footer-section"><h3>About</h3><p>A short description.</p></div>
    <div class="footer-section"><h3>Links</h3><p>Docs, blog, support.</p></div>
  </div>
  <div class="footer-bottom">&copy; All rights reserved.</div>
</footer>"#
        ),
        ElementType::Header => format!(
            r#"<header id="{id}">
  <div class="header-content">
    <h1>Welcome</h1>
    <p class="subtitle">A generated page header</p>
  </div>
</header>"#
        ),
        ElementType::Sidebar => format!(
            r##"<aside id="{id}">
  <div class="sidebar-header">Menu</div>
  <ul class="sidebar-menu">
    <li><a href="#">Dashboard</a></li>
    <li><a href="#">Settings</a></li>
    <li><a href="#">Profile</a></li>
  </ul>
</aside>"##
        ),
    }
}

pub(super) fn build_workspace(records: &[ElementRecord]) -> String {
    let items: String = records
        .iter()
        .map(|record| {
            format!(
                r#"<div class="sg-preview-item" data-server="1">
  <span class="sg-preview-tag">#{id}</span>
  {markup}
</div>
"#,
                id = html_escape(&record.id),
                markup = element_markup(record),
            )
        })
        .collect();

    format!(
        r#"<div class="sg-workspace" id="sg-workspace">
  <div class="sg-panel-label">workspace</div>
{items}  <div id="sg-dropped"></div>
  <div class="sg-drop-hint">Drop elements here</div>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Properties;
    use crate::generator::Generator;

    #[test]
    fn markup_uses_record_id() {
        let mut generator = Generator::default();
        for kind in ElementType::ALL {
            generator.add_element(kind, Properties::new());
        }
        for record in generator.elements() {
            let html = element_markup(record);
            assert!(html.contains(&format!(r#"id="{}""#, record.id)), "{}", record.kind);
        }
    }

    #[test]
    fn markup_has_styled_classes() {
        let mut generator = Generator::default();
        let record = generator.add_element(ElementType::Navbar, Properties::new()).clone();
        let html = element_markup(&record);
        assert!(html.contains("navbar-container"));
        assert!(html.contains("navbar-brand"));
        assert!(html.contains("navbar-menu"));
    }

    #[test]
    fn workspace_preserves_order() {
        let mut generator = Generator::default();
        generator.add_element(ElementType::Button, Properties::new());
        generator.add_element(ElementType::Card, Properties::new());
        let html = build_workspace(generator.elements());
        let first = html.find(&generator.elements()[0].id).unwrap();
        let second = html.find(&generator.elements()[1].id).unwrap();
        assert!(first < second);
    }
}
