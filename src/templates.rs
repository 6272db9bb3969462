//! Template registry: one pure CSS rendering function per element type,
//! plus the stylesheet header every generator starts from.

use crate::element::{ElementType, Properties};

/// Palette used when no configuration overrides it.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#3498db", "#2ecc71", "#e74c3c", "#f39c12", "#9b59b6", "#1abc9c",
];

/// Names of the palette custom properties, in palette order.
const PALETTE_VARS: [&str; 6] = [
    "--primary-color",
    "--secondary-color",
    "--accent-color",
    "--warning-color",
    "--highlight-color",
    "--info-color",
];

pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_BORDER_COLOR: &str = "#ddd";

/// Rendering function signature: `(element id, properties, palette) -> css`.
pub type Renderer = fn(&str, &Properties, &[String]) -> String;

/// Look up the renderer for an element type.
pub fn renderer(kind: ElementType) -> Renderer {
    match kind {
        ElementType::Button => button_css,
        ElementType::Input => input_css,
        ElementType::Card => card_css,
        ElementType::Navbar => navbar_css,
        ElementType::Footer => footer_css,
        ElementType::Header => header_css,
        ElementType::Sidebar => sidebar_css,
    }
}

/// Render the CSS block for one element instance.
pub fn render(kind: ElementType, id: &str, props: &Properties, palette: &[String]) -> String {
    renderer(kind)(id, props, palette)
}

/// Render by type name. Unknown names yield a CSS comment instead of rules.
pub fn render_named(name: &str, id: &str, props: &Properties, palette: &[String]) -> String {
    match name.parse::<ElementType>() {
        Ok(kind) => render(kind, id, props, palette),
        Err(_) => unsupported_css(name),
    }
}

fn unsupported_css(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    format!("/* Unsupported element type: {cleaned} */\n")
}

fn palette_color(palette: &[String], index: usize) -> &str {
    if palette.is_empty() {
        return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
    }
    &palette[index % palette.len()]
}

/// Stylesheet header: generation comment, custom properties, reset, body.
pub fn header(project: &str, palette: &[String], generated_at: &str) -> String {
    let vars: String = PALETTE_VARS
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  {name}: {};\n", palette_color(palette, i)))
        .collect();

    format!(
        r#"/* Generated by {project} on {generated_at} */
:root {{
{vars}  --text-color: #333333;
  --background-color: #f8f9fa;
  --font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  --border-radius: 8px;
  --box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
  --transition: all 0.3s ease;
}}

* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  font-family: var(--font-family);
  line-height: 1.6;
  color: var(--text-color);
  background-color: var(--background-color);
}}
"#
    )
}

fn button_css(id: &str, props: &Properties, palette: &[String]) -> String {
    let bg = props.color("bg_color", palette_color(palette, 0));
    let text = props.color("text_color", DEFAULT_TEXT_COLOR);
    format!(
        r#"
#{id} {{
  background-color: {bg};
  color: {text};
  padding: 12px 24px;
  border: none;
  border-radius: var(--border-radius);
  font-size: 16px;
  font-weight: 600;
  cursor: pointer;
  transition: var(--transition);
  box-shadow: var(--box-shadow);
}}

#{id}:hover {{
  transform: translateY(-2px);
  box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2);
  filter: brightness(1.1);
}}

#{id}:active {{
  transform: translateY(0);
  box-shadow: var(--box-shadow);
}}

#{id}:focus {{
  outline: 2px solid {bg};
  outline-offset: 2px;
}}
"#
    )
}

fn input_css(id: &str, props: &Properties, palette: &[String]) -> String {
    let border = props.color("border_color", DEFAULT_BORDER_COLOR);
    let focus = palette_color(palette, 0);
    format!(
        r#"
#{id} {{
  width: 100%;
  padding: 12px 16px;
  border: 2px solid {border};
  border-radius: var(--border-radius);
  font-size: 16px;
  font-family: var(--font-family);
  transition: var(--transition);
  background-color: #ffffff;
}}

#{id}:focus {{
  outline: none;
  border-color: {focus};
  box-shadow: 0 0 0 3px rgba(52, 152, 219, 0.2);
}}

#{id}::placeholder {{
  color: #999999;
}}
"#
    )
}

fn card_css(id: &str, _props: &Properties, _palette: &[String]) -> String {
    format!(
        r#"
#{id} {{
  background: #ffffff;
  border-radius: var(--border-radius);
  box-shadow: var(--box-shadow);
  overflow: hidden;
  transition: var(--transition);
  margin: 16px 0;
}}

#{id}:hover {{
  transform: translateY(-4px);
  box-shadow: 0 8px 25px rgba(0, 0, 0, 0.15);
}}

#{id} .card-header {{
  padding: 20px;
  border-bottom: 1px solid #eeeeee;
  font-weight: 600;
  font-size: 18px;
}}

#{id} .card-body {{
  padding: 20px;
}}

#{id} .card-footer {{
  padding: 16px 20px;
  background: #f8f9fa;
  border-top: 1px solid #eeeeee;
}}
"#
    )
}

fn navbar_css(id: &str, _props: &Properties, _palette: &[String]) -> String {
    format!(
        r#"
#{id} {{
  background: #ffffff;
  box-shadow: var(--box-shadow);
  position: sticky;
  top: 0;
  z-index: 1000;
}}

#{id} .navbar-container {{
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 64px;
}}

#{id} .navbar-brand {{
  font-size: 24px;
  font-weight: 700;
  color: var(--primary-color);
  text-decoration: none;
}}

#{id} .navbar-menu {{
  display: flex;
  list-style: none;
  gap: 32px;
}}

#{id} .navbar-menu a {{
  color: var(--text-color);
  text-decoration: none;
  font-weight: 500;
  transition: var(--transition);
}}

#{id} .navbar-menu a:hover {{
  color: var(--primary-color);
}}
"#
    )
}

fn footer_css(id: &str, _props: &Properties, _palette: &[String]) -> String {
    format!(
        r#"
#{id} {{
  background: #2c3e50;
  color: #ecf0f1;
  padding: 48px 0 24px;
  margin-top: 64px;
}}

#{id} .footer-content {{
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  gap: 32px;
}}

#{id} .footer-section h3 {{
  margin-bottom: 16px;
  color: var(--primary-color);
}}

#{id} .footer-section p {{
  line-height: 1.8;
  color: #bdc3c7;
}}

#{id} .footer-bottom {{
  text-align: center;
  padding-top: 24px;
  margin-top: 32px;
  border-top: 1px solid #34495e;
  color: #95a5a6;
}}
"#
    )
}

fn header_css(id: &str, _props: &Properties, _palette: &[String]) -> String {
    format!(
        r#"
#{id} {{
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
  color: #ffffff;
  padding: 80px 20px;
  text-align: center;
}}

#{id} .header-content {{
  max-width: 800px;
  margin: 0 auto;
}}

#{id} h1 {{
  font-size: 48px;
  font-weight: 700;
  margin-bottom: 16px;
}}

#{id} .subtitle {{
  font-size: 20px;
  opacity: 0.9;
}}
"#
    )
}

fn sidebar_css(id: &str, _props: &Properties, _palette: &[String]) -> String {
    format!(
        r#"
#{id} {{
  width: 250px;
  background: #ffffff;
  box-shadow: var(--box-shadow);
  height: 100vh;
  position: fixed;
  left: 0;
  top: 0;
  overflow-y: auto;
}}

#{id} .sidebar-header {{
  padding: 24px 20px;
  border-bottom: 1px solid #eeeeee;
  font-weight: 700;
  font-size: 18px;
}}

#{id} .sidebar-menu {{
  list-style: none;
  padding: 16px 0;
}}

#{id} .sidebar-menu li {{
  margin: 0;
}}

#{id} .sidebar-menu a {{
  display: block;
  padding: 12px 20px;
  color: var(--text-color);
  text-decoration: none;
  transition: var(--transition);
}}

#{id} .sidebar-menu a:hover {{
  background: var(--background-color);
  color: var(--primary-color);
  padding-left: 28px;
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    fn top_level_count(css: &str, id: &str) -> usize {
        css.matches(&format!("#{id} {{")).count()
    }

    #[test]
    fn every_kind_has_one_top_level_rule() {
        for kind in ElementType::ALL {
            let css = render(kind, "el", &Properties::new(), &palette());
            assert_eq!(top_level_count(&css, "el"), 1, "{kind}");
        }
    }

    #[test]
    fn structural_selectors_present() {
        let expected: [(ElementType, &[&str]); 7] = [
            (ElementType::Button, &["#x:hover", "#x:active", "#x:focus"]),
            (ElementType::Input, &["#x:focus", "#x::placeholder"]),
            (
                ElementType::Card,
                &["#x:hover", "#x .card-header", "#x .card-body", "#x .card-footer"],
            ),
            (
                ElementType::Navbar,
                &[
                    "#x .navbar-container",
                    "#x .navbar-brand",
                    "#x .navbar-menu {",
                    "#x .navbar-menu a {",
                    "#x .navbar-menu a:hover",
                ],
            ),
            (
                ElementType::Footer,
                &[
                    "#x .footer-content",
                    "#x .footer-section h3",
                    "#x .footer-section p",
                    "#x .footer-bottom",
                ],
            ),
            (ElementType::Header, &["#x .header-content", "#x h1", "#x .subtitle"]),
            (
                ElementType::Sidebar,
                &[
                    "#x .sidebar-header",
                    "#x .sidebar-menu {",
                    "#x .sidebar-menu li",
                    "#x .sidebar-menu a {",
                    "#x .sidebar-menu a:hover",
                ],
            ),
        ];
        for (kind, selectors) in expected {
            let css = render(kind, "x", &Properties::new(), &palette());
            for sel in selectors {
                assert!(css.contains(sel), "{kind} missing {sel}");
            }
        }
    }

    #[test]
    fn rendering_is_pure() {
        let props = Properties::new().with("bg_color", "#123456");
        for kind in ElementType::ALL {
            assert_eq!(
                render(kind, "same", &props, &palette()),
                render(kind, "same", &props, &palette())
            );
        }
    }

    #[test]
    fn button_defaults() {
        let css = render(ElementType::Button, "b", &Properties::new(), &palette());
        assert!(css.contains("background-color: #3498db;"));
        assert!(css.contains("color: #ffffff;"));
    }

    #[test]
    fn button_override_replaces_palette_color() {
        let props = Properties::new().with("bg_color", "#000000");
        let css = render(ElementType::Button, "b", &props, &palette());
        assert!(css.contains("#000000"));
        assert!(!css.contains("#3498db"));
    }

    #[test]
    fn input_border_default_and_override() {
        let css = render(ElementType::Input, "i", &Properties::new(), &palette());
        assert!(css.contains("border: 2px solid #ddd;"));
        let props = Properties::new().with("border_color", "#ff0000");
        let css = render(ElementType::Input, "i", &props, &palette());
        assert!(css.contains("border: 2px solid #ff0000;"));
    }

    #[test]
    fn unsafe_values_never_reach_css() {
        let props = Properties::new().with("bg_color", "red;}</style><script>x()</script>");
        let css = render(ElementType::Button, "b", &props, &palette());
        assert!(!css.contains("<script>"));
        assert!(css.contains("background-color: #3498db;"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let plain = render(ElementType::Card, "c", &Properties::new(), &palette());
        let noisy = render(
            ElementType::Card,
            "c",
            &Properties::new().with("shadow", "huge"),
            &palette(),
        );
        assert_eq!(plain, noisy);
    }

    #[test]
    fn unsupported_name_renders_comment() {
        let css = render_named("carousel", "c", &Properties::new(), &palette());
        assert_eq!(css, "/* Unsupported element type: carousel */\n");
        let css = render_named("*/ body {", "c", &Properties::new(), &palette());
        assert!(!css.contains("*/ body"));
    }

    #[test]
    fn header_lists_palette_vars() {
        let h = header("stylegen", &palette(), "2026-01-01 00:00:00");
        assert!(h.starts_with("/* Generated by stylegen on 2026-01-01 00:00:00 */\n"));
        assert!(h.contains("--primary-color: #3498db;"));
        assert!(h.contains("--info-color: #1abc9c;"));
        assert!(h.contains("box-sizing: border-box;"));
        assert!(h.contains("body {"));
    }

    #[test]
    fn short_palette_cycles() {
        let h = header("p", &["#111".to_string()], "now");
        assert!(h.contains("--primary-color: #111;"));
        assert!(h.contains("--info-color: #111;"));
    }
}
