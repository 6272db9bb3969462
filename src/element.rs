//! Element kinds, property bags and the records the generator keeps.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// The closed set of UI element kinds the generator can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Button,
    Input,
    Card,
    Navbar,
    Footer,
    Header,
    Sidebar,
}

impl ElementType {
    /// Every kind, in palette order.
    pub const ALL: [ElementType; 7] = [
        ElementType::Button,
        ElementType::Input,
        ElementType::Card,
        ElementType::Navbar,
        ElementType::Footer,
        ElementType::Header,
        ElementType::Sidebar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Input => "input",
            ElementType::Card => "card",
            ElementType::Navbar => "navbar",
            ElementType::Footer => "footer",
            ElementType::Header => "header",
            ElementType::Sidebar => "sidebar",
        }
    }

    /// Human-readable label used on palette buttons.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Button => "Button",
            ElementType::Input => "Input",
            ElementType::Card => "Card",
            ElementType::Navbar => "Navbar",
            ElementType::Footer => "Footer",
            ElementType::Header => "Header",
            ElementType::Sidebar => "Sidebar",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ElementType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleError::unsupported(s))
    }
}

/// Per-instance styling overrides, keyed by property name.
///
/// Unknown keys are kept (and ignored by the templates). Values are only
/// substituted into CSS after passing [`is_safe_color`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve a color property, falling back to `default` when the key is
    /// absent or its value is not a safe CSS color.
    pub fn color<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(value) if is_safe_color(value) => value,
            Some(value) => {
                tracing::warn!(key, value, "rejected property value, using default");
                default
            }
            None => default,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A CSS color value that cannot break out of a declaration: `#` plus
/// 3, 4, 6 or 8 hex digits, or a bare alphabetic keyword.
pub fn is_safe_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !value.is_empty() && value.len() <= 32 && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// One generated element. Created once per successful add, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub properties: Properties,
    pub css: String,
}

/// An element to be added, before its type has been validated.
///
/// Parsed from `type[:key=value[,key=value...]]` on the command line, or
/// deserialized from `{"type": "...", "properties": {...}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Properties,
}

impl ElementSpec {
    pub fn new(kind: &str, properties: Properties) -> Self {
        Self {
            kind: kind.to_string(),
            properties,
        }
    }

    /// Parse a JSON array of element specs.
    pub fn list_from_json(json: &str) -> crate::error::Result<Vec<ElementSpec>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromStr for ElementSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = match s.split_once(':') {
            Some((kind, rest)) => (kind.trim(), Some(rest)),
            None => (s.trim(), None),
        };
        if kind.is_empty() {
            return Err(format!("missing element type in '{s}'"));
        }

        let mut properties = Properties::new();
        for pair in rest.into_iter().flat_map(|r| r.split(',')) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected key=value, got '{pair}'"))?;
            properties.insert(key.trim(), value.trim());
        }

        Ok(ElementSpec::new(kind, properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_kind() {
        for kind in ElementType::ALL {
            assert_eq!(kind.as_str().parse::<ElementType>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" NavBar ".parse::<ElementType>().unwrap(), ElementType::Navbar);
    }

    #[test]
    fn parse_unknown_kind_fails() {
        let err = "carousel".parse::<ElementType>().unwrap_err();
        assert!(err.is_validation());
        assert!("".parse::<ElementType>().is_err());
    }

    #[test]
    fn safe_colors() {
        assert!(is_safe_color("#fff"));
        assert!(is_safe_color("#3498db"));
        assert!(is_safe_color("#3498dbcc"));
        assert!(is_safe_color("transparent"));
        assert!(!is_safe_color("#12345"));
        assert!(!is_safe_color("#zzzzzz"));
        assert!(!is_safe_color("red; } body { display:none"));
        assert!(!is_safe_color("</style><script>"));
        assert!(!is_safe_color(""));
    }

    #[test]
    fn color_falls_back_on_missing_or_unsafe() {
        let props = Properties::new()
            .with("bg_color", "#000000")
            .with("text_color", "url(javascript:alert(1))");
        assert_eq!(props.color("bg_color", "#3498db"), "#000000");
        assert_eq!(props.color("text_color", "#ffffff"), "#ffffff");
        assert_eq!(props.color("border_color", "#ddd"), "#ddd");
    }

    #[test]
    fn spec_from_cli_text() {
        let spec: ElementSpec = "button:bg_color=#000000, text_color=#fff".parse().unwrap();
        assert_eq!(spec.kind, "button");
        assert_eq!(spec.properties.get("bg_color"), Some("#000000"));
        assert_eq!(spec.properties.get("text_color"), Some("#fff"));

        let bare: ElementSpec = "card".parse().unwrap();
        assert!(bare.properties.is_empty());
    }

    #[test]
    fn spec_rejects_malformed_pairs() {
        assert!("button:bg_color".parse::<ElementSpec>().is_err());
        assert!(":bg_color=#fff".parse::<ElementSpec>().is_err());
    }

    #[test]
    fn spec_list_from_json() {
        let specs = ElementSpec::list_from_json(
            r##"[{"type": "button", "properties": {"bg_color": "#111"}}, {"type": "card"}]"##,
        )
        .unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].properties.get("bg_color"), Some("#111"));
        assert_eq!(specs[1].kind, "card");
    }

    #[test]
    fn record_serializes_type_field() {
        let record = ElementRecord {
            id: "stylegen_card_0a1b2c3d".to_string(),
            kind: ElementType::Card,
            properties: Properties::new(),
            css: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "card");
        assert_eq!(json["id"], "stylegen_card_0a1b2c3d");
    }
}
