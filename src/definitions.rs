//! Component definition files.
//!
//! A definition file declares named components in YAML or JSON, each built
//! into one of the builders:
//!
//! ```yaml
//! config:
//!   global:
//!     color: [brand]
//! components:
//!   card:
//!     kind: style
//!     style: { display: flex, padding: p-4 }
//!   badge:
//!     kind: rotary
//!     variants:
//!       base: { padding: p-2 }
//!       sm: { padding: p-1 }
//!   switch:
//!     kind: toggle
//!     truthy: { backgroundColor: bg-sky-500 }
//!     falsy: { backgroundColor: bg-slate-200 }
//!   button:
//!     kind: variants
//!     base: { display: flex }
//!     variants:
//!       size:
//!         sm: { padding: p-1 }
//! ```

use crate::config::Tailwindest;
use crate::errors::{Result, TailwindestError};
use crate::rotary::Rotary;
use crate::source::StyleSource;
use crate::style::Style;
use crate::styled::Styled;
use crate::variant::DynSelection;
use crate::variants::Variants;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Selection key used for single-axis components (rotary and toggle).
pub const VARIANT_GROUP: &str = "variant";

/// A parsed definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definitions {
    /// Vocabulary used when checking these components
    pub config: Tailwindest,

    /// Components by name, in file order
    pub components: IndexMap<String, ComponentDef>,
}

/// One component as written in a definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComponentDef {
    Style {
        style: Style,
    },
    Rotary {
        /// Variant map; its `base` entry is the default style
        variants: IndexMap<String, Style>,
    },
    Toggle {
        #[serde(default)]
        base: Style,
        truthy: Style,
        falsy: Style,
    },
    Variants {
        #[serde(default)]
        base: Style,
        variants: IndexMap<String, IndexMap<String, Style>>,
    },
}

/// A built component.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Style(Styled),
    Rotary(Rotary<String>),
    Toggle(Rotary<bool>),
    Variants(Variants<DynSelection>),
}

impl Definitions {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load definitions from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading component definitions");
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(TailwindestError::ConfigError {
                message: format!(
                    "Unsupported definition file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Combines two files; components and config from `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        self.config = self.config.merge(other.config);
        self.components.extend(other.components);
        self
    }

    pub fn component(&self, name: &str) -> Result<Component> {
        self.components
            .get(name)
            .map(ComponentDef::build)
            .ok_or_else(|| TailwindestError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// Every component, built, in file order.
    pub fn build(&self) -> IndexMap<String, Component> {
        self.components
            .iter()
            .map(|(name, def)| (name.clone(), def.build()))
            .collect()
    }
}

impl ComponentDef {
    pub fn build(&self) -> Component {
        match self {
            ComponentDef::Style { style } => Component::Style(Styled::new(style.clone())),
            ComponentDef::Rotary { variants } => {
                Component::Rotary(Rotary::from_map(variants.clone()))
            }
            ComponentDef::Toggle { base, truthy, falsy } => Component::Toggle(Rotary::new(
                base.clone(),
                [(true, truthy.clone()), (false, falsy.clone())],
            )),
            ComponentDef::Variants { base, variants } => {
                Component::Variants(Variants::from_groups(base.clone(), variants.clone()))
            }
        }
    }
}

impl Component {
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Style(_) => "style",
            Component::Rotary(_) => "rotary",
            Component::Toggle(_) => "toggle",
            Component::Variants(_) => "variants",
        }
    }

    /// Resolves a string selection. Single-axis components read the
    /// [`VARIANT_GROUP`] entry; anything not declared contributes nothing.
    pub fn resolve(&self, selection: &DynSelection) -> Style {
        let single = selection.get(VARIANT_GROUP);
        match self {
            Component::Style(styled) => styled.style().clone(),
            Component::Rotary(rotary) => match single {
                Some(key) => rotary.pick(key),
                None => rotary.unpicked(),
            },
            Component::Toggle(toggle) => match single.and_then(|key| key.parse::<bool>().ok()) {
                Some(on) => toggle.pick(&on),
                None => toggle.unpicked(),
            },
            Component::Variants(variants) => variants.resolve(selection),
        }
    }

    /// Selection entries that name no declared group or variant.
    pub fn undeclared(&self, selection: &DynSelection) -> Vec<TailwindestError> {
        selection
            .iter()
            .filter(|(group, key)| !self.declares(group, key))
            .map(|(group, key)| TailwindestError::UnknownVariant {
                group: group.clone(),
                key: key.clone(),
            })
            .collect()
    }

    fn declares(&self, group: &str, key: &str) -> bool {
        match self {
            Component::Style(_) => false,
            Component::Rotary(rotary) => {
                group == VARIANT_GROUP && rotary.keys().any(|k| k == key)
            }
            Component::Toggle(_) => group == VARIANT_GROUP && matches!(key, "true" | "false"),
            Component::Variants(variants) => variants.keys(group).contains(&key),
        }
    }
}

impl StyleSource for Component {
    fn layers(&self) -> Vec<&Style> {
        match self {
            Component::Style(styled) => styled.layers(),
            Component::Rotary(rotary) => rotary.layers(),
            Component::Toggle(toggle) => toggle.layers(),
            Component::Variants(variants) => variants.layers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YAML: &str = r#"
config:
  global:
    color: [brand]
components:
  card:
    kind: style
    style: { display: flex, padding: p-4 }
  badge:
    kind: rotary
    variants:
      base: { padding: p-2 }
      sm: { padding: p-1 }
      lg: { padding: p-4 }
  switch:
    kind: toggle
    truthy: { backgroundColor: bg-brand }
    falsy: { backgroundColor: bg-slate-200 }
  button:
    kind: variants
    base: { display: flex }
    variants:
      size:
        sm: { padding: p-1 }
      color:
        red: { backgroundColor: bg-red-500 }
"#;

    fn pick(pairs: &[(&str, &str)]) -> DynSelection {
        pairs
            .iter()
            .map(|(g, k)| (g.to_string(), k.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_all_kinds() {
        let defs = Definitions::from_yaml_str(YAML).unwrap();
        let kinds: Vec<_> = defs.build().values().map(Component::kind).collect();
        assert_eq!(kinds, vec!["style", "rotary", "toggle", "variants"]);
        assert_eq!(defs.config.global.color, vec!["brand"]);
    }

    #[test]
    fn test_resolve_components() {
        let defs = Definitions::from_yaml_str(YAML).unwrap();

        let badge = defs.component("badge").unwrap();
        assert_eq!(badge.resolve(&pick(&[("variant", "lg")])).class(), "p-4");
        assert_eq!(badge.resolve(&pick(&[])).class(), "p-2");

        let switch = defs.component("switch").unwrap();
        assert_eq!(switch.resolve(&pick(&[("variant", "true")])).class(), "bg-brand");

        let button = defs.component("button").unwrap();
        let style = button.resolve(&pick(&[("size", "sm"), ("color", "red")]));
        assert_eq!(style.class(), "flex p-1 bg-red-500");
    }

    #[test]
    fn test_undeclared_selection() {
        let defs = Definitions::from_yaml_str(YAML).unwrap();
        let button = defs.component("button").unwrap();

        assert!(button.undeclared(&pick(&[("size", "sm")])).is_empty());
        let problems = button.undeclared(&pick(&[("size", "xl"), ("shape", "round")]));
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_unknown_component() {
        let defs = Definitions::from_yaml_str(YAML).unwrap();
        let err = defs.component("modal").unwrap_err();
        assert!(matches!(err, TailwindestError::UnknownComponent { .. }));
    }

    #[test]
    fn test_from_json_file() {
        let json =
            r#"{ "components": { "card": { "kind": "style", "style": { "padding": "p-2" } } } }"#;
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let defs = Definitions::from_file(file.path()).unwrap();
        assert_eq!(defs.component("card").unwrap().resolve(&pick(&[])).class(), "p-2");
    }

    #[test]
    fn test_merge_later_file_wins() {
        let first = Definitions::from_yaml_str(YAML).unwrap();
        let second = Definitions::from_yaml_str(
            "components:\n  card:\n    kind: style\n    style: { padding: p-8 }\n",
        )
        .unwrap();

        let merged = first.merge(second);
        assert_eq!(merged.components.len(), 4);
        assert_eq!(merged.component("card").unwrap().resolve(&pick(&[])).class(), "p-8");
    }
}
