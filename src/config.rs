use crate::catalog::{self, Matcher, Scale};
use crate::errors::{Result, TailwindestError};
use crate::style::{Style, StyleValue};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

static ARBITRARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[[^\s\]]+\]$").unwrap());

static COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(inherit|current|transparent|black|white|(slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)-(50|[1-9]00|950))(/\d{1,3})?$",
    )
    .unwrap()
});

static SIZING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d+(\.\d+)?|\d+/\d+|px|auto|full|screen|min|max|fit|prose|none|xs|sm|md|lg|xl|[2-7]xl|[sld]v[hw])$",
    )
    .unwrap()
});

static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9./-]*$").unwrap());

/// Project-specific extensions of the recognised Tailwind vocabulary.
///
/// The defaults recognise only the built-in catalog. Extensions mirror what a
/// project adds in `tailwind.config.js`:
///
/// ```yaml
/// global:
///   color: [brand, brand-muted]
///   sizing: ["0.25", "0.5"]
///   screens:
///     tablet: "@tablet"
/// style:
///   listStyleType: [list-emoji]
/// aria: [busy]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tailwindest {
    /// Extensions shared by every property of a scale
    pub global: GlobalPlug,

    /// Extra whole class names accepted per style property
    pub style: IndexMap<String, Vec<String>>,

    /// Extra aria states, accepted as `@aria-<name>` nest keys
    pub aria: Vec<String>,

    /// Extra nest keys accepted verbatim
    pub nest_keys: Vec<String>,
}

/// Global extensions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalPlug {
    /// Custom color names, usable with every color property
    pub color: Vec<String>,

    /// Custom sizing values, usable with every sizing property
    pub sizing: Vec<String>,

    /// Custom screens: screen name to its nest key
    pub screens: IndexMap<String, String>,
}

impl Tailwindest {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TailwindestError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TailwindestError::ConfigError {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TailwindestError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| TailwindestError::ConfigError {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading tailwindest config");
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(TailwindestError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration; lists are unioned, screens from
    /// `other` win on conflict.
    pub fn merge(mut self, other: Self) -> Self {
        extend_unique(&mut self.global.color, other.global.color);
        extend_unique(&mut self.global.sizing, other.global.sizing);
        self.global.screens.extend(other.global.screens);

        for (property, classes) in other.style {
            extend_unique(self.style.entry(property).or_default(), classes);
        }

        extend_unique(&mut self.aria, other.aria);
        extend_unique(&mut self.nest_keys, other.nest_keys);

        self
    }

    /// Whether `key` may introduce a nested style.
    pub fn is_nest_key(&self, key: &str) -> bool {
        if catalog::is_nest_key(key) || self.nest_keys.iter().any(|k| k == key) {
            return true;
        }

        if self.global.screens.iter().any(|(name, nest)| {
            nest == key || key == format!("@{}", name) || key == format!("@max-{}", name)
        }) {
            return true;
        }

        key.strip_prefix("@aria-")
            .is_some_and(|state| self.aria.iter().any(|a| a == state))
    }

    /// Checks one class token against the vocabulary of `property`.
    pub fn check_class(&self, property: &str, class: &str) -> Result<()> {
        let utility = catalog::utility(property);
        let extra = self.style.get(property);
        if utility.is_none() && extra.is_none() {
            return Err(TailwindestError::UnknownProperty {
                property: property.to_string(),
            });
        }

        let bare = strip_modifiers(class);
        if extra.is_some_and(|classes| classes.iter().any(|c| c == bare)) {
            return Ok(());
        }

        let accepted = utility.is_some_and(|u| match u.matcher {
            Matcher::Exact(keywords) => keywords.contains(&bare),
            Matcher::Prefix(prefixes) => prefixes
                .iter()
                .any(|prefix| self.matches_prefix(bare, prefix, u.scale)),
        });

        if accepted {
            Ok(())
        } else {
            Err(TailwindestError::InvalidClass {
                property: property.to_string(),
                class: class.to_string(),
            })
        }
    }

    /// Collects every vocabulary problem in `style`, nested blocks included.
    pub fn problems(&self, style: &Style) -> Vec<TailwindestError> {
        let mut problems = Vec::new();
        self.collect_problems(style, &mut problems);
        problems
    }

    /// Fails with [`TailwindestError::Validation`] listing every problem.
    pub fn check(&self, style: &Style) -> Result<()> {
        let problems = self.problems(style);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(TailwindestError::Validation(problems))
        }
    }

    fn collect_problems(&self, style: &Style, problems: &mut Vec<TailwindestError>) {
        for (key, value) in style.iter() {
            match value {
                StyleValue::Nested(inner) => {
                    if !self.is_nest_key(key) {
                        problems.push(TailwindestError::UnknownNestKey {
                            key: key.to_string(),
                        });
                    }
                    self.collect_problems(inner, problems);
                }
                StyleValue::Class(class) if catalog::looks_like_nest_key(key) => {
                    problems.push(TailwindestError::InvalidClass {
                        property: key.to_string(),
                        class: class.clone(),
                    });
                }
                StyleValue::Class(class) => {
                    for token in class.split_whitespace() {
                        match self.check_class(key, token) {
                            Ok(()) => {}
                            Err(err @ TailwindestError::UnknownProperty { .. }) => {
                                problems.push(err);
                                break;
                            }
                            Err(err) => problems.push(err),
                        }
                    }
                }
            }
        }
    }

    fn matches_prefix(&self, class: &str, prefix: &str, scale: Scale) -> bool {
        let Some(rest) = class.strip_prefix(prefix) else {
            return false;
        };

        // prefixes like "border" or "shadow" are classes on their own
        let value = if prefix.ends_with('-') {
            rest
        } else if rest.is_empty() {
            return true;
        } else if let Some(value) = rest.strip_prefix('-') {
            value
        } else {
            return false;
        };

        if value.is_empty() {
            return false;
        }
        if ARBITRARY.is_match(value) {
            return true;
        }

        match scale {
            Scale::Color => {
                let name = without_opacity(value);
                COLOR.is_match(value) || self.global.color.iter().any(|c| c == name)
            }
            Scale::Sizing => {
                SIZING.is_match(value) || self.global.sizing.iter().any(|s| s == value)
            }
            Scale::None => KEYWORD.is_match(value),
        }
    }
}

/// Drops inline variant prefixes (`hover:`) and the `!` important marker.
fn strip_modifiers(class: &str) -> &str {
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => start = i + 1,
            _ => {}
        }
    }
    class[start..].trim_start_matches('!')
}

/// `brand/80` -> `brand`
fn without_opacity(value: &str) -> &str {
    match value.rsplit_once('/') {
        Some((color, alpha)) if !alpha.is_empty() && alpha.bytes().all(|b| b.is_ascii_digit()) => {
            color
        }
        _ => value,
    }
}

fn extend_unique(target: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
