//! Style maps: property name to utility class, with nested variant blocks.
//!
//! A [`Style`] maps a style-property name (`padding`, `backgroundColor`) to a
//! [`StyleValue`]. Values are either a class string (`"p-2"`, or several
//! whitespace-separated classes) or a nested [`Style`] filed under a nest key
//! such as `":hover"`, `"@dark"` or `"::before"`. Nested blocks become class
//! prefixes when the style is flattened:
//!
//! ```rust
//! use tailwindest::style;
//!
//! let button = style! {
//!     "padding" => "p-2",
//!     ":hover" => { "backgroundColor" => "bg-sky-100" },
//!     "@dark" => { ":hover" => { "backgroundColor" => "bg-sky-900" } },
//! };
//! assert_eq!(button.class(), "p-2 hover:bg-sky-100 dark:hover:bg-sky-900");
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Value stored under a style property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// One or more utility classes.
    Class(String),
    /// A nested style under a nest key (`:hover`, `@md`, ...).
    Nested(Style),
}

impl StyleValue {
    pub fn as_class(&self) -> Option<&str> {
        match self {
            StyleValue::Class(class) => Some(class),
            StyleValue::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Style> {
        match self {
            StyleValue::Nested(style) => Some(style),
            StyleValue::Class(_) => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(class: &str) -> Self {
        StyleValue::Class(class.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(class: String) -> Self {
        StyleValue::Class(class)
    }
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Nested(style)
    }
}

/// An immutable-by-convention mapping of style property to value.
///
/// Equality ignores insertion order; order only decides the order classes
/// appear in [`Style::class`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    props: IndexMap<String, StyleValue>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated style for chaining.
    pub fn with(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Files a nested style under `key` (e.g. `":hover"`).
    pub fn nest(self, key: &str, style: Style) -> Self {
        self.with(key, StyleValue::Nested(style))
    }

    /// Sets a property in place, returning the value it replaced.
    pub fn insert(&mut self, property: &str, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.props.insert(property.to_string(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.props.get(property)
    }

    /// Returns the class string stored under `property`, if it is not nested.
    pub fn class_of(&self, property: &str) -> Option<&str> {
        self.get(property).and_then(StyleValue::as_class)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.props.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// Shallow merge: every property of `other` overwrites the same property
    /// here. Nested blocks are replaced whole, not merged.
    pub fn merge(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        merged.merge_in(other);
        merged
    }

    /// In-place form of [`Style::merge`].
    pub fn merge_in(&mut self, other: &Style) {
        for (property, value) in &other.props {
            self.props.insert(property.clone(), value.clone());
        }
    }

    /// Merges layers left to right; later layers win.
    pub fn layered<'a>(layers: impl IntoIterator<Item = &'a Style>) -> Style {
        let mut merged = Style::new();
        for layer in layers {
            merged.merge_in(layer);
        }
        merged
    }

    /// Flattens the style to its utility classes, nest keys turned into
    /// prefixes. Duplicates keep their first position.
    pub fn classes(&self) -> Vec<String> {
        let mut out = IndexSet::new();
        self.collect_classes("", &mut out);
        out.into_iter().collect()
    }

    /// Space-joined form of [`Style::classes`].
    pub fn class(&self) -> String {
        self.classes().join(" ")
    }

    fn collect_classes(&self, prefix: &str, out: &mut IndexSet<String>) {
        for (key, value) in &self.props {
            match value {
                StyleValue::Class(class) => {
                    for token in class.split_whitespace() {
                        out.insert(format!("{}{}", prefix, token));
                    }
                }
                StyleValue::Nested(inner) => {
                    let nested = format!("{}{}:", prefix, nest_prefix(key));
                    inner.collect_classes(&nested, out);
                }
            }
        }
    }
}

/// Turns a nest key into the Tailwind variant it stands for:
/// `":hover"` → `"hover"`, `"::before"` → `"before"`, `"@md"` → `"md"`.
pub fn nest_prefix(key: &str) -> &str {
    key.trim_start_matches([':', '@'])
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Style {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.iter()
    }
}

/// Builds a [`Style`] literal. Keys are string literals; a braced value is a
/// nested style.
///
/// ```rust
/// use tailwindest::style;
///
/// let card = style! {
///     "display" => "flex",
///     "padding" => "p-4",
///     ":hover" => { "boxShadow" => "shadow-lg" },
/// };
/// assert_eq!(card.len(), 3);
/// ```
#[macro_export]
macro_rules! style {
    (@value { $($inner:tt)* }) => {
        $crate::StyleValue::Nested($crate::style!($($inner)*))
    };
    (@value $value:expr) => {
        $crate::StyleValue::from($value)
    };
    () => {
        $crate::Style::new()
    };
    ($($key:literal => $value:tt),+ $(,)?) => {{
        let mut style = $crate::Style::new();
        $( style.insert($key, $crate::style!(@value $value)); )+
        style
    }};
}
