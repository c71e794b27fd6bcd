//! Built-in Tailwind vocabulary used by [`crate::Tools::check`].
//!
//! This is a representative catalog, not the full generated class list: each
//! style property knows the utility prefixes (or exact keywords) its classes
//! may take. Project-specific additions live in [`crate::Tailwindest`].

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// How the classes of one style property are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Class must be one of these keywords.
    Exact(&'static [&'static str]),
    /// Class must start with one of these prefixes followed by a value.
    Prefix(&'static [&'static str]),
}

/// Whether a property's classes take color or sizing values, so the
/// configured `global.color` / `global.sizing` extensions apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    None,
    Color,
    Sizing,
}

/// Catalog entry for one style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utility {
    pub property: &'static str,
    pub matcher: Matcher,
    pub scale: Scale,
}

const fn exact(property: &'static str, keywords: &'static [&'static str]) -> Utility {
    Utility {
        property,
        matcher: Matcher::Exact(keywords),
        scale: Scale::None,
    }
}

const fn prefix(
    property: &'static str,
    prefixes: &'static [&'static str],
    scale: Scale,
) -> Utility {
    Utility {
        property,
        matcher: Matcher::Prefix(prefixes),
        scale,
    }
}

pub const UTILITIES: &[Utility] = &[
    // layout
    exact(
        "display",
        &[
            "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
            "table-caption", "table-cell", "table-column", "table-column-group",
            "table-footer-group", "table-header-group", "table-row-group", "table-row",
            "flow-root", "grid", "inline-grid", "contents", "list-item", "hidden",
        ],
    ),
    exact("position", &["static", "fixed", "absolute", "relative", "sticky"]),
    prefix("zIndex", &["z-", "-z-"], Scale::None),
    prefix("overflow", &["overflow-"], Scale::None),
    // flex & grid
    prefix("flexDirection", &["flex-row", "flex-col"], Scale::None),
    prefix("flexWrap", &["flex-wrap", "flex-nowrap"], Scale::None),
    prefix("flex", &["flex-"], Scale::None),
    exact(
        "alignItems",
        &["items-start", "items-end", "items-center", "items-baseline", "items-stretch"],
    ),
    exact(
        "justifyContent",
        &[
            "justify-normal", "justify-start", "justify-end", "justify-center",
            "justify-between", "justify-around", "justify-evenly", "justify-stretch",
        ],
    ),
    prefix("gap", &["gap-"], Scale::Sizing),
    prefix("gridTemplateColumns", &["grid-cols-"], Scale::None),
    exact(
        "gridAutoFlow",
        &[
            "grid-flow-row", "grid-flow-col", "grid-flow-dense", "grid-flow-row-dense",
            "grid-flow-col-dense",
        ],
    ),
    prefix("gridColumn", &["col-auto", "col-span-"], Scale::None),
    prefix("gridColumnStart", &["col-start-"], Scale::None),
    prefix("gridColumnEnd", &["col-end-"], Scale::None),
    // spacing
    prefix("padding", &["p-"], Scale::Sizing),
    prefix("paddingX", &["px-"], Scale::Sizing),
    prefix("paddingY", &["py-"], Scale::Sizing),
    prefix("paddingTop", &["pt-"], Scale::Sizing),
    prefix("paddingBottom", &["pb-"], Scale::Sizing),
    prefix("paddingLeft", &["pl-"], Scale::Sizing),
    prefix("paddingRight", &["pr-"], Scale::Sizing),
    prefix("margin", &["m-", "-m-"], Scale::Sizing),
    prefix("marginX", &["mx-", "-mx-"], Scale::Sizing),
    prefix("marginY", &["my-", "-my-"], Scale::Sizing),
    prefix("marginTop", &["mt-", "-mt-"], Scale::Sizing),
    prefix("marginBottom", &["mb-", "-mb-"], Scale::Sizing),
    prefix("marginLeft", &["ml-", "-ml-"], Scale::Sizing),
    prefix("marginRight", &["mr-", "-mr-"], Scale::Sizing),
    // sizing
    prefix("width", &["w-"], Scale::Sizing),
    prefix("minWidth", &["min-w-"], Scale::Sizing),
    prefix("maxWidth", &["max-w-"], Scale::Sizing),
    prefix("height", &["h-"], Scale::Sizing),
    prefix("minHeight", &["min-h-"], Scale::Sizing),
    prefix("maxHeight", &["max-h-"], Scale::Sizing),
    // typography
    prefix("fontSize", &["text-"], Scale::None),
    prefix("fontWeight", &["font-"], Scale::None),
    prefix("color", &["text-"], Scale::Color),
    exact(
        "textAlign",
        &["text-left", "text-center", "text-right", "text-justify", "text-start", "text-end"],
    ),
    prefix("lineHeight", &["leading-"], Scale::None),
    prefix("letterSpacing", &["tracking-"], Scale::None),
    exact("textDecoration", &["underline", "overline", "line-through", "no-underline"]),
    prefix("content", &["content-"], Scale::None),
    // backgrounds & borders
    prefix("backgroundColor", &["bg-"], Scale::Color),
    prefix("borderColor", &["border-"], Scale::Color),
    prefix("borderWidth", &["border"], Scale::None),
    prefix("borderRadius", &["rounded"], Scale::None),
    prefix("borderSpacing", &["border-spacing-"], Scale::Sizing),
    prefix("borderSpacingX", &["border-spacing-x-"], Scale::Sizing),
    prefix("borderSpacingY", &["border-spacing-y-"], Scale::Sizing),
    prefix("outline", &["outline"], Scale::None),
    prefix("ringColor", &["ring-"], Scale::Color),
    // effects & transitions
    prefix("boxShadow", &["shadow"], Scale::None),
    prefix("opacity", &["opacity-"], Scale::None),
    prefix("transition", &["transition"], Scale::None),
    prefix("transitionDuration", &["duration-"], Scale::None),
    prefix("transitionTimingFunction", &["ease-"], Scale::None),
    prefix("cursor", &["cursor-"], Scale::None),
];

/// Nest keys recognised without any configuration: pseudo-classes,
/// pseudo-elements, media and state variants.
pub const NEST_KEYS: &[&str] = &[
    ":backdrop", ":hover", ":active", ":first", ":last", ":only", ":odd", ":even",
    ":first-of-type", ":last-of-type", ":only-of-type", ":empty", ":enabled",
    ":indeterminate", ":default", ":required", ":valid", ":invalid", ":in-range",
    ":out-of-range", ":placeholder-shown", ":autofill", ":read-only", ":checked",
    ":disabled", ":visited", ":target", ":focus", ":focus-within", ":focus-visible",
    "::before", "::after", "::placeholder", "::file", "::marker", "::selection",
    "::first-line", "::first-letter", "@contrast-more", "@contrast-less",
    "@motion-reduce", "@motion-safe", "@portrait", "@landscape", "@print", "@rtl",
    "@ltr", "@sm", "@md", "@lg", "@xl", "@2xl", "@max-sm", "@max-md", "@max-lg",
    "@max-xl", "@max-2xl", "@aria-checked", "@aria-disabled", "@aria-expanded",
    "@aria-hidden", "@aria-pressed", "@aria-readonly", "@aria-required",
    "@aria-selected", "@dark",
];

/// Default responsive breakpoints.
pub const SCREENS: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

static BY_PROPERTY: Lazy<HashMap<&'static str, &'static Utility>> =
    Lazy::new(|| UTILITIES.iter().map(|u| (u.property, u)).collect());

static NEST_KEY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEST_KEYS.iter().copied().collect());

/// Looks up the catalog entry for a style property.
pub fn utility(property: &str) -> Option<&'static Utility> {
    BY_PROPERTY.get(property).copied()
}

pub fn is_nest_key(key: &str) -> bool {
    NEST_KEY_SET.contains(key)
}

/// Whether `key` has the shape of a nest key at all.
pub fn looks_like_nest_key(key: &str) -> bool {
    key.starts_with(':') || key.starts_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_are_unique() {
        let mut seen = HashSet::new();
        for utility in UTILITIES {
            assert!(seen.insert(utility.property), "duplicate {}", utility.property);
        }
    }

    #[test]
    fn test_every_screen_has_nest_keys() {
        for screen in SCREENS {
            assert!(is_nest_key(&format!("@{}", screen)));
            assert!(is_nest_key(&format!("@max-{}", screen)));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(utility("padding").map(|u| u.scale), Some(Scale::Sizing));
        assert!(utility("paddingg").is_none());
        assert!(looks_like_nest_key("::after"));
        assert!(!looks_like_nest_key("padding"));
    }
}
