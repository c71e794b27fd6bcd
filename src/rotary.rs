//! Single-axis variant builder.
//!
//! A rotary holds a `base` style and one style per variant key. Picking a key
//! merges `base`, then that key's style, then anything composed on top.
//!
//! ```rust
//! use tailwindest::{create_tools, Style};
//!
//! let tw = create_tools();
//! let padding = tw.rotary(
//!     Style::from([("padding", "p-2")]),
//!     [
//!         ("sm", Style::from([("padding", "p-1")])),
//!         ("lg", Style::from([("padding", "p-4")])),
//!     ],
//! );
//!
//! assert_eq!(padding.pick(&"sm").class(), "p-1");
//! let spaced = padding.compose([Style::from([("margin", "m-1")])]);
//! assert_eq!(spaced.class(&"lg"), "p-4 m-1");
//! ```

use crate::errors::Result;
use crate::source::StyleSource;
use crate::style::Style;
use crate::variant::{HasVariants, VariantKey};
use indexmap::IndexMap;
use std::str::FromStr;
use tracing::trace;

/// Name of the entry holding the default style in string-keyed variant maps.
pub const BASE_KEY: &str = "base";

/// Result of [`crate::Tools::rotary`] and [`crate::Tools::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotary<K: VariantKey> {
    base: Style,
    variants: IndexMap<K, Style>,
    extras: Style,
}

impl<K: VariantKey> Rotary<K> {
    pub fn new(base: Style, variants: impl IntoIterator<Item = (K, Style)>) -> Self {
        Self {
            base,
            variants: variants.into_iter().collect(),
            extras: Style::new(),
        }
    }

    pub fn base(&self) -> &Style {
        &self.base
    }

    /// Declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.variants.keys()
    }

    /// The style declared for `key`, before merging.
    pub fn variant(&self, key: &K) -> Option<&Style> {
        self.variants.get(key)
    }

    /// Resolves `key`: base, then the key's style, then composed extras.
    ///
    /// A key without a declared style resolves as if nothing was picked.
    pub fn pick(&self, key: &K) -> Style {
        let mut style = self.base.clone();
        match self.variants.get(key) {
            Some(variant) => style.merge_in(variant),
            None => trace!(variant = key.name(), "no style declared for variant"),
        }
        style.merge_in(&self.extras);
        style
    }

    pub fn class(&self, key: &K) -> String {
        self.pick(key).class()
    }

    /// The style when no variant is picked: base and composed extras.
    pub fn unpicked(&self) -> Style {
        self.base.merge(&self.extras)
    }

    /// Returns a new rotary with `extras` merged above every variant, left to
    /// right. The set of keys is unchanged.
    pub fn compose<I>(&self, extras: I) -> Rotary<K>
    where
        I: IntoIterator,
        I::Item: Into<Style>,
    {
        let mut composed = self.clone();
        for extra in extras {
            composed.extras.merge_in(&extra.into());
        }
        composed
    }
}

impl Rotary<String> {
    /// Builds a rotary from a string-keyed map whose `base` entry is the
    /// default style. A missing `base` is treated as empty.
    pub fn from_map(mut map: IndexMap<String, Style>) -> Self {
        let base = map.shift_remove(BASE_KEY).unwrap_or_default();
        Self::new(base, map)
    }
}

impl<K> Rotary<K>
where
    K: VariantKey + FromStr<Err = crate::TailwindestError>,
{
    /// Like [`Rotary::from_map`], parsing every non-`base` name into `K`.
    pub fn parse_map(map: IndexMap<String, Style>) -> Result<Self> {
        let dynamic = Rotary::<String>::from_map(map);
        let variants = dynamic
            .variants
            .into_iter()
            .map(|(name, style)| Ok((name.parse::<K>()?, style)))
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(Self {
            base: dynamic.base,
            variants,
            extras: dynamic.extras,
        })
    }
}

impl<K: VariantKey> HasVariants for Rotary<K> {
    type Variants = K;
}

impl<K: VariantKey> StyleSource for Rotary<K> {
    fn layers(&self) -> Vec<&Style> {
        std::iter::once(&self.base)
            .chain(self.variants.values())
            .chain(std::iter::once(&self.extras))
            .collect()
    }
}
