//! Variant-driven Tailwind styles.
//!
//! Styles are maps from a style property to its utility class. Builders
//! combine them by variant: [`Tools::style`] for a single style,
//! [`Tools::rotary`] for one axis of variants, [`Tools::variants`] for
//! several independent groups. Every builder merges shallowly with later
//! layers winning, and every builder can [`compose`](Rotary::compose) extra
//! styles on top.
//!
//! ```rust
//! use tailwindest::{create_tools, style};
//!
//! let tw = create_tools();
//! let padding = tw.rotary(
//!     style! { "padding" => "p-2" },
//!     [("sm", style! { "padding" => "p-1" }), ("lg", style! { "padding" => "p-4" })],
//! );
//!
//! assert_eq!(padding.pick(&"sm"), style! { "padding" => "p-1" });
//!
//! let spaced = padding.compose([style! { "margin" => "m-1" }]);
//! assert_eq!(spaced.pick(&"lg"), style! { "padding" => "p-4", "margin" => "m-1" });
//! ```

pub mod catalog;
pub mod config;
pub mod definitions;
pub mod errors;
pub mod manifest;
pub mod rotary;
pub mod source;
pub mod style;
pub mod styled;
pub mod tools;
pub mod variant;
pub mod variants;

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub mod commands;

#[cfg(feature = "cli")]
pub use args::{CheckArgs, Cli, Commands, ResolveArgs, SafelistArgs, SafelistFormat};
pub use config::{GlobalPlug, Tailwindest};
pub use definitions::{Component, ComponentDef, Definitions};
pub use errors::{Result, TailwindestError};
pub use manifest::{Manifest, ManifestBuilder};
pub use rotary::Rotary;
pub use source::StyleSource;
pub use style::{Style, StyleValue};
pub use styled::Styled;
pub use tools::{create_tools, Tools};
pub use variant::{
    DynSelection, GetVariants, Group, HasVariants, NoVariants, VariantKey, VariantSelection,
};
pub use variants::Variants;
