//! Variant keys, selections and the [`GetVariants`] type extractor.
//!
//! Variant names are ordinary Rust values: a [`VariantKey`] is anything that
//! can name itself (an enum from [`variant_key!`], a `String`, a `bool` for
//! toggles). A grouped selection is a [`VariantSelection`], usually a struct
//! generated by [`variant_selection!`] with one optional field per group.
//!
//! [`GetVariants<R>`] recovers the selection type a builder accepts:
//!
//! ```rust
//! use tailwindest::{variant_key, GetVariants, Rotary};
//!
//! variant_key! {
//!     pub enum Size { Sm => "sm", Lg => "lg" }
//! }
//!
//! fn size_of(_: &GetVariants<Rotary<Size>>) {}
//! size_of(&Size::Sm);
//! ```

use crate::errors::TailwindestError;
use indexmap::IndexMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::marker::PhantomData;

/// A value naming one variant of a rotary or a group.
pub trait VariantKey: Clone + Eq + Hash + Debug {
    /// The variant name as written in style definitions.
    fn name(&self) -> &str;
}

impl VariantKey for String {
    fn name(&self) -> &str {
        self
    }
}

impl VariantKey for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Toggles are rotaries keyed by `bool`.
impl VariantKey for bool {
    fn name(&self) -> &str {
        if *self {
            "true"
        } else {
            "false"
        }
    }
}

/// A grouped variant selection: which variant, if any, each group picks.
pub trait VariantSelection {
    /// Chosen variant name for `group`; `None` when the group is omitted.
    fn choice(&self, group: &str) -> Option<&str>;
}

/// String-keyed selection for styles loaded at runtime.
pub type DynSelection = IndexMap<String, String>;

impl VariantSelection for IndexMap<String, String> {
    fn choice(&self, group: &str) -> Option<&str> {
        self.get(group).map(String::as_str)
    }
}

/// The uninhabited "no variants" type. Builders without a selectable axis
/// report it from [`GetVariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoVariants {}

/// Associates a builder with the selection it resolves.
pub trait HasVariants {
    type Variants;
}

/// The legal variant selection of `R`.
pub type GetVariants<R> = <R as HasVariants>::Variants;

/// A group declared by the selection type `S`, keyed by `K`.
///
/// Handles come from [`variant_selection!`]; pass them to
/// [`crate::Variants::group`].
pub struct Group<S, K> {
    name: &'static str,
    _types: PhantomData<fn(&S) -> K>,
}

impl<S, K> Group<S, K> {
    #[doc(hidden)]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _types: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S, K> Clone for Group<S, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, K> Copy for Group<S, K> {}

impl<S, K> fmt::Debug for Group<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Group").field(&self.name).finish()
    }
}

impl HasVariants for crate::Style {
    type Variants = NoVariants;
}

/// Error for a variant name that is not part of a [`variant_key!`] enum.
pub fn unknown_variant(group: &str, key: &str) -> TailwindestError {
    TailwindestError::UnknownVariant {
        group: group.to_string(),
        key: key.to_string(),
    }
}

/// Declares an enum of variant names.
///
/// The enum gets `VariantKey`, `Display`, `FromStr` and an `ALL` constant
/// listing the variants in declaration order.
///
/// ```rust
/// use tailwindest::{variant_key, VariantKey};
///
/// variant_key! {
///     pub enum Tone { Neutral => "neutral", Danger => "danger" }
/// }
///
/// assert_eq!(Tone::Danger.name(), "danger");
/// assert_eq!("neutral".parse::<Tone>().unwrap(), Tone::Neutral);
/// assert_eq!(Tone::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! variant_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name { $($variant),+ }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl $crate::VariantKey for $name {
            fn name(&self) -> &str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::VariantKey::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::TailwindestError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err($crate::variant::unknown_variant(stringify!($name), s)),
                }
            }
        }
    };
}

/// Declares a grouped selection struct: one `Option` field per group, typed
/// by that group's key enum, plus a [`Group`] handle constant per group.
///
/// Each entry reads `field: KeyType => HANDLE`. Grouped builders take the
/// handle, so a group the struct does not declare, or a group keyed by the
/// wrong enum, does not compile.
///
/// ```rust
/// use tailwindest::{variant_key, variant_selection, VariantSelection};
///
/// variant_key! { pub enum Size { Sm => "sm", Lg => "lg" } }
/// variant_key! { pub enum Color { Red => "red", Blue => "blue" } }
///
/// variant_selection! {
///     pub struct ButtonVariants { size: Size => SIZE, color: Color => COLOR }
/// }
///
/// let pick = ButtonVariants::default().size(Size::Lg);
/// assert_eq!(pick.choice("size"), Some("lg"));
/// assert_eq!(pick.choice("color"), None);
/// assert_eq!(ButtonVariants::GROUPS, &["size", "color"]);
/// assert_eq!(ButtonVariants::COLOR.name(), "color");
/// ```
#[macro_export]
macro_rules! variant_selection {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident { $($group:ident : $key:ty => $handle:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name {
            $(pub $group: ::std::option::Option<$key>),+
        }

        impl $name {
            /// Group names, in declaration order.
            pub const GROUPS: &'static [&'static str] = &[$(stringify!($group)),+];

            $(
                #[allow(dead_code)]
                pub const $handle: $crate::variant::Group<$name, $key> =
                    $crate::variant::Group::new(stringify!($group));
            )+

            $(
                pub fn $group(mut self, key: $key) -> Self {
                    self.$group = ::std::option::Option::Some(key);
                    self
                }
            )+
        }

        impl $crate::VariantSelection for $name {
            fn choice(&self, group: &str) -> ::std::option::Option<&str> {
                match group {
                    $(stringify!($group) => self.$group.as_ref().map($crate::VariantKey::name),)+
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
