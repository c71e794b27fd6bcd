//! Grouped variant builder.
//!
//! Several independent axes (`size`, `color`, ...) over one global base.
//! Resolving a selection merges the base, then the chosen style of every
//! selected group in declaration order, then anything composed on top.
//! Groups left out of the selection contribute nothing.

use crate::source::StyleSource;
use crate::style::Style;
use crate::variant::{DynSelection, Group, HasVariants, VariantKey, VariantSelection};
use indexmap::IndexMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// Result of [`crate::Tools::variants`]. `S` is the selection type.
pub struct Variants<S> {
    base: Style,
    groups: IndexMap<String, IndexMap<String, Style>>,
    extras: Style,
    _selection: PhantomData<fn(&S)>,
}

impl<S: VariantSelection> Variants<S> {
    pub fn new(base: Style) -> Self {
        Self {
            base,
            groups: IndexMap::new(),
            extras: Style::new(),
            _selection: PhantomData,
        }
    }

    /// Declares a group through its [`Group`] handle, so the group must be
    /// one `S` declares and the keys must be that group's key type.
    /// Redeclaring a group replaces it and moves it last in merge order.
    ///
    /// ```rust
    /// use tailwindest::{create_tools, style, variant_key, variant_selection};
    ///
    /// variant_key! { pub enum Size { Sm => "sm", Lg => "lg" } }
    /// variant_selection! { pub struct Pick { size: Size => SIZE } }
    ///
    /// let sized = create_tools()
    ///     .variants::<Pick>(style! { "display" => "flex" })
    ///     .group(Pick::SIZE, [(Size::Lg, style! { "padding" => "p-4" })]);
    /// assert_eq!(sized.class(&Pick::default().size(Size::Lg)), "flex p-4");
    /// ```
    ///
    /// A group keyed by another group's enum does not compile:
    ///
    /// ```compile_fail
    /// use tailwindest::{create_tools, style, variant_key, variant_selection};
    ///
    /// variant_key! { pub enum Size { Sm => "sm", Lg => "lg" } }
    /// variant_key! { pub enum Color { Red => "red" } }
    /// variant_selection! { pub struct Pick { size: Size => SIZE, color: Color => COLOR } }
    ///
    /// create_tools()
    ///     .variants::<Pick>(style! { "display" => "flex" })
    ///     .group(Pick::SIZE, [(Color::Red, style! { "backgroundColor" => "bg-red-500" })]);
    /// ```
    ///
    /// Nor does a group the selection type does not declare:
    ///
    /// ```compile_fail
    /// use tailwindest::{create_tools, style, variant_key, variant_selection};
    ///
    /// variant_key! { pub enum Size { Sm => "sm", Lg => "lg" } }
    /// variant_selection! { pub struct Pick { size: Size => SIZE } }
    ///
    /// create_tools()
    ///     .variants::<Pick>(style! { "display" => "flex" })
    ///     .group(Pick::SISE, [(Size::Lg, style! { "padding" => "p-4" })]);
    /// ```
    pub fn group<K: VariantKey>(
        mut self,
        group: Group<S, K>,
        variants: impl IntoIterator<Item = (K, Style)>,
    ) -> Self {
        let variants = variants
            .into_iter()
            .map(|(key, style)| (key.name().to_string(), style))
            .collect();
        self.insert_group(group.name(), variants);
        self
    }

    fn insert_group(&mut self, name: &str, variants: IndexMap<String, Style>) {
        self.groups.shift_remove(name);
        self.groups.insert(name.to_string(), variants);
    }

    pub fn base(&self) -> &Style {
        &self.base
    }

    /// Group names, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Variant names declared for `group`.
    pub fn keys(&self, group: &str) -> Vec<&str> {
        self.groups
            .get(group)
            .map(|variants| variants.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn resolve(&self, selection: &S) -> Style {
        let mut style = self.base.clone();
        for (group, variants) in &self.groups {
            let Some(choice) = selection.choice(group) else {
                continue;
            };
            match variants.get(choice) {
                Some(variant) => style.merge_in(variant),
                None => trace!(
                    group = group.as_str(),
                    variant = choice,
                    "no style declared for variant"
                ),
            }
        }
        style.merge_in(&self.extras);
        style
    }

    pub fn class(&self, selection: &S) -> String {
        self.resolve(selection).class()
    }

    /// Returns a new builder with `extras` merged above every resolution.
    pub fn compose<I>(&self, extras: I) -> Variants<S>
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

impl Variants<DynSelection> {
    /// Declares a group by name. String selections are checked at runtime,
    /// see [`crate::Component::undeclared`].
    pub fn named_group<K: VariantKey>(
        mut self,
        name: &str,
        variants: impl IntoIterator<Item = (K, Style)>,
    ) -> Self {
        let variants = variants
            .into_iter()
            .map(|(key, style)| (key.name().to_string(), style))
            .collect();
        self.insert_group(name, variants);
        self
    }

    /// Builds from string-keyed groups, as loaded from a definition file.
    pub fn from_groups(base: Style, groups: IndexMap<String, IndexMap<String, Style>>) -> Self {
        Self {
            base,
            groups,
            extras: Style::new(),
            _selection: PhantomData,
        }
    }
}

impl<S> Clone for Variants<S> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            groups: self.groups.clone(),
            extras: self.extras.clone(),
            _selection: PhantomData,
        }
    }
}

impl<S> fmt::Debug for Variants<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variants")
            .field("base", &self.base)
            .field("groups", &self.groups)
            .field("extras", &self.extras)
            .finish()
    }
}

impl<S> PartialEq for Variants<S> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.groups == other.groups && self.extras == other.extras
    }
}

impl<S> HasVariants for Variants<S> {
    type Variants = S;
}

impl<S> StyleSource for Variants<S> {
    fn layers(&self) -> Vec<&Style> {
        std::iter::once(&self.base)
            .chain(self.groups.values().flat_map(|variants| variants.values()))
            .chain(std::iter::once(&self.extras))
            .collect()
    }
}
