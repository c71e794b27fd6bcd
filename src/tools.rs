//! Builder factories bound to one vocabulary configuration.

use crate::config::Tailwindest;
use crate::errors::{Result, TailwindestError};
use crate::rotary::Rotary;
use crate::source::StyleSource;
use crate::style::Style;
use crate::styled::Styled;
use crate::variant::{VariantKey, VariantSelection};
use crate::variants::Variants;
use std::sync::Arc;

/// The builder factories plus the vocabulary their styles are checked
/// against.
///
/// Builders never validate; call [`Tools::check`] (or the `check` CLI
/// command) to hold styles to the configured vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Tools {
    config: Arc<Tailwindest>,
}

/// Tools over the built-in vocabulary.
pub fn create_tools() -> Tools {
    Tools::default()
}

impl Tools {
    /// Tools over a project-extended vocabulary.
    pub fn with_config(config: Tailwindest) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Tailwindest {
        &self.config
    }

    /// A plain style with no variants.
    pub fn style(&self, base: impl Into<Style>) -> Styled {
        Styled::new(base.into())
    }

    /// A single-axis variant builder.
    pub fn rotary<K: VariantKey>(
        &self,
        base: impl Into<Style>,
        variants: impl IntoIterator<Item = (K, Style)>,
    ) -> Rotary<K> {
        Rotary::new(base.into(), variants)
    }

    /// A two-state rotary keyed by `bool`.
    pub fn toggle(&self, base: impl Into<Style>, truthy: Style, falsy: Style) -> Rotary<bool> {
        Rotary::new(base.into(), [(true, truthy), (false, falsy)])
    }

    /// A grouped variant builder; declare groups with [`Variants::group`].
    pub fn variants<S: VariantSelection>(&self, base: impl Into<Style>) -> Variants<S> {
        Variants::new(base.into())
    }

    /// Merges caller-supplied style props over `base` and returns the class
    /// string.
    pub fn merge_props(&self, base: &Style, props: &Style) -> String {
        base.merge(props).class()
    }

    /// Checks every layer of a builder against the vocabulary.
    pub fn check<R: StyleSource + ?Sized>(&self, source: &R) -> Result<()> {
        let problems: Vec<TailwindestError> = source
            .layers()
            .into_iter()
            .flat_map(|layer| self.config.problems(layer))
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(TailwindestError::Validation(problems))
        }
    }
}
