//! The plain style builder: one style, no selectable variants.

use crate::style::Style;
use crate::variant::{HasVariants, NoVariants};

/// Result of [`crate::Tools::style`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Styled {
    style: Style,
}

impl Styled {
    pub fn new(base: Style) -> Self {
        Self { style: base }
    }

    /// The resolved style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn class(&self) -> String {
        self.style.class()
    }

    /// Returns a new builder with `extras` merged over this style, left to
    /// right.
    pub fn compose<I>(&self, extras: I) -> Styled
    where
        I: IntoIterator,
        I::Item: Into<Style>,
    {
        let mut style = self.style.clone();
        for extra in extras {
            style.merge_in(&extra.into());
        }
        Styled { style }
    }
}

impl HasVariants for Styled {
    type Variants = NoVariants;
}

impl From<Styled> for Style {
    fn from(styled: Styled) -> Self {
        styled.style
    }
}
