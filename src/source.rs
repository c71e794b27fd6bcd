//! Uniform access to the style layers a builder holds.

use crate::style::Style;
use indexmap::IndexSet;

/// Implemented by every builder so tools can check and safelist it without
/// knowing its variant shape.
pub trait StyleSource {
    /// Every style layer: base, variant styles, composed extras.
    fn layers(&self) -> Vec<&Style>;

    /// Every class the builder may emit under some selection.
    fn safelist(&self) -> IndexSet<String> {
        self.layers()
            .into_iter()
            .flat_map(Style::classes)
            .collect()
    }
}

impl StyleSource for Style {
    fn layers(&self) -> Vec<&Style> {
        vec![self]
    }
}

impl StyleSource for crate::Styled {
    fn layers(&self) -> Vec<&Style> {
        vec![self.style()]
    }
}
