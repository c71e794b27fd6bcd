//! Safelist manifest: every class a set of components can emit.
//!
//! Tailwind only generates CSS for classes it finds in scanned sources. Class
//! names assembled from style maps never appear verbatim, so the manifest
//! lists them for a safelist.

use crate::definitions::Component;
use crate::source::StyleSource;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version of the manifest format
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Metadata for the generated manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Version of the manifest format
    pub version: String,

    /// Timestamp when the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Number of components scanned
    pub components: usize,

    /// Number of unique classes
    pub classes: usize,

    /// Generator version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator_version: Option<String>,
}

/// Per-component entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestComponent {
    /// Builder kind (`style`, `rotary`, `toggle`, `variants`)
    pub kind: String,

    /// Classes the component may emit
    pub classes: Vec<String>,
}

/// Information about classes shared by several components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedClass {
    pub name: String,
    pub component_count: usize,
}

/// Complete manifest structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub metadata: ManifestMetadata,

    /// Components by name
    pub components: IndexMap<String, ManifestComponent>,

    /// Class name to the components that use it
    pub safelist: IndexMap<String, Vec<String>>,

    /// Most widely shared classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<Vec<SharedClass>>,
}

impl Manifest {
    /// Create an empty manifest stamped with the current time
    pub fn new() -> Self {
        Self {
            metadata: ManifestMetadata {
                version: MANIFEST_VERSION.to_string(),
                generated_at: Utc::now(),
                components: 0,
                classes: 0,
                generator_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            components: IndexMap::new(),
            safelist: IndexMap::new(),
            shared: None,
        }
    }

    /// Record a component and the classes it may emit
    pub fn add_component(&mut self, name: &str, kind: &str, source: &dyn StyleSource) {
        let classes: Vec<String> = source.safelist().into_iter().collect();

        for class in &classes {
            let users = self.safelist.entry(class.clone()).or_default();
            if !users.iter().any(|u| u == name) {
                users.push(name.to_string());
            }
        }

        self.components.insert(
            name.to_string(),
            ManifestComponent {
                kind: kind.to_string(),
                classes,
            },
        );

        self.metadata.components = self.components.len();
        self.metadata.classes = self.safelist.len();
    }

    /// Compute the classes shared by the most components
    pub fn calculate_shared(&mut self, limit: usize) {
        let mut shared: Vec<SharedClass> = self
            .safelist
            .iter()
            .filter(|(_, users)| users.len() > 1)
            .map(|(name, users)| SharedClass {
                name: name.clone(),
                component_count: users.len(),
            })
            .collect();

        // stable sort keeps first-seen order among ties
        shared.sort_by(|a, b| b.component_count.cmp(&a.component_count));
        shared.truncate(limit);
        self.shared = Some(shared);
    }

    /// One class per line, the format Tailwind's `safelist` file readers take
    pub fn to_safelist_text(&self) -> String {
        let mut text = self.safelist.keys().cloned().collect::<Vec<_>>().join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Convert manifest to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert manifest to pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating manifests
pub struct ManifestBuilder {
    manifest: Manifest,
    shared_limit: usize,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            manifest: Manifest::new(),
            shared_limit: 10,
        }
    }

    /// Add one built component
    pub fn with_component(mut self, name: &str, component: &Component) -> Self {
        self.manifest
            .add_component(name, component.kind(), component);
        self
    }

    /// Add every component of a definition set
    pub fn with_components<'a>(
        mut self,
        components: impl IntoIterator<Item = (&'a String, &'a Component)>,
    ) -> Self {
        for (name, component) in components {
            self = self.with_component(name, component);
        }
        self
    }

    /// How many shared classes to report
    pub fn with_shared_limit(mut self, limit: usize) -> Self {
        self.shared_limit = limit;
        self
    }

    pub fn build(mut self) -> Manifest {
        self.manifest.calculate_shared(self.shared_limit);
        self.manifest
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
