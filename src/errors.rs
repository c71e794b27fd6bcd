use thiserror::Error;

/// Main error type for the tailwindest crate
#[derive(Debug, Error)]
pub enum TailwindestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[cfg(feature = "cli")]
    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown style property '{property}'")]
    UnknownProperty { property: String },

    #[error("Class '{class}' is not a valid value for '{property}'")]
    InvalidClass { property: String, class: String },

    #[error("Unknown nest key '{key}'")]
    UnknownNestKey { key: String },

    #[error("Unknown variant '{key}' for '{group}'")]
    UnknownVariant { group: String, key: String },

    #[error("No component named '{name}'")]
    UnknownComponent { name: String },

    #[error("Invalid pick '{pick}': expected group=variant")]
    InvalidPick { pick: String },

    #[error("{} style problem(s):\n{}", .0.len(), render_problems(.0))]
    Validation(Vec<TailwindestError>),
}

fn render_problems(problems: &[TailwindestError]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {}", p))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, TailwindestError>;
