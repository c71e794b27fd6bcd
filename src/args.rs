use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tailwindest CLI - resolves, checks and safelists variant-driven Tailwind styles
#[derive(Parser, Debug)]
#[command(name = "tailwindest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short = 'v', long = "verbose", global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the class string of one component under a variant selection
    Resolve(ResolveArgs),
    /// Check every component against the configured vocabulary
    Check(CheckArgs),
    /// Write every class the components may emit
    Safelist(SafelistArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Definition file patterns (glob patterns supported)
    #[arg(
        short = 'd',
        long = "definitions",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Component definition files (YAML or JSON)"
    )]
    pub definitions: Vec<String>,

    /// Component name
    #[arg(value_name = "COMPONENT")]
    pub component: String,

    /// Variant picks: `group=variant`, or a bare variant for rotary and toggle components
    #[arg(value_name = "PICK")]
    pub picks: Vec<String>,

    /// Fail on picks the component does not declare
    #[arg(
        long = "strict",
        default_value_t = false,
        help = "Reject picks naming undeclared groups or variants"
    )]
    pub strict: bool,

    /// Extra vocabulary configuration; the component is checked when given
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Check the component against this vocabulary configuration (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Definition file patterns (glob patterns supported)
    #[arg(
        short = 'd',
        long = "definitions",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Component definition files (YAML or JSON)"
    )]
    pub definitions: Vec<String>,

    /// Extra vocabulary configuration
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to a vocabulary configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,
}

/// Output format of the safelist command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafelistFormat {
    /// Full JSON manifest
    #[default]
    Json,
    /// One class per line
    Text,
}

/// Arguments for the safelist command
#[derive(Parser, Debug, Clone)]
pub struct SafelistArgs {
    /// Definition file patterns (glob patterns supported)
    #[arg(
        short = 'd',
        long = "definitions",
        value_name = "PATTERN",
        required = true,
        num_args = 1..,
        help = "Component definition files (YAML or JSON)"
    )]
    pub definitions: Vec<String>,

    /// Output path; stdout when omitted
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Path where the safelist will be written"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "format", value_enum, default_value_t = SafelistFormat::Json)]
    pub format: SafelistFormat,
}

/// Splits picks into a selection. Bare values select the `variant` group.
pub fn parse_picks(picks: &[String]) -> crate::Result<crate::DynSelection> {
    let mut selection = crate::DynSelection::new();
    for pick in picks {
        let (group, key) = match pick.split_once('=') {
            Some((group, key)) => (group.trim(), key.trim()),
            None => (crate::definitions::VARIANT_GROUP, pick.trim()),
        };
        if group.is_empty() || key.is_empty() {
            return Err(crate::TailwindestError::InvalidPick { pick: pick.clone() });
        }
        selection.insert(group.to_string(), key.to_string());
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_picks() {
        let selection = parse_picks(&picks(&["size=sm", "color = red", "lg"])).unwrap();
        assert_eq!(selection["size"], "sm");
        assert_eq!(selection["color"], "red");
        assert_eq!(selection["variant"], "lg");
    }

    #[test]
    fn test_parse_picks_rejects_empty_parts() {
        assert!(parse_picks(&picks(&["=sm"])).is_err());
        assert!(parse_picks(&picks(&["size="])).is_err());
    }
}
