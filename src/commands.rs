//! Handlers behind the `tailwindest` subcommands.
//!
//! Each handler returns its result instead of printing so the binary decides
//! on output and exit codes.

use crate::args::{parse_picks, CheckArgs, ResolveArgs, SafelistArgs, SafelistFormat};
use crate::config::Tailwindest;
use crate::definitions::Definitions;
use crate::errors::{Result, TailwindestError};
use crate::manifest::{Manifest, ManifestBuilder};
use crate::tools::Tools;
use indexmap::{IndexMap, IndexSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Outcome of the check command
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of components checked
    pub checked: usize,

    /// Problems by component name; components without problems are absent
    pub failures: IndexMap<String, Vec<TailwindestError>>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collect the files matching the given patterns, in pattern order
pub fn collect_files(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = IndexSet::new();

    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_dir() {
                continue;
            }
            matched = true;
            files.insert(path);
        }
        if !matched {
            warn!(pattern = pattern.as_str(), "pattern matched no definition files");
        }
    }

    Ok(files.into_iter().collect())
}

/// Load and merge every definition file; later files win
pub fn load_definitions(patterns: &[String]) -> Result<Definitions> {
    let files = collect_files(patterns)?;
    if files.is_empty() {
        return Err(TailwindestError::ConfigError {
            message: format!("No definition files matched {:?}", patterns),
        });
    }

    let mut definitions = Definitions::default();
    for path in &files {
        definitions = definitions.merge(Definitions::from_file(path)?);
    }
    debug!(
        files = files.len(),
        components = definitions.components.len(),
        "loaded definitions"
    );
    Ok(definitions)
}

fn tools_for(definitions: &Definitions, extra: Option<&Path>) -> Result<Tools> {
    let mut config = definitions.config.clone();
    if let Some(path) = extra {
        config = config.merge(Tailwindest::from_file(path)?);
    }
    Ok(Tools::with_config(config))
}

/// Class string of one component under the given picks
pub fn run_resolve(args: &ResolveArgs) -> Result<String> {
    let definitions = load_definitions(&args.definitions)?;
    let component = definitions.component(&args.component)?;
    let selection = parse_picks(&args.picks)?;

    let undeclared = component.undeclared(&selection);
    if !undeclared.is_empty() {
        if args.strict {
            return Err(TailwindestError::Validation(undeclared));
        }
        for problem in &undeclared {
            debug!(%problem, "ignoring pick");
        }
    }

    if args.config.is_some() {
        tools_for(&definitions, args.config.as_deref())?.check(&component)?;
    }

    Ok(component.resolve(&selection).class())
}

/// Check every component against the vocabulary
pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let definitions = load_definitions(&args.definitions)?;
    let tools = tools_for(&definitions, args.config.as_deref())?;

    let mut report = CheckReport::default();
    for (name, component) in definitions.build() {
        report.checked += 1;
        match tools.check(&component) {
            Ok(()) => {}
            Err(TailwindestError::Validation(problems)) => {
                report.failures.insert(name, problems);
            }
            Err(other) => return Err(other),
        }
    }

    info!(
        checked = report.checked,
        failed = report.failures.len(),
        "check finished"
    );
    Ok(report)
}

/// Build the safelist manifest and write it out when an output path is set
pub fn run_safelist(args: &SafelistArgs) -> Result<(Manifest, String)> {
    let definitions = load_definitions(&args.definitions)?;
    let components = definitions.build();
    let manifest = ManifestBuilder::new().with_components(&components).build();

    let content = match args.format {
        SafelistFormat::Json => manifest.to_pretty_json()?,
        SafelistFormat::Text => manifest.to_safelist_text(),
    };

    if let Some(output) = &args.output {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(output, &content)?;
        info!(
            path = %output.display(),
            classes = manifest.metadata.classes,
            "safelist written"
        );
    }

    Ok((manifest, content))
}

/// Write file atomically through a uniquely named temp file in the same directory
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;

    file.persist(path).map(drop).map_err(|e| e.error)
}
