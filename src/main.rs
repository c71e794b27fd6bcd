use anyhow::Context;
use clap::Parser;
use tailwindest::commands::{run_check, run_resolve, run_safelist};
use tailwindest::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Handle commands
    match cli.command {
        Commands::Resolve(args) => {
            let class = run_resolve(&args)
                .with_context(|| format!("Failed to resolve component '{}'", args.component))?;
            println!("{}", class);
            Ok(())
        }
        Commands::Check(args) => {
            let report = run_check(&args).context("Failed to check definitions")?;
            if report.is_ok() {
                println!("All {} components passed", report.checked);
                return Ok(());
            }

            for (component, problems) in &report.failures {
                eprintln!("{}:", component);
                for problem in problems {
                    eprintln!("  - {}", problem);
                }
            }
            eprintln!(
                "{} of {} components failed",
                report.failures.len(),
                report.checked
            );
            std::process::exit(1);
        }
        Commands::Safelist(args) => {
            let (manifest, content) = run_safelist(&args).context("Failed to build safelist")?;
            match &args.output {
                Some(path) => println!(
                    "Wrote {} classes from {} components to {}",
                    manifest.metadata.classes,
                    manifest.metadata.components,
                    path.display()
                ),
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}
