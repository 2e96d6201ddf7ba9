//! membench-matrix CLI - benchmark configuration generator and build driver
//!
//! `generate` writes one configuration directory per workload, `for-all`
//! runs a make target over every generated configuration.

use clap::Parser;
use membench_matrix::config::{log_level, CliArgs, Commands, MatrixConfig, Target};
use membench_matrix::core::Generator;
use membench_matrix::error::Result;
use membench_matrix::orchestrator::{BuildOrchestrator, MakeRunner};
use membench_matrix::prompt::ConfirmPrompt;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(args.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: CliArgs) -> Result<()> {
    match &args.command {
        Commands::Generate { objdir, prompt, matrix, dry_run } => {
            cmd_generate(objdir, *prompt, matrix.as_deref(), *dry_run, args.quiet)
        }
        Commands::ForAll { target, objdir, make } => cmd_for_all(*target, objdir, make, args.quiet),
        Commands::Matrix { matrix, topologies } => cmd_matrix(matrix.as_deref(), *topologies),
    }
}

fn cmd_generate(
    objdir: &Path,
    prompt: bool,
    matrix: Option<&Path>,
    dry_run: bool,
    quiet: bool,
) -> Result<()> {
    let config = MatrixConfig::load_or_default(matrix)?;

    let mut generator = Generator::new(config, objdir).dry_run(dry_run);
    if prompt {
        generator = generator.with_confirmer(ConfirmPrompt::stdio());
    }
    if quiet {
        generator = generator.quiet();
    }

    let result = generator.execute()?;
    if !quiet {
        result.print_summary();
    }

    Ok(())
}

fn cmd_for_all(target: Target, objdir: &Path, make: &str, quiet: bool) -> Result<()> {
    let mut orchestrator = BuildOrchestrator::new(MakeRunner::new(make));
    if quiet {
        orchestrator = orchestrator.quiet();
    }

    let result = orchestrator.run(target, objdir)?;
    if !quiet {
        result.print_summary();
    }

    Ok(())
}

fn cmd_matrix(matrix: Option<&Path>, topologies: bool) -> Result<()> {
    let config = MatrixConfig::load_or_default(matrix)?;
    config.validate()?;

    if topologies {
        for topology in config.topologies() {
            topology.print_summary();
        }
    } else {
        println!("{}", config.to_json_pretty()?);
    }
    eprintln!("Total workloads: {}", config.workload_count());

    Ok(())
}
