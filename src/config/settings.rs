//! CLI arguments and build targets

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default parent directory for all generated configurations
pub const DEFAULT_OBJDIR: &str = "build";

/// membench-matrix - benchmark configuration generator and build driver
#[derive(Parser, Debug, Clone)]
#[command(name = "membench-matrix")]
#[command(author = "MemBench Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and build every memory benchmark configuration")]
#[command(long_about = r#"
membench-matrix expands the benchmark matrix (topology, load/store ratio,
access pattern, memory type, NUMA distance, operation mode, chunk and
access size) into one directory per configuration, each holding a
parameters.h, and then drives `make build` / `make run` over them in order.

Examples:
  membench-matrix generate build              # Write all configurations
  membench-matrix generate build --prompt     # Confirm each topology
  membench-matrix for-all build build         # Compile every configuration
  membench-matrix for-all run                 # Run every built benchmark
  membench-matrix matrix > matrix.json        # Dump the stock matrix
"#)]
pub struct CliArgs {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate one configuration directory per workload
    #[command(name = "generate")]
    Generate {
        /// Target parent directory for all configurations
        #[arg(value_name = "OBJDIR", default_value = DEFAULT_OBJDIR)]
        objdir: PathBuf,
        /// Ask for every topology whether to include it
        #[arg(short, long)]
        prompt: bool,
        /// JSON matrix file replacing the stock matrix
        #[arg(short, long, value_name = "PATH")]
        matrix: Option<PathBuf>,
        /// Only report what would be generated
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Run a make target for every configuration under OBJDIR
    #[command(name = "for-all")]
    ForAll {
        /// Make target executed for every configuration
        #[arg(value_enum, value_name = "TARGET")]
        target: Target,
        /// Parent directory of all configurations
        #[arg(value_name = "OBJDIR", default_value = DEFAULT_OBJDIR)]
        objdir: PathBuf,
        /// Build tool invoked per configuration
        #[arg(long, value_name = "PROGRAM", env = "MEMBENCH_MAKE", default_value = "make")]
        make: String,
    },

    /// Print the effective matrix as JSON
    #[command(name = "matrix")]
    Matrix {
        /// JSON matrix file to validate and print
        #[arg(short, long, value_name = "PATH")]
        matrix: Option<PathBuf>,
        /// Print the expanded topologies instead of JSON
        #[arg(short, long)]
        topologies: bool,
    },
}

/// Make target driven over every configuration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Compile each configuration
    Build,
    /// Run each compiled benchmark
    Run,
}

impl Target {
    /// Make target name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Run => "run",
        }
    }

    /// File whose presence marks a configuration ready for this target
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Build => crate::render::DEFINITION_FILE,
            Self::Run => "benchmark",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default log filter for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_markers() {
        assert_eq!(Target::Build.marker(), "parameters.h");
        assert_eq!(Target::Run.marker(), "benchmark");
        assert_eq!(Target::Run.to_string(), "run");
    }

    #[test]
    fn test_generate_defaults() {
        let args = CliArgs::try_parse_from(["membench-matrix", "generate"]).unwrap();
        match args.command {
            Commands::Generate { objdir, prompt, matrix, dry_run } => {
                assert_eq!(objdir, PathBuf::from("build"));
                assert!(!prompt);
                assert!(matrix.is_none());
                assert!(!dry_run);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_for_all_parsing() {
        let args =
            CliArgs::try_parse_from(["membench-matrix", "-v", "for-all", "run", "out", "--make", "gmake"])
                .unwrap();
        assert_eq!(args.verbose, 1);
        match args.command {
            Commands::ForAll { target, objdir, make } => {
                assert_eq!(target, Target::Run);
                assert_eq!(objdir, PathBuf::from("out"));
                assert_eq!(make, "gmake");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_target_rejected() {
        assert!(CliArgs::try_parse_from(["membench-matrix", "for-all", "clean"]).is_err());
        assert!(CliArgs::try_parse_from(["membench-matrix", "for-all"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), "info");
        assert_eq!(log_level(1), "debug");
        assert_eq!(log_level(5), "trace");
    }
}
