//! Sequential build driver
//!
//! Configurations are built or run strictly one after another: each step
//! may occupy a whole topology's cores and memory bandwidth. The first
//! failing step aborts the drive.

use super::{discover, ToolRunner};
use crate::config::Target;
use crate::error::{MatrixError, Result};
use crate::progress::StepProgress;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of a completed drive
#[derive(Debug)]
pub struct DriveResult {
    /// Target that was driven
    pub target: Target,
    /// Directories processed, in order
    pub completed: Vec<PathBuf>,
    /// Total duration
    pub duration: Duration,
}

impl DriveResult {
    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n=== {} Summary ===", self.target);
        println!("Configurations:  {}", self.completed.len());
        println!(
            "Duration:        {}",
            humantime::format_duration(Duration::from_secs(self.duration.as_secs()))
        );
    }
}

/// Drives an external tool over every discovered configuration
pub struct BuildOrchestrator<'a, R: ToolRunner> {
    runner: R,
    output: Box<dyn Write + 'a>,
}

impl<'a, R: ToolRunner> BuildOrchestrator<'a, R> {
    /// Create an orchestrator around `runner`
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            output: Box::new(io::stdout()),
        }
    }

    /// Send progress lines to `output`
    pub fn with_output(mut self, output: impl Write + 'a) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Suppress progress lines
    pub fn quiet(self) -> Self {
        self.with_output(io::sink())
    }

    /// Access the runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Discover configurations under `root` and drive `target` over them
    pub fn run(&mut self, target: Target, root: &Path) -> Result<DriveResult> {
        let dirs = discover(root, target)?;
        tracing::info!("Driving `{}` over {} configurations", target, dirs.len());
        self.run_dirs(target, &dirs)
    }

    /// Drive `target` over `dirs` in the given order
    pub fn run_dirs(&mut self, target: Target, dirs: &[PathBuf]) -> Result<DriveResult> {
        let start_time = Instant::now();
        let mut progress = StepProgress::new(dirs.len(), &mut self.output);
        let mut completed = Vec::with_capacity(dirs.len());

        for dir in dirs {
            progress.step()?;
            progress.note(&self.runner.describe(target, dir))?;

            let output = self.runner.invoke(target, dir)?;
            if !output.success {
                tracing::warn!("`{}` failed in {}: {}", target, dir.display(), output.status);
                return Err(MatrixError::ExternalToolFailure {
                    dir: dir.clone(),
                    target,
                    status: output.status.clone(),
                    output: output.combined(),
                });
            }
            tracing::debug!("`{}` succeeded in {}", target, dir.display());
            completed.push(dir.clone());
        }
        progress.finish("configurations")?;

        Ok(DriveResult {
            target,
            completed,
            duration: start_time.elapsed(),
        })
    }
}
