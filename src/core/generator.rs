//! Main generation engine
//!
//! Confirms topologies (optionally), enumerates the workload space over
//! the accepted ones, and writes one configuration directory per workload.

use crate::config::MatrixConfig;
use crate::error::Result;
use crate::progress::StepProgress;
use crate::prompt::Confirmer;
use crate::render::write_configuration;
use crate::topology::Topology;
use crate::workload::WorkloadSpace;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Generation result
#[derive(Debug)]
pub struct GenerateResult {
    /// Topologies that were expanded
    pub accepted: Vec<String>,
    /// Topologies declined at the prompt
    pub declined: Vec<String>,
    /// Configuration directories, in enumeration order
    pub directories: Vec<PathBuf>,
    /// Workloads enumerated (written unless dry run)
    pub workloads: usize,
    /// Nothing was written
    pub dry_run: bool,
    /// Total duration
    pub duration: Duration,
}

impl GenerateResult {
    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n=== Generate Summary ===");
        println!("Workloads:       {}", self.workloads);
        println!("Directories:     {}", self.directories.len());
        println!("Topologies:      {}", self.accepted.join(", "));
        if !self.declined.is_empty() {
            println!("Skipped:         {}", self.declined.join(", "));
        }
        println!("Duration:        {}", humantime::format_duration(round_ms(self.duration)));
        if self.dry_run {
            println!("Dry run: nothing was written.");
        }
    }
}

fn round_ms(duration: Duration) -> Duration {
    Duration::from_millis(duration.as_millis() as u64)
}

/// Main generation engine
pub struct Generator<'a> {
    /// Matrix to expand
    matrix: MatrixConfig,
    /// Parent directory of all configurations
    root: PathBuf,
    /// Per-topology confirmation, if prompting
    confirmer: Option<Box<dyn Confirmer + 'a>>,
    /// Progress output
    output: Box<dyn Write + 'a>,
    /// Enumerate without writing
    dry_run: bool,
}

impl<'a> Generator<'a> {
    /// Create a generator writing below `root`
    pub fn new(matrix: MatrixConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            matrix,
            root: root.into(),
            confirmer: None,
            output: Box::new(io::stdout()),
            dry_run: false,
        }
    }

    /// Ask before expanding each topology
    pub fn with_confirmer(mut self, confirmer: impl Confirmer + 'a) -> Self {
        self.confirmer = Some(Box::new(confirmer));
        self
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

    /// Enumerate without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Parent directory of all configurations
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the generation
    pub fn execute(mut self) -> Result<GenerateResult> {
        let start_time = Instant::now();
        self.matrix.validate()?;

        let (topologies, declined) = self.select_topologies()?;
        let accepted: Vec<String> = topologies.iter().map(|t| t.name().to_string()).collect();

        let space = WorkloadSpace::new(&topologies, &self.matrix.dimensions);
        let total = space.len();
        tracing::info!(
            "Expanding {} workloads over {} topologies into {}",
            total,
            topologies.len(),
            self.root.display()
        );

        let mut progress = StepProgress::new(total, &mut self.output);
        progress.note(&format!("Total workloads: {}", total))?;

        let mut directories = Vec::with_capacity(if self.dry_run { 0 } else { total });
        let mut workloads = 0;
        for workload in space.iter() {
            progress.step()?;
            workloads += 1;
            if !self.dry_run {
                directories.push(write_configuration(&self.root, &workload)?);
            }
        }
        progress.finish("workloads")?;

        Ok(GenerateResult {
            accepted,
            declined,
            directories,
            workloads,
            dry_run: self.dry_run,
            duration: start_time.elapsed(),
        })
    }

    /// Build all topologies and keep the confirmed ones
    fn select_topologies(&mut self) -> Result<(Vec<Topology>, Vec<String>)> {
        let mut accepted = Vec::new();
        let mut declined = Vec::new();

        for topology in self.matrix.topologies() {
            let keep = match self.confirmer.as_mut() {
                Some(confirmer) => confirmer
                    .confirm(&format!("Generate benchmarks for {}?", topology.name()))?
                    .is_accept(),
                None => true,
            };

            if keep {
                accepted.push(topology);
            } else {
                tracing::info!("Skipping topology {}", topology.name());
                declined.push(topology.name().to_string());
            }
        }

        Ok((accepted, declined))
    }
}
