//! # membench-matrix - Benchmark Configuration Matrix for NUMA/NVRAM
//!
//! membench-matrix expands a memory-access benchmark into every combination
//! of hardware topology, load/store ratio, access pattern, memory type, NUMA
//! distance, operation mode, and chunk/access size. Each combination gets
//! its own directory with a `parameters.h` that the benchmark is compiled
//! against. The tool then drives `make build` / `make run` over all
//! directories, one at a time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use membench_matrix::config::MatrixConfig;
//! use membench_matrix::core::Generator;
//!
//! let result = Generator::new(MatrixConfig::default(), "build")
//!     .execute()
//!     .unwrap();
//!
//! println!("Wrote {} configurations", result.directories.len());
//! ```
//!
//! ## Driving the Build
//!
//! ```no_run
//! use membench_matrix::config::Target;
//! use membench_matrix::orchestrator::{BuildOrchestrator, MakeRunner};
//! use std::path::Path;
//!
//! let mut orchestrator = BuildOrchestrator::new(MakeRunner::default());
//! orchestrator.run(Target::Build, Path::new("build")).unwrap();
//! orchestrator.run(Target::Run, Path::new("build")).unwrap();
//! ```
//!
//! ## Enumerating Without Writing
//!
//! ```
//! use membench_matrix::config::MatrixConfig;
//! use membench_matrix::render::config_name;
//! use membench_matrix::workload::WorkloadSpace;
//!
//! let matrix = MatrixConfig::default();
//! let topologies = matrix.topologies();
//! let space = WorkloadSpace::new(&topologies, &matrix.dimensions);
//!
//! let first = space.iter().next().unwrap();
//! assert_eq!(
//!     config_name(&first),
//!     "1c1t_workload1-0_128GiB_dram_near_normal_sequential_ac1-1"
//! );
//! assert_eq!(space.len(), 5400);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod topology;
pub mod workload;

// Re-export commonly used types
pub use crate::config::{MatrixConfig, Target};
pub use crate::core::{GenerateResult, Generator};
pub use crate::error::{MatrixError, Result};
pub use crate::orchestrator::{BuildOrchestrator, MakeRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use membench_matrix::prelude::*;
    //! ```

    pub use crate::config::{MatrixConfig, Target};
    pub use crate::core::{GenerateResult, Generator};
    pub use crate::error::{MatrixError, Result};
    pub use crate::orchestrator::{discover, natural_cmp, BuildOrchestrator, MakeRunner, ToolRunner};
    pub use crate::prompt::{Confirmation, ConfirmPrompt, Confirmer};
    pub use crate::render::{config_name, render_definition, serialize, write_configuration};
    pub use crate::topology::{Domain, Topology, TopologyShape};
    pub use crate::workload::{Dimensions, Workload, WorkloadSpace};
}
