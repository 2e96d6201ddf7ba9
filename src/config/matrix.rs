//! Benchmark matrix definition
//!
//! The matrix lists the hardware shapes and every workload dimension's
//! value set. It is passed explicitly to the generator, so the enumeration
//! is a pure function of this structure.

use crate::error::{IoResultExt, MatrixError, Result};
use crate::topology::{Topology, TopologyShape};
use crate::workload::{ensure_unique, Dimensions, WorkloadSpace};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hardware shapes and workload dimensions to expand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Hardware shapes, one topology each
    pub shapes: Vec<TopologyShape>,
    /// Workload dimension value sets
    pub dimensions: Dimensions,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            shapes: vec![
                TopologyShape::new(1, 1),
                TopologyShape::new(2, 8),
                TopologyShape::new(2, 16),
                TopologyShape::new(2, 32),
                TopologyShape::new(2, 112),
            ],
            dimensions: Dimensions::default(),
        }
    }
}

impl MatrixConfig {
    /// Load a matrix from a JSON file; absent fields keep stock values
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|source| MatrixError::MatrixFile {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the stock matrix
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject matrices that cannot be generated
    pub fn validate(&self) -> Result<()> {
        for shape in &self.shapes {
            if shape.processing_units == 0 {
                return Err(MatrixError::invalid(format!(
                    "shape {} has no processing units",
                    shape.name()
                )));
            }
            if shape.threads == 0 {
                return Err(MatrixError::invalid(format!(
                    "shape {} has no threads",
                    shape.name()
                )));
            }
        }
        ensure_unique("shapes", &self.shapes)?;
        self.dimensions.validate()
    }

    /// Build one topology per shape, in shape order
    pub fn topologies(&self) -> Vec<Topology> {
        self.shapes.iter().map(TopologyShape::build).collect()
    }

    /// Number of workloads the full matrix expands to
    pub fn workload_count(&self) -> usize {
        let topologies = self.topologies();
        WorkloadSpace::new(&topologies, &self.dimensions).len()
    }

    /// Pretty JSON rendering
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MatrixError::invalid(format!("matrix not serializable: {}", e)))
    }
}
