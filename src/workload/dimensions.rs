//! Workload dimension values
//!
//! Each enum carries its lowercase tag (used in directory names) and the
//! selector flag it renders to in the definition file.

use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory the benchmark allocates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemType {
    /// Volatile DRAM
    Dram,
    /// Non-volatile memory
    Nvram,
}

impl MemType {
    /// All memory types, in stock order
    pub const ALL: [MemType; 2] = [Self::Dram, Self::Nvram];

    /// Lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dram => "dram",
            Self::Nvram => "nvram",
        }
    }

    /// Selector flag, e.g. `MEMTYPE_DRAM`
    pub fn flag(&self) -> String {
        format!("MEMTYPE_{}", self.as_str().to_uppercase())
    }
}

/// NUMA distance between the threads and their memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumaDistance {
    /// Memory attached to the thread's own domain
    Near,
    /// Memory attached to another domain
    Far,
}

impl NumaDistance {
    /// All distances, in stock order
    pub const ALL: [NumaDistance; 2] = [Self::Near, Self::Far];

    /// Lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Near => "near",
            Self::Far => "far",
        }
    }

    /// Selector flag, e.g. `NUMA_DISTANCE_FAR`
    pub fn flag(&self) -> String {
        format!("NUMA_DISTANCE_{}", self.as_str().to_uppercase())
    }
}

/// How stores reach memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Plain loads and stores
    Normal,
    /// Stores followed by a cache-line flush
    Clflush,
    /// Non-temporal stores bypassing the cache
    Nontemporal,
}

impl OperationMode {
    /// All operation modes, in stock order
    pub const ALL: [OperationMode; 3] = [Self::Normal, Self::Clflush, Self::Nontemporal];

    /// Lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Clflush => "clflush",
            Self::Nontemporal => "nontemporal",
        }
    }

    /// Selector flag, e.g. `CLFLUSH`
    pub fn flag(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// Order in which chunks are visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessPattern {
    /// Ascending addresses
    Sequential,
    /// Uniformly random chunks
    Random,
}

impl AccessPattern {
    /// All access patterns, in stock order
    pub const ALL: [AccessPattern; 2] = [Self::Sequential, Self::Random];

    /// Lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
        }
    }

    /// Selector flag, e.g. `RANDOM_ACCESS`
    pub fn flag(&self) -> String {
        format!("{}_ACCESS", self.as_str().to_uppercase())
    }
}

macro_rules! impl_display_tag {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_tag!(MemType, NumaDistance, OperationMode, AccessPattern);

/// Load/store mix, serialized as a `[loads, stores]` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Ratio {
    /// Loads per iteration
    pub loads: u32,
    /// Stores per iteration
    pub stores: u32,
}

impl Ratio {
    /// Create a ratio
    pub const fn new(loads: u32, stores: u32) -> Self {
        Self { loads, stores }
    }

    /// A ratio must issue at least one operation
    pub fn is_valid(&self) -> bool {
        self.loads > 0 || self.stores > 0
    }
}

impl From<(u32, u32)> for Ratio {
    fn from((loads, stores): (u32, u32)) -> Self {
        Self::new(loads, stores)
    }
}

impl From<Ratio> for (u32, u32) {
    fn from(ratio: Ratio) -> Self {
        (ratio.loads, ratio.stores)
    }
}

/// Value sets of every workload dimension except topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Benchmark duration in seconds
    pub duration_secs: u64,
    /// Total memory shared by all threads of a topology, in GiB
    pub memory_budget_gib: u64,
    /// Load/store ratios
    pub ratios: Vec<Ratio>,
    /// Access patterns
    pub patterns: Vec<AccessPattern>,
    /// Memory types
    pub mem_types: Vec<MemType>,
    /// NUMA distances
    pub distances: Vec<NumaDistance>,
    /// Operation modes
    pub op_modes: Vec<OperationMode>,
    /// Chunk sizes
    pub chunk_sizes: Vec<u32>,
    /// Access size candidates, filtered per chunk size
    pub access_sizes: Vec<u32>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            duration_secs: 80,
            memory_budget_gib: 128,
            ratios: vec![Ratio::new(1, 0), Ratio::new(0, 1), Ratio::new(1, 1)],
            patterns: AccessPattern::ALL.to_vec(),
            mem_types: MemType::ALL.to_vec(),
            distances: NumaDistance::ALL.to_vec(),
            op_modes: OperationMode::ALL.to_vec(),
            chunk_sizes: vec![1, 2, 4, 8, 16],
            access_sizes: vec![1, 2, 4, 8, 16],
        }
    }
}

impl Dimensions {
    /// Access sizes usable with `chunk_size`, in candidate order
    pub fn access_sizes_for(&self, chunk_size: u32) -> impl Iterator<Item = u32> + '_ {
        self.access_sizes
            .iter()
            .copied()
            .filter(move |&access| access <= chunk_size)
    }

    /// Reject value sets that would produce invalid or colliding workloads
    pub fn validate(&self) -> Result<()> {
        if let Some(ratio) = self.ratios.iter().find(|r| !r.is_valid()) {
            return Err(MatrixError::invalid(format!(
                "ratio ({}, {}) issues no operations",
                ratio.loads, ratio.stores
            )));
        }
        if self.chunk_sizes.contains(&0) {
            return Err(MatrixError::invalid("chunk sizes must be positive"));
        }
        if self.access_sizes.contains(&0) {
            return Err(MatrixError::invalid("access sizes must be positive"));
        }

        ensure_unique("ratios", &self.ratios)?;
        ensure_unique("patterns", &self.patterns)?;
        ensure_unique("mem_types", &self.mem_types)?;
        ensure_unique("distances", &self.distances)?;
        ensure_unique("op_modes", &self.op_modes)?;
        ensure_unique("chunk_sizes", &self.chunk_sizes)?;
        ensure_unique("access_sizes", &self.access_sizes)?;
        Ok(())
    }
}

/// Duplicate values would emit the same workload twice
pub(crate) fn ensure_unique<T: PartialEq + fmt::Debug>(dimension: &str, values: &[T]) -> Result<()> {
    for (i, value) in values.iter().enumerate() {
        if values[..i].contains(value) {
            return Err(MatrixError::invalid(format!(
                "duplicate value {:?} in {}",
                value, dimension
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_spellings() {
        assert_eq!(MemType::Nvram.flag(), "MEMTYPE_NVRAM");
        assert_eq!(NumaDistance::Near.flag(), "NUMA_DISTANCE_NEAR");
        assert_eq!(OperationMode::Nontemporal.flag(), "NONTEMPORAL");
        assert_eq!(AccessPattern::Sequential.flag(), "SEQUENTIAL_ACCESS");
    }

    #[test]
    fn test_tags_round_trip_through_serde() {
        let json = serde_json::to_string(&OperationMode::Clflush).unwrap();
        assert_eq!(json, "\"clflush\"");
        let mode: OperationMode = serde_json::from_str("\"nontemporal\"").unwrap();
        assert_eq!(mode, OperationMode::Nontemporal);
        assert_eq!(mode.to_string(), "nontemporal");
    }

    #[test]
    fn test_ratio_serializes_as_pair() {
        let json = serde_json::to_string(&Ratio::new(1, 0)).unwrap();
        assert_eq!(json, "[1,0]");
        let ratio: Ratio = serde_json::from_str("[2,3]").unwrap();
        assert_eq!(ratio, Ratio::new(2, 3));
    }

    #[test]
    fn test_access_sizes_for_chunk() {
        let dims = Dimensions::default();
        assert_eq!(dims.access_sizes_for(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(dims.access_sizes_for(4).collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(dims.access_sizes_for(16).count(), 5);
    }

    #[test]
    fn test_default_dimensions_are_valid() {
        assert!(Dimensions::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_sets() {
        let mut dims = Dimensions::default();
        dims.ratios.push(Ratio::new(0, 0));
        assert!(dims.validate().is_err());

        let mut dims = Dimensions::default();
        dims.chunk_sizes.push(0);
        assert!(dims.validate().is_err());

        let mut dims = Dimensions::default();
        dims.op_modes.push(OperationMode::Normal);
        assert!(dims.validate().is_err());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let dims: Dimensions = serde_json::from_str(r#"{"duration_secs": 5}"#).unwrap();
        assert_eq!(dims.duration_secs, 5);
        assert_eq!(dims.memory_budget_gib, 128);
        assert_eq!(dims.op_modes.len(), 3);
    }
}
