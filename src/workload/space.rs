//! Lazy enumeration of the workload cross-product
//!
//! Nesting order, outermost first: topology, ratio, pattern, memory type,
//! distance, operation mode, chunk size, access size. Directory discovery
//! and progress numbering downstream rely on this order.

use super::{AccessPattern, Dimensions, MemType, NumaDistance, OperationMode, Ratio};
use crate::topology::Topology;

/// One point in the benchmark configuration space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload<'a> {
    /// Topology the workload runs on
    pub topology: &'a Topology,
    /// Memory per thread in GiB
    pub mem_per_thread: u64,
    /// Duration in seconds
    pub duration: u64,
    /// Memory type
    pub mem_type: MemType,
    /// Load/store ratio
    pub ratio: Ratio,
    /// NUMA distance
    pub distance: NumaDistance,
    /// Operation mode
    pub op_mode: OperationMode,
    /// Access pattern
    pub pattern: AccessPattern,
    /// Chunk size
    pub chunk_size: u32,
    /// Access size, never larger than `chunk_size`
    pub access_size: u32,
}

/// Memory per thread, floored. Zero threads yield zero.
pub fn memory_per_thread(memory_budget_gib: u64, topology: &Topology) -> u64 {
    memory_budget_gib
        .checked_div(topology.num_threads() as u64)
        .unwrap_or(0)
}

/// The cross-product of a topology list and a dimension set
///
/// Iterating does not consume the space; every call to [`iter`](Self::iter)
/// starts over from the first workload.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpace<'a> {
    topologies: &'a [Topology],
    dimensions: &'a Dimensions,
}

impl<'a> WorkloadSpace<'a> {
    /// Create a space over `topologies` and `dimensions`
    pub fn new(topologies: &'a [Topology], dimensions: &'a Dimensions) -> Self {
        Self {
            topologies,
            dimensions,
        }
    }

    /// Topologies of this space
    pub fn topologies(&self) -> &'a [Topology] {
        self.topologies
    }

    /// Lazily enumerate every workload in nesting order
    pub fn iter(&self) -> impl Iterator<Item = Workload<'a>> + 'a {
        let dims = self.dimensions;
        self.topologies.iter().flat_map(move |topology| {
            let mem_per_thread = memory_per_thread(dims.memory_budget_gib, topology);
            dims.ratios.iter().flat_map(move |&ratio| {
                dims.patterns.iter().flat_map(move |&pattern| {
                    dims.mem_types.iter().flat_map(move |&mem_type| {
                        dims.distances.iter().flat_map(move |&distance| {
                            dims.op_modes.iter().flat_map(move |&op_mode| {
                                dims.chunk_sizes.iter().flat_map(move |&chunk_size| {
                                    dims.access_sizes_for(chunk_size).map(move |access_size| {
                                        Workload {
                                            topology,
                                            mem_per_thread,
                                            duration: dims.duration_secs,
                                            mem_type,
                                            ratio,
                                            distance,
                                            op_mode,
                                            pattern,
                                            chunk_size,
                                            access_size,
                                        }
                                    })
                                })
                            })
                        })
                    })
                })
            })
        })
    }

    /// Number of workloads, computed without enumerating
    pub fn len(&self) -> usize {
        let d = self.dimensions;
        let access_combinations: usize = d
            .chunk_sizes
            .iter()
            .map(|&chunk| d.access_sizes_for(chunk).count())
            .sum();

        self.topologies.len()
            * d.ratios.len()
            * d.patterns.len()
            * d.mem_types.len()
            * d.distances.len()
            * d.op_modes.len()
            * access_combinations
    }

    /// Whether the space holds no workloads
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &WorkloadSpace<'a> {
    type Item = Workload<'a>;
    type IntoIter = Box<dyn Iterator<Item = Workload<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
