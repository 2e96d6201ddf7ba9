//! Domain and topology types
//!
//! A [`Topology`] is built once per hardware shape and never mutated
//! afterwards. Workloads borrow it rather than owning a copy.

use crate::error::{MatrixError, Result};
use serde::{Deserialize, Serialize};

/// Device path of the memory attached to domain `index`
pub fn device_path(index: usize) -> String {
    format!("/dev/dax{}.0", index)
}

/// A group of processing units sharing a memory attachment point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    cpus: Vec<usize>,
    devices: Vec<String>,
}

impl Domain {
    /// Create a domain, rejecting duplicate device paths
    pub fn try_new(cpus: Vec<usize>, devices: Vec<String>) -> Result<Self> {
        for (i, device) in devices.iter().enumerate() {
            if devices[..i].contains(device) {
                return Err(MatrixError::invalid(format!(
                    "device '{}' attached twice to the same domain",
                    device
                )));
            }
        }
        Ok(Self { cpus, devices })
    }

    fn with_device(cpus: Vec<usize>, device: String) -> Self {
        Self {
            cpus,
            devices: vec![device],
        }
    }

    /// Processing-unit identifiers, in assignment order
    pub fn cpus(&self) -> &[usize] {
        &self.cpus
    }

    /// Attached device paths
    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    /// Number of processing units in this domain
    pub fn num_cpus(&self) -> usize {
        self.cpus.len()
    }

    /// Whether the domain only contributes memory
    pub fn is_memory_only(&self) -> bool {
        self.cpus.is_empty()
    }
}

/// Requested hardware shape: processing units and benchmark threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopologyShape {
    /// Number of processing units (one domain each)
    pub processing_units: usize,
    /// Number of benchmark threads distributed over the units
    pub threads: usize,
}

impl TopologyShape {
    /// Create a shape
    pub const fn new(processing_units: usize, threads: usize) -> Self {
        Self {
            processing_units,
            threads,
        }
    }

    /// Name of the topology this shape produces
    pub fn name(&self) -> String {
        format!("{}c{}t", self.processing_units, self.threads)
    }

    /// Build the topology for this shape
    pub fn build(&self) -> Topology {
        Topology::create(self.processing_units, self.threads)
    }
}

/// Full hardware shape description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    name: String,
    domains: Vec<Domain>,
}

impl Topology {
    /// Create a topology from explicit domains
    pub fn new(name: impl Into<String>, domains: Vec<Domain>) -> Self {
        Self {
            name: name.into(),
            domains,
        }
    }

    /// Distribute `num_threads` round-robin over `num_processing_units` domains
    ///
    /// Thread `t` lands in domain `t % num_processing_units`. Every domain gets
    /// one device, `/dev/dax<i>.0`. A single-unit shape additionally gets a
    /// compute-empty domain holding the remote memory device.
    pub fn create(num_processing_units: usize, num_threads: usize) -> Self {
        let mut domains: Vec<Domain> = (0..num_processing_units)
            .map(|i| {
                let cpus = (i..num_threads).step_by(num_processing_units).collect();
                Domain::with_device(cpus, device_path(i))
            })
            .collect();

        if num_processing_units == 1 {
            domains.push(Domain::with_device(Vec::new(), device_path(1)));
        }

        Self {
            name: TopologyShape::new(num_processing_units, num_threads).name(),
            domains,
        }
    }

    /// Topology name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Domains in order
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of domains
    pub fn num_domains(&self) -> usize {
        self.domains.len()
    }

    /// Total processing units across all domains
    pub fn num_threads(&self) -> usize {
        self.domains.iter().map(Domain::num_cpus).sum()
    }

    /// Print topology summary
    pub fn print_summary(&self) {
        println!("Topology {}:", self.name);
        println!("  Domains: {}", self.num_domains());
        println!("  Threads: {}", self.num_threads());

        for (i, domain) in self.domains.iter().enumerate() {
            println!("  Domain {}:", i);
            println!("    CPUs:    {:?}", domain.cpus);
            println!("    Devices: {:?}", domain.devices);
        }
    }
}
