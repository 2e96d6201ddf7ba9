//! Directory names and `parameters.h` definition text
//!
//! The definition is a C header consumed by the benchmark build: numeric
//! constants, one selector flag per enum dimension, then the topology as
//! static `numa_domain_t`/`system_topology_t` aggregates.

use super::ToLiteral;
use crate::topology::Topology;
use crate::workload::Workload;
use std::fmt;

/// Directory name of a workload
///
/// Every coordinate appears in the name, each behind its own fixed
/// separator, so distinct workloads never share a directory.
pub fn config_name(workload: &Workload<'_>) -> String {
    format!(
        "{}_workload{}_{}GiB_{}_{}_{}_{}_ac{}-{}",
        workload.topology.name(),
        workload.ratio.to_literal().join("-"),
        workload.mem_per_thread,
        workload.mem_type,
        workload.distance,
        workload.op_mode,
        workload.pattern,
        workload.access_size,
        workload.chunk_size,
    )
}

/// Render the full definition text of a workload
pub fn render_definition(workload: &Workload<'_>) -> String {
    Definition(workload).to_string()
}

/// Directory name and definition text of a workload
pub fn serialize(workload: &Workload<'_>) -> (String, String) {
    (config_name(workload), render_definition(workload))
}

/// Display adapter writing a workload definition
#[derive(Debug, Clone, Copy)]
pub struct Definition<'w, 'a>(pub &'w Workload<'a>);

impl fmt::Display for Definition<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.0;
        writeln!(f, "#define MEM_PER_THREAD ({}ul)", w.mem_per_thread)?;
        writeln!(f, "#define DURATION ({}ul)", w.duration)?;
        writeln!(f, "#define {} 1", w.mem_type.flag())?;
        writeln!(f, "#define {} 1", w.distance.flag())?;
        writeln!(f, "#define NUM_LOADS ({}ul)", w.ratio.loads)?;
        writeln!(f, "#define NUM_STORES ({}ul)", w.ratio.stores)?;
        writeln!(f, "#define {} 1", w.op_mode.flag())?;
        writeln!(f, "#define {} 1", w.pattern.flag())?;
        writeln!(f, "#define ACCESS_SIZE ({}ul)", w.access_size)?;
        writeln!(f, "#define CHUNK_SIZE ({}ul)", w.chunk_size)?;
        write!(f, "{}", TopologyDefinition(w.topology))
    }
}

/// Display adapter writing the topology aggregates
#[derive(Debug, Clone, Copy)]
pub struct TopologyDefinition<'t>(pub &'t Topology);

impl fmt::Display for TopologyDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topo = self.0;
        writeln!(f, "#define CONST_TOPO (const_topo)")?;
        writeln!(f, "#define NUM_DOMAINS ({}ul)", topo.num_domains())?;

        for (i, dom) in topo.domains().iter().enumerate() {
            writeln!(f, "static int const_dom_cpus_{}[] = {};", i, dom.cpus().to_literal())?;
            writeln!(
                f,
                "static char *const_dom_nvram_{}[] = {};",
                i,
                dom.devices().to_literal().quoted()
            )?;
        }

        writeln!(f, "static numa_domain_t const_doms[] = {{")?;
        for (i, dom) in topo.domains().iter().enumerate() {
            writeln!(f, "  {{")?;
            writeln!(f, "    .num_cpus = {},", dom.num_cpus())?;
            writeln!(f, "    .cpu_ids = const_dom_cpus_{},", i)?;
            writeln!(f, "    .num_nvram = {},", dom.devices().len())?;
            writeln!(f, "    .nvram = const_dom_nvram_{},", i)?;
            writeln!(f, "  }},")?;
        }
        writeln!(f, "}};")?;

        writeln!(f, "static system_topology_t const_topo = {{")?;
        writeln!(f, "  .num_domains = NUM_DOMAINS,")?;
        writeln!(f, "  .domains = const_doms,")?;
        writeln!(f, "}};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::TopologyShape;
    use crate::workload::{
        AccessPattern, Dimensions, MemType, NumaDistance, OperationMode, Ratio, WorkloadSpace,
    };
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn sample(topology: &Topology) -> Workload<'_> {
        Workload {
            topology,
            mem_per_thread: 128,
            duration: 80,
            mem_type: MemType::Dram,
            ratio: Ratio::new(1, 0),
            distance: NumaDistance::Near,
            op_mode: OperationMode::Normal,
            pattern: AccessPattern::Sequential,
            chunk_size: 4,
            access_size: 2,
        }
    }

    #[test]
    fn test_config_name() {
        let topo = Topology::create(1, 1);
        assert_eq!(
            config_name(&sample(&topo)),
            "1c1t_workload1-0_128GiB_dram_near_normal_sequential_ac2-4"
        );
    }

    #[test]
    fn test_definition_text() {
        let topo = Topology::create(1, 1);
        let expected = "\
#define MEM_PER_THREAD (128ul)
#define DURATION (80ul)
#define MEMTYPE_DRAM 1
#define NUMA_DISTANCE_NEAR 1
#define NUM_LOADS (1ul)
#define NUM_STORES (0ul)
#define NORMAL 1
#define SEQUENTIAL_ACCESS 1
#define ACCESS_SIZE (2ul)
#define CHUNK_SIZE (4ul)
#define CONST_TOPO (const_topo)
#define NUM_DOMAINS (2ul)
static int const_dom_cpus_0[] = { 0 };
static char *const_dom_nvram_0[] = { \"/dev/dax0.0\" };
static int const_dom_cpus_1[] = {  };
static char *const_dom_nvram_1[] = { \"/dev/dax1.0\" };
static numa_domain_t const_doms[] = {
  {
    .num_cpus = 1,
    .cpu_ids = const_dom_cpus_0,
    .num_nvram = 1,
    .nvram = const_dom_nvram_0,
  },
  {
    .num_cpus = 0,
    .cpu_ids = const_dom_cpus_1,
    .num_nvram = 1,
    .nvram = const_dom_nvram_1,
  },
};
static system_topology_t const_topo = {
  .num_domains = NUM_DOMAINS,
  .domains = const_doms,
};
";
        assert_eq!(render_definition(&sample(&topo)), expected);
    }

    #[test]
    fn test_definition_selector_flags() {
        let topo = Topology::create(2, 8);
        let workload = Workload {
            mem_type: MemType::Nvram,
            distance: NumaDistance::Far,
            op_mode: OperationMode::Nontemporal,
            pattern: AccessPattern::Random,
            ..sample(&topo)
        };
        let (name, text) = serialize(&workload);
        assert!(name.contains("_nvram_far_nontemporal_random_"));
        assert!(text.contains("#define MEMTYPE_NVRAM 1\n"));
        assert!(text.contains("#define NUMA_DISTANCE_FAR 1\n"));
        assert!(text.contains("#define NONTEMPORAL 1\n"));
        assert!(text.contains("#define RANDOM_ACCESS 1\n"));
        assert!(text.contains("static int const_dom_cpus_1[] = { 1, 3, 5, 7 };\n"));
        assert!(!text.contains("MEMTYPE_DRAM"));
    }

    #[test]
    fn test_names_are_unique_across_stock_space() {
        let topologies: Vec<Topology> = [(1, 1), (2, 8), (2, 16), (2, 32), (2, 112)]
            .iter()
            .map(|&(u, t)| TopologyShape::new(u, t).build())
            .collect();
        let dims = Dimensions::default();
        let space = WorkloadSpace::new(&topologies, &dims);

        let names: HashSet<String> = space.iter().map(|w| config_name(&w)).collect();
        assert_eq!(names.len(), space.len());
    }

    proptest! {
        #[test]
        fn prop_distinct_ratios_and_sizes_get_distinct_names(
            a in (0u32..200, 0u32..200, 1u32..64, 1u32..64),
            b in (0u32..200, 0u32..200, 1u32..64, 1u32..64),
        ) {
            prop_assume!(a != b);
            let topo = Topology::create(2, 8);
            let make = |(loads, stores, chunk, access): (u32, u32, u32, u32)| Workload {
                ratio: Ratio::new(loads, stores),
                chunk_size: chunk,
                access_size: access,
                ..sample(&topo)
            };
            prop_assert_ne!(config_name(&make(a)), config_name(&make(b)));
        }
    }
}
