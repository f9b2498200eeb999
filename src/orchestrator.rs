//! Lab generation orchestrator.
//!
//! This module coordinates one generation run: fetch the inventory, build the
//! topology graph, then render the topology document and the startup script.

use crate::clab::{render_topology, ClabTopology};
use crate::config::LabConfig;
use crate::inventory::{Device, InventorySource};
use crate::startup::{synthesize, StartupPlan};
use crate::topology::{build, TopologyGraph};
use crate::utils::{write_executable_script, write_yaml};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name of the generated startup script
pub const START_SCRIPT: &str = "start.sh";

/// Everything produced by one run, before it is written out
#[derive(Debug)]
pub struct LabOutput {
    pub name: String,
    pub graph: TopologyGraph,
    pub topology: ClabTopology,
    pub startup: StartupPlan,
}

impl LabOutput {
    pub fn topology_file_name(&self) -> String {
        format!("{}.yaml", self.name)
    }

    pub fn start_script(&self) -> String {
        self.startup.render_script(&self.name)
    }
}

/// Build the lab from an already fetched inventory
pub fn generate_from_devices(config: &LabConfig, devices: &[Device]) -> LabOutput {
    let requested: HashSet<String> = config.devices.iter().cloned().collect();

    let graph = build(devices, &requested);
    let topology = render_topology(config, &graph);
    let startup = synthesize(devices, &requested, &graph.scoped);

    LabOutput {
        name: config.name.clone(),
        graph,
        topology,
        startup,
    }
}

/// Fetch the inventory for the configured devices and build the lab.
///
/// Fails without producing anything if the configuration is invalid or the
/// inventory cannot be fetched.
pub fn generate_lab(config: &LabConfig, source: &dyn InventorySource) -> Result<LabOutput> {
    config.validate()?;

    let devices = source
        .fetch_devices(&config.devices)
        .wrap_err("Failed to fetch device inventory")?;
    info!("Fetched {} devices from inventory", devices.len());

    Ok(generate_from_devices(config, &devices))
}

/// Written output file locations
#[derive(Debug)]
pub struct WrittenFiles {
    pub topology: PathBuf,
    pub start_script: PathBuf,
}

/// Write the topology document and startup script into `output_dir`
pub fn write_lab(output: &LabOutput, output_dir: &Path) -> Result<WrittenFiles> {
    std::fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let topology = write_yaml(output_dir, &output.topology_file_name(), &output.topology)?;
    let start_script = write_executable_script(output_dir, START_SCRIPT, &output.start_script())?;

    info!("Wrote topology to {:?}", topology);
    info!(
        "Wrote startup commands for {} nodes to {:?}",
        output.startup.devices.len(),
        start_script
    );

    Ok(WrittenFiles {
        topology,
        start_script,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{FetchError, Interface, Role, Vendor};

    struct FailingSource;

    impl InventorySource for FailingSource {
        fn fetch_devices(&self, _names: &[String]) -> Result<Vec<Device>, FetchError> {
            Err(FetchError::Status { status: 502 })
        }
    }

    #[test]
    fn test_fetch_failure_is_fatal() {
        let config = LabConfig::new("lab", vec!["cr1".to_string()]);
        let err = generate_lab(&config, &FailingSource).unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("HTTP 502")));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_fetch() {
        let config = LabConfig::new("lab", Vec::new());
        assert!(generate_lab(&config, &FailingSource).is_err());
    }

    #[test]
    fn test_write_lab() {
        let devices = vec![Device::new("srv1", Role::Server, Vendor::Other("dell".to_string()))
            .with_interface(Interface::new("lo0").with_address("127.0.0.2/32"))];
        let config = LabConfig::new("lab", vec!["srv1".to_string()]);
        let output = generate_from_devices(&config, &devices);

        let dir = tempfile::tempdir().unwrap();
        let files = write_lab(&output, &dir.path().join("output")).unwrap();

        assert!(files.topology.ends_with("output/lab.yaml"));
        let script = std::fs::read_to_string(&files.start_script).unwrap();
        assert_eq!(
            script,
            "sudo ip netns exec clab-lab-srv1 sysctl -w net.ipv4.conf.all.arp_ignore=2\n\
             sudo ip netns exec clab-lab-srv1 ip addr add 127.0.0.2/32 dev lo\n\
             \n"
        );
    }
}
