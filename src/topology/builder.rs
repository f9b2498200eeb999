//! Topology graph construction.
//!
//! Scans the inventory once and produces the emulated nodes, the
//! deduplicated link set and the interfaces that take part in those links.
//! Interface names stay raw here; translation happens when links are
//! rendered, so the link identity does not depend on naming rules.

use super::link::CanonicalLink;
use super::types::EmulatedNode;
use crate::inventory::{Device, Vendor};
use crate::utils::OrderedMap;
use log::{debug, info, warn};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Raw interface names per device that are part of at least one lab link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedInterfaces {
    by_device: HashMap<String, HashSet<String>>,
}

impl ScopedInterfaces {
    pub fn insert(&mut self, device: &str, interface: &str) {
        self.by_device
            .entry(device.to_string())
            .or_default()
            .insert(interface.to_string());
    }

    pub fn contains(&self, device: &str, interface: &str) -> bool {
        self.by_device
            .get(device)
            .map_or(false, |interfaces| interfaces.contains(interface))
    }

    /// Number of scoped interfaces on `device`
    pub fn count(&self, device: &str) -> usize {
        self.by_device.get(device).map_or(0, HashSet::len)
    }
}

/// Result of a topology build
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    /// Emulated nodes in inventory order
    pub nodes: OrderedMap<EmulatedNode>,
    /// Deduplicated links, sorted by canonical endpoint order
    pub links: BTreeSet<CanonicalLink>,
    pub scoped: ScopedInterfaces,
    /// Vendor used for interface naming, per device
    pub vendors: HashMap<String, Vendor>,
}

impl TopologyGraph {
    /// Links rendered as `device:interface` pairs with lab interface names
    pub fn rendered_links(&self) -> Vec<[String; 2]> {
        self.links.iter().map(|link| link.render(&self.vendors)).collect()
    }
}

/// Build the topology graph for the devices in `requested_names`.
///
/// Links are only recorded when both endpoints belong to requested devices;
/// anything else is dropped without error.
pub fn build(devices: &[Device], requested_names: &HashSet<String>) -> TopologyGraph {
    let mut graph = TopologyGraph::default();

    for device in devices {
        if !requested_names.contains(&device.name) {
            warn!("Device {} was returned but not requested; leaving it out", device.name);
            continue;
        }

        graph
            .vendors
            .insert(device.name.clone(), device.effective_vendor());

        match EmulatedNode::for_device(device) {
            Some(node) => {
                debug!("{} emulated as {}", device.name, node.kind.as_str());
                graph.nodes.insert(device.name.clone(), node);
            }
            None => warn!(
                "Device {} has role '{}' which is not emulated; leaving it out of the topology",
                device.name, device.role
            ),
        }

        for interface in &device.interfaces {
            let Some(peer) = &interface.connected else {
                continue;
            };
            if !requested_names.contains(&peer.device) {
                debug!(
                    "{}:{} connects to {}:{} outside the lab",
                    device.name, interface.name, peer.device, peer.interface
                );
                continue;
            }

            graph.scoped.insert(&device.name, &interface.name);
            graph.links.insert(CanonicalLink::new(
                &device.name,
                &interface.name,
                &peer.device,
                &peer.interface,
            ));
        }
    }

    for name in requested_names {
        if !devices.iter().any(|d| &d.name == name) {
            warn!("Requested device {} not found in inventory", name);
        }
    }

    info!(
        "Topology has {} nodes and {} links",
        graph.nodes.len(),
        graph.links.len()
    );
    graph
}
