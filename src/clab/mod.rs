//! # Containerlab Topology Module
//!
//! Turns a built topology graph into the containerlab topology document.
//!
//! ## Generated Structure
//!
//! ```yaml
//! name: wmf-minilab
//! mgmt:
//!   network: wmf-minilab
//!   bridge: clab
//! topology:
//!   kinds:
//!     nokia_srlinux:
//!       image: ghcr.io/nokia/srlinux:24.7.2
//!     crpd:
//!       image: crpd:latest
//!     linux:
//!       image: debian:clab
//!   nodes:
//!     cr1-eqiad:
//!       kind: crpd
//!   links:
//!   - endpoints:
//!     - cr1-eqiad:xe-0_0_1
//!     - cr2-eqiad:xe-0_1_1
//! ```
//!
//! The kinds section is always complete so that nodes added by hand later
//! find their kind defaults.

pub mod types;

pub use types::{ClabKind, ClabLink, ClabMgmt, ClabNode, ClabTopology, ClabTopologyBody};

use crate::config::LabConfig;
use crate::topology::{NodeKind, TopologyGraph};
use crate::utils::OrderedMap;

/// Build the topology document for `graph`
pub fn render_topology(config: &LabConfig, graph: &TopologyGraph) -> ClabTopology {
    let mut kinds = OrderedMap::new();
    for kind in NodeKind::ALL {
        let license = match kind {
            NodeKind::Crpd => config.license.clone(),
            NodeKind::NokiaSrlinux | NodeKind::Linux => None,
        };
        kinds.insert(
            kind.as_str(),
            ClabKind {
                image: config.emulator.images.image_for(kind).to_string(),
                license,
            },
        );
    }

    let mut nodes = OrderedMap::new();
    for (name, node) in graph.nodes.iter() {
        nodes.insert(
            name,
            ClabNode {
                kind: node.kind.as_str().to_string(),
                node_type: node.node_type.clone(),
            },
        );
    }

    let links = graph
        .rendered_links()
        .into_iter()
        .map(|endpoints| ClabLink { endpoints })
        .collect();

    ClabTopology {
        name: config.name.clone(),
        mgmt: ClabMgmt {
            network: config.name.clone(),
            bridge: config.emulator.mgmt_bridge.clone(),
        },
        topology: ClabTopologyBody { kinds, nodes, links },
    }
}
