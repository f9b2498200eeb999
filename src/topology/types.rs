//! Topology type definitions.
//!
//! This file contains the emulated node kinds supported by the generator and
//! the mapping from inventory roles onto them.

use crate::inventory::{Device, Role};
use serde::{Deserialize, Serialize};

/// SR Linux hardware type emulated for access switches
pub const ACCESS_SWITCH_TYPE: &str = "ixrd2l";

/// Containerlab node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Nokia SR Linux, configures itself from its own startup config
    NokiaSrlinux,
    /// Juniper cRPD container, addressed from the startup script
    Crpd,
    /// Plain Linux container
    Linux,
}

impl NodeKind {
    /// All kinds, in the order they are declared in the topology document
    pub const ALL: [NodeKind; 3] = [NodeKind::NokiaSrlinux, NodeKind::Crpd, NodeKind::Linux];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::NokiaSrlinux => "nokia_srlinux",
            NodeKind::Crpd => "crpd",
            NodeKind::Linux => "linux",
        }
    }

    /// Kind used to emulate a device with the given role, if any
    pub fn for_role(role: &Role) -> Option<Self> {
        match role {
            Role::Server => Some(NodeKind::Linux),
            Role::AccessSwitch => Some(NodeKind::NokiaSrlinux),
            Role::CoreRouter => Some(NodeKind::Crpd),
            Role::Other(_) => None,
        }
    }

    /// Whether the node needs addressing from the startup script
    pub fn needs_provisioning(&self) -> bool {
        match self {
            NodeKind::NokiaSrlinux => false,
            NodeKind::Crpd | NodeKind::Linux => true,
        }
    }
}

/// A device as it appears in the lab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatedNode {
    pub kind: NodeKind,
    /// Hardware sub-type, only set for SR Linux nodes
    pub node_type: Option<String>,
}

impl EmulatedNode {
    /// Emulated node for `device`, or `None` when its role is not emulated
    pub fn for_device(device: &Device) -> Option<Self> {
        let kind = NodeKind::for_role(&device.role)?;
        let node_type = match kind {
            NodeKind::NokiaSrlinux => Some(ACCESS_SWITCH_TYPE.to_string()),
            NodeKind::Crpd | NodeKind::Linux => None,
        };
        Some(Self { kind, node_type })
    }
}
