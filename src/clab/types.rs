//! Containerlab topology type definitions.
//!
//! Field order in these structs is the key order of the generated YAML.

use crate::utils::OrderedMap;
use serde::Serialize;

/// Root of a containerlab topology file
#[derive(Serialize, Debug)]
pub struct ClabTopology {
    /// Lab name, also the prefix of every node's namespace
    pub name: String,
    /// Management network settings
    pub mgmt: ClabMgmt,
    pub topology: ClabTopologyBody,
}

/// Management network for the lab containers
#[derive(Serialize, Debug)]
pub struct ClabMgmt {
    /// Docker network name
    pub network: String,
    /// Linux bridge backing the network
    pub bridge: String,
}

#[derive(Serialize, Debug)]
pub struct ClabTopologyBody {
    /// Per-kind defaults, keyed by kind name
    pub kinds: OrderedMap<ClabKind>,
    /// Nodes keyed by device name
    pub nodes: OrderedMap<ClabNode>,
    pub links: Vec<ClabLink>,
}

/// Defaults shared by all nodes of one kind
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClabKind {
    /// Container image
    pub image: String,
    /// License file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClabNode {
    pub kind: String,
    /// Hardware type (SR Linux only)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

/// Point-to-point link, each endpoint as `node:interface`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClabLink {
    pub endpoints: [String; 2],
}
