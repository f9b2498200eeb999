//! Network topology module.
//!
//! This module contains the topology graph builder, canonical link identity
//! and the interface naming rules for the emulated node kinds.

pub mod builder;
pub mod link;
pub mod naming;
pub mod types;

// Re-export key types and functions for easier access
pub use builder::{build, ScopedInterfaces, TopologyGraph};
pub use link::CanonicalLink;
pub use naming::translate;
pub use types::{EmulatedNode, NodeKind, ACCESS_SWITCH_TYPE};
