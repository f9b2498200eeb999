//! Device inventory module.
//!
//! This module contains the device and interface model consumed by the
//! topology builder and startup synthesizer, and the client that fetches
//! it from NetBox.

pub mod client;
pub mod types;
pub mod wire;

// Re-export key types and functions for easier access
pub use client::{parse_device_list, FetchError, InventorySource, NetboxClient};
pub use types::{Device, Endpoint, Interface, Role, Vendor, LOOPBACK_INTERFACE};
