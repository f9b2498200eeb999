//! Inventory type definitions.
//!
//! Devices and interfaces as fetched from NetBox, reduced to the facts the
//! topology builder and startup synthesizer need. Role and vendor are closed
//! enumerations so that every classification is a total match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved Junos loopback interface name
pub const LOOPBACK_INTERFACE: &str = "lo0";

/// Device role, parsed from the NetBox role slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Linux server (`server`)
    Server,
    /// Access switch (`asw`)
    AccessSwitch,
    /// Core router (`cr`)
    CoreRouter,
    /// Any other role; carries the original slug for diagnostics
    Other(String),
}

impl Role {
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "server" => Role::Server,
            "asw" => Role::AccessSwitch,
            "cr" => Role::CoreRouter,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_slug(&self) -> &str {
        match self {
            Role::Server => "server",
            Role::AccessSwitch => "asw",
            Role::CoreRouter => "cr",
            Role::Other(slug) => slug,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// Device manufacturer, parsed from the NetBox manufacturer slug
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    Juniper,
    Nokia,
    Other(String),
}

impl Vendor {
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "juniper" => Vendor::Juniper,
            "nokia" => Vendor::Nokia,
            other => Vendor::Other(other.to_string()),
        }
    }

    pub fn as_slug(&self) -> &str {
        match self {
            Vendor::Juniper => "juniper",
            Vendor::Nokia => "nokia",
            Vendor::Other(slug) => slug,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// Far end of a cable: a named interface on a named device
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoint {
    pub device: String,
    pub interface: String,
}

impl Endpoint {
    pub fn new(device: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            interface: interface.into(),
        }
    }
}

/// A single device interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Vendor-native interface name
    pub name: String,
    /// Parent interface name, set for VLAN sub-interfaces
    pub parent: Option<String>,
    /// Assigned addresses in CIDR notation, passed through untouched
    pub addresses: Vec<String>,
    /// Peer interface, if the interface is cabled to another interface
    pub connected: Option<Endpoint>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            addresses: Vec::new(),
            connected: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.addresses.push(address.into());
        self
    }

    pub fn connected_to(mut self, device: impl Into<String>, interface: impl Into<String>) -> Self {
        self.connected = Some(Endpoint::new(device, interface));
        self
    }

    pub fn is_loopback(&self) -> bool {
        self.name == LOOPBACK_INTERFACE
    }
}

/// A device record from the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub role: Role,
    /// Manufacturer as recorded in the inventory
    pub vendor: Vendor,
    pub interfaces: Vec<Interface>,
}

impl Device {
    pub fn new(name: impl Into<String>, role: Role, vendor: Vendor) -> Self {
        Self {
            name: name.into(),
            role,
            vendor,
            interfaces: Vec::new(),
        }
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Vendor used for interface naming in the lab.
    ///
    /// Access switches always run SR Linux in the lab, so the manufacturer
    /// recorded in the inventory is ignored for them.
    pub fn effective_vendor(&self) -> Vendor {
        match self.role {
            Role::AccessSwitch => Vendor::Nokia,
            Role::Server | Role::CoreRouter | Role::Other(_) => self.vendor.clone(),
        }
    }
}
