//! Canonical link identity.
//!
//! Both ends of a cable appear in the inventory, once from each side. A
//! `CanonicalLink` orders the endpoints so the two sightings compare equal
//! and collapse in a set.

use super::naming::translate;
use crate::inventory::{Endpoint, Vendor};
use log::warn;
use std::collections::HashMap;
use std::fmt;

/// One physical connection, endpoints ordered by (device, interface)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalLink {
    pub a: Endpoint,
    pub b: Endpoint,
}

impl CanonicalLink {
    /// Build the canonical form of the link between two endpoints.
    ///
    /// The endpoint on the lexicographically smaller device comes first. On
    /// a self-link the interface name decides, so argument order never
    /// matters.
    pub fn new(a_dev: &str, a_int: &str, b_dev: &str, b_int: &str) -> Self {
        let a = Endpoint::new(a_dev, a_int);
        let b = Endpoint::new(b_dev, b_int);
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Render both endpoints as `device:interface` with lab interface names
    pub fn render(&self, vendors: &HashMap<String, Vendor>) -> [String; 2] {
        [render_endpoint(&self.a, vendors), render_endpoint(&self.b, vendors)]
    }
}

fn render_endpoint(endpoint: &Endpoint, vendors: &HashMap<String, Vendor>) -> String {
    let interface = match vendors.get(&endpoint.device) {
        Some(vendor) => translate(&endpoint.interface, vendor),
        None => {
            warn!(
                "No vendor known for {}, keeping interface name {} as-is",
                endpoint.device, endpoint.interface
            );
            endpoint.interface.clone()
        }
    };
    format!("{}:{}", endpoint.device, interface)
}

impl fmt::Display for CanonicalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} <-> {}:{}",
            self.a.device, self.a.interface, self.b.device, self.b.interface
        )
    }
}
