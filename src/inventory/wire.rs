//! NetBox GraphQL response shapes.
//!
//! These mirror the fields selected by the device query and are converted
//! into the inventory types straight after decoding.

use super::types::{Device, Endpoint, Interface, Role, Vendor};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DeviceListData {
    pub device_list: Vec<WireDevice>,
}

#[derive(Debug, Deserialize)]
pub struct Slug {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct WireDeviceType {
    pub manufacturer: Slug,
}

#[derive(Debug, Deserialize)]
pub struct WireDevice {
    pub name: String,
    pub role: Slug,
    pub device_type: WireDeviceType,
    #[serde(default)]
    pub interfaces: Vec<WireInterface>,
}

#[derive(Debug, Deserialize)]
pub struct WireAddress {
    pub address: String,
}

/// Entry of `connected_endpoints`.
///
/// Non-interface endpoints (circuit terminations, console ports) do not
/// match the `InterfaceType` fragment and arrive as empty objects.
#[derive(Debug, Default, Deserialize)]
pub struct WireEndpoint {
    pub device: Option<Named>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireInterface {
    pub name: String,
    pub parent: Option<Named>,
    #[serde(default)]
    pub ip_addresses: Vec<WireAddress>,
    #[serde(default)]
    pub connected_endpoints: Option<Vec<WireEndpoint>>,
}

impl WireEndpoint {
    fn into_endpoint(self) -> Option<Endpoint> {
        let device = self.device?.name;
        let interface = self.name?;
        if device.is_empty() {
            return None;
        }
        Some(Endpoint { device, interface })
    }
}

impl From<WireInterface> for Interface {
    fn from(wire: WireInterface) -> Self {
        // Only the first connected endpoint is considered
        let connected = wire
            .connected_endpoints
            .and_then(|endpoints| endpoints.into_iter().next())
            .and_then(WireEndpoint::into_endpoint);

        Interface {
            name: wire.name,
            parent: wire.parent.map(|p| p.name),
            addresses: wire.ip_addresses.into_iter().map(|a| a.address).collect(),
            connected,
        }
    }
}

impl From<WireDevice> for Device {
    fn from(wire: WireDevice) -> Self {
        Device {
            name: wire.name,
            role: Role::from_slug(&wire.role.slug),
            vendor: Vendor::from_slug(&wire.device_type.manufacturer.slug),
            interfaces: wire.interfaces.into_iter().map(Interface::from).collect(),
        }
    }
}
