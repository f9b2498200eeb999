//! NetBox inventory client.
//!
//! Fetches the requested devices with a single blocking GraphQL query.
//! Every failure is returned to the caller; nothing is retried.

use super::types::Device;
use super::wire::{DeviceListData, GraphQlResponse};
use log::{debug, info};
use serde_json::json;
use std::time::Duration;

const DEVICE_QUERY: &str = r#"
query clab_devices($devices: [String!]) {
  device_list(filters: {name: { in_list: $devices }}) {
    name
    role { slug }
    device_type {
      slug
      manufacturer { slug }
    }
    interfaces {
      name
      type
      parent { name }
      ip_addresses { address }
      connected_endpoints {
        ... on InterfaceType {
          device { name }
          name
        }
      }
    }
  }
}
"#;

/// Errors raised while fetching the inventory
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Inventory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Inventory server returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed inventory response: {0}")]
    Malformed(String),

    #[error("Inventory query failed: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },
}

/// Source of device records.
///
/// Implementations return the devices whose names are in `names`. Devices
/// unknown to the source are simply absent from the result.
pub trait InventorySource {
    fn fetch_devices(&self, names: &[String]) -> Result<Vec<Device>, FetchError>;
}

/// GraphQL client for a NetBox server
pub struct NetboxClient {
    url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl NetboxClient {
    const TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a client for `host`, e.g. `netbox.example.org`
    pub fn new(host: &str, token: Option<String>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()?;

        Ok(Self {
            url: graphql_url(host),
            token,
            client,
        })
    }
}

fn graphql_url(host: &str) -> String {
    format!("https://{}/graphql/", host.trim_end_matches('/'))
}

impl InventorySource for NetboxClient {
    fn fetch_devices(&self, names: &[String]) -> Result<Vec<Device>, FetchError> {
        info!("Querying {} for {} devices", self.url, names.len());

        let body = json!({
            "query": DEVICE_QUERY,
            "variables": { "devices": names },
        });

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Token {}", token));
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text()?;
        let devices = parse_device_list(&text)?;
        debug!("Inventory returned {} devices", devices.len());
        Ok(devices)
    }
}

/// Decode a device list GraphQL response body
pub fn parse_device_list(body: &str) -> Result<Vec<Device>, FetchError> {
    let response: GraphQlResponse<DeviceListData> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    if !response.errors.is_empty() {
        return Err(FetchError::GraphQl {
            messages: response.errors.into_iter().map(|e| e.message).collect(),
        });
    }

    let data = response
        .data
        .ok_or_else(|| FetchError::Malformed("response has no data".to_string()))?;

    Ok(data.device_list.into_iter().map(Device::from).collect())
}
