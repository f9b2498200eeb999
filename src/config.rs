//! Lab configuration.
//!
//! `LabConfig` carries everything a generation run needs and is passed
//! explicitly into each stage. Emulator defaults (images, management
//! bridge) can be overridden from a YAML settings file.

use crate::topology::NodeKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NETBOX_HOST: &str = "netbox.wikimedia.org";
pub const DEFAULT_PROJECT_NAME: &str = "wmf-minilab";
pub const DEFAULT_MGMT_BRIDGE: &str = "clab";

/// Container images per node kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindImages {
    pub nokia_srlinux: String,
    pub crpd: String,
    pub linux: String,
}

impl Default for KindImages {
    fn default() -> Self {
        Self {
            nokia_srlinux: "ghcr.io/nokia/srlinux:24.7.2".to_string(),
            crpd: "crpd:latest".to_string(),
            linux: "debian:clab".to_string(),
        }
    }
}

impl KindImages {
    pub fn image_for(&self, kind: NodeKind) -> &str {
        match kind {
            NodeKind::NokiaSrlinux => &self.nokia_srlinux,
            NodeKind::Crpd => &self.crpd,
            NodeKind::Linux => &self.linux,
        }
    }
}

/// Emulator settings file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorSettings {
    pub mgmt_bridge: String,
    pub images: KindImages,
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            mgmt_bridge: DEFAULT_MGMT_BRIDGE.to_string(),
            images: KindImages::default(),
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    /// Lab name; prefixes node namespaces and names the output file
    pub name: String,
    /// Devices to include in the lab
    pub devices: Vec<String>,
    /// cRPD license file, passed through to the topology
    pub license: Option<String>,
    pub emulator: EmulatorSettings,
}

impl LabConfig {
    pub fn new(name: impl Into<String>, devices: Vec<String>) -> Self {
        Self {
            name: name.into(),
            devices,
            license: None,
            emulator: EmulatorSettings::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidName("name cannot be empty".to_string()));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidName(format!(
                "'{}' contains whitespace",
                self.name
            )));
        }

        if self.devices.is_empty() {
            return Err(ValidationError::InvalidDevices(
                "at least one device is required".to_string(),
            ));
        }
        for device in &self.devices {
            if device.is_empty() || device.chars().any(char::is_whitespace) {
                return Err(ValidationError::InvalidDevices(format!(
                    "invalid device name '{}'",
                    device
                )));
            }
        }

        if self.emulator.mgmt_bridge.is_empty() {
            return Err(ValidationError::InvalidEmulator(
                "mgmt_bridge cannot be empty".to_string(),
            ));
        }
        for kind in NodeKind::ALL {
            if self.emulator.images.image_for(kind).is_empty() {
                return Err(ValidationError::InvalidEmulator(format!(
                    "image for {} cannot be empty",
                    kind.as_str()
                )));
            }
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid lab name: {0}")]
    InvalidName(String),
    #[error("Invalid device list: {0}")]
    InvalidDevices(String),
    #[error("Invalid emulator settings: {0}")]
    InvalidEmulator(String),
}
