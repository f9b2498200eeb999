//! # Minilab - Containerlab topology generator for NetBox-modelled networks
//!
//! This library builds a containerlab lab that mirrors part of a production
//! network, using NetBox as the source of devices, cabling and addressing.
//!
//! ## Overview
//!
//! Given a list of device names, Minilab fetches their interfaces from NetBox
//! and produces two files:
//!
//! - `<name>.yaml`: the containerlab topology (kinds, nodes, links)
//! - `start.sh`: commands that add each node's addresses inside its network
//!   namespace once the lab is deployed
//!
//! ## Architecture
//!
//! - `inventory`: device/interface model and the NetBox GraphQL client
//! - `topology`: interface naming, canonical links and the graph builder
//! - `startup`: provisioning actions and the startup synthesizer
//! - `clab`: containerlab document types and rendering
//! - `config`: lab configuration and emulator settings
//! - `config_loader`: emulator settings file loading
//! - `orchestrator`: one generation run from fetch to written files
//! - `utils`: ordered maps and output helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use minilab::config::LabConfig;
//! use minilab::inventory::NetboxClient;
//! use minilab::orchestrator;
//! use std::path::Path;
//!
//! let config = LabConfig::new("wmf-minilab", vec!["cr1-eqiad".into(), "cr2-eqiad".into()]);
//! let client = NetboxClient::new("netbox.example.org", Some("token".into()))?;
//!
//! let output = orchestrator::generate_lab(&config, &client)?;
//! orchestrator::write_lab(&output, Path::new("output"))?;
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Interface Naming
//!
//! | Kind            | Inventory name | Lab name     |
//! |-----------------|----------------|--------------|
//! | `crpd` (Junos)  | `xe-0/0/1`     | `xe-0_0_1`   |
//! | `nokia_srlinux` | `1/1/c1/1`     | `e1-1`       |
//! | `linux`         | `eno1`         | `eno1`       |
//!
//! ## Error Handling
//!
//! Inventory fetch failures abort the run before anything is written.
//! Devices, links and addresses that fall outside the lab are left out and
//! logged rather than treated as errors.

pub mod clab;
pub mod config;
pub mod config_loader;
pub mod inventory;
pub mod orchestrator;
pub mod startup;
pub mod topology;
pub mod utils;
