//! Node startup configuration.
//!
//! Turns the inventory's addressing into the ordered commands that bring up
//! each emulated node's interfaces.

pub mod actions;
pub mod synthesizer;

pub use actions::{namespace, ProvisioningAction};
pub use synthesizer::{device_actions, synthesize, StartupPlan};
