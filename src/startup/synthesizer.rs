//! Startup configuration synthesis.
//!
//! cRPD and Linux nodes come up without addresses; this walks each device's
//! interfaces and produces the commands that recreate its addressing inside
//! the node's namespace, including VLAN sub-interfaces on lab links.

use super::actions::{namespace, ProvisioningAction};
use crate::inventory::{Device, Interface, Vendor};
use crate::topology::{translate, NodeKind, ScopedInterfaces};
use crate::utils::OrderedMap;
use log::{debug, warn};
use std::collections::HashSet;

/// Interface name of the loopback device inside a Linux namespace
const LINUX_LOOPBACK: &str = "lo";

/// Ordered provisioning actions per device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupPlan {
    pub devices: OrderedMap<Vec<ProvisioningAction>>,
}

impl StartupPlan {
    pub fn actions(&self, device: &str) -> Option<&[ProvisioningAction]> {
        self.devices.get(device).map(Vec::as_slice)
    }

    /// Render as a shell script, one namespaced command per line and a blank
    /// line after each device
    pub fn render_script(&self, project: &str) -> String {
        let mut script = String::new();
        for (device, actions) in self.devices.iter() {
            let netns = namespace(project, device);
            for action in actions {
                script.push_str(&format!("sudo ip netns exec {} {}\n", netns, action));
            }
            script.push('\n');
        }
        script
    }
}

/// How an addressed interface is brought up in the lab
enum InterfaceRole<'a> {
    /// Lab link or loopback: addresses go straight onto the interface
    Direct,
    /// Sub-interface of a lab link that has to be created first
    VlanChild { parent: &'a str },
    /// Not part of the lab
    Ignored,
}

fn classify<'a>(device: &str, interface: &'a Interface, scoped: &ScopedInterfaces) -> InterfaceRole<'a> {
    if scoped.contains(device, &interface.name) || interface.is_loopback() {
        return InterfaceRole::Direct;
    }
    match interface.parent.as_deref() {
        Some(parent) if scoped.contains(device, parent) => InterfaceRole::VlanChild { parent },
        _ => InterfaceRole::Ignored,
    }
}

/// Lab name for an interface that receives addresses directly
fn direct_name(interface: &Interface, vendor: &Vendor) -> String {
    if interface.is_loopback() {
        LINUX_LOOPBACK.to_string()
    } else {
        translate(&interface.name, vendor)
    }
}

/// VLAN id is the numeric suffix after the last `.`
fn vlan_id(name: &str) -> Option<u16> {
    let (_, tag) = name.rsplit_once('.')?;
    tag.parse().ok()
}

/// Provisioning actions for one device, starting with the ARP setting
pub fn device_actions(device: &Device, scoped: &ScopedInterfaces) -> Vec<ProvisioningAction> {
    let vendor = device.effective_vendor();
    let mut actions = vec![ProvisioningAction::SetArpIgnore];

    for interface in &device.interfaces {
        if interface.addresses.is_empty() {
            continue;
        }

        match classify(&device.name, interface, scoped) {
            InterfaceRole::Direct => {
                let name = direct_name(interface, &vendor);
                actions.extend(interface.addresses.iter().map(|address| {
                    ProvisioningAction::AddAddress {
                        interface: name.clone(),
                        address: address.clone(),
                    }
                }));
            }
            InterfaceRole::VlanChild { parent } => {
                // Sub-interfaces always follow the Junos naming rule
                let child = translate(&interface.name, &Vendor::Juniper);
                let Some(vlan_id) = vlan_id(&child) else {
                    warn!(
                        "{}: cannot read a VLAN id from sub-interface {}, skipping it",
                        device.name, interface.name
                    );
                    continue;
                };
                actions.push(ProvisioningAction::CreateVlanSubinterface {
                    parent: translate(parent, &Vendor::Juniper),
                    child: child.clone(),
                    vlan_id,
                });
                actions.extend(interface.addresses.iter().map(|address| {
                    ProvisioningAction::AddAddress {
                        interface: child.clone(),
                        address: address.clone(),
                    }
                }));
                actions.push(ProvisioningAction::SetLinkUp { interface: child });
            }
            InterfaceRole::Ignored => {
                debug!(
                    "{}: {} has addresses but is not part of the lab",
                    device.name, interface.name
                );
            }
        }
    }

    actions
}

/// Build the startup plan for every requested device whose node kind needs it.
///
/// Access switches are skipped: SR Linux configures itself.
pub fn synthesize(
    devices: &[Device],
    requested_names: &HashSet<String>,
    scoped: &ScopedInterfaces,
) -> StartupPlan {
    let mut plan = StartupPlan::default();
    for device in devices {
        if !requested_names.contains(&device.name) {
            continue;
        }
        let exempt = NodeKind::for_role(&device.role).map_or(false, |kind| !kind.needs_provisioning());
        if exempt {
            debug!("{} configures itself, no startup commands", device.name);
            continue;
        }
        plan.devices.insert(device.name.clone(), device_actions(device, scoped));
    }
    plan
}
