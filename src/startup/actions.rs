//! Provisioning action definitions.
//!
//! Each action is one command run inside a node's network namespace.

use std::fmt;

/// One provisioning step for a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningAction {
    /// Answer ARP only for addresses configured on the receiving interface
    SetArpIgnore,
    AddAddress { interface: String, address: String },
    CreateVlanSubinterface { parent: String, child: String, vlan_id: u16 },
    SetLinkUp { interface: String },
}

impl ProvisioningAction {
    /// The command, without the namespace prefix
    pub fn command(&self) -> String {
        match self {
            ProvisioningAction::SetArpIgnore => {
                "sysctl -w net.ipv4.conf.all.arp_ignore=2".to_string()
            }
            ProvisioningAction::AddAddress { interface, address } => {
                format!("ip addr add {} dev {}", address, interface)
            }
            ProvisioningAction::CreateVlanSubinterface { parent, child, vlan_id } => {
                format!("ip link add link {} name {} type vlan id {}", parent, child, vlan_id)
            }
            ProvisioningAction::SetLinkUp { interface } => {
                format!("ip link set dev {} up", interface)
            }
        }
    }
}

impl fmt::Display for ProvisioningAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command())
    }
}

/// Network namespace containerlab creates for `node` in lab `project`
pub fn namespace(project: &str, node: &str) -> String {
    format!("clab-{}-{}", project, node)
}
