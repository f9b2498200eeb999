#[cfg(test)]
mod lab_generation_tests {
    use std::cell::RefCell;

    use minilab::config::LabConfig;
    use minilab::inventory::{
        parse_device_list, Device, FetchError, Interface, InventorySource, Role, Vendor,
    };
    use minilab::orchestrator::{generate_lab, write_lab};
    use minilab::startup::ProvisioningAction;
    use minilab::topology::NodeKind;

    /// In-memory inventory that records the names it was asked for
    struct StaticInventory {
        devices: Vec<Device>,
        requested: RefCell<Vec<String>>,
    }

    impl StaticInventory {
        fn new(devices: Vec<Device>) -> Self {
            Self {
                devices,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl InventorySource for StaticInventory {
        fn fetch_devices(&self, names: &[String]) -> Result<Vec<Device>, FetchError> {
            self.requested.borrow_mut().extend(names.iter().cloned());
            Ok(self
                .devices
                .iter()
                .filter(|d| names.contains(&d.name))
                .cloned()
                .collect())
        }
    }

    fn lab_config(hosts: &[&str]) -> LabConfig {
        LabConfig::new("minilab", hosts.iter().map(|h| h.to_string()).collect())
    }

    /// Two Juniper routers cabled back to back
    #[test]
    fn test_two_router_lab() {
        let inventory = StaticInventory::new(vec![
            Device::new("r1", Role::CoreRouter, Vendor::Juniper)
                .with_interface(Interface::new("xe-0/0/1").connected_to("r2", "xe-0/1/1")),
            Device::new("r2", Role::CoreRouter, Vendor::Juniper).with_interface(
                Interface::new("xe-0/1/1")
                    .connected_to("r1", "xe-0/0/1")
                    .with_address("10.0.0.2/31"),
            ),
        ]);

        let output = generate_lab(&lab_config(&["r1", "r2"]), &inventory).unwrap();

        assert_eq!(*inventory.requested.borrow(), vec!["r1".to_string(), "r2".to_string()]);

        let nodes = &output.graph.nodes;
        assert_eq!(nodes.keys().collect::<Vec<_>>(), vec!["r1", "r2"]);
        assert_eq!(nodes.get("r1").unwrap().kind, NodeKind::Crpd);
        assert_eq!(nodes.get("r2").unwrap().kind, NodeKind::Crpd);

        assert_eq!(
            output.graph.rendered_links(),
            vec![["r1:xe-0_0_1".to_string(), "r2:xe-0_1_1".to_string()]]
        );

        assert_eq!(
            output.startup.actions("r2").unwrap(),
            &[
                ProvisioningAction::SetArpIgnore,
                ProvisioningAction::AddAddress {
                    interface: "xe-0_1_1".to_string(),
                    address: "10.0.0.2/31".to_string(),
                },
            ]
        );
        assert_eq!(
            output.startup.actions("r1").unwrap(),
            &[ProvisioningAction::SetArpIgnore]
        );
    }

    /// Router, access switch and server; the server's VLAN rides a lab link
    /// and one router port leads to a device outside the lab
    #[test]
    fn test_mixed_lab_files() {
        let inventory = StaticInventory::new(vec![
            Device::new("cr1", Role::CoreRouter, Vendor::Juniper)
                .with_interface(Interface::new("lo0").with_address("198.51.100.1/32"))
                .with_interface(
                    Interface::new("et-0/0/0")
                        .connected_to("asw1", "1/1/c1/1")
                        .with_address("10.0.0.0/31"),
                )
                .with_interface(
                    Interface::new("et-0/0/1")
                        .connected_to("cr9", "et-0/0/0")
                        .with_address("10.9.0.0/31"),
                ),
            Device::new("asw1", Role::AccessSwitch, Vendor::Juniper)
                .with_interface(Interface::new("1/1/c1/1").connected_to("cr1", "et-0/0/0"))
                .with_interface(Interface::new("1/1/c2/2").connected_to("srv1", "eno1")),
            Device::new("srv1", Role::Server, Vendor::Other("dell".to_string()))
                .with_interface(Interface::new("eno1").connected_to("asw1", "1/1/c2/2"))
                .with_interface(
                    Interface::new("eno1.2017")
                        .with_parent("eno1")
                        .with_address("10.64.16.5/22"),
                ),
        ]);

        let output = generate_lab(&lab_config(&["cr1", "asw1", "srv1"]), &inventory).unwrap();

        assert!(output.startup.actions("asw1").is_none());
        assert!(!output.graph.scoped.contains("cr1", "et-0/0/1"));

        let dir = tempfile::tempdir().unwrap();
        let files = write_lab(&output, dir.path()).unwrap();
        assert!(files.topology.ends_with("minilab.yaml"));

        let script = std::fs::read_to_string(&files.start_script).unwrap();
        let expected = "\
sudo ip netns exec clab-minilab-cr1 sysctl -w net.ipv4.conf.all.arp_ignore=2
sudo ip netns exec clab-minilab-cr1 ip addr add 198.51.100.1/32 dev lo
sudo ip netns exec clab-minilab-cr1 ip addr add 10.0.0.0/31 dev et-0_0_0

sudo ip netns exec clab-minilab-srv1 sysctl -w net.ipv4.conf.all.arp_ignore=2
sudo ip netns exec clab-minilab-srv1 ip link add link eno1 name eno1.2017 type vlan id 2017
sudo ip netns exec clab-minilab-srv1 ip addr add 10.64.16.5/22 dev eno1.2017
sudo ip netns exec clab-minilab-srv1 ip link set dev eno1.2017 up

";
        assert_eq!(script, expected);

        let yaml = std::fs::read_to_string(&files.topology).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["name"].as_str(), Some("minilab"));
        assert_eq!(doc["mgmt"]["network"].as_str(), Some("minilab"));
        assert_eq!(doc["topology"]["nodes"]["asw1"]["type"].as_str(), Some("ixrd2l"));
        assert_eq!(doc["topology"]["nodes"]["srv1"]["kind"].as_str(), Some("linux"));

        let links: Vec<Vec<String>> = doc["topology"]["links"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|link| {
                link["endpoints"]
                    .as_sequence()
                    .unwrap()
                    .iter()
                    .map(|e| e.as_str().unwrap().to_string())
                    .collect()
            })
            .collect();
        assert_eq!(
            links,
            vec![
                vec!["asw1:e1-1".to_string(), "cr1:et-0_0_0".to_string()],
                vec!["asw1:e1-2".to_string(), "srv1:eno1".to_string()],
            ]
        );
    }

    /// Inventory decoded from a NetBox response body
    #[test]
    fn test_lab_from_graphql_response() {
        let body = r#"{
          "data": {
            "device_list": [
              {
                "name": "cr1-eqiad",
                "role": { "slug": "cr" },
                "device_type": { "slug": "mx480", "manufacturer": { "slug": "juniper" } },
                "interfaces": [
                  {
                    "name": "ae1",
                    "parent": null,
                    "ip_addresses": [],
                    "connected_endpoints": [ { "device": { "name": "cr2-eqiad" }, "name": "ae1" } ]
                  },
                  {
                    "name": "ae1.401",
                    "parent": { "name": "ae1" },
                    "ip_addresses": [ { "address": "10.64.40.1/29" } ],
                    "connected_endpoints": null
                  }
                ]
              },
              {
                "name": "cr2-eqiad",
                "role": { "slug": "cr" },
                "device_type": { "slug": "mx480", "manufacturer": { "slug": "juniper" } },
                "interfaces": [
                  {
                    "name": "ae1",
                    "parent": null,
                    "ip_addresses": [],
                    "connected_endpoints": [ { "device": { "name": "cr1-eqiad" }, "name": "ae1" } ]
                  }
                ]
              },
              {
                "name": "pfw1-eqiad",
                "role": { "slug": "pfw" },
                "device_type": { "slug": "srx1500", "manufacturer": { "slug": "juniper" } },
                "interfaces": []
              }
            ]
          }
        }"#;

        let inventory = StaticInventory::new(parse_device_list(body).unwrap());
        let output = generate_lab(
            &lab_config(&["cr1-eqiad", "cr2-eqiad", "pfw1-eqiad"]),
            &inventory,
        )
        .unwrap();

        // Unknown role: no node, but still gets startup commands
        assert!(!output.graph.nodes.contains_key("pfw1-eqiad"));
        assert_eq!(output.graph.links.len(), 1);
        assert_eq!(
            output.startup.actions("cr1-eqiad").unwrap(),
            &[
                ProvisioningAction::SetArpIgnore,
                ProvisioningAction::CreateVlanSubinterface {
                    parent: "ae1".to_string(),
                    child: "ae1.401".to_string(),
                    vlan_id: 401,
                },
                ProvisioningAction::AddAddress {
                    interface: "ae1.401".to_string(),
                    address: "10.64.40.1/29".to_string(),
                },
                ProvisioningAction::SetLinkUp {
                    interface: "ae1.401".to_string()
                },
            ]
        );
    }
}
