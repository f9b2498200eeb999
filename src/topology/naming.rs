//! Interface name translation.
//!
//! Containerlab requires Linux-safe interface names for cRPD nodes and
//! `e<slot>-<port>` names for SR Linux nodes. Translation is not idempotent
//! for Juniper or Nokia, so each raw name must be translated exactly once,
//! at the point where it is rendered.

use crate::inventory::Vendor;

/// Translate a vendor-native interface name to the name used in the lab.
///
/// # Examples
/// ```
/// use minilab::inventory::Vendor;
/// use minilab::topology::naming::translate;
///
/// assert_eq!(translate("xe-0/0/1", &Vendor::Juniper), "xe-0_0_1");
/// assert_eq!(translate("1/1/c1/1", &Vendor::Nokia), "e1-1");
/// assert_eq!(translate("eno1", &Vendor::Other("dell".into())), "eno1");
/// ```
pub fn translate(raw_name: &str, vendor: &Vendor) -> String {
    match vendor {
        Vendor::Juniper => juniper_name(raw_name),
        Vendor::Nokia => nokia_name(raw_name),
        Vendor::Other(_) => raw_name.to_string(),
    }
}

/// Junos names contain `/` and `:`, neither of which Linux accepts
fn juniper_name(raw_name: &str) -> String {
    raw_name.replace(['/', ':'], "_")
}

/// SR Linux names only carry the port number, which is the last path segment.
/// Logical interfaces are not covered by this rule.
fn nokia_name(raw_name: &str) -> String {
    let port_num = raw_name.rsplit('/').next().unwrap_or(raw_name);
    format!("e1-{}", port_num)
}
