use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::net::Ipv4Addr;

use super::dns::IpToHosts;
use super::error::Result;

#[derive(Serialize)]
struct Entry<'a> {
    ip: Ipv4Addr,
    hostnames: &'a [String],
}

/// Render the address groups as a JSON array sorted by address.
pub fn render(ips: &IpToHosts) -> Result<String> {
    let mut entries: Vec<Entry> = ips
        .iter()
        .map(|(ip, hostnames)| Entry { ip, hostnames })
        .collect();
    entries.sort_by_key(|entry| entry.ip);

    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    entries.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
