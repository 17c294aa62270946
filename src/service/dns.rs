use std::collections::HashMap;
use std::net::Ipv4Addr;

use super::lookup::SENTINEL;

/// Addresses of every resolved hostname, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HostToIps {
    entries: Vec<(String, Vec<Ipv4Addr>)>,
    index: HashMap<String, usize>,
}

impl HostToIps {
    /// Record the addresses of `host`, replacing an earlier answer for it.
    pub fn record(&mut self, host: &str, ips: Vec<Ipv4Addr>) {
        match self.index.get(host) {
            Some(&pos) => self.entries[pos].1 = ips,
            None => {
                self.index.insert(host.to_string(), self.entries.len());
                self.entries.push((host.to_string(), ips));
            }
        }
    }

    pub fn get(&self, host: &str) -> Option<&[Ipv4Addr]> {
        let &pos = self.index.get(host)?;
        Some(&self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Ipv4Addr])> {
        self.entries
            .iter()
            .map(|(host, ips)| (host.as_str(), ips.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hostnames grouped by the address they resolved to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IpToHosts {
    hosts: HashMap<Ipv4Addr, Vec<String>>,
}

impl IpToHosts {
    /// Add `hostname` under `ip` unless it is already listed there.
    pub fn add(&mut self, ip: Ipv4Addr, hostname: &str) {
        let hosts = self.hosts.entry(ip).or_insert_with(Vec::new);
        if !hosts.iter().any(|known| known == hostname) {
            hosts.push(hostname.to_string());
        }
    }

    pub fn get(&self, ip: Ipv4Addr) -> Option<&[String]> {
        self.hosts.get(&ip).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ipv4Addr, &[String])> {
        self.hosts.iter().map(|(ip, hosts)| (*ip, hosts.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Re-key resolved hostnames by address.
pub fn invert(resolved: &HostToIps) -> IpToHosts {
    let mut by_ip = IpToHosts::default();
    for (host, ips) in resolved.iter() {
        for &ip in ips {
            if ip == SENTINEL {
                debug!("'{}' resolved to the sentinel address, skipping", host);
                continue;
            }
            by_ip.add(ip, host);
        }
    }
    by_ip
}
