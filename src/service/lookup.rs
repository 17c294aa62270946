use futures::future::BoxFuture;
use std::borrow::Cow;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::time::Duration;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::TokioAsyncResolver;

use super::error::{Error, Result};

/// Address reported for a hostname that does not exist.
///
/// Downstream consumers of the notice lines rely on `<hostname>,0.0.0.0`
/// meaning "no such name". It is never used as a real address.
pub const SENTINEL: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

const UNKNOWN_ERROR: &str = "unknown error";

/// Raw failure of a single forward lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Authoritative answer that the name does not exist.
    NotFound,
    /// Anything else: timeout, unreachable server, malformed name.
    Failed(String),
}

pub type Lookup = BoxFuture<'static, std::result::Result<Vec<IpAddr>, LookupFailure>>;

/// Forward lookup of one hostname.
pub trait Resolve: Send + Sync {
    fn lookup(&self, host: &str) -> Lookup;
}

/// Terminal state of one hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Resolved(Vec<Ipv4Addr>),
    NotFound,
    LookupError(String),
}

impl Outcome {
    /// Value printed after the hostname on the notice channel, `None` for
    /// resolved hosts which are not reported there.
    pub fn notice_value(&self) -> Option<Cow<'_, str>> {
        match self {
            Outcome::Resolved(_) => None,
            Outcome::NotFound => Some(Cow::Owned(SENTINEL.to_string())),
            Outcome::LookupError(message) => Some(Cow::Borrowed(message)),
        }
    }
}

/// Turn a raw lookup result into an [`Outcome`].
///
/// Keeps IPv4 addresses (including IPv4-mapped IPv6 ones) in the order the
/// resolver returned them, dropping repeats.
pub fn classify(result: std::result::Result<Vec<IpAddr>, LookupFailure>) -> Outcome {
    match result {
        Ok(addrs) => {
            let mut ips = Vec::with_capacity(addrs.len());
            for addr in addrs {
                let ip = match addr {
                    IpAddr::V4(ip) => ip,
                    IpAddr::V6(ip) => match ip.to_ipv4_mapped() {
                        Some(ip) => ip,
                        None => continue,
                    },
                };
                if !ips.contains(&ip) {
                    ips.push(ip);
                }
            }
            Outcome::Resolved(ips)
        }
        Err(LookupFailure::NotFound) => Outcome::NotFound,
        Err(LookupFailure::Failed(message)) => Outcome::LookupError(single_line(&message)),
    }
}

fn single_line(message: &str) -> String {
    let line = message.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.is_empty() {
        UNKNOWN_ERROR.into()
    } else {
        line
    }
}

/// Upstream servers used by [`DnsResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nameservers {
    System,
    Google,
    Cloudflare,
    Quad9,
}

impl FromStr for Nameservers {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Nameservers::System),
            "google" => Ok(Nameservers::Google),
            "cloudflare" => Ok(Nameservers::Cloudflare),
            "quad9" => Ok(Nameservers::Quad9),
            other => Err(Error::Config(format!("unknown nameservers '{}'", other))),
        }
    }
}

/// [`Resolve`] backed by trust-dns.
#[derive(Clone)]
pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new(nameservers: Nameservers, timeout: Duration) -> Result<Self> {
        let (config, mut opts) = match nameservers {
            Nameservers::System => trust_dns_resolver::system_conf::read_system_conf()?,
            Nameservers::Google => (ResolverConfig::google(), ResolverOpts::default()),
            Nameservers::Cloudflare => (ResolverConfig::cloudflare(), ResolverOpts::default()),
            Nameservers::Quad9 => (ResolverConfig::quad9(), ResolverOpts::default()),
        };
        opts.timeout = timeout;
        opts.attempts = 1;
        debug!("using {:?} nameservers with {:?} timeout", nameservers, timeout);
        let resolver = TokioAsyncResolver::tokio(config, opts)?;
        Ok(Self { resolver })
    }
}

impl Resolve for DnsResolver {
    fn lookup(&self, host: &str) -> Lookup {
        let resolver = self.resolver.clone();
        let host = host.to_string();
        Box::pin(async move {
            resolver
                .lookup_ip(host.as_str())
                .await
                .map(|lookup| lookup.iter().collect())
                .map_err(|err| failure(&err))
        })
    }
}

/// Sort a resolver error into "no such name" or anything else.
///
/// NXDOMAIN and an empty NOERROR answer both mean the name has no
/// addresses. Other response codes (SERVFAIL, REFUSED, ...) are failures.
fn failure(err: &ResolveError) -> LookupFailure {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if matches!(response_code, ResponseCode::NXDomain | ResponseCode::NoError) =>
        {
            LookupFailure::NotFound
        }
        _ => LookupFailure::Failed(err.to_string()),
    }
}
