use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

use super::dns::{invert, HostToIps, IpToHosts};
use super::error::{Error, Result};
use super::lookup::{classify, Outcome, Resolve};
use super::report::Report;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub resolved: usize,
    pub not_found: usize,
    pub failed: usize,
}

/// Result of one completed batch.
#[derive(Debug)]
pub struct Resolution {
    pub hosts: HostToIps,
    pub ips: IpToHosts,
    pub summary: Summary,
}

/// Look up every host with at most `workers` lookups in flight.
///
/// Outcomes are reported in input order whatever order the lookups finish
/// in. A failed lookup never aborts the batch; only `cancel` does, in which
/// case in-flight lookups are dropped and [`Error::Cancelled`] is returned.
pub async fn resolve_all<R, P>(
    resolver: &R,
    hosts: &[String],
    workers: usize,
    report: &mut P,
    cancel: &CancellationToken,
) -> Result<Resolution>
where
    R: Resolve + ?Sized,
    P: Report + ?Sized,
{
    let total = hosts.len();
    let workers = workers.max(1);
    info!("resolving {} hosts with {} workers", total, workers);

    let lookups = stream::iter(hosts)
        .map(|host| {
            let pending = resolver.lookup(host);
            async move { (host, classify(pending.await)) }
        })
        .buffered(workers);
    tokio::pin!(lookups);

    let mut resolved = HostToIps::default();
    let mut summary = Summary::default();
    let mut completed = 0;
    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("cancelled with {} of {} hosts done", completed, total);
                return Err(Error::Cancelled { completed, total });
            }
            next = lookups.next() => next,
        };
        let (host, outcome) = match next {
            Some(item) => item,
            None => break,
        };
        report.notice(host, &outcome)?;
        completed += 1;
        match outcome {
            Outcome::Resolved(ips) => {
                summary.resolved += 1;
                resolved.record(host, ips);
            }
            Outcome::NotFound => summary.not_found += 1,
            Outcome::LookupError(_) => summary.failed += 1,
        }
    }

    let ips = invert(&resolved);
    info!(
        "{} resolved, {} not found, {} failed, {} distinct addresses",
        summary.resolved,
        summary.not_found,
        summary.failed,
        ips.len()
    );
    Ok(Resolution {
        hosts: resolved,
        ips,
        summary,
    })
}
