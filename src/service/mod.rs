mod batch;
mod config;
mod dns;
mod error;
mod input;
mod lookup;
mod output;
mod report;

use error::Result;

use report::NoticeWriter;
use std::io;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;

pub struct Options {
    pub config: String,
    pub input: String,
    pub output: Option<String>,
    pub workers: Option<usize>,
    pub timeout: Option<u64>,
    pub log_level: Option<String>,
}

pub struct HostScan {
    options: Options,
    cancel: CancellationToken,
}

impl HostScan {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            cancel: CancellationToken::new(),
        }
    }

    fn setup_logger(level: &str) {
        let env = env_logger::Env::default().default_filter_or(level);
        env_logger::init_from_env(env);
    }

    /// Cancel the batch on SIGINT or SIGTERM.
    fn watch_signals(&self) {
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            match shutdown_signal().await {
                Ok(()) => {
                    info!("interrupted, abandoning remaining lookups");
                    cancel.cancel();
                }
                Err(msg) => warn!("could not listen for signals: {}", msg),
            }
        });
    }

    pub async fn run(&self) -> Result<()> {
        let config = config::Config::load(&self.options.config);
        let level = match &self.options.log_level {
            Some(level) => level.clone(),
            None => config.get_log_level(),
        };
        Self::setup_logger(&level);

        let workers = match self.options.workers {
            Some(workers) => workers.max(1),
            None => config.get_workers()?,
        };
        let timeout = match self.options.timeout {
            Some(secs) => Duration::from_secs(secs),
            None => config.get_timeout()?,
        };
        let resolver = lookup::DnsResolver::new(config.get_nameservers()?, timeout)?;
        let hosts = input::read_hosts(&self.options.input).await?;

        self.watch_signals();
        let mut notices = NoticeWriter::new(io::stdout());
        let resolution =
            batch::resolve_all(&resolver, &hosts, workers, &mut notices, &self.cancel).await?;
        debug!(
            "{} of {} hosts kept for aggregation",
            resolution.hosts.len(),
            hosts.len()
        );

        let json = output::render(&resolution.ips)?;
        match &self.options.output {
            Some(path) => {
                std::fs::write(path, json + "\n")?;
                info!("wrote {} addresses to {}", resolution.ips.len(), path);
            }
            None => println!("{}", json),
        }
        Ok(())
    }
}

#[cfg(unix)]
async fn shutdown_signal() -> io::Result<()> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    tokio::select! {
        res = signal::ctrl_c() => res,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> io::Result<()> {
    signal::ctrl_c().await
}
