#[macro_use]
extern crate log;

mod service;

use clap::Parser;
use std::process::ExitCode;

const NOTICE_HELP: &str = "\
Failed lookups are printed to stdout, one line per host:
  <hostname>,0.0.0.0   the name does not exist
  <hostname>,<error>   any other resolver failure
0.0.0.0 only marks a missing name and never appears in the JSON result.";

#[derive(Parser)]
#[command(name = "hostscan", version)]
#[command(about = "Resolve hostnames and group them by IPv4 address")]
#[command(after_help = NOTICE_HELP)]
struct Cli {
    /// File with one hostname per line, `-` for stdin
    input: String,

    /// Write the JSON result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", default_value = "hostscan.ini")]
    config: String,

    /// Concurrent lookups
    #[arg(short, long)]
    workers: Option<usize>,

    /// Lookup timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let scan = service::HostScan::new(service::Options {
        config: cli.config,
        input: cli.input,
        output: cli.output,
        workers: cli.workers,
        timeout: cli.timeout,
        log_level: cli.log_level,
    });

    match scan.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_cancelled() => {
            warn!("{}", err);
            ExitCode::from(130)
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
