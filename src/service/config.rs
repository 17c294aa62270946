use configparser::ini::Ini;
use std::time::Duration;

use super::error::{Error, Result};
use super::lookup::Nameservers;

const DEFAULT_WORKERS: u64 = 32;
const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub struct Config {
    config: Ini,
}

impl Config {
    pub fn load(file: &str) -> Config {
        let mut config = Ini::new();
        if let Err(msg) = config.load(file) {
            eprintln!("failed to load config file {}: {}", file, msg);
        }
        Config { config }
    }

    pub fn parse(text: &str) -> Result<Config> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(Error::Config)?;
        Ok(Config { config })
    }

    pub fn get_log_level(&self) -> String {
        self.config.get("LOG", "level").unwrap_or_else(|| "info".into())
    }

    pub fn get_workers(&self) -> Result<usize> {
        let workers = self.get_uint("RESOLVER", "workers", DEFAULT_WORKERS)?;
        Ok((workers as usize).max(1))
    }

    pub fn get_timeout(&self) -> Result<Duration> {
        let secs = self.get_uint("RESOLVER", "timeout", DEFAULT_TIMEOUT_SECS)?;
        Ok(Duration::from_secs(secs))
    }

    pub fn get_nameservers(&self) -> Result<Nameservers> {
        match self.config.get("RESOLVER", "nameservers") {
            Some(name) => name.parse(),
            None => Ok(Nameservers::System),
        }
    }

    fn get_uint(&self, section: &str, key: &str, default: u64) -> Result<u64> {
        let value = self
            .config
            .getuint(section, key)
            .map_err(|msg| Error::Config(format!("[{}] {}: {}", section, key, msg)))?;
        Ok(value.unwrap_or(default))
    }
}
