use tokio::fs;
use tokio::io::{self, AsyncReadExt};

use super::error::Result;

/// Prefix the subdomain scanner puts in front of every hit.
const SCANNER_PREFIX: &str = "Found: ";

/// Hostnames from scanner output, one per line.
pub fn parse_hosts(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .map(|line| line.strip_prefix(SCANNER_PREFIX).unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read hostnames from `path`, or from stdin when it is `-`.
pub async fn read_hosts(path: &str) -> Result<Vec<String>> {
    let text = if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).await?;
        text
    } else {
        fs::read_to_string(path).await?
    };
    let hosts = parse_hosts(&text);
    debug!("read {} hosts from {}", hosts.len(), path);
    Ok(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scanner_prefix_and_blank_lines() {
        let hosts = parse_hosts("Found: a.example\n\n  b.example  \r\nFound:   c.example\n");
        assert_eq!(hosts, vec!["a.example", "b.example", "c.example"]);
    }

    #[test]
    fn keeps_repeats() {
        let hosts = parse_hosts("dup.example\ndup.example\n");
        assert_eq!(hosts, vec!["dup.example", "dup.example"]);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = read_hosts("/nonexistent/hosts.txt").await.unwrap_err();
        assert!(matches!(err, super::super::error::Error::Io(_)));
    }

    #[tokio::test]
    async fn reads_file_without_blocking_the_runtime() {
        let path = std::env::temp_dir().join(format!("hostscan-hosts-{}.txt", std::process::id()));
        fs::write(&path, "Found: a.example\n\nb.example\n").await.unwrap();
        let hosts = read_hosts(path.to_str().unwrap()).await.unwrap();
        fs::remove_file(&path).await.unwrap();
        assert_eq!(hosts, vec!["a.example", "b.example"]);
    }
}
