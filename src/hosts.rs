//! Host list loading
//!
//! Reads one host per line. Blank lines and lines starting with `#` are
//! skipped; surrounding whitespace is trimmed.

use crate::models::HostAddress;
use crate::utils::InputError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Source name that selects standard input
pub const STDIN_SOURCE: &str = "-";

/// Parse host entries from any buffered reader
pub fn parse_hosts<R: BufRead>(reader: R) -> io::Result<Vec<HostAddress>> {
    let mut hosts = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        hosts.push(HostAddress::new(trimmed));
    }

    Ok(hosts)
}

/// Load hosts from a file, or from stdin when `path` is `-`
pub fn load_hosts(path: &Path) -> Result<Vec<HostAddress>, InputError> {
    let source = path.display().to_string();

    let unreadable = |e: io::Error| InputError::Unreadable {
        path: source.clone(),
        message: e.to_string(),
    };

    if path.as_os_str() == STDIN_SOURCE {
        return parse_hosts(io::stdin().lock()).map_err(unreadable);
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: source.clone(),
        },
        _ => unreadable(e),
    })?;

    parse_hosts(BufReader::new(file)).map_err(unreadable)
}
