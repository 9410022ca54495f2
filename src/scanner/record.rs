//! Match records and the append-only match log.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::blockchain::{Ether, KeyPair};

/// An address found with a nonzero balance.
#[derive(Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub private_key: String,
    pub address: String,
    pub balance: Ether,
}

impl MatchRecord {
    pub fn new(pair: &KeyPair, balance: Ether) -> Self {
        Self {
            private_key: pair.private_key_hex(),
            address: pair.address_checksummed(),
            balance,
        }
    }

    /// One log line, newline included.
    pub fn to_line(&self) -> String {
        format!(
            "Private Key: {}, Address: {}, Balance: {} ETH\n",
            self.private_key, self.address, self.balance
        )
    }
}

impl std::fmt::Debug for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRecord")
            .field("address", &self.address)
            .field("balance", &self.balance.to_string())
            .finish_non_exhaustive()
    }
}

/// Append-only text log of matches.
///
/// The file is opened per append and closed when the handle drops, so
/// nothing stays open between iterations.
#[derive(Debug, Clone)]
pub struct MatchLog {
    path: PathBuf,
}

impl MatchLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file if needed.
    pub fn append(&self, record: &MatchRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.to_line().as_bytes())?;
        file.flush()
    }

    /// Number of lines in the log, or `None` if it does not exist.
    ///
    /// Counts raw newline-terminated chunks (plus a trailing unterminated
    /// one), so bytes that are not UTF-8 still count.
    pub fn count_lines(&self) -> io::Result<Option<usize>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut reader = BufReader::new(file);
        let mut chunk = Vec::new();
        let mut count = 0;
        while reader.read_until(b'\n', &mut chunk)? > 0 {
            count += 1;
            chunk.clear();
        }
        Ok(Some(count))
    }
}
