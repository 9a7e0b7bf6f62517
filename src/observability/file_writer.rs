//! Append-only trace file with size-based rotation.
//!
//! When the active file grows past the policy limit it is renamed with a
//! chrono timestamp suffix (`propview-otlp.json.20260314T101500.123`) and a
//! fresh file is started. Only the newest backups are retained.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the active file exceeds this many bytes (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the active one.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Timestamp suffix of rotated files; sorts lexically in time order.
const BACKUP_SUFFIX_FORMAT: &str = "%Y%m%dT%H%M%S%.3f";

/// Limits applied by [`FileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_backups: DEFAULT_MAX_BACKUPS,
        }
    }
}

/// Line writer that rotates its file by size.
///
/// The handle is opened lazily on the first write, so construction never
/// fails. An internal `Mutex` makes `write_line` callable through `&self`.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening, writing or flushing fails, or if
    /// the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.file_path).map_or(false, |meta| meta.len() > self.policy.max_bytes)
    }

    /// Renames the active file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format(BACKUP_SUFFIX_FORMAT);
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{suffix}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }

        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(prefix) = self.file_path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{prefix}.");

        let mut backups = backups_in(dir, &prefix)?;
        // newest first
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.policy.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn backups_in(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect())
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
