//! Size-rotated line writer for the trace file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rotation threshold for the live trace file (10 MB).
const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
const DEFAULT_BACKUPS: usize = 3;

/// Appends lines to a file, rotating it once it grows past a size limit.
///
/// The file is opened lazily on the first write. When the live file exceeds
/// the limit it is renamed to `<name>.<unix-nanos>` and a fresh file is
/// started; rotated files beyond the retention count are deleted, oldest first.
pub struct FileWriter {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Writes `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be rotated, opened or written, or if a
    /// previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let rotated = rotated_name(&self.path, stamp);

        if self.path.exists() {
            fs::rename(&self.path, rotated)?;
        }
        self.prune()
    }

    /// Deletes rotated files beyond the retention count, newest kept.
    fn prune(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut rotated: Vec<(u128, PathBuf)> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| {
                let file_name = entry.file_name();
                let stamp = file_name.to_str()?.strip_prefix(&prefix)?.parse().ok()?;
                Some((stamp, entry.path()))
            })
            .collect();

        rotated.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, stale) in rotated.iter().skip(self.backups) {
            if let Err(e) = fs::remove_file(stale) {
                tracing::debug!(path = %stale.display(), error = %e, "failed to prune rotated trace file");
            }
        }
        Ok(())
    }
}

fn rotated_name(path: &Path, stamp: u128) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{stamp}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}
