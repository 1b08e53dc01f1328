//! Journal I/O operations and file management.
//!
//! This module contains all the I/O operations around journal entries:
//! creating the log directory, walking it to build the journal index, and
//! writing today's entry without ever overwriting an existing one.

use crate::constants;
use crate::errors::{AppError, AppResult};
use crate::journal_core::index::default_entry_path;
use crate::journal_core::scanner::{self, entry_date_for_path};
use crate::journal_core::{CalendarDate, IndexBuilder, JournalIndex};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Ensures the log directory exists, creating it if necessary.
///
/// This function checks if the specified directory exists and creates it
/// (including all parent directories) if it doesn't exist yet.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails due to permission issues,
///   invalid paths, or other filesystem errors
pub fn ensure_log_dir_exists(log_dir: &Path) -> AppResult<()> {
    if !log_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Log directory path must be absolute: {}",
            log_dir.display()
        )));
    }

    if !log_dir.exists() {
        info!("Creating {}", log_dir.display());
        fs::create_dir_all(log_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Log path {} does not exist and could not be created: {}",
                    log_dir.display(),
                    e
                ),
            ))
        })?;

        // Set secure permissions (0o700 - read/write/execute only for owner)
        #[cfg(unix)]
        {
            let permissions = fs::Permissions::from_mode(constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(log_dir, permissions)?;
            debug!("Set 0o700 permissions on log directory");
        }
    }
    Ok(())
}

/// The path of the entry for `date`: `<log_dir>/<YYYY-MM-DD>.md`.
pub fn entry_path_for_date(log_dir: &Path, date: CalendarDate) -> PathBuf {
    default_entry_path(log_dir, date)
}

/// Fails with `AppError::EntryExists` if something is already at `path`.
pub fn ensure_entry_absent(path: &Path) -> AppResult<()> {
    if path.exists() {
        return Err(AppError::EntryExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Scans every journal entry under `log_dir`, recursively.
///
/// Files that are not named like `YYYY-MM-DD.md` are skipped silently.
/// Entries whose name is not a real date, or whose content is not UTF-8,
/// are recorded in the index as skipped files and the scan carries on.
///
/// # Errors
///
/// Returns `AppError::Walk` if the directory tree cannot be traversed and
/// `AppError::Io` if an entry cannot be read. Both abort the scan.
///
/// # Examples
///
/// ```no_run
/// use logbook::journal_io;
/// use std::path::Path;
///
/// let index = journal_io::scan_log_dir(Path::new("/home/me/logbook"))
///     .expect("Failed to scan log directory");
/// println!("{} dates referenced", index.len());
/// ```
pub fn scan_log_dir(log_dir: &Path) -> AppResult<JournalIndex> {
    debug!("Scanning log directory: {:?}", log_dir);
    let mut builder = IndexBuilder::new(log_dir);
    let mut scanned = 0usize;

    for entry in WalkDir::new(log_dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|source| AppError::Walk {
            path: log_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let date = match entry_date_for_path(path) {
            None => continue,
            Some(Ok(date)) => date,
            Some(Err(e)) => {
                warn!("Skipping {}: {}", path.display(), e);
                builder.record_skipped(path, e.to_string());
                continue;
            }
        };

        let bytes = fs::read(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: not valid UTF-8", path.display());
                builder.record_skipped(path, format!("not valid UTF-8: {}", e.utf8_error()));
                continue;
            }
        };

        scanner::scan_document(&mut builder, date, path, &text);
        scanned += 1;
    }

    let index = builder.finish();
    info!(
        "Scanned {} entries, {} dates referenced",
        scanned,
        index.len()
    );
    Ok(index)
}

/// Writes `contents` to a new file at `path`.
///
/// The file is created exclusively; if it already exists nothing is touched
/// and `AppError::EntryExists` is returned. If writing fails part way, the
/// partial file is removed.
pub fn write_new_entry(path: &Path, contents: &str) -> AppResult<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(constants::DEFAULT_FILE_PERMISSIONS);

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(AppError::EntryExists {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Unable to create a log entry named {}: {}", path.display(), e),
            )))
        }
    };

    let written = file.write_all(contents.as_bytes()).and_then(|_| file.sync_all());
    if let Err(e) = written {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("Failed to remove partial entry {}: {}", path.display(), cleanup);
        }
        return Err(AppError::Io(e));
    }

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
