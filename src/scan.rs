//! Recursive page-directory scanner.
//!
//! Lists every file under a root directory as a forward-slash relative path.
//! Entries are classified by name alone: a name without an extension is
//! assumed to be a subdirectory and is recursed into. An extension-less
//! regular file therefore fails the scan with a not-a-directory error, and a
//! directory whose name contains a dot is reported as a file. This matches
//! the pages-directory convention the scanner is built for and is a known
//! limitation, not something the scanner tries to detect.

use futures::future::BoxFuture;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A directory listing failed during the scan.
#[derive(Debug, Error)]
#[error("failed to read directory {}", .path.display())]
pub struct ScanError {
    /// The path the scanner tried to list.
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Recursively list all files under `root`, relative to it.
///
/// Paths use `/` separators regardless of platform. The order follows the
/// underlying directory listing: unsorted and not guaranteed stable across
/// platforms. Each subdirectory is fully scanned before the next sibling
/// entry is visited.
///
/// The caller must ensure `root` exists; a missing directory surfaces as a
/// [`ScanError`]. Symlink cycles are not detected.
pub async fn scan(root: impl AsRef<Path>) -> Result<Vec<String>, ScanError> {
    scan_dir(root.as_ref()).await
}

fn scan_dir(dir: &Path) -> BoxFuture<'_, Result<Vec<String>, ScanError>> {
    Box::pin(async move {
        let read_err = |source| ScanError {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_directory = Path::new(&name).extension().is_none();

            if is_directory {
                let child = entry.path();
                let nested = scan_dir(&child).await?;
                files.extend(nested.into_iter().map(|file| format!("{}/{}", name, file)));
            } else {
                files.push(name);
            }
        }

        Ok(files)
    })
}
