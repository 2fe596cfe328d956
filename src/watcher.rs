//! Development watcher for the pages directory.
//!
//! Route registration happens once at setup, so structural changes cannot be
//! applied in-process. Content edits get a log notice; added or removed
//! files are handed to a structural-change handler. The default handler
//! terminates the process so an external supervisor restarts it with a
//! fresh scan.

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// A file appeared or disappeared under the watched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralChange {
    pub kind: ChangeKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

/// Keeps the underlying watcher and its event loop alive. Dropping the
/// handle stops the watch.
pub struct WatcherHandle {
    _watcher: RecommendedWatcher,
    task: tokio::task::JoinHandle<()>,
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Default structural-change policy: log and force a full restart.
///
/// The route set cannot be updated incrementally, so the process exits
/// non-zero and leaves recovery to whatever restarts it.
pub fn exit_on_structural_change(change: StructuralChange) {
    let verb = match change.kind {
        ChangeKind::Added => "added",
        ChangeKind::Removed => "deleted",
    };
    warn!("File {}: {}", verb, change.path.display());
    warn!("Restart needed to rescan files");
    std::process::exit(1);
}

/// Watch `dir` for the remainder of the process lifetime.
///
/// Content changes are logged; the first add or remove event invokes
/// `on_structural_change` (no debouncing, no batching). Pass
/// [`exit_on_structural_change`] for the default restart-the-process
/// behavior, or a custom handler to reconcile differently.
pub fn spawn_watcher<F>(dir: impl AsRef<Path>, on_structural_change: F) -> Result<WatcherHandle>
where
    F: Fn(StructuralChange) + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The notify callback runs on the watcher's own thread; events are
    // forwarded to a task on the runtime so handlers see async-side state.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                let _ = tx.send(event);
            }
            Err(e) => warn!("Watch error: {}", e),
        },
        notify::Config::default(),
    )
    .context("Failed to create file watcher")?;

    watcher
        .watch(dir.as_ref(), RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", dir.as_ref().display()))?;

    info!("Watching {} for changes", dir.as_ref().display());

    let task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            handle_event(event, &on_structural_change);
        }
    });

    Ok(WatcherHandle {
        _watcher: watcher,
        task,
    })
}

fn handle_event<F: Fn(StructuralChange)>(event: Event, on_structural_change: &F) {
    let kind = match event.kind {
        EventKind::Create(_) => Some(ChangeKind::Added),
        EventKind::Remove(_) => Some(ChangeKind::Removed),
        EventKind::Modify(_) => None,
        _ => return,
    };

    for path in event.paths {
        match kind {
            Some(kind) => on_structural_change(StructuralChange { kind, path }),
            None => {
                info!("File changed: {}", path.display());
                info!("Refresh the page in browser to see the changes. No HMR support yet.");
            }
        }
    }
}
