//! File-change subscription with a trailing debounce.
//!
//! Raw `notify` events are forwarded into a channel; [`debounce`] turns them
//! into [`ChangeBatch`]es, one per burst. A burst ends once no event has
//! arrived for [`DebouncePolicy::window`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Failed to start file watcher: {0}")]
    Init(#[source] notify::Error),
    #[error("Failed to watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncePolicy {
    pub window: Duration,
}

impl DebouncePolicy {
    pub fn new(window: Duration) -> Self {
        DebouncePolicy { window }
    }
}

/// Paths touched during one burst of file events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    pub paths: BTreeSet<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub path: PathBuf,
    pub recursive: bool,
}

impl WatchTarget {
    pub fn file(path: &Path) -> Self {
        WatchTarget {
            path: path.to_path_buf(),
            recursive: false,
        }
    }

    pub fn tree(path: &Path) -> Self {
        WatchTarget {
            path: path.to_path_buf(),
            recursive: true,
        }
    }
}

/// Live subscription. Dropping it stops the underlying watcher.
pub struct ChangeSubscription {
    _watcher: RecommendedWatcher,
    batches: mpsc::Receiver<ChangeBatch>,
}

impl ChangeSubscription {
    pub async fn next(&mut self) -> Option<ChangeBatch> {
        self.batches.recv().await
    }
}

fn is_relevant(kind: &EventKind) -> bool {
    !matches!(kind, EventKind::Access(_))
}

/// Watches every target that exists now and yields debounced batches.
/// Must be called from within a tokio runtime.
pub fn subscribe(
    targets: &[WatchTarget],
    policy: DebouncePolicy,
) -> Result<ChangeSubscription, WatchError> {
    let (raw_tx, raw_rx) = mpsc::unbounded_channel::<Vec<PathBuf>>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) if is_relevant(&event.kind) => {
            debug!(kind = ?event.kind, paths = ?event.paths, "file event");
            let _ = raw_tx.send(event.paths);
        }
        Ok(_) => {}
        Err(err) => warn!(error = %err, "file watcher error"),
    })
    .map_err(WatchError::Init)?;

    for target in targets {
        if !target.path.exists() {
            warn!(path = %target.path.display(), "not watching missing path");
            continue;
        }
        let mode = if target.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&target.path, mode)
            .map_err(|source| WatchError::Watch {
                path: target.path.clone(),
                source,
            })?;
        debug!(path = %target.path.display(), recursive = target.recursive, "watching");
    }

    Ok(ChangeSubscription {
        _watcher: watcher,
        batches: debounce(raw_rx, policy),
    })
}

/// Coalesces raw path events into batches. The returned channel closes after
/// `raw` closes and any pending batch has been delivered.
pub fn debounce(
    mut raw: mpsc::UnboundedReceiver<Vec<PathBuf>>,
    policy: DebouncePolicy,
) -> mpsc::Receiver<ChangeBatch> {
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        while let Some(first) = raw.recv().await {
            let mut batch = ChangeBatch::default();
            batch.paths.extend(first);
            loop {
                match tokio::time::timeout(policy.window, raw.recv()).await {
                    Ok(Some(more)) => batch.paths.extend(more),
                    Ok(None) | Err(_) => break,
                }
            }
            if tx.send(batch).await.is_err() {
                break;
            }
        }
    });
    rx
}
