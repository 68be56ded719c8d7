//! Edge file watching for live reload.
//!
//! Editors save in different ways (in-place writes, rename over, delete and
//! recreate), so the parent directory is watched and events are filtered
//! down to the target file.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Default quiet period before a change is reported.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Watches a single edge file and reports debounced changes.
pub struct EdgeFileWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    dir: PathBuf,
    file: PathBuf,
    file_name: Option<OsString>,
    debounce: Duration,
    last_change: Option<Instant>,
}

impl EdgeFileWatcher {
    /// Start watching `path`.
    ///
    /// # Errors
    /// Returns an error if the platform watcher cannot be created or the
    /// containing directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        let path = path.as_ref();
        // OS events carry canonical paths.
        let file = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let file_name = file.file_name().map(std::ffi::OsStr::to_os_string);
        let dir = parent_dir(&file);

        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(file = %file.display(), "watching edge file");

        Ok(Self {
            _watcher: watcher,
            events,
            dir,
            file,
            file_name,
            debounce,
            last_change: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Drain pending events; true once the file has been quiet for the
    /// debounce period after a change.
    pub fn poll_changed(&mut self) -> bool {
        let mut touched = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                Ok(ev) if self.concerns_file(&ev) => touched = true,
                Ok(ev) => tracing::trace!(kind = ?ev.kind, paths = ?ev.paths, "ignored fs event"),
                Err(err) => tracing::warn!("watch error: {err}"),
            }
        }
        if touched {
            self.last_change = Some(Instant::now());
        }

        match self.last_change {
            Some(at) if at.elapsed() >= self.debounce => {
                self.last_change = None;
                tracing::debug!(file = %self.file.display(), "edge file changed");
                true
            }
            _ => false,
        }
    }

    fn concerns_file(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| {
            path == &self.dir
                || path == &self.file
                || self
                    .file_name
                    .as_ref()
                    .is_some_and(|name| path.file_name() == Some(name.as_os_str()))
        })
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
