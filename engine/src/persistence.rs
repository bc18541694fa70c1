//! Session persistence: the snapshot format and the state port.
//!
//! The whole session is one small JSON document saved write-through after
//! every mutation. There is a single writer and no batching, so the
//! contract is simply last-write-wins; a failed save is logged and the
//! session carries on in memory.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use compass_types::PillarRecord;

/// Well-known file name for the persisted session, under the data dir.
pub const STATE_FILENAME: &str = "state.json";

/// The serialized session: `{ step, data }`.
///
/// `step` is the screen index (0-5); `data` maps pillar id to record.
/// Anything that fails to deserialize into this shape - or carries a step
/// index outside the wizard - is treated as absent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub step: u8,
    pub data: BTreeMap<String, PillarRecord>,
}

/// Where session state lives.
///
/// The engine only ever talks to this port, so tests run against
/// [`MemoryStatePort`] and never touch a filesystem.
pub trait StatePort {
    /// Load the persisted snapshot, if there is a readable one. Corrupt
    /// state is logged and reported as `None` - never an error.
    fn load(&self) -> Option<SessionSnapshot>;

    /// Persist the snapshot, replacing whatever was there.
    fn save(&self, snapshot: &SessionSnapshot) -> io::Result<()>;

    /// Remove the persisted snapshot. Missing state is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// Which base directory the session state resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirSource {
    /// `~/.compass` under the user's home directory.
    System,
    /// `./.compass` relative to the working directory, when no home
    /// directory could be determined.
    Fallback,
}

/// Resolved data directory plus how it was resolved, so the app can warn
/// when it had to fall back.
#[derive(Debug, Clone)]
pub struct DataDir {
    pub path: PathBuf,
    pub source: DataDirSource,
}

impl DataDir {
    #[must_use]
    pub fn join(&self, child: &str) -> PathBuf {
        self.path.join(child)
    }
}

/// Resolve the data directory: `~/.compass`, or `./.compass` without a
/// home directory.
#[must_use]
pub fn data_dir() -> DataDir {
    match dirs::home_dir() {
        Some(home) => DataDir {
            path: home.join(".compass"),
            source: DataDirSource::System,
        },
        None => DataDir {
            path: PathBuf::from(".compass"),
            source: DataDirSource::Fallback,
        },
    }
}

/// Create `path` (and parents) if needed; on Unix, newly created leaf
/// directories are user-only (0o700) since the session file holds personal
/// reflections.
pub fn ensure_secure_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(0o700).create(path)
    }
    #[cfg(not(unix))]
    {
        fs::create_dir_all(path)
    }
}

/// Filesystem adapter: one JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct FsStatePort {
    path: PathBuf,
}

impl FsStatePort {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatePort for FsStatePort {
    fn load(&self) -> Option<SessionSnapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("Failed to read session state at {:?}: {err}", self.path);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(
                    "Persisted session at {:?} is not valid, starting fresh: {err}",
                    self.path
                );
                None
            }
        }
    }

    fn save(&self, snapshot: &SessionSnapshot) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_secure_dir(parent)?;
        }

        let serialized = serde_json::to_string_pretty(snapshot)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        // Write-then-rename so a crash mid-write never leaves a truncated
        // snapshot behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// In-memory adapter for tests and ephemeral sessions.
///
/// Cloning shares the underlying slot, so a test can keep a handle while
/// the app owns the port, then inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatePort {
    inner: std::sync::Arc<std::sync::Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    snapshot: Option<SessionSnapshot>,
    saves: usize,
}

impl MemoryStatePort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the port with a snapshot, as if a previous session saved it.
    #[must_use]
    pub fn seeded(snapshot: SessionSnapshot) -> Self {
        let port = Self::new();
        port.inner.lock().expect("state lock").snapshot = Some(snapshot);
        port
    }

    /// The most recently saved snapshot, if any.
    #[must_use]
    pub fn stored(&self) -> Option<SessionSnapshot> {
        self.inner.lock().expect("state lock").snapshot.clone()
    }

    /// How many times `save` has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.inner.lock().expect("state lock").saves
    }
}

impl StatePort for MemoryStatePort {
    fn load(&self) -> Option<SessionSnapshot> {
        self.inner.lock().expect("state lock").snapshot.clone()
    }

    fn save(&self, snapshot: &SessionSnapshot) -> io::Result<()> {
        let mut state = self.inner.lock().expect("state lock");
        state.snapshot = Some(snapshot.clone());
        state.saves += 1;
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        self.inner.lock().expect("state lock").snapshot = None;
        Ok(())
    }
}
