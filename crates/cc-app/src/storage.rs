use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cc_core::game::serialization::SessionSnapshot;
use cc_core::game::session::GameSession;
use directories::ProjectDirs;
use tracing::{debug, warn};

const SESSION_FILE: &str = "session.json";

/// One fixed file holding the serialized game. Missing or corrupt data is
/// never an error for the caller: loading falls back to a fresh session.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data directory, or the working directory when the home
    /// cannot be resolved.
    pub fn default_location() -> Self {
        let path = ProjectDirs::from("", "", "cc-counter")
            .map(|dirs| dirs.data_dir().join(SESSION_FILE))
            .unwrap_or_else(|| PathBuf::from(SESSION_FILE));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_or_default(&self) -> GameSession {
        match fs::read_to_string(&self.path) {
            Ok(json) => match SessionSnapshot::from_json(&json) {
                Ok(snapshot) => {
                    debug!(path = %self.path.display(), "loaded saved game");
                    snapshot.restore()
                }
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "saved game is corrupt; starting fresh");
                    GameSession::default()
                }
            },
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no saved game; starting fresh");
                GameSession::default()
            }
        }
    }

    pub fn save(&self, session: &GameSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("creating storage directory at {}", parent.display())
                })?;
            }
        }
        let json = SessionSnapshot::to_json(session)
            .context("serializing game session")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing saved game to {}", self.path.display()))?;
        Ok(())
    }
}
