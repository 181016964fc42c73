use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::tracing::prelude::*;

use super::{PersistedState, StateStore};

/// File-backed state store: one JSON record, written via a temp file in
/// the same directory and renamed into place.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStateStore { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> PersistedState {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return PersistedState::default();
            }
            Err(err) => {
                warn!("could not read {}: {err}; assuming normal phase", self.path.display());
                return PersistedState::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    "corrupt state record in {}: {err}; assuming normal phase",
                    self.path.display()
                );
                PersistedState::default()
            }
        }
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).map_err(std::io::Error::other)?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        debug!("committed {:?} to {}", state.phase, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::alert::AlertPhase;

    use super::*;

    #[test]
    fn load_without_file_is_normal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));
        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn round_trips_normal_phase() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));

        store.save(&PersistedState::normal()).unwrap();
        assert_eq!(store.load(), PersistedState::normal());
    }

    #[test]
    fn round_trips_active_phase_with_start_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));

        let state = PersistedState::active(datetime!(2025-11-10 14:30:00 UTC));
        store.save(&state).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, state);
        assert_eq!(loaded.phase, AlertPhase::Active);
    }

    #[test]
    fn corrupt_record_fails_open_to_normal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "alert{{{not json").unwrap();

        let store = FileStateStore::new(&path);
        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));

        store
            .save(&PersistedState::active(datetime!(2025-11-10 14:30:00 UTC)))
            .unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["state.json"]);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));

        store
            .save(&PersistedState::active(datetime!(2025-11-10 14:30:00 UTC)))
            .unwrap();
        store.save(&PersistedState::normal()).unwrap();

        assert_eq!(store.load(), PersistedState::normal());
    }
}
