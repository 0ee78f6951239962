use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Entry;

/// File name of the persisted task list.
pub const TASKS_FILE: &str = "todo_tasks.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode entries: {0}")]
    Encode(serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Default location of the persisted file: the platform data directory,
/// falling back to the working directory when none can be resolved.
pub fn default_data_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "rust-todo-app")
        .map(|dirs| dirs.data_dir().join(TASKS_FILE))
        .unwrap_or_else(|| PathBuf::from(TASKS_FILE))
}

/// Serialize the whole list to a JSON array and replace the file at `path`.
///
/// The JSON is staged into a sibling temp file and renamed into place, so a
/// crash mid-write leaves the previous contents intact. The temp file is
/// removed on every failure path.
pub fn save_entries(entries: &[Entry], path: &Path) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(entries).map_err(PersistenceError::Encode)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| PersistenceError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(|source| PersistenceError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Read the persisted list back, leniently.
///
/// A missing file is a normal first run and yields an empty list. An
/// unreadable or malformed file also yields an empty list; since that
/// discards whatever was on disk, it is logged as a warning.
pub fn load_entries(path: &Path) -> Vec<Entry> {
    match read_entries(path) {
        Ok(entries) => entries,
        Err(PersistenceError::Read { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
            log::debug!("no task file at {}, starting empty", path.display());
            Vec::new()
        }
        Err(err) => {
            log::warn!("{}; starting with an empty list (existing data ignored)", err);
            Vec::new()
        }
    }
}

fn read_entries(path: &Path) -> Result<Vec<Entry>, PersistenceError> {
    let json = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Entry> {
        vec![
            Entry {
                completed: false,
                description: "Buy milk".to_string(),
                date: "01.01.2024, 10:00".to_string(),
                priority: Priority::Low,
                editing: false,
                edit_buffer: String::new(),
            },
            Entry {
                completed: true,
                description: "Ship release".to_string(),
                date: "02.01.2024, 18:30".to_string(),
                priority: Priority::High,
                editing: true,
                edit_buffer: "scratch".to_string(),
            },
        ]
    }

    #[test]
    fn round_trip_preserves_persisted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TASKS_FILE);

        let entries = sample();
        save_entries(&entries, &path).unwrap();
        let loaded = load_entries(&path);

        assert_eq!(loaded.len(), entries.len());
        for (loaded, original) in loaded.iter().zip(&entries) {
            assert_eq!(loaded.completed, original.completed);
            assert_eq!(loaded.description, original.description);
            assert_eq!(loaded.date, original.date);
            assert_eq!(loaded.priority, original.priority);
            // Transient fields never round-trip.
            assert!(!loaded.editing);
        }
    }

    #[test]
    fn load_missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_entries(&path).is_empty());
    }

    #[test]
    fn load_malformed_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TASKS_FILE);
        fs::write(&path, "{\"not\": \"a list\"").unwrap();
        assert!(load_entries(&path).is_empty());

        fs::write(&path, "{\"completed\": false}").unwrap();
        assert!(load_entries(&path).is_empty());
    }

    #[test]
    fn save_is_a_full_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TASKS_FILE);

        save_entries(&sample(), &path).unwrap();
        save_entries(&sample()[..1], &path).unwrap();

        let loaded = load_entries(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "Buy milk");
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TASKS_FILE);
        save_entries(&sample(), &path).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![TASKS_FILE.to_string()]);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(TASKS_FILE);
        save_entries(&sample(), &path).unwrap();
        assert_eq!(load_entries(&path).len(), 2);
    }
}
