//! In-memory task store and its JSON persistence.
//!
//! The file holds a bare JSON array of tasks. A missing file is an empty list;
//! a file that cannot be read or parsed is an error for the caller to report.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::task::Task;

/// Default data file, relative to the working directory.
pub const DEFAULT_FILE: &str = "tasklist.json";

/// Ordered list of tasks. Each task's `index` equals its position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Database {
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load tasks from a JSON file, or an empty store if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!("no task file at {}, starting empty", path.display());
            return Ok(Database::default());
        }
        let mut buf = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut buf))
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let tasks: Vec<Task> = serde_json::from_str(&buf).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut db = Database { tasks };
        db.reindex();
        info!("loaded {} task(s) from {}", db.len(), path.display());
        Ok(db)
    }

    /// Save to JSON using atomic write (temp file + rename).
    ///
    /// Stored due tags are refreshed against `today` first.
    pub fn save(&mut self, path: &Path, today: NaiveDate) -> Result<(), StoreError> {
        self.refresh_due_tags(today);
        let data = serde_json::to_string_pretty(&self.tasks)?;
        let write_err = |source: std::io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };
        let tmp = path.with_extension("json.tmp");
        let written = File::create(&tmp)
            .and_then(|mut f| {
                f.write_all(data.as_bytes())?;
                f.flush()
            })
            .and_then(|_| fs::rename(&tmp, path));
        if let Err(e) = written {
            // Don't leave a half-written temp file next to the task list.
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }
        info!("saved {} task(s) to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index the next added task will receive.
    pub fn next_index(&self) -> usize {
        self.tasks.len()
    }

    /// Append a task, forcing its index to the end position.
    pub fn add(&mut self, mut task: Task) -> usize {
        let index = self.next_index();
        task.index = index;
        self.tasks.push(task);
        debug!("added task {}", index + 1);
        index
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Task> {
        self.tasks.get_mut(position)
    }

    /// Remove the task at `position` and renumber the rest.
    pub fn remove(&mut self, position: usize) -> Option<Task> {
        if position >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(position);
        self.reindex();
        debug!("deleted task {}", position + 1);
        Some(removed)
    }

    /// Set every task's index to its position in the list.
    pub fn reindex(&mut self) {
        for (i, t) in self.tasks.iter_mut().enumerate() {
            t.index = i;
        }
    }

    /// Recompute the stored due tag of every task against `today`.
    pub fn refresh_due_tags(&mut self, today: NaiveDate) {
        for t in self.tasks.iter_mut() {
            t.due_tag = t.due_tag_on(today);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{DueTag, Priority};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(description: &str, due: NaiveDate) -> Task {
        Task::new(0, Priority::Normal, due, "10:00".into(), description.into(), date(2024, 6, 15))
    }

    fn three_tasks() -> Database {
        let mut db = Database::default();
        db.add(task("first\n", date(2024, 6, 20)));
        db.add(task("second\n", date(2024, 6, 10)));
        db.add(task("third\n", date(2024, 6, 15)));
        db
    }

    #[test]
    fn test_add_assigns_position_index() {
        let db = three_tasks();
        let indices: Vec<usize> = db.tasks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(db.next_index(), 3);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut db = three_tasks();
        let removed = db.remove(1).unwrap();
        assert_eq!(removed.description, "second\n");
        assert_eq!(db.len(), 2);
        assert_eq!(db.tasks[0].index, 0);
        assert_eq!(db.tasks[1].index, 1);
        assert_eq!(db.tasks[1].description, "third\n");
        assert!(db.remove(5).is_none());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let db = Database::load(&dir.path().join(DEFAULT_FILE)).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE);
        let mut db = three_tasks();
        db.tasks[0].description = "multi\nline\n".into();
        db.save(&path, date(2024, 6, 15)).unwrap();

        let loaded = Database::load(&path).unwrap();
        assert_eq!(loaded, db);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail.
        let path = dir.path().join(DEFAULT_FILE);
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut db = three_tasks();
        let result = db.save(&path, date(2024, 6, 15));
        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_save_refreshes_due_tags() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE);
        let mut db = three_tasks();
        assert_eq!(db.tasks[0].due_tag, DueTag::InTime);
        db.save(&path, date(2024, 7, 1)).unwrap();
        let loaded = Database::load(&path).unwrap();
        assert!(loaded.tasks.iter().all(|t| t.due_tag == DueTag::Overdue));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Database::load(&path), Err(StoreError::Parse { .. })));

        fs::write(&path, r#"[{"index":0,"priority":"Z"}]"#).unwrap();
        assert!(matches!(Database::load(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_load_renumbers_indices() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE);
        let json = r#"[
            {"index":4,"priority":"C","deadDate":"2024-06-20","deadTime":"9:5","dueTag":"I","description":"a\n"},
            {"index":9,"priority":"L","deadDate":"2024-06-21","deadTime":"00:00","dueTag":"I","description":"b\n"}
        ]"#;
        fs::write(&path, json).unwrap();
        let db = Database::load(&path).unwrap();
        assert_eq!(db.tasks[0].index, 0);
        assert_eq!(db.tasks[1].index, 1);
        assert_eq!(db.tasks[0].dead_time, "9:5");
        assert_eq!(db.tasks[1].priority, Priority::Low);
    }
}
