//! Task data structure.
//!
//! A `Task` is one row of the task list. The serialized field names follow the
//! `tasklist.json` layout (`deadDate`, `deadTime`, `dueTag`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::*;

/// A single task with its priority, deadline and description.
///
/// `index` mirrors the task's position in the list; `due_tag` is a snapshot
/// taken when the task was added or last saved and is never trusted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub index: usize,
    pub priority: Priority,
    pub dead_date: NaiveDate,
    pub dead_time: String,
    pub due_tag: DueTag,
    pub description: String,
}

impl Task {
    /// Build a task at `index`, tagging it against `today`.
    pub fn new(
        index: usize,
        priority: Priority,
        dead_date: NaiveDate,
        dead_time: String,
        description: String,
        today: NaiveDate,
    ) -> Self {
        Task {
            index,
            priority,
            dead_date,
            dead_time,
            due_tag: DueTag::classify(dead_date, today),
            description,
        }
    }

    /// The due tag as of `today`, ignoring the stored snapshot.
    pub fn due_tag_on(&self, today: NaiveDate) -> DueTag {
        DueTag::classify(self.dead_date, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let task = Task::new(
            0,
            Priority::High,
            NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            "9:5".into(),
            "Buy milk\nand eggs\n".into(),
            today,
        );
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "index": 0,
                "priority": "H",
                "deadDate": "2024-06-20",
                "deadTime": "9:5",
                "dueTag": "I",
                "description": "Buy milk\nand eggs\n",
            })
        );
    }

    #[test]
    fn test_stale_due_tag_is_ignored_for_live_value() {
        let json = r#"{"index":0,"priority":"N","deadDate":"2024-06-10","deadTime":"10:00","dueTag":"I","description":"x\n"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.due_tag, DueTag::InTime);
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(task.due_tag_on(today), DueTag::Overdue);
    }
}
