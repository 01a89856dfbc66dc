//! Enumerations and field types for tasks.
//!
//! This module defines the single-letter classifications stored with each task:
//! the priority chosen by the user and the due tag derived from the due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ANSI background codes used for the coloured table cells.
const BG_RED: u8 = 101;
const BG_GREEN: u8 = 102;
const BG_YELLOW: u8 = 103;
const BG_BLUE: u8 = 104;

/// Severity of a task, stored and entered as a single letter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    /// Critical
    #[serde(rename = "C")]
    Critical,
    /// High
    #[serde(rename = "H")]
    High,
    /// Normal
    #[serde(rename = "N")]
    Normal,
    /// Low
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    /// Background colour code for the priority cell.
    pub fn colour_code(self) -> u8 {
        match self {
            Priority::Critical => BG_RED,
            Priority::High => BG_YELLOW,
            Priority::Normal => BG_GREEN,
            Priority::Low => BG_BLUE,
        }
    }
}

/// Where a due date sits relative to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DueTag {
    /// Due in the future
    #[serde(rename = "I")]
    InTime,
    /// Due today
    #[serde(rename = "T")]
    Today,
    /// Past due
    #[serde(rename = "O")]
    Overdue,
}

impl DueTag {
    /// Classify `due` against `today` by whole-day difference.
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        let days = (due - today).num_days();
        if days > 0 {
            DueTag::InTime
        } else if days < 0 {
            DueTag::Overdue
        } else {
            DueTag::Today
        }
    }

    /// Background colour code for the due-tag cell.
    pub fn colour_code(self) -> u8 {
        match self {
            DueTag::InTime => BG_GREEN,
            DueTag::Today => BG_YELLOW,
            DueTag::Overdue => BG_RED,
        }
    }
}

/// Task fields that can be changed through the edit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Priority,
    Date,
    Time,
    Task,
}

impl EditField {
    /// Match the exact field word typed at the edit prompt.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "priority" => Some(EditField::Priority),
            "date" => Some(EditField::Date),
            "time" => Some(EditField::Time),
            "task" => Some(EditField::Task),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_tag_classify() {
        let today = date(2024, 6, 15);
        assert_eq!(DueTag::classify(date(2024, 6, 20), today), DueTag::InTime);
        assert_eq!(DueTag::classify(date(2024, 6, 10), today), DueTag::Overdue);
        assert_eq!(DueTag::classify(date(2024, 6, 15), today), DueTag::Today);
        assert_eq!(DueTag::classify(date(2025, 1, 1), today), DueTag::InTime);
    }

    #[test]
    fn test_single_letter_serialization() {
        assert_eq!(serde_json::to_string(&Priority::Critical).unwrap(), "\"C\"");
        assert_eq!(serde_json::to_string(&DueTag::Overdue).unwrap(), "\"O\"");
        let p: Priority = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(p, Priority::Low);
        assert!(serde_json::from_str::<Priority>("\"X\"").is_err());
    }

    #[test]
    fn test_colour_codes() {
        assert_eq!(Priority::Critical.colour_code(), 101);
        assert_eq!(Priority::High.colour_code(), 103);
        assert_eq!(Priority::Normal.colour_code(), 102);
        assert_eq!(Priority::Low.colour_code(), 104);
        assert_eq!(DueTag::InTime.colour_code(), 102);
        assert_eq!(DueTag::Today.colour_code(), 103);
        assert_eq!(DueTag::Overdue.colour_code(), 101);
    }

    #[test]
    fn test_edit_field_parse() {
        assert_eq!(EditField::parse("date"), Some(EditField::Date));
        assert_eq!(EditField::parse("task"), Some(EditField::Task));
        assert_eq!(EditField::parse("Date"), None);
        assert_eq!(EditField::parse("title"), None);
    }
}
