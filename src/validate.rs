//! Pure validation of the values typed at the interactive prompts.
//!
//! Every function here takes the raw line (without its line terminator) and
//! either returns the accepted value or the `InputError` the prompt reports.
//! The retry loops live in `prompt.rs`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::InputError;
use crate::fields::Priority;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]|0[0-9]|1[0-9]|2[0-3]):([0-9]|[0-5][0-9])$").unwrap()
});

/// Parse a priority letter, case-insensitively. Surrounding whitespace is not accepted.
pub fn parse_priority(s: &str) -> Result<Priority, InputError> {
    match s.to_uppercase().as_str() {
        "C" => Ok(Priority::Critical),
        "H" => Ok(Priority::High),
        "N" => Ok(Priority::Normal),
        "L" => Ok(Priority::Low),
        _ => Err(InputError::InvalidPriority),
    }
}

/// Parse `year-month-day` made of exactly three integers into a calendar date.
///
/// Segments need not be zero-padded; the returned date always displays as `yyyy-mm-dd`.
pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(InputError::InvalidDate);
    }
    let year: i32 = parts[0].parse().map_err(|_| InputError::InvalidDate)?;
    let month: u32 = parts[1].parse().map_err(|_| InputError::InvalidDate)?;
    let day: u32 = parts[2].parse().map_err(|_| InputError::InvalidDate)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(InputError::InvalidDate)
}

/// Accept `H:M`, `HH:MM` and mixed forms with hour 0-23 and minute 0-59.
///
/// The input is kept as typed, except `0:0` which becomes `00:00`.
pub fn parse_time(s: &str) -> Result<String, InputError> {
    if !TIME_RE.is_match(s) {
        return Err(InputError::InvalidTime);
    }
    if s == "0:0" {
        Ok("00:00".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Join description lines up to the first blank one.
///
/// Lines are trimmed and each kept line ends with `\n`. Running out of lines
/// counts as the terminating blank line.
pub fn collect_description<I, S>(lines: I) -> Result<String, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut description = String::new();
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            break;
        }
        description.push_str(line);
        description.push('\n');
    }
    if description.is_empty() {
        Err(InputError::BlankTask)
    } else {
        Ok(description)
    }
}

/// Parse a 1-based task number and return the 0-based position it selects.
pub fn parse_task_number(s: &str, count: usize) -> Result<usize, InputError> {
    let number: usize = s.parse().map_err(|_| InputError::InvalidTaskNumber)?;
    if (1..=count).contains(&number) {
        Ok(number - 1)
    } else {
        Err(InputError::InvalidTaskNumber)
    }
}
