//! Fixed-width table rendering for the `print` command.

use chrono::NaiveDate;

use crate::task::Task;

/// Width of the description column, in characters.
pub const DESCRIPTION_WIDTH: usize = 44;

pub const EMPTY_MESSAGE: &str = "No tasks have been input";

const SEPARATOR: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
const HEADER: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";
/// Row prefix for wrapped description lines.
const CONTINUATION: &str = "|    |            |       |   |   |";

/// Render the task table, or the empty-list message when there are no tasks.
///
/// Due tags are classified against `today` rather than read from the tasks.
pub fn render_tasks(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let mut out = String::new();
    for line in [SEPARATOR, HEADER, SEPARATOR] {
        out.push_str(line);
        out.push('\n');
    }
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!(
            "| {:<2} | {} | {} |",
            i + 1,
            task.dead_date,
            task.dead_time
        ));
        out.push_str(&colour_cell(task.priority.colour_code()));
        out.push_str(&colour_cell(task.due_tag_on(today).colour_code()));
        push_description(&mut out, &task.description);
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// A single coloured space followed by the cell border.
fn colour_cell(code: u8) -> String {
    format!(" \x1b[{code}m \x1b[0m |")
}

/// Emit the description into the table's last column, wrapping at
/// `DESCRIPTION_WIDTH` characters and at embedded newlines.
fn push_description(out: &mut String, description: &str) {
    let mut used = 0;
    for ch in description.trim().chars() {
        if used == DESCRIPTION_WIDTH {
            used = 0;
            out.push_str("|\n");
            out.push_str(CONTINUATION);
        }
        if ch == '\n' {
            pad(out, DESCRIPTION_WIDTH - used);
            out.push_str("|\n");
            out.push_str(CONTINUATION);
            used = 0;
        } else {
            out.push(ch);
            used += 1;
        }
    }
    pad(out, DESCRIPTION_WIDTH - used);
    out.push_str("|\n");
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}
