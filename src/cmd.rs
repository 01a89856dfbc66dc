//! Command implementations for the interactive task list.
//!
//! `Session` runs the action loop; each action is a `cmd_*` function that
//! works on the store through a `Prompter`, so the same code serves the
//! terminal and the tests.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use clap_complete::Shell;
use tracing::{debug, info};

use crate::db::Database;
use crate::error::{InputError, PromptError, SessionError, StoreError};
use crate::fields::EditField;
use crate::prompt::Prompter;
use crate::render::render_tasks;
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the task table once and exit.
    Print,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Source of the current date.
pub type Today = fn() -> NaiveDate;

/// Today's date in UTC.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Words accepted at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Action::Add),
            "print" => Ok(Action::Print),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            "end" => Ok(Action::End),
            _ => Err(InputError::InvalidAction),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Action::Add => "add",
            Action::Print => "print",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::End => "end",
        };
        f.write_str(word)
    }
}

/// One interactive run against a task file.
pub struct Session<R, W> {
    db: Database,
    db_path: PathBuf,
    prompter: Prompter<R, W>,
    today: Today,
    reload_every_turn: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the task file and prepare a session.
    pub fn open(
        db_path: PathBuf,
        prompter: Prompter<R, W>,
        today: Today,
        reload_every_turn: bool,
    ) -> Result<Self, StoreError> {
        let db = Database::load(&db_path)?;
        Ok(Session {
            db,
            db_path,
            prompter,
            today,
            reload_every_turn,
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Run actions until `end`, which saves the list and returns.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            // Legacy mode: the file on disk wins over anything unsaved.
            if self.reload_every_turn && self.db_path.exists() {
                self.db = Database::load(&self.db_path)?;
            }
            let answer = self
                .prompter
                .ask("Input an action (add, print, edit, delete, end):")?;
            let action = match answer.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    debug!("rejected action {answer:?}");
                    self.prompter.say(&e.to_string())?;
                    continue;
                }
            };
            let today = (self.today)();
            match action {
                Action::Add => cmd_add(&mut self.db, &mut self.prompter, today)?,
                Action::Print => cmd_print(&self.db, &mut self.prompter, today)?,
                Action::Edit => cmd_edit(&mut self.db, &mut self.prompter, today)?,
                Action::Delete => cmd_delete(&mut self.db, &mut self.prompter, today)?,
                Action::End => {
                    self.prompter.say("Tasklist exiting!")?;
                    self.db.save(&self.db_path, today)?;
                    return Ok(());
                }
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

/// Prompt for every field of a new task and append it.
///
/// A blank description abandons the task.
pub fn cmd_add<R: BufRead, W: Write>(
    db: &mut Database,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<(), PromptError> {
    let priority = prompter.priority()?;
    let dead_date = prompter.date()?;
    let dead_time = prompter.time()?;
    let Some(description) = prompter.description()? else {
        return Ok(());
    };
    let task = Task::new(db.next_index(), priority, dead_date, dead_time, description, today);
    db.add(task);
    Ok(())
}

/// Print the task table.
pub fn cmd_print<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<(), PromptError> {
    prompter.write_raw(&render_tasks(&db.tasks, today))
}

/// Show the table and ask which task to act on.
///
/// Returns `None` without asking when there are no tasks.
pub fn select_task<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<Option<usize>, PromptError> {
    cmd_print(db, prompter, today)?;
    if db.is_empty() {
        return Ok(None);
    }
    prompter.task_number(db.len()).map(Some)
}

/// Change one field of a selected task.
///
/// Editing the date leaves the stored due tag alone; it is derived again when
/// the table is printed and when the list is saved.
pub fn cmd_edit<R: BufRead, W: Write>(
    db: &mut Database,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<(), PromptError> {
    let Some(position) = select_task(db, prompter, today)? else {
        return Ok(());
    };
    let Some(task) = db.get_mut(position) else {
        return Ok(());
    };
    let field = loop {
        let answer = prompter.ask("Input a field to edit (priority, date, time, task):")?;
        match EditField::parse(&answer) {
            Some(field) => break field,
            None => prompter.say(&InputError::InvalidField.to_string())?,
        }
    };
    match field {
        EditField::Priority => task.priority = prompter.priority()?,
        EditField::Date => task.dead_date = prompter.date()?,
        EditField::Time => task.dead_time = prompter.time()?,
        EditField::Task => {
            if let Some(description) = prompter.description()? {
                task.description = description;
            }
        }
    }
    debug!("edited {:?} of task {}", field, position + 1);
    prompter.say("The task is changed")
}

/// Delete a selected task and renumber the remaining ones.
pub fn cmd_delete<R: BufRead, W: Write>(
    db: &mut Database,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<(), PromptError> {
    let Some(position) = select_task(db, prompter, today)? else {
        return Ok(());
    };
    if db.remove(position).is_some() {
        prompter.say("The task is deleted")?;
    }
    Ok(())
}

/// Write the table for `db_path` to `out` without starting a session.
pub fn cmd_print_file(
    db_path: &Path,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<(), SessionError> {
    let db = Database::load(db_path)?;
    info!("printing {} task(s) from {}", db.len(), db_path.display());
    out.write_all(render_tasks(&db.tasks, today).as_bytes())
        .and_then(|_| out.flush())
        .map_err(PromptError::from)?;
    Ok(())
}
