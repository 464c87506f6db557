//! Interactive add/view session.
//!
//! Reads commands line by line from any [`BufRead`] and writes prompts and
//! results to any [`Write`], so the session can be driven from a terminal or
//! from a test.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::{GradeError, Result};
use crate::input::SubmissionGuard;
use crate::output::render_table;
use crate::store::GradeStore;

const HELP: &str = "\
Commands:
  add    record a student's scores
  view   show all stored grades
  help   show this message
  quit   leave the session";

pub struct Shell<'a> {
    store: &'a GradeStore,
    guard: SubmissionGuard,
    pending_name: Option<String>,
    pending_scores: Option<String>,
}

impl<'a> Shell<'a> {
    pub fn new(store: &'a GradeStore, guard: SubmissionGuard) -> Self {
        Self {
            store,
            guard,
            pending_name: None,
            pending_scores: None,
        }
    }

    pub fn guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "Grade ledger: {}", self.store.path().display())?;
        writeln!(out, "{HELP}")?;

        while let Some(line) = prompt(input, out, "grades> ")? {
            match line.as_str() {
                "" => continue,
                "add" | "a" => self.add(input, out)?,
                "view" | "v" => self.view(out)?,
                "help" | "?" => writeln!(out, "{HELP}")?,
                "quit" | "exit" | "q" => break,
                other => writeln!(out, "Unknown command '{other}'. Type 'help' for a list.")?,
            }
        }

        debug!("Shell session ended");
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        if self.guard.is_exhausted() {
            let err = GradeError::TooManyAttempts {
                max: self.guard.max_attempts(),
            };
            writeln!(out, "Error: {err}")?;
            return Ok(());
        }

        let Some(name) = prompt_with_default(input, out, "Name", self.pending_name.as_deref())?
        else {
            return Ok(());
        };
        let Some(scores) = prompt_with_default(
            input,
            out,
            "Scores (comma-separated)",
            self.pending_scores.as_deref(),
        )?
        else {
            return Ok(());
        };

        match self.guard.submit(self.store, &name, &scores) {
            Ok(record) => {
                writeln!(out, "Grades for {} added successfully.", record.name)?;
                self.pending_name = None;
                self.pending_scores = None;
            }
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                self.pending_name = Some(name);
                self.pending_scores = Some(scores);
            }
        }

        Ok(())
    }

    fn view<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.store.list_all() {
            Ok(rows) => writeln!(out, "{}", render_table(&rows))?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
        Ok(())
    }
}

/// Prints `label` and reads one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but an empty answer falls back to `default` when one is set.
fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    let label = match default {
        Some(d) => format!("{label} [{d}]: "),
        None => format!("{label}: "),
    };

    Ok(prompt(input, out, &label)?.map(|answer| match default {
        Some(d) if answer.is_empty() => d.to_string(),
        _ => answer,
    }))
}
