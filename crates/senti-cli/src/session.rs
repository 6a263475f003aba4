//! Interactive session state machine.
//!
//! One session walks the fixed prompt sequence: file path, column choice,
//! analyzer choice, then scores the column and renders the results. Every
//! error is reported on the session's output writer and ends the session;
//! nothing is retried. Generic over the reader and writer so scripted inputs
//! can drive a session in tests.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{error, info};

use senti_analyze::{AnalyzerKind, detect_text_columns};
use senti_ingest::read_csv_table;
use senti_model::{
    AnalyzerOptions, ColumnProfile, DetectorOptions, ScanError, ScoredColumn, Table,
};

use crate::render;

/// How a session ended; maps to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Failed,
}

/// Selections accumulated across the prompts, reset at session start.
#[derive(Default)]
struct SessionState {
    table: Option<Table>,
    profiles: Vec<ColumnProfile>,
    column: Option<String>,
    analyzer: Option<AnalyzerKind>,
}

enum Step {
    Start,
    AwaitFilePath,
    AwaitColumnChoice,
    AwaitAnalyzerChoice,
    Analyzing,
    Display {
        texts: Vec<String>,
        scored: ScoredColumn,
    },
    Terminate(SessionOutcome),
}

pub struct Session<R, W> {
    input: R,
    output: W,
    detector: DetectorOptions,
    analyzer: AnalyzerOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            detector: DetectorOptions::default(),
            analyzer: AnalyzerOptions::default(),
        }
    }

    /// Run one full session to termination.
    ///
    /// # Errors
    ///
    /// Returns an error only for reader/writer failures; every scan error is
    /// reported on the output writer and folded into the outcome.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        let mut state = SessionState::default();
        let mut step = Step::Start;
        loop {
            step = match step {
                Step::Start => Step::AwaitFilePath,
                Step::AwaitFilePath => self.await_file_path(&mut state)?,
                Step::AwaitColumnChoice => self.await_column_choice(&mut state)?,
                Step::AwaitAnalyzerChoice => self.await_analyzer_choice(&mut state)?,
                Step::Analyzing => self.analyze(&state)?,
                Step::Display { texts, scored } => self.display(&state, &texts, &scored)?,
                Step::Terminate(outcome) => return Ok(outcome),
            };
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn fail(&mut self, error: &ScanError) -> io::Result<Step> {
        error!(%error, "session ended");
        writeln!(self.output, "error: {error}")?;
        Ok(Step::Terminate(SessionOutcome::Failed))
    }

    fn await_file_path(&mut self, state: &mut SessionState) -> io::Result<Step> {
        let path = self.prompt("CSV file path")?;
        let table = match read_csv_table(Path::new(&path)) {
            Ok(table) => table,
            Err(scan_error) => return self.fail(&scan_error),
        };
        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "table loaded"
        );
        let profiles = detect_text_columns(&table, &self.detector);
        if profiles.is_empty() {
            return self.fail(&ScanError::NoTextColumns);
        }
        writeln!(self.output, "Detected text columns:")?;
        writeln!(self.output, "{}", render::profile_table(&profiles))?;
        state.table = Some(table);
        state.profiles = profiles;
        Ok(Step::AwaitColumnChoice)
    }

    fn await_column_choice(&mut self, state: &mut SessionState) -> io::Result<Step> {
        let name = self.prompt("Text column name")?;
        if !state.profiles.iter().any(|profile| profile.name == name) {
            return self.fail(&ScanError::InvalidColumn { name });
        }
        state.column = Some(name);
        Ok(Step::AwaitAnalyzerChoice)
    }

    fn await_analyzer_choice(&mut self, state: &mut SessionState) -> io::Result<Step> {
        writeln!(
            self.output,
            "Analyzers: 1 lexicon, 2 pattern, 3 star model"
        )?;
        let choice = self.prompt("Analyzer choice")?;
        match AnalyzerKind::from_choice(&choice) {
            Ok(kind) => {
                state.analyzer = Some(kind);
                Ok(Step::Analyzing)
            }
            Err(scan_error) => self.fail(&scan_error),
        }
    }

    fn analyze(&mut self, state: &SessionState) -> io::Result<Step> {
        let (Some(table), Some(column), Some(analyzer)) =
            (state.table.as_ref(), state.column.as_deref(), state.analyzer)
        else {
            return self.fail(&ScanError::analysis("selections incomplete"));
        };
        let Some(index) = table.column_index(column) else {
            return self.fail(&ScanError::InvalidColumn {
                name: column.to_string(),
            });
        };
        let texts: Vec<String> = table
            .column(index)
            .map(|cell| cell.display().into_owned())
            .collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        match analyzer.score(&refs, &self.analyzer) {
            Ok(scored) => Ok(Step::Display { texts, scored }),
            Err(scan_error) => self.fail(&scan_error),
        }
    }

    fn display(
        &mut self,
        state: &SessionState,
        texts: &[String],
        scored: &ScoredColumn,
    ) -> io::Result<Step> {
        if let Some(column) = state.column.as_deref() {
            writeln!(self.output, "Column: {column}")?;
        }
        if let Some(analyzer) = state.analyzer {
            writeln!(self.output, "Analyzer: {}", analyzer.name())?;
        }
        writeln!(self.output, "{}", render::summary_text(scored))?;
        if !scored.is_empty() {
            writeln!(self.output, "{}", render::detail_table(texts, scored))?;
            if texts.len() > render::DETAIL_PREVIEW_ROWS {
                writeln!(
                    self.output,
                    "(showing first {} of {} rows)",
                    render::DETAIL_PREVIEW_ROWS,
                    texts.len()
                )?;
            }
        }
        Ok(Step::Terminate(SessionOutcome::Completed))
    }
}
