use std::fmt::{Display, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Queue operation being recorded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Enqueue,
    Dequeue,
    Peek,
    HomogeneityCheck,
}

/// Observed result of an operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Present,
    Absent,
    Verdict(bool),
}

/// Log entry recording an operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub op: Op,
    pub item: Option<T>,      // The item enqueued, dequeued or peeked
    pub outcome: Outcome,
    pub len_after: usize,     // Queue length once the op finished
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, op: {:?}, item: {:?}, outcome: {:?}, len_after: {} }}",
            self.local_log_id,
            self.op,
            self.item,
            self.outcome,
            self.len_after,
        )
    }
}

/// Failures while persisting or loading a log
#[derive(Debug, Error)]
pub enum LogError {
    #[error("log file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("malformed log entry on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
/// Logger storing all entries
pub struct Logger<T> {
    entries: Vec<LogEntry<T>>,
    next_id: u64,
}

impl<T> Default for Logger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Logger<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), next_id: 1 }
    }

    /// Log an operation
    pub fn log(&mut self, op: Op, item: Option<T>, outcome: Outcome, len_after: usize) -> u64 {
        // --- Negative-space assertion: outcome must match operation ---
        match op {
            Op::Enqueue => assert!(
                outcome == Outcome::Present && item.is_some(),
                "Enqueue must record a present item"
            ),
            Op::Dequeue | Op::Peek => assert!(
                matches!(outcome, Outcome::Present | Outcome::Absent)
                    && item.is_some() == (outcome == Outcome::Present),
                "Dequeue and peek carry an item iff present"
            ),
            Op::HomogeneityCheck => assert!(
                matches!(outcome, Outcome::Verdict(_)) && item.is_none(),
                "Homogeneity check must record a verdict"
            ),
        }

        let local_log_id = self.next_id;
        self.next_id += 1;

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            op,
            item,
            outcome,
            len_after,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
        local_log_id
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<LogEntry<T>> {
        self.entries
    }
}

impl<T: Clone> Logger<T> {
    /// Entries logged after the given id
    pub fn entries_since(&self, log_id: u64) -> Vec<LogEntry<T>> {
        self.entries
            .iter()
            .filter(|entry| entry.local_log_id > log_id)
            .cloned()
            .collect()
    }
}

/// Append entries to `path` as NDJSON, one object per line
pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: impl AsRef<Path>) -> Result<(), LogError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
    }
    Ok(())
}

/// Load every entry from an NDJSON log, skipping blank lines
pub fn read_logs<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<LogEntry<T>>, LogError> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line)
            .map_err(|source| LogError::Parse { line: idx + 1, source })?;
        entries.push(entry);
    }
    Ok(entries)
}
