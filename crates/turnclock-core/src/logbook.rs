//! Append-only CSV log of game actions.
//!
//! State transitions describe what happened as [`LogRecord`]s; the logbook
//! stamps each record with the wall-clock time and appends it as one CSV row.
//! Write failures never reach the state machine: the host drops the record
//! and keeps going, so the on-screen history can run ahead of the file.

use std::{
    borrow::Cow,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::LogbookError;

/// CSV column header written to empty log files.
const HEADER: &str = "timestamp,player,turn,phase,message";

/// One row of the action log, produced by a state transition.
///
/// Records carry no timestamp. The logbook stamps them at write time so the
/// state machine stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Player the row belongs to.
    pub player: String,
    /// The player's turn counter when the row was produced.
    pub turn: u32,
    /// Phase name the player was in. Empty when the ruleset has no phases.
    pub phase: String,
    /// What happened.
    pub message: String,
}

/// Buffered append-only CSV writer for [`LogRecord`]s.
pub struct Logbook {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl Logbook {
    /// Open `path` for appending, writing the header row if the file is new.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogbookError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogbookError::Open(e.to_string()))?;
        let fresh = file.metadata().map_err(|e| LogbookError::Open(e.to_string()))?.len() == 0;

        let mut writer = BufWriter::new(file);
        if fresh {
            writeln!(writer, "{HEADER}").map_err(|e| LogbookError::Write(e.to_string()))?;
        }

        Ok(Self { writer, path })
    }

    /// Append one record, stamped with the current local time, and flush.
    ///
    /// Flushing per row keeps the file complete up to the last action if the
    /// process dies. Rows are short, so the buffer still coalesces each row
    /// into a single write.
    pub fn append(&mut self, record: &LogRecord) -> Result<(), LogbookError> {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(
            self.writer,
            "{stamp},{},{},{},{}",
            escape(&record.player),
            record.turn,
            escape(&record.phase),
            escape(&record.message),
        )
        .map_err(|e| LogbookError::Write(e.to_string()))?;
        self.writer.flush().map_err(|e| LogbookError::Write(e.to_string()))
    }

    /// Path the logbook appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Quote a field that contains a comma, quote, or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            player: "Player 1".to_string(),
            turn: 2,
            phase: "Draw".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn fresh_file_gets_header_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let mut book = Logbook::open(&path).unwrap();
        book.append(&record("Game started")).unwrap();
        drop(book);

        // Reopening an existing file must not repeat the header.
        let mut book = Logbook::open(&path).unwrap();
        book.append(&record("Game paused")).unwrap();
        drop(book);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3, "expected header plus two rows: {contents:?}");
        assert_eq!(lines[0], "timestamp,player,turn,phase,message");
        assert!(lines[1].ends_with(",Player 1,2,Draw,Game started"), "row was: {}", lines[1]);
        assert!(lines[2].ends_with(",Player 1,2,Draw,Game paused"), "row was: {}", lines[2]);
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let mut book = Logbook::open(&path).unwrap();
        book.append(&LogRecord {
            player: "Anna, the \"Swift\"".to_string(),
            turn: 1,
            phase: String::new(),
            message: "Turn 1 started".to_string(),
        })
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(
            contents.contains("\"Anna, the \"\"Swift\"\"\",1,,Turn 1 started"),
            "escaped row missing from: {contents:?}"
        );
    }

    #[test]
    fn unwritable_location_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("log.csv");

        assert!(matches!(Logbook::open(&path), Err(LogbookError::Open(_))));
    }
}
