//! One log file per calendar day.
//!
//! Files are named `Log_YYYY-MM-DD.txt` after the date the sink's clock reports
//! and are opened in append mode through `tracing-appender`. The day is checked
//! on every append: a new day opens a new file, and a failure to open it goes
//! back to the caller. Nothing touches the filesystem until the first append.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::error::{LogError, Result};
use crate::sink::Sink;
use crate::timestamp::{system_clock, Clock};

pub const FILE_PREFIX: &str = "Log";
pub const FILE_SUFFIX: &str = "txt";

/// Name of the file holding the entries written on `day`.
pub fn file_name(day: NaiveDate) -> String {
    format!("{}.{FILE_SUFFIX}", file_stem(day))
}

fn file_stem(day: NaiveDate) -> String {
    format!("{FILE_PREFIX}_{}", day.format("%Y-%m-%d"))
}

struct DayFile {
    day: NaiveDate,
    appender: RollingFileAppender,
}

pub struct DailyFileSink {
    directory: Option<PathBuf>,
    clock: Clock,
    file: Mutex<Option<DayFile>>,
}

impl DailyFileSink {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self::with_clock(directory, system_clock())
    }

    /// Sink that dates its files by `clock`. Give the logger the same clock so
    /// entry timestamps and file names agree.
    pub fn with_clock(directory: Option<PathBuf>, clock: Clock) -> Self {
        Self {
            directory,
            clock,
            file: Mutex::new(None),
        }
    }

    /// File that an append right now would land in.
    pub fn current_path(&self) -> Option<PathBuf> {
        let day = (self.clock)().date_naive();
        self.directory.as_ref().map(|dir| dir.join(file_name(day)))
    }

    fn open(directory: &Path, day: NaiveDate) -> Result<RollingFileAppender> {
        // Rotation is ours to do: the appender only ever sees one day's file.
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_stem(day))
            .filename_suffix(FILE_SUFFIX)
            .build(directory)
            .map_err(|e| LogError::sink_unavailable(Some(directory.to_path_buf()), e.to_string()))?;
        debug!(directory = %directory.display(), %day, "Opened daily log file");
        Ok(appender)
    }
}

impl Sink for DailyFileSink {
    fn append(&self, entry: &str) -> Result<()> {
        let Some(directory) = &self.directory else {
            return Err(LogError::sink_unavailable(None, "log directory is not set"));
        };

        let day = (self.clock)().date_naive();
        let mut slot = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = match slot.take() {
            Some(file) if file.day == day => file,
            _ => DayFile {
                day,
                appender: Self::open(directory, day)?,
            },
        };
        let written = file
            .appender
            .write_all(entry.as_bytes())
            .and_then(|()| file.appender.flush());
        *slot = Some(file);
        written.map_err(LogError::from)
    }
}

impl std::fmt::Debug for DailyFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailyFileSink")
            .field("directory", &self.directory)
            .finish_non_exhaustive()
    }
}
