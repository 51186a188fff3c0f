//! Leveled, template-formatted logging to one text file per calendar day.
//!
//! A [`Logger`] compares each call's [`Severity`] against its threshold, renders
//! the entry through a [`Formatter`] (template tokens plus an indented context
//! block) and appends it to a [`Sink`]. The default sink is a [`DailyFileSink`].

pub mod call_site;
pub mod context;
pub mod error;
pub mod file_sink;
pub mod formatter;
pub mod level;
pub mod logger;
mod macros;
pub mod options;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use call_site::CallSite;
pub use error::{LogError, Result};
pub use file_sink::DailyFileSink;
pub use formatter::{Formatter, LogInput};
pub use level::{is_enabled, rank_of, Severity, SEVERITIES};
pub use logger::Logger;
pub use options::LoggerOptions;
pub use sink::{MemorySink, Sink};
pub use template::{Template, DEFAULT_FORMAT};
pub use timestamp::{system_clock, Clock, DateFormat, DEFAULT_DATE_FORMAT};

pub use serde_json::{json, Value};
