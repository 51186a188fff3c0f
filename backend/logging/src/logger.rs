//! Leveled logger
//!
//! Checks the threshold, formats through a [`Formatter`] and appends to a
//! [`Sink`]. Every call is synchronous: when it returns `Ok`, the entry has been
//! handed to the sink. Configuration setters take `&mut self`, so a logger
//! shared behind an `Arc` keeps the configuration it was shared with.

use serde_json::Value;
use tracing::debug;

use crate::call_site::CallSite;
use crate::error::Result;
use crate::file_sink::DailyFileSink;
use crate::formatter::{Formatter, LogInput};
use crate::level::Severity;
use crate::options::LoggerOptions;
use crate::sink::Sink;
use crate::template::Template;
use crate::timestamp::{system_clock, Clock, DateFormat};

pub struct Logger {
    formatter: Formatter,
    sink: Box<dyn Sink>,
    clock: Clock,
}

impl Logger {
    /// Logger writing to `Log_YYYY-MM-DD.txt` under `options.directory`.
    ///
    /// The directory is not touched until the first entry is written; a missing
    /// directory setting surfaces then as `SinkUnavailable`.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        let clock = system_clock();
        let sink = DailyFileSink::with_clock(options.directory.clone(), clock.clone());
        Ok(Self::with_sink(&options, sink)?.with_clock(clock))
    }

    pub fn with_sink(options: &LoggerOptions, sink: impl Sink + 'static) -> Result<Self> {
        let formatter = options.formatter()?;
        debug!(
            threshold = %formatter.threshold(),
            format = formatter.template().as_str(),
            "Logger configured"
        );
        Ok(Self {
            formatter,
            sink: Box::new(sink),
            clock: system_clock(),
        })
    }

    /// Replaces the clock used for `%timestamp%`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn threshold(&self) -> Severity {
        self.formatter.threshold()
    }

    pub fn date_format(&self) -> &str {
        self.formatter.date_format().as_str()
    }

    pub fn format(&self) -> &str {
        self.formatter.template().as_str()
    }

    pub fn set_threshold(&mut self, threshold: Severity) {
        self.formatter.set_threshold(threshold);
    }

    pub fn set_date_format(&mut self, pattern: &str) -> Result<()> {
        self.formatter.set_date_format(DateFormat::new(pattern)?);
        Ok(())
    }

    /// Replaces the line template. An empty template selects the plain layout.
    pub fn set_format(&mut self, template: &str) {
        self.formatter.set_template(Template::new(template));
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.formatter.is_enabled(severity)
    }

    pub fn log(
        &self,
        severity: Severity,
        input: impl Into<LogInput>,
        context: Option<&Value>,
    ) -> Result<()> {
        self.log_at(severity, input, context, None)
    }

    /// Like [`log`](Self::log), with the call site used for `%class%`,
    /// `%function%`, `%file%` and `%line%`. The logging macros supply it.
    pub fn log_at(
        &self,
        severity: Severity,
        input: impl Into<LogInput>,
        context: Option<&Value>,
        site: Option<&CallSite>,
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let site = site.filter(|_| self.formatter.template().uses_call_site());
        let now = (self.clock)();
        match self.formatter.format_at(&now, severity, &input.into(), context, site)? {
            Some(entry) => self.sink.append(&entry),
            None => Ok(()),
        }
    }

    /// Appends `raw` verbatim, bypassing the threshold and the template.
    pub fn write(&self, raw: &str) -> Result<()> {
        self.sink.append(raw)
    }
}

macro_rules! severity_methods {
    ($($name:ident, $with:ident => $severity:ident;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Logs at `", stringify!($name), "`. A structured value on its own becomes the context block.")]
                pub fn $name(&self, input: impl Into<LogInput>) -> Result<()> {
                    self.log(Severity::$severity, input, None)
                }

                #[doc = concat!("Logs `message` at `", stringify!($name), "` with `context` appended.")]
                pub fn $with(&self, message: &str, context: &Value) -> Result<()> {
                    self.log(Severity::$severity, message, Some(context))
                }
            )*
        }
    };
}

severity_methods! {
    emergency, emergency_with => Emergency;
    alert, alert_with => Alert;
    critical, critical_with => Critical;
    error, error_with => Error;
    warning, warning_with => Warning;
    notice, notice_with => Notice;
    info, info_with => Info;
    debug, debug_with => Debug;
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}
