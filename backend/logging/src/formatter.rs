//! Message formatting.
//!
//! Builds the exact text handed to a sink: the template (or the plain
//! `[timestamp] [LEVEL] message` layout), a line terminator, and the context
//! block indented one level below the header when there is any context.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::call_site::CallSite;
use crate::context;
use crate::error::Result;
use crate::level::Severity;
use crate::template::{Template, Token};
use crate::timestamp::{self, DateFormat};

/// First argument of a log call: either message text or a structured value.
///
/// A structured value logged without a separate context becomes the context
/// block and the message is left empty. `false` and zero are the exception:
/// they carry nothing to list, so they are written as message text (`""` and
/// `0`).
#[derive(Debug, Clone, PartialEq)]
pub enum LogInput {
    Text(String),
    Structured(Value),
}

impl From<&str> for LogInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for LogInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for LogInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Value> for LogInput {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    threshold: Severity,
    template: Template,
    date_format: DateFormat,
}

impl Formatter {
    pub fn new(threshold: Severity, template: Template, date_format: DateFormat) -> Self {
        Self {
            threshold,
            template,
            date_format,
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    pub fn set_template(&mut self, template: Template) {
        self.template = template;
    }

    pub fn set_date_format(&mut self, date_format: DateFormat) {
        self.date_format = date_format;
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.is_enabled(self.threshold)
    }

    /// Formats one entry stamped with the current time. `None` means the
    /// severity is below the threshold and nothing should be written.
    pub fn format(
        &self,
        severity: Severity,
        input: &LogInput,
        context: Option<&Value>,
        site: Option<&CallSite>,
    ) -> Result<Option<String>> {
        self.format_at(&timestamp::now(), severity, input, context, site)
    }

    pub fn format_at(
        &self,
        now: &DateTime<FixedOffset>,
        severity: Severity,
        input: &LogInput,
        context: Option<&Value>,
        site: Option<&CallSite>,
    ) -> Result<Option<String>> {
        if !self.is_enabled(severity) {
            return Ok(None);
        }

        let (message, context) = split_input(input, context);
        let mut entry = if self.template.is_plain() {
            format!(
                "[{}] [{}] {}",
                self.date_format.render(now)?,
                severity.label(),
                message
            )
        } else {
            self.render_template(now, severity, &message, site)?
        };

        if let Some(context) = context.filter(|c| !context::is_empty(c)) {
            entry.push('\n');
            entry.push_str(&context::indent(&context::render(context)));
        }
        entry.push('\n');
        Ok(Some(entry))
    }

    fn render_template(
        &self,
        now: &DateTime<FixedOffset>,
        severity: Severity,
        message: &str,
        site: Option<&CallSite>,
    ) -> Result<String> {
        let stamp = if self.template.uses_timestamp() {
            self.date_format.render(now)?
        } else {
            String::new()
        };

        Ok(self.template.render(|token| match token {
            Token::Timestamp => Cow::Borrowed(stamp.as_str()),
            Token::Level => Cow::Borrowed(severity.label()),
            Token::Message => Cow::Borrowed(message),
            Token::Class => Cow::Borrowed(site.map_or("", CallSite::class)),
            Token::Function => Cow::Borrowed(site.map_or("", CallSite::function)),
            Token::File => Cow::Borrowed(site.map_or("", CallSite::file)),
            Token::Line => site.map_or(Cow::Borrowed(""), |s| Cow::Owned(s.line().to_string())),
        }))
    }
}

/// Resolves the message text and the context to append.
fn split_input<'a>(
    input: &'a LogInput,
    context: Option<&'a Value>,
) -> (Cow<'a, str>, Option<&'a Value>) {
    match (input, context) {
        (LogInput::Text(text), context) => (Cow::Borrowed(text.as_str()), context),
        (LogInput::Structured(Value::String(text)), context) => (Cow::Borrowed(text.as_str()), context),
        (LogInput::Structured(Value::Bool(false)), None) => (Cow::Borrowed(""), None),
        (LogInput::Structured(Value::Number(n)), None) if n.as_f64() == Some(0.0) => {
            (Cow::Owned(n.to_string()), None)
        }
        (LogInput::Structured(value), None) => (Cow::Borrowed(""), Some(value)),
        (LogInput::Structured(value), Some(context)) => (Cow::Owned(value.to_string()), Some(context)),
    }
}
