//! Line templates with `%token%` placeholders.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Template used when none is configured.
pub const DEFAULT_FORMAT: &str = "%timestamp% %level% %message%";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(timestamp|level|class|function|file|line|message)%").unwrap()
});
static ANY_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%([A-Za-z_]+)%").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Timestamp,
    Level,
    Class,
    Function,
    File,
    Line,
    Message,
}

impl Token {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "timestamp" => Self::Timestamp,
            "level" => Self::Level,
            "class" => Self::Class,
            "function" => Self::Function,
            "file" => Self::File,
            "line" => Self::Line,
            "message" => Self::Message,
            _ => return None,
        })
    }

    pub const fn is_call_site(self) -> bool {
        matches!(self, Self::Class | Self::Function | Self::File | Self::Line)
    }
}

/// A parsed line template. An empty template selects the plain bracketed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    uses_call_site: bool,
    uses_timestamp: bool,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens: Vec<Token> = TOKEN_RE
            .captures_iter(&source)
            .filter_map(|caps| Token::from_name(&caps[1]))
            .collect();
        Self {
            uses_call_site: tokens.iter().any(|t| t.is_call_site()),
            uses_timestamp: tokens.contains(&Token::Timestamp),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_plain(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether any of `%class%`, `%function%`, `%file%`, `%line%` appear.
    pub fn uses_call_site(&self) -> bool {
        self.uses_call_site
    }

    pub fn uses_timestamp(&self) -> bool {
        self.uses_timestamp
    }

    /// Substitutes every recognized token in one pass. Substituted values are
    /// not rescanned, and unrecognized `%tokens%` are left as written.
    pub fn render<'a>(&self, mut resolve: impl FnMut(Token) -> Cow<'a, str>) -> String {
        TOKEN_RE
            .replace_all(&self.source, |caps: &Captures| match Token::from_name(&caps[1]) {
                Some(token) => resolve(token).into_owned(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

/// `%name%` placeholders in `source` that the formatter does not recognize.
pub fn unknown_tokens(source: &str) -> Vec<String> {
    ANY_TOKEN_RE
        .captures_iter(source)
        .filter(|caps| Token::from_name(&caps[1]).is_none())
        .map(|caps| caps[0].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(token: Token) -> Cow<'static, str> {
        Cow::Borrowed(match token {
            Token::Timestamp => "T",
            Token::Level => "INFO",
            Token::Message => "hello",
            Token::Class => "Worker",
            Token::Function => "run",
            Token::File => "src/main.rs",
            Token::Line => "12",
        })
    }

    #[test]
    fn replaces_every_occurrence() {
        let template = Template::new("%level% %message% [%level%]");
        assert_eq!(template.render(fill), "INFO hello [INFO]");
    }

    #[test]
    fn leaves_unknown_tokens_alone() {
        let template = Template::new("%host% %message% 100%");
        assert_eq!(template.render(fill), "%host% hello 100%");
        assert_eq!(unknown_tokens(template.as_str()), ["%host%"]);
    }

    #[test]
    fn tracks_call_site_and_timestamp_usage() {
        let default = Template::default();
        assert!(!default.uses_call_site());
        assert!(default.uses_timestamp());

        let with_site = Template::new("%file%:%line% %message%");
        assert!(with_site.uses_call_site());
        assert!(!with_site.uses_timestamp());
        assert_eq!(with_site.render(fill), "src/main.rs:12 hello");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = Template::new("%message%");
        let out = template.render(|_| Cow::Borrowed("%level%"));
        assert_eq!(out, "%level%");
    }

    #[test]
    fn empty_template_is_plain() {
        assert!(Template::new("").is_plain());
        assert!(!Template::default().is_plain());
    }
}
