mod config;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::debug;

use daylog::{Logger, Severity, SEVERITIES};
use daylog_config::{config_dir, config_file_path, load_and_prepare};

use config::Settings;

#[derive(Parser)]
#[command(name = "daylog")]
#[command(about = "Append leveled, formatted entries to a log file per day")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags layered over the config file.
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Config file (default: $DAYLOG_CONFIG or ~/.daylog/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the daily log files
    #[arg(long, global = true)]
    directory: Option<String>,

    /// Threshold: the least severe level still recorded
    #[arg(long, global = true)]
    level: Option<String>,

    /// Line template, e.g. "%timestamp% %level% %message%"; empty for plain layout
    #[arg(long, global = true)]
    format: Option<String>,

    /// strftime pattern for %timestamp%
    #[arg(long, global = true)]
    timestamp: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log one message at the given severity
    Log {
        /// emergency, alert, critical, error, warning, notice, info or debug
        severity: String,
        /// Message text; may be omitted when --context is given
        message: Option<String>,
        /// JSON value appended as an indented context block
        #[arg(long)]
        context: Option<String>,
    },
    /// Append text verbatim, ignoring threshold and template
    Write { text: String },
    /// Load and validate the configuration, then print it
    Check,
    /// List severities with their ranks
    Levels,
}

fn main() -> Result<()> {
    let settings = Settings::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.diagnostics_level)),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .overrides
        .config
        .clone()
        .or_else(|| settings.config_path.clone())
        .unwrap_or_else(|| config_file_path(&config_dir()));
    debug!(path = %config_path.display(), "Using config file");

    match cli.command {
        Commands::Log {
            severity,
            message,
            context,
        } => {
            let severity: Severity = severity.parse()?;
            let context = context.as_deref().map(parse_context).transpose()?;
            let logger = build_logger(&config_path, &cli.overrides)?;
            run_log(&logger, severity, message, context)?;
        }
        Commands::Write { text } => {
            let logger = build_logger(&config_path, &cli.overrides)?;
            logger.write(&text)?;
        }
        Commands::Check => check(&config_path, &cli.overrides)?,
        Commands::Levels => {
            for severity in SEVERITIES {
                println!("{} {}", severity.rank(), severity.name());
            }
        }
    }

    Ok(())
}

fn build_logger(config_path: &Path, overrides: &ConfigArgs) -> Result<Logger> {
    let options = load_and_prepare(config_path, Some(&config_patch(overrides)))?.into_options()?;
    Ok(Logger::new(options)?)
}

fn run_log(
    logger: &Logger,
    severity: Severity,
    message: Option<String>,
    context: Option<Value>,
) -> Result<()> {
    match (message, context) {
        (Some(message), Some(context)) => daylog::log!(logger, severity, message, context)?,
        (Some(message), None) => daylog::log!(logger, severity, message)?,
        (None, Some(context)) => daylog::log!(logger, severity, context)?,
        (None, None) => bail!("Nothing to log: give a message, --context, or both"),
    }
    Ok(())
}

fn check(config_path: &Path, overrides: &ConfigArgs) -> Result<()> {
    let prepared = load_and_prepare(config_path, Some(&config_patch(overrides)))?;
    println!("# {}", config_path.display());
    println!("{}", serde_json::to_string_pretty(&prepared.config)?);
    for warning in &prepared.report.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &prepared.report.errors {
        println!("error: {}: {}", error.path, error.message);
    }
    if !prepared.report.is_valid() {
        bail!("{} configuration error(s)", prepared.report.errors.len());
    }
    Ok(())
}

fn parse_context(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("--context is not valid JSON: {raw}"))
}

/// Merge patch carrying only the flags that were given.
fn config_patch(args: &ConfigArgs) -> Value {
    let mut patch = Map::new();
    let flags = [
        ("directory", &args.directory),
        ("level", &args.level),
        ("format", &args.format),
        ("timestamp", &args.timestamp),
    ];
    for (key, value) in flags {
        if let Some(value) = value {
            patch.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    Value::Object(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use daylog::{LoggerOptions, MemorySink};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn patch_contains_only_given_flags() {
        let args = ConfigArgs {
            level: Some("error".into()),
            format: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config_patch(&args), json!({"level": "error", "format": ""}));
        assert_eq!(config_patch(&ConfigArgs::default()), json!({}));
    }

    #[test]
    fn parses_log_subcommand() {
        let cli = Cli::parse_from([
            "daylog",
            "--level",
            "warning",
            "log",
            "alert",
            "--context",
            "{\"foo\":\"bar\"}",
        ]);
        assert_eq!(cli.overrides.level.as_deref(), Some("warning"));
        match cli.command {
            Commands::Log { severity, message, context } => {
                assert_eq!(severity, "alert");
                assert!(message.is_none());
                assert_eq!(parse_context(&context.unwrap()).unwrap(), json!({"foo": "bar"}));
            }
            _ => panic!("expected log subcommand"),
        }
    }

    #[test]
    fn run_log_shapes() {
        let sink = Arc::new(MemorySink::new());
        let options = LoggerOptions::new().with_format("%function% %message%");
        let logger = Logger::with_sink(&options, sink.clone()).unwrap();

        run_log(&logger, Severity::Info, Some("hello".into()), None).unwrap();
        run_log(&logger, Severity::Alert, None, Some(json!({"foo": "bar"}))).unwrap();
        assert!(run_log(&logger, Severity::Info, None, None).is_err());

        assert_eq!(sink.contents(), "run_log hello\nrun_log \n    foo: \"bar\"\n");
    }

    #[test]
    fn invalid_context_is_reported() {
        let err = parse_context("{not json").unwrap_err();
        assert!(err.to_string().contains("--context"));
    }
}
