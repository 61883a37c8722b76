//! `resolver-check` entry point.
//!
//! A composition root around the [`resolver`] and [`dubbo`] crates, useful
//! when preparing a deployment:
//!
//! 1. **Wire observability**: install `tracing-subscriber` with an
//!    `EnvFilter` (`RUST_LOG`, default `info`). Setting
//!    `RESOLVER_CHECK_LOG_FORMAT=json` switches to the JSON formatter. Logs go
//!    to stderr so stdout stays machine-readable.
//! 2. **Run a command**:
//!    - `resolver-check config <path.json>`: load a resolver options draft,
//!      finalize it, and print the finalized configuration as JSON.
//!    - `resolver-check payload <code>`: classify a response payload code and
//!      print its kind and body layout as JSON.
//!
//! Any failure (unreadable file, malformed JSON, missing required field,
//! unknown payload code) exits non-zero with the error chain on stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dubbo::ResponsePayloadKind;
use resolver::{ResolverConfig, ResolverOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log formatter (`json` or anything else).
const LOG_FORMAT_ENV: &str = "RESOLVER_CHECK_LOG_FORMAT";

const USAGE: &str = "usage: resolver-check config <path.json> | resolver-check payload <code>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Config(PathBuf),
    Payload(i32),
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let stdout = std::io::stdout();
    run(command, &mut stdout.lock())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [cmd, path] if cmd == "config" => Ok(Command::Config(PathBuf::from(path))),
        [cmd, code] if cmd == "payload" => {
            let code = code
                .parse::<i32>()
                .with_context(|| format!("payload code '{code}' is not a 32-bit integer"))?;
            Ok(Command::Payload(code))
        }
        _ => bail!(USAGE),
    }
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    let report = match command {
        Command::Config(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config = check_config(&contents)
                .with_context(|| format!("invalid resolver configuration in {}", path.display()))?;
            serde_json::to_value(&config)?
        }
        Command::Payload(code) => describe_payload(code)?,
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn check_config(contents: &str) -> Result<ResolverConfig> {
    let draft: ResolverOptions =
        serde_json::from_str(contents).context("malformed resolver options JSON")?;
    let config = draft.finalize()?;

    info!(
        servers = ?config.servers(),
        interface_name = config.interface_name(),
        registry_group = config.registry_group(),
        session_timeout_ms = config.session_timeout().as_millis() as u64,
        "Resolver configuration is valid"
    );
    Ok(config)
}

fn describe_payload(code: i32) -> Result<serde_json::Value> {
    let kind = ResponsePayloadKind::classify(code)?;
    info!(code, kind = %kind, "Classified response payload code");

    Ok(serde_json::json!({
        "code": kind.code(),
        "kind": kind,
        "attachments": kind.has_attachments(),
        "body_fields": kind.body_fields(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_config_command() {
        assert_eq!(
            parse_args(&args(&["config", "resolver.json"])).unwrap(),
            Command::Config(PathBuf::from("resolver.json"))
        );
    }

    #[test]
    fn test_parse_payload_command_accepts_negative_codes() {
        assert_eq!(
            parse_args(&args(&["payload", "-1"])).unwrap(),
            Command::Payload(-1)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_usage() {
        let err = parse_args(&args(&["frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("usage"));
        assert!(parse_args(&args(&["payload", "four"])).is_err());
    }

    #[test]
    fn test_check_config_applies_defaults() {
        let config = check_config(
            r#"{"servers": ["127.0.0.1:2181"], "interface_name": "org.example.GreetProvider"}"#,
        )
        .unwrap();
        assert_eq!(config.registry_group(), resolver::DEFAULT_REGISTRY_GROUP);
        assert_eq!(config.session_timeout(), resolver::DEFAULT_SESSION_TIMEOUT);
    }

    #[test]
    fn test_check_config_surfaces_validation_message() {
        let err = check_config(r#"{"interface_name": "x"}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<resolver::ConfigError>(),
            Some(&resolver::ConfigError::MissingServers)
        );
    }

    #[test]
    fn test_check_config_rejects_malformed_json() {
        let err = check_config("{ not json").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_run_payload_prints_body_layout() {
        let mut out = Vec::new();
        run(Command::Payload(4), &mut out).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["kind"], "value_with_attachments");
        assert_eq!(report["body_fields"], serde_json::json!(["value", "attachments"]));
        assert_eq!(report["attachments"], true);
    }

    #[test]
    fn test_run_payload_unknown_code_fails() {
        let mut out = Vec::new();
        let err = run(Command::Payload(6), &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<dubbo::PayloadError>(),
            Some(&dubbo::PayloadError::UnknownPayloadKind { code: 6 })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_config_reports_unreadable_file() {
        let mut out = Vec::new();
        let err = run(
            Command::Config(PathBuf::from("/nonexistent/resolver.json")),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
