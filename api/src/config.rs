//! Process configuration: environment settings and the logging sink.

use anyhow::{Context, Result};
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::database::DEFAULT_DATABASE_URL;

pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_LLM_API_MODEL: &str = "gpt-4.1-nano";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl LlmConfig {
    /// Reads `LLM_API_KEY` (or `OPENAI_API_KEY`), `LLM_API_URL` and `LLM_API_MODEL`
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("LLM_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .context("LLM_API_KEY (or OPENAI_API_KEY) not set in environment")?;
        let api_url = env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_LLM_API_URL.to_string());
        let model =
            env::var("LLM_API_MODEL").unwrap_or_else(|_| DEFAULT_LLM_API_MODEL.to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }
}

pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Where log output goes. Stdout is reserved for the tool protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

/// Installs the global tracing subscriber. Call once at process start.
pub fn init_tracing(sink: &LogSink) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    match sink {
        LogSink::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install tracing subscriber")?,
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let orig: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();
        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
        let result = f();
        for (k, v) in orig {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
        result
    }

    #[test]
    #[serial]
    fn test_llm_config_requires_key() {
        with_env(
            &[("LLM_API_KEY", None), ("OPENAI_API_KEY", None)],
            || {
                let err = LlmConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("LLM_API_KEY"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_llm_config_defaults() {
        with_env(
            &[
                ("LLM_API_KEY", Some("sk-test")),
                ("LLM_API_URL", None),
                ("LLM_API_MODEL", None),
            ],
            || {
                let config = LlmConfig::from_env().unwrap();
                assert_eq!(config.api_key, "sk-test");
                assert_eq!(config.api_url, DEFAULT_LLM_API_URL);
                assert_eq!(config.model, DEFAULT_LLM_API_MODEL);
            },
        );
    }

    #[test]
    #[serial]
    fn test_llm_config_falls_back_to_openai_key() {
        with_env(
            &[
                ("LLM_API_KEY", None),
                ("OPENAI_API_KEY", Some("sk-openai")),
                ("LLM_API_MODEL", Some("gpt-4o-mini")),
            ],
            || {
                let config = LlmConfig::from_env().unwrap();
                assert_eq!(config.api_key, "sk-openai");
                assert_eq!(config.model, "gpt-4o-mini");
            },
        );
    }

    #[test]
    #[serial]
    fn test_database_url_default() {
        with_env(&[("DATABASE_URL", None)], || {
            assert_eq!(database_url_from_env(), DEFAULT_DATABASE_URL);
        });
        with_env(&[("DATABASE_URL", Some("sqlite::memory:"))], || {
            assert_eq!(database_url_from_env(), "sqlite::memory:");
        });
    }

    #[test]
    fn test_file_sink_reports_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("server.log");

        let err = init_tracing(&LogSink::File(path)).unwrap_err();

        assert!(err.to_string().contains("Failed to open log file"));
    }
}
