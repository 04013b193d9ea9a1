//! Run configuration.
//!
//! [`Settings`] is built exactly once at startup and handed to the sweeper.
//! Keys follow the GitHub Actions convention of exposing action inputs as
//! `INPUT_<NAME>` environment variables.

use crate::{AccessToken, OwnerName, ProjectName, RetentionPeriod, SweeperError};

pub const RETENTION_DAYS_KEY: &str = "INPUT_RETENTION-DAYS";
pub const PROJECT_NAME_KEY: &str = "INPUT_PROJECT-NAME";
pub const OWNER_ACCOUNT_KEY: &str = "INPUT_OWNER-ACCOUNT";
pub const ACCESS_TOKEN_KEY: &str = "INPUT_ACCESS-TOKEN";
pub const API_BASE_URL_KEY: &str = "INPUT_API-BASE-URL";
pub const DRY_RUN_KEY: &str = "INPUT_DRY-RUN";
pub const LOG_FORMAT_KEY: &str = "INPUT_LOG-FORMAT";

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com/repos";

/// Shape of the log lines written by the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Everything one sweep needs to know.
#[derive(Debug, Clone)]
pub struct Settings {
    pub retention: RetentionPeriod,
    pub owner: OwnerName,
    pub project: ProjectName,
    pub token: AccessToken,
    /// REST base without a trailing slash, e.g. `https://api.github.com/repos`.
    pub api_base_url: String,
    pub dry_run: bool,
    pub log_format: LogFormat,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, SweeperError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns `None` for unset keys.
    ///
    /// Blank required values are reported together, before the retention
    /// period is parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SweeperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_days = lookup(RETENTION_DAYS_KEY).unwrap_or_default();
        let project = ProjectName::new(lookup(PROJECT_NAME_KEY).unwrap_or_default());
        let owner = OwnerName::new(lookup(OWNER_ACCOUNT_KEY).unwrap_or_default());
        let token = AccessToken::new(lookup(ACCESS_TOKEN_KEY).unwrap_or_default());

        let mut blank = Vec::new();
        if raw_days.trim().is_empty() {
            blank.push(RETENTION_DAYS_KEY);
        }
        if project.is_none() {
            blank.push(PROJECT_NAME_KEY);
        }
        if owner.is_none() {
            blank.push(OWNER_ACCOUNT_KEY);
        }
        if token.is_none() {
            blank.push(ACCESS_TOKEN_KEY);
        }

        let (Some(project), Some(owner), Some(token)) = (project, owner, token) else {
            return Err(blank_settings(&blank));
        };
        if !blank.is_empty() {
            return Err(blank_settings(&blank));
        }

        let retention = parse_retention_days(&raw_days)?;

        let api_base_url = lookup(API_BASE_URL_KEY)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let dry_run = match lookup(DRY_RUN_KEY) {
            None => false,
            Some(v) => parse_bool(DRY_RUN_KEY, &v)?,
        };

        let log_format = match lookup(LOG_FORMAT_KEY) {
            None => LogFormat::default(),
            Some(v) => parse_log_format(&v)?,
        };

        Ok(Self {
            retention,
            owner,
            project,
            token,
            api_base_url,
            dry_run,
            log_format,
        })
    }
}

fn blank_settings(keys: &[&str]) -> SweeperError {
    SweeperError::Configuration {
        message: format!("required settings are empty: {}", keys.join(", ")),
    }
}

fn parse_retention_days(raw: &str) -> Result<RetentionPeriod, SweeperError> {
    raw.trim()
        .parse::<u32>()
        .map(RetentionPeriod::days)
        .map_err(|e| SweeperError::InputFormat {
            key: RETENTION_DAYS_KEY.to_string(),
            value: raw.to_string(),
            reason: format!("expected a non-negative whole number of days ({e})"),
        })
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, SweeperError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        _ => Err(SweeperError::InputFormat {
            key: key.to_string(),
            value: raw.to_string(),
            reason: "expected 'true' or 'false'".to_string(),
        }),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, SweeperError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(SweeperError::InputFormat {
            key: LOG_FORMAT_KEY.to_string(),
            value: raw.to_string(),
            reason: "expected 'text' or 'json'".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            (RETENTION_DAYS_KEY, "7"),
            (PROJECT_NAME_KEY, "widgets"),
            (OWNER_ACCOUNT_KEY, "octo-org"),
            (ACCESS_TOKEN_KEY, "ghp_abc"),
        ]
    }

    #[test]
    fn loads_required_settings_with_defaults() {
        let settings = Settings::from_lookup(lookup_from(&required())).unwrap();

        assert_eq!(settings.retention, RetentionPeriod::days(7));
        assert_eq!(settings.owner.as_str(), "octo-org");
        assert_eq!(settings.project.as_str(), "widgets");
        assert_eq!(settings.token.expose(), "ghp_abc");
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!settings.dry_run);
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn whitespace_only_value_is_a_configuration_error() {
        let mut pairs = required();
        pairs[1] = (PROJECT_NAME_KEY, "   ");

        let err = Settings::from_lookup(lookup_from(&pairs)).unwrap_err();

        match err {
            SweeperError::Configuration { message } => {
                assert!(message.contains(PROJECT_NAME_KEY));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn every_blank_key_is_named() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();

        let message = err.to_string();
        for key in [
            RETENTION_DAYS_KEY,
            PROJECT_NAME_KEY,
            OWNER_ACCOUNT_KEY,
            ACCESS_TOKEN_KEY,
        ] {
            assert!(message.contains(key), "{key} missing from '{message}'");
        }
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn blank_retention_days_wins_over_format_check() {
        let mut pairs = required();
        pairs[0] = (RETENTION_DAYS_KEY, " ");

        let err = Settings::from_lookup(lookup_from(&pairs)).unwrap_err();

        assert!(matches!(err, SweeperError::Configuration { .. }));
    }

    #[test]
    fn non_numeric_retention_days_is_an_input_format_error() {
        for bad in ["seven", "-3", "1.5"] {
            let mut pairs = required();
            pairs[0] = (RETENTION_DAYS_KEY, bad);

            let err = Settings::from_lookup(lookup_from(&pairs)).unwrap_err();

            match err {
                SweeperError::InputFormat { key, value, .. } => {
                    assert_eq!(key, RETENTION_DAYS_KEY);
                    assert_eq!(value, bad);
                }
                other => panic!("expected input format error for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn retention_days_is_trimmed() {
        let mut pairs = required();
        pairs[0] = (RETENTION_DAYS_KEY, " 30\n");

        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(settings.retention.as_days(), 30);
    }

    #[test]
    fn optional_settings_are_honoured() {
        let mut pairs = required();
        pairs.push((API_BASE_URL_KEY, "https://ghe.example.com/api/v3/repos/"));
        pairs.push((DRY_RUN_KEY, "TRUE"));
        pairs.push((LOG_FORMAT_KEY, "json"));

        let settings = Settings::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(settings.api_base_url, "https://ghe.example.com/api/v3/repos");
        assert!(settings.dry_run);
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_optional_settings_are_rejected() {
        let mut pairs = required();
        pairs.push((DRY_RUN_KEY, "maybe"));
        assert!(matches!(
            Settings::from_lookup(lookup_from(&pairs)),
            Err(SweeperError::InputFormat { .. })
        ));

        let mut pairs = required();
        pairs.push((LOG_FORMAT_KEY, "xml"));
        match Settings::from_lookup(lookup_from(&pairs)) {
            Err(SweeperError::InputFormat { key, value, .. }) => {
                assert_eq!(key, LOG_FORMAT_KEY);
                assert_eq!(value, "xml");
            }
            other => panic!("expected input format error, got {other:?}"),
        }
    }
}
