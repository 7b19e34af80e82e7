//! Startup checks on broker credentials and catalog source
//!
//! Missing credentials always stop the server. In production, any other
//! critical issue stops it too unless `BROKER_ALLOW_INSECURE_CONFIG` is set.

use std::fmt;

use secrecy::ExposeSecret;
use tracing::{error, info, warn};

use crate::config::AppConfig;

/// Environment variable that lets production start despite critical issues
pub const ALLOW_INSECURE_ENV: &str = "BROKER_ALLOW_INSECURE_CONFIG";

/// Passwords shorter than this are reported
pub const MIN_PASSWORD_LEN: usize = 16;

/// How loudly an issue is reported; ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// A weakness in the loaded configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingCredentials,
    ShortPassword,
    PasswordMatchesUsername,
    MissingCatalog,
}

impl ConfigIssue {
    /// Stable identifier, emitted as the `code` log field
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingCredentials => "BRK001",
            Self::ShortPassword => "BRK002",
            Self::PasswordMatchesUsername => "BRK003",
            Self::MissingCatalog => "BRK004",
        }
    }

    /// What the operator should change
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::MissingCredentials => {
                "set security.username and security.password (BROKER__SECURITY__USERNAME / BROKER__SECURITY__PASSWORD)"
            },
            Self::ShortPassword => "use a long random password",
            Self::PasswordMatchesUsername => "choose a password unrelated to the username",
            Self::MissingCatalog => "set catalog.path to a JSON catalog document",
        }
    }

    const fn severity(self, production: bool) -> Severity {
        match (self, production) {
            (Self::MissingCredentials, _)
            | (Self::ShortPassword | Self::PasswordMatchesUsername, true) => Severity::Critical,
            (Self::ShortPassword | Self::PasswordMatchesUsername, false)
            | (Self::MissingCatalog, true) => Severity::Warning,
            (Self::MissingCatalog, false) => Severity::Info,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => f.write_str("broker credentials are not configured"),
            Self::ShortPassword => {
                write!(f, "broker password is shorter than {MIN_PASSWORD_LEN} characters")
            },
            Self::PasswordMatchesUsername => f.write_str("broker password equals the username"),
            Self::MissingCatalog => {
                f.write_str("no catalog file configured; an empty catalog will be advertised")
            },
        }
    }
}

/// An issue together with the severity it carries in the current environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub issue: ConfigIssue,
    pub severity: Severity,
}

/// Inspects an [`AppConfig`] before the listener is bound
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityValidator;

impl SecurityValidator {
    /// Collect every issue in `config`, most severe first
    #[must_use]
    pub fn validate(config: &AppConfig) -> Vec<Finding> {
        let security = &config.security;
        let password = security.password.expose_secret();

        let mut issues = Vec::new();
        if !security.has_credentials() {
            issues.push(ConfigIssue::MissingCredentials);
        }
        if !password.is_empty() {
            if password.chars().count() < MIN_PASSWORD_LEN {
                issues.push(ConfigIssue::ShortPassword);
            }
            if password == security.username {
                issues.push(ConfigIssue::PasswordMatchesUsername);
            }
        }
        if config.catalog.path.is_none() {
            issues.push(ConfigIssue::MissingCatalog);
        }

        let production = config.is_production();
        let mut findings: Vec<Finding> = issues
            .into_iter()
            .map(|issue| Finding {
                issue,
                severity: issue.severity(production),
            })
            .collect();
        findings.sort_by(|a, b| b.severity.cmp(&a.severity));
        findings
    }

    /// Whether the server must refuse to start
    #[must_use]
    pub fn should_block_startup(config: &AppConfig, findings: &[Finding]) -> bool {
        if !config.security.has_credentials() {
            return true;
        }

        let allow_insecure =
            std::env::var(ALLOW_INSECURE_ENV).is_ok_and(|v| v == "true" || v == "1");
        config.is_production()
            && !allow_insecure
            && findings.iter().any(|f| f.severity == Severity::Critical)
    }

    /// Emit one event per finding at the level matching its severity
    pub fn log_findings(findings: &[Finding]) {
        for Finding { issue, severity } in findings {
            let (code, hint) = (issue.code(), issue.hint());
            match severity {
                Severity::Critical => error!(code, hint, "{issue}"),
                Severity::Warning => warn!(code, hint, "{issue}"),
                Severity::Info => info!(code, hint, "{issue}"),
            }
        }
    }
}
