use crate::utils::error::{Result, SolverError};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 指向 TOML 設定檔的環境變數
pub const SETTINGS_ENV_VAR: &str = "CIPHER_SOLVERS_CONFIG";

static ENV_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    pub dispatch: DispatchSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Unbounded when absent.
    pub max_concurrency: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub json: bool,
}

impl SolverSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SolverError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SolverError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Reads the file named by `CIPHER_SOLVERS_CONFIG`, or returns defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SETTINGS_ENV_VAR) {
            Ok(path) => {
                validation::validate_path(SETTINGS_ENV_VAR, &path)?;
                let settings = Self::from_file(&path)?;
                settings.validate()?;
                Ok(settings)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${MAX_WORKERS})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.dispatch.max_concurrency
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.dispatch.max_concurrency {
            validation::validate_positive_number("dispatch.max_concurrency", limit, 1)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_non_empty_string("logging.level", level)?;
            validation::validate_one_of(
                "logging.level",
                &level.to_lowercase(),
                &["trace", "debug", "info", "warn", "error", "off"],
            )?;
        }

        Ok(())
    }
}
