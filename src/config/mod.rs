mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{
    Config, GeneratorConfig, DEFAULT_CREATE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SKILLS_PATH,
    DEFAULT_VENTURES_PATH,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::explain::GeminiConfig;
use crate::scoring::{validate_scoring, ScoringConfig};

/// Environment variable that overrides `api_base`
pub const ENV_API_BASE: &str = "API_BASE";

/// Get the config directory path (~/.config/venture-odds/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("venture-odds")
}

/// Get the default config file path (~/.config/venture-odds/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path,
///   and a missing default file simply means "all defaults".
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

fn parse_timeout(value: Option<&str>, default: &str) -> Result<Duration> {
    let raw = value.unwrap_or(default);
    humantime::parse_duration(raw.trim()).with_context(|| format!("invalid duration '{}'", raw))
}

impl Config {
    /// Layer environment values over the file. `lookup` is `std::env::var` in production.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            self.api_base = Some(base.trim().to_string());
        }
        self
    }

    pub fn api_base(&self) -> Result<&str> {
        self.api_base
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .with_context(|| {
                format!(
                    "No service base URL configured. Set {} or api_base in {}",
                    ENV_API_BASE,
                    get_config_path().display()
                )
            })
    }

    pub fn ventures_path(&self) -> &str {
        self.ventures_path.as_deref().unwrap_or(DEFAULT_VENTURES_PATH)
    }

    pub fn skills_path(&self) -> &str {
        self.skills_path.as_deref().unwrap_or(DEFAULT_SKILLS_PATH)
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        parse_timeout(self.request_timeout.as_deref(), DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn create_timeout(&self) -> Result<Duration> {
        parse_timeout(self.create_timeout.as_deref(), DEFAULT_CREATE_TIMEOUT)
    }

    pub fn scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    /// Generator settings for the given credential; `None` when there is no credential
    pub fn gemini_config(&self, api_key: Option<String>) -> Result<Option<GeminiConfig>> {
        let Some(api_key) = api_key else {
            return Ok(None);
        };
        let mut gemini = GeminiConfig::new(api_key);
        if let Some(ref generator) = self.generator {
            if let Some(ref model) = generator.model {
                gemini.model = model.clone();
            }
            if let Some(ref base_url) = generator.base_url {
                gemini.base_url = base_url.clone();
            }
            if let Some(ref timeout) = generator.timeout {
                gemini.timeout = humantime::parse_duration(timeout.trim())
                    .with_context(|| format!("invalid duration '{}'", timeout))?;
            }
        }
        Ok(Some(gemini))
    }
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(e) = config.request_timeout() {
        errors.push(format!("request_timeout: {:#}", e));
    }
    if let Err(e) = config.create_timeout() {
        errors.push(format!("create_timeout: {:#}", e));
    }
    if let Some(ref generator) = config.generator {
        if let Some(ref timeout) = generator.timeout {
            if let Err(e) = humantime::parse_duration(timeout.trim()) {
                errors.push(format!("generator.timeout: invalid duration '{}' - {}", timeout, e));
            }
        }
    }
    for (name, path) in [
        ("ventures_path", config.ventures_path()),
        ("skills_path", config.skills_path()),
    ] {
        if path.trim().is_empty() {
            errors.push(format!("{}: must not be empty", name));
        }
    }
    if let Err(scoring_errors) = validate_scoring(&config.scoring()) {
        errors.extend(scoring_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("venture-odds-test-{}.yaml", name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let path = temp_config(
            "full",
            r#"
api_base: "http://svc:5000"
ventures_path: "/api/v3/Startup"
request_timeout: "2s"
generator:
  model: "gemini-pro"
  timeout: "30s"
scoring:
  quality_weight: 0.5
  prevalence_weight: 0.3
  coverage_weight: 0.2
"#,
        );
        let config = load_config(Some(path.clone())).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.api_base().unwrap(), "http://svc:5000");
        assert_eq!(config.ventures_path(), "/api/v3/Startup");
        assert_eq!(config.skills_path(), DEFAULT_SKILLS_PATH);
        assert_eq!(config.request_timeout().unwrap(), Duration::from_secs(2));
        assert_eq!(config.create_timeout().unwrap(), Duration::from_secs(8));
        assert_eq!(config.scoring().weights().quality, 0.5);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = env::temp_dir().join("venture-odds-test-does-not-exist.yaml");
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn test_unknown_field_is_error() {
        let path = temp_config("unknown", "queries: []\n");
        let result = load_config(Some(path.clone()));
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api_base().is_err());
        assert_eq!(config.ventures_path(), DEFAULT_VENTURES_PATH);
        assert_eq!(config.request_timeout().unwrap(), Duration::from_secs(6));
        assert_eq!(config.scoring(), ScoringConfig::default());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_env_overrides_api_base() {
        let config = Config {
            api_base: Some("http://from-file".to_string()),
            ..Default::default()
        };
        let config = config.with_env_overrides(|key| {
            (key == ENV_API_BASE).then(|| " http://from-env ".to_string())
        });
        assert_eq!(config.api_base().unwrap(), "http://from-env");
    }

    #[test]
    fn test_blank_env_keeps_file_value() {
        let config = Config {
            api_base: Some("http://from-file".to_string()),
            ..Default::default()
        };
        let config = config.with_env_overrides(|_| Some("   ".to_string()));
        assert_eq!(config.api_base().unwrap(), "http://from-file");
    }

    #[test]
    fn test_gemini_config_requires_key() {
        let config = Config::default();
        assert!(config.gemini_config(None).unwrap().is_none());

        let gemini = config.gemini_config(Some("k".to_string())).unwrap().unwrap();
        assert_eq!(gemini.api_key, "k");
        assert_eq!(gemini.model, crate::explain::gemini::DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_gemini_config_overrides() {
        let config = Config {
            generator: Some(GeneratorConfig {
                model: Some("gemini-pro".to_string()),
                base_url: Some("http://localhost:1".to_string()),
                timeout: Some("3s".to_string()),
            }),
            ..Default::default()
        };
        let gemini = config.gemini_config(Some("k".to_string())).unwrap().unwrap();
        assert_eq!(gemini.model, "gemini-pro");
        assert_eq!(gemini.base_url, "http://localhost:1");
        assert_eq!(gemini.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = Config {
            request_timeout: Some("soon".to_string()),
            skills_path: Some(" ".to_string()),
            scoring: Some(ScoringConfig {
                quality_weight: Some(0.9),
                ..Default::default()
            }),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("request_timeout"));
        assert!(errors[1].starts_with("skills_path"));
        assert!(errors[2].contains("sum to 1.0"));
    }
}
