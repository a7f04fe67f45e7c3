use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

pub const DEFAULT_VENTURES_PATH: &str = "/api/v2/Startup";
pub const DEFAULT_SKILLS_PATH: &str = "/api/v2/Habilidade";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "6s";
pub const DEFAULT_CREATE_TIMEOUT: &str = "8s";

/// Contents of `config.yaml`. Every field is optional.
///
/// Example YAML:
/// ```yaml
/// api_base: "http://localhost:5000"
/// request_timeout: "6s"
/// generator:
///   model: "gemini-2.0-flash"
/// scoring:
///   quality_weight: 0.6
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the venture/skill service. `API_BASE` in the environment wins.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Venture index and creation path (default: /api/v2/Startup)
    #[serde(default)]
    pub ventures_path: Option<String>,

    /// Skill catalogue path (default: /api/v2/Habilidade)
    #[serde(default)]
    pub skills_path: Option<String>,

    /// Timeout for each read call, humantime format (default: 6s)
    #[serde(default)]
    pub request_timeout: Option<String>,

    /// Timeout for the creation call (default: 8s)
    #[serde(default)]
    pub create_timeout: Option<String>,

    #[serde(default)]
    pub generator: Option<GeneratorConfig>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

/// Settings for the external text generator. The key itself only comes from the environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub base_url: Option<String>,

    /// humantime format (default: 15s)
    #[serde(default)]
    pub timeout: Option<String>,
}
