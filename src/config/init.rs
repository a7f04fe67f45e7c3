use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::schema::{
    Config, GeneratorConfig, DEFAULT_CREATE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SKILLS_PATH,
    DEFAULT_VENTURES_PATH,
};
use super::get_config_path;
use crate::explain::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::scoring::{
    ScoringConfig, DEFAULT_COVERAGE_WEIGHT, DEFAULT_PREVALENCE_WEIGHT, DEFAULT_QUALITY_WEIGHT,
};

const HEADER: &str = "\
# venture-odds configuration
# API_BASE and GEMINI_API_KEY in the environment (or a .env file) take precedence.
";

/// A config with every default spelled out, for users to edit
fn starter_config() -> Config {
    Config {
        api_base: Some("http://localhost:5000".to_string()),
        ventures_path: Some(DEFAULT_VENTURES_PATH.to_string()),
        skills_path: Some(DEFAULT_SKILLS_PATH.to_string()),
        request_timeout: Some(DEFAULT_REQUEST_TIMEOUT.to_string()),
        create_timeout: Some(DEFAULT_CREATE_TIMEOUT.to_string()),
        generator: Some(GeneratorConfig {
            model: Some(DEFAULT_GEMINI_MODEL.to_string()),
            base_url: Some(DEFAULT_GEMINI_BASE_URL.to_string()),
            timeout: Some("15s".to_string()),
        }),
        scoring: Some(ScoringConfig {
            quality_weight: Some(DEFAULT_QUALITY_WEIGHT),
            prevalence_weight: Some(DEFAULT_PREVALENCE_WEIGHT),
            coverage_weight: Some(DEFAULT_COVERAGE_WEIGHT),
        }),
    }
}

/// Write a starter config file atomically and return where it went.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = path.unwrap_or_else(get_config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    write_atomic(&path, &render_starter_config()?)?;
    Ok(path)
}

fn render_starter_config() -> Result<String> {
    let yaml = serde_saphyr::to_string(&starter_config()).context("Failed to serialize config")?;
    Ok(format!("{}{}", HEADER, yaml))
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;
    Ok(())
}
