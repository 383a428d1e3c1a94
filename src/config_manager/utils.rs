use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::config::AppConfig;

/// Prefix of environment variables that override config values,
/// e.g. `LABELER_LABEL_SERVICE__BASE_URL`
pub const ENV_PREFIX: &str = "LABELER";

/// Candidate config file locations, in lookup order
pub fn config_candidates() -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    let mut paths: Vec<PathBuf> = Vec::new();
    if let Ok(path) = std::env::var("CONFIG_PATH") {
        paths.push(PathBuf::from(path));
    }
    for name in ["conf.yaml", "conf.yml", "conf.json"] {
        paths.push(PathBuf::from(name));
        if let Some(dir) = &exe_dir {
            paths.push(dir.join(name));
        }
    }
    paths
}

/// Read a config file, dropping a UTF-8 BOM if present
pub fn read_config_text(config_path: &Path) -> Result<String> {
    let mut bytes = fs::read(config_path)?;
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }
    let content = String::from_utf8(bytes)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path.display());
    }
    Ok(content)
}

/// Replace `${VAR_NAME}` references using `lookup`. Unknown variables are left as-is.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Guess the file format from the extension; YAML when unknown
pub fn format_for_path(path: &Path) -> ::config::FileFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("json") => ::config::FileFormat::Json,
        Some("toml") => ::config::FileFormat::Toml,
        _ => ::config::FileFormat::Yaml,
    }
}

/// Merge defaults, an optional file body, and environment overrides.
///
/// `env` replaces the process environment when given.
pub fn build_config(
    file: Option<(&str, ::config::FileFormat)>,
    env: Option<HashMap<String, String>>,
) -> Result<AppConfig> {
    let defaults = ::config::Config::try_from(&AppConfig::default())?;
    let mut builder = ::config::Config::builder().add_source(defaults);

    if let Some((content, format)) = file {
        builder = builder.add_source(::config::File::from_str(content, format));
    }

    let environment = ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(env);

    let config: AppConfig = builder.add_source(environment).build()?.try_deserialize()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

/// Load the config file at `path` with `${VAR}` substitution and env overrides
pub fn load_from_path(path: &Path) -> Result<AppConfig> {
    let raw = read_config_text(path)?;
    let content = substitute_env_vars(&raw, |name| std::env::var(name).ok())?;
    build_config(Some((&content, format_for_path(path))), None)
}

/// Load from the first existing candidate file, or from defaults and the
/// environment alone when none exists.
///
/// Returns the config and the path it was read from.
pub fn load_config() -> Result<(AppConfig, Option<PathBuf>)> {
    for path in config_candidates() {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            continue;
        }
        let config = load_from_path(&path)?;
        return Ok((config, Some(path)));
    }

    Ok((build_config(None, None)?, None))
}
