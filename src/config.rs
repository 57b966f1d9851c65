use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::render::{DEFAULT_EXPORT_NAME, OutputFormat, RenderOptions};

pub const CONFIG_FILE_NAME: &str = ".i18nextractrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_input_extension")]
    pub input_extension: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_export_name")]
    pub export_name: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_root() -> String {
    "./src".to_string()
}

fn default_output_root() -> String {
    "./src/lang/locales".to_string()
}

fn default_input_extension() -> String {
    ".vue".to_string()
}

fn default_export_name() -> String {
    DEFAULT_EXPORT_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_root: default_output_root(),
            input_extension: default_input_extension(),
            format: OutputFormat::default(),
            export_name: default_export_name(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if
    /// `inputExtension` or `exportName` is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.input_extension.is_empty() {
            bail!("'inputExtension' must not be empty");
        }

        if self.export_name.trim().is_empty() {
            bail!("'exportName' must not be empty");
        }

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            export_name: self.export_name.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative roots are resolved against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// Path of the loaded config file, `None` if using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Resolve a configured (possibly relative) path against `base_dir`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            path: None,
        }),
    }
}
