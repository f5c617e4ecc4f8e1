//! Configuration management for FloodSense.
//!
//! Configuration is resolved in layers, later layers winning:
//! - Built-in defaults
//! - Config file (`.floodsense/config.yaml` in the workspace, or `FLOODSENSE_CONFIG`)
//! - Environment variables
//! - Command-line flags
//!
//! Relative model paths are resolved against the workspace root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Directory of the fine-tuned artifact produced by the training pipeline.
pub const DEFAULT_MODEL_DIR: &str = "models/fine_tuned_t5";

/// Pre-trained base model used when the fine-tuned artifact is unusable.
pub const DEFAULT_BASE_MODEL: &str = "t5-small";

/// Default local generation runtime.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .floodsense/ and models/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Model artifact and generation runtime settings
    pub model: ModelConfig,

    /// Log level override
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    pub log_json: bool,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Settings consumed by the model adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Fine-tuned model artifact directory
    #[serde(rename = "modelDir")]
    pub model_dir: PathBuf,

    /// Fallback base model name
    #[serde(rename = "baseModel")]
    pub base_model: String,

    /// Generation runtime endpoint
    pub endpoint: String,

    /// Upper bound on a single generation call, in seconds
    #[serde(rename = "timeoutSecs")]
    pub timeout_secs: u64,

    /// Run generation calls one at a time
    #[serde(rename = "serializeGeneration")]
    pub serialize_generation: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            base_model: DEFAULT_BASE_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            serialize_generation: true,
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    model: Option<ModelConfig>,
    workspace: Option<WorkspaceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
    json: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            model: ModelConfig::default(),
            log_level: None,
            log_json: false,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// Environment variables:
    /// - `FLOODSENSE_WORKSPACE`: Override workspace path
    /// - `FLOODSENSE_CONFIG`: Path to config file
    /// - `FLOODSENSE_MODEL_DIR`: Fine-tuned artifact directory
    /// - `FLOODSENSE_BASE_MODEL`: Fallback base model name
    /// - `FLOODSENSE_ENDPOINT`: Generation runtime endpoint
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(workspace) = std::env::var("FLOODSENSE_WORKSPACE") {
            config.workspace = PathBuf::from(workspace);
        }

        if let Ok(config_file) = std::env::var("FLOODSENSE_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| config.floodsense_dir().join("config.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        config.apply_env();

        Ok(config)
    }

    /// Environment variables override the config file.
    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var("FLOODSENSE_MODEL_DIR") {
            self.model.model_dir = PathBuf::from(dir);
        }

        if let Ok(base) = std::env::var("FLOODSENSE_BASE_MODEL") {
            self.model.base_model = base;
        }

        if let Ok(endpoint) = std::env::var("FLOODSENSE_ENDPOINT") {
            self.model.endpoint = endpoint;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            self.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            self.no_color = true;
        }
    }

    /// Merge a YAML configuration file into a copy of this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
            if let Some(json) = logging.json {
                result.log_json = json;
            }
        }

        if let Some(model) = config_file.model {
            result.model = model;
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over the environment and the config file.
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        model_dir: Option<PathBuf>,
        endpoint: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(model_dir) = model_dir {
            self.model.model_dir = model_dir;
        }

        if let Some(endpoint) = endpoint {
            self.model.endpoint = endpoint;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .floodsense directory.
    pub fn floodsense_dir(&self) -> PathBuf {
        self.workspace.join(".floodsense")
    }

    /// Absolute location of the fine-tuned model artifact.
    pub fn resolved_model_dir(&self) -> PathBuf {
        if self.model.model_dir.is_absolute() {
            self.model.model_dir.clone()
        } else {
            self.workspace.join(&self.model.model_dir)
        }
    }

    /// Validate model settings.
    pub fn validate(&self) -> AppResult<()> {
        if self.model.base_model.trim().is_empty() {
            return Err(AppError::Config(
                "Base model name cannot be empty".to_string(),
            ));
        }

        if self.model.timeout_secs == 0 {
            return Err(AppError::Config(
                "Generation timeout must be at least one second".to_string(),
            ));
        }

        let endpoint = &self.model.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Invalid endpoint: {}. Expected an http:// or https:// URL",
                endpoint
            )));
        }

        Ok(())
    }
}
