use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST_NAME: &str = "plugin.yml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output: OutputConfig,
    pub validation: ValidationConfig,
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fail generation when `name`, `main` or `version` is unset.
    pub require_fields: bool,
}

/// Identity of the project the plugin is built from. Used to fill
/// descriptor fields the build left unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let cfg: GeneratorConfig = serde_json::from_str(&data)?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "generator config loaded");
        Ok(cfg)
    }

    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        let name = self.output.file_name.trim();
        if name.is_empty() {
            return Err(CoreError::Config("output.file_name must not be empty".to_string()));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(CoreError::Config(format!(
                "output.file_name must be a bare file name, got {:?}",
                self.output.file_name
            )));
        }
        Ok(())
    }
}
