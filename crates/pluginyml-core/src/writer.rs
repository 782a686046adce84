use crate::config::OutputConfig;
use crate::error::CoreResult;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Encodes a document as YAML.
pub fn render_yaml<T: Serialize + ?Sized>(document: &T) -> CoreResult<String> {
    Ok(serde_yaml::to_string(document)?)
}

/// Writes manifest documents into one output directory.
pub struct ManifestWriter {
    dir: PathBuf,
    file_name: String,
}

impl ManifestWriter {
    pub fn new(dir: PathBuf, file_name: impl Into<String>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }

    pub fn from_config(output: &OutputConfig, fallback_dir: &Path) -> Self {
        let dir = output
            .directory
            .clone()
            .unwrap_or_else(|| fallback_dir.to_path_buf());
        Self::new(dir, output.file_name.clone())
    }

    pub fn target(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn write<T: Serialize + ?Sized>(&self, document: &T) -> CoreResult<PathBuf> {
        let text = render_yaml(document)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.target();
        fs::write(&path, text)?;
        tracing::info!(path = %path.display(), "manifest written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn writes_into_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let writer = ManifestWriter::new(root.path().join("build").join("resources"), "plugin.yml");

        let mut doc = BTreeMap::new();
        doc.insert("name", "Example");
        let path = writer.write(&doc).unwrap();

        assert_eq!(path, root.path().join("build/resources/plugin.yml"));
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text.trim(), "name: Example");
    }

    #[test]
    fn from_config_falls_back_to_given_dir() {
        let output = OutputConfig::default();
        let writer = ManifestWriter::from_config(&output, Path::new("target"));
        assert_eq!(writer.target(), PathBuf::from("target").join("plugin.yml"));
    }

    #[test]
    fn from_config_prefers_configured_dir() {
        let output = OutputConfig {
            directory: Some(PathBuf::from("out")),
            file_name: "nukkit.yml".to_string(),
        };
        let writer = ManifestWriter::from_config(&output, Path::new("target"));
        assert_eq!(writer.target(), PathBuf::from("out").join("nukkit.yml"));
    }
}
