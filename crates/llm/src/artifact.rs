//! Discovery of the fine-tuned model artifact.
//!
//! The training pipeline writes weights and tokenizer files into one
//! directory. The engine only reads it. A directory without any weight file
//! is treated as incomplete and the base model is used instead.

use crate::types::ModelSource;
use floodsense_core::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

/// File extensions that count as model weights.
pub const WEIGHT_EXTENSIONS: &[&str] = &["h5", "safetensors", "bin", "gguf"];

/// Optional manifest naming the runtime model for the artifact.
pub const MANIFEST_FILE: &str = "floodsense.yaml";

#[derive(Debug, Deserialize)]
struct ArtifactManifest {
    model: String,
}

/// True when `dir` exists and holds at least one weight file at top level.
pub fn is_complete_artifact(dir: &Path) -> bool {
    if !dir.is_dir() {
        return false;
    }

    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .any(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| WEIGHT_EXTENSIONS.contains(&ext))
                .unwrap_or(false)
        })
}

/// Decide which model to load.
///
/// Returns the fine-tuned artifact when it is complete, the base model
/// otherwise. Fails only when a manifest is present but unreadable.
pub fn discover_source(dir: &Path, base_model: &str) -> AppResult<ModelSource> {
    if !is_complete_artifact(dir) {
        tracing::warn!(
            "Fine-tuned model not found or incomplete at {:?}. Using base model '{}'",
            dir,
            base_model
        );
        return Ok(ModelSource::Base {
            model: base_model.to_string(),
        });
    }

    let model = read_manifest(dir)?.unwrap_or_else(|| {
        dir.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| base_model.to_string())
    });

    tracing::info!("Found fine-tuned model artifact at {:?}", dir);

    Ok(ModelSource::FineTuned {
        path: dir.to_path_buf(),
        model,
    })
}

fn read_manifest(dir: &Path) -> AppResult<Option<String>> {
    let path = dir.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let manifest: ArtifactManifest = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Model(format!("Invalid artifact manifest {:?}: {}", path, e))
    })?;

    Ok(Some(manifest.model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory_uses_base() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("fine_tuned_t5");

        assert!(!is_complete_artifact(&dir));
        assert_eq!(
            discover_source(&dir, "t5-small").unwrap(),
            ModelSource::Base {
                model: "t5-small".to_string()
            }
        );
    }

    #[test]
    fn test_directory_without_weights_is_incomplete() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("spiece.model"), "").unwrap();

        assert!(!is_complete_artifact(temp_dir.path()));
    }

    #[test]
    fn test_nested_weights_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("checkpoint-1");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("tf_model.h5"), "").unwrap();

        assert!(!is_complete_artifact(temp_dir.path()));
    }

    #[test]
    fn test_weights_named_after_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("fine_tuned_t5");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tf_model.h5"), "").unwrap();

        assert_eq!(
            discover_source(&dir, "t5-small").unwrap(),
            ModelSource::FineTuned {
                path: dir.clone(),
                model: "fine_tuned_t5".to_string()
            }
        );
    }

    #[test]
    fn test_manifest_names_model() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("model.safetensors"), "").unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILE), "model: floodsense-t5\n").unwrap();

        let source = discover_source(temp_dir.path(), "t5-small").unwrap();
        assert_eq!(source.model(), "floodsense-t5");
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("model.gguf"), "").unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILE), "name: [").unwrap();

        assert!(matches!(
            discover_source(temp_dir.path(), "t5-small"),
            Err(AppError::Model(_))
        ));
    }
}
