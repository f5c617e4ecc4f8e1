//! Loader for YAML instruction templates.

use crate::types::InstructionTemplate;
use floodsense_core::{AppError, AppResult};
use std::path::{Path, PathBuf};

fn prompts_dir(workspace_path: &Path) -> PathBuf {
    workspace_path.join(".floodsense/prompts")
}

/// Load a template by ID from `.floodsense/prompts/<id>.yml`.
pub fn load_template(workspace_path: &Path, template_id: &str) -> AppResult<InstructionTemplate> {
    let template_file = prompts_dir(workspace_path).join(format!("{}.yml", template_id));

    tracing::debug!("Loading instruction template from: {:?}", template_file);

    if !template_file.exists() {
        return Err(AppError::Prompt(format!(
            "Template file not found: {:?}",
            template_file
        )));
    }

    let contents = std::fs::read_to_string(&template_file).map_err(|e| {
        AppError::Prompt(format!(
            "Failed to read template file {:?}: {}",
            template_file, e
        ))
    })?;

    let definition: InstructionTemplate = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Prompt(format!(
            "Failed to parse template YAML {:?}: {}",
            template_file, e
        ))
    })?;

    validate_template(&definition)?;

    tracing::info!("Loaded instruction template: {} ({})", definition.id, definition.title);

    Ok(definition)
}

/// Load a workspace template, or the built-in default when none is defined.
///
/// A template file that exists but is invalid is still an error.
pub fn load_or_default(workspace_path: &Path, template_id: &str) -> AppResult<InstructionTemplate> {
    let template_file = prompts_dir(workspace_path).join(format!("{}.yml", template_id));
    if template_file.exists() {
        load_template(workspace_path, template_id)
    } else {
        tracing::debug!("No template override for '{}', using built-in", template_id);
        Ok(InstructionTemplate::default())
    }
}

fn validate_template(def: &InstructionTemplate) -> AppResult<()> {
    if def.id.is_empty() {
        return Err(AppError::Prompt("Template ID cannot be empty".to_string()));
    }

    if !def.api_version.contains('.') {
        return Err(AppError::Prompt(format!(
            "Invalid apiVersion format: {}. Expected format: 'x.y'",
            def.api_version
        )));
    }

    if !def.template.contains("{{query}}") {
        return Err(AppError::Prompt(format!(
            "Template '{}' never references {{{{query}}}}",
            def.id
        )));
    }

    Ok(())
}
