//! Rendering of instruction templates.

use crate::types::InstructionTemplate;
use floodsense_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Render the user query into the model's instruction format.
///
/// The query is trimmed before rendering. HTML escaping is disabled: the
/// model consumes plain text.
///
/// # Example
/// ```
/// use floodsense_prompt::{render_instruction, InstructionTemplate};
///
/// let rendered = render_instruction(&InstructionTemplate::default(), "When do floods start?").unwrap();
/// assert_eq!(rendered, "question: When do floods start?");
/// ```
pub fn render_instruction(definition: &InstructionTemplate, query: &str) -> AppResult<String> {
    tracing::debug!("Rendering instruction template: {}", definition.id);

    let mut variables = HashMap::new();
    variables.insert("query", query.trim());

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string(&definition.id, &definition.template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    handlebars
        .render(&definition.id, &variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(body: &str) -> InstructionTemplate {
        InstructionTemplate {
            template: body.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_default_template() {
        let rendered =
            render_instruction(&InstructionTemplate::default(), "  Is Wau at risk?  ").unwrap();
        assert_eq!(rendered, "question: Is Wau at risk?");
    }

    #[test]
    fn test_render_does_not_escape() {
        let rendered = render_instruction(&template("q: {{query}}"), "rain > 50mm & rising").unwrap();
        assert_eq!(rendered, "q: rain > 50mm & rising");
    }

    #[test]
    fn test_render_invalid_template() {
        let result = render_instruction(&template("question: {{#if}}"), "flood");
        assert!(matches!(result, Err(AppError::Prompt(_))));
    }
}
