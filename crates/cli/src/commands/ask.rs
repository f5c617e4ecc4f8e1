//! Ask command handler.

use clap::Args;
use floodsense_core::{AppError, AppResult};
use floodsense_engine::ResponseEngine;
use std::path::PathBuf;

/// Ask a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub query: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "query")]
    pub file: Option<PathBuf>,

    /// Output the answer and its source as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub async fn execute(&self, engine: &ResponseEngine) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let query = self.get_query()?;
        let response = engine.respond(&query).await;
        tracing::debug!("Answer source: {:?}", response.source);

        if self.json {
            let output = serde_json::json!({
                "query": query,
                "answer": response.text,
                "source": response.source,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", response.text);
        }

        Ok(())
    }

    fn get_query(&self) -> AppResult<String> {
        if let Some(query) = &self.query {
            return Ok(query.clone());
        }

        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?.trim().to_string()),
            None => Err(AppError::Config("No question provided".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_argument() {
        let cmd = AskCommand {
            query: Some("When is the flood season?".to_string()),
            file: None,
            json: false,
        };
        assert_eq!(cmd.get_query().unwrap(), "When is the flood season?");
    }

    #[test]
    fn test_missing_query() {
        let cmd = AskCommand {
            query: None,
            file: None,
            json: false,
        };
        assert!(matches!(cmd.get_query(), Err(AppError::Config(_))));
    }
}
