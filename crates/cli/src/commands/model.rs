//! Model command handler.

use clap::Args;
use floodsense_core::AppResult;
use floodsense_engine::ResponseEngine;
use floodsense_llm::ModelStatus;

/// Load the model and report which one is in use
#[derive(Args, Debug)]
pub struct ModelCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ModelCommand {
    pub async fn execute(&self, engine: &ResponseEngine) -> AppResult<()> {
        let adapter = engine.adapter();
        adapter.load().await;
        let status = adapter.status();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&status)?);
            return Ok(());
        }

        match status {
            ModelStatus::Ready { source } => println!("Ready: {}", source),
            ModelStatus::Unavailable { reason } => {
                println!("Unavailable: {}", reason);
                println!("Questions are answered by the rule table only.");
            }
            ModelStatus::NotLoaded => println!("Not loaded"),
        }

        Ok(())
    }
}
