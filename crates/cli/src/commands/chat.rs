//! Chat command handler.
//!
//! A line-oriented loop over stdin. Conversation history is not kept.

use clap::Args;
use floodsense_core::AppResult;
use floodsense_engine::ResponseEngine;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Interactive question loop on stdin
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Prompt shown before each question
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

/// Whether an input line ends the session.
fn is_exit(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

impl ChatCommand {
    pub async fn execute(&self, engine: &ResponseEngine) -> AppResult<()> {
        tracing::info!("Starting chat session");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        let mut turns = 0usize;

        loop {
            stdout.write_all(self.prompt.as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if is_exit(&line) {
                break;
            }

            let answer = engine.answer(&line).await;
            stdout.write_all(format!("{}\n\n", answer).as_bytes()).await?;
            turns += 1;
        }

        tracing::info!("Chat session ended after {} turns", turns);
        Ok(())
    }
}
