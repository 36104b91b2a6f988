use crate::domain::ports::Prompt;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Waits for a line on stdin; end of input counts as declining.
#[derive(Debug, Clone, Default)]
pub struct StdinPrompt;

#[async_trait]
impl Prompt for StdinPrompt {
    async fn confirm(&self, message: &str) -> Result<bool> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(message.as_bytes()).await?;
        stdout.flush().await?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await?;
        Ok(read > 0)
    }
}

/// Answers every prompt with a fixed value.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub bool);

#[async_trait]
impl Prompt for FixedPrompt {
    async fn confirm(&self, message: &str) -> Result<bool> {
        tracing::debug!("Auto-answering '{}' with {}", message, self.0);
        Ok(self.0)
    }
}
