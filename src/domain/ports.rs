use crate::domain::model::{CommandOutput, CommandSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs to completion. Only spawn failures are errors here; exit status
    /// checking is left to the caller.
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;

    /// Starts a process without waiting for it.
    fn spawn_detached(&self, spec: &CommandSpec) -> Result<()>;
}

#[async_trait]
pub trait Prompt: Send + Sync {
    /// Returns `false` when the user declines.
    async fn confirm(&self, message: &str) -> Result<bool>;
}
