use crate::domain::model::{CommandOutput, CommandSpec};
use crate::domain::ports::CommandRunner;
use crate::utils::error::{OptcheckError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }
        for (key, value) in &spec.env {
            command.env(key, value);
        }

        if spec.capture {
            command.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else if spec.quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }
        command.stdin(Stdio::null());
        command
    }

    fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> OptcheckError {
        OptcheckError::CommandSpawn {
            command: spec.display(),
            source,
        }
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let output = Self::command(spec)
            .output()
            .await
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn spawn_detached(&self, spec: &CommandSpec) -> Result<()> {
        let mut command = std::process::Command::new(&spec.program);
        command
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null());
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }
        if spec.quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        command.spawn().map_err(|e| Self::spawn_error(spec, e))?;
        Ok(())
    }
}
