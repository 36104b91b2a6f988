#![allow(dead_code)]

use async_trait::async_trait;
use optcheck::core::{CommandOutput, CommandRunner, CommandSpec};
use optcheck::utils::error::Result;
use std::sync::Mutex;

/// In-memory runner: answers `git diff` with a canned file list, simulates the
/// CodeChecker json export and records every command it receives.
pub struct ScriptedRunner {
    pub diff_output: String,
    pub diff_status: i32,
    pub reports_json: String,
    pub fail_program: Option<(String, i32)>,
    pub calls: Mutex<Vec<CommandSpec>>,
    pub detached: Mutex<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new(diff_output: &str, reports_json: &str) -> Self {
        Self {
            diff_output: diff_output.to_string(),
            diff_status: 0,
            reports_json: reports_json.to_string(),
            fail_program: None,
            calls: Mutex::new(Vec::new()),
            detached: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(mut self, first_arg: &str, status: i32) -> Self {
        self.fail_program = Some((first_arg.to_string(), status));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(CommandSpec::display)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(spec.clone());

        let first_arg = spec.args.first().map(String::as_str).unwrap_or_default();
        if let Some((failing, status)) = &self.fail_program {
            if first_arg == failing {
                return Ok(CommandOutput {
                    status: Some(*status),
                    ..CommandOutput::default()
                });
            }
        }

        if spec.program == "git" {
            return Ok(CommandOutput {
                status: Some(self.diff_status),
                stdout: self.diff_output.clone(),
                stderr: String::new(),
            });
        }

        if spec.program == "CodeChecker"
            && first_arg == "parse"
            && spec.args.iter().any(|arg| arg == "json")
        {
            let dir = spec.cwd.clone().unwrap_or_default();
            std::fs::write(dir.join("reports.json"), &self.reports_json)?;
            // parse exits 2 when reports exist
            let status = if self.reports_json.contains("checker_name") { 2 } else { 0 };
            return Ok(CommandOutput {
                status: Some(status),
                ..CommandOutput::default()
            });
        }

        Ok(CommandOutput {
            status: Some(0),
            ..CommandOutput::default()
        })
    }

    fn spawn_detached(&self, spec: &CommandSpec) -> Result<()> {
        self.detached.lock().unwrap().push(spec.clone());
        Ok(())
    }
}
