use crate::config::Settings;
use crate::domain::model::CommandSpec;
use crate::domain::ports::CommandRunner;
use crate::utils::error::{OptcheckError, Result};
use std::path::Path;

/// `.cpp` must appear somewhere after the first character of the path.
pub fn is_cpp_source(path: &str) -> bool {
    path.find(".cpp").is_some_and(|pos| pos > 0)
}

/// Keeps C++ sources that contain none of the ignore patterns.
pub fn filter_changed(files: &[String], ignores: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|file| is_cpp_source(file))
        .filter(|file| !ignores.iter().any(|pattern| file.contains(pattern.as_str())))
        .cloned()
        .collect()
}

/// CI 模式：以空白分隔的檔案清單，只保留 C++ 原始檔
pub fn split_file_list(files: &str) -> Vec<String> {
    files
        .split_whitespace()
        .filter(|file| is_cpp_source(file))
        .map(str::to_string)
        .collect()
}

pub fn parse_ignores(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A missing ignore file means nothing is ignored.
pub fn load_ignores(path: &Path) -> Result<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_ignores(&content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No ignore file at {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn git_diff_command(settings: &Settings, branch: &str) -> CommandSpec {
    let mut args = vec!["diff", "--name-only"];
    if !branch.is_empty() {
        args.push(branch);
    }
    CommandSpec::new("git", args)
        .in_dir(&settings.workspace_root)
        .captured()
}

/// Files reported by `git diff --name-only`, relative to the workspace root.
pub async fn changed_files<R: CommandRunner + ?Sized>(
    runner: &R,
    settings: &Settings,
    branch: &str,
) -> Result<Vec<String>> {
    let spec = git_diff_command(settings, branch);
    let output = runner
        .run(&spec)
        .await
        .map_err(|e| OptcheckError::GitDiffError {
            message: e.to_string(),
        })?;

    if !output.success() {
        return Err(OptcheckError::GitDiffError {
            message: format!(
                "'{}' exited with {:?}: {}",
                spec.display(),
                output.status,
                output.stderr.trim()
            ),
        });
    }

    Ok(output
        .stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
