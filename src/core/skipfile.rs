use crate::config::Settings;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::path::Path;

/// Checker groups switched off so that only the configured checkers report.
const DISABLED_GROUPS: &[&str] = &[
    "alpha",
    "bugprone",
    "cert-err60-cpp",
    "clang-diagnostic",
    "google",
    "performance",
    "readability",
    "cppcoreguidelines",
];

/// 每個檔案一行 `+*/<file>`，最後以 `-*/*` 排除其餘所有檔案
pub fn render_skipfile<S: AsRef<str>>(files: &[S]) -> String {
    let mut content = String::new();
    for file in files {
        content.push_str("+*/");
        content.push_str(file.as_ref());
        content.push('\n');
    }
    content.push_str("-*/*\n");
    content
}

pub fn render_codechecker_config(settings: &Settings) -> Value {
    let ignore = format!("--ignore={}", settings.skipfile_path().display());

    let mut analyze = vec!["--disable-all".to_string()];
    analyze.extend(DISABLED_GROUPS.iter().map(|group| format!("--disable={}", group)));
    analyze.extend(
        settings
            .checkers
            .iter()
            .map(|checker| format!("--enable={}", checker)),
    );
    analyze.push(format!("--jobs={}", settings.analyzer_jobs));
    analyze.push("--clean".to_string());
    analyze.push(ignore.clone());

    json!({
        "analyze": analyze,
        "parse": [ignore],
    })
}

/// Rewrites the skipfile every time; the analyzer config is only created
/// when missing so local edits survive.
pub fn write_analysis_inputs<S: AsRef<str>>(settings: &Settings, files: &[S]) -> Result<()> {
    std::fs::create_dir_all(&settings.config_dir)?;

    let skipfile = settings.skipfile_path();
    std::fs::write(&skipfile, render_skipfile(files))?;
    tracing::debug!("Skipfile written to {}", skipfile.display());

    let config_path = settings.analyzer_config_path();
    if !config_path.is_file() {
        write_json(&config_path, &render_codechecker_config(settings))?;
        tracing::debug!("Analyzer config written to {}", config_path.display());
    }

    Ok(())
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RunOptions, DEFAULT_CHECKER};
    use tempfile::TempDir;

    fn settings_in(dir: &Path) -> Settings {
        let mut settings = Settings::resolve(RunOptions::default(), None, dir);
        settings.config_dir = dir.to_path_buf();
        settings
    }

    #[test]
    fn test_render_skipfile() {
        let content = render_skipfile(&["src/a.cpp", "lib/b.cpp"]);
        assert_eq!(content, "+*/src/a.cpp\n+*/lib/b.cpp\n-*/*\n");
    }

    #[test]
    fn test_render_skipfile_empty() {
        let files: [&str; 0] = [];
        assert_eq!(render_skipfile(&files), "-*/*\n");
    }

    #[test]
    fn test_render_codechecker_config() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(dir.path());
        let config = render_codechecker_config(&settings);

        let analyze: Vec<&str> = config["analyze"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(analyze[0], "--disable-all");
        assert!(analyze.contains(&"--disable=bugprone"));
        assert!(analyze.contains(&format!("--enable={}", DEFAULT_CHECKER).as_str()));
        assert!(analyze.contains(&"--jobs=8"));
        assert!(analyze.contains(&"--clean"));

        let ignore = format!("--ignore={}", dir.path().join("skipfiles").display());
        assert_eq!(analyze.last().copied(), Some(ignore.as_str()));
        assert_eq!(config["parse"][0].as_str(), Some(ignore.as_str()));
    }

    #[test]
    fn test_write_inputs_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(dir.path());
        std::fs::write(settings.analyzer_config_path(), "{\"custom\": true}").unwrap();

        write_analysis_inputs(&settings, &["a.cpp"]).unwrap();

        let skipfile = std::fs::read_to_string(settings.skipfile_path()).unwrap();
        assert_eq!(skipfile, "+*/a.cpp\n-*/*\n");
        let config = std::fs::read_to_string(settings.analyzer_config_path()).unwrap();
        assert_eq!(config, "{\"custom\": true}");
    }

    #[test]
    fn test_write_inputs_creates_config() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(dir.path());

        write_analysis_inputs(&settings, &["a.cpp"]).unwrap();

        let text = std::fs::read_to_string(settings.analyzer_config_path()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value["analyze"].is_array());
    }
}
