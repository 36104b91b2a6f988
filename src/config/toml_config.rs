use crate::utils::error::{OptcheckError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub paths: PathsConfig,
    pub analyzer: AnalyzerConfig,
    pub setup: SetupConfig,
    pub log: LogConfig,
    pub report: ReportConfig,
}

/// 相對路徑以 `workspace_root` 為基準，`config_dir` 例外（以設定檔所在目錄為基準）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub workspace_root: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub generated_dir: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub checkers: Option<Vec<String>>,
    pub jobs: Option<usize>,
    pub ignore_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub commands: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `{jobs}` is replaced by the build parallelism.
    pub build_command: Option<String>,
    pub clean_commands: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub browser: Option<String>,
    pub open_browser: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;

        // config_dir 預設為設定檔所在目錄
        let base = path
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.paths.config_dir = Some(match config.paths.config_dir.take() {
            Some(dir) => base.join(dir),
            None => base,
        });
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OptcheckError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WORKSPACE})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OptcheckError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(jobs) = self.analyzer.jobs {
            validation::validate_positive_number("analyzer.jobs", jobs, 1)?;
        }

        if let Some(checkers) = &self.analyzer.checkers {
            if checkers.is_empty() {
                return Err(OptcheckError::ConfigValidationError {
                    field: "analyzer.checkers".to_string(),
                    message: "At least one checker must be enabled".to_string(),
                });
            }
            for checker in checkers {
                validation::validate_non_empty_string("analyzer.checkers", checker)?;
            }
        }

        for command in &self.setup.commands {
            validation::validate_command("setup.commands", command)?;
        }
        for command in self.log.clean_commands.iter().flatten() {
            validation::validate_command("log.clean_commands", command)?;
        }
        if let Some(build) = &self.log.build_command {
            validation::validate_non_empty_string("log.build_command", build)?;
        }

        Ok(())
    }
}
