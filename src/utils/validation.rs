use crate::utils::error::{OptcheckError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(OptcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(OptcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(OptcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OptcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 分支名稱不可含空白，也不可以 `-` 開頭（避免被 git 當成選項）
pub fn validate_branch_name(field_name: &str, branch: &str) -> Result<()> {
    if branch.is_empty() {
        return Ok(());
    }

    if branch.starts_with('-') || branch.chars().any(char::is_whitespace) {
        return Err(OptcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: branch.to_string(),
            reason: "Branch must be a single ref name without whitespace or leading '-'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_command(field_name: &str, command: &[String]) -> Result<()> {
    match command.first() {
        Some(program) => validate_non_empty_string(field_name, program),
        None => Err(OptcheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "Command must name a program".to_string(),
        }),
    }
}
