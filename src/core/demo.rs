use crate::domain::model::{Sample, Verdict};
use crate::utils::error::{OptcheckError, Result};

/// 讀取可選值前先確認存在，空值回傳 `EmptyOptionalAccess`
pub fn require<'a, T>(slot: &'a Option<T>, target: &str) -> Result<&'a T> {
    slot.as_ref().ok_or_else(|| OptcheckError::EmptyOptionalAccess {
        target: target.to_string(),
    })
}

/// `Yes` only when the sample is present and its value is exactly zero.
/// An absent inner value never equals zero.
pub fn evaluate(slot: &Option<Sample>) -> Result<Verdict> {
    let sample = require(slot, "sample")?;
    tracing::debug!("sample present: {:?}", sample);

    if sample.value == Some(0) {
        Ok(Verdict::Yes)
    } else {
        Ok(Verdict::No)
    }
}

/// The container is never populated, so this always reports the empty read.
pub fn run() -> Result<Verdict> {
    let slot: Option<Sample> = None;
    evaluate(&slot)
}
