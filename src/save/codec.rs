use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::SaveData;

pub fn save_to_json_string(save_data: &SaveData) -> Result<String> {
    serde_json::to_string(save_data).context("failed to encode economy record")
}

/// Only a JSON object is a record; arrays and scalars are rejected.
pub fn load_from_json_string(json: &str) -> Result<SaveData> {
    let value: Value = serde_json::from_str(json).context("failed to decode economy record")?;
    if !value.is_object() {
        bail!("economy record is not a JSON object");
    }
    serde_json::from_value(value).context("failed to decode economy record")
}

/// Blank records count as "no save" rather than as malformed ones.
pub fn decode_record(raw: &str) -> Option<Result<SaveData>> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| load_from_json_string(trimmed))
}
