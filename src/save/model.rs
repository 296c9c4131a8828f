use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Persisted economy record. Field names follow the storage layout
/// (`totalClicks`, `rebirthMult`, ...). Every field is optional so a load can
/// overlay only what the record actually carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_clicks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebirths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebirth_mult: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_clickers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_rebirth_enabled: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_upgrades"
    )]
    pub upgrades: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_planet: Option<usize>,
}

/// Any JSON value is accepted for `upgrades`. Anything that is not an array
/// of non-negative integers comes back as an empty list, which the bridge
/// then repairs.
fn lenient_upgrades<'de, D>(deserializer: D) -> Result<Option<Vec<u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        Value::Null => return Ok(None),
        _ => return Ok(Some(Vec::new())),
    };

    let parsed = entries
        .iter()
        .map(|entry| entry.as_u64().and_then(|owned| u32::try_from(owned).ok()))
        .collect::<Option<Vec<_>>>();
    Ok(Some(parsed.unwrap_or_default()))
}
