mod backend;
mod bridge;
mod codec;
mod model;

use anyhow::Result;

use crate::core::EconomyState;

#[cfg(not(target_arch = "wasm32"))]
pub use backend::FileBackend;
#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorageBackend;
pub use backend::{MemoryBackend, STORAGE_KEY, SaveBackend};
pub use bridge::{ApplyReport, apply_save_data, save_data_from_state};
pub use codec::{decode_record, load_from_json_string, save_to_json_string};
pub use model::SaveData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(ApplyReport),
    /// Nothing stored, or an empty record.
    NoSave,
    /// The record could not be decoded; the state was left untouched.
    Malformed(String),
}

pub fn save_state(backend: &dyn SaveBackend, key: &str, state: &EconomyState) -> Result<()> {
    let json = save_to_json_string(&save_data_from_state(state))?;
    backend.write(key, &json)
}

/// Only backend failures are returned as errors. A record that fails to
/// decode is reported through [`LoadOutcome::Malformed`].
pub fn load_state(
    backend: &dyn SaveBackend,
    key: &str,
    state: &mut EconomyState,
) -> Result<LoadOutcome> {
    let Some(raw) = backend.read(key)? else {
        return Ok(LoadOutcome::NoSave);
    };

    Ok(match decode_record(&raw) {
        None => LoadOutcome::NoSave,
        Some(Ok(save)) => LoadOutcome::Loaded(apply_save_data(state, &save)),
        Some(Err(err)) => LoadOutcome::Malformed(format!("{err:#}")),
    })
}
