pub mod catalog;
pub mod core;
pub mod save;

pub use catalog::{PLANETS, Planet, planet, planet_count};
pub use crate::core::{
    EconomyError, EconomyFlag, EconomyState, IndexKind, Purchase, REBIRTH_REQUIREMENT, Rebirth,
    UPGRADE_SLOTS, UpgradeOffer, auto_clicker_cost, format_number, rebirth_multiplier,
    upgrade_cost,
};
pub use save::{
    ApplyReport, LoadOutcome, MemoryBackend, STORAGE_KEY, SaveBackend, SaveData,
    apply_save_data, load_from_json_string, load_state, save_data_from_state, save_state,
    save_to_json_string,
};
#[cfg(not(target_arch = "wasm32"))]
pub use save::FileBackend;
#[cfg(target_arch = "wasm32")]
pub use save::LocalStorageBackend;
