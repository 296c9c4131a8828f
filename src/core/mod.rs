mod economy;
mod error;
mod formulas;
mod state;

pub use economy::{EconomyFlag, Purchase, Rebirth};
pub use error::{EconomyError, IndexKind};
pub use formulas::{
    AUTO_CLICKER_BASE_COST, COST_GROWTH, REBIRTH_REQUIREMENT, UPGRADE_BASE_COST,
    auto_clicker_cost, format_number, rebirth_multiplier, upgrade_cost,
};
pub use state::{EconomyState, UPGRADE_SLOTS, UpgradeOffer};
