use crate::catalog::planet;
use crate::core::{EconomyState, UPGRADE_SLOTS, rebirth_multiplier};

use super::SaveData;

/// Fields that had to be repaired while applying a save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub repaired: Vec<&'static str>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.repaired.is_empty()
    }
}

pub fn save_data_from_state(state: &EconomyState) -> SaveData {
    SaveData {
        clicks: Some(state.clicks),
        total_clicks: Some(state.total_clicks),
        click_power: Some(state.click_power),
        multiplier: Some(state.multiplier),
        rebirths: Some(state.rebirths),
        rebirth_mult: Some(state.rebirth_mult),
        auto_clickers: Some(state.auto_clickers),
        auto_enabled: Some(state.auto_enabled),
        auto_rebirth_enabled: Some(state.auto_rebirth_enabled),
        upgrades: Some(state.upgrades.to_vec()),
        current_planet: Some(state.current_planet),
    }
}

/// Overlays `save` onto `state`. Absent fields keep their current value, the
/// upgrade list is replaced by zeros unless it has exactly one entry per
/// slot, and the multiplier is recomputed from planet and rebirth values.
/// The stored `multiplier` is never read back.
pub fn apply_save_data(state: &mut EconomyState, save: &SaveData) -> ApplyReport {
    let mut report = ApplyReport::default();

    if let Some(clicks) = save.clicks {
        state.clicks = non_negative(clicks, 0.0, "clicks", &mut report);
    }
    if let Some(total) = save.total_clicks {
        state.total_clicks = non_negative(total, 0.0, "totalClicks", &mut report);
    }
    if let Some(power) = save.click_power {
        state.click_power = positive(power, 1.0, "clickPower", &mut report);
    }
    if let Some(rebirths) = save.rebirths {
        state.rebirths = rebirths;
    }
    if let Some(rebirth_mult) = save.rebirth_mult {
        let fallback = if state.rebirths == 0 {
            1.0
        } else {
            rebirth_multiplier(state.rebirths)
        };
        state.rebirth_mult = positive(rebirth_mult, fallback, "rebirthMult", &mut report);
    }
    if let Some(auto_clickers) = save.auto_clickers {
        state.auto_clickers = auto_clickers;
    }
    if let Some(enabled) = save.auto_enabled {
        state.auto_enabled = enabled;
    }
    if let Some(enabled) = save.auto_rebirth_enabled {
        state.auto_rebirth_enabled = enabled;
    }

    match save.upgrades.as_deref() {
        Some(upgrades) if upgrades.len() == UPGRADE_SLOTS => {
            state.upgrades.copy_from_slice(upgrades);
        }
        _ => {
            state.upgrades = [0; UPGRADE_SLOTS];
            report.repaired.push("upgrades");
        }
    }

    if let Some(index) = save.current_planet {
        if planet(index).is_some() {
            state.current_planet = index;
        } else {
            state.current_planet = 0;
            report.repaired.push("currentPlanet");
        }
    }

    state.recompute_multiplier();
    report
}

fn non_negative(value: f64, fallback: f64, field: &'static str, report: &mut ApplyReport) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        report.repaired.push(field);
        fallback
    }
}

fn positive(value: f64, fallback: f64, field: &'static str, report: &mut ApplyReport) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        report.repaired.push(field);
        fallback
    }
}
