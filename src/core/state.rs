use crate::catalog::planet;

use super::formulas::{auto_clicker_cost, upgrade_cost};

pub const UPGRADE_SLOTS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct EconomyState {
    pub clicks: f64,
    /// Earned since the last rebirth.
    pub total_clicks: f64,
    pub click_power: f64,
    /// Planet multiplier times rebirth multiplier, cached. Quick multipliers
    /// scale it directly until the next planet change or rebirth.
    pub multiplier: f64,
    pub rebirths: u32,
    pub rebirth_mult: f64,
    pub auto_clickers: u32,
    pub auto_enabled: bool,
    pub auto_rebirth_enabled: bool,
    pub upgrades: [u32; UPGRADE_SLOTS],
    pub current_planet: usize,
}

impl Default for EconomyState {
    fn default() -> Self {
        let mut state = Self {
            clicks: 0.0,
            total_clicks: 0.0,
            click_power: 1.0,
            multiplier: 1.0,
            rebirths: 0,
            rebirth_mult: 1.0,
            auto_clickers: 0,
            auto_enabled: true,
            auto_rebirth_enabled: false,
            upgrades: [0; UPGRADE_SLOTS],
            current_planet: 0,
        };
        state.recompute_multiplier();
        state
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeOffer {
    pub index: usize,
    pub cost: f64,
    pub owned: u32,
    pub affordable: bool,
}

impl EconomyState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn recompute_multiplier(&mut self) {
        let planet_mult = planet(self.current_planet).map_or(1.0, |entry| entry.mult);
        self.multiplier = planet_mult * self.rebirth_mult;
    }

    pub fn upgrade_cost(&self, index: usize) -> Option<f64> {
        self.upgrades
            .get(index)
            .map(|&owned| upgrade_cost(index, owned))
    }

    pub fn auto_clicker_cost(&self) -> f64 {
        auto_clicker_cost(self.auto_clickers)
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.clicks >= cost
    }

    pub fn upgrade_offer(&self, index: usize) -> Option<UpgradeOffer> {
        let owned = *self.upgrades.get(index)?;
        let cost = upgrade_cost(index, owned);
        Some(UpgradeOffer {
            index,
            cost,
            owned,
            affordable: self.can_afford(cost),
        })
    }

    pub fn upgrade_offers(&self) -> impl Iterator<Item = UpgradeOffer> + '_ {
        (0..UPGRADE_SLOTS).filter_map(|index| self.upgrade_offer(index))
    }

    /// Per-click yield before auto-clicker scaling.
    pub fn click_yield(&self) -> f64 {
        self.click_power * self.multiplier
    }

    pub fn auto_yield(&self) -> f64 {
        self.click_yield() * f64::from(self.auto_clickers)
    }
}
