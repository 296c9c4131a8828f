use crate::catalog::planet;

use super::error::{EconomyError, IndexKind};
use super::formulas::{REBIRTH_REQUIREMENT, rebirth_multiplier};
use super::state::{EconomyState, UPGRADE_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EconomyFlag {
    AutoProduction,
    AutoRebirth,
}

impl EconomyFlag {
    /// Persisted field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AutoProduction => "autoEnabled",
            Self::AutoRebirth => "autoRebirthEnabled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Purchase {
    pub cost: f64,
    pub owned: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rebirth {
    pub rebirths: u32,
    pub rebirth_mult: f64,
    pub forced: bool,
}

impl EconomyState {
    fn earn(&mut self, amount: f64) {
        self.clicks += amount;
        self.total_clicks += amount;
    }

    fn spend(&mut self, cost: f64) -> Result<(), EconomyError> {
        if !self.can_afford(cost) {
            return Err(EconomyError::InsufficientFunds {
                cost,
                available: self.clicks,
            });
        }
        self.clicks -= cost;
        Ok(())
    }

    /// Returns the amount earned.
    pub fn manual_click(&mut self) -> f64 {
        let gained = self.click_yield();
        self.earn(gained);
        gained
    }

    pub fn buy_upgrade(&mut self, index: usize) -> Result<Purchase, EconomyError> {
        let cost = self.upgrade_cost(index).ok_or(EconomyError::InvalidIndex {
            kind: IndexKind::Upgrade,
            index,
        })?;
        self.spend(cost)?;
        self.upgrades[index] += 1;
        self.click_power += 1.0;
        Ok(Purchase {
            cost,
            owned: self.upgrades[index],
        })
    }

    pub fn buy_auto_clicker(&mut self) -> Result<Purchase, EconomyError> {
        let cost = self.auto_clicker_cost();
        self.spend(cost)?;
        self.auto_clickers += 1;
        Ok(Purchase {
            cost,
            owned: self.auto_clickers,
        })
    }

    /// Trades the current run for a larger rebirth multiplier. Auto-clickers
    /// survive; upgrades, click power and currency do not.
    pub fn rebirth(&mut self, forced: bool) -> Result<Rebirth, EconomyError> {
        if !forced && !self.can_afford(REBIRTH_REQUIREMENT) {
            return Err(EconomyError::InsufficientFunds {
                cost: REBIRTH_REQUIREMENT,
                available: self.clicks,
            });
        }

        self.clicks = 0.0;
        self.total_clicks = 0.0;
        self.rebirths += 1;
        self.rebirth_mult = rebirth_multiplier(self.rebirths);
        self.upgrades = [0; UPGRADE_SLOTS];
        self.click_power = 1.0;
        self.recompute_multiplier();

        Ok(Rebirth {
            rebirths: self.rebirths,
            rebirth_mult: self.rebirth_mult,
            forced,
        })
    }

    pub fn set_planet(&mut self, index: usize) -> Result<(), EconomyError> {
        if planet(index).is_none() {
            return Err(EconomyError::InvalidIndex {
                kind: IndexKind::Planet,
                index,
            });
        }
        self.current_planet = index;
        self.recompute_multiplier();
        Ok(())
    }

    /// Scales the cached multiplier without touching the planet or rebirth
    /// values behind it; the next `set_planet` or `rebirth` discards the boost.
    pub fn multiply_multiplier(&mut self, factor: f64) {
        self.multiplier *= factor;
    }

    pub fn set_flag(&mut self, flag: EconomyFlag, value: bool) {
        match flag {
            EconomyFlag::AutoProduction => self.auto_enabled = value,
            EconomyFlag::AutoRebirth => self.auto_rebirth_enabled = value,
        }
    }

    pub fn flag(&self, flag: EconomyFlag) -> bool {
        match flag {
            EconomyFlag::AutoProduction => self.auto_enabled,
            EconomyFlag::AutoRebirth => self.auto_rebirth_enabled,
        }
    }

    pub fn reset_all(&mut self) {
        self.reset();
    }

    /// Auto-production loop body. Returns the amount produced this tick.
    pub fn auto_produce(&mut self) -> f64 {
        if !self.auto_enabled || self.auto_clickers == 0 {
            return 0.0;
        }
        let produced = self.auto_yield();
        self.earn(produced);
        produced
    }

    /// Auto-rebirth loop body.
    pub fn auto_rebirth_check(&mut self) -> Option<Rebirth> {
        if !self.auto_rebirth_enabled || !self.can_afford(REBIRTH_REQUIREMENT) {
            return None;
        }
        self.rebirth(true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::{EconomyFlag, EconomyState};
    use crate::catalog::PLANETS;
    use crate::core::{EconomyError, IndexKind};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn manual_click_adds_power_times_multiplier() {
        let mut state = EconomyState::default();
        state.click_power = 3.0;
        state.multiplier = 2.5;

        let gained = state.manual_click();

        assert_close(gained, 7.5);
        assert_close(state.clicks, 7.5);
        assert_close(state.total_clicks, 7.5);
    }

    #[test]
    fn unaffordable_upgrade_leaves_state_unchanged() {
        let mut state = EconomyState::default();
        state.clicks = 9.99;
        let before = state.clone();

        let result = state.buy_upgrade(0);

        assert!(matches!(
            result,
            Err(EconomyError::InsufficientFunds { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn affordable_upgrade_charges_exact_cost() {
        let mut state = EconomyState::default();
        state.clicks = 100.0;
        state.upgrades[2] = 3;
        let cost = state.upgrade_cost(2).expect("slot exists");

        let purchase = state.buy_upgrade(2).expect("affordable");

        assert_close(purchase.cost, cost);
        assert_eq!(purchase.owned, 4);
        assert_close(state.clicks, 100.0 - cost);
        assert_eq!(state.upgrades[2], 4);
        assert_close(state.click_power, 2.0);
        assert_close(state.total_clicks, 0.0);
    }

    #[test]
    fn out_of_range_upgrade_is_rejected() {
        let mut state = EconomyState::default();
        state.clicks = 1e12;
        let before = state.clone();

        assert_eq!(
            state.buy_upgrade(100),
            Err(EconomyError::InvalidIndex {
                kind: IndexKind::Upgrade,
                index: 100
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn auto_clicker_purchase_follows_cost_curve() {
        let mut state = EconomyState::default();
        state.clicks = 250.0;

        state.buy_auto_clicker().expect("first is affordable");
        assert_close(state.clicks, 150.0);
        assert_eq!(state.auto_clickers, 1);

        state.buy_auto_clicker().expect("second is affordable");
        assert_close(state.clicks, 38.0);
        assert_eq!(state.auto_clickers, 2);

        let before = state.clone();
        assert!(state.buy_auto_clicker().is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn voluntary_rebirth_below_requirement_is_refused() {
        let mut state = EconomyState::default();
        state.clicks = 999.0;
        let before = state.clone();

        let result = state.rebirth(false);

        assert!(matches!(
            result,
            Err(EconomyError::InsufficientFunds { cost, .. }) if cost == 1000.0
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn rebirth_resets_run_and_keeps_auto_clickers() {
        let mut state = EconomyState::default();
        state.clicks = 5000.0;
        state.total_clicks = 8000.0;
        state.click_power = 12.0;
        state.upgrades[0] = 5;
        state.upgrades[99] = 6;
        state.auto_clickers = 4;
        state.current_planet = 2;

        let outcome = state.rebirth(false).expect("requirement met");

        assert_eq!(outcome.rebirths, 1);
        assert!(!outcome.forced);
        assert_eq!(state.clicks, 0.0);
        assert_eq!(state.total_clicks, 0.0);
        assert_eq!(state.rebirths, 1);
        assert_close(state.rebirth_mult, 100.0);
        assert!(state.upgrades.iter().all(|&owned| owned == 0));
        assert_eq!(state.click_power, 1.0);
        assert_eq!(state.auto_clickers, 4);
        assert_close(state.multiplier, PLANETS[2].mult * 100.0);
    }

    #[test]
    fn consecutive_forced_rebirths_compound() {
        let mut state = EconomyState::default();
        for n in 1..=6u32 {
            state.rebirth(true).expect("forced rebirth always succeeds");
            assert_eq!(state.rebirths, n);
            assert_close(state.rebirth_mult, 10f64.powi(n as i32 + 1));
        }
    }

    #[test]
    fn set_planet_recomputes_multiplier() {
        let mut state = EconomyState::default();
        state.rebirth_mult = 1000.0;
        state.multiplier = 42.0;

        for (index, entry) in PLANETS.iter().enumerate() {
            state.set_planet(index).expect("valid index");
            assert_eq!(state.current_planet, index);
            assert_close(state.multiplier, entry.mult * 1000.0);
        }
    }

    #[test]
    fn set_planet_rejects_unknown_index() {
        let mut state = EconomyState::default();
        state.current_planet = 3;
        state.recompute_multiplier();
        let before = state.clone();

        assert!(state.set_planet(PLANETS.len()).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn quick_multiplier_is_discarded_by_planet_change() {
        let mut state = EconomyState::default();
        state.multiply_multiplier(10.0);
        state.multiply_multiplier(2.0);
        assert_close(state.multiplier, 20.0);
        assert_close(state.rebirth_mult, 1.0);

        state.set_planet(1).expect("valid index");
        assert_close(state.multiplier, 1.5);
    }

    #[test]
    fn flags_toggle_independently() {
        let mut state = EconomyState::default();
        state.set_flag(EconomyFlag::AutoProduction, false);
        state.set_flag(EconomyFlag::AutoRebirth, true);
        assert!(!state.auto_enabled);
        assert!(state.auto_rebirth_enabled);
        assert!(state.flag(EconomyFlag::AutoRebirth));
        assert!(!state.flag(EconomyFlag::AutoProduction));
        assert_eq!(EconomyFlag::AutoProduction.name(), "autoEnabled");
    }

    #[test]
    fn auto_produce_requires_flag_and_clickers() {
        let mut state = EconomyState::default();
        assert_eq!(state.auto_produce(), 0.0);

        state.auto_clickers = 3;
        state.click_power = 2.0;
        state.multiplier = 5.0;
        assert_close(state.auto_produce(), 30.0);
        assert_close(state.clicks, 30.0);
        assert_close(state.total_clicks, 30.0);

        state.set_flag(EconomyFlag::AutoProduction, false);
        assert_eq!(state.auto_produce(), 0.0);
        assert_close(state.clicks, 30.0);
    }

    #[test]
    fn auto_rebirth_fires_only_when_enabled_and_funded() {
        let mut state = EconomyState::default();
        state.clicks = 2000.0;
        assert!(state.auto_rebirth_check().is_none());

        state.set_flag(EconomyFlag::AutoRebirth, true);
        state.clicks = 999.0;
        assert!(state.auto_rebirth_check().is_none());

        state.clicks = 1000.0;
        let outcome = state.auto_rebirth_check().expect("threshold reached");
        assert!(outcome.forced);
        assert_eq!(state.rebirths, 1);
        assert_eq!(state.clicks, 0.0);
    }

    #[test]
    fn reset_all_discards_progress() {
        let mut state = EconomyState::default();
        state.clicks = 1e6;
        state.rebirth(true).expect("forced");
        state.auto_clickers = 9;

        state.reset_all();

        assert_eq!(state, EconomyState::default());
    }
}
