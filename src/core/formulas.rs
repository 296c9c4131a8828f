pub const COST_GROWTH: f64 = 1.12;
pub const UPGRADE_BASE_COST: f64 = 10.0;
pub const AUTO_CLICKER_BASE_COST: f64 = 100.0;
pub const REBIRTH_REQUIREMENT: f64 = 1000.0;

const TIER_SUFFIXES: [&str; 8] = ["K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp"];

/// `10 * (index + 1) * 1.12^owned`.
pub fn upgrade_cost(index: usize, owned: u32) -> f64 {
    let base = UPGRADE_BASE_COST * (index as f64 + 1.0);
    base * COST_GROWTH.powf(f64::from(owned))
}

pub fn auto_clicker_cost(owned: u32) -> f64 {
    AUTO_CLICKER_BASE_COST * COST_GROWTH.powf(f64::from(owned))
}

/// Multiplier granted once the rebirth count has reached `rebirths`.
pub fn rebirth_multiplier(rebirths: u32) -> f64 {
    10f64.powf(f64::from(rebirths) + 1.0)
}

/// Display formatting for currency-like values.
///
/// Values below 1000 are truncated to an integer. Larger values are grouped
/// into base-1000 tiers with a suffix and two decimals; past the last suffix
/// the tier is written as a power of ten instead (`1.00e27`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value < 1000.0 {
        return format!("{}", value.floor() as i64);
    }

    let mut tier = 0usize;
    let mut scaled = value;
    while scaled.abs() >= 1000.0 {
        scaled /= 1000.0;
        tier += 1;
    }

    match TIER_SUFFIXES.get(tier - 1) {
        Some(suffix) => format!("{scaled:.2}{suffix}"),
        None => format!("{scaled:.2}e{}", tier * 3),
    }
}
