#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub id: usize,
    pub name: &'static str,
    /// sRGB hex, `#rrggbb`.
    pub color: &'static str,
    pub mult: f64,
}

impl Planet {
    const fn new(id: usize, name: &'static str, color: &'static str, mult: f64) -> Self {
        Self {
            id,
            name,
            color,
            mult,
        }
    }

    /// Splits `color` into its three channels, `None` if the hex is malformed.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
    }
}

pub const PLANETS: [Planet; 8] = [
    Planet::new(0, "Merc", "#a6f0ff", 1.0),
    Planet::new(1, "Terra", "#99f6a9", 1.5),
    Planet::new(2, "Pyra", "#ffb39a", 2.0),
    Planet::new(3, "Azur", "#b6a9ff", 3.0),
    Planet::new(4, "Giga", "#ffd86b", 5.0),
    Planet::new(5, "Nova", "#ff9bff", 10.0),
    Planet::new(6, "Void", "#bfbfbf", 25.0),
    Planet::new(7, "Galaxy", "#a17cff", 50.0),
];

pub fn planet(index: usize) -> Option<&'static Planet> {
    PLANETS.get(index)
}

pub fn planet_count() -> usize {
    PLANETS.len()
}
