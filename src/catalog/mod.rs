mod planets;

pub use planets::{PLANETS, Planet, planet, planet_count};
