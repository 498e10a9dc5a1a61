// src/math/probability/seed/resource.rs

use bevy::prelude::Resource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Primzahltabelle, aus der der Seed den Startzustand ableitet.
pub const SEED_PRIMES: [u64; 10] = [
    5_915_587_277,
    1_500_450_271,
    3_267_000_013,
    5_754_853_343,
    4_093_082_899,
    9_576_890_767,
    3_628_273_133,
    2_860_486_313,
    5_463_458_053,
    3_367_900_313,
];

pub const LCG_MULTIPLIER: f64 = 9301.0;
pub const LCG_INCREMENT: f64 = 49297.0;
pub const LCG_MODULUS: f64 = 233_280.0;

/// Deterministischer Zufallsstrom (lineare Kongruenz) für die Platzierung der Sites.
///
/// Der gesamte Zustand wird als `f64` gehalten und mit IEEE-`fmod` fortgeschrieben,
/// damit gespeicherte Diagramme auf jeder Plattform identisch regeneriert werden.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SeedResource {
    pub seed: u64,
    state: f64,
}

impl SeedResource {
    pub fn from_seed(seed: u64) -> Self {
        let prime = SEED_PRIMES[(seed % SEED_PRIMES.len() as u64) as usize];
        Self {
            seed,
            state: prime as f64 * seed as f64,
        }
    }

    /// Seed aus der Wanduhr (Millisekunden seit Epoche).
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Nächster Wert in `[0, 1)`.
    pub fn next_value(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state / LCG_MODULUS
    }

    /// Nächster Wert in `[min, max)`.
    pub fn next_in_range(&mut self, min: f64, max: f64) -> f64 {
        self.next_value() * (max - min) + min
    }
}

impl Default for SeedResource {
    fn default() -> Self {
        Self::from_clock()
    }
}

/// Millisekunden seit der Unix-Epoche; 0 falls die Uhr vor 1970 steht.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
