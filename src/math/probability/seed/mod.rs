pub mod resource;

pub use resource::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER, SEED_PRIMES};

#[macro_export]
macro_rules! next_random_value {
    ($seed_resource_mut:expr) => {
        $seed_resource_mut.next_value()
    };
}

#[macro_export]
macro_rules! next_random_range {
    // Exklusive Range: min..max
    ($seed_resource:expr, $min:tt .. $max:tt) => {
        $seed_resource.next_in_range($min, $max)
    };
    // Kommagetrennt, für Ausdrücke als Grenzen
    ($seed_resource:expr, $min:expr, $max:expr) => {
        $seed_resource.next_in_range($min, $max)
    };
}
