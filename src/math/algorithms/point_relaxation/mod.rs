// src/math/algorithms/point_relaxation/mod.rs

pub mod lloyd;
pub mod stochastic;

pub use self::lloyd::{
    LloydConfig, LloydRelaxation, LloydRelaxationStats, RelaxationSnapshot, RelaxationSteps,
    polygon_centroid,
};
pub use self::stochastic::{StochasticRelaxation, StochasticStepStats};
