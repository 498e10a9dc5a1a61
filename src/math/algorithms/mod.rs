// src/math/algorithms/mod.rs

pub mod boolean; // geo-basierte Regionen für den Profil-Zuschnitt
pub mod clipping;
pub mod offset;
pub mod point_relaxation;

pub use self::clipping::{HalfPlane, PolygonClipper};
pub use self::offset::offset_ring;
pub use self::point_relaxation::{
    LloydConfig, LloydRelaxation, LloydRelaxationStats, RelaxationSnapshot, RelaxationSteps,
    StochasticRelaxation,
};
