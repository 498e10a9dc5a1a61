// src/math/geometry/polygon/mod.rs

pub mod core;
pub mod transformations;
pub mod utils;

pub use self::core::{
    contains_point, ensure_ccw, perimeter, polygon_area, polygon_centroid, signed_area,
};
pub use self::transformations::AffineTransform;
