// src/math/geometry/cell/mod.rs

// Vom Zellpolygon zum zeichenbaren Pfad: Stil, Aufbau, Skalierung/Gap
pub mod builder;
pub mod path;
pub mod scaling;
pub mod style;

pub use builder::{CellPathBuilder, SymbolRotation};
pub use path::{CellPath, CurveSegment, Symbol, SymbolShape};
pub use scaling::{CellSizing, inset_path, is_too_small, remove_small_bits, scale_path};
pub use style::CellEdgeStyle;
