// src/math/point_distribution/voronoi/mod.rs

// Deklaration der Untermodule für Voronoi-spezifische Funktionalität
pub mod builder;
pub mod config; // DiagramParameters
pub mod error;
pub mod session;
pub mod voronoi_diagram; // VoronoiCell, VoronoiDiagram

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Voronoi-Elemente
pub use self::builder::{DiagramOutput, DrawableCell, GenerationStats, VoronoiBuilder};
pub use self::config::DiagramParameters;
pub use self::error::CellError;
pub use self::session::{DiagramSession, SessionState};
pub use self::voronoi_diagram::{VoronoiCell, VoronoiDiagram};
