// src/math/point_distribution/mod.rs

// Deklaration der verschiedenen Punktverteilungs-Methoden/Module
pub mod sites;
pub mod voronoi;

// Re-Exporte der wichtigsten Elemente aus den Untermodulen
pub use self::sites::{GenerationArea, SiteGenerator};
pub use self::voronoi::{
    DiagramOutput, DiagramParameters, DiagramSession, DrawableCell, SessionState, VoronoiBuilder,
    VoronoiCell, VoronoiDiagram,
};
