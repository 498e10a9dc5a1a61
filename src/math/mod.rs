pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod probability;
pub mod types;
pub mod utils;

// Re-Exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::point_relaxation::{LloydConfig, LloydRelaxation, StochasticRelaxation},
        error::{MathError, MathResult},
        geometry::{
            cell::{CellEdgeStyle, CellPath, CurveSegment, Symbol, SymbolRotation, SymbolShape},
            profile::{Profile, ProfileDocument, ProfilePlacement},
        },
        point_distribution::{
            GenerationArea,
            voronoi::{
                DiagramOutput, DiagramParameters, DiagramSession, DrawableCell, SessionState,
                VoronoiBuilder, VoronoiDiagram,
            },
        },
        probability::SeedResource,
        types::*,
    };
}
