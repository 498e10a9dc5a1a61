// src/math/geometry/cell/builder.rs

use crate::math::{
    geometry::cell::{
        path::{CellPath, CurveSegment, Symbol, SymbolShape},
        style::CellEdgeStyle,
    },
    types::Point2D,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Eckradius gerundeter Quadrate relativ zur Kantenlänge.
pub const ROUNDED_CORNER_RATIO: f64 = 0.2;
pub const STAR_POINTS: usize = 6;
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Rotation der Symbole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SymbolRotation {
    /// Zufällig in [0, 360) Grad; rein kosmetisch, nicht reproduzierbar.
    #[default]
    Random,
    /// Feste Rotation in Grad.
    Fixed(f64),
}

/// Baut aus einem Zellpolygon den zeichenbaren Pfad für einen Stil.
#[derive(Debug, Clone, Copy)]
pub struct CellPathBuilder {
    style: CellEdgeStyle,
    symbol_scale: f64,
    rotation: SymbolRotation,
}

impl CellPathBuilder {
    pub fn new(style: CellEdgeStyle) -> Self {
        Self {
            style,
            symbol_scale: 1.0,
            rotation: SymbolRotation::default(),
        }
    }

    /// Skalierung der Symbole in Prozent.
    pub fn with_symbol_scale_percent(mut self, percent: f64) -> Self {
        self.symbol_scale = percent / 100.0;
        self
    }

    pub fn with_rotation(mut self, rotation: SymbolRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn style(&self) -> CellEdgeStyle {
        self.style
    }

    /// `None`, wenn die Site keine Zelle hat oder ein Symbol nicht bemessen werden kann.
    pub fn build(
        &self,
        polygon: Option<&[Point2D]>,
        site: Point2D,
        neighbor_sites: &[Point2D],
    ) -> Option<CellPath> {
        self.build_with_rng(polygon, site, neighbor_sites, &mut rand::rng())
    }

    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        polygon: Option<&[Point2D]>,
        site: Point2D,
        neighbor_sites: &[Point2D],
        rng: &mut R,
    ) -> Option<CellPath> {
        let polygon = polygon.filter(|p| p.len() >= 3)?;

        match self.style {
            CellEdgeStyle::Curved => Some(curved_path(polygon)),
            CellEdgeStyle::Straight => Some(CellPath::Polygon {
                points: polygon.to_vec(),
            }),
            style => {
                let shape = symbol_shape(style)?;
                let min_distance = neighbor_sites
                    .iter()
                    .map(|n| n.distance(site))
                    .fold(f64::INFINITY, f64::min);
                if !min_distance.is_finite() || min_distance <= 0.0 {
                    return None;
                }
                let rotation = match self.rotation {
                    SymbolRotation::Random => rng.random_range(0.0..360.0),
                    SymbolRotation::Fixed(degrees) => degrees,
                };
                Some(CellPath::Symbol(Symbol {
                    shape,
                    center: site,
                    radius: min_distance / 2.0,
                    rotation,
                    scale: self.symbol_scale,
                }))
            }
        }
    }
}

/// Glatte Kurve: Anker in der Kantenmitte, Handles je halbe Kante.
pub fn curved_path(polygon: &[Point2D]) -> CellPath {
    let segments = polygon
        .iter()
        .enumerate()
        .map(|(i, &point)| {
            let next = polygon[(i + 1) % polygon.len()];
            let vector = (next - point) / 2.0;
            CurveSegment::new(point + vector, -vector, vector)
        })
        .collect();
    CellPath::Curve { segments }
}

fn symbol_shape(style: CellEdgeStyle) -> Option<SymbolShape> {
    Some(match style {
        CellEdgeStyle::Circle => SymbolShape::Circle,
        CellEdgeStyle::Square => SymbolShape::Square,
        CellEdgeStyle::SquareRounded => SymbolShape::RoundedSquare {
            corner_ratio: ROUNDED_CORNER_RATIO,
        },
        CellEdgeStyle::Star => SymbolShape::Star {
            points: STAR_POINTS,
            inner_ratio: STAR_INNER_RATIO,
        },
        CellEdgeStyle::Triangle => SymbolShape::RegularPolygon { sides: 3 },
        CellEdgeStyle::Pentagon => SymbolShape::RegularPolygon { sides: 5 },
        CellEdgeStyle::Hexagon => SymbolShape::RegularPolygon { sides: 6 },
        CellEdgeStyle::Octagon => SymbolShape::RegularPolygon { sides: 8 },
        CellEdgeStyle::Curved | CellEdgeStyle::Straight => return None,
    })
}
