// src/math/geometry/cell/path.rs

use crate::math::{
    geometry::polygon::{
        core::perimeter,
        transformations::AffineTransform,
        utils::builders::{
            GeometryGenerators, create_circle_vertices, create_regular_polygon_vertices,
            create_square_vertices, create_star_vertices, cubic_bezier,
        },
    },
    types::{Bounds2D, Point2D, vertex_mean},
    utils::{angles::deg_to_rad, constants::PI},
};
use serde::{Deserialize, Serialize};

/// Abtastpunkte pro Kurvensegment beim Abflachen.
pub const CURVE_SAMPLES: usize = 8;

/// Abtastpunkte für Kreise (und gerundete Ecken, verteilt auf vier Ecken).
pub const CIRCLE_SAMPLES: usize = 64;

/// Ankerpunkt einer geschlossenen kubischen Bézier-Kurve.
/// Die Handles sind relativ zum Ankerpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub point: Point2D,
    pub handle_in: Point2D,
    pub handle_out: Point2D,
}

impl CurveSegment {
    pub fn new(point: Point2D, handle_in: Point2D, handle_out: Point2D) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    /// Ecke ohne Handles.
    pub fn corner(point: Point2D) -> Self {
        Self::new(point, Point2D::ZERO, Point2D::ZERO)
    }
}

/// Form eines Symbols.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SymbolShape {
    Circle,
    /// Achsenparallel (vor der Rotation), halbe Kantenlänge = Radius.
    Square,
    /// Wie `Square`, Eckradius = `corner_ratio` * Kantenlänge.
    RoundedSquare { corner_ratio: f64 },
    Star { points: usize, inner_ratio: f64 },
    RegularPolygon { sides: usize },
}

/// Parametrisches Symbol um eine Site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub shape: SymbolShape,
    pub center: Point2D,
    /// Charakteristischer Radius vor Skalierung (halber Abstand zum nächsten Nachbarn).
    pub radius: f64,
    /// Rotation in Grad um `center`.
    pub rotation: f64,
    pub scale: f64,
}

impl Symbol {
    /// Radius nach Skalierung.
    pub fn scaled_radius(&self) -> f64 {
        self.radius * self.scale
    }

    pub fn vertex_count(&self) -> Option<usize> {
        match self.shape {
            SymbolShape::Circle | SymbolShape::RoundedSquare { .. } => None,
            SymbolShape::Square => Some(4),
            SymbolShape::Star { points, .. } => Some(points * 2),
            SymbolShape::RegularPolygon { sides } => Some(sides),
        }
    }

    /// Umriss als Polygon (Kreise und runde Ecken abgetastet).
    pub fn outline(&self) -> Vec<Point2D> {
        let r = self.scaled_radius();
        // Erste Spitze zeigt nach oben (+Y nach unten).
        let up = -PI / 2.0;
        let vertices = match self.shape {
            SymbolShape::Circle => create_circle_vertices(self.center, r, CIRCLE_SAMPLES, 0.0),
            SymbolShape::Square => create_square_vertices(self.center, r),
            SymbolShape::RoundedSquare { corner_ratio } => GeometryGenerators::rounded_rectangle(
                self.center,
                2.0 * r,
                2.0 * r,
                corner_ratio * 2.0 * r,
                CIRCLE_SAMPLES / 4,
            ),
            SymbolShape::Star {
                points,
                inner_ratio,
            } => create_star_vertices(self.center, r * inner_ratio, r, points, up),
            SymbolShape::RegularPolygon { sides } => {
                create_regular_polygon_vertices(self.center, r, sides, up)
            }
        };

        if self.rotation == 0.0 {
            return vertices;
        }
        AffineTransform::rotation_around(deg_to_rad(self.rotation), self.center)
            .transform_points(&vertices)
    }
}

/// Zeichenbarer Pfad einer Zelle, markiert mit seiner Art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellPath {
    /// Geschlossenes Polygon (Straight oder Ergebnis eines Profil-Schnitts).
    Polygon { points: Vec<Point2D> },
    /// Geschlossene, geglättete Kurve (Curved).
    Curve { segments: Vec<CurveSegment> },
    Symbol(Symbol),
}

impl CellPath {
    pub fn is_closed(&self) -> bool {
        true
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, CellPath::Symbol(_))
    }

    /// Ankerpunkte: Ecken, Kurvenanker oder Symbolumriss.
    pub fn anchors(&self) -> Vec<Point2D> {
        match self {
            CellPath::Polygon { points } => points.clone(),
            CellPath::Curve { segments } => segments.iter().map(|s| s.point).collect(),
            CellPath::Symbol(symbol) => symbol.outline(),
        }
    }

    pub fn segment_count(&self) -> usize {
        match self {
            CellPath::Polygon { points } => points.len(),
            CellPath::Curve { segments } => segments.len(),
            CellPath::Symbol(symbol) => symbol.vertex_count().unwrap_or(CIRCLE_SAMPLES),
        }
    }

    /// Umriss als Polygon ohne doppelten Endpunkt.
    pub fn flatten(&self) -> Vec<Point2D> {
        match self {
            CellPath::Polygon { points } => points.clone(),
            CellPath::Curve { segments } => flatten_curve(segments, CURVE_SAMPLES),
            CellPath::Symbol(symbol) => symbol.outline(),
        }
    }

    /// Länge des geschlossenen Umrisses.
    pub fn length(&self) -> f64 {
        perimeter(&self.flatten())
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.flatten())
    }

    /// Mittelwert der Ankerpunkte (Bezugspunkt für Skalierung).
    pub fn anchor_mean(&self) -> Option<Point2D> {
        match self {
            CellPath::Symbol(symbol) => Some(symbol.center),
            _ => vertex_mean(&self.anchors()),
        }
    }
}

/// Tastet eine geschlossene Bézier-Kurve ab.
pub fn flatten_curve(segments: &[CurveSegment], samples: usize) -> Vec<Point2D> {
    let samples = samples.max(1);
    let mut points = Vec::with_capacity(segments.len() * samples);
    for (i, segment) in segments.iter().enumerate() {
        let next = segments[(i + 1) % segments.len()];
        let p0 = segment.point;
        let p1 = segment.point + segment.handle_out;
        let p2 = next.point + next.handle_in;
        let p3 = next.point;
        points.push(p0);
        if p1 == p0 && p2 == p3 {
            continue; // gerades Segment
        }
        for k in 1..samples {
            points.push(cubic_bezier(p0, p1, p2, p3, k as f64 / samples as f64));
        }
    }
    points
}
