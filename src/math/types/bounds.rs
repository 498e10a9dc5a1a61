// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if min.x > max.x || min.y > max.y {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid bounds: min {:?} > max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Punkten
    pub fn from_points(p1: Point2D, p2: Point2D) -> Self {
        Self {
            min: Point2D::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point2D::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Rechteck mit Ursprung (0,0) und gegebener Größe
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::from_points(Point2D::ZERO, Point2D::new(width, height))
    }

    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min = min.min(point);
            max = max.max(point);
        }

        Some(Self { min, max })
    }

    /// Prüft ob die Bounding Box gültig ist
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.is_finite()
            && self.max.is_finite()
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn size(&self) -> Point2D {
        Point2D::new(self.width(), self.height())
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Erweitert die Bounding Box um einen Margin (negativ = verkleinern).
    /// Ein Margin, der die Box umstülpen würde, kollabiert sie auf ihr Zentrum.
    pub fn expand(&self, margin: f64) -> Self {
        let center = self.center();
        let min = Point2D::new(
            (self.min.x - margin).min(center.x),
            (self.min.y - margin).min(center.y),
        );
        let max = Point2D::new(
            (self.max.x + margin).max(center.x),
            (self.max.y + margin).max(center.y),
        );
        Self { min, max }
    }

    /// Innenrechteck nach Abzug eines Paddings auf allen Seiten.
    pub fn inset(&self, padding: f64) -> Self {
        self.expand(-padding)
    }

    /// Erzeugt die vier Eckpunkte der Bounding Box (gegen den Uhrzeigersinn bei +Y nach oben)
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,                             // unten links
            Point2D::new(self.max.x, self.min.y), // unten rechts
            self.max,                             // oben rechts
            Point2D::new(self.min.x, self.max.y), // oben links
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds2D(({:.3}, {:.3}) to ({:.3}, {:.3}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}
