// src/math/geometry/profile/mod.rs

pub mod clipper;
pub mod import;

pub use clipper::{ClipDecision, ProfileClipper};
pub use import::{ProfileDocument, ProfilePlacement};

use crate::math::{
    algorithms::offset::offset_ring,
    geometry::polygon::core::contains_point,
    types::{Bounds2D, Point2D},
    utils::constants,
};
use bevy::log::debug;
use serde::{Deserialize, Serialize};

/// Referenzkontur aus (möglicherweise getrennten) Teilpfaden.
///
/// Die Koordinateneinheit hängt vom Kontext ab: nach dem Import Zentimeter,
/// nach [`Profile::to_pixels`] Pixel. Die Orientierung der Teilpfade wird
/// nicht geprüft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub paths: Vec<Vec<Point2D>>,
}

impl Profile {
    pub fn new(paths: Vec<Vec<Point2D>>) -> Self {
        Self { paths }
    }

    /// Rechteckiges Profil, z.B. die volle Seite.
    pub fn from_bounds(bounds: &Bounds2D) -> Self {
        Self::new(vec![bounds.corners().to_vec()])
    }

    pub fn is_empty(&self) -> bool {
        self.paths.iter().all(|path| path.is_empty())
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.paths.iter().flatten().copied())
    }

    pub fn map_points(&self, f: impl Fn(Point2D) -> Point2D) -> Self {
        Self::new(
            self.paths
                .iter()
                .map(|path| path.iter().map(|p| f(*p)).collect())
                .collect(),
        )
    }

    /// Skaliert alle Koordinaten, z.B. von cm nach px.
    pub fn to_pixels(&self, px_per_cm: f64) -> Self {
        self.map_points(|p| p * px_per_cm)
    }

    /// Geschlossene Ringe aus den Teilpfaden.
    ///
    /// Ein Teilpfad mit identischem Anfangs- und Endpunkt bildet einen eigenen Ring,
    /// aufeinanderfolgende offene Teilpfade werden zu einem Ring verkettet.
    /// Aufeinanderfolgende Duplikate entfallen, Ringe mit < 3 Punkten ebenfalls.
    pub fn rings(&self) -> Vec<Vec<Point2D>> {
        let mut rings = Vec::new();
        let mut chain: Vec<Point2D> = Vec::new();

        for path in self.paths.iter().filter(|path| !path.is_empty()) {
            if path.len() >= 3 && is_same_point(path[0], path[path.len() - 1]) {
                flush_ring(&mut chain, &mut rings);
                let mut own = Vec::with_capacity(path.len());
                push_deduped(&mut own, path);
                flush_ring(&mut own, &mut rings);
            } else {
                push_deduped(&mut chain, path);
            }
        }
        flush_ring(&mut chain, &mut rings);
        rings
    }

    /// Rückt die Ringe um `distance` ins Innere der Region.
    ///
    /// Ringe, die in einer ungeraden Anzahl anderer Ringe liegen, gelten als Löcher
    /// und wachsen entsprechend. Kollabierende Ringe entfallen.
    pub fn inset(&self, distance: f64) -> Vec<Vec<Point2D>> {
        let rings = self.rings();
        if distance.abs() < constants::EPSILON {
            return rings;
        }

        let depths: Vec<usize> = rings
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                rings
                    .iter()
                    .enumerate()
                    .filter(|(j, other)| *j != i && contains_point(other, ring[0]))
                    .count()
            })
            .collect();

        rings
            .iter()
            .zip(depths)
            .filter_map(|(ring, depth)| {
                let signed = if depth % 2 == 1 { -distance } else { distance };
                match offset_ring(ring, signed) {
                    Ok(offset) => Some(offset),
                    Err(err) => {
                        debug!("Profile ring with {} points dropped during inset: {}", ring.len(), err);
                        None
                    }
                }
            })
            .collect()
    }
}

fn is_same_point(a: Point2D, b: Point2D) -> bool {
    a.distance_squared(b) <= constants::EPSILON_SQUARED
}

fn push_deduped(target: &mut Vec<Point2D>, points: &[Point2D]) {
    for p in points {
        if target.last().is_none_or(|last| !is_same_point(*last, *p)) {
            target.push(*p);
        }
    }
}

fn flush_ring(chain: &mut Vec<Point2D>, rings: &mut Vec<Vec<Point2D>>) {
    let mut ring = std::mem::take(chain);
    if ring.len() > 1 && is_same_point(ring[0], ring[ring.len() - 1]) {
        ring.pop();
    }
    if ring.len() >= 3 {
        rings.push(ring);
    }
}
