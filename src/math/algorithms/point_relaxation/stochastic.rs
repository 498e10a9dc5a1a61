// src/math/algorithms/point_relaxation/stochastic.rs

use crate::math::{
    algorithms::point_relaxation::polygon_centroid, point_distribution::voronoi::VoronoiDiagram,
    types::Point2D,
};
use bevy::log::debug;
use rand::Rng;

/// Ab dieser Distanz zum Zentroid wird nur der halbe Weg gegangen.
pub const MAX_FULL_STEP: f64 = 2.0;

/// Wahrscheinlichkeitsbudget für Absterben und Teilung, verteilt auf alle Zellen.
pub const EVENT_PROBABILITY: f64 = 0.1;

/// Nicht-deterministische Relaxation mit zufälligem Absterben und Teilung ("Mitose") von Sites.
///
/// Die Site-Anzahl kann sich pro Schritt ändern. Der Zufall stammt aus `rand`
/// und ist bewusst nicht reproduzierbar; für reproduzierbare Diagramme
/// `LloydRelaxation` verwenden.
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticRelaxation;

/// Ergebnis eines stochastischen Schritts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StochasticStepStats {
    pub dropped: usize,
    pub split: usize,
    pub max_movement: f64,
}

impl StochasticRelaxation {
    pub fn new() -> Self {
        Self
    }

    pub fn is_deterministic(&self) -> bool {
        false
    }

    /// Ein Schritt mit dem Thread-RNG.
    pub fn step(&self, diagram: &mut VoronoiDiagram) -> StochasticStepStats {
        self.step_with_rng(diagram, &mut rand::rng())
    }

    pub fn step_with_rng<R: Rng + ?Sized>(
        &self,
        diagram: &mut VoronoiDiagram,
        rng: &mut R,
    ) -> StochasticStepStats {
        let mut stats = StochasticStepStats::default();
        let cell_count = diagram.cell_count();
        if cell_count == 0 {
            return stats;
        }
        let p = EVENT_PROBABILITY / cell_count as f64;
        let mut next_sites: Vec<Point2D> = Vec::with_capacity(diagram.len() + 1);

        for (index, &old) in diagram.sites().iter().enumerate() {
            let Some(centroid) = diagram.cell_polygon(index).and_then(polygon_centroid) else {
                next_sites.push(old);
                continue;
            };

            let rn: f64 = rng.random();
            if rn < p {
                stats.dropped += 1;
                continue;
            }

            let dist = old.distance(centroid);
            let moved = if dist > MAX_FULL_STEP {
                (centroid + old) * 0.5
            } else {
                centroid
            };
            stats.max_movement = stats.max_movement.max(old.distance(moved));

            if rn > 1.0 - p && dist > 0.0 {
                let half = dist / 2.0;
                next_sites.push(moved + (moved - old) / half);
                stats.split += 1;
            }
            next_sites.push(moved);
        }

        if stats.dropped > 0 || stats.split > 0 {
            debug!(
                "StochasticRelaxation::step - dropped {}, split {}, {} sites now.",
                stats.dropped,
                stats.split,
                next_sites.len()
            );
        }
        diagram.update(next_sites);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Bounds2D;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Liefert immer ~0.5.
    struct HalfRng;

    impl rand::RngCore for HalfRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX / 2
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX / 2
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0x7f);
        }
    }

    #[test]
    fn test_flagged_non_deterministic() {
        assert!(!StochasticRelaxation::new().is_deterministic());
    }

    #[test]
    fn test_site_count_changes_only_by_events() {
        let clip = Bounds2D::from_size(50.0, 50.0);
        let sites: Vec<Point2D> = (0..25)
            .map(|i| Point2D::new(3.0 + (i % 5) as f64 * 9.7, 4.0 + (i / 5) as f64 * 9.1))
            .collect();
        let mut diagram = VoronoiDiagram::build(sites, clip);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let before = diagram.len();
            let stats = StochasticRelaxation::new().step_with_rng(&mut diagram, &mut rng);
            assert_eq!(diagram.len(), before - stats.dropped + stats.split);
            assert!(diagram.sites().iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn test_large_moves_are_halved() {
        let clip = Bounds2D::from_size(10.0, 10.0);
        let mut diagram = VoronoiDiagram::build(vec![Point2D::new(1.0, 1.0)], clip);
        // Mit einer Zelle ist p = 0.1; ein Wert von 0.5 löst kein Ereignis aus.
        let mut rng = HalfRng;
        let stats = StochasticRelaxation::new().step_with_rng(&mut diagram, &mut rng);
        assert_eq!(stats.dropped + stats.split, 0);
        assert_eq!(diagram.sites()[0], Point2D::new(3.0, 3.0));
    }
}
