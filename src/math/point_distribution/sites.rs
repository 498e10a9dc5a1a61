// src/math/point_distribution/sites.rs

use crate::math::{
    error::{MathError, MathResult},
    probability::SeedResource,
    types::{Bounds2D, Point2D},
};
use crate::next_random_value;
use serde::{Deserialize, Serialize};

/// Bereich, aus dem das Innenrechteck für die Site-Erzeugung abgeleitet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenerationArea {
    /// Seitenrechteck abzüglich Padding.
    #[default]
    Page,
    /// Bounding Box des Profils abzüglich Padding (fällt ohne Profil auf `Page` zurück).
    ProfileBounds,
}

/// Erzeugt `count` Sites gleichverteilt im Innenrechteck.
///
/// Keine Deduplizierung und kein Mindestabstand: doppelte Sites sind erlaubt
/// und werden vom Voronoi-Aufbau als fehlende Zellen gemeldet.
#[derive(Debug, Clone, Copy)]
pub struct SiteGenerator {
    count: usize,
}

impl SiteGenerator {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Pro Site wird zuerst x, dann y gezogen.
    pub fn generate(&self, area: &Bounds2D, rng: &mut SeedResource) -> MathResult<Vec<Point2D>> {
        if !area.is_valid() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Bounds for site generation are invalid: {}", area),
            });
        }

        let inner_width = area.width();
        let inner_height = area.height();
        let mut sites = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let x = next_random_value!(rng) * inner_width + area.min.x;
            let y = next_random_value!(rng) * inner_height + area.min.y;
            sites.push(Point2D::new(x, y));
        }
        Ok(sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sites_follow_stream_order() {
        let area = Bounds2D::from_points(Point2D::new(1.0, 2.0), Point2D::new(11.0, 7.0));
        let mut rng = SeedResource::from_seed(1);
        let sites = SiteGenerator::new(2).generate(&area, &mut rng).unwrap();

        assert_eq!(sites.len(), 2);
        assert_relative_eq!(sites[0].x, 0.5172668038408779 * 10.0 + 1.0);
        assert_relative_eq!(sites[0].y, 0.309863683127572 * 5.0 + 2.0);
        assert_relative_eq!(sites[1].x, 0.2534379286694102 * 10.0 + 1.0);
        assert_relative_eq!(sites[1].y, 0.4374957133058985 * 5.0 + 2.0);
    }

    #[test]
    fn test_sites_stay_inside_area() {
        let area = Bounds2D::from_size(30.0, 20.0).inset(2.0);
        let mut rng = SeedResource::from_seed(777);
        let sites = SiteGenerator::new(500).generate(&area, &mut rng).unwrap();
        assert_eq!(sites.len(), 500);
        assert!(sites.iter().all(|s| area.contains_point(*s)));
    }

    #[test]
    fn test_invalid_area_rejected() {
        let area = Bounds2D {
            min: Point2D::new(5.0, 0.0),
            max: Point2D::new(0.0, 5.0),
        };
        let mut rng = SeedResource::from_seed(1);
        assert!(SiteGenerator::new(3).generate(&area, &mut rng).is_err());
    }
}
