// src/math/algorithms/point_relaxation/lloyd.rs

use crate::math::{
    error::{MathError, MathResult},
    point_distribution::voronoi::VoronoiDiagram,
    types::Point2D,
};
use bevy::log::trace;
use serde::{Deserialize, Serialize};

pub use crate::math::geometry::polygon::core::polygon_centroid;

/// Standard-Dämpfung: Anteil des Weges zum Zentroid pro Iteration.
pub const LLOYD_OMEGA: f64 = 0.2;

/// Konfiguration für den Lloyd-Relaxationsalgorithmus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LloydConfig {
    /// Anzahl der Iterationen (0 = keine Relaxation).
    pub iterations: usize,
    /// Dämpfungsfaktor in (0, 1]; 1.0 setzt jede Site direkt auf ihren Zentroid.
    pub omega: f64,
    /// Optionaler Konvergenzmodus: Abbruch, sobald die maximale Bewegung darunter fällt.
    pub convergence_tolerance: Option<f64>,
}

impl Default for LloydConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            omega: LLOYD_OMEGA,
            convergence_tolerance: None,
        }
    }
}

impl LloydConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = Some(tolerance);
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !(self.omega > 0.0 && self.omega <= 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Lloyd omega must lie in (0, 1], got {}", self.omega),
            });
        }
        if let Some(tolerance) = self.convergence_tolerance {
            if !(tolerance >= 0.0) {
                return Err(MathError::InvalidConfiguration {
                    message: format!("Convergence tolerance must be >= 0, got {}", tolerance),
                });
            }
        }
        Ok(())
    }
}

/// Statistiken eines vollständigen Relaxationsdurchlaufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LloydRelaxationStats {
    pub iterations_performed: usize,
    pub max_movement_last_iteration: f64,
    pub converged: bool,
}

/// Zwischenstand nach einem Relaxationsschritt.
#[derive(Debug, Clone)]
pub struct RelaxationSnapshot {
    /// 1-basierte Nummer des eben ausgeführten Schritts.
    pub iteration: usize,
    /// Verbleibende Schritte danach.
    pub remaining: usize,
    pub max_displacement: f64,
    pub diagram: VoronoiDiagram,
}

/// Deterministische Lloyd-Relaxation mit Dämpfung.
#[derive(Debug, Clone, Copy)]
pub struct LloydRelaxation {
    config: LloydConfig,
}

impl LloydRelaxation {
    pub fn new(config: LloydConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LloydConfig {
        &self.config
    }

    /// Ein Schritt: jede Site mit Zelle bewegt sich um `omega` Richtung Zentroid,
    /// danach wird das Diagramm neu berechnet. Gibt die maximale Bewegung zurück.
    pub fn step(&self, diagram: &mut VoronoiDiagram) -> f64 {
        let mut sites = diagram.sites().to_vec();
        let mut max_movement = 0.0_f64;

        for (index, site) in sites.iter_mut().enumerate() {
            let Some(centroid) = diagram.cell_polygon(index).and_then(polygon_centroid) else {
                continue; // ohne Zelle bleibt die Site stehen
            };
            let moved = *site + (centroid - *site) * self.config.omega;
            max_movement = max_movement.max(site.distance(moved));
            *site = moved;
        }

        diagram.update(sites);
        max_movement
    }

    /// Prüft, ob nach einem Schritt mit dieser Bewegung abgebrochen wird.
    pub fn has_converged(&self, max_movement: f64) -> bool {
        self.config
            .convergence_tolerance
            .is_some_and(|tolerance| max_movement < tolerance)
    }

    /// Lazy, endliche und neu startbare Folge von Schritten.
    pub fn steps(&self, diagram: VoronoiDiagram) -> RelaxationSteps {
        RelaxationSteps {
            relaxation: *self,
            initial_sites: diagram.sites().to_vec(),
            diagram,
            remaining: self.config.iterations,
            stats: LloydRelaxationStats::default(),
        }
    }

    /// Führt alle Schritte synchron aus, identisch zum Abholen über [`Self::steps`].
    pub fn relax(&self, diagram: &mut VoronoiDiagram) -> LloydRelaxationStats {
        let mut steps = self.steps(diagram.clone());
        while let Some(max_movement) = steps.advance() {
            trace!(
                "LloydRelaxation::relax - iteration {} max movement {:.6}",
                steps.stats().iterations_performed,
                max_movement
            );
        }
        let stats = steps.stats().clone();
        *diagram = steps.into_diagram();
        stats
    }
}

/// Iterator über Relaxationsschritte; ein `next()` pro externem Tick.
#[derive(Debug, Clone)]
pub struct RelaxationSteps {
    relaxation: LloydRelaxation,
    initial_sites: Vec<Point2D>,
    diagram: VoronoiDiagram,
    remaining: usize,
    stats: LloydRelaxationStats,
}

impl RelaxationSteps {
    pub fn remaining(&self) -> usize {
        if self.stats.converged { 0 } else { self.remaining }
    }

    /// Bisheriger Verlauf seit Start oder `restart()`.
    pub fn stats(&self) -> &LloydRelaxationStats {
        &self.stats
    }

    /// Ein Schritt ohne Snapshot. `None`, wenn der Zähler abgelaufen oder die Folge konvergiert ist.
    pub fn advance(&mut self) -> Option<f64> {
        if self.remaining() == 0 {
            return None;
        }
        let max_displacement = self.relaxation.step(&mut self.diagram);
        self.remaining -= 1;
        self.stats.iterations_performed += 1;
        self.stats.max_movement_last_iteration = max_displacement;
        self.stats.converged = self.relaxation.has_converged(max_displacement);
        Some(max_displacement)
    }

    pub fn diagram(&self) -> &VoronoiDiagram {
        &self.diagram
    }

    pub fn into_diagram(self) -> VoronoiDiagram {
        self.diagram
    }

    /// Setzt Sites und Zähler auf den Startzustand zurück.
    pub fn restart(&mut self) {
        self.diagram.update(self.initial_sites.clone());
        self.remaining = self.relaxation.config.iterations;
        self.stats = LloydRelaxationStats::default();
    }
}

impl Iterator for RelaxationSteps {
    type Item = RelaxationSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        let max_displacement = self.advance()?;
        Some(RelaxationSnapshot {
            iteration: self.stats.iterations_performed,
            remaining: self.remaining(),
            max_displacement,
            diagram: self.diagram.clone(),
        })
    }
}
