// src/math/point_distribution/voronoi/config.rs

use crate::math::{
    algorithms::point_relaxation::LloydConfig,
    error::{MathError, MathResult},
    geometry::{
        cell::{CellEdgeStyle, SymbolRotation},
        profile::Profile,
    },
    point_distribution::sites::GenerationArea,
    types::{Bounds2D, DEFAULT_PIXELS_PER_INCH, cm_to_px},
};
use bevy::log::warn;
use serde::{Deserialize, Serialize};

/// A4 quer abzüglich Druckränder (cm).
pub const DEFAULT_PAGE_WIDTH_CM: f64 = 29.7 - 1.9 - 1.32;
pub const DEFAULT_PAGE_HEIGHT_CM: f64 = 21.0 - 2.54 - 3.67;

pub const MIN_CELL_COUNT: usize = 2;
pub const MAX_CELL_COUNT: usize = 2000;
pub const MIN_SCALE_PERCENT: f64 = 10.0;
pub const MAX_SCALE_PERCENT: f64 = 200.0;

/// Parameter eines Generierungsdurchlaufs. Physikalische Werte in cm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramParameters {
    /// Anzahl der Sites (2..=2000).
    pub cell_count: usize,
    pub page_width_cm: f64,
    pub page_height_cm: f64,
    /// Rand auf jeder Seite, höchstens ein Viertel der kleineren Seitenlänge.
    pub padding_cm: f64,
    /// Zellgröße in Prozent (10..=200), für Symbole deren Skalierung.
    pub scale_percent: f64,
    /// Sichtbarer Abstand zwischen Nachbarzellen, nur für Curved/Straight.
    pub gap_cm: f64,
    pub edge_style: CellEdgeStyle,
    pub lloyd: LloydConfig,
    pub pixels_per_inch: f64,
    pub show_page_border: bool,
    pub clip_outside: bool,
    pub clip_intersecting: bool,
    /// Profil in cm, im Seitenraum.
    pub profile: Option<Profile>,
    /// `None` zieht den Seed aus der Uhr.
    pub seed: Option<u64>,
    pub generation_area: GenerationArea,
    pub symbol_rotation: SymbolRotation,
    /// Optionale Ablehnung zu kleiner Zellen (nur Prozent-Modus).
    pub reject_small_cells: bool,
}

impl Default for DiagramParameters {
    fn default() -> Self {
        Self {
            cell_count: 100,
            page_width_cm: DEFAULT_PAGE_WIDTH_CM,
            page_height_cm: DEFAULT_PAGE_HEIGHT_CM,
            padding_cm: 0.0,
            scale_percent: 90.0,
            gap_cm: 0.0,
            edge_style: CellEdgeStyle::Curved,
            lloyd: LloydConfig::default(),
            pixels_per_inch: DEFAULT_PIXELS_PER_INCH,
            show_page_border: true,
            clip_outside: false,
            clip_intersecting: false,
            profile: None,
            seed: None,
            generation_area: GenerationArea::Page,
            symbol_rotation: SymbolRotation::Random,
            reject_small_cells: false,
        }
    }
}

impl DiagramParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_count(mut self, count: usize) -> Self {
        self.cell_count = count;
        self
    }

    pub fn with_page_size(mut self, width_cm: f64, height_cm: f64) -> Self {
        self.page_width_cm = width_cm;
        self.page_height_cm = height_cm;
        self
    }

    pub fn with_padding(mut self, padding_cm: f64) -> Self {
        self.padding_cm = padding_cm;
        self
    }

    pub fn with_scale_percent(mut self, percent: f64) -> Self {
        self.scale_percent = percent;
        self
    }

    pub fn with_gap(mut self, gap_cm: f64) -> Self {
        self.gap_cm = gap_cm;
        self
    }

    pub fn with_edge_style(mut self, style: CellEdgeStyle) -> Self {
        self.edge_style = style;
        self
    }

    pub fn with_lloyd_iterations(mut self, iterations: usize) -> Self {
        self.lloyd.iterations = iterations;
        self
    }

    pub fn with_lloyd(mut self, lloyd: LloydConfig) -> Self {
        self.lloyd = lloyd;
        self
    }

    pub fn with_pixels_per_inch(mut self, pixels_per_inch: f64) -> Self {
        self.pixels_per_inch = pixels_per_inch;
        self
    }

    pub fn with_page_border(mut self, show: bool) -> Self {
        self.show_page_border = show;
        self
    }

    pub fn with_clipping(mut self, clip_outside: bool, clip_intersecting: bool) -> Self {
        self.clip_outside = clip_outside;
        self.clip_intersecting = clip_intersecting;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_generation_area(mut self, area: GenerationArea) -> Self {
        self.generation_area = area;
        self
    }

    pub fn with_symbol_rotation(mut self, rotation: SymbolRotation) -> Self {
        self.symbol_rotation = rotation;
        self
    }

    pub fn with_small_cell_rejection(mut self, reject: bool) -> Self {
        self.reject_small_cells = reject;
        self
    }

    /// Umrechnungsfaktor cm -> px.
    pub fn px_per_cm(&self) -> f64 {
        cm_to_px(1.0, self.pixels_per_inch)
    }

    pub fn to_px(&self, value_cm: f64) -> f64 {
        cm_to_px(value_cm, self.pixels_per_inch)
    }

    /// Seitenrechteck in px, Ursprung oben links.
    pub fn page_bounds_px(&self) -> Bounds2D {
        Bounds2D::from_size(self.to_px(self.page_width_cm), self.to_px(self.page_height_cm))
    }

    pub fn padding_px(&self) -> f64 {
        self.to_px(self.padding_cm)
    }

    pub fn gap_px(&self) -> f64 {
        self.to_px(self.gap_cm)
    }

    /// Profil in px, falls vorhanden und nicht leer.
    pub fn profile_px(&self) -> Option<Profile> {
        self.profile
            .as_ref()
            .filter(|profile| !profile.is_empty())
            .map(|profile| profile.to_pixels(self.px_per_cm()))
    }

    /// Innenrechteck für Sites und Zellen: Seite oder Profil-Bounding-Box, abzüglich Padding.
    pub fn inner_bounds_px(&self) -> Bounds2D {
        let outer = match self.generation_area {
            GenerationArea::Page => None,
            GenerationArea::ProfileBounds => self.profile_px().and_then(|p| p.bounds()),
        }
        .unwrap_or_else(|| self.page_bounds_px());
        outer.inset(self.padding_px())
    }

    /// Profil-Bounding-Box in cm, wenn die Sites darin erzeugt werden.
    fn generation_bounds_cm(&self) -> Option<Bounds2D> {
        match self.generation_area {
            GenerationArea::Page => None,
            GenerationArea::ProfileBounds => self
                .profile
                .as_ref()
                .filter(|profile| !profile.is_empty())
                .and_then(|profile| profile.bounds()),
        }
    }

    /// Prüft alle Bereiche, bevor irgendetwas berechnet wird.
    pub fn validate(&self) -> MathResult<()> {
        let result = self.check_ranges();
        if let Err(err) = &result {
            warn!("DiagramParameters rejected: {}", err);
        }
        result
    }

    fn check_ranges(&self) -> MathResult<()> {
        if !(MIN_CELL_COUNT..=MAX_CELL_COUNT).contains(&self.cell_count) {
            return Err(MathError::invalid_parameter(
                "cell_count",
                self.cell_count,
                format!("{}..={}", MIN_CELL_COUNT, MAX_CELL_COUNT),
            ));
        }
        if !(self.page_width_cm > 0.0 && self.page_width_cm.is_finite()) {
            return Err(MathError::invalid_parameter("page_width_cm", self.page_width_cm, "> 0"));
        }
        if !(self.page_height_cm > 0.0 && self.page_height_cm.is_finite()) {
            return Err(MathError::invalid_parameter("page_height_cm", self.page_height_cm, "> 0"));
        }
        let max_padding = self.generation_bounds_cm().map_or(
            self.page_width_cm.min(self.page_height_cm),
            |bounds| bounds.width().min(bounds.height()),
        ) / 4.0;
        if !(self.padding_cm >= 0.0 && self.padding_cm <= max_padding) {
            return Err(MathError::invalid_parameter(
                "padding_cm",
                self.padding_cm,
                format!("0..={}", max_padding),
            ));
        }
        if !(self.scale_percent >= MIN_SCALE_PERCENT && self.scale_percent <= MAX_SCALE_PERCENT) {
            return Err(MathError::invalid_parameter(
                "scale_percent",
                self.scale_percent,
                format!("{}..={}", MIN_SCALE_PERCENT, MAX_SCALE_PERCENT),
            ));
        }
        if !(self.gap_cm >= 0.0 && self.gap_cm.is_finite()) {
            return Err(MathError::invalid_parameter("gap_cm", self.gap_cm, ">= 0"));
        }
        if !(self.lloyd.omega > 0.0 && self.lloyd.omega <= 1.0) {
            return Err(MathError::invalid_parameter("lloyd.omega", self.lloyd.omega, "(0, 1]"));
        }
        if !(self.pixels_per_inch > 0.0 && self.pixels_per_inch.is_finite()) {
            return Err(MathError::invalid_parameter(
                "pixels_per_inch",
                self.pixels_per_inch,
                "> 0",
            ));
        }
        self.lloyd.validate()
    }
}
