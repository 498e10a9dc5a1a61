// src/math/geometry/cell/style.rs

use serde::{Deserialize, Serialize};

/// Darstellung einer Zelle: aus dem Zellpolygon abgeleitet (Curved/Straight)
/// oder als Symbol um die Site, dessen Größe vom nächsten Nachbarn abhängt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellEdgeStyle {
    #[default]
    Curved,
    Straight,
    Circle,
    Square,
    SquareRounded,
    Star,
    Triangle,
    Pentagon,
    Hexagon,
    Octagon,
}

impl CellEdgeStyle {
    pub const ALL: [CellEdgeStyle; 10] = [
        CellEdgeStyle::Curved,
        CellEdgeStyle::Straight,
        CellEdgeStyle::Circle,
        CellEdgeStyle::Square,
        CellEdgeStyle::SquareRounded,
        CellEdgeStyle::Star,
        CellEdgeStyle::Triangle,
        CellEdgeStyle::Pentagon,
        CellEdgeStyle::Hexagon,
        CellEdgeStyle::Octagon,
    ];

    /// Index wie in der Stil-Auswahl des Editors (0 = Curved ... 9 = Octagon).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_symbol(self) -> bool {
        !matches!(self, CellEdgeStyle::Curved | CellEdgeStyle::Straight)
    }

    /// Nur polygonbasierte Stile unterstützen einen absoluten Abstand (Gap).
    pub fn supports_gap(self) -> bool {
        !self.is_symbol()
    }
}
