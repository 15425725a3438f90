//! Gesten-Werkzeuge für den interaktiven Editor.
//!
//! Jedes Werkzeug ist ein expliziter Zustandswert ohne globalen Singleton.
//! Werkzeuge erzeugen reine Daten (`EditProposal`), die Mutation erfolgt
//! zentral in `apply_edit`.

/// Krümmungs-Geste an Verdrahtungs-Arcs.
pub mod curve_arc;
/// Mess-Geste mit Feature-Snap an beiden Endpunkten.
pub mod measure;
/// Umriss-Bearbeitung: einzelne Eckpunkte von Node-Figuren verschieben.
pub mod outline;

use glam::DVec2;

use crate::core::{CellLayout, DesignGrid, SnapResult};

// ── Gemeinsame Utilities ─────────────────────────────────────

/// Löst eine Zeiger-Position gegen Zellgeometrie und Raster auf.
///
/// Innerhalb von `tolerance` gewinnt das nächste Feature (Eckpunkte vor
/// Kanten), sonst wird auf das Raster ausgerichtet.
pub fn snap_to_feature(
    pos: DVec2,
    cell: &CellLayout,
    grid: &DesignGrid,
    tolerance: f64,
) -> SnapAnchor {
    let candidates = cell.collect_candidates(pos, tolerance);
    match candidates.snap(pos, tolerance) {
        SnapResult::Matched { point, distance } => SnapAnchor::Feature {
            position: point,
            distance,
        },
        SnapResult::NoMatch => SnapAnchor::Grid {
            position: grid.align(pos),
        },
    }
}

// ── Typen ────────────────────────────────────────────────────────

/// Aufgelöste Zeiger-Position: Feature-Fang oder Raster-Fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapAnchor {
    /// Auf vorhandene Geometrie gesnappt
    Feature {
        /// Gesnappte Position
        position: DVec2,
        /// Rohe Distanz zur ursprünglichen Zeiger-Position
        distance: f64,
    },
    /// Kein Feature in Reichweite — auf das Raster ausgerichtet
    Grid {
        /// Rasterausgerichtete Position
        position: DVec2,
    },
}

impl SnapAnchor {
    /// Aufgelöste Welt-Position.
    pub fn position(&self) -> DVec2 {
        match self {
            SnapAnchor::Feature { position, .. } => *position,
            SnapAnchor::Grid { position } => *position,
        }
    }

    /// True wenn auf vorhandene Geometrie gesnappt wurde.
    pub fn is_feature(&self) -> bool {
        matches!(self, SnapAnchor::Feature { .. })
    }
}

/// Ergebnis eines Gesten-Werkzeugs — reine Daten, keine Mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditProposal {
    /// Signierten Krümmungsradius eines Arcs setzen
    SetArcCurvature {
        /// Ziel-Arc
        arc_id: u64,
        /// Signierter Radius (0.0 = gerade)
        radius: f64,
    },
    /// Umriss-Eckpunkt einer Node-Figur verschieben
    MoveOutlineVertex {
        /// Ziel-Node
        node_id: u64,
        /// Index des Eckpunkts im Umriss
        vertex_index: usize,
        /// Neue Welt-Position
        position: DVec2,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Figure, PortFigure};

    #[test]
    fn snap_to_feature_falls_back_to_grid() {
        let mut cell = CellLayout::new();
        cell.add_figure(Figure::Port(PortFigure::new(DVec2::new(3.0, 3.0))));
        let grid = DesignGrid::new(1.0);

        // Port in Reichweite → Feature-Fang
        let near = snap_to_feature(DVec2::new(3.2, 3.1), &cell, &grid, 2.0);
        assert!(near.is_feature());
        assert_eq!(near.position(), DVec2::new(3.0, 3.0));

        // Nichts in Reichweite → Raster
        let far = snap_to_feature(DVec2::new(20.4, 20.6), &cell, &grid, 2.0);
        assert!(!far.is_feature());
        assert_eq!(far.position(), DVec2::new(20.0, 21.0));
    }

    #[test]
    fn zero_tolerance_never_snaps_to_features() {
        let mut cell = CellLayout::new();
        cell.add_figure(Figure::Port(PortFigure::new(DVec2::new(3.0, 3.0))));
        let grid = DesignGrid::new(1.0);

        let anchor = snap_to_feature(DVec2::new(3.0, 3.0), &cell, &grid, 0.0);
        assert!(!anchor.is_feature());
    }
}
