//! Mess-Geste: Distanz zwischen zwei gesnappten Punkten.

use glam::DVec2;

use crate::core::{CellLayout, DesignGrid};

use super::{snap_to_feature, SnapAnchor};

/// Eine (laufende oder abgeschlossene) Messung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureReading {
    /// Gesnappter Startpunkt
    pub start: DVec2,
    /// Gesnappter Endpunkt
    pub end: DVec2,
    /// Roh-Distanzen (dx, dy)
    pub delta: DVec2,
    /// Euklidische Länge
    pub length: f64,
}

impl MeasureReading {
    fn between(start: DVec2, end: DVec2) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            delta,
            length: delta.length(),
        }
    }
}

/// Phase der Mess-Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MeasurePhase {
    /// Wartet auf den Startpunkt
    Ready,
    /// Zieht vom fixierten Startpunkt
    Dragging {
        /// Bereits gesnappter Startpunkt
        start: DVec2,
    },
}

/// Mess-Werkzeug mit Feature-Fang an beiden Endpunkten.
///
/// Die (dx, dy) der zuletzt abgeschlossenen Messung bleiben bis zum Abschluss
/// der nächsten Messung erhalten — auch über `reset()` hinweg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureTool {
    phase: MeasurePhase,
    last_distance: Option<DVec2>,
}

impl MeasureTool {
    /// Erstellt ein Mess-Werkzeug ohne laufende Messung.
    pub fn new() -> Self {
        Self {
            phase: MeasurePhase::Ready,
            last_distance: None,
        }
    }

    /// Fixiert den Startpunkt (Feature-Fang, sonst Raster).
    pub fn on_press(
        &mut self,
        pos: DVec2,
        cell: &CellLayout,
        grid: &DesignGrid,
        tolerance: f64,
    ) -> SnapAnchor {
        let anchor = snap_to_feature(pos, cell, grid, tolerance);
        self.phase = MeasurePhase::Dragging {
            start: anchor.position(),
        };
        anchor
    }

    /// Aktuelle Messung zur Zeiger-Position (`None` ohne laufende Messung).
    pub fn on_move(
        &self,
        pos: DVec2,
        cell: &CellLayout,
        grid: &DesignGrid,
        tolerance: f64,
    ) -> Option<MeasureReading> {
        let MeasurePhase::Dragging { start } = self.phase else {
            return None;
        };
        let end = snap_to_feature(pos, cell, grid, tolerance).position();
        Some(MeasureReading::between(start, end))
    }

    /// Schließt die Messung ab und behält (dx, dy).
    pub fn on_release(
        &mut self,
        pos: DVec2,
        cell: &CellLayout,
        grid: &DesignGrid,
        tolerance: f64,
    ) -> Option<MeasureReading> {
        let MeasurePhase::Dragging { start } = self.phase else {
            return None;
        };
        let end = snap_to_feature(pos, cell, grid, tolerance).position();
        let reading = MeasureReading::between(start, end);
        self.last_distance = Some(reading.delta);
        self.phase = MeasurePhase::Ready;
        Some(reading)
    }

    /// (dx, dy) der letzten abgeschlossenen Messung.
    pub fn last_distance(&self) -> Option<DVec2> {
        self.last_distance
    }

    /// Bricht eine laufende Messung ab; die letzte Distanz bleibt erhalten.
    pub fn reset(&mut self) {
        self.phase = MeasurePhase::Ready;
    }

    /// True während eine Messung läuft.
    pub fn is_measuring(&self) -> bool {
        matches!(self.phase, MeasurePhase::Dragging { .. })
    }

    /// Statustext für das Properties-Panel.
    pub fn status_text(&self) -> &'static str {
        match self.phase {
            MeasurePhase::Ready => "Startpunkt klicken",
            MeasurePhase::Dragging { .. } => "Zum Endpunkt ziehen",
        }
    }
}

impl Default for MeasureTool {
    fn default() -> Self {
        Self::new()
    }
}
