//! Editor-Gesten als expliziter Zustandsautomat.
//!
//! Der Automat wird vom Event-Glue pro Geste geführt; es gibt keinen
//! globalen Listener-Zustand. Werkzeuge liefern reine `EditProposal`-Werte,
//! das Anwenden übernimmt `apply_edit`.

use glam::DVec2;

use crate::core::{CellLayout, CurvatureResult};
use crate::shared::EditorOptions;

use super::tools::curve_arc::{CurvatureMode, CurveArcTool};
use super::tools::measure::{MeasureReading, MeasureTool};
use super::tools::outline::OutlineEditTool;
use super::tools::EditProposal;

/// Aktive Geste des Editors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorGesture {
    /// Keine Geste aktiv
    Idle,
    /// Arc-Krümmung wird gezogen
    CurvingArc(CurveArcTool),
    /// Mess-Modus (eine oder mehrere Messungen nacheinander)
    Measuring(MeasureTool),
    /// Umriss-Eckpunkt wird gezogen
    EditingOutline(OutlineEditTool),
}

/// Rückmeldung einer Zeiger-Bewegung an die UI-Schicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePreview {
    /// Nichts anzuzeigen
    None,
    /// Krümmungs-Vorschau des Arc-Werkzeugs
    Curvature(CurvatureResult),
    /// Laufende Messung
    Measurement(MeasureReading),
    /// Rasterausgerichtete Eckpunkt-Position
    OutlinePoint(DVec2),
}

/// Ergebnis eines Zeiger-Release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nichts anzuwenden
    None,
    /// Vorschlag zum Anwenden über `apply_edit`
    Proposal(EditProposal),
    /// Abgeschlossene Messung (reine Anzeige-Daten)
    Measured(MeasureReading),
}

impl EditorGesture {
    /// True wenn keine Geste aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorGesture::Idle)
    }

    /// Startet eine Krümmungs-Geste; schlägt fehl wenn das Ziel kein
    /// gültiger Arc ist.
    pub fn begin_curve(&mut self, arc_id: u64, mode: CurvatureMode, cell: &CellLayout) -> bool {
        match CurveArcTool::begin(arc_id, mode, cell) {
            Some(tool) => {
                *self = EditorGesture::CurvingArc(tool);
                true
            }
            None => false,
        }
    }

    /// Wechselt in den Mess-Modus.
    pub fn begin_measure(&mut self) {
        *self = EditorGesture::Measuring(MeasureTool::new());
    }

    /// Startet eine Umriss-Bearbeitung; schlägt fehl wenn das Ziel keinen
    /// editierbaren Eckpunkt hat.
    pub fn begin_outline_edit(
        &mut self,
        node_id: u64,
        vertex_index: usize,
        cell: &CellLayout,
    ) -> bool {
        match OutlineEditTool::begin(node_id, vertex_index, cell) {
            Some(tool) => {
                *self = EditorGesture::EditingOutline(tool);
                true
            }
            None => false,
        }
    }

    /// Verarbeitet ein Zeiger-Drücken.
    pub fn on_pointer_press(&mut self, pos: DVec2, cell: &CellLayout, options: &EditorOptions) {
        if let EditorGesture::Measuring(tool) = self {
            tool.on_press(pos, cell, &options.grid(), options.measure_tolerance());
        }
    }

    /// Verarbeitet eine Zeiger-Bewegung und liefert die Vorschau.
    pub fn on_pointer_move(
        &mut self,
        pos: DVec2,
        cell: &CellLayout,
        options: &EditorOptions,
    ) -> GesturePreview {
        match self {
            EditorGesture::Idle => GesturePreview::None,
            EditorGesture::CurvingArc(tool) => GesturePreview::Curvature(tool.on_pointer_move(pos)),
            EditorGesture::Measuring(tool) => {
                match tool.on_move(pos, cell, &options.grid(), options.measure_tolerance()) {
                    Some(reading) => GesturePreview::Measurement(reading),
                    None => GesturePreview::None,
                }
            }
            EditorGesture::EditingOutline(tool) => {
                GesturePreview::OutlinePoint(tool.on_pointer_move(pos, &options.grid()))
            }
        }
    }

    /// Verarbeitet ein Zeiger-Loslassen.
    ///
    /// Krümmungs- und Umriss-Gesten liefern ihren Vorschlag und kehren nach
    /// `Idle` zurück; der Mess-Modus schließt die laufende Messung ab und
    /// bleibt aktiv.
    pub fn on_pointer_release(
        &mut self,
        pos: DVec2,
        cell: &CellLayout,
        options: &EditorOptions,
    ) -> GestureOutcome {
        match self {
            EditorGesture::Idle => GestureOutcome::None,
            EditorGesture::CurvingArc(tool) => {
                tool.on_pointer_move(pos);
                let outcome = match tool.execute() {
                    Some(proposal) => GestureOutcome::Proposal(proposal),
                    None => GestureOutcome::None,
                };
                *self = EditorGesture::Idle;
                outcome
            }
            EditorGesture::Measuring(tool) => {
                match tool.on_release(pos, cell, &options.grid(), options.measure_tolerance()) {
                    Some(reading) => GestureOutcome::Measured(reading),
                    None => GestureOutcome::None,
                }
            }
            EditorGesture::EditingOutline(tool) => {
                tool.on_pointer_move(pos, &options.grid());
                let outcome = match tool.execute() {
                    Some(proposal) => GestureOutcome::Proposal(proposal),
                    None => GestureOutcome::None,
                };
                *self = EditorGesture::Idle;
                outcome
            }
        }
    }

    /// Bricht die aktive Geste ab (Escape / Werkzeug-Wechsel).
    pub fn cancel(&mut self) {
        *self = EditorGesture::Idle;
    }

    /// Statustext für das Properties-Panel.
    pub fn status_text(&self) -> &'static str {
        match self {
            EditorGesture::Idle => "Bereit",
            EditorGesture::CurvingArc(tool) => tool.status_text(),
            EditorGesture::Measuring(tool) => tool.status_text(),
            EditorGesture::EditingOutline(tool) => tool.status_text(),
        }
    }
}

impl Default for EditorGesture {
    fn default() -> Self {
        EditorGesture::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcFigure, Figure};
    use approx::assert_relative_eq;

    fn cell_with_arc() -> (CellLayout, u64) {
        let mut cell = CellLayout::new();
        let arc_id = cell.add_figure(Figure::Arc(ArcFigure::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
        )));
        (cell, arc_id)
    }

    #[test]
    fn curve_gesture_returns_to_idle_with_proposal() {
        let (cell, arc_id) = cell_with_arc();
        let options = EditorOptions::default();
        let mut gesture = EditorGesture::default();
        assert!(gesture.is_idle());

        assert!(gesture.begin_curve(arc_id, CurvatureMode::ThroughPoint, &cell));

        match gesture.on_pointer_move(DVec2::new(5.0, 2.0), &cell, &options) {
            GesturePreview::Curvature(result) => {
                assert_relative_eq!(result.radius, -7.25, epsilon = 1e-9)
            }
            other => panic!("Krümmungs-Vorschau erwartet, war {:?}", other),
        }

        match gesture.on_pointer_release(DVec2::new(5.0, 2.0), &cell, &options) {
            GestureOutcome::Proposal(EditProposal::SetArcCurvature { arc_id: id, radius }) => {
                assert_eq!(id, arc_id);
                assert_relative_eq!(radius, -7.25, epsilon = 1e-9);
            }
            other => panic!("Vorschlag erwartet, war {:?}", other),
        }
        assert!(gesture.is_idle());
    }

    #[test]
    fn begin_curve_on_invalid_target_keeps_idle() {
        let (cell, _) = cell_with_arc();
        let mut gesture = EditorGesture::default();

        assert!(!gesture.begin_curve(99, CurvatureMode::AboutPoint, &cell));
        assert!(gesture.is_idle());
    }

    #[test]
    fn measure_mode_stays_active_between_measurements() {
        let (cell, _) = cell_with_arc();
        let options = EditorOptions::default();
        let mut gesture = EditorGesture::default();
        gesture.begin_measure();

        gesture.on_pointer_press(DVec2::new(30.1, 30.2), &cell, &options);
        match gesture.on_pointer_release(DVec2::new(33.9, 30.1), &cell, &options) {
            GestureOutcome::Measured(reading) => {
                assert_relative_eq!(reading.delta.x, 4.0);
                assert_relative_eq!(reading.delta.y, 0.0);
            }
            other => panic!("Messung erwartet, war {:?}", other),
        }

        // Mess-Modus bleibt aktiv, die letzte Distanz ist abrufbar
        match gesture {
            EditorGesture::Measuring(tool) => {
                assert_eq!(tool.last_distance(), Some(DVec2::new(4.0, 0.0)));
            }
            _ => panic!("Mess-Modus erwartet"),
        }
    }

    #[test]
    fn release_without_gesture_is_a_no_op() {
        let (cell, _) = cell_with_arc();
        let options = EditorOptions::default();
        let mut gesture = EditorGesture::default();

        let outcome = gesture.on_pointer_release(DVec2::ZERO, &cell, &options);
        assert_eq!(outcome, GestureOutcome::None);
    }
}
