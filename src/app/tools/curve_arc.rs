//! Krümmungs-Geste: Arc-Krümmung aus festen Endpunkten + Zeiger-Position.

use glam::DVec2;

use crate::core::{
    curvature_about_point, curvature_through_point, CellLayout, CurvatureResult, GEOM_EPS,
};

use super::EditProposal;

/// Benutzer-Semantik der Krümmungs-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvatureMode {
    /// Zeiger bestimmt die Richtung der Kreismitte
    AboutPoint,
    /// Arc soll durch die Zeiger-Position verlaufen
    ThroughPoint,
}

/// Zustand einer laufenden Krümmungs-Geste an einem Arc.
///
/// Die Endpunkte werden beim Start eingefroren; jede Zeiger-Bewegung
/// berechnet die Vorschau komplett neu (ein neuerer Event ersetzt das
/// Ergebnis des vorherigen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveArcTool {
    arc_id: u64,
    mode: CurvatureMode,
    head: DVec2,
    tail: DVec2,
    preview: Option<CurvatureResult>,
}

impl CurveArcTool {
    /// Startet die Geste am Arc `arc_id`.
    ///
    /// Gibt `None` zurück wenn die Figur kein Arc ist oder die Sehne
    /// degeneriert ist (head == tail) — damit halten die Gesten die
    /// Vorbedingungen des Krümmungs-Solvers ein.
    pub fn begin(arc_id: u64, mode: CurvatureMode, cell: &CellLayout) -> Option<Self> {
        let (head, tail) = cell.arc_endpoints(arc_id)?;
        if head.distance_squared(tail) <= GEOM_EPS * GEOM_EPS {
            log::warn!("Krümmungs-Geste an degeneriertem Arc {} verweigert", arc_id);
            return None;
        }
        Some(Self {
            arc_id,
            mode,
            head,
            tail,
            preview: None,
        })
    }

    /// Ziel-Arc der Geste.
    pub fn arc_id(&self) -> u64 {
        self.arc_id
    }

    /// Aktive Benutzer-Semantik.
    pub fn mode(&self) -> CurvatureMode {
        self.mode
    }

    /// Berechnet die Krümmung für die aktuelle Zeiger-Position neu.
    pub fn on_pointer_move(&mut self, cursor: DVec2) -> CurvatureResult {
        let result = match self.mode {
            CurvatureMode::AboutPoint => curvature_about_point(self.head, self.tail, cursor),
            CurvatureMode::ThroughPoint => curvature_through_point(self.head, self.tail, cursor),
        };
        self.preview = Some(result);
        result
    }

    /// Zuletzt berechnete Vorschau.
    pub fn preview(&self) -> Option<CurvatureResult> {
        self.preview
    }

    /// Erzeugt den Änderungsvorschlag aus der aktuellen Vorschau.
    ///
    /// `None` solange noch keine Zeiger-Bewegung stattgefunden hat.
    pub fn execute(&self) -> Option<EditProposal> {
        let preview = self.preview?;
        Some(EditProposal::SetArcCurvature {
            arc_id: self.arc_id,
            radius: preview.radius,
        })
    }

    /// Statustext für das Properties-Panel.
    pub fn status_text(&self) -> &'static str {
        match self.mode {
            CurvatureMode::AboutPoint => "Kreismitte anfahren — Loslassen übernimmt die Krümmung",
            CurvatureMode::ThroughPoint => {
                "Durchgangspunkt ziehen — Loslassen übernimmt die Krümmung"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcFigure, Figure, NodeFigure, Outline};
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
    fn begin_rejects_non_arc_targets() {
        let mut cell = CellLayout::new();
        let node_id = cell.add_figure(Figure::Node(NodeFigure::new(Outline::Rect {
            min: DVec2::ZERO,
            max: DVec2::ONE,
        })));

        assert!(CurveArcTool::begin(node_id, CurvatureMode::ThroughPoint, &cell).is_none());
        assert!(CurveArcTool::begin(99, CurvatureMode::ThroughPoint, &cell).is_none());
    }

    #[test]
    fn begin_rejects_degenerate_chord() {
        let mut cell = CellLayout::new();
        let arc_id = cell.add_figure(Figure::Arc(ArcFigure::new(
            DVec2::new(5.0, 5.0),
            DVec2::new(5.0, 5.0),
        )));

        assert!(CurveArcTool::begin(arc_id, CurvatureMode::AboutPoint, &cell).is_none());
    }

    #[test]
    fn pointer_move_updates_preview_and_execute_proposes() {
        let (cell, arc_id) = cell_with_arc();
        let mut tool = CurveArcTool::begin(arc_id, CurvatureMode::ThroughPoint, &cell)
            .expect("Geste erwartet");

        assert!(tool.execute().is_none());

        let first = tool.on_pointer_move(DVec2::new(5.0, 2.0));
        assert_relative_eq!(first.radius, -7.25, epsilon = 1e-9);

        // Neuere Bewegung ersetzt die Vorschau
        let second = tool.on_pointer_move(DVec2::new(5.0, -2.0));
        assert_relative_eq!(second.radius, 7.25, epsilon = 1e-9);
        assert_eq!(tool.preview(), Some(second));

        match tool.execute() {
            Some(EditProposal::SetArcCurvature { arc_id: id, radius }) => {
                assert_eq!(id, arc_id);
                assert_relative_eq!(radius, 7.25, epsilon = 1e-9);
            }
            other => panic!("SetArcCurvature erwartet, war {:?}", other),
        }
    }

    #[test]
    fn about_mode_uses_center_semantics() {
        let (cell, arc_id) = cell_with_arc();
        let mut tool =
            CurveArcTool::begin(arc_id, CurvatureMode::AboutPoint, &cell).expect("Geste erwartet");

        let result = tool.on_pointer_move(DVec2::new(5.0, 2.0));
        assert_relative_eq!(result.radius, 29.0_f64.sqrt(), epsilon = 1e-9);
    }
}
