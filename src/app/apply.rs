//! Änderungsvorschläge auf eine Zelle anwenden (Commit-Grenze).

use crate::core::CellLayout;

use super::tools::EditProposal;

/// Wendet einen `EditProposal` auf die Zelle an.
///
/// Gibt `false` zurück wenn die Ziel-Figur nicht (mehr) existiert oder den
/// falschen Typ hat — der Vorschlag ist dann veraltet und wird verworfen.
pub fn apply_edit(cell: &mut CellLayout, proposal: &EditProposal) -> bool {
    match *proposal {
        EditProposal::SetArcCurvature { arc_id, radius } => {
            if cell.set_arc_curvature(arc_id, radius) {
                log::info!("Arc {}: Krümmungsradius {:.3} gesetzt", arc_id, radius);
                true
            } else {
                log::warn!("Arc {} existiert nicht — Krümmung verworfen", arc_id);
                false
            }
        }
        EditProposal::MoveOutlineVertex {
            node_id,
            vertex_index,
            position,
        } => {
            if cell.move_outline_vertex(node_id, vertex_index, position) {
                log::info!(
                    "Node {}: Eckpunkt {} nach ({:.3}, {:.3}) verschoben",
                    node_id,
                    vertex_index,
                    position.x,
                    position.y
                );
                true
            } else {
                log::warn!(
                    "Node {} / Eckpunkt {} nicht editierbar — Verschiebung verworfen",
                    node_id,
                    vertex_index
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcFigure, Figure};
    use glam::DVec2;

    #[test]
    fn stale_proposal_is_rejected() {
        let mut cell = CellLayout::new();
        let arc_id = cell.add_figure(Figure::Arc(ArcFigure::new(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
        )));
        let proposal = EditProposal::SetArcCurvature {
            arc_id,
            radius: 7.25,
        };

        // Figur zwischen Berechnung und Commit gelöscht
        cell.remove_figure(arc_id);
        assert!(!apply_edit(&mut cell, &proposal));
    }

    #[test]
    fn curvature_proposal_mutates_the_arc() {
        let mut cell = CellLayout::new();
        let arc_id = cell.add_figure(Figure::Arc(ArcFigure::new(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
        )));

        assert!(apply_edit(
            &mut cell,
            &EditProposal::SetArcCurvature {
                arc_id,
                radius: -7.25,
            }
        ));

        match cell.figure(arc_id) {
            Some(Figure::Arc(arc)) => assert_eq!(arc.curvature, -7.25),
            _ => panic!("Arc erwartet"),
        }
    }
}
