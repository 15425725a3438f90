//! Umriss-Bearbeitung: einzelnen Eckpunkt einer Node-Figur verschieben.

use glam::DVec2;

use crate::core::{CellLayout, DesignGrid, Figure, Outline};

use super::EditProposal;

/// Zustand einer laufenden Umriss-Bearbeitung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineEditTool {
    node_id: u64,
    vertex_index: usize,
    preview: Option<DVec2>,
}

impl OutlineEditTool {
    /// Startet die Bearbeitung am Eckpunkt `vertex_index` der Node `node_id`.
    ///
    /// Gibt `None` zurück wenn die Figur keine Node ist, der Index außerhalb
    /// des Umrisses liegt oder der Umriss ein Rechteck ohne freie Eckpunkte
    /// ist.
    pub fn begin(node_id: u64, vertex_index: usize, cell: &CellLayout) -> Option<Self> {
        let Some(Figure::Node(node)) = cell.figure(node_id) else {
            return None;
        };
        match &node.outline {
            Outline::Closed(points) | Outline::Open(points) if vertex_index < points.len() => {
                Some(Self {
                    node_id,
                    vertex_index,
                    preview: None,
                })
            }
            _ => None,
        }
    }

    /// Ziel-Node der Geste.
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    /// Index des gegriffenen Eckpunkts.
    pub fn vertex_index(&self) -> usize {
        self.vertex_index
    }

    /// Richtet die Zeiger-Position auf das Raster aus und merkt sie als
    /// Vorschau.
    pub fn on_pointer_move(&mut self, cursor: DVec2, grid: &DesignGrid) -> DVec2 {
        let aligned = grid.align(cursor);
        self.preview = Some(aligned);
        aligned
    }

    /// Zuletzt berechnete Zielposition.
    pub fn preview(&self) -> Option<DVec2> {
        self.preview
    }

    /// Erzeugt den Änderungsvorschlag aus der aktuellen Vorschau.
    pub fn execute(&self) -> Option<EditProposal> {
        let position = self.preview?;
        Some(EditProposal::MoveOutlineVertex {
            node_id: self.node_id,
            vertex_index: self.vertex_index,
            position,
        })
    }

    /// Statustext für das Properties-Panel.
    pub fn status_text(&self) -> &'static str {
        "Eckpunkt ziehen — Loslassen übernimmt die Position"
    }
}
