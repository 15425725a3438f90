//! Die zentrale CellLayout-Datenstruktur mit Figuren und Spatial-Index.

use glam::DVec2;
use indexmap::IndexMap;

use super::figure::Outline;
use super::geometry::Segment;
use super::snap::SnapCandidateSet;
use super::spatial::{SpatialIndex, SpatialMatch};
use super::Figure;

/// Geometrie-Container einer Zelle (editierbare Entwurfs-Ebene).
#[derive(Debug, Clone)]
pub struct CellLayout {
    /// Alle Figuren, indexiert nach ID (Einfüge-Reihenfolge bleibt erhalten)
    figures: IndexMap<u64, Figure>,
    /// Name der Zelle (optional)
    pub name: Option<String>,
    /// Persistenter Spatial-Index für schnelle Umgebungs-Abfragen
    spatial_index: SpatialIndex,
    /// Größte Figuren-Ausdehnung — Aufschlag für Radius-Abfragen
    max_extent: f64,
    /// Nächste zu vergebende Figuren-ID
    next_id: u64,
}

impl CellLayout {
    /// Erstellt eine leere Zelle.
    pub fn new() -> Self {
        Self {
            figures: IndexMap::new(),
            name: None,
            spatial_index: SpatialIndex::empty(),
            max_extent: 0.0,
            next_id: 1,
        }
    }

    /// Erstellt eine Zelle aus vielen Figuren mit einem einzigen Index-Aufbau.
    pub fn from_figures(figures: impl IntoIterator<Item = Figure>) -> Self {
        let mut cell = Self::new();
        for figure in figures {
            let id = cell.next_id;
            cell.next_id += 1;
            cell.figures.insert(id, figure);
        }
        cell.rebuild_spatial_index();
        cell
    }

    /// Anzahl der Figuren.
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Liefert eine Figur per ID.
    pub fn figure(&self, id: u64) -> Option<&Figure> {
        self.figures.get(&id)
    }

    /// Iterator über (ID, Figur) in deterministischer Reihenfolge.
    pub fn figures(&self) -> impl Iterator<Item = (u64, &Figure)> {
        self.figures.iter().map(|(id, figure)| (*id, figure))
    }

    /// Fügt eine Figur hinzu und vergibt die nächste freie ID.
    pub fn add_figure(&mut self, figure: Figure) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.figures.insert(id, figure);
        self.rebuild_spatial_index();
        id
    }

    /// Entfernt eine Figur.
    pub fn remove_figure(&mut self, id: u64) -> Option<Figure> {
        let removed = self.figures.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_spatial_index();
        }
        removed
    }

    /// Endpunkte eines Verdrahtungs-Arcs.
    pub fn arc_endpoints(&self, id: u64) -> Option<(DVec2, DVec2)> {
        match self.figures.get(&id) {
            Some(Figure::Arc(arc)) => Some((arc.head, arc.tail)),
            _ => None,
        }
    }

    /// Setzt den signierten Krümmungsradius eines Arcs.
    ///
    /// Gibt `false` zurück wenn die Figur fehlt oder kein Arc ist.
    pub fn set_arc_curvature(&mut self, id: u64, radius: f64) -> bool {
        match self.figures.get_mut(&id) {
            Some(Figure::Arc(arc)) => {
                arc.curvature = radius;
                true
            }
            _ => false,
        }
    }

    /// Verschiebt einen Umriss-Eckpunkt einer Node-Figur.
    ///
    /// Rechteck-Umrisse haben keine freien Eckpunkte und werden abgelehnt.
    pub fn move_outline_vertex(&mut self, id: u64, vertex_index: usize, position: DVec2) -> bool {
        let Some(Figure::Node(node)) = self.figures.get_mut(&id) else {
            return false;
        };

        let moved = match &mut node.outline {
            Outline::Closed(points) | Outline::Open(points) => {
                if let Some(point) = points.get_mut(vertex_index) {
                    *point = position;
                    true
                } else {
                    false
                }
            }
            Outline::Rect { .. } => false,
        };

        if moved {
            self.rebuild_spatial_index();
        }
        moved
    }

    /// Baut den Spatial-Index und die Ausdehnungs-Obergrenze neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_figures(&self.figures);
        self.max_extent = self
            .figures
            .values()
            .map(Figure::extent_radius)
            .fold(0.0, f64::max);
    }

    /// Findet die nächste Figur zur Query-Position.
    pub fn nearest_figure(&self, query: DVec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Sammelt Snap-Kandidaten (Randsegmente + Eckpunkte) um `center`.
    ///
    /// KD-Tree-Vorfilter über die Referenzpositionen mit Ausdehnungs-Aufschlag,
    /// anschließend Zerlegung der getroffenen Figuren:
    /// - Nodes: Umriss-Eckpunkte + Randsegmente (inkl. Schließkante,
    ///   offene Umrisse ohne Schließkante)
    /// - Arcs: Sehnen-Segment + beide Endpunkte
    /// - Ports: Einzelpunkt
    pub fn collect_candidates(&self, center: DVec2, radius: f64) -> SnapCandidateSet {
        let mut candidates = SnapCandidateSet::default();
        if radius.is_sign_negative() {
            return candidates;
        }

        for hit in self
            .spatial_index
            .within_radius(center, radius + self.max_extent)
        {
            let Some(figure) = self.figures.get(&hit.figure_id) else {
                continue;
            };
            match figure {
                Figure::Node(node) => {
                    candidates.points.extend(node.outline.vertices());
                    candidates.segments.extend(node.outline.boundary_segments());
                }
                Figure::Arc(arc) => {
                    candidates.segments.push(Segment::new(arc.head, arc.tail));
                    candidates.points.push(arc.head);
                    candidates.points.push(arc.tail);
                }
                Figure::Port(port) => candidates.points.push(port.position),
            }
        }

        candidates
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::new()
    }
}
