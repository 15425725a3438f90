//! Spatial-Index (KD-Tree) für schnelle Figuren-Abfragen.

use glam::DVec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::Figure;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID der gefundenen Figur
    pub figure_id: u64,
    /// Euklidische Distanz zur Referenzposition der Figur
    pub distance: f64,
}

/// Read-only Spatial-Index über den Referenzpositionen aller Figuren.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    figure_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            figure_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Figuren.
    ///
    /// Die Einfüge-Reihenfolge der IndexMap bleibt erhalten, Abfragen sind
    /// damit über Läufe hinweg deterministisch.
    pub fn from_figures(figures: &IndexMap<u64, Figure>) -> Self {
        let figure_ids: Vec<u64> = figures.keys().copied().collect();

        let entries: Vec<[f64; 2]> = figure_ids
            .iter()
            .filter_map(|id| {
                figures.get(id).map(|figure| {
                    let position = figure.position();
                    [position.x, position.y]
                })
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, figure_ids }
    }

    /// Gibt die Anzahl indexierter Figuren zurück.
    pub fn len(&self) -> usize {
        self.figure_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Figuren im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.figure_ids.is_empty()
    }

    /// Findet die nächste Figur zur gegebenen Weltposition.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let figure_id = *self.figure_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            figure_id,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Figuren innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let figure_id = *self.figure_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    figure_id,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}
