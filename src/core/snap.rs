//! Proximity-Snapping: nächstgelegenes Element aus Kandidaten-Segmenten und
//! -Punkten innerhalb einer Toleranz.

use glam::DVec2;

use super::geometry::Segment;

/// Ergebnis einer Snap-Abfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapResult {
    /// Kandidat innerhalb der Toleranz gefunden
    Matched {
        /// Gesnappte Position (Kanten- oder Eckpunkt)
        point: DVec2,
        /// Rohe euklidische Distanz zur Query-Position
        distance: f64,
    },
    /// Kein Kandidat in Reichweite — Caller fällt auf Raster-Ausrichtung zurück
    NoMatch,
}

impl SnapResult {
    /// Gesnappte Position, falls vorhanden.
    pub fn point(&self) -> Option<DVec2> {
        match self {
            SnapResult::Matched { point, .. } => Some(*point),
            SnapResult::NoMatch => None,
        }
    }

    /// True wenn ein Kandidat getroffen wurde.
    pub fn is_match(&self) -> bool {
        matches!(self, SnapResult::Matched { .. })
    }
}

/// Transiente Kandidaten-Menge für eine einzelne Snap-Abfrage.
///
/// Wird pro Pointer-Event neu aufgebaut und danach verworfen.
#[derive(Debug, Clone, Default)]
pub struct SnapCandidateSet {
    /// Randsegmente der Umriss-Polygone
    pub segments: Vec<Segment>,
    /// Eckpunkte und Einzelpunkte (Ports)
    pub points: Vec<DVec2>,
}

impl SnapCandidateSet {
    /// True wenn weder Segmente noch Punkte vorliegen.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.points.is_empty()
    }

    /// Snap-Abfrage gegen diese Kandidaten-Menge.
    pub fn snap(&self, query: DVec2, tolerance: f64) -> SnapResult {
        snap(query, tolerance, &self.segments, &self.points)
    }
}

/// Findet den nächsten Kandidaten innerhalb von `tolerance`.
///
/// Punkte konkurrieren mit der HALBEN Roh-Distanz gegen Segmente (Eckpunkte
/// werden gegenüber Kanten bevorzugt); gemeldet wird immer die rohe Distanz.
/// Verbesserungen sind strikt (`<`), bei exaktem Gleichstand gewinnt also der
/// zuerst iterierte Kandidat. Angenommen wird nur ein gewichtetes Minimum
/// strikt unterhalb der Toleranz.
///
/// # Panics
/// Wenn `tolerance` negativ ist (Caller-Fehler).
pub fn snap(query: DVec2, tolerance: f64, segments: &[Segment], points: &[DVec2]) -> SnapResult {
    assert!(tolerance >= 0.0, "Snap-Toleranz darf nicht negativ sein");

    let mut best_weighted = f64::INFINITY;
    let mut best: Option<(DVec2, f64)> = None;

    for segment in segments {
        let candidate = segment.closest_point(query);
        let distance = candidate.distance(query);
        if distance < best_weighted {
            best_weighted = distance;
            best = Some((candidate, distance));
        }
    }

    for &point in points {
        let distance = point.distance(query);
        // Eckpunkt-Bevorzugung: halbe Distanz im Vergleich, rohe im Ergebnis
        if distance * 0.5 < best_weighted {
            best_weighted = distance * 0.5;
            best = Some((point, distance));
        }
    }

    match best {
        Some((point, distance)) if best_weighted < tolerance => {
            SnapResult::Matched { point, distance }
        }
        _ => SnapResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn snap_prefers_vertex_over_edge_at_equal_distance() {
        // Segment-Fußpunkt (0,1) und Punkt (1,0) sind beide 1.0 entfernt;
        // die Halbierungs-Regel lässt den Punkt gewinnen
        let segments = [Segment::new(DVec2::new(0.0, 0.0), DVec2::new(0.0, 5.0))];
        let points = [DVec2::new(1.0, 0.0)];

        match snap(DVec2::new(1.0, 1.0), 2.0, &segments, &points) {
            SnapResult::Matched { point, distance } => {
                assert_eq!(point, DVec2::new(1.0, 0.0));
                assert_relative_eq!(distance, 1.0);
            }
            SnapResult::NoMatch => panic!("Treffer erwartet"),
        }
    }

    #[test]
    fn snap_returns_no_match_beyond_tolerance() {
        let segments = [Segment::new(DVec2::new(10.0, 0.0), DVec2::new(10.0, 5.0))];
        let points = [DVec2::new(0.0, 10.0)];

        let result = snap(DVec2::ZERO, 2.0, &segments, &points);
        assert_eq!(result, SnapResult::NoMatch);
    }

    #[test]
    fn snap_matches_segment_interior_within_tolerance() {
        let segments = [Segment::new(DVec2::new(-5.0, 1.5), DVec2::new(5.0, 1.5))];

        match snap(DVec2::new(2.0, 0.0), 2.0, &segments, &[]) {
            SnapResult::Matched { point, distance } => {
                assert_eq!(point, DVec2::new(2.0, 1.5));
                assert_relative_eq!(distance, 1.5);
            }
            SnapResult::NoMatch => panic!("Treffer erwartet"),
        }
    }

    #[test]
    fn snap_first_candidate_wins_exact_ties() {
        let points = [DVec2::new(1.0, 0.0), DVec2::new(-1.0, 0.0)];

        match snap(DVec2::ZERO, 2.0, &[], &points) {
            SnapResult::Matched { point, .. } => assert_eq!(point, DVec2::new(1.0, 0.0)),
            SnapResult::NoMatch => panic!("Treffer erwartet"),
        }
    }

    #[test]
    fn snap_tolerance_is_strict() {
        // Gewichtete Distanz == Toleranz zählt nicht als Treffer
        let points = [DVec2::new(2.0, 0.0)];
        let result = snap(DVec2::ZERO, 1.0, &[], &points);
        assert_eq!(result, SnapResult::NoMatch);

        let result = snap(DVec2::ZERO, 1.0 + 1e-6, &[], &points);
        assert!(result.is_match());
    }

    #[test]
    fn snap_empty_candidates_is_no_match() {
        let set = SnapCandidateSet::default();
        assert!(set.is_empty());
        assert_eq!(set.snap(DVec2::ZERO, 5.0), SnapResult::NoMatch);
    }

    #[test]
    #[should_panic(expected = "negativ")]
    fn snap_rejects_negative_tolerance() {
        snap(DVec2::ZERO, -1.0, &[], &[]);
    }
}
