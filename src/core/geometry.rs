//! Geometrie-Primitive: Segmente, Distanzen, gemeinsame Epsilon-Schwelle.

use glam::DVec2;

/// Degeneranz-Schwelle für Längen und Determinanten (Datenbankeinheiten).
pub const GEOM_EPS: f64 = 1e-9;

/// Ungerichtetes Liniensegment zwischen zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Erster Endpunkt
    pub a: DVec2,
    /// Zweiter Endpunkt
    pub b: DVec2,
}

impl Segment {
    /// Erstellt ein neues Segment.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    /// Länge des Segments.
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Mittelpunkt des Segments.
    pub fn midpoint(&self) -> DVec2 {
        (self.a + self.b) * 0.5
    }

    /// Nächster Punkt auf dem Segment zu `query` (auf die Endpunkte geklemmt).
    pub fn closest_point(&self, query: DVec2) -> DVec2 {
        let ab = self.b - self.a;
        let len_sq = ab.length_squared();
        if len_sq < GEOM_EPS * GEOM_EPS {
            // Degeneriertes Segment: beide Endpunkte fallen zusammen
            return self.a;
        }
        let t = ((query - self.a).dot(ab) / len_sq).clamp(0.0, 1.0);
        self.a + ab * t
    }

    /// Euklidische Distanz von `query` zum Segment.
    pub fn distance_to(&self, query: DVec2) -> f64 {
        self.closest_point(query).distance(query)
    }
}

/// Manhattan-Distanz (|dx| + |dy|).
pub fn manhattan_distance(a: DVec2, b: DVec2) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn closest_point_projects_onto_segment_interior() {
        let segment = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        let closest = segment.closest_point(DVec2::new(4.0, 3.0));
        assert_relative_eq!(closest.x, 4.0);
        assert_relative_eq!(closest.y, 0.0);
        assert_relative_eq!(segment.distance_to(DVec2::new(4.0, 3.0)), 3.0);
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let segment = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
        assert_eq!(
            segment.closest_point(DVec2::new(-5.0, 2.0)),
            DVec2::new(0.0, 0.0)
        );
        assert_eq!(
            segment.closest_point(DVec2::new(17.0, -1.0)),
            DVec2::new(10.0, 0.0)
        );
    }

    #[test]
    fn degenerate_segment_returns_endpoint() {
        let point = DVec2::new(3.0, 4.0);
        let segment = Segment::new(point, point);
        assert_eq!(segment.closest_point(DVec2::new(100.0, 100.0)), point);
    }

    #[test]
    fn manhattan_distance_sums_axis_deltas() {
        let d = manhattan_distance(DVec2::new(1.0, 2.0), DVec2::new(4.0, -2.0));
        assert_relative_eq!(d, 7.0);
    }
}
