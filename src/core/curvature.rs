//! Krümmungs-Solver für Verdrahtungs-Arcs: signierter Radius aus zwei festen
//! Endpunkten plus einem freien Referenzpunkt.
//!
//! Zwei Benutzer-Semantiken werden unterstützt:
//! - "Mitte anfahren": der Zeiger gibt die Richtung der Kreismitte vor
//! - "Durchgangspunkt": der Arc soll durch die Zeiger-Position verlaufen

use glam::DVec2;

use super::geometry::{manhattan_distance, GEOM_EPS};

/// Signierte Krümmung eines Arcs.
///
/// Betrag = Kreisradius in Datenbankeinheiten. Das Vorzeichen wählt eine der
/// beiden möglichen Kreismitten zur Sehne aus (negativ = die gespiegelte
/// Mitte). `radius == 0.0` bedeutet "gerader Arc" und ist ein gültiges
/// Ergebnis, kein Fehler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureResult {
    /// Signierter Radius (0.0 = keine Krümmung)
    pub radius: f64,
}

impl CurvatureResult {
    /// Gerader Arc ohne Krümmung.
    pub const STRAIGHT: Self = Self { radius: 0.0 };

    /// Erstellt ein Ergebnis mit signiertem Radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// True wenn der Arc gerade bleibt.
    pub fn is_straight(&self) -> bool {
        self.radius == 0.0
    }
}

/// Die beiden Kreismitten mit Radius `radius` durch `head` und `tail`.
///
/// Reihenfolge ist deterministisch: zuerst die Mitte links der Richtung
/// head→tail, dann die gespiegelte. Gibt `None` zurück wenn `radius` kleiner
/// als die halbe Sehnenlänge ist (kein solcher Kreis existiert) oder die
/// Sehne degeneriert ist.
pub fn find_candidate_centers(radius: f64, head: DVec2, tail: DVec2) -> Option<(DVec2, DVec2)> {
    let chord = tail - head;
    let chord_len = chord.length();
    if chord_len < GEOM_EPS {
        return None;
    }

    let half = chord_len * 0.5;
    let offset_sq = radius * radius - half * half;
    if offset_sq < 0.0 {
        return None;
    }

    let mid = (head + tail) * 0.5;
    let perp = chord.perp() / chord_len;
    let offset = offset_sq.sqrt();
    Some((mid + perp * offset, mid - perp * offset))
}

/// Kreis durch drei Punkte (geschlossene Form über die Zwei-Sehnen-Determinante).
///
/// Gibt `None` zurück wenn die Punkte kollinear sind.
pub fn circle_through_points(a: DVec2, b: DVec2, c: DVec2) -> Option<(DVec2, f64)> {
    let det = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if det.abs() < GEOM_EPS {
        return None;
    }

    let aa = a.length_squared();
    let bb = b.length_squared();
    let cc = c.length_squared();
    let center = DVec2::new(
        (aa * (b.y - c.y) + bb * (c.y - a.y) + cc * (a.y - b.y)) / det,
        (aa * (c.x - b.x) + bb * (a.x - c.x) + cc * (b.x - a.x)) / det,
    );
    Some((center, center.distance(a)))
}

/// Wendet die Vorzeichen-Konvention auf einen Radius-Betrag an.
///
/// Von den beiden Kandidaten-Mitten bestimmt die zur berechneten Mitte
/// nähere das Vorzeichen; verglichen wird per Manhattan-Distanz. Liegt die
/// erste Kandidatin (links der Sehne) weiter weg, wird negiert. Degenerierte
/// Konstellationen ohne Kandidaten behalten das natürliche positive
/// Vorzeichen.
fn signed_radius(radius: f64, center: DVec2, head: DVec2, tail: DVec2) -> f64 {
    match find_candidate_centers(radius, head, tail) {
        Some((first, second)) => {
            if manhattan_distance(first, center) > manhattan_distance(second, center) {
                -radius
            } else {
                radius
            }
        }
        None => radius,
    }
}

/// Krümmung aus einer "Mitte anfahren"-Geste.
///
/// `cursor` wird als gewünschte Richtung der Kreismitte interpretiert: die
/// Gerade in Sehnenrichtung durch `cursor` wird mit der Mittelsenkrechten
/// der Sehne geschnitten; der Schnittpunkt ist die Kreismitte, der Betrag
/// des Radius ihre Distanz zu `head`.
///
/// Liegt `cursor` exakt auf dem Sehnen-Mittelpunkt, ist das Ergebnis der
/// gerade Arc (`radius == 0.0`).
///
/// # Panics
/// Wenn `head == tail` (degenerierte Sehne — Caller-Fehler).
pub fn curvature_about_point(head: DVec2, tail: DVec2, cursor: DVec2) -> CurvatureResult {
    let chord = tail - head;
    assert!(
        chord.length_squared() > GEOM_EPS * GEOM_EPS,
        "Arc-Sehne ist degeneriert (head == tail)"
    );

    let mid = (head + tail) * 0.5;
    if cursor.distance(mid) < GEOM_EPS {
        return CurvatureResult::STRAIGHT;
    }

    // Schnitt der Sehnenrichtungs-Geraden durch cursor mit der Mittelsenkrechten
    let dir = chord.normalize();
    let center = cursor + dir * (mid - cursor).dot(dir);
    let radius = head.distance(center);
    CurvatureResult::new(signed_radius(radius, center, head, tail))
}

/// Krümmung aus einer "Durchgangspunkt"-Geste.
///
/// `cursor` ist ein Punkt, durch den der Arc verlaufen soll: der eindeutige
/// Kreis durch `head`, `tail` und `cursor` bestimmt Mitte und Radius-Betrag.
/// Sind die drei Punkte kollinear, existiert kein endlicher Kreis; dann gilt
/// als definierter Fallback die Sehnen-Mitte als Zentrum mit
/// `halbe Sehnenlänge + 1.0` als Radius ("fast gerade, eine Einheit nach
/// außen gedrückt").
///
/// Liegt `cursor` exakt auf dem Sehnen-Mittelpunkt, ist das Ergebnis der
/// gerade Arc (`radius == 0.0`).
///
/// # Panics
/// Wenn `head == tail` (degenerierte Sehne — Caller-Fehler).
pub fn curvature_through_point(head: DVec2, tail: DVec2, cursor: DVec2) -> CurvatureResult {
    assert!(
        (tail - head).length_squared() > GEOM_EPS * GEOM_EPS,
        "Arc-Sehne ist degeneriert (head == tail)"
    );

    let mid = (head + tail) * 0.5;
    if cursor.distance(mid) < GEOM_EPS {
        return CurvatureResult::STRAIGHT;
    }

    match circle_through_points(head, tail, cursor) {
        Some((center, radius)) => CurvatureResult::new(signed_radius(radius, center, head, tail)),
        None => CurvatureResult::new(head.distance(mid) + 1.0),
    }
}
