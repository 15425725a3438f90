//! Szenen-Geometrie als geschlossener Variantentyp: Nodes, Arcs, Ports.
//!
//! Kandidaten-Geometrie wird per Pattern-Match aufgelöst, nicht über
//! Laufzeit-Typtests auf einem polymorphen Basistyp.

use glam::DVec2;

use super::geometry::Segment;

/// Umriss einer Node-Figur in absoluten Datenbank-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Achsenparalleles Rechteck (häufiger Schnellpfad)
    Rect {
        /// Ecke mit minimalen Koordinaten
        min: DVec2,
        /// Ecke mit maximalen Koordinaten
        max: DVec2,
    },
    /// Geschlossenes Polygon: jeder Punkt verbindet zum nächsten, der letzte
    /// zurück zum ersten
    Closed(Vec<DVec2>),
    /// Offener Polygonzug: nur aufeinanderfolgende Kanten, keine Schließkante
    Open(Vec<DVec2>),
}

impl Outline {
    /// Eckpunkte des Umrisses. Rechtecke liefern genau ihre 4 Ecken.
    pub fn vertices(&self) -> Vec<DVec2> {
        match self {
            Outline::Rect { min, max } => vec![
                *min,
                DVec2::new(max.x, min.y),
                *max,
                DVec2::new(min.x, max.y),
            ],
            Outline::Closed(points) | Outline::Open(points) => points.clone(),
        }
    }

    /// Randsegmente des Umrisses.
    ///
    /// Geschlossene Umrisse enthalten die Schließkante (letzter → erster
    /// Punkt), offene nur die tatsächlichen Kanten. Rechtecke liefern genau
    /// ihre 4 Kanten.
    pub fn boundary_segments(&self) -> Vec<Segment> {
        match self {
            Outline::Rect { .. } => {
                let corners = self.vertices();
                (0..4)
                    .map(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
                    .collect()
            }
            Outline::Closed(points) => {
                let mut segments: Vec<Segment> = points
                    .windows(2)
                    .map(|pair| Segment::new(pair[0], pair[1]))
                    .collect();
                // Schließkante nur bei echten Polygonen; bei zwei Punkten
                // würde sie die einzige Kante duplizieren
                if points.len() > 2 {
                    segments.push(Segment::new(points[points.len() - 1], points[0]));
                }
                segments
            }
            Outline::Open(points) => points
                .windows(2)
                .map(|pair| Segment::new(pair[0], pair[1]))
                .collect(),
        }
    }

    /// Referenzpunkt des Umrisses (Eckpunkt-Schwerpunkt bzw. Rechteck-Mitte).
    pub fn center(&self) -> DVec2 {
        match self {
            Outline::Rect { min, max } => (*min + *max) * 0.5,
            Outline::Closed(points) | Outline::Open(points) => {
                if points.is_empty() {
                    return DVec2::ZERO;
                }
                points.iter().copied().sum::<DVec2>() / points.len() as f64
            }
        }
    }

    /// Maximaler Abstand des Referenzpunkts zu einem Eckpunkt.
    pub fn extent_radius(&self) -> f64 {
        let center = self.center();
        self.vertices()
            .iter()
            .map(|vertex| vertex.distance(center))
            .fold(0.0, f64::max)
    }
}

/// Platzierte Komponente mit Polygon-Umriss.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeFigure {
    /// Umriss in absoluten Datenbank-Koordinaten
    pub outline: Outline,
}

impl NodeFigure {
    /// Erstellt eine Node-Figur aus ihrem Umriss.
    pub fn new(outline: Outline) -> Self {
        Self { outline }
    }
}

/// Verdrahtungs-Arc zwischen zwei festen Endpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFigure {
    /// Kopf-Endpunkt
    pub head: DVec2,
    /// Fuß-Endpunkt
    pub tail: DVec2,
    /// Signierter Krümmungsradius (0.0 = gerade)
    pub curvature: f64,
}

impl ArcFigure {
    /// Erstellt einen geraden Arc.
    pub fn new(head: DVec2, tail: DVec2) -> Self {
        Self {
            head,
            tail,
            curvature: 0.0,
        }
    }

    /// Sehnen-Mittelpunkt.
    pub fn midpoint(&self) -> DVec2 {
        (self.head + self.tail) * 0.5
    }

    /// Sehnenlänge.
    pub fn chord_length(&self) -> f64 {
        self.head.distance(self.tail)
    }

    /// True wenn der Arc keine Krümmung trägt.
    pub fn is_straight(&self) -> bool {
        self.curvature == 0.0
    }
}

/// Anschlusspunkt — reines Snap-Ziel ohne Ausdehnung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortFigure {
    /// Welt-Position des Anschlusses
    pub position: DVec2,
}

impl PortFigure {
    /// Erstellt einen Anschlusspunkt.
    pub fn new(position: DVec2) -> Self {
        Self { position }
    }
}

/// Geschlossener Variantentyp über alle Szenen-Figuren.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// Platzierte Komponente mit Umriss
    Node(NodeFigure),
    /// Verdrahtungssegment
    Arc(ArcFigure),
    /// Anschlusspunkt
    Port(PortFigure),
}

impl Figure {
    /// Referenzposition für den Spatial-Index.
    pub fn position(&self) -> DVec2 {
        match self {
            Figure::Node(node) => node.outline.center(),
            Figure::Arc(arc) => arc.midpoint(),
            Figure::Port(port) => port.position,
        }
    }

    /// Maximale Ausdehnung um die Referenzposition.
    pub fn extent_radius(&self) -> f64 {
        match self {
            Figure::Node(node) => node.outline.extent_radius(),
            Figure::Arc(arc) => arc.chord_length() * 0.5,
            Figure::Port(_) => 0.0,
        }
    }
}
