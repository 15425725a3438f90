//! Design-Raster: Ausrichtung von Zeiger-Koordinaten auf das Entwurfs-Gitter.

use glam::DVec2;

use super::geometry::GEOM_EPS;

/// Rechteckiges Design-Raster mit Ursprung und Rasterweite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignGrid {
    /// Rasterweite in Datenbankeinheiten
    pub spacing: f64,
    /// Raster-Ursprung (Verschiebung des Gitters)
    pub origin: DVec2,
}

impl DesignGrid {
    /// Standard-Rasterweite in Datenbankeinheiten.
    pub const DEFAULT_SPACING: f64 = 1.0;

    /// Erstellt ein Raster mit Ursprung (0, 0).
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            origin: DVec2::ZERO,
        }
    }

    /// Erstellt ein Raster mit verschobenem Ursprung.
    pub fn with_origin(spacing: f64, origin: DVec2) -> Self {
        Self { spacing, origin }
    }

    /// Richtet `point` auf den nächstgelegenen Rasterpunkt aus.
    ///
    /// Nicht-positive Rasterweite lässt den Punkt unverändert.
    pub fn align(&self, point: DVec2) -> DVec2 {
        if self.spacing <= GEOM_EPS {
            return point;
        }
        let rel = (point - self.origin) / self.spacing;
        self.origin + DVec2::new(rel.x.round(), rel.y.round()) * self.spacing
    }

    /// True wenn `point` (numerisch) auf dem Raster liegt.
    pub fn is_aligned(&self, point: DVec2) -> bool {
        self.align(point).distance(point) < GEOM_EPS
    }
}

impl Default for DesignGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPACING)
    }
}
