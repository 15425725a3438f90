//! 2D-Kamera für Pan und Zoom (Screen ↔ Modell-Koordinaten).

use glam::DVec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Modell-Koordinaten (Datenbankeinheiten)
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl Camera2D {
    /// Sichtbare Modell-Halbbreite bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f64 = 4096.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: DVec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten zu Modell-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    pub fn screen_to_world(&self, screen_pos: DVec2, screen_size: DVec2) -> DVec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - DVec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        // NDC → Modell: skaliert mit BASE_WORLD_EXTENT / zoom
        DVec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Modell-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f64) -> f64 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height)
    }

    /// Berechnet die Snap-Toleranz in Modell-Einheiten aus einem Pixel-Radius.
    ///
    /// Konvertiert den Pixel-Radius basierend auf aktuellem Zoom und
    /// Viewport-Höhe, so dass der Fang-Bereich auf dem Bildschirm konstant
    /// bleibt.
    pub fn pick_radius_world(&self, viewport_height: f64, pick_radius_px: f64) -> f64 {
        let vh = viewport_height.max(1.0);
        (pick_radius_px * 2.0 * Self::BASE_WORLD_EXTENT) / (self.zoom * vh)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
