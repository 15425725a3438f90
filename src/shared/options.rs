//! Zentrale Konfiguration für den Layout-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::DesignGrid;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 100.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Raster & Snapping ───────────────────────────────────────────────

/// Standard-Rasterweite in Datenbankeinheiten.
pub const GRID_SPACING: f64 = 1.0;
/// Snap-Toleranz (Datenbankeinheiten): Feature-Fang innerhalb dieses Radius.
pub const SNAP_TOLERANCE: f64 = 2.0;
/// Pick-Radius in Screen-Pixeln für die Umrechnung per Kamera.
pub const SELECTION_PICK_RADIUS_PX: f64 = 12.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `chip_layout_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rasterweite in Datenbankeinheiten
    pub grid_spacing: f64,
    /// Raster-Ursprung (Verschiebung des Gitters)
    #[serde(default)]
    pub grid_origin: DVec2,

    // ── Snapping ────────────────────────────────────────────────
    /// Snap-Toleranz (Datenbankeinheiten) für Feature-Fang
    pub snap_tolerance: f64,
    /// Feature-Fang beim Messen aktiv (sonst nur Raster-Ausrichtung)
    #[serde(default = "default_measure_snap")]
    pub measure_snap: bool,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub selection_pick_radius_px: f64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            grid_origin: DVec2::ZERO,

            snap_tolerance: SNAP_TOLERANCE,
            measure_snap: true,

            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `measure_snap` (Abwärtskompatibilität bestehender
/// TOML-Dateien).
fn default_measure_snap() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("chip_layout_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("chip_layout_editor.toml")
    }

    /// Baut das Design-Raster aus den aktuellen Optionen.
    pub fn grid(&self) -> DesignGrid {
        DesignGrid::with_origin(self.grid_spacing, self.grid_origin)
    }

    /// Effektive Snap-Toleranz für das Mess-Werkzeug.
    ///
    /// Bei deaktiviertem `measure_snap` ist die Toleranz 0 — der Fang greift
    /// nie und beide Endpunkte fallen auf das Raster zurück.
    pub fn measure_tolerance(&self) -> f64 {
        if self.measure_snap {
            self.snap_tolerance
        } else {
            0.0
        }
    }
}
