//! Zentrale Konfiguration des Kurven-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Bearbeitung ─────────────────────────────────────────────────────

/// Maximale Anzahl Keyframes pro Kurve.
pub const MAX_KEYFRAMES: usize = 64;
/// Minimaler x-Abstand zwischen benachbarten Keyframes (Domänen-Einheiten).
pub const MIN_KEYFRAME_DISTANCE: f64 = 0.001;
/// Rasterunterteilungen je Achse für Grid-Snap.
pub const GRID_SUBDIVISIONS: u32 = 10;
/// Nachkommastellen, auf die Positionen und Handles gerundet werden.
pub const PRECISION_DECIMALS: u32 = 4;

// ── Hit-Testing ─────────────────────────────────────────────────────

/// Trefferradius in Canvas-Pixeln.
pub const HIT_TOLERANCE_PX: f64 = 10.0;
/// Stützstellen der Kurvenlinie beim Hit-Test.
pub const CURVE_HIT_SAMPLES: usize = 200;

// ── Tastatur ────────────────────────────────────────────────────────

/// Pfeiltasten-Schritt als Anteil des sichtbaren Bereichs.
pub const NUDGE_FRACTION: f64 = 0.01;
/// Feiner Pfeiltasten-Schritt (mit Shift).
pub const FINE_NUDGE_FRACTION: f64 = 0.001;

// ── Darstellung ─────────────────────────────────────────────────────

/// Rand um die Domäne für Achsenbeschriftungen (Pixel).
pub const PADDING_PX: f64 = 24.0;
/// Stützstellen der Kurven-Polylinie in der Render-Szene.
pub const RENDER_CURVE_SAMPLES: usize = 256;

/// Wer den Kurvenwert besitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueOwnership {
    /// Die Engine übernimmt jeden emittierten Wert selbst.
    #[default]
    Engine,
    /// Der Host bleibt maßgeblich und spielt Werte über `set_value` zurück.
    Host,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Verhalten ───────────────────────────────────────────────
    /// Doppelklick ins Leere fügt Keyframes ein
    pub allow_add: bool,
    /// Entf/Backspace löscht selektierte Keyframes
    pub allow_delete: bool,
    /// Obergrenze für Einfügen
    pub max_keyframes: usize,
    /// Erster und letzter Keyframe behalten ihr `x` und sind nicht löschbar
    pub lock_endpoints: bool,
    /// Mindestabstand benachbarter Keyframes in x
    pub min_keyframe_distance: f64,
    /// `y` auf `domain_y` begrenzen
    pub clamp_y: bool,
    /// Grid-Snap beim Ziehen (Alt invertiert)
    pub snap_to_grid: bool,
    /// Rasterunterteilungen je Achse
    pub grid_subdivisions: u32,
    /// Rundung auf Nachkommastellen
    pub precision: u32,
    /// Tangenten-Modi und Handles sind gesperrt
    pub lock_tangents: bool,

    // ── Zugriff ─────────────────────────────────────────────────
    /// Alle Eingaben werden ignoriert
    pub disabled: bool,
    /// Selektion und Hover erlaubt, Kurvenänderungen nicht
    pub read_only: bool,
    /// Besitz des Kurvenwerts
    pub ownership: ValueOwnership,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Trefferradius in Pixeln
    pub hit_tolerance_px: f64,
    /// Stützstellen für den Kurvenlinien-Treffer
    pub curve_hit_samples: usize,
    /// Pfeiltasten-Schritt (Anteil des sichtbaren Bereichs)
    pub nudge_fraction: f64,
    /// Feiner Pfeiltasten-Schritt
    pub fine_nudge_fraction: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Rand um die Domäne in Pixeln
    pub padding_px: f64,
    /// Stützstellen der gerenderten Kurvenlinie
    pub render_curve_samples: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            allow_add: true,
            allow_delete: true,
            max_keyframes: MAX_KEYFRAMES,
            lock_endpoints: false,
            min_keyframe_distance: MIN_KEYFRAME_DISTANCE,
            clamp_y: true,
            snap_to_grid: false,
            grid_subdivisions: GRID_SUBDIVISIONS,
            precision: PRECISION_DECIMALS,
            lock_tangents: false,
            disabled: false,
            read_only: false,
            ownership: ValueOwnership::Engine,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            curve_hit_samples: CURVE_HIT_SAMPLES,
            nudge_fraction: NUDGE_FRACTION,
            fine_nudge_fraction: FINE_NUDGE_FRACTION,
            padding_px: PADDING_PX,
            render_curve_samples: RENDER_CURVE_SAMPLES,
        }
    }
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
            .unwrap_or_else(|_| std::path::PathBuf::from("curve-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_editor.toml")
    }

    /// Kurvenänderungen sind gesperrt (deaktiviert oder schreibgeschützt).
    pub fn blocks_mutation(&self) -> bool {
        self.disabled || self.read_only
    }

    /// Tangenten dürfen über Handles, Doppelklick oder Zifferntasten geändert werden.
    pub fn tangents_editable(&self) -> bool {
        !self.lock_tangents && !self.blocks_mutation()
    }
}
