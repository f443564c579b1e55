//! Render-Szene als expliziter Übergabevertrag zwischen Engine und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.
//! Alle Positionen sind bereits in Canvas-Pixel projiziert.

use crate::core::{CurveData, HitResult, KeyframeId, TangentMode, Viewport};
use glam::DVec2;
use std::sync::Arc;

/// Projizierter Keyframe mit Handle-Spitzen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeGlyph {
    pub id: KeyframeId,
    /// Keyframe-Position in Pixeln
    pub position: DVec2,
    /// Spitze des eingehenden Handles in Pixeln
    pub handle_in: DVec2,
    /// Spitze des ausgehenden Handles in Pixeln
    pub handle_out: DVec2,
    pub tangent_mode: TangentMode,
    pub selected: bool,
    /// Handles werden gezeichnet (nicht bei `linear`/`step`)
    pub show_handles: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktuell angezeigte Kurve (inkl. laufender Drag-Vorschau)
    pub curve: Arc<CurveData>,
    /// Viewport-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Canvas-Größe in Pixeln
    pub canvas_size: DVec2,
    pub domain_x: [f64; 2],
    pub domain_y: [f64; 2],
    /// IDs der selektierten Keyframes in Selektionsreihenfolge
    pub selected_ids: Vec<KeyframeId>,
    /// Element unter dem Zeiger (nur im Leerlauf aktualisiert)
    pub hover: HitResult,
    /// Aufzieh-Rechteck (zwei Ecken in Pixeln) während einer Box-Selektion
    pub selection_rect: Option<[DVec2; 2]>,
    /// Kurvenlinie als Polylinie in Pixeln
    pub polyline: Vec<DVec2>,
    /// Keyframes in Kurvenreihenfolge
    pub keyframes: Vec<KeyframeGlyph>,
    /// Pixel-x der vertikalen Rasterlinien
    pub grid_x_px: Vec<f64>,
    /// Pixel-y der horizontalen Rasterlinien
    pub grid_y_px: Vec<f64>,
    /// Eingaben werden ignoriert (gedimmt darstellen)
    pub disabled: bool,
    pub read_only: bool,
}

impl RenderScene {
    /// Gibt zurück, ob Keyframes selektiert sind.
    pub fn has_selection(&self) -> bool {
        !self.selected_ids.is_empty()
    }

    /// Gibt zurück, ob gerade eine Box-Selektion aufgezogen wird.
    pub fn is_box_selecting(&self) -> bool {
        self.selection_rect.is_some()
    }
}
