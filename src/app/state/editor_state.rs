use super::{InteractionState, SelectionState};
use crate::app::CommandLog;
use crate::core::{hit_test_with_samples, CurveData, HitResult, Viewport};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Standard-Canvas-Größe, bis der Host eine echte Größe meldet.
pub const DEFAULT_CANVAS_SIZE: DVec2 = DVec2::new(400.0, 300.0);

/// Hauptzustand einer Editor-Instanz.
#[derive(Debug)]
pub struct EditorState {
    /// Maßgeblicher Kurvenwert
    pub curve: CurveData,
    /// Vorschau während eines Drags bei Host-Besitz (bis zum Commit)
    pub pending: Option<CurveData>,
    /// Verhaltens-Flags und Eingabe-Parameter
    pub options: EditorOptions,
    pub viewport: Viewport,
    /// Canvas-Größe in Pixeln
    pub canvas_size: DVec2,
    pub selection: SelectionState,
    pub interaction: InteractionState,
    pub command_log: CommandLog,
}

impl EditorState {
    /// Erstellt einen Zustand für die Kurve; der Viewport wird mit Rand eingepasst.
    pub fn new(curve: CurveData, options: EditorOptions) -> Self {
        let mut state = Self {
            curve: curve.normalize(),
            pending: None,
            options,
            viewport: Viewport::default(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            selection: SelectionState::new(),
            interaction: InteractionState::default(),
            command_log: CommandLog::new(),
        };
        state.fit_viewport();
        state
    }

    /// Aktuell angezeigte Kurve: laufende Vorschau oder der maßgebliche Wert.
    pub fn current_curve(&self) -> &CurveData {
        self.pending.as_ref().unwrap_or(&self.curve)
    }

    /// Übernimmt einen Wert vom Host.
    ///
    /// Der Wert wird normalisiert, verwaiste Selektions-IDs entfernt und eine
    /// laufende Vorschau verworfen. Ändert sich die Domäne, wird der Viewport
    /// neu eingepasst.
    pub fn set_value(&mut self, curve: CurveData) {
        let curve = curve.normalize();
        let domain_changed =
            curve.domain_x != self.curve.domain_x || curve.domain_y != self.curve.domain_y;
        self.curve = curve;
        self.pending = None;
        self.selection.retain_existing(&self.curve);
        if domain_changed {
            self.fit_viewport();
        }
    }

    /// Setzt neue Optionen (z.B. nach Laden aus Datei).
    pub fn set_options(&mut self, options: EditorOptions) {
        let padding_changed = options.padding_px != self.options.padding_px;
        self.options = options;
        if padding_changed {
            self.fit_viewport();
        }
    }

    /// Setzt die Canvas-Größe (mindestens 1×1 Pixel) und passt den Viewport an.
    pub fn set_canvas_size(&mut self, size: DVec2) {
        let size = size.max(DVec2::ONE);
        if size != self.canvas_size {
            self.canvas_size = size;
            self.fit_viewport();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Passt den Viewport mit `padding_px` an die Domäne der Kurve an.
    pub fn fit_viewport(&mut self) {
        let (domain_x, domain_y) = {
            let curve = self.current_curve();
            (curve.domain_x, curve.domain_y)
        };
        self.viewport = Viewport::fit_domain_with_padding(
            domain_x,
            domain_y,
            self.canvas_size,
            self.options.padding_px,
        );
    }

    /// Der Host soll pro Frame neu zeichnen, solange eine Geste läuft.
    pub fn wants_animation_frames(&self) -> bool {
        !self.interaction.drag.is_idle()
    }

    /// Pixel → Domäne.
    pub fn to_domain(&self, pos_px: DVec2) -> DVec2 {
        self.viewport.canvas_to_domain(pos_px, self.canvas_size)
    }

    /// Domäne → Pixel.
    pub fn to_canvas(&self, domain: DVec2) -> DVec2 {
        self.viewport.domain_to_canvas(domain, self.canvas_size)
    }

    /// Hit-Test an einer Pixel-Position mit den konfigurierten Toleranzen.
    pub fn hit_test_at(&self, pos_px: DVec2) -> HitResult {
        hit_test_with_samples(
            pos_px,
            self.current_curve(),
            &self.viewport,
            self.canvas_size,
            self.options.hit_tolerance_px,
            self.options.curve_hit_samples,
        )
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(CurveData::default(), EditorOptions::default())
    }
}
