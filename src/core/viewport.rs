//! Viewport: Abbildung zwischen Domänenraum und Zeichenfläche (Pixel).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Sichtbarer Domänen-Ausschnitt mit optionalem Zoom und Pan.
///
/// Die Abbildung ist pro Achse affin; die y-Achse ist invertiert
/// (Domäne nach oben = Pixel nach oben).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Sichtbarer x-Bereich bei Zoom 1.0
    pub view_x: [f64; 2],
    /// Sichtbarer y-Bereich bei Zoom 1.0
    pub view_y: [f64; 2],
    /// Zoom-Faktor um die Bereichsmitte (1.0 = unverändert)
    pub zoom: f64,
    /// Verschiebung in Domänen-Einheiten
    pub pan: DVec2,
}

impl Viewport {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    /// Erstellt einen Viewport ohne Zoom und Pan.
    pub fn new(view_x: [f64; 2], view_y: [f64; 2]) -> Self {
        Self {
            view_x,
            view_y,
            zoom: 1.0,
            pan: DVec2::ZERO,
        }
    }

    /// Viewport, der exakt die Domäne zeigt.
    pub fn from_domain(domain_x: [f64; 2], domain_y: [f64; 2]) -> Self {
        Self::new(domain_x, domain_y)
    }

    /// Viewport über der Domäne mit einem Rand von `padding_px` Pixeln je Seite
    /// (Platz für Achsenbeschriftungen).
    pub fn fit_domain_with_padding(
        domain_x: [f64; 2],
        domain_y: [f64; 2],
        canvas_size: DVec2,
        padding_px: f64,
    ) -> Self {
        let pad = |domain: [f64; 2], extent: f64| -> [f64; 2] {
            let usable = extent - 2.0 * padding_px;
            if padding_px <= 0.0 || usable <= 0.0 {
                return domain;
            }
            let margin = (domain[1] - domain[0]) * padding_px / usable;
            [domain[0] - margin, domain[1] + margin]
        };
        Self::new(pad(domain_x, canvas_size.x), pad(domain_y, canvas_size.y))
    }

    /// Effektiver x-Bereich nach Zoom und Pan.
    pub fn effective_x(&self) -> [f64; 2] {
        Self::apply_zoom_pan(self.view_x, self.zoom, self.pan.x)
    }

    /// Effektiver y-Bereich nach Zoom und Pan.
    pub fn effective_y(&self) -> [f64; 2] {
        Self::apply_zoom_pan(self.view_y, self.zoom, self.pan.y)
    }

    fn apply_zoom_pan(range: [f64; 2], zoom: f64, pan: f64) -> [f64; 2] {
        if zoom == 1.0 && pan == 0.0 {
            return range;
        }
        let center = 0.5 * (range[0] + range[1]) + pan;
        let half = 0.5 * (range[1] - range[0]) / zoom.max(f64::EPSILON);
        [center - half, center + half]
    }

    /// Domänen-Punkt → Pixel-Position auf einer Fläche der Größe `canvas_size`.
    pub fn domain_to_canvas(&self, domain: DVec2, canvas_size: DVec2) -> DVec2 {
        let [x0, x1] = self.effective_x();
        let [y0, y1] = self.effective_y();
        DVec2::new(
            (domain.x - x0) / non_zero(x1 - x0) * canvas_size.x,
            canvas_size.y - (domain.y - y0) / non_zero(y1 - y0) * canvas_size.y,
        )
    }

    /// Pixel-Position → Domänen-Punkt (exakte Umkehrung von [`Self::domain_to_canvas`]).
    pub fn canvas_to_domain(&self, canvas: DVec2, canvas_size: DVec2) -> DVec2 {
        let [x0, x1] = self.effective_x();
        let [y0, y1] = self.effective_y();
        DVec2::new(
            x0 + canvas.x / non_zero(canvas_size.x) * (x1 - x0),
            y0 + (canvas_size.y - canvas.y) / non_zero(canvas_size.y) * (y1 - y0),
        )
    }

    /// Domänen-Einheiten pro Pixel je Achse.
    pub fn domain_per_pixel(&self, canvas_size: DVec2) -> DVec2 {
        let [x0, x1] = self.effective_x();
        let [y0, y1] = self.effective_y();
        DVec2::new(
            (x1 - x0) / non_zero(canvas_size.x),
            (y1 - y0) / non_zero(canvas_size.y),
        )
    }

    /// Ändert den Zoom-Level (geklemmt auf `[ZOOM_MIN, ZOOM_MAX]`).
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Verschiebt den Ausschnitt um ein Pixel-Delta (Inhalt folgt dem Zeiger).
    pub fn pan_by_pixels(&mut self, delta_px: DVec2, canvas_size: DVec2) {
        let per_pixel = self.domain_per_pixel(canvas_size);
        self.pan += DVec2::new(-delta_px.x * per_pixel.x, delta_px.y * per_pixel.y);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new([0.0, 1.0], [0.0, 1.0])
    }
}

fn non_zero(value: f64) -> f64 {
    if value.abs() < f64::EPSILON {
        f64::EPSILON.copysign(value)
    } else {
        value
    }
}
