//! Use-Case: Keyframe ziehen.

use super::clamp_to_range;
use crate::core::{recompute_auto_tangents, round_to_precision, snap_to_grid, CurveData};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Zielposition aus dem Domänen-Cursor: optional Grid-Snap, dann Rundung.
pub fn quantize_position(
    domain: DVec2,
    curve: &CurveData,
    snap: bool,
    options: &EditorOptions,
) -> DVec2 {
    let (x, y) = if snap {
        (
            snap_to_grid(domain.x, curve.domain_x, options.grid_subdivisions),
            snap_to_grid(domain.y, curve.domain_y, options.grid_subdivisions),
        )
    } else {
        (domain.x, domain.y)
    };
    DVec2::new(
        round_to_precision(x, options.precision),
        round_to_precision(y, options.precision),
    )
}

/// Wendet Endpunkt-Sperre, Nachbar-Abstand und Y-Begrenzung auf eine
/// Kandidaten-Position für den Keyframe `index` an.
///
/// Gesperrte Endpunkte behalten `original_x`. Sonst liegt `x` zwischen den
/// Nachbarn plus/minus `min_keyframe_distance` (am Rand: Domänengrenze). Ist
/// das Intervall leer, bleibt ebenfalls `original_x`.
pub fn constrain_position(
    curve: &CurveData,
    index: usize,
    candidate: DVec2,
    original_x: f64,
    options: &EditorOptions,
) -> DVec2 {
    let keyframes = &curve.keyframes;
    let is_endpoint = index == 0 || index + 1 >= keyframes.len();

    let x = if options.lock_endpoints && is_endpoint {
        original_x
    } else {
        let margin = options.min_keyframe_distance.max(0.0);
        let lo = match index.checked_sub(1).and_then(|i| keyframes.get(i)) {
            Some(prev) => prev.x + margin,
            None => curve.domain_x[0],
        };
        let hi = match keyframes.get(index + 1) {
            Some(next) => next.x - margin,
            None => curve.domain_x[1],
        };
        if lo > hi {
            original_x
        } else {
            candidate.x.max(lo).min(hi)
        }
    };

    let y = if options.clamp_y {
        clamp_to_range(candidate.y, curve.domain_y)
    } else {
        candidate.y
    };
    DVec2::new(x, y)
}

/// Verschiebt Keyframe `index` zur (bereits quantisierten) Zielposition und
/// berechnet alle Auto-Tangenten neu. `None` bei ungültigem Index.
pub fn move_keyframe(
    curve: &CurveData,
    index: usize,
    target: DVec2,
    original_x: f64,
    options: &EditorOptions,
) -> Option<CurveData> {
    let keyframe = *curve.keyframes.get(index)?;
    let position = constrain_position(curve, index, target, original_x, options);
    let mut keyframes = curve.keyframes.clone();
    keyframes[index] = keyframe.with_position(position.x, position.y);
    Some(curve.with_keyframes(recompute_auto_tangents(&keyframes)))
}
