//! Use-Case: Keyframe einfügen.

use super::clamp_to_range;
use crate::core::{
    recompute_auto_tangents, round_to_precision, sort_keyframes, CurveData, Keyframe,
    KeyframeId, TangentMode,
};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Fügt an `position` (Domäne) einen `auto`-Keyframe ein.
///
/// Abgelehnt, wenn Einfügen deaktiviert ist, `max_keyframes` erreicht ist, `x`
/// außerhalb von `domain_x` liegt oder näher als `min_keyframe_distance` an
/// einem vorhandenen Keyframe. Liefert die neue Kurve und die vergebene ID.
pub fn insert_keyframe(
    curve: &CurveData,
    position: DVec2,
    options: &EditorOptions,
) -> Option<(CurveData, KeyframeId)> {
    if !options.allow_add {
        log::debug!("Einfügen deaktiviert");
        return None;
    }
    if curve.len() >= options.max_keyframes {
        log::debug!("Maximale Keyframe-Anzahl {} erreicht", options.max_keyframes);
        return None;
    }

    let x = round_to_precision(position.x, options.precision);
    let [min_x, max_x] = curve.domain_x;
    if x < min_x || x > max_x {
        log::debug!("Einfügen bei x={} außerhalb der Domäne abgelehnt", x);
        return None;
    }
    if curve
        .keyframes
        .iter()
        .any(|kf| (kf.x - x).abs() < options.min_keyframe_distance)
    {
        log::debug!("Einfügen bei x={} zu nah an vorhandenem Keyframe", x);
        return None;
    }

    let y = round_to_precision(position.y, options.precision);
    let y = if options.clamp_y {
        clamp_to_range(y, curve.domain_y)
    } else {
        y
    };

    let id = curve.next_keyframe_id();
    let mut keyframes = curve.keyframes.clone();
    keyframes.push(Keyframe::new(id, x, y, TangentMode::Auto));
    let sorted = sort_keyframes(&keyframes);
    Some((curve.with_keyframes(recompute_auto_tangents(&sorted)), id))
}
