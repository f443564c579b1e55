//! Use-Case: Selektierte Keyframes per Pfeiltaste verschieben.

use super::constrain_position;
use crate::core::{recompute_auto_tangents, round_to_precision, CurveData, KeyframeId};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Verschiebt alle Keyframes aus `ids` um `delta` (Domänen-Einheiten).
///
/// Die Keyframes werden in Bewegungsrichtung abgearbeitet, damit ein
/// vorausliegender selektierter Nachbar zuerst Platz macht. Jeder Keyframe
/// bleibt zwischen seinen Nachbarn; gesperrte Endpunkte ändern nur `y`.
pub fn nudge_keyframes(
    curve: &CurveData,
    ids: &[KeyframeId],
    delta: DVec2,
    options: &EditorOptions,
) -> Option<CurveData> {
    if ids.is_empty() || delta == DVec2::ZERO {
        return None;
    }

    let mut order: Vec<usize> = curve
        .keyframes
        .iter()
        .enumerate()
        .filter(|(_, kf)| ids.contains(&kf.id))
        .map(|(i, _)| i)
        .collect();
    if delta.x > 0.0 {
        order.reverse();
    }

    let mut working = curve.clone();
    for index in order {
        let keyframe = working.keyframes[index];
        let candidate = keyframe.position() + delta;
        let candidate = DVec2::new(
            round_to_precision(candidate.x, options.precision),
            round_to_precision(candidate.y, options.precision),
        );
        let position = constrain_position(&working, index, candidate, keyframe.x, options);
        working.keyframes[index] = keyframe.with_position(position.x, position.y);
    }

    if working.keyframes == curve.keyframes {
        log::debug!("Nudge ohne Wirkung (Grenzen erreicht)");
        return None;
    }
    Some(curve.with_keyframes(recompute_auto_tangents(&working.keyframes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Keyframe, TangentMode};
    use approx::assert_relative_eq;

    fn curve() -> CurveData {
        CurveData::new(
            vec![
                Keyframe::new(1, 0.0, 0.0, TangentMode::Linear),
                Keyframe::new(2, 0.4, 0.5, TangentMode::Linear),
                Keyframe::new(3, 0.41, 0.5, TangentMode::Linear),
                Keyframe::new(4, 1.0, 1.0, TangentMode::Linear),
            ],
            [0.0, 1.0],
            [0.0, 1.0],
        )
    }

    #[test]
    fn adjacent_selection_moves_together_to_the_right() {
        let options = EditorOptions::default();
        let moved = nudge_keyframes(&curve(), &[2, 3], DVec2::new(0.1, 0.0), &options)
            .expect("Nudge wirkt");
        assert_relative_eq!(moved.keyframes[1].x, 0.5);
        assert_relative_eq!(moved.keyframes[2].x, 0.51);
    }

    #[test]
    fn locked_endpoint_only_moves_vertically() {
        let options = EditorOptions {
            lock_endpoints: true,
            ..EditorOptions::default()
        };
        let moved = nudge_keyframes(&curve(), &[1], DVec2::new(0.1, 0.2), &options)
            .expect("y ändert sich");
        assert_eq!(moved.keyframes[0].x, 0.0);
        assert_relative_eq!(moved.keyframes[0].y, 0.2);
    }

    #[test]
    fn blocked_nudge_is_rejected() {
        let options = EditorOptions::default();
        // y bereits am oberen Rand, x am rechten Rand
        assert!(nudge_keyframes(&curve(), &[4], DVec2::new(0.1, 0.1), &options).is_none());
        assert!(nudge_keyframes(&curve(), &[], DVec2::new(0.1, 0.0), &options).is_none());
    }
}
