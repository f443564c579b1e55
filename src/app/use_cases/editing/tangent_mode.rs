//! Use-Case: Tangenten-Modi setzen und Handles ziehen.

use crate::core::{
    apply_tangent_mode, constrain_tangent, promote_for_handle_edit, recompute_auto_tangents,
    round_to_precision, CurveData, HandleSide, KeyframeId, TangentMode,
};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Schaltet Keyframe `index` auf den nächsten Modus der festen Reihenfolge.
pub fn cycle_tangent_mode(curve: &CurveData, index: usize) -> Option<CurveData> {
    let keyframe = curve.keyframes.get(index)?;
    set_tangent_mode(curve, &[keyframe.id], keyframe.tangent_mode.next())
}

/// Setzt den Modus aller Keyframes aus `ids`. `None`, wenn sich nichts ändert.
pub fn set_tangent_mode(
    curve: &CurveData,
    ids: &[KeyframeId],
    mode: TangentMode,
) -> Option<CurveData> {
    let mut changed = false;
    let keyframes: Vec<_> = curve
        .keyframes
        .iter()
        .map(|kf| {
            if ids.contains(&kf.id) && kf.tangent_mode != mode {
                changed = true;
                apply_tangent_mode(*kf, mode)
            } else {
                *kf
            }
        })
        .collect();

    if !changed {
        return None;
    }
    Some(curve.with_keyframes(recompute_auto_tangents(&keyframes)))
}

/// Setzt das Handle `side` von Keyframe `index` auf `offset` (relativ zum Keyframe).
///
/// `auto` wird vorher zu `free`; danach greift der Constraint des Modus.
pub fn set_handle(
    curve: &CurveData,
    index: usize,
    side: HandleSide,
    offset: DVec2,
    options: &EditorOptions,
) -> Option<CurveData> {
    let keyframe = *curve.keyframes.get(index)?;
    let offset = DVec2::new(
        round_to_precision(offset.x, options.precision),
        round_to_precision(offset.y, options.precision),
    );
    let updated = constrain_tangent(
        promote_for_handle_edit(keyframe).with_handle(side, offset),
        side,
    );
    let mut keyframes = curve.keyframes.clone();
    keyframes[index] = updated;
    Some(curve.with_keyframes(keyframes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Keyframe;
    use approx::assert_relative_eq;

    fn curve(mode: TangentMode) -> CurveData {
        CurveData::new(
            vec![
                Keyframe::new(1, 0.0, 0.0, TangentMode::Linear),
                Keyframe::new(2, 0.5, 0.5, mode)
                    .with_handles(DVec2::new(-0.1, 0.0), DVec2::new(0.2, 0.0)),
                Keyframe::new(3, 1.0, 1.0, TangentMode::Linear),
            ],
            [0.0, 1.0],
            [0.0, 1.0],
        )
    }

    #[test]
    fn handle_drag_on_auto_promotes_to_free() {
        let updated = set_handle(
            &curve(TangentMode::Auto),
            1,
            HandleSide::Out,
            DVec2::new(0.1, 0.3),
            &EditorOptions::default(),
        )
        .expect("Index gültig");
        let kf = updated.keyframes[1];
        assert_eq!(kf.tangent_mode, TangentMode::Free);
        assert_eq!(kf.handle_out, DVec2::new(0.1, 0.3));
        assert_eq!(kf.handle_in, DVec2::new(-0.1, 0.0));
    }

    #[test]
    fn aligned_handle_drag_keeps_opposite_length() {
        let updated = set_handle(
            &curve(TangentMode::Aligned),
            1,
            HandleSide::Out,
            DVec2::new(0.0, 0.4),
            &EditorOptions::default(),
        )
        .expect("Index gültig");
        let kf = updated.keyframes[1];
        assert_relative_eq!(kf.handle_in.length(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(kf.handle_in.y, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn cycling_from_step_wraps_to_free() {
        let updated =
            cycle_tangent_mode(&curve(TangentMode::Step), 1).expect("Modus ändert sich");
        assert_eq!(updated.keyframes[1].tangent_mode, TangentMode::Free);
    }

    #[test]
    fn setting_same_mode_is_no_op() {
        assert!(set_tangent_mode(&curve(TangentMode::Free), &[2], TangentMode::Free).is_none());
        let linear = set_tangent_mode(&curve(TangentMode::Free), &[2], TangentMode::Linear)
            .expect("Modus ändert sich");
        assert_eq!(linear.keyframes[1].handle_out, DVec2::ZERO);
    }
}
