//! Tangenten-System: Auto-Tangenten und Modus-Constraints.
//!
//! Alle Funktionen sind reine Transformationen und liefern neue Keyframes;
//! die Eingaben werden nie verändert.

use super::keyframe::{HandleSide, Keyframe, TangentMode};
use glam::DVec2;

/// Unterhalb dieser Handle-Länge wird der Aligned-Constraint übersprungen.
const MIN_HANDLE_LENGTH: f64 = 1e-10;

/// Auto-Tangente nach Catmull-Rom-Art.
///
/// Mit beiden Nachbarn zeigt die Tangente entlang `(next - prev) / 3`; fehlt ein
/// Nachbar, wird das Delta zum vorhandenen Nachbarn genauso skaliert. Ohne
/// Nachbarn sind beide Handles null. Rückgabe: `(handle_in, handle_out)`.
pub fn compute_auto_tangent(
    prev: Option<&Keyframe>,
    current: &Keyframe,
    next: Option<&Keyframe>,
) -> (DVec2, DVec2) {
    let tangent = match (prev, next) {
        (Some(p), Some(n)) => (n.position() - p.position()) / 3.0,
        (None, Some(n)) => (n.position() - current.position()) / 3.0,
        (Some(p), None) => (current.position() - p.position()) / 3.0,
        (None, None) => DVec2::ZERO,
    };
    (-tangent, tangent)
}

/// Berechnet die Handles aller `auto`-Keyframes neu.
///
/// Muss nach jeder strukturellen Änderung laufen (Einfügen, Löschen, Verschieben),
/// da sich die Nachbarschaft eines Keyframes geändert haben kann.
pub fn recompute_auto_tangents(keyframes: &[Keyframe]) -> Vec<Keyframe> {
    keyframes
        .iter()
        .enumerate()
        .map(|(i, kf)| {
            if kf.tangent_mode != TangentMode::Auto {
                return *kf;
            }
            let prev = i.checked_sub(1).and_then(|p| keyframes.get(p));
            let next = keyframes.get(i + 1);
            let (handle_in, handle_out) = compute_auto_tangent(prev, kf, next);
            kf.with_handles(handle_in, handle_out)
        })
        .collect()
}

/// Wendet den Tangenten-Constraint nach Bewegung von `moved` an.
///
/// - `mirrored`: Gegen-Handle = exakte Negation des bewegten Handles
/// - `aligned`: Gegen-Handle übernimmt die Gegenrichtung, behält aber seine Länge
/// - alle anderen Modi: unverändert
pub fn constrain_tangent(keyframe: Keyframe, moved: HandleSide) -> Keyframe {
    let moved_handle = keyframe.handle(moved);
    let other_side = moved.opposite();
    match keyframe.tangent_mode {
        TangentMode::Mirrored => keyframe.with_handle(other_side, -moved_handle),
        TangentMode::Aligned => {
            let other_handle = keyframe.handle(other_side);
            let moved_length = moved_handle.length();
            let other_length = other_handle.length();
            if moved_length < MIN_HANDLE_LENGTH || other_length < MIN_HANDLE_LENGTH {
                return keyframe;
            }
            let scale = other_length / moved_length;
            keyframe.with_handle(other_side, -moved_handle * scale)
        }
        TangentMode::Free | TangentMode::Auto | TangentMode::Linear | TangentMode::Step => {
            keyframe
        }
    }
}

/// Bereitet einen Keyframe für eine manuelle Handle-Bearbeitung vor.
///
/// `auto` wird zu `free`, sonst würde die nächste Auto-Neuberechnung die
/// Eingabe sofort überschreiben.
pub fn promote_for_handle_edit(keyframe: Keyframe) -> Keyframe {
    if keyframe.tangent_mode == TangentMode::Auto {
        Keyframe {
            tangent_mode: TangentMode::Free,
            ..keyframe
        }
    } else {
        keyframe
    }
}

/// Setzt den Tangenten-Modus eines Keyframes.
///
/// `linear` setzt beide Handles auf null, `mirrored`/`aligned` richten das
/// eingehende Handle am ausgehenden aus. `auto`-Handles berechnet der Aufrufer
/// anschließend über [`recompute_auto_tangents`].
pub fn apply_tangent_mode(keyframe: Keyframe, mode: TangentMode) -> Keyframe {
    let updated = Keyframe {
        tangent_mode: mode,
        ..keyframe
    };
    match mode {
        TangentMode::Linear => updated.with_handles(DVec2::ZERO, DVec2::ZERO),
        TangentMode::Mirrored | TangentMode::Aligned => {
            constrain_tangent(updated, HandleSide::Out)
        }
        TangentMode::Free | TangentMode::Auto | TangentMode::Step => updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn kf(id: u64, x: f64, y: f64, mode: TangentMode) -> Keyframe {
        Keyframe::new(id, x, y, mode)
    }

    #[test]
    fn auto_tangent_with_both_neighbors() {
        let prev = kf(1, 0.0, 0.0, TangentMode::Auto);
        let current = kf(2, 1.0, 1.0, TangentMode::Auto);
        let next = kf(3, 3.0, 0.0, TangentMode::Auto);
        let (h_in, h_out) = compute_auto_tangent(Some(&prev), &current, Some(&next));
        assert_relative_eq!(h_out.x, 1.0);
        assert_relative_eq!(h_out.y, 0.0);
        assert_eq!(h_in, -h_out);
    }

    #[test]
    fn auto_tangent_collapses_to_single_neighbor() {
        let current = kf(1, 0.0, 0.0, TangentMode::Auto);
        let next = kf(2, 3.0, 3.0, TangentMode::Auto);
        let (h_in, h_out) = compute_auto_tangent(None, &current, Some(&next));
        assert_eq!(h_out, DVec2::new(1.0, 1.0));
        assert_eq!(h_in, DVec2::new(-1.0, -1.0));

        let (h_in, h_out) = compute_auto_tangent(Some(&current), &next, None);
        assert_eq!(h_out, DVec2::new(1.0, 1.0));
        assert_eq!(h_in, DVec2::new(-1.0, -1.0));
    }

    #[test]
    fn auto_tangent_without_neighbors_is_zero() {
        let lonely = kf(1, 0.5, 0.5, TangentMode::Auto);
        assert_eq!(
            compute_auto_tangent(None, &lonely, None),
            (DVec2::ZERO, DVec2::ZERO)
        );
    }

    #[test]
    fn recompute_only_touches_auto_keyframes() {
        let free = kf(2, 1.0, 1.0, TangentMode::Free)
            .with_handles(DVec2::new(-0.1, 0.0), DVec2::new(0.1, 0.0));
        let keyframes = vec![
            kf(1, 0.0, 0.0, TangentMode::Auto),
            free,
            kf(3, 2.0, 0.0, TangentMode::Auto),
        ];
        let result = recompute_auto_tangents(&keyframes);
        assert_eq!(result[1], free);
        assert_eq!(result[0].handle_out, DVec2::new(1.0, 1.0) / 3.0);
        assert_eq!(result[2].handle_in, -(DVec2::new(1.0, -1.0) / 3.0));
        // Eingabe unverändert
        assert_eq!(keyframes[0].handle_out, DVec2::ZERO);
    }

    #[test]
    fn mirrored_negates_exactly() {
        let base = kf(1, 0.0, 0.0, TangentMode::Mirrored)
            .with_handles(DVec2::new(-1.0, 0.0), DVec2::new(0.3, 0.7));
        let out_moved = constrain_tangent(base, HandleSide::Out);
        assert_eq!(out_moved.handle_in, -out_moved.handle_out);

        let in_moved = constrain_tangent(base, HandleSide::In);
        assert_eq!(in_moved.handle_out, -in_moved.handle_in);
    }

    #[test]
    fn aligned_keeps_length_and_opposes_direction() {
        let base = kf(1, 0.0, 0.0, TangentMode::Aligned)
            .with_handles(DVec2::new(-2.0, 0.0), DVec2::new(0.3, 0.4));
        let result = constrain_tangent(base, HandleSide::Out);
        assert_relative_eq!(result.handle_in.length(), 2.0, epsilon = 1e-12);
        let dir_in = result.handle_in.normalize();
        let dir_out = result.handle_out.normalize();
        assert_relative_eq!(dir_in.x, -dir_out.x, epsilon = 1e-12);
        assert_relative_eq!(dir_in.y, -dir_out.y, epsilon = 1e-12);
        assert_eq!(result.handle_out, base.handle_out);
    }

    #[test]
    fn aligned_skips_zero_length_handles() {
        let base = kf(1, 0.0, 0.0, TangentMode::Aligned)
            .with_handles(DVec2::ZERO, DVec2::new(0.3, 0.4));
        assert_eq!(constrain_tangent(base, HandleSide::Out), base);

        let base = kf(1, 0.0, 0.0, TangentMode::Aligned)
            .with_handles(DVec2::new(-1.0, 0.0), DVec2::ZERO);
        assert_eq!(constrain_tangent(base, HandleSide::Out), base);
    }

    #[test]
    fn free_modes_are_unconstrained() {
        for mode in [
            TangentMode::Free,
            TangentMode::Auto,
            TangentMode::Linear,
            TangentMode::Step,
        ] {
            let base = kf(1, 0.0, 0.0, mode)
                .with_handles(DVec2::new(-1.0, 2.0), DVec2::new(0.3, 0.4));
            assert_eq!(constrain_tangent(base, HandleSide::In), base);
        }
    }

    #[test]
    fn promotion_only_affects_auto() {
        let auto = kf(1, 0.0, 0.0, TangentMode::Auto);
        assert_eq!(promote_for_handle_edit(auto).tangent_mode, TangentMode::Free);
        let mirrored = kf(1, 0.0, 0.0, TangentMode::Mirrored);
        assert_eq!(promote_for_handle_edit(mirrored), mirrored);
    }

    #[test]
    fn switching_to_linear_zeroes_handles() {
        let base = kf(1, 0.0, 0.0, TangentMode::Free)
            .with_handles(DVec2::new(-1.0, 2.0), DVec2::new(0.3, 0.4));
        let linear = apply_tangent_mode(base, TangentMode::Linear);
        assert_eq!(linear.handle_in, DVec2::ZERO);
        assert_eq!(linear.handle_out, DVec2::ZERO);
        assert_eq!(linear.tangent_mode, TangentMode::Linear);
    }
}
