//! Use-Case: Selektierte Keyframes löschen.

use crate::core::{recompute_auto_tangents, CurveData, Keyframe, KeyframeId};
use crate::shared::EditorOptions;

/// Entfernt alle Keyframes aus `ids`, außer gesperrten Endpunkten.
///
/// Die Operation wird vollständig abgelehnt, wenn danach weniger als zwei
/// Keyframes übrig blieben oder nichts löschbar ist.
pub fn delete_keyframes(
    curve: &CurveData,
    ids: &[KeyframeId],
    options: &EditorOptions,
) -> Option<CurveData> {
    if !options.allow_delete {
        log::debug!("Löschen deaktiviert");
        return None;
    }
    if ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return None;
    }

    let last = curve.len().saturating_sub(1);
    let remaining: Vec<Keyframe> = curve
        .keyframes
        .iter()
        .enumerate()
        .filter(|(i, kf)| {
            let locked = options.lock_endpoints && (*i == 0 || *i == last);
            locked || !ids.contains(&kf.id)
        })
        .map(|(_, kf)| *kf)
        .collect();

    if remaining.len() == curve.len() {
        log::debug!("Keine löschbaren Keyframes in der Selektion");
        return None;
    }
    if remaining.len() < 2 {
        log::debug!(
            "Löschen abgelehnt: {} Keyframe(s) würden verbleiben",
            remaining.len()
        );
        return None;
    }
    Some(curve.with_keyframes(recompute_auto_tangents(&remaining)))
}
