//! Use-Case-Funktionen für die Keyframe-Selektion.

use crate::app::events::Modifiers;
use crate::app::SelectionState;
use crate::core::{CurveData, KeyframeId};

/// Klick auf einen Keyframe: Ctrl/Cmd schaltet um, Shift erweitert, sonst ersetzen.
pub fn select_keyframe(selection: &mut SelectionState, id: KeyframeId, modifiers: Modifiers) {
    if modifiers.command() {
        selection.toggle(id);
    } else if modifiers.shift {
        selection.extend(id);
    } else {
        selection.replace(id);
    }
}

/// Übernimmt das Ergebnis einer Rechteck-Selektion.
pub fn select_in_rect(selection: &mut SelectionState, hit_ids: &[KeyframeId], additive: bool) {
    if !additive {
        selection.clear();
    }
    for id in hit_ids {
        selection.extend(*id);
    }
}

/// Selektiert alle Keyframes in Kurvenreihenfolge.
pub fn select_all(selection: &mut SelectionState, curve: &CurveData) {
    selection.clear();
    for kf in &curve.keyframes {
        selection.extend(kf.id);
    }
}
