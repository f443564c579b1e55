//! Handler für die Eingabe-Verarbeitung.
//!
//! Jeder Handler gruppiert die Verarbeitung eines Eingabe-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion; die
//! Kurvenänderungen selbst liegen in `use_cases`.

pub mod keyboard;
pub mod pointer;

use crate::app::events::EditorEvent;
use crate::app::EditorState;
use crate::core::CurveData;
use crate::shared::ValueOwnership;

/// Meldet eine kontinuierliche Änderung.
///
/// Engine-Besitz übernimmt den Wert sofort, Host-Besitz hält ihn als Vorschau,
/// bis der Host ihn per `set_value` bestätigt oder die Geste endet.
pub(crate) fn emit_change(state: &mut EditorState, curve: CurveData, events: &mut Vec<EditorEvent>) {
    match state.options.ownership {
        ValueOwnership::Engine => state.curve = curve.clone(),
        ValueOwnership::Host => state.pending = Some(curve.clone()),
    }
    events.push(EditorEvent::CurveChanged(curve));
}

/// Meldet eine abgeschlossene Änderung und verwirft die Vorschau.
pub(crate) fn emit_commit(state: &mut EditorState, curve: CurveData, events: &mut Vec<EditorEvent>) {
    if state.options.ownership == ValueOwnership::Engine {
        state.curve = curve.clone();
    }
    state.pending = None;
    events.push(EditorEvent::CurveCommitted(curve));
}

/// Meldet eine diskrete Änderung: erst kontinuierlich, dann als Commit.
pub(crate) fn emit_edit(state: &mut EditorState, curve: CurveData, events: &mut Vec<EditorEvent>) {
    emit_change(state, curve.clone(), events);
    emit_commit(state, curve, events);
}
