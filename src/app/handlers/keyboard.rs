//! Handler für Tastatur-Eingaben.

use super::emit_edit;
use crate::app::events::{EditorEvent, Key, Modifiers};
use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::TangentMode;
use glam::DVec2;

/// Verarbeitet einen Tastendruck.
///
/// Kurvenändernde Tasten werden während einer laufenden Zeiger-Geste ignoriert.
pub fn key_down(
    state: &mut EditorState,
    key: Key,
    modifiers: Modifiers,
    events: &mut Vec<EditorEvent>,
) {
    match key {
        Key::Character(c) if modifiers.command() && c.eq_ignore_ascii_case(&'a') => {
            let curve = state.current_curve().clone();
            use_cases::selection::select_all(&mut state.selection, &curve);
        }
        Key::Delete | Key::Backspace => {
            if !can_edit(state) {
                return;
            }
            let ids = state.selection.ids();
            if let Some(updated) =
                use_cases::editing::delete_keyframes(state.current_curve(), &ids, &state.options)
            {
                log::debug!("{} Keyframe(s) gelöscht", ids.len());
                state.selection.retain_existing(&updated);
                emit_edit(state, updated, events);
            }
        }
        Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => {
            if !can_edit(state) || state.selection.is_empty() {
                return;
            }
            let delta = nudge_delta(state, key, modifiers);
            let ids = state.selection.ids();
            if let Some(updated) = use_cases::editing::nudge_keyframes(
                state.current_curve(),
                &ids,
                delta,
                &state.options,
            ) {
                emit_edit(state, updated, events);
            }
        }
        Key::Character(c) if !modifiers.command() => {
            let Some(mode) = TangentMode::from_digit(c) else {
                return;
            };
            if !state.options.tangents_editable()
                || state.selection.is_empty()
                || !state.interaction.drag.is_idle()
            {
                return;
            }
            let ids = state.selection.ids();
            if let Some(updated) =
                use_cases::editing::set_tangent_mode(state.current_curve(), &ids, mode)
            {
                emit_edit(state, updated, events);
            }
        }
        Key::Character(_) => {}
    }
}

fn can_edit(state: &EditorState) -> bool {
    if state.options.blocks_mutation() {
        return false;
    }
    if !state.interaction.drag.is_idle() {
        log::debug!("Tastatur-Änderung während laufender Geste ignoriert");
        return false;
    }
    true
}

/// Schritt relativ zum sichtbaren Bereich; Shift wählt den feinen Schritt.
fn nudge_delta(state: &EditorState, key: Key, modifiers: Modifiers) -> DVec2 {
    let fraction = if modifiers.shift {
        state.options.fine_nudge_fraction
    } else {
        state.options.nudge_fraction
    };
    let [x0, x1] = state.viewport.effective_x();
    let [y0, y1] = state.viewport.effective_y();
    let step = DVec2::new((x1 - x0).abs(), (y1 - y0).abs()) * fraction;
    match key {
        Key::ArrowLeft => DVec2::new(-step.x, 0.0),
        Key::ArrowRight => DVec2::new(step.x, 0.0),
        Key::ArrowUp => DVec2::new(0.0, step.y),
        Key::ArrowDown => DVec2::new(0.0, -step.y),
        _ => DVec2::ZERO,
    }
}
