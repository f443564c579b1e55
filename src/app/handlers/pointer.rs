//! Handler für Zeiger-Eingaben: Drag-Zustandsmaschine, Box-Selektion, Doppelklick.

use super::{emit_change, emit_commit, emit_edit};
use crate::app::events::{EditorEvent, Modifiers};
use crate::app::use_cases;
use crate::app::{DragState, EditorState};
use crate::core::{keyframes_in_rect, HitKind, HitResult};
use glam::DVec2;

/// Zeiger gedrückt: Treffer auswerten, Selektion anpassen, Geste beginnen.
pub fn pointer_down(
    state: &mut EditorState,
    pos: DVec2,
    modifiers: Modifiers,
    events: &mut Vec<EditorEvent>,
) {
    if !state.interaction.drag.is_idle() {
        log::debug!("Neue Geste vor PointerUp, vorherige wird beendet");
        finish_gesture(state, events);
    }

    let hit = state.hit_test_at(pos);
    let target = hit
        .keyframe_index
        .and_then(|i| state.current_curve().keyframes.get(i).map(|kf| (i, *kf)));

    match (hit.kind, target) {
        (HitKind::Keyframe, Some((index, keyframe))) => {
            use_cases::selection::select_keyframe(&mut state.selection, keyframe.id, modifiers);
            if state.options.read_only {
                return;
            }
            begin_edit(
                state,
                DragState::DraggingKeyframe {
                    index,
                    id: keyframe.id,
                    start: keyframe.position(),
                },
                events,
            );
        }
        (HitKind::HandleIn | HitKind::HandleOut, Some((index, keyframe))) => {
            state.selection.replace(keyframe.id);
            let Some(side) = hit.handle_side() else {
                return;
            };
            if !state.options.tangents_editable() {
                log::debug!("Handle-Drag gesperrt, nur Selektion");
                return;
            }
            begin_edit(
                state,
                DragState::DraggingHandle {
                    index,
                    id: keyframe.id,
                    side,
                },
                events,
            );
        }
        _ => {
            let additive = modifiers.shift || modifiers.command();
            if !additive {
                state.selection.clear();
            }
            state.interaction.drag = DragState::BoxSelect {
                origin_px: pos,
                current_px: pos,
                additive,
            };
            capture(state, events);
        }
    }
}

/// Zeiger bewegt: Drag fortführen, Rechteck aufziehen oder Hover aktualisieren.
pub fn pointer_move(
    state: &mut EditorState,
    pos: DVec2,
    modifiers: Modifiers,
    events: &mut Vec<EditorEvent>,
) {
    let drag = state.interaction.drag;
    match drag {
        DragState::Idle => {
            state.interaction.hover = state.hit_test_at(pos);
        }
        DragState::BoxSelect {
            origin_px,
            additive,
            ..
        } => {
            state.interaction.drag = DragState::BoxSelect {
                origin_px,
                current_px: pos,
                additive,
            };
        }
        DragState::DraggingKeyframe { id, start, .. } => {
            if state.options.blocks_mutation() {
                return;
            }
            let curve = state.current_curve().clone();
            let Some(index) = curve.keyframe_index(id) else {
                log::debug!("Gezogener Keyframe {} existiert nicht mehr", id);
                return;
            };
            let snap = state.options.snap_to_grid != modifiers.alt;
            let target = use_cases::editing::quantize_position(
                state.to_domain(pos),
                &curve,
                snap,
                &state.options,
            );
            let Some(updated) =
                use_cases::editing::move_keyframe(&curve, index, target, start.x, &state.options)
            else {
                return;
            };
            if updated != curve {
                state.interaction.drag = DragState::DraggingKeyframe { index, id, start };
                emit_change(state, updated, events);
            }
        }
        DragState::DraggingHandle { id, side, .. } => {
            if !state.options.tangents_editable() {
                return;
            }
            let curve = state.current_curve().clone();
            let Some(index) = curve.keyframe_index(id) else {
                log::debug!("Keyframe {} des gezogenen Handles existiert nicht mehr", id);
                return;
            };
            let offset = state.to_domain(pos) - curve.keyframes[index].position();
            let Some(updated) =
                use_cases::editing::set_handle(&curve, index, side, offset, &state.options)
            else {
                return;
            };
            if updated != curve {
                state.interaction.drag = DragState::DraggingHandle { index, id, side };
                emit_change(state, updated, events);
            }
        }
    }
}

/// Zeiger losgelassen: Geste abschließen.
pub fn pointer_up(state: &mut EditorState, pos: DVec2, events: &mut Vec<EditorEvent>) {
    if let DragState::BoxSelect {
        origin_px,
        additive,
        ..
    } = state.interaction.drag
    {
        state.interaction.drag = DragState::BoxSelect {
            origin_px,
            current_px: pos,
            additive,
        };
    }
    finish_gesture(state, events);
}

/// Doppelklick: Modus eines Keyframes weiterschalten oder Keyframe einfügen.
pub fn double_click(state: &mut EditorState, pos: DVec2, events: &mut Vec<EditorEvent>) {
    let hit = state.hit_test_at(pos);
    match hit.kind {
        HitKind::Keyframe => {
            if !state.options.tangents_editable() {
                log::debug!("Tangenten gesperrt, Doppelklick ignoriert");
                return;
            }
            let Some(index) = hit.keyframe_index else {
                return;
            };
            if let Some(updated) =
                use_cases::editing::cycle_tangent_mode(state.current_curve(), index)
            {
                emit_edit(state, updated, events);
            }
        }
        HitKind::HandleIn | HitKind::HandleOut => {}
        HitKind::None | HitKind::Curve => {
            if state.options.blocks_mutation() {
                return;
            }
            let domain = state.to_domain(pos);
            if let Some((updated, id)) =
                use_cases::editing::insert_keyframe(state.current_curve(), domain, &state.options)
            {
                log::debug!("Keyframe {} bei x={:.4} eingefügt", id, domain.x);
                emit_edit(state, updated, events);
                state.selection.replace(id);
            }
        }
    }
}

/// Zeiger hat die Fläche verlassen: Hover zurücksetzen. Ein laufender Drag
/// bleibt über den Pointer-Capture aktiv.
pub fn pointer_leave(state: &mut EditorState) {
    state.interaction.hover = HitResult::NONE;
}

/// Beendet die laufende Geste: Box-Selektion auflösen oder Drag committen,
/// Capture freigeben, zurück in den Leerlauf.
pub(crate) fn finish_gesture(state: &mut EditorState, events: &mut Vec<EditorEvent>) {
    match std::mem::take(&mut state.interaction.drag) {
        DragState::Idle => {}
        DragState::BoxSelect {
            origin_px,
            current_px,
            additive,
        } => {
            let hit_ids = keyframes_in_rect(
                state.current_curve(),
                &state.viewport,
                state.canvas_size,
                origin_px,
                current_px,
            );
            use_cases::selection::select_in_rect(&mut state.selection, &hit_ids, additive);
        }
        DragState::DraggingKeyframe { .. } | DragState::DraggingHandle { .. } => {
            if let Some(snapshot) = state.interaction.drag_snapshot.take() {
                let current = state.current_curve().clone();
                if current != snapshot {
                    emit_commit(state, current, events);
                } else {
                    state.pending = None;
                }
            }
        }
    }
    state.interaction.drag_snapshot = None;
    release(state, events);
}

fn begin_edit(state: &mut EditorState, drag: DragState, events: &mut Vec<EditorEvent>) {
    state.interaction.drag_snapshot = Some(state.current_curve().clone());
    state.interaction.drag = drag;
    capture(state, events);
}

fn capture(state: &mut EditorState, events: &mut Vec<EditorEvent>) {
    if !state.interaction.pointer_captured {
        state.interaction.pointer_captured = true;
        events.push(EditorEvent::PointerCaptured);
    }
}

fn release(state: &mut EditorState, events: &mut Vec<EditorEvent>) {
    if state.interaction.pointer_captured {
        state.interaction.pointer_captured = false;
        events.push(EditorEvent::PointerReleased);
    }
}
