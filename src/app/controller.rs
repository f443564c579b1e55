//! Controller für die zentrale Eingabe-Verarbeitung.

use super::events::{EditorEvent, EditorInput};
use super::handlers;
use super::render_scene;
use super::EditorState;
use crate::shared::RenderScene;

/// Orchestriert Eingaben und Use-Cases auf den EditorState.
///
/// Der Controller ist zustandslos; Interaktion, Selektion und Wert liegen im
/// `EditorState`. Jeder Aufruf liefert die daraus entstandenen Ereignisse in
/// Reihenfolge.
#[derive(Debug, Default)]
pub struct CurveEditorController;

impl CurveEditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet eine Eingabe und gibt die Host-Ereignisse zurück.
    ///
    /// Bei `disabled` wird nichts verändert und nichts gemeldet. Ändert sich die
    /// Selektion, folgt am Ende ein `SelectionChanged`.
    pub fn handle_input(&mut self, state: &mut EditorState, input: EditorInput) -> Vec<EditorEvent> {
        state.command_log.record(input);
        if state.options.disabled {
            log::debug!("Editor deaktiviert, Eingabe ignoriert: {:?}", input);
            return Vec::new();
        }

        let selection_before = state.selection.ids();
        let mut events = Vec::new();

        match input {
            EditorInput::PointerDown { pos, modifiers } => {
                handlers::pointer::pointer_down(state, pos, modifiers, &mut events)
            }
            EditorInput::PointerMove { pos, modifiers } => {
                handlers::pointer::pointer_move(state, pos, modifiers, &mut events)
            }
            EditorInput::PointerUp { pos, .. } => {
                handlers::pointer::pointer_up(state, pos, &mut events)
            }
            EditorInput::DoubleClick { pos, .. } => {
                handlers::pointer::double_click(state, pos, &mut events)
            }
            EditorInput::PointerLeave => handlers::pointer::pointer_leave(state),
            EditorInput::KeyDown { key, modifiers } => {
                handlers::keyboard::key_down(state, key, modifiers, &mut events)
            }
        }

        // Vergleich der Reihenfolge, nicht nur der Menge
        let selection_after = state.selection.ids();
        if selection_after != selection_before {
            events.push(EditorEvent::SelectionChanged(selection_after));
        }
        events
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }
}
