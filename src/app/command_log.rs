//! Eingabe-Protokoll des Controllers.
//!
//! Jede an `handle_input` gereichte Eingabe landet hier, auch bei
//! deaktiviertem Editor. Das Protokoll lässt sich auf einen frischen Zustand
//! abspielen, um eine Sitzung (z.B. aus einem Fehlerbericht) nachzustellen.

use super::controller::CurveEditorController;
use super::events::{EditorEvent, EditorInput};
use super::EditorState;

/// Begrenztes Protokoll der verarbeiteten Eingaben in Eingangsreihenfolge.
#[derive(Debug, Default, Clone)]
pub struct CommandLog {
    inputs: Vec<EditorInput>,
}

impl CommandLog {
    /// Ab dieser Länge wird die ältere Hälfte verworfen.
    pub const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Protokolliert eine Eingabe.
    pub fn record(&mut self, input: EditorInput) {
        if self.inputs.len() >= Self::MAX_ENTRIES {
            self.inputs.drain(..Self::MAX_ENTRIES / 2);
        }
        self.inputs.push(input);
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn entries(&self) -> &[EditorInput] {
        &self.inputs
    }

    /// Zuletzt verarbeitete Eingabe.
    pub fn last(&self) -> Option<&EditorInput> {
        self.inputs.last()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    /// Spielt alle protokollierten Eingaben auf `state` ab.
    ///
    /// Liefert die dabei entstandenen Ereignisse in Reihenfolge. `state` sollte
    /// dem Ausgangszustand der protokollierten Sitzung entsprechen (Wert,
    /// Optionen, Canvas-Größe), sonst treffen Pixel-Positionen andere Ziele.
    pub fn replay(
        &self,
        controller: &mut CurveEditorController,
        state: &mut EditorState,
    ) -> Vec<EditorEvent> {
        log::debug!("Spiele {} protokollierte Eingaben ab", self.inputs.len());
        self.inputs
            .iter()
            .flat_map(|input| controller.handle_input(state, *input))
            .collect()
    }
}
