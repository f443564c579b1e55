//! Undo/Redo über committete Kurvenwerte (Host-Hilfe).

use super::events::EditorEvent;
use super::{EditorState, SelectionState};
use crate::core::CurveData;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Die Kurve liegt hinter einem Arc, damit Snapshots zwischen Undo- und
/// Redo-Stack ohne Deep-Clone wandern.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub curve: Arc<CurveData>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen Snapshot des maßgeblichen Werts.
    ///
    /// Während einer Geste ist das der Wert vor Gestenbeginn, nicht der
    /// bereits übernommene Zwischenstand.
    pub fn from_state(state: &EditorState) -> Self {
        let curve = state
            .interaction
            .drag_snapshot
            .as_ref()
            .unwrap_or(&state.curve);
        Self {
            curve: Arc::new(curve.clone()),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (wie ein `set_value` vom Host).
    pub fn apply_to(self, state: &mut EditorState) {
        state.set_value(Arc::unwrap_or_clone(self.curve));
        state.selection = self.selection;
        state.selection.retain_existing(&state.curve);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(Self::DEFAULT_MAX_DEPTH)
    }
}

impl EditHistory {
    /// Tiefe für `EditHistory::default()`.
    pub const DEFAULT_MAX_DEPTH: usize = 200;

    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen Snapshot ab und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Legt `before` ab, falls die Ereignisse einen Commit enthalten.
    ///
    /// Typischer Ablauf: Snapshot vor `handle_input` nehmen, danach mit den
    /// gelieferten Ereignissen hierher reichen.
    pub fn record_if_committed(&mut self, before: Snapshot, events: &[EditorEvent]) -> bool {
        let committed = events
            .iter()
            .any(|e| matches!(e, EditorEvent::CurveCommitted(_)));
        if committed {
            self.record_snapshot(before);
        }
        committed
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }

    /// Macht den letzten Commit auf dem State rückgängig.
    pub fn undo(&mut self, state: &mut EditorState) -> bool {
        match self.pop_undo_with_current(Snapshot::from_state(state)) {
            Some(snap) => {
                snap.apply_to(state);
                true
            }
            None => {
                log::debug!("Nichts zum Rückgängigmachen");
                false
            }
        }
    }

    /// Stellt den zuletzt rückgängig gemachten Commit wieder her.
    pub fn redo(&mut self, state: &mut EditorState) -> bool {
        match self.pop_redo_with_current(Snapshot::from_state(state)) {
            Some(snap) => {
                snap.apply_to(state);
                true
            }
            None => {
                log::debug!("Nichts zum Wiederherstellen");
                false
            }
        }
    }
}
