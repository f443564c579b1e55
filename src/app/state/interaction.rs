use crate::core::{CurveData, HandleSide, HitResult, KeyframeId};
use glam::DVec2;

/// Zustand der laufenden Zeiger-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Keyframe wird verschoben; `start` ist die Position beim Drag-Beginn
    DraggingKeyframe {
        index: usize,
        id: KeyframeId,
        start: DVec2,
    },
    /// Handle eines Keyframes wird gezogen
    DraggingHandle {
        index: usize,
        id: KeyframeId,
        side: HandleSide,
    },
    /// Aufzieh-Rechteck in Canvas-Pixeln
    BoxSelect {
        origin_px: DVec2,
        current_px: DVec2,
        additive: bool,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Geste verändert die Kurve (Keyframe- oder Handle-Drag).
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            DragState::DraggingKeyframe { .. } | DragState::DraggingHandle { .. }
        )
    }
}

/// Transienter Interaktionszustand des Controllers.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub drag: DragState,
    /// Element unter dem Zeiger im Leerlauf
    pub hover: HitResult,
    /// Kurve beim Drag-Beginn, Vergleichsbasis für den Commit
    pub drag_snapshot: Option<CurveData>,
    /// Pointer-Capture wurde angefordert und noch nicht freigegeben
    pub pointer_captured: bool,
}
