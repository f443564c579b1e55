//! Editor-Zustand: Kurvenwert, Selektion, Interaktion.

mod editor_state;
mod interaction;
mod selection;

pub use editor_state::{EditorState, DEFAULT_CANVAS_SIZE};
pub use interaction::{DragState, InteractionState};
pub use selection::SelectionState;
