//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod render_scene;
/// Editor-Zustand
///
/// Dieses Modul verwaltet den Zustand einer Editor-Instanz (Wert, Selektion, Geste).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::CurveEditorController;
pub use events::{dispatch_events, EditorCallbacks, EditorEvent, EditorInput, Key, Modifiers};
pub use history::{EditHistory, Snapshot};
pub use render_scene::build as build_render_scene;
pub use state::{DragState, EditorState, InteractionState, SelectionState, DEFAULT_CANVAS_SIZE};
