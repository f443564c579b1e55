//! Curve Editor Engine Library.
//! Interaktive Bézier-Keyframe-Kurven: Auswertung, Bearbeitung, Hit-Testing
//! und Eingabe-Zustandsmaschine, unabhängig von Rendering und UI-Toolkit.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    dispatch_events, CurveEditorController, EditHistory, EditorCallbacks, EditorEvent,
    EditorInput, EditorState, Key, Modifiers,
};
pub use core::{
    evaluate_curve, evaluate_extrapolated, hit_test, sample_curve, CurveData, CurvePreset,
    HandleSide, HitKind, HitResult, Infinity, Keyframe, KeyframeId, TangentMode, Viewport,
};
pub use shared::{EditorOptions, RenderScene, ValueOwnership};
