//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem externen Renderer bzw. Host
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::{EditorOptions, ValueOwnership};
pub use render_scene::{KeyframeGlyph, RenderScene};
