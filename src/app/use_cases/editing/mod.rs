//! Use-Case-Funktionen für Kurvenänderungen.
//!
//! Aufgeteilt nach Operation:
//! - `move_keyframe`: Keyframe ziehen (Snap, Rundung, Nachbar-Grenzen)
//! - `nudge`: Selektion per Pfeiltaste verschieben
//! - `insert_keyframe`: Keyframe per Doppelklick einfügen
//! - `delete_keyframes`: Selektion löschen
//! - `tangent_mode`: Tangenten-Modi und Handle-Drag
//!
//! Alle Funktionen arbeiten auf einer Kopie der Kurve. `None` bedeutet,
//! dass die Änderung abgelehnt wurde oder nichts bewirkt hätte.

mod delete_keyframes;
mod insert_keyframe;
mod move_keyframe;
mod nudge;
mod tangent_mode;

pub use delete_keyframes::delete_keyframes;
pub use insert_keyframe::insert_keyframe;
pub use move_keyframe::{constrain_position, move_keyframe, quantize_position};
pub use nudge::nudge_keyframes;
pub use tangent_mode::{cycle_tangent_mode, set_handle, set_tangent_mode};

/// Begrenzt `value` auf `range`; vertauschte Grenzen werden sortiert.
pub(crate) fn clamp_to_range(value: f64, range: [f64; 2]) -> f64 {
    let lo = range[0].min(range[1]);
    let hi = range[0].max(range[1]);
    value.max(lo).min(hi)
}
