//! Extrapolations-Politik außerhalb des Domänenbereichs.

use serde::{Deserialize, Serialize};

/// Verhalten vor dem ersten bzw. nach dem letzten Keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Infinity {
    /// Auf den nächsten Rand klemmen
    #[default]
    Constant,
    /// Endtangente fortsetzen (x bleibt unverändert)
    Linear,
    /// Periodisch wiederholen
    Cycle,
    /// Periodisch wiederholen, jede zweite Periode gespiegelt
    Pingpong,
}

/// Ergebnis von [`wrap_x`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrappedX {
    /// Abgebildete x-Position
    pub x: f64,
    /// Gesetzt in gespiegelten Pingpong-Perioden. Wird von keinem Aufrufer
    /// ausgewertet; reserviert für Y-gespiegelte Wiedergabe.
    pub flip_y: bool,
}

impl WrappedX {
    fn plain(x: f64) -> Self {
        Self { x, flip_y: false }
    }
}

/// Bildet `x` gemäß Pre-/Post-Infinity-Politik in den Domänenbereich ab.
///
/// Innerhalb von `domain_x` bleibt `x` unverändert. `linear` lässt `x` ebenfalls
/// unverändert; der Aufrufer extrapoliert dann entlang der Endtangente.
pub fn wrap_x(
    x: f64,
    domain_x: [f64; 2],
    pre_infinity: Infinity,
    post_infinity: Infinity,
) -> WrappedX {
    let [min, max] = domain_x;
    let policy = if x < min {
        pre_infinity
    } else if x > max {
        post_infinity
    } else {
        return WrappedX::plain(x);
    };

    let range = max - min;
    if range <= 0.0 {
        return WrappedX::plain(x.clamp(min, max.max(min)));
    }

    match policy {
        Infinity::Constant => WrappedX::plain(x.clamp(min, max)),
        Infinity::Linear => WrappedX::plain(x),
        Infinity::Cycle => {
            // rem_euclid kann für winzige negative Offsets auf `range` runden
            let wrapped = min + (x - min).rem_euclid(range);
            WrappedX::plain(if wrapped >= max { min } else { wrapped })
        }
        Infinity::Pingpong => {
            let offset = (x - min).rem_euclid(2.0 * range);
            if offset <= range {
                WrappedX::plain(min + offset)
            } else {
                WrappedX {
                    x: max - (offset - range),
                    flip_y: true,
                }
            }
        }
    }
}
