//! Keyframe: Kontrollpunkt der Kurve mit zwei Tangenten-Handles.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stabile Identität eines Keyframes.
pub type KeyframeId = u64;

/// Platzhalter für noch nicht vergebene IDs (wird beim Normalisieren ersetzt).
pub const UNASSIGNED_ID: KeyframeId = 0;

/// Regel, wie die beiden Handles eines Keyframes zueinander stehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TangentMode {
    /// Handles unabhängig
    Free,
    /// Handles kollinear, Längen unabhängig
    Aligned,
    /// Handles exakt gespiegelt
    Mirrored,
    /// Handles werden aus den Nachbarn berechnet
    #[default]
    Auto,
    /// Gerade Verbindung, Handles sind null
    Linear,
    /// Wert bleibt bis zum nächsten Keyframe konstant
    Step,
}

impl TangentMode {
    /// Feste Reihenfolge für Doppelklick-Zyklus und Zifferntasten 1–6.
    pub const ORDER: [TangentMode; 6] = [
        TangentMode::Free,
        TangentMode::Aligned,
        TangentMode::Mirrored,
        TangentMode::Auto,
        TangentMode::Linear,
        TangentMode::Step,
    ];

    /// Nächster Modus im Zyklus (`step` springt zurück auf `free`).
    pub fn next(self) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Modus zur Zifferntaste `1`–`6`.
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        if (1..=Self::ORDER.len()).contains(&index) {
            Some(Self::ORDER[index - 1])
        } else {
            None
        }
    }
}

/// Welches Handle eines Keyframes gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Eingehendes Handle (steuert die ankommende Kurve)
    In,
    /// Ausgehendes Handle (steuert die abgehende Kurve)
    Out,
}

impl HandleSide {
    /// Das jeweils andere Handle.
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::In => HandleSide::Out,
            HandleSide::Out => HandleSide::In,
        }
    }
}

/// Kontrollpunkt der Kurve.
///
/// Handles sind Offsets relativ zu `(x, y)`, keine absoluten Positionen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Stabile ID; `0` = noch nicht vergeben
    #[serde(default)]
    pub id: KeyframeId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub handle_in: DVec2,
    #[serde(default)]
    pub handle_out: DVec2,
    #[serde(default)]
    pub tangent_mode: TangentMode,
}

impl Keyframe {
    /// Erstellt einen Keyframe ohne Handle-Offsets.
    pub fn new(id: KeyframeId, x: f64, y: f64, tangent_mode: TangentMode) -> Self {
        Self {
            id,
            x,
            y,
            handle_in: DVec2::ZERO,
            handle_out: DVec2::ZERO,
            tangent_mode,
        }
    }

    /// Gibt eine Kopie mit den übergebenen Handles zurück.
    pub fn with_handles(self, handle_in: DVec2, handle_out: DVec2) -> Self {
        Self {
            handle_in,
            handle_out,
            ..self
        }
    }

    /// Gibt eine Kopie an neuer Position zurück (Handles bleiben relativ erhalten).
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Gibt eine Kopie mit geändertem Handle zurück.
    pub fn with_handle(self, side: HandleSide, offset: DVec2) -> Self {
        match side {
            HandleSide::In => Self {
                handle_in: offset,
                ..self
            },
            HandleSide::Out => Self {
                handle_out: offset,
                ..self
            },
        }
    }

    /// Position im Domänenraum.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Offset des angegebenen Handles.
    pub fn handle(&self, side: HandleSide) -> DVec2 {
        match side {
            HandleSide::In => self.handle_in,
            HandleSide::Out => self.handle_out,
        }
    }

    /// Absolute Position der Handle-Spitze im Domänenraum.
    pub fn handle_position(&self, side: HandleSide) -> DVec2 {
        self.position() + self.handle(side)
    }
}
