//! Eingaben an den Controller und Ereignisse an den Host.
//!
//! Eingaben sind rohe Zeiger-/Tastatur-Ereignisse in Canvas-Pixeln ohne
//! Mutationslogik. Ereignisse melden dem Host Wertänderungen, Selektion und
//! Pointer-Capture.

use crate::core::{CurveData, KeyframeId};
use glam::DVec2;

/// Zustand der Modifier-Tasten zum Zeitpunkt der Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd (macOS) bzw. Super-Taste
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Self::NONE
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Self::NONE
    };
    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ..Self::NONE
    };
    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Self::NONE
    };

    /// Ctrl oder Cmd (plattformneutraler Befehls-Modifier).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Vom Controller ausgewertete Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Zeichentaste (Buchstaben, Ziffern)
    Character(char),
}

/// Roh-Eingabe an den Controller. Positionen in Canvas-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorInput {
    PointerDown { pos: DVec2, modifiers: Modifiers },
    PointerMove { pos: DVec2, modifiers: Modifiers },
    PointerUp { pos: DVec2, modifiers: Modifiers },
    DoubleClick { pos: DVec2, modifiers: Modifiers },
    /// Zeiger hat die Zeichenfläche verlassen
    PointerLeave,
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Ereignis an den Host.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Kontinuierliche Änderung (jeder Drag-Schritt)
    CurveChanged(CurveData),
    /// Abgeschlossene, diskrete Änderung (Drag-Ende, Einfügen, Löschen, ...)
    CurveCommitted(CurveData),
    /// Neue Selektion in Selektionsreihenfolge
    SelectionChanged(Vec<KeyframeId>),
    /// Zeiger an die Zeichenfläche binden (Drag außerhalb weiterverfolgen)
    PointerCaptured,
    /// Zeiger-Bindung freigeben
    PointerReleased,
}

/// Host-Callbacks. Alle Methoden haben No-op-Defaults.
pub trait EditorCallbacks {
    fn on_change(&mut self, _curve: &CurveData) {}
    fn on_commit(&mut self, _curve: &CurveData) {}
    fn on_selection_change(&mut self, _ids: &[KeyframeId]) {}
    /// `true` = Capture anfordern, `false` = freigeben
    fn on_pointer_capture(&mut self, _captured: bool) {}
}

/// Leitet Ereignisse in Reihenfolge an die Host-Callbacks weiter.
pub fn dispatch_events<C: EditorCallbacks + ?Sized>(events: &[EditorEvent], callbacks: &mut C) {
    for event in events {
        match event {
            EditorEvent::CurveChanged(curve) => callbacks.on_change(curve),
            EditorEvent::CurveCommitted(curve) => callbacks.on_commit(curve),
            EditorEvent::SelectionChanged(ids) => callbacks.on_selection_change(ids),
            EditorEvent::PointerCaptured => callbacks.on_pointer_capture(true),
            EditorEvent::PointerReleased => callbacks.on_pointer_capture(false),
        }
    }
}
