use crate::core::{CurveData, KeyframeId};
use indexmap::IndexSet;

/// Auswahlbezogener Zustand: selektierte Keyframe-IDs in Selektionsreihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_ids: IndexSet<KeyframeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_ids: IndexSet::new(),
        }
    }

    pub fn contains(&self, id: KeyframeId) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// IDs in Selektionsreihenfolge.
    pub fn ids(&self) -> Vec<KeyframeId> {
        self.selected_ids.iter().copied().collect()
    }

    /// Ersetzt die Selektion durch genau eine ID.
    pub fn replace(&mut self, id: KeyframeId) {
        self.selected_ids.clear();
        self.selected_ids.insert(id);
    }

    /// Schaltet eine ID um.
    pub fn toggle(&mut self, id: KeyframeId) {
        if !self.selected_ids.shift_remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    /// Fügt eine ID hinzu, falls noch nicht selektiert.
    pub fn extend(&mut self, id: KeyframeId) {
        self.selected_ids.insert(id);
    }

    pub fn clear(&mut self) {
        self.selected_ids.clear();
    }

    /// Entfernt IDs, die in der Kurve nicht mehr existieren.
    pub fn retain_existing(&mut self, curve: &CurveData) {
        self.selected_ids
            .retain(|id| curve.keyframes.iter().any(|kf| kf.id == *id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Keyframe, TangentMode};

    #[test]
    fn toggle_keeps_remaining_order() {
        let mut selection = SelectionState::new();
        selection.extend(3);
        selection.extend(1);
        selection.extend(2);
        selection.toggle(1);
        assert_eq!(selection.ids(), vec![3, 2]);
        selection.toggle(1);
        assert_eq!(selection.ids(), vec![3, 2, 1]);
    }

    #[test]
    fn retain_existing_drops_stale_ids() {
        let curve = CurveData::new(
            vec![
                Keyframe::new(4, 0.0, 0.0, TangentMode::Auto),
                Keyframe::new(9, 1.0, 1.0, TangentMode::Auto),
            ],
            [0.0, 1.0],
            [0.0, 1.0],
        );
        let mut selection = SelectionState::new();
        selection.extend(9);
        selection.extend(5);
        selection.retain_existing(&curve);
        assert_eq!(selection.ids(), vec![9]);
    }
}
