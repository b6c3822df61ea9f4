//! Pantry list state and its pure transitions.
//!
//! [`PantryState::reduce`] never mutates the current state: it returns a new
//! list together with the side effects the caller has to run. Entries follow
//! `Active -> Removing -> deleted`, with no way back to `Active`.

use crate::domain::model::{EntryId, EntryPhase, PantryEntry};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add(PantryEntry),
    Adjust { id: EntryId, delta: f64 },
    StartRemoval(EntryId),
    FinalizeRemoval(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScheduleRemoval(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(EntryId),
    Updated(EntryId),
    RemovalStarted(EntryId),
    Removed(EntryId),
    /// Unknown id, an entry already being removed, a non-finite delta or
    /// result, or finalizing an entry that was never marked for removal.
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: PantryState,
    pub effects: Vec<Effect>,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(state: &PantryState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            outcome: Outcome::Unchanged,
        }
    }
}

/// Ordered list of entries. Cloning is cheap; every transition replaces
/// the whole list.
#[derive(Debug, Clone, Default)]
pub struct PantryState {
    entries: Arc<Vec<PantryEntry>>,
}

impl PantryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PantryEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&PantryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reduce(&self, action: Action) -> Transition {
        match action {
            Action::Add(entry) => self.add(entry),
            Action::Adjust { id, delta } => self.adjust(id, delta),
            Action::StartRemoval(id) => self.start_removal(id),
            Action::FinalizeRemoval(id) => self.finalize_removal(id),
        }
    }

    fn with_entries(entries: Vec<PantryEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    fn add(&self, entry: PantryEntry) -> Transition {
        // 重複的 id 不可能來自 EntryId::new，但仍然保持唯一性
        if self.get(entry.id).is_some() {
            return Transition::unchanged(self);
        }

        let id = entry.id;
        let mut entries = self.entries.as_ref().clone();
        entries.push(entry);

        Transition {
            state: Self::with_entries(entries),
            effects: Vec::new(),
            outcome: Outcome::Added(id),
        }
    }

    fn adjust(&self, id: EntryId, delta: f64) -> Transition {
        if !delta.is_finite() {
            return Transition::unchanged(self);
        }

        let Some(current) = self.get(id) else {
            return Transition::unchanged(self);
        };
        if current.phase == EntryPhase::Removing {
            return Transition::unchanged(self);
        }

        let quantity = current.quantity + delta;
        if quantity <= 0.0 {
            // never store a zero or negative quantity
            return self.start_removal(id);
        }
        if !quantity.is_finite() {
            // overflowed past f64::MAX
            return Transition::unchanged(self);
        }

        let entries = self
            .entries
            .iter()
            .map(|e| {
                if e.id == id {
                    PantryEntry {
                        quantity,
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect();

        Transition {
            state: Self::with_entries(entries),
            effects: Vec::new(),
            outcome: Outcome::Updated(id),
        }
    }

    fn start_removal(&self, id: EntryId) -> Transition {
        match self.get(id) {
            Some(entry) if entry.phase == EntryPhase::Active => {}
            _ => return Transition::unchanged(self),
        }

        let entries = self
            .entries
            .iter()
            .map(|e| {
                if e.id == id {
                    PantryEntry {
                        phase: EntryPhase::Removing,
                        ..e.clone()
                    }
                } else {
                    e.clone()
                }
            })
            .collect();

        Transition {
            state: Self::with_entries(entries),
            effects: vec![Effect::ScheduleRemoval(id)],
            outcome: Outcome::RemovalStarted(id),
        }
    }

    fn finalize_removal(&self, id: EntryId) -> Transition {
        match self.get(id) {
            Some(entry) if entry.phase == EntryPhase::Removing => {}
            _ => return Transition::unchanged(self),
        }

        let entries = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();

        Transition {
            state: Self::with_entries(entries),
            effects: Vec::new(),
            outcome: Outcome::Removed(id),
        }
    }
}
