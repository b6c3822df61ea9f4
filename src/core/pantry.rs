use crate::core::classifier;
use crate::core::form::FormInput;
use crate::core::state::{Action, Effect, Outcome, PantryState};
use crate::domain::model::{EntryId, PantryEntry};
use crate::domain::ports::RemovalScheduler;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

pub const DEFAULT_REMOVAL_DELAY: Duration = Duration::from_millis(300);

/// Spawns one sleeping task per removal on the current tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler;

impl RemovalScheduler for TokioScheduler {
    fn schedule(&self, id: EntryId, delay: Duration, on_fire: Box<dyn FnOnce(EntryId) + Send>) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire(id);
        });
    }
}

struct PantryInner {
    state: Mutex<PantryState>,
    scheduler: Box<dyn RemovalScheduler>,
    removal_delay: Duration,
    default_quantity: f64,
}

/// Owns the pantry list for the lifetime of the process and is the only
/// place transitions are applied.
#[derive(Clone)]
pub struct Pantry {
    inner: Arc<PantryInner>,
}

impl std::fmt::Debug for Pantry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pantry")
            .field("entries", &self.snapshot().len())
            .field("removal_delay", &self.inner.removal_delay)
            .finish()
    }
}

impl Pantry {
    pub fn new(removal_delay: Duration, default_quantity: f64) -> Self {
        Self::with_scheduler(TokioScheduler, removal_delay, default_quantity)
    }

    pub fn with_scheduler<S: RemovalScheduler + 'static>(
        scheduler: S,
        removal_delay: Duration,
        default_quantity: f64,
    ) -> Self {
        Self {
            inner: Arc::new(PantryInner {
                state: Mutex::new(PantryState::new()),
                scheduler: Box::new(scheduler),
                removal_delay,
                default_quantity,
            }),
        }
    }

    pub fn removal_delay(&self) -> Duration {
        self.inner.removal_delay
    }

    pub fn snapshot(&self) -> PantryState {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, id: EntryId) -> Option<PantryEntry> {
        self.snapshot().get(id).cloned()
    }

    /// Applies one action, swaps in the new list, then runs its effects.
    pub fn dispatch(&self, action: Action) -> Outcome {
        tracing::debug!("Dispatching {:?}", action);

        let transition = {
            let mut state = self
                .inner
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let transition = state.reduce(action);
            *state = transition.state.clone();
            transition
        };

        // effects run outside the lock: a zero delay may fire immediately
        for effect in transition.effects {
            match effect {
                Effect::ScheduleRemoval(id) => self.schedule_removal(id),
            }
        }

        if transition.outcome == Outcome::Unchanged {
            tracing::debug!("Action left the pantry unchanged");
        }
        transition.outcome
    }

    fn schedule_removal(&self, id: EntryId) {
        let pantry = self.clone();
        tracing::debug!("Removing {} in {:?}", id, self.inner.removal_delay);
        self.inner.scheduler.schedule(
            id,
            self.inner.removal_delay,
            Box::new(move |id| {
                pantry.dispatch(Action::FinalizeRemoval(id));
            }),
        );
    }

    /// Form submission. Returns the new entry, or `None` for a blank name.
    pub fn submit(&self, input: FormInput) -> Option<PantryEntry> {
        let Some(new_entry) = input.into_new_entry(self.inner.default_quantity) else {
            tracing::warn!("Ignoring submission with an empty name");
            return None;
        };

        let classification = classifier::classify(&new_entry.name);
        let entry = PantryEntry::create(new_entry, classification);
        tracing::info!(
            "Adding {} x{} {} (shelf life: {:?} days)",
            entry.name,
            entry.display_quantity(),
            entry.emoji,
            entry.expiry_estimate
        );

        match self.dispatch(Action::Add(entry.clone())) {
            Outcome::Added(_) => Some(entry),
            _ => None,
        }
    }

    pub fn adjust(&self, id: EntryId, delta: f64) -> Outcome {
        let outcome = self.dispatch(Action::Adjust { id, delta });
        if self.get(id).is_none() && outcome == Outcome::Unchanged {
            tracing::warn!("Adjust for unknown entry {}", id);
        }
        outcome
    }

    pub fn start_removal(&self, id: EntryId) -> Outcome {
        self.dispatch(Action::StartRemoval(id))
    }
}
