pub mod classifier;
pub mod form;
pub mod pantry;
pub mod state;

pub use crate::domain::model::{EntryId, EntryPhase, EntryView, NewEntry, PantryEntry};
pub use crate::domain::ports::{ConfigProvider, RemovalScheduler};
pub use crate::utils::error::Result;
