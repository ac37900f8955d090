//! Zustand des Selektions-Controllers.

mod interaction;
mod selection;

pub use interaction::{PendingInteraction, ReleasedInteraction};
pub use selection::SelectionState;
