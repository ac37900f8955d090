//! Eingabe-Events, Selektions-Commands und Benachrichtigungen für den Input/Command-Datenfluss.

mod command;
mod input;
mod notification;

pub use command::SelectionCommand;
pub use input::{InputEvent, Key, KeyInput, KeyOutcome, Modifiers, PointerButton, PointerInput};
pub use notification::{SelectionCause, SelectionChanged, SelectionSnapshot};
