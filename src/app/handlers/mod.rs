//! Feature-Handler für die Command-Verarbeitung.
//!
//! Der Controller dispatcht jeden `SelectionCommand` an `selection::execute`.

pub mod selection;
