//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Reine Funktionen: sie lesen Zustand und liefern Commands, mutieren aber nichts.

pub mod selection;
