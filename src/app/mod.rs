//! Application-Layer: Controller, Registry, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod notifier;
/// Zustand des Controllers (Selektion und laufende Interaktion)
pub mod state;
pub mod use_cases;
pub mod volume_registry;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::SelectionController;
pub use events::{
    InputEvent, Key, KeyInput, KeyOutcome, Modifiers, PointerButton, PointerInput,
    SelectionCause, SelectionChanged, SelectionCommand, SelectionSnapshot,
};
pub use hit_test::{HitTester, ProxyHitTester};
pub use notifier::{SelectionNotifier, SubscriptionId};
pub use state::{PendingInteraction, SelectionState};
pub use volume_registry::VolumeRegistry;
