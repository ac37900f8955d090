//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen sowie die Schnittstellen zu Szene und Overlay,
//! damit Registry und Controller den Renderer nicht direkt kennen.

pub mod options;
mod overlay;
mod proxy_scene;

pub use options::{BoxSelectPolicy, SelectionOptions};
pub use overlay::{NoOverlay, ScreenRect, SelectionOverlay};
pub use proxy_scene::{DetachedScene, ProxyScene, ProxyStyle, StyleSet};
