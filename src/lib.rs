//! Interaktive Selektion für CAD-Viewer.
//! Registry der Bounding-Volumes und Selection-Controller als Library, plus Replay-Treiber.

pub mod app;
pub mod core;
pub mod error;
pub mod replay;
pub mod shared;

pub use app::{
    HitTester, InputEvent, Key, KeyInput, KeyOutcome, Modifiers, PointerButton, PointerInput,
    ProxyHitTester, SelectionCause, SelectionChanged, SelectionCommand, SelectionController,
    SelectionSnapshot, SubscriptionId, VolumeRegistry,
};
pub use core::{
    Aabb, BoundingDef, BoundingVolume, EntityId, EntityRef, OrthographicCamera,
    PerspectiveCamera, ProjectionKind, StyleFlags, ViewportCamera, VolumeStyle,
};
pub use error::SelectionError;
pub use shared::{
    BoxSelectPolicy, DetachedScene, NoOverlay, ProxyScene, ProxyStyle, ScreenRect,
    SelectionOptions, SelectionOverlay, StyleSet,
};
