//! Gemeinsame Fixtures für die Controller-Flow-Tests.
//!
//! Szene (orthografisch, Halbhöhe 10, Surface 800x600, 30 px pro Welt-Einheit):
//! `e1` bei (0,0) liegt auf dem Screen bei x 370..430, y 270..330,
//! `e2` bei (10,0) bei x 670..730, y 270..330.

mod click_and_box;
mod lifecycle;

use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use tokio::sync::oneshot;
use viewer_selection::{
    BoundingDef, EntityId, EntityRef, HitTester, Modifiers, OrthographicCamera, PointerInput,
    ProxyHitTester, ScreenRect, SelectionChanged, SelectionController, SelectionOptions,
    SelectionOverlay, VolumeRegistry, VolumeStyle,
};

pub type SharedCamera = Rc<OrthographicCamera>;
pub type OrthoController = SelectionController<ProxyHitTester<SharedCamera>, SharedCamera>;

pub const E1_CENTER: (f32, f32) = (400.0, 300.0);
pub const E2_CENTER: (f32, f32) = (700.0, 300.0);
pub const EMPTY_SPOT: (f32, f32) = (100.0, 100.0);

pub fn camera() -> SharedCamera {
    Rc::new(OrthographicCamera::new(10.0, Vec2::new(800.0, 600.0)))
}

pub fn square() -> BoundingDef {
    BoundingDef::centered(2.0, 2.0)
}

pub fn registry_with(entities: &[(&str, f32, f32)]) -> Rc<RefCell<VolumeRegistry>> {
    let registry = Rc::new(RefCell::new(VolumeRegistry::headless()));
    for &(id, x, y) in entities {
        registry
            .borrow_mut()
            .register(&EntityRef::new(id, Vec3::new(x, y, 0.0)), Some(&square()))
            .expect("Registrierung sollte gelingen");
    }
    registry
}

/// Controller mit Proxy-Hit-Tester und Ereignis-Mitschnitt.
pub struct Fixture {
    pub registry: Rc<RefCell<VolumeRegistry>>,
    pub controller: OrthoController,
    pub events: Rc<RefCell<Vec<SelectionChanged>>>,
}

impl Fixture {
    pub fn new(entities: &[(&str, f32, f32)]) -> Self {
        Self::with_options(entities, SelectionOptions::default())
    }

    pub fn with_options(entities: &[(&str, f32, f32)], options: SelectionOptions) -> Self {
        let registry = registry_with(entities);
        let camera = camera();
        let hit_tester = ProxyHitTester::new(Rc::clone(&registry), Rc::clone(&camera));
        let controller =
            SelectionController::new(Rc::clone(&registry), hit_tester, camera, options);
        let events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = Rc::clone(&events);
            controller.subscribe(move |event| events.borrow_mut().push(event.clone()));
        }
        Self {
            registry,
            controller,
            events,
        }
    }

    /// Standard-Szene mit `e1` und `e2`.
    pub fn e1_e2() -> Self {
        Self::new(&[("e1", 0.0, 0.0), ("e2", 10.0, 0.0)])
    }

    pub fn selected(&self) -> Vec<String> {
        self.controller
            .selection()
            .sorted_ids()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    pub fn style(&self, id: &str) -> VolumeStyle {
        self.registry
            .borrow()
            .get(&EntityId::from(id))
            .expect("Entity registriert")
            .style
    }

    pub fn event_count(&self) -> usize {
        self.events.borrow().len()
    }

    pub async fn click(&self, at: (f32, f32), modifiers: Modifiers) {
        click(&self.controller, at, modifiers).await;
    }

    pub async fn drag(&self, from: (f32, f32), to: (f32, f32), modifiers: Modifiers) {
        let down = PointerInput::at(from.0, from.1).with_modifiers(modifiers);
        let up = PointerInput::at(to.0, to.1).with_modifiers(modifiers);
        self.controller.pointer_down(&down);
        self.controller.pointer_move(&up).await;
        self.controller.pointer_up(&up).await;
    }

    pub async fn hover(&self, at: (f32, f32)) {
        self.controller
            .pointer_move(&PointerInput::at(at.0, at.1))
            .await;
    }
}

pub async fn click<H: HitTester>(
    controller: &SelectionController<H, SharedCamera>,
    at: (f32, f32),
    modifiers: Modifiers,
) {
    let input = PointerInput::at(at.0, at.1).with_modifiers(modifiers);
    controller.pointer_down(&input);
    controller.pointer_up(&input).await;
}

/// Vom Overlay empfangene Aufrufe.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayOp {
    Show(ScreenRect),
    Hide,
}

#[derive(Default, Clone)]
pub struct RecordingOverlay {
    pub ops: Rc<RefCell<Vec<OverlayOp>>>,
}

impl SelectionOverlay for RecordingOverlay {
    fn show_rect(&mut self, rect: ScreenRect) {
        self.ops.borrow_mut().push(OverlayOp::Show(rect));
    }

    fn hide(&mut self) {
        self.ops.borrow_mut().push(OverlayOp::Hide);
    }
}

/// Hit-Tester, dessen Ergebnisse der Test per `oneshot` freigibt.
///
/// Jeder Hit-Test entnimmt das nächste Gate in Reihenfolge; ohne Gate: kein Treffer.
#[derive(Default, Clone)]
pub struct GatedHitTester {
    gates: Rc<RefCell<VecDeque<oneshot::Receiver<Option<EntityId>>>>>,
}

impl GatedHitTester {
    /// Reserviert das Ergebnis des nächsten Hit-Tests.
    pub fn gate(&self) -> oneshot::Sender<Option<EntityId>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }
}

impl HitTester for GatedHitTester {
    fn hit_test(&self, _ndc: Vec2) -> impl Future<Output = Option<EntityId>> {
        let gate = self.gates.borrow_mut().pop_front();
        async move {
            match gate {
                Some(gate) => gate.await.ok().flatten(),
                None => None,
            }
        }
    }
}

pub fn gated_fixture() -> (
    SelectionController<GatedHitTester, SharedCamera>,
    GatedHitTester,
    Rc<RefCell<Vec<SelectionChanged>>>,
) {
    let registry = registry_with(&[("e1", 0.0, 0.0), ("e2", 10.0, 0.0)]);
    let tester = GatedHitTester::default();
    let controller = SelectionController::new(
        registry,
        tester.clone(),
        camera(),
        SelectionOptions::default(),
    );
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        controller.subscribe(move |event| events.borrow_mut().push(event.clone()));
    }
    (controller, tester, events)
}

/// Pollt einen Future genau einmal mit einem No-op-Waker.
pub fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    future.poll(&mut Context::from_waker(Waker::noop()))
}
