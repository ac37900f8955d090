//! Selection-Controller für zentrale Input-Verarbeitung.
//!
//! Übersetzt Pointer- und Tastatur-Events in `SelectionCommand`s, führt sie
//! über `handlers::selection` aus und benachrichtigt Abonnenten.
//!
//! Alle Methoden nehmen `&self`: der Zustand liegt in `RefCell`s, damit neue
//! Events verarbeitet werden können, während ein Hit-Test aussteht. Über
//! einen `.await` hinweg wird nie ein Borrow gehalten; nach jedem Hit-Test
//! wird der Zustand frisch gelesen und veraltete Ergebnisse werden verworfen.

use super::command_log::CommandLog;
use super::events::{
    InputEvent, KeyInput, KeyOutcome, PointerButton, PointerInput, SelectionCause,
    SelectionChanged, SelectionCommand, SelectionSnapshot,
};
use super::handlers;
use super::hit_test::HitTester;
use super::notifier::{SelectionNotifier, SubscriptionId};
use super::state::{PendingInteraction, SelectionState};
use super::use_cases::selection as use_cases;
use super::VolumeRegistry;
use crate::core::{EntityId, ProjectionKind, ViewportCamera, screen_to_ndc};
use crate::error::SelectionError;
use crate::shared::{NoOverlay, ScreenRect, SelectionOptions, SelectionOverlay};
use glam::Vec2;
use std::cell::{Cell, Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Besitzt die kanonische Selektion eines Viewers.
pub struct SelectionController<H, C> {
    registry: Rc<RefCell<VolumeRegistry>>,
    hit_tester: H,
    camera: C,
    options: SelectionOptions,
    overlay: RefCell<Box<dyn SelectionOverlay>>,
    selection: RefCell<SelectionState>,
    interaction: RefCell<PendingInteraction>,
    command_log: RefCell<CommandLog>,
    notifier: SelectionNotifier,
    projection_advisory_issued: Cell<bool>,
    disposed: Cell<bool>,
}

impl<H: HitTester, C: ViewportCamera> SelectionController<H, C> {
    /// Erstellt einen Controller über `registry` ohne Rubber-Band-Darstellung.
    pub fn new(
        registry: Rc<RefCell<VolumeRegistry>>,
        hit_tester: H,
        camera: C,
        options: SelectionOptions,
    ) -> Self {
        Self {
            registry,
            hit_tester,
            camera,
            options,
            overlay: RefCell::new(Box::new(NoOverlay)),
            selection: RefCell::new(SelectionState::new()),
            interaction: RefCell::new(PendingInteraction::default()),
            command_log: RefCell::new(CommandLog::new()),
            notifier: SelectionNotifier::new(),
            projection_advisory_issued: Cell::new(false),
            disposed: Cell::new(false),
        }
    }

    /// Setzt das Overlay für das Auswahlrechteck.
    pub fn with_overlay(self, overlay: impl SelectionOverlay + 'static) -> Self {
        *self.overlay.borrow_mut() = Box::new(overlay);
        self
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    /// Geteilte Registry.
    pub fn registry(&self) -> &Rc<RefCell<VolumeRegistry>> {
        &self.registry
    }

    // ── Pointer / Tastatur ──────────────────────────────────────────

    /// Verarbeitet ein beliebiges Input-Event.
    pub async fn handle_input(&self, event: &InputEvent) -> KeyOutcome {
        match event {
            InputEvent::PointerDown(input) => self.pointer_down(input),
            InputEvent::PointerMove(input) => self.pointer_move(input).await,
            InputEvent::PointerUp(input) => self.pointer_up(input).await,
            InputEvent::KeyDown(input) => return self.key_down(input).await,
        }
        KeyOutcome::default()
    }

    /// Press: merkt sich den Ursprung. Nicht-primäre Tasten und Events
    /// außerhalb der Fläche werden ignoriert.
    pub fn pointer_down(&self, input: &PointerInput) {
        if self.disposed.get() {
            return;
        }
        if input.button != PointerButton::Primary || !input.on_surface {
            log::trace!("Press ignoriert: {:?}", input.button);
            return;
        }
        self.interaction.borrow_mut().begin_press(input.position);
    }

    /// Bewegung: aktualisiert während eines Press das Rubber-Band, sonst den Hover.
    pub async fn pointer_move(&self, input: &PointerInput) {
        if self.disposed.get() {
            return;
        }

        let drag = {
            let mut interaction = self.interaction.borrow_mut();
            if interaction.pressed {
                let dragging =
                    interaction.track_move(input.position, self.options.drag_threshold_px);
                Some(dragging.then(|| {
                    ScreenRect::from_corners(interaction.press_origin, input.position)
                }))
            } else {
                None
            }
        };

        match drag {
            Some(Some(rect)) => self.overlay.borrow_mut().show_rect(rect),
            Some(None) => {}
            None if input.on_surface => self.update_hover(input.position).await,
            None => self.clear_hover(),
        }
    }

    /// Release: löst Klick oder Box-Selektion auf und benachrichtigt.
    pub async fn pointer_up(&self, input: &PointerInput) {
        if self.disposed.get() || input.button != PointerButton::Primary {
            return;
        }
        let released = self.interaction.borrow_mut().release();
        let Some(released) = released else {
            return;
        };
        let additive = input.modifiers.command();

        if released.dragged {
            self.overlay.borrow_mut().hide();
            self.resolve_box_selection(released.press_origin, input.position, additive);
            self.emit(SelectionCause::BoxSelect).await;
            return;
        }

        let hit = self.hit_test(input.position).await;
        if self.disposed.get()
            || self.interaction.borrow().press_generation != released.press_generation
        {
            log::debug!("Veraltetes Klick-Ergebnis verworfen: {:?}", hit);
            return;
        }

        self.sync_with_registry();
        let hit = use_cases::pickable_hit(&self.registry.borrow(), hit);
        let command = use_cases::resolve_click(&self.selection.borrow(), hit.as_ref(), additive);
        if let Some(command) = command {
            self.handle_command(command);
        }
        self.emit(SelectionCause::Click).await;
    }

    /// Tastatur: Escape hebt die Selektion auf, Cmd/Ctrl+A selektiert alles.
    pub async fn key_down(&self, input: &KeyInput) -> KeyOutcome {
        if self.disposed.get() {
            return KeyOutcome::default();
        }

        if input.is_escape() {
            self.handle_command(SelectionCommand::ClearSelection);
            // Meldet auch bei bereits leerer Selektion
            self.emit(SelectionCause::ClearRequested).await;
            return KeyOutcome::default();
        }

        if input.is_select_all() {
            self.handle_command(SelectionCommand::SelectAll);
            self.emit(SelectionCause::SelectAll).await;
            return KeyOutcome {
                prevent_default: true,
            };
        }

        KeyOutcome::default()
    }

    // ── Selektions-Operationen ──────────────────────────────────────

    /// Selektiert eine Entity. `false` bei leerer, unbekannter oder bereits selektierter ID.
    pub fn select(&self, id: &EntityId) -> bool {
        self.run(SelectionCommand::Select { id: id.clone() })
    }

    /// Entfernt eine Entity aus der Selektion.
    pub fn deselect(&self, id: &EntityId) -> bool {
        self.run(SelectionCommand::Deselect { id: id.clone() })
    }

    /// Hebt die gesamte Selektion auf.
    pub fn deselect_all(&self) -> bool {
        self.run(SelectionCommand::ClearSelection)
    }

    /// Selektiert alle registrierten Entities.
    pub fn select_all(&self) -> bool {
        self.run(SelectionCommand::SelectAll)
    }

    /// Prüft, ob eine Entity selektiert ist.
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.sync_with_registry();
        self.selection.borrow().is_selected(id)
    }

    /// Entity unter dem Mauszeiger.
    pub fn hovered(&self) -> Option<EntityId> {
        self.sync_with_registry();
        self.selection.borrow().hovered_id.clone()
    }

    /// Unveränderliche Kopie der aktuellen Selektion.
    pub fn selection(&self) -> SelectionSnapshot {
        self.sync_with_registry();
        self.selection.borrow().snapshot()
    }

    /// Entfernt eine Entity: abwählen, Hover lösen, Proxy freigeben.
    pub fn remove_entity(&self, id: &EntityId) -> bool {
        if self.disposed.get() {
            return false;
        }
        self.deselect(id);
        if self.selection.borrow().is_hovered(id) {
            self.run(SelectionCommand::SetHover { id: None });
        }
        self.registry.borrow_mut().remove(id).is_some()
    }

    // ── Benachrichtigungen ──────────────────────────────────────────

    /// Abonniert "Selektion geändert".
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&SelectionChanged) + 'static,
    {
        self.notifier.subscribe(handler)
    }

    /// Abonniert "Selektion geändert" mit asynchroner Verarbeitung.
    pub fn subscribe_async<F, Fut>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(SelectionChanged) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.notifier.subscribe_async(handler)
    }

    /// Beendet ein Abonnement.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Ausgeführte Commands (Diagnose).
    pub fn command_log(&self) -> Ref<'_, CommandLog> {
        self.command_log.borrow()
    }

    /// Gibt Selektion, Hover und Abonnenten frei. Weitere Aufrufe sind No-ops.
    ///
    /// Die Registry gehört dem Host und wird nicht mit freigegeben.
    pub fn dispose(&self) {
        if self.disposed.get() {
            return;
        }
        self.handle_command(SelectionCommand::ClearSelection);
        self.handle_command(SelectionCommand::SetHover { id: None });
        self.interaction.borrow_mut().release();
        self.overlay.borrow_mut().hide();
        self.notifier.clear();
        self.disposed.set(true);
        log::info!("Selection-Controller freigegeben");
    }

    /// Gibt `true` zurück nach `dispose()`.
    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    // ── Intern ──────────────────────────────────────────────────────

    fn run(&self, command: SelectionCommand) -> bool {
        if self.disposed.get() {
            return false;
        }
        self.handle_command(command)
    }

    /// Führt einen Command aus und protokolliert ihn.
    fn handle_command(&self, command: SelectionCommand) -> bool {
        let changed = {
            let mut state = self.selection.borrow_mut();
            let mut registry = self.registry.borrow_mut();
            handlers::selection::retain_registered(&mut state, &registry);
            handlers::selection::execute(&mut state, &mut registry, &command)
        };
        log::debug!("Command ausgeführt: {:?} (Änderung: {})", command, changed);
        self.command_log.borrow_mut().record(command, changed);
        changed
    }

    /// Gleicht Selektion und Hover mit der Registry ab, falls der Host
    /// Volumes direkt dort entfernt hat.
    ///
    /// Ist einer der Zustände gerade ausgeliehen, wird der Abgleich beim
    /// nächsten Aufruf nachgeholt.
    fn sync_with_registry(&self) {
        let (Ok(mut state), Ok(registry)) =
            (self.selection.try_borrow_mut(), self.registry.try_borrow())
        else {
            return;
        };
        handlers::selection::retain_registered(&mut state, &registry);
    }

    async fn hit_test(&self, screen_pos: Vec2) -> Option<EntityId> {
        let ndc = screen_to_ndc(screen_pos, self.camera.surface_size());
        self.hit_tester.hit_test(ndc).await
    }

    async fn update_hover(&self, screen_pos: Vec2) {
        let token = self.interaction.borrow_mut().next_hover_token();
        let hit = self.hit_test(screen_pos).await;

        let stale = {
            let interaction = self.interaction.borrow();
            self.disposed.get() || interaction.pressed || interaction.hover_token != token
        };
        if stale {
            log::debug!("Veraltetes Hover-Ergebnis verworfen: {:?}", hit);
            return;
        }

        self.sync_with_registry();
        let hit = use_cases::pickable_hit(&self.registry.borrow(), hit);
        let command = use_cases::resolve_hover(&self.selection.borrow(), hit);
        if let Some(command) = command {
            self.handle_command(command);
        }
    }

    /// Pointer hat die Fläche verlassen: Hover lösen, laufende Anfragen veralten.
    fn clear_hover(&self) {
        self.interaction.borrow_mut().next_hover_token();
        if self.selection.borrow().hovered_id.is_some() {
            self.handle_command(SelectionCommand::SetHover { id: None });
        }
    }

    fn resolve_box_selection(&self, corner_a: Vec2, corner_b: Vec2, additive: bool) {
        let exact = self.options.exact_perspective_selection;
        if self.camera.projection_kind() == ProjectionKind::Perspective
            && !exact
            && !self.projection_advisory_issued.replace(true)
        {
            log::warn!("{}", SelectionError::UnsupportedProjection);
        }

        let region = use_cases::selection_region(&self.camera, corner_a, corner_b, exact);
        let candidates = use_cases::collect_candidates(
            &self.registry.borrow(),
            &region,
            self.options.box_select_policy,
        );
        self.handle_command(use_cases::resolve_box(candidates, additive));
    }

    async fn emit(&self, cause: SelectionCause) {
        let event = SelectionChanged {
            selection: self.selection(),
            cause,
        };
        self.notifier.notify(event).await;
    }
}
