//! Zustellung von "Selektion geändert"-Events an Abonnenten.
//!
//! Events werden synchron eingereiht und von genau einer Drain-Schleife in
//! Reihenfolge zugestellt. Async-Abonnenten werden dabei abgewartet, bevor
//! das nächste Event zugestellt wird. Ein während der Zustellung ausgelöstes
//! Event wird nur eingereiht und nach dem aktuellen zugestellt.

use super::events::SelectionChanged;
use indexmap::IndexMap;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Handle eines Abonnements (für `unsubscribe`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type LocalFuture = Pin<Box<dyn Future<Output = ()>>>;

#[derive(Clone)]
enum Subscriber {
    Sync(Rc<dyn Fn(&SelectionChanged)>),
    Async(Rc<dyn Fn(SelectionChanged) -> LocalFuture>),
}

/// Single-threaded Event-Verteiler mit Enqueue-then-Drain.
#[derive(Default)]
pub struct SelectionNotifier {
    subscribers: RefCell<IndexMap<SubscriptionId, Subscriber>>,
    pending: RefCell<VecDeque<SelectionChanged>>,
    draining: Cell<bool>,
    next_id: Cell<u64>,
}

/// Setzt das Drain-Flag auch dann zurück, wenn der Drain-Future verworfen wird.
struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl SelectionNotifier {
    /// Erstellt einen Notifier ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.subscribers.borrow_mut().insert(id, subscriber);
        id
    }

    /// Registriert einen synchronen Abonnenten.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&SelectionChanged) + 'static,
    {
        self.insert(Subscriber::Sync(Rc::new(handler)))
    }

    /// Registriert einen asynchronen Abonnenten; die Zustellung wartet auf dessen Future.
    pub fn subscribe_async<F, Fut>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(SelectionChanged) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.insert(Subscriber::Async(Rc::new(move |event| {
            Box::pin(handler(event)) as LocalFuture
        })))
    }

    /// Entfernt ein Abonnement. `false`, wenn es nicht (mehr) existiert.
    ///
    /// Ein bereits laufender Zustellzyklus erreicht den Abonnenten noch.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow_mut().shift_remove(&id).is_some()
    }

    /// Anzahl aktiver Abonnements.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Entfernt alle Abonnements und verwirft noch nicht zugestellte Events.
    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
        self.pending.borrow_mut().clear();
    }

    /// Reiht ein Event ein und stellt die Warteschlange zu.
    ///
    /// Läuft bereits eine Zustellung, kehrt der Aufruf sofort zurück; die
    /// laufende Schleife liefert das Event nach den vorherigen aus.
    pub async fn notify(&self, event: SelectionChanged) {
        self.pending.borrow_mut().push_back(event);
        if self.draining.get() {
            return;
        }
        self.draining.set(true);
        let _guard = DrainGuard(&self.draining);

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            // Klonen: Abonnenten dürfen während der Zustellung (ab)bestellen
            let subscribers: Vec<Subscriber> =
                self.subscribers.borrow().values().cloned().collect();
            for subscriber in subscribers {
                match subscriber {
                    Subscriber::Sync(handler) => handler(&event),
                    Subscriber::Async(handler) => handler(event.clone()).await,
                }
            }
        }
    }
}
