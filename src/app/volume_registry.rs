//! Registry aller Bounding-Volumes (ein Proxy pro Entity).
//!
//! Die Registry ist die Blatt-Komponente des Subsystems: sie kennt den
//! Controller nicht. Sie besitzt die ID→Volume-Zuordnung in stabiler
//! Einfügereihenfolge, die drei geteilten Style-Definitionen und meldet jede
//! sichtbare Änderung an die [`ProxyScene`] des Hosts.
//!
//! Adressen an unbekannte IDs sind stille No-ops: zwischen Entfernen und noch
//! laufendem Input sind solche Rennen erwartbar.

use crate::core::{BoundingDef, BoundingVolume, EntityId, EntityRef, StyleFlags};
use crate::error::SelectionError;
use crate::shared::{DetachedScene, ProxyScene, SelectionOptions, StyleSet};
use indexmap::IndexMap;

/// Registry der Bounding-Volumes.
pub struct VolumeRegistry {
    volumes: IndexMap<EntityId, BoundingVolume>,
    /// `None` nach `dispose()`
    styles: Option<StyleSet>,
    scene: Box<dyn ProxyScene>,
}

impl VolumeRegistry {
    /// Erstellt eine leere Registry, die Proxys in `scene` darstellt.
    pub fn new(scene: Box<dyn ProxyScene>, options: &SelectionOptions) -> Self {
        Self {
            volumes: IndexMap::new(),
            styles: Some(StyleSet::from_options(options)),
            scene,
        }
    }

    /// Registry ohne Darstellung mit Standard-Styles.
    pub fn headless() -> Self {
        Self::new(Box::new(DetachedScene), &SelectionOptions::default())
    }

    /// Registriert (oder aktualisiert) den Proxy einer Entity.
    ///
    /// Ein bereits registrierter Proxy behält Position in der Reihenfolge und Style;
    /// nur die Transformation wird neu berechnet.
    pub fn try_register(
        &mut self,
        entity: &EntityRef,
        bounds: Option<&BoundingDef>,
    ) -> Result<&BoundingVolume, SelectionError> {
        let Some(styles) = self.styles.as_ref() else {
            return Err(SelectionError::RegistryDisposed);
        };
        if entity.id.is_empty() {
            return Err(SelectionError::InvalidInput(
                "Entity ohne ID kann nicht registriert werden".into(),
            ));
        }
        let Some(bounds) = bounds else {
            return Err(SelectionError::InvalidInput(format!(
                "Entity '{}' hat keine Bounding-Definition",
                entity.id
            )));
        };
        if !(bounds.width.is_finite() && bounds.height.is_finite())
            || bounds.width < 0.0
            || bounds.height < 0.0
        {
            return Err(SelectionError::InvalidInput(format!(
                "Entity '{}' hat ungültige Bounds {}x{}",
                entity.id, bounds.width, bounds.height
            )));
        }

        let computed = BoundingVolume::from_entity(entity, bounds);
        let index = match self.volumes.get_index_of(&entity.id) {
            Some(index) => {
                let volume = &mut self.volumes[index];
                volume.update_transform(computed);
                self.scene.update_proxy(volume, styles.get(volume.style));
                index
            }
            None => {
                self.scene.add_proxy(&computed, styles.get(computed.style));
                self.volumes.insert_full(entity.id.clone(), computed).0
            }
        };

        Ok(&self.volumes[index])
    }

    /// Wie [`Self::try_register`], loggt Fehler aber und liefert dann `None`.
    pub fn register(
        &mut self,
        entity: &EntityRef,
        bounds: Option<&BoundingDef>,
    ) -> Option<&BoundingVolume> {
        match self.try_register(entity, bounds) {
            Ok(volume) => Some(volume),
            Err(e) => {
                log::warn!("Registrierung übersprungen: {}", e);
                None
            }
        }
    }

    /// Setzt den Style eines Proxys (idempotent).
    ///
    /// Selected → sichtbar, Hovered → sichtbar, sonst Default und ausgeblendet.
    pub fn set_style(&mut self, entity_id: &EntityId, flags: StyleFlags) {
        let Some(styles) = self.styles.as_ref() else {
            return;
        };
        let Some(volume) = self.volumes.get_mut(entity_id) else {
            log::trace!(
                "set_style ignoriert: {}",
                SelectionError::UnregisteredReference(entity_id.clone())
            );
            return;
        };

        let style = flags.resolve();
        let visible = flags.selected || flags.hovered;
        if volume.style == style && volume.visible == visible {
            return;
        }
        volume.style = style;
        volume.visible = visible;
        self.scene.update_proxy(volume, styles.get(style));
    }

    /// Nimmt einen Proxy aus Hit-Test und Box-Selektion heraus (oder wieder hinein).
    pub fn set_pickable(&mut self, entity_id: &EntityId, pickable: bool) {
        if let Some(volume) = self.volumes.get_mut(entity_id) {
            volume.pickable = pickable;
        }
    }

    /// Registriert und für Hit-Tests freigegeben.
    pub fn is_pickable(&self, entity_id: &EntityId) -> bool {
        self.volumes.get(entity_id).is_some_and(|v| v.pickable)
    }

    /// Gibt das Volume der Entity zurück (falls vorhanden).
    pub fn get(&self, entity_id: &EntityId) -> Option<&BoundingVolume> {
        self.volumes.get(entity_id)
    }

    /// Prüft, ob für die ID ein Volume existiert.
    pub fn contains(&self, entity_id: &EntityId) -> bool {
        self.volumes.contains_key(entity_id)
    }

    /// Alle Volumes in stabiler Einfügereihenfolge.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &BoundingVolume> {
        self.volumes.values()
    }

    /// Alle registrierten IDs in Einfügereihenfolge.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &EntityId> {
        self.volumes.keys()
    }

    /// Anzahl registrierter Volumes.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Gibt `true` zurück, wenn keine Volumes registriert sind.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Entfernt den Proxy einer Entity und gibt seine Grafik-Ressourcen frei.
    pub fn remove(&mut self, entity_id: &EntityId) -> Option<BoundingVolume> {
        let removed = self.volumes.shift_remove(entity_id)?;
        self.scene.remove_proxy(entity_id);
        Some(removed)
    }

    /// Entfernt alle Proxys aus der Szene und gibt die geteilten Styles frei.
    ///
    /// Ein zweiter Aufruf ist ein No-op.
    pub fn dispose(&mut self) {
        if self.styles.take().is_none() {
            return;
        }
        for entity_id in self.volumes.keys() {
            self.scene.remove_proxy(entity_id);
        }
        let count = self.volumes.len();
        self.volumes.clear();
        log::info!("Volume-Registry freigegeben ({} Proxys entfernt)", count);
    }

    /// Gibt zurück, ob `dispose()` bereits aufgerufen wurde.
    pub fn is_disposed(&self) -> bool {
        self.styles.is_none()
    }
}
