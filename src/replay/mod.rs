//! Headless Replay: Szene laden, Input-Skript abspielen, Benachrichtigungen sammeln.
//!
//! Treiber der Binary `selection-replay`; liegt in der Library, damit er testbar ist.

pub mod scene_file;
pub mod script;

pub use scene_file::{CameraSpec, SceneCamera, SceneEntity, SceneFile};
pub use script::{ModifierKey, ScriptFile, ScriptStep};

use crate::app::{ProxyHitTester, SelectionController, VolumeRegistry};
use crate::core::EntityId;
use crate::shared::{DetachedScene, SelectionOptions};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Eine ausgegebene Benachrichtigung (eine JSON-Zeile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayRecord {
    /// Index des auslösenden Skript-Schritts
    pub step: usize,
    /// Auslöser (`click`, `box_select`, `clear_requested`, `select_all`)
    pub cause: &'static str,
    /// Selektierte IDs, sortiert
    pub selection: Vec<EntityId>,
}

/// Spielt `script` auf `scene` ab und liefert alle Benachrichtigungen in Reihenfolge.
pub async fn run_script(
    scene: &SceneFile,
    script: &ScriptFile,
    options: SelectionOptions,
) -> Vec<ReplayRecord> {
    let registry = Rc::new(RefCell::new(VolumeRegistry::new(
        Box::new(DetachedScene),
        &options,
    )));
    {
        let mut registry = registry.borrow_mut();
        for scene_entity in &scene.entities {
            if registry
                .register(&scene_entity.entity, scene_entity.bounds.as_ref())
                .is_some()
                && !scene_entity.pickable
            {
                registry.set_pickable(&scene_entity.entity.id, false);
            }
        }
        log::info!(
            "{} von {} Entities registriert",
            registry.len(),
            scene.entities.len()
        );
    }

    let camera = Rc::new(scene.build_camera());
    let hit_tester = ProxyHitTester::new(Rc::clone(&registry), Rc::clone(&camera));
    let controller = SelectionController::new(Rc::clone(&registry), hit_tester, camera, options);

    let records = Rc::new(RefCell::new(Vec::new()));
    let current_step = Rc::new(Cell::new(0));
    {
        let records = Rc::clone(&records);
        let current_step = Rc::clone(&current_step);
        controller.subscribe(move |event| {
            records.borrow_mut().push(ReplayRecord {
                step: current_step.get(),
                cause: event.cause.as_str(),
                selection: event.selection.sorted_ids(),
            });
        });
    }

    for (index, step) in script.steps.iter().enumerate() {
        current_step.set(index);
        controller.handle_input(&step.to_event()).await;
    }
    controller.dispose();

    records.take()
}
