use super::*;
use viewer_selection::{Key, KeyInput};

#[test]
fn test_registered_entities_start_unselected_and_invisible() {
    let fixture = Fixture::e1_e2();
    let registry = fixture.registry.borrow();
    for volume in registry.all() {
        assert!(!fixture.controller.is_selected(&volume.entity_id));
        assert!(!volume.visible);
        assert_eq!(volume.style, VolumeStyle::Default);
    }
}

#[test]
fn test_select_then_deselect_round_trips() {
    let fixture = Fixture::e1_e2();
    fixture.controller.select(&"e1".into());
    let before = fixture.selected();

    assert!(fixture.controller.select(&"e2".into()));
    assert!(fixture.controller.deselect(&"e2".into()));

    assert_eq!(fixture.selected(), before);
    assert_eq!(fixture.style("e2"), VolumeStyle::Default);
}

#[test]
fn test_selection_ops_ignore_unknown_ids_and_do_not_notify() {
    let fixture = Fixture::e1_e2();

    assert!(!fixture.controller.select(&"ghost".into()));
    assert!(!fixture.controller.select(&EntityId::new("")));
    assert!(!fixture.controller.deselect(&"e1".into()));
    assert!(fixture.controller.select(&"e1".into()));
    assert!(!fixture.controller.select(&"e1".into()));

    assert_eq!(fixture.selected(), vec!["e1"]);
    assert_eq!(fixture.event_count(), 0);
}

#[test]
fn test_select_all_and_deselect_all() {
    let fixture = Fixture::new(&[("a", -10.0, 0.0), ("b", 0.0, 0.0), ("c", 10.0, 0.0)]);

    assert!(fixture.controller.select_all());
    assert_eq!(fixture.controller.selection().len(), 3);
    assert_eq!(fixture.style("b"), VolumeStyle::Selected);

    assert!(fixture.controller.deselect_all());
    assert!(fixture.controller.selection().is_empty());
    assert_eq!(fixture.style("b"), VolumeStyle::Default);
    assert!(!fixture.controller.deselect_all());
}

#[tokio::test]
async fn test_remove_entity_drops_it_from_selection_hover_and_registry() {
    let fixture = Fixture::e1_e2();
    fixture.controller.select_all();
    fixture.hover(E1_CENTER).await;

    assert!(fixture.controller.remove_entity(&"e1".into()));

    assert_eq!(fixture.selected(), vec!["e2"]);
    assert_eq!(fixture.controller.hovered(), None);
    assert!(!fixture.registry.borrow().contains(&"e1".into()));
    assert!(!fixture.controller.remove_entity(&"e1".into()));
}

#[tokio::test]
async fn test_entity_removed_directly_from_registry_leaves_selection_and_hover() {
    let fixture = Fixture::new(&[("e1", 0.0, 0.0)]);
    fixture.controller.select(&"e1".into());
    fixture.hover(E1_CENTER).await;

    fixture.registry.borrow_mut().remove(&"e1".into());

    assert!(!fixture.controller.is_selected(&"e1".into()));
    assert_eq!(fixture.controller.hovered(), None);

    let outcome = fixture
        .controller
        .key_down(&KeyInput::new(Key::Char('a')).with_modifiers(Modifiers::CTRL))
        .await;
    assert!(outcome.prevent_default);
    let events = fixture.events.borrow();
    let last = events.last().expect("Select-All meldet");
    assert!(last.selection.is_empty());
}

#[tokio::test]
async fn test_click_after_direct_registry_removal_ignores_stale_ids() {
    let fixture = Fixture::e1_e2();
    fixture.controller.select_all();
    fixture.registry.borrow_mut().remove(&"e1".into());

    // Nur e2 bleibt selektiert: Klick darauf hebt die Selektion auf
    fixture.click(E2_CENTER, Modifiers::NONE).await;

    assert!(fixture.selected().is_empty());
    assert_eq!(fixture.style("e2"), VolumeStyle::Default);
}

#[tokio::test]
async fn test_unsubscribe_stops_notifications() {
    let fixture = Fixture::e1_e2();
    let extra = Rc::new(RefCell::new(0));
    let id = {
        let extra = Rc::clone(&extra);
        fixture
            .controller
            .subscribe(move |_| *extra.borrow_mut() += 1)
    };

    let escape = KeyInput::new(Key::Escape);
    fixture.controller.key_down(&escape).await;
    assert!(fixture.controller.unsubscribe(id));
    fixture.controller.key_down(&escape).await;

    assert_eq!(*extra.borrow(), 1);
    assert_eq!(fixture.event_count(), 2);
}

#[tokio::test]
async fn test_dispose_resets_styles_and_ignores_further_input() {
    let fixture = Fixture::e1_e2();
    fixture.click(E1_CENTER, Modifiers::NONE).await;
    fixture.hover(E2_CENTER).await;
    assert_eq!(fixture.event_count(), 1);

    fixture.controller.dispose();
    assert!(fixture.controller.is_disposed());
    assert_eq!(fixture.style("e1"), VolumeStyle::Default);
    assert_eq!(fixture.style("e2"), VolumeStyle::Default);

    fixture.click(E2_CENTER, Modifiers::NONE).await;
    fixture
        .controller
        .key_down(&KeyInput::new(Key::Escape))
        .await;
    assert!(!fixture.controller.select(&"e1".into()));
    assert!(fixture.selected().is_empty());
    assert_eq!(fixture.event_count(), 1);

    // Zweiter Aufruf ist ein No-op
    fixture.controller.dispose();
}

#[tokio::test]
async fn test_registry_dispose_turns_controller_ops_into_no_ops() {
    let fixture = Fixture::e1_e2();
    fixture.registry.borrow_mut().dispose();

    assert!(!fixture.controller.select(&"e1".into()));
    fixture.click(E1_CENTER, Modifiers::NONE).await;
    assert!(fixture.selected().is_empty());
    assert!(fixture.registry.borrow().is_empty());
}

#[test]
fn test_unpickable_entity_is_excluded_from_selection_gestures_only() {
    let fixture = Fixture::e1_e2();
    fixture.registry.borrow_mut().set_pickable(&"e1".into(), false);

    // Programmatisch bleibt sie selektierbar
    assert!(fixture.controller.select(&"e1".into()));
    assert_eq!(fixture.style("e1"), VolumeStyle::Selected);
}

#[tokio::test]
async fn test_unpickable_entity_cannot_be_clicked_or_boxed() {
    let fixture = Fixture::e1_e2();
    fixture.registry.borrow_mut().set_pickable(&"e1".into(), false);

    fixture.click(E1_CENTER, Modifiers::NONE).await;
    assert!(fixture.selected().is_empty());

    fixture
        .drag((350.0, 250.0), (450.0, 350.0), Modifiers::NONE)
        .await;
    assert!(fixture.selected().is_empty());
}
