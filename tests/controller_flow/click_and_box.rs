use super::*;
use viewer_selection::{PointerButton, SelectionCause, SelectionCommand};

#[tokio::test]
async fn test_clicking_a_then_b_selects_only_b() {
    let fixture = Fixture::e1_e2();

    fixture.click(E1_CENTER, Modifiers::NONE).await;
    assert_eq!(fixture.selected(), vec!["e1"]);

    fixture.click(E2_CENTER, Modifiers::NONE).await;
    assert_eq!(fixture.selected(), vec!["e2"]);
    assert_eq!(fixture.style("e1"), VolumeStyle::Default);
    assert_eq!(fixture.style("e2"), VolumeStyle::Selected);
}

#[tokio::test]
async fn test_clicking_the_only_selected_entity_deselects_it() {
    let fixture = Fixture::e1_e2();

    fixture.click(E1_CENTER, Modifiers::NONE).await;
    fixture.click(E1_CENTER, Modifiers::NONE).await;

    assert!(fixture.selected().is_empty());
    assert_eq!(fixture.style("e1"), VolumeStyle::Default);
    assert_eq!(fixture.event_count(), 2);
}

#[tokio::test]
async fn test_modifier_click_toggles_membership() {
    let fixture = Fixture::e1_e2();

    fixture.click(E1_CENTER, Modifiers::CTRL).await;
    fixture.click(E2_CENTER, Modifiers::CTRL).await;
    assert_eq!(fixture.selected(), vec!["e1", "e2"]);

    fixture.click(E1_CENTER, Modifiers::META).await;
    assert_eq!(fixture.selected(), vec!["e2"]);
}

#[tokio::test]
async fn test_click_inside_multi_selection_narrows_to_hit() {
    let fixture = Fixture::e1_e2();
    fixture.controller.select_all();

    fixture.click(E1_CENTER, Modifiers::NONE).await;
    assert_eq!(fixture.selected(), vec!["e1"]);
}

#[tokio::test]
async fn test_click_on_empty_space_clears_selection() {
    let fixture = Fixture::e1_e2();
    fixture.controller.select_all();

    fixture.click(EMPTY_SPOT, Modifiers::NONE).await;

    assert!(fixture.selected().is_empty());
    let events = fixture.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].cause, SelectionCause::Click);
    assert!(events[0].selection.is_empty());
}

#[tokio::test]
async fn test_modifier_click_on_empty_space_keeps_selection_but_notifies() {
    let fixture = Fixture::e1_e2();
    fixture.click(E1_CENTER, Modifiers::NONE).await;

    fixture.click(EMPTY_SPOT, Modifiers::CTRL).await;

    assert_eq!(fixture.selected(), vec!["e1"]);
    assert_eq!(fixture.event_count(), 2);
}

#[tokio::test]
async fn test_box_selects_contained_entities_but_not_intersected_ones() {
    // a und c liegen ganz in der Box (Welt x -5.5..5.5, y -1.5..2.5), b ragt oben heraus
    let fixture = Fixture::new(&[("a", -4.0, 0.0), ("b", 0.0, 3.0), ("c", 4.0, 0.0)]);

    fixture
        .drag((235.0, 225.0), (565.0, 345.0), Modifiers::NONE)
        .await;

    assert_eq!(fixture.selected(), vec!["a", "c"]);
    assert_eq!(fixture.style("b"), VolumeStyle::Default);
    assert_eq!(fixture.events.borrow()[0].cause, SelectionCause::BoxSelect);
}

#[tokio::test]
async fn test_intersect_policy_also_selects_overlapping_entities() {
    let options = SelectionOptions {
        box_select_policy: viewer_selection::BoxSelectPolicy::Intersect,
        ..SelectionOptions::default()
    };
    let fixture = Fixture::with_options(
        &[("a", -4.0, 0.0), ("b", 0.0, 3.0), ("c", 4.0, 0.0)],
        options,
    );

    fixture
        .drag((235.0, 225.0), (565.0, 345.0), Modifiers::NONE)
        .await;

    assert_eq!(fixture.selected(), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_empty_box_without_modifier_clears_selection() {
    let fixture = Fixture::e1_e2();
    fixture.controller.select_all();

    fixture
        .drag((50.0, 50.0), (150.0, 150.0), Modifiers::NONE)
        .await;

    assert!(fixture.selected().is_empty());
    assert_eq!(fixture.event_count(), 1);
}

#[tokio::test]
async fn test_modifier_box_unions_and_never_removes() {
    let fixture = Fixture::e1_e2();
    fixture.click(E2_CENTER, Modifiers::NONE).await;

    fixture
        .drag((350.0, 250.0), (450.0, 350.0), Modifiers::CTRL)
        .await;
    assert_eq!(fixture.selected(), vec!["e1", "e2"]);

    fixture
        .drag((50.0, 50.0), (150.0, 150.0), Modifiers::CTRL)
        .await;
    assert_eq!(fixture.selected(), vec!["e1", "e2"]);
}

#[tokio::test]
async fn test_concrete_scenario_box_then_empty_click() {
    let fixture = Fixture::e1_e2();

    fixture
        .drag((350.0, 250.0), (450.0, 350.0), Modifiers::NONE)
        .await;
    assert_eq!(fixture.selected(), vec!["e1"]);

    fixture.click(EMPTY_SPOT, Modifiers::NONE).await;
    assert!(fixture.selected().is_empty());

    let causes: Vec<SelectionCause> = fixture.events.borrow().iter().map(|e| e.cause).collect();
    assert_eq!(causes, vec![SelectionCause::BoxSelect, SelectionCause::Click]);
}

#[tokio::test]
async fn test_overlay_follows_drag_and_hides_on_release() {
    let overlay = RecordingOverlay::default();
    let ops = Rc::clone(&overlay.ops);
    let registry = registry_with(&[("e1", 0.0, 0.0)]);
    let camera = camera();
    let controller = SelectionController::new(
        Rc::clone(&registry),
        ProxyHitTester::new(Rc::clone(&registry), Rc::clone(&camera)),
        camera,
        SelectionOptions::default(),
    )
    .with_overlay(overlay);

    controller.pointer_down(&PointerInput::at(450.0, 350.0));
    controller.pointer_move(&PointerInput::at(400.0, 320.0)).await;
    controller.pointer_move(&PointerInput::at(350.0, 250.0)).await;
    controller.pointer_up(&PointerInput::at(350.0, 250.0)).await;

    assert_eq!(
        *ops.borrow(),
        vec![
            OverlayOp::Show(ScreenRect::from_corners(
                Vec2::new(450.0, 350.0),
                Vec2::new(400.0, 320.0)
            )),
            OverlayOp::Show(ScreenRect {
                min: Vec2::new(350.0, 250.0),
                max: Vec2::new(450.0, 350.0),
            }),
            OverlayOp::Hide,
        ]
    );
    assert!(controller.is_selected(&"e1".into()));
}

#[tokio::test]
async fn test_non_primary_and_off_surface_presses_are_ignored() {
    let fixture = Fixture::e1_e2();

    let secondary =
        PointerInput::at(E1_CENTER.0, E1_CENTER.1).with_button(PointerButton::Secondary);
    fixture.controller.pointer_down(&secondary);
    fixture.controller.pointer_up(&secondary).await;

    let outside = PointerInput::at(E1_CENTER.0, E1_CENTER.1).off_surface();
    fixture.controller.pointer_down(&outside);
    fixture
        .controller
        .pointer_up(&PointerInput::at(E1_CENTER.0, E1_CENTER.1))
        .await;

    assert!(fixture.selected().is_empty());
    assert_eq!(fixture.event_count(), 0);
}

#[tokio::test]
async fn test_movement_below_drag_threshold_still_resolves_as_click() {
    let options = SelectionOptions {
        drag_threshold_px: 5.0,
        ..SelectionOptions::default()
    };
    let fixture = Fixture::with_options(&[("e1", 0.0, 0.0)], options);

    fixture.controller.pointer_down(&PointerInput::at(400.0, 300.0));
    fixture
        .controller
        .pointer_move(&PointerInput::at(402.0, 301.0))
        .await;
    fixture
        .controller
        .pointer_up(&PointerInput::at(402.0, 301.0))
        .await;

    assert_eq!(fixture.selected(), vec!["e1"]);
    assert_eq!(fixture.events.borrow()[0].cause, SelectionCause::Click);
}

#[tokio::test]
async fn test_notification_snapshot_is_not_a_live_view() {
    let fixture = Fixture::e1_e2();
    fixture.click(E1_CENTER, Modifiers::NONE).await;
    let first = fixture.events.borrow()[0].selection.clone();

    fixture.click(E2_CENTER, Modifiers::NONE).await;

    assert!(first.contains(&"e1".into()));
    assert!(!first.contains(&"e2".into()));
}

#[tokio::test]
async fn test_each_resolution_is_recorded_in_command_log() {
    let fixture = Fixture::e1_e2();
    fixture.click(E1_CENTER, Modifiers::CTRL).await;
    fixture
        .drag((50.0, 50.0), (150.0, 150.0), Modifiers::NONE)
        .await;

    let log = fixture.controller.command_log();
    let resolutions: Vec<&SelectionCommand> = log.resolutions().collect();
    assert_eq!(
        resolutions,
        vec![
            &SelectionCommand::Toggle { id: "e1".into() },
            &SelectionCommand::ReplaceWith {
                ids: Default::default()
            },
        ]
    );
}

#[tokio::test]
async fn test_command_log_marks_no_op_resolutions() {
    let fixture = Fixture::e1_e2();
    fixture.click(EMPTY_SPOT, Modifiers::NONE).await;
    fixture.click(E1_CENTER, Modifiers::NONE).await;

    let log = fixture.controller.command_log();
    let effects: Vec<bool> = log.entries().iter().map(|entry| entry.changed).collect();
    assert_eq!(effects, vec![false, true]);
    assert_eq!(log.no_op_count(), 1);
}
