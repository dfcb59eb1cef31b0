mod common;

use common::{editor_with_log, pos};
use paint_world::{Command, EditorEvent, InputEvent, PointerState, Tool};

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown { position: pos(x, y) }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        position: pos(x, y),
        pressed: true,
    }
}

fn hover(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        position: pos(x, y),
        pressed: false,
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp { position: pos(x, y) }
}

#[test]
fn test_stroke_is_committed_on_down_and_grows() {
    let (mut editor, log) = editor_with_log();
    editor.handle_input(InputEvent::PointerEnter { position: pos(1.0, 1.0) });
    assert_eq!(editor.pointer_state(), PointerState::Hovering);
    log.take();

    editor.handle_input(down(10.0, 10.0));
    assert_eq!(editor.pointer_state(), PointerState::Placing);
    assert_eq!(editor.document().committed().len(), 1);
    assert!(editor.is_drawing_stroke());

    editor.handle_input(drag(20.0, 15.0));
    editor.handle_input(drag(30.0, 20.0));
    editor.handle_input(up(30.0, 20.0));

    assert_eq!(editor.pointer_state(), PointerState::Hovering);
    assert!(!editor.is_drawing_stroke());
    match &editor.document().committed()[0] {
        Command::Stroke(stroke) => {
            assert_eq!(stroke.points(), &[pos(10.0, 10.0), pos(20.0, 15.0), pos(30.0, 20.0)]);
            assert_eq!(stroke.width(), 5.0);
        }
        other => panic!("expected a stroke, got {:?}", other),
    }
    assert_eq!(
        log.events(),
        vec![
            EditorEvent::DrawingChanged,
            EditorEvent::DrawingChanged,
            EditorEvent::DrawingChanged,
            EditorEvent::ToolMoved,
        ]
    );
}

#[test]
fn test_new_stroke_clears_redo() {
    let (mut editor, _log) = editor_with_log();
    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(drag(2.0, 2.0));
    editor.handle_input(up(2.0, 2.0));
    editor.undo();
    assert!(editor.document().can_redo());

    editor.handle_input(down(5.0, 5.0));
    assert!(!editor.document().can_redo());
}

#[test]
fn test_hover_only_moves_cursor() {
    let (mut editor, log) = editor_with_log();
    editor.handle_input(InputEvent::PointerEnter { position: pos(1.0, 1.0) });
    editor.handle_input(hover(5.0, 5.0));
    editor.handle_input(hover(6.0, 5.0));

    assert!(editor.document().committed().is_empty());
    assert_eq!(editor.cursor(), Some(pos(6.0, 5.0)));
    assert!(log.events().iter().all(|event| *event == EditorEvent::ToolMoved));
    assert_eq!(log.events().len(), 3);
}

#[test]
fn test_stroke_color_is_captured_at_creation() {
    let (mut editor, _log) = editor_with_log();
    let red = editor.picker().color32();

    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(drag(2.0, 2.0));
    editor.handle_input(up(2.0, 2.0));

    editor.pick_color(pos(50.0, 50.0));
    assert_ne!(editor.picker().color32(), red);

    match &editor.document().committed()[0] {
        Command::Stroke(stroke) => assert_eq!(stroke.color(), red),
        other => panic!("expected a stroke, got {:?}", other),
    }
}

#[test]
fn test_drawing_records_recent_color() {
    let (mut editor, _log) = editor_with_log();
    assert!(editor.picker().recent().is_empty());

    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(drag(2.0, 2.0));
    editor.handle_input(up(2.0, 2.0));

    assert_eq!(editor.picker().recent().len(), 1);
    assert_eq!(editor.picker().recent().entries()[0].point, editor.picker().point());
}

#[test]
fn test_sticker_commits_on_release() {
    let (mut editor, log) = editor_with_log();
    editor.arm_sticker("★");
    editor.handle_input(InputEvent::PointerEnter { position: pos(1.0, 1.0) });
    log.take();

    editor.handle_input(down(10.0, 10.0));
    assert!(editor.document().committed().is_empty());
    assert!(editor.open_sticker().is_some());

    editor.handle_input(drag(40.0, 50.0));
    assert!(editor.document().committed().is_empty());

    editor.handle_input(up(40.0, 50.0));
    assert!(editor.open_sticker().is_none());
    match editor.document().committed() {
        [Command::Sticker(sticker)] => {
            assert_eq!(sticker.glyph(), "★");
            // One logical position, the last one
            assert_eq!(sticker.anchor(), Some(pos(40.0, 50.0)));
            assert_eq!(sticker.size(), 60.0);
        }
        other => panic!("expected one sticker, got {:?}", other),
    }
    assert_eq!(
        log.events(),
        vec![
            EditorEvent::DrawingChanged,
            EditorEvent::DrawingChanged,
            EditorEvent::DrawingChanged,
        ]
    );

    // Stickers are one-shot; the brush is armed again
    assert_eq!(editor.tools().tool(), &Tool::Brush);
    // Placing a sticker does not count as using a color
    assert!(editor.picker().recent().is_empty());
}

#[test]
fn test_leave_closes_stroke() {
    let (mut editor, _log) = editor_with_log();
    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(drag(2.0, 2.0));
    editor.handle_input(InputEvent::PointerLeave);

    assert_eq!(editor.pointer_state(), PointerState::Outside);
    assert!(!editor.is_drawing_stroke());
    assert_eq!(editor.cursor(), None);

    // Re-entering hovers without extending the old stroke
    editor.handle_input(InputEvent::PointerEnter { position: pos(3.0, 3.0) });
    editor.handle_input(drag(4.0, 4.0));
    assert_eq!(editor.pointer_state(), PointerState::Hovering);
    match &editor.document().committed()[0] {
        Command::Stroke(stroke) => assert_eq!(stroke.points().len(), 2),
        other => panic!("expected a stroke, got {:?}", other),
    }
}

#[test]
fn test_leave_drops_unplaced_sticker() {
    let (mut editor, _log) = editor_with_log();
    editor.arm_sticker("🌎");
    editor.handle_input(down(10.0, 10.0));
    editor.handle_input(InputEvent::PointerLeave);

    assert!(editor.open_sticker().is_none());
    assert!(editor.document().committed().is_empty());
    // Still armed for another try
    assert!(editor.tools().tool().is_sticker());
}

#[test]
fn test_undo_mid_drag_ends_the_drag() {
    let (mut editor, _log) = editor_with_log();
    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(drag(2.0, 2.0));
    editor.handle_input(up(2.0, 2.0));

    editor.handle_input(down(10.0, 10.0));
    editor.handle_input(drag(11.0, 11.0));
    assert!(editor.undo());
    assert_eq!(editor.pointer_state(), PointerState::Hovering);

    // Further movement must not extend the first stroke
    editor.handle_input(drag(12.0, 12.0));
    match editor.document().committed() {
        [Command::Stroke(stroke)] => assert_eq!(stroke.points(), &[pos(1.0, 1.0), pos(2.0, 2.0)]),
        other => panic!("expected one stroke, got {:?}", other),
    }
}

#[test]
fn test_second_down_while_placing_is_ignored() {
    let (mut editor, _log) = editor_with_log();
    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(down(5.0, 5.0));
    assert_eq!(editor.document().committed().len(), 1);
}

fn editor_with_one_stroke() -> (paint_world::EditorContext, common::EventLog) {
    let (mut editor, log) = editor_with_log();
    editor.handle_input(down(1.0, 1.0));
    editor.handle_input(drag(2.0, 2.0));
    editor.handle_input(up(2.0, 2.0));
    log.take();
    (editor, log)
}

#[test]
fn test_undo_drops_unplaced_sticker() {
    let (mut editor, _log) = editor_with_one_stroke();
    editor.arm_sticker("★");
    editor.handle_input(down(20.0, 20.0));
    assert!(editor.open_sticker().is_some());

    assert!(editor.undo());
    assert!(editor.open_sticker().is_none());
    assert_eq!(editor.pointer_state(), PointerState::Hovering);
    assert!(editor.document().committed().is_empty());
    assert_eq!(editor.document().redo_buffer().len(), 1);

    // Releasing afterwards places nothing
    editor.handle_input(drag(25.0, 25.0));
    editor.handle_input(up(25.0, 25.0));
    assert!(editor.document().committed().is_empty());
    assert!(editor.document().redo_buffer()[0].name() == "Stroke");
}

#[test]
fn test_clear_drops_unplaced_sticker() {
    let (mut editor, log) = editor_with_one_stroke();
    editor.arm_sticker("★");
    editor.handle_input(down(20.0, 20.0));
    log.take();

    assert!(editor.clear());
    assert_eq!(log.take(), vec![EditorEvent::DrawingChanged]);
    assert!(editor.open_sticker().is_none());
    assert_eq!(editor.pointer_state(), PointerState::Hovering);

    editor.handle_input(up(20.0, 20.0));
    assert!(editor.document().is_empty());
    // The tool stays armed since nothing was placed
    assert!(editor.tools().tool().is_sticker());
}

#[test]
fn test_redo_drops_unplaced_sticker() {
    let (mut editor, _log) = editor_with_one_stroke();
    editor.undo();
    editor.arm_sticker("🌎");
    editor.handle_input(down(20.0, 20.0));

    assert!(editor.redo());
    assert!(editor.open_sticker().is_none());
    editor.handle_input(up(20.0, 20.0));
    match editor.document().committed() {
        [Command::Stroke(_)] => {}
        other => panic!("expected only the redone stroke, got {:?}", other),
    }
}
