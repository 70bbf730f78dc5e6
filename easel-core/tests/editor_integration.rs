//! Editor integration tests.
//!
//! Exercises the full editing flow: mutation operations against the live
//! canvas, z-order bookkeeping, lock semantics, selection tracking and
//! undo/redo across committed edits.

use easel_core::{
    Background, Canvas, CanvasError, EditOp, Editor, Extent, Item, ItemId, ItemKind, Point,
    ShapeKind,
};

/// Create a test shape item with the given fill.
fn shape(fill: &str) -> Item {
    Item::new(ItemKind::Shape {
        shape: ShapeKind::Rectangle,
        fill: fill.to_string(),
    })
}

/// Create an editor with `count` items stacked bottom to top.
fn editor_with(count: usize) -> (Editor, Vec<ItemId>) {
    let mut editor = Editor::new(Canvas::new("integration", Extent::new(800.0, 600.0)));
    let ids = (0..count)
        .map(|index| editor.add_item(shape(&format!("#00000{index}"))).expect("add"))
        .collect();
    (editor, ids)
}

// ===========================================================================
// Z-order across the editing surface
// ===========================================================================

#[test]
fn test_layer_move_shifts_neighbours_by_one() {
    let (mut editor, ids) = editor_with(3);

    editor.set_z_index(ids[0], 2).expect("raise to top");

    let canvas = editor.canvas();
    assert_eq!(canvas.item(ids[0]).expect("item0").z_index, 2);
    assert_eq!(canvas.item(ids[1]).expect("item1").z_index, 0);
    assert_eq!(canvas.item(ids[2]).expect("item2").z_index, 1);

    let order: Vec<_> = canvas.items().iter().map(|item| item.id).collect();
    assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
}

#[test]
fn test_z_indices_stay_contiguous_across_a_session() {
    let (mut editor, mut ids) = editor_with(4);

    editor.remove_item(ids.remove(1)).expect("remove");
    editor.set_z_index(ids[2], 0).expect("send to back");
    ids.push(editor.add_item(shape("#444444")).expect("add"));
    editor.undo();
    editor.redo();
    editor.set_z_index(ids[0], 3).expect("raise");

    let canvas = editor.canvas();
    let zs: Vec<_> = canvas.items().iter().map(|item| item.z_index).collect();
    assert_eq!(zs, (0..canvas.item_count()).collect::<Vec<_>>());
}

// ===========================================================================
// Undo/redo across committed edits
// ===========================================================================

#[test]
fn test_undo_redo_walk_through_recorded_states() {
    let mut editor = Editor::new(Canvas::new("history walk", Extent::new(400.0, 400.0)));
    let s0 = editor.canvas().clone();

    let id = editor.add_item(shape("#101010")).expect("add");
    let s1 = editor.canvas().clone();

    editor.set_position(id, Point::new(25.0, 30.0)).expect("move");
    let s2 = editor.canvas().clone();

    assert!(editor.undo());
    assert_eq!(*editor.canvas(), s1);

    assert!(editor.redo());
    assert_eq!(*editor.canvas(), s2);

    assert!(editor.undo());
    assert!(editor.undo());
    assert_eq!(*editor.canvas(), s0);

    // Past exhausted: nothing further, state unchanged.
    assert!(!editor.undo());
    assert_eq!(*editor.canvas(), s0);
    assert!(!editor.can_undo());
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let (mut editor, ids) = editor_with(1);

    editor.set_rotation(ids[0], 45.0).expect("rotate");
    assert!(editor.undo());
    assert!(editor.can_redo());

    editor.set_rotation(ids[0], 90.0).expect("new edit");
    assert!(!editor.can_redo());
    assert!(!editor.redo());

    let rotation = editor.canvas().item(ids[0]).expect("item").rotation;
    assert!((rotation - 90.0).abs() < f32::EPSILON);
}

#[test]
fn test_bounded_history_evicts_oldest_edit() {
    let mut editor =
        Editor::with_max_history(Canvas::new("bounded", Extent::new(400.0, 400.0)), 2);
    let id = editor.add_item(shape("#123123")).expect("add");

    for degrees in [10.0, 20.0, 30.0] {
        editor.set_rotation(id, degrees).expect("rotate");
    }

    // Only the two most recent edits are undoable.
    assert_eq!(editor.undo_depth(), 2);
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());

    let rotation = editor.canvas().item(id).expect("item").rotation;
    assert!((rotation - 10.0).abs() < f32::EPSILON);
}

// ===========================================================================
// Lock semantics
// ===========================================================================

#[test]
fn test_locked_item_is_immutable_through_the_editor() {
    let (mut editor, ids) = editor_with(2);
    editor.toggle_lock(ids[0]).expect("lock");
    let before = editor.canvas().clone();
    let depth = editor.undo_depth();

    assert!(editor.set_position(ids[0], Point::new(1.0, 1.0)).is_err());
    assert!(editor.set_size(ids[0], Extent::new(5.0, 5.0)).is_err());
    assert!(editor.set_rotation(ids[0], 90.0).is_err());
    assert!(editor.set_opacity(ids[0], 0.1).is_err());
    assert!(editor.set_z_index(ids[0], 1).is_err());
    assert!(editor.remove_item(ids[0]).is_err());

    assert_eq!(*editor.canvas(), before);
    assert_eq!(editor.undo_depth(), depth);

    // Unlock-then-mutate succeeds and commits normally.
    editor.toggle_lock(ids[0]).expect("unlock");
    editor
        .set_position(ids[0], Point::new(1.0, 1.0))
        .expect("move after unlock");
    assert_eq!(editor.undo_depth(), depth + 2);
}

#[test]
fn test_unlock_is_undoable() {
    let (mut editor, ids) = editor_with(1);
    editor.toggle_lock(ids[0]).expect("lock");
    editor.toggle_lock(ids[0]).expect("unlock");

    assert!(editor.undo());
    assert!(editor.canvas().item(ids[0]).expect("item").locked);
}

// ===========================================================================
// Selection tracking
// ===========================================================================

#[test]
fn test_selection_is_not_historied() {
    let (mut editor, ids) = editor_with(2);
    editor.select(ids[1]).expect("select");

    editor.set_opacity(ids[0], 0.5).expect("edit other item");
    editor.undo();
    editor.redo();

    assert_eq!(editor.selected_id(), Some(ids[1]));
}

#[test]
fn test_selection_cleared_when_removal_is_redone() {
    let (mut editor, ids) = editor_with(2);
    editor.select(ids[1]).expect("select");

    editor.remove_item(ids[1]).expect("remove clears selection");
    assert_eq!(editor.selected_id(), None);

    // Bring the item back and reselect, then redo the removal.
    assert!(editor.undo());
    editor.select(ids[1]).expect("reselect");
    assert!(editor.redo());
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn test_select_at_picks_topmost_item() {
    let (mut editor, ids) = editor_with(2);

    assert_eq!(editor.select_at(50.0, 50.0), Some(ids[1]));
    editor.set_z_index(ids[1], 0).expect("send to back");
    assert_eq!(editor.select_at(50.0, 50.0), Some(ids[0]));

    assert_eq!(editor.select_at(700.0, 500.0), None);
    assert_eq!(editor.selected_id(), None);
}

// ===========================================================================
// Edit intents and snapshots
// ===========================================================================

#[test]
fn test_ops_survive_a_serialization_round_trip() {
    let (mut editor, ids) = editor_with(1);

    let ops = vec![
        EditOp::SetPosition {
            id: ids[0],
            position: Point::new(12.0, 34.0),
        },
        EditOp::SetOpacity {
            id: ids[0],
            opacity: 0.5,
        },
        EditOp::SetName {
            name: "renamed".to_string(),
        },
    ];
    let json = serde_json::to_string(&ops).expect("serialize ops");
    let decoded: Vec<EditOp> = serde_json::from_str(&json).expect("deserialize ops");

    for op in decoded {
        editor.apply(op).expect("apply");
    }

    let item = editor.canvas().item(ids[0]).expect("item");
    assert_eq!(item.position, Point::new(12.0, 34.0));
    assert_eq!(editor.canvas().name, "renamed");
    assert_eq!(editor.undo_depth(), 4);
}

#[test]
fn test_document_snapshot_is_isolated_from_later_edits() {
    let (mut editor, ids) = editor_with(1);
    let snapshot = editor.document();

    editor.set_position(ids[0], Point::new(99.0, 99.0)).expect("move");
    editor.set_background(Background::Color("#000000".to_string()));

    assert_eq!(snapshot.items[0].position, Point::new(0.0, 0.0));
    assert_eq!(snapshot.background, Background::Color("#ffffff".to_string()));
}

#[test]
fn test_session_resumes_from_document() {
    let (mut editor, ids) = editor_with(2);
    editor.set_rotation(ids[0], 15.0).expect("rotate");
    let document = editor.document();

    let mut resumed = Editor::load(document).expect("load");
    assert_eq!(*resumed.canvas(), *editor.canvas());

    // The resumed session starts with fresh history but full editability.
    assert!(!resumed.can_undo());
    resumed.set_opacity(ids[1], 0.3).expect("edit resumed canvas");
}

#[test]
fn test_unknown_target_is_reported_not_found() {
    let (mut editor, _) = editor_with(1);
    let ghost = ItemId::new();

    let err = editor
        .apply(EditOp::RemoveItem { id: ghost })
        .expect_err("ghost");
    assert!(matches!(err, CanvasError::ItemNotFound(_)));
}
