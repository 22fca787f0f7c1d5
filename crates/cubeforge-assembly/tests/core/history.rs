use cubeforge_assembly::{AssemblyState, MoveOutcome};
use cubeforge_core::{GroupId, ModuleKind, Vec3};

fn add_at(state: &mut AssemblyState, x: f64, z: f64) -> cubeforge_core::ModuleId {
    state
        .add_module(Vec3::new(x, 0.0, z), 0, ModuleKind::Default)
        .unwrap()
}

#[test]
fn test_new_state_has_empty_history() {
    let state = AssemblyState::new();
    assert_eq!(state.history_len(), 0);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_each_commit_appends_a_snapshot() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    assert_eq!(state.history_len(), 1);
    add_at(&mut state, 3.0, 0.0);
    assert_eq!(state.history_len(), 2);
}

#[test]
fn test_undo_restores_previous_snapshot_exactly() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    let before = state.assembly().clone();
    add_at(&mut state, 3.0, 0.0);

    assert!(state.undo());
    assert_eq!(state.assembly(), &before);
}

#[test]
fn test_redo_restores_the_pre_undo_state() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    add_at(&mut state, 3.0, 0.0);
    let latest = state.assembly().clone();

    assert!(state.undo());
    assert!(state.redo());
    assert_eq!(state.assembly(), &latest);
}

#[test]
fn test_undo_bottoms_out_at_first_commit() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);

    // The initial empty assembly was never snapshotted; the first commit is
    // the floor.
    assert!(!state.can_undo());
    assert!(!state.undo());
    assert_eq!(state.assembly().len(), 1);
}

#[test]
fn test_redo_is_noop_at_the_end() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    assert!(!state.redo());
}

#[test]
fn test_commit_truncates_redoable_entries() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    add_at(&mut state, 3.0, 0.0);
    add_at(&mut state, 6.0, 0.0);

    state.undo();
    state.undo();
    assert!(state.can_redo());

    add_at(&mut state, 9.0, 0.0);
    assert!(!state.can_redo());
    // One surviving snapshot plus the new one.
    assert_eq!(state.history_len(), 2);
    // The undone additions are gone for good.
    assert!(!state.assembly().occupied_at(Vec3::new(3.0, 0.0, 0.0)));
    assert!(!state.assembly().occupied_at(Vec3::new(6.0, 0.0, 0.0)));
    assert!(state.assembly().occupied_at(Vec3::new(9.0, 0.0, 0.0)));
}

#[test]
fn test_n_mutations_k_undos_matches_older_snapshot() {
    let mut state = AssemblyState::new();
    let mut snapshots = Vec::new();
    for i in 0..5 {
        add_at(&mut state, f64::from(i) * 3.0, 0.0);
        snapshots.push(state.assembly().clone());
    }

    for _ in 0..3 {
        assert!(state.undo());
    }
    assert_eq!(state.assembly(), &snapshots[1]);

    assert!(state.redo());
    assert_eq!(state.assembly(), &snapshots[2]);
}

#[test]
fn test_rejected_move_leaves_history_unchanged() {
    let mut state = AssemblyState::new();
    let a = add_at(&mut state, 0.0, 0.0);
    add_at(&mut state, 1.0, 0.0);
    let history_before = state.history_len();
    let assembly_before = state.assembly().clone();

    let outcome = state.move_module(a, Vec3::new(1.0, 0.0, 0.0)).unwrap();

    assert_eq!(outcome, MoveOutcome::Rejected);
    assert_eq!(state.history_len(), history_before);
    assert_eq!(state.assembly(), &assembly_before);
}

#[test]
fn test_committed_move_is_undoable() {
    let mut state = AssemblyState::new();
    let a = add_at(&mut state, 0.0, 0.0);

    let outcome = state.move_module(a, Vec3::new(4.0, 0.0, 0.0)).unwrap();
    assert_eq!(outcome, MoveOutcome::Committed);
    assert_eq!(
        state.assembly().get(a).unwrap().position,
        Vec3::new(4.0, 0.0, 0.0)
    );

    assert!(state.undo());
    assert_eq!(
        state.assembly().get(a).unwrap().position,
        Vec3::new(0.0, 0.0, 0.0)
    );
}

#[test]
fn test_every_rotation_step_commits() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    add_at(&mut state, 1.0, 0.0);
    let history_before = state.history_len();

    state.rotate_group(GroupId(0), 0.05, 0.0).unwrap();
    state.rotate_group(GroupId(0), 0.05, 0.0).unwrap();
    state.rotate_group(GroupId(0), 0.05, 0.0).unwrap();

    // One snapshot per incremental step, no coalescing.
    assert_eq!(state.history_len(), history_before + 3);
}

#[test]
fn test_undo_steps_back_through_rotation_flood() {
    let mut state = AssemblyState::new();
    add_at(&mut state, 0.0, 0.0);
    add_at(&mut state, 1.0, 0.0);
    let before_rotation = state.assembly().clone();

    state.rotate_group(GroupId(0), 0.3, 0.1).unwrap();
    state.rotate_group(GroupId(0), 0.3, 0.1).unwrap();

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.assembly(), &before_rotation);
}

#[test]
fn test_groups_recomputed_after_undo() {
    let mut state = AssemblyState::new();
    let a = add_at(&mut state, 0.0, 0.0);
    add_at(&mut state, 5.0, 0.0);
    assert_eq!(state.groups().len(), 2);

    // Drag the first module next to the second: one group.
    state.move_module(a, Vec3::new(4.0, 0.0, 0.0)).unwrap();
    assert_eq!(state.groups().len(), 1);

    state.undo();
    assert_eq!(state.groups().len(), 2);
}
