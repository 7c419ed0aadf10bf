//! Figure and shape-table tests against the public API

use jartris::core::{rotation_states, Figure};
use jartris::types::{ShapeKind, Spin};

#[test]
fn test_all_rotation_states_encode_four_filled_cells() {
    for kind in ShapeKind::ALL {
        for (i, state) in rotation_states(kind).iter().enumerate() {
            assert_eq!(
                state.filled_cells().count(),
                4,
                "{:?} rotation state {} must have 4 filled cells",
                kind,
                i
            );
        }
    }
}

#[test]
fn test_all_rotation_states_are_rectangular() {
    for kind in ShapeKind::ALL {
        for state in rotation_states(kind) {
            let width = state.width() as usize;
            for row in state.rows() {
                assert_eq!(row.len(), width);
            }
            assert_eq!(state.rows().len(), state.height() as usize);
        }
    }
}

#[test]
fn test_rotate_state_count_times_is_identity() {
    for kind in ShapeKind::ALL {
        for spin in [Spin::Clockwise, Spin::CounterClockwise] {
            let mut fig = Figure::new(kind);
            let start = fig.rotation();
            for _ in 0..fig.rotation_count() {
                fig.rotate(spin);
            }
            assert_eq!(fig.rotation(), start, "{:?} {:?}", kind, spin);
        }
    }
}

#[test]
fn test_rotate_changes_reported_pattern() {
    let mut fig = Figure::new(ShapeKind::I);
    let vertical = fig.pattern();
    assert_eq!(vertical.width(), 1);
    assert_eq!(vertical.height(), 4);

    fig.rotate(Spin::Clockwise);
    let horizontal = fig.pattern();
    assert_eq!(horizontal.width(), 4);
    assert_eq!(horizontal.height(), 1);
}

#[test]
fn test_opposite_spins_cancel() {
    for kind in ShapeKind::ALL {
        let mut fig = Figure::new(kind);
        fig.rotate(Spin::Clockwise);
        fig.rotate(Spin::CounterClockwise);
        assert_eq!(fig.rotation(), 0);
    }
}

#[test]
fn test_widths_may_differ_across_states() {
    // The T piece's bounding box flips between 3x2 and 2x3.
    let states = rotation_states(ShapeKind::T);
    assert_eq!(states[0].width(), 3);
    assert_eq!(states[1].width(), 2);
}
