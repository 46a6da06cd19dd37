use listdiff::{
    apply_sectioned, diff_sectioned, reverse_sectioned, SectionedDiffStep, SectionedSequence,
};

mod test_utils;
use test_utils::*;

#[test]
fn round_trip_all_small_sectioned() {
    let all = all_sectioned(&['a', 'b'], &[1, 2], 2, 2);
    for lhs in &all {
        for rhs in &all {
            let patch = diff_sectioned(lhs, rhs);
            assert!(patch.is_ordered(), "{lhs:?} -> {rhs:?}");
            assert_eq!(&apply_sectioned(&patch, lhs).unwrap(), rhs, "{lhs:?} -> {rhs:?}");
        }
    }
}

#[test]
fn round_trip_random_sectioned() {
    let mut rng = XorShift::new(42);
    for _ in 0..300 {
        let lhs = rng.sectioned(6, 4, 6, 5);
        let rhs = rng.sectioned(6, 4, 6, 5);
        let patch = diff_sectioned(&lhs, &rhs);
        assert!(patch.is_ordered());
        assert_eq!(apply_sectioned(&patch, &lhs).unwrap(), rhs);
        let back = reverse_sectioned(&lhs, &rhs);
        assert_eq!(apply_sectioned(&back, &rhs).unwrap(), lhs);
    }
}

#[test]
fn phases_appear_in_order() {
    let mut rng = XorShift::new(5);
    for _ in 0..300 {
        let lhs = rng.sectioned(5, 3, 4, 3);
        let rhs = rng.sectioned(5, 3, 4, 3);
        let phases: Vec<u8> = diff_sectioned(&lhs, &rhs)
            .iter()
            .map(|step| match step {
                SectionedDiffStep::RowDelete { .. } => 0,
                SectionedDiffStep::SectionDelete { .. } => 1,
                SectionedDiffStep::SectionInsert { .. } => 2,
                SectionedDiffStep::RowInsert { .. } => 3,
            })
            .collect();
        assert!(phases.windows(2).all(|w| w[0] <= w[1]), "{phases:?}");
    }
}

#[test]
fn fixture_move_section() {
    let lhs: SectionedSequence<&str, i32> =
        [("a", vec![1, 2]), ("b", vec![3])].into_iter().collect();
    let rhs: SectionedSequence<&str, i32> =
        [("b", vec![3, 4]), ("c", vec![])].into_iter().collect();
    let patch = diff_sectioned(&lhs, &rhs);
    assert_eq!(patch.row_deletions().len(), 0);
    assert_eq!(patch.section_deletions().len(), 1);
    assert_eq!(patch.section_insertions().len(), 1);
    assert_eq!(
        patch.row_insertions(),
        [SectionedDiffStep::RowInsert {
            section: 0,
            row: 1,
            value: 4
        }]
    );
    assert_eq!(apply_sectioned(&patch, &lhs).unwrap(), rhs);
}

#[test]
fn empty_sides() {
    let empty = SectionedSequence::<char, i32>::new();
    let full: SectionedSequence<char, i32> =
        [('a', vec![1]), ('b', vec![])].into_iter().collect();

    let patch = diff_sectioned(&empty, &full);
    assert_eq!(patch.to_string(), "+[a]@0,+[b]@1,+1@0:0");
    assert_eq!(apply_sectioned(&patch, &empty).unwrap(), full);

    let patch = diff_sectioned(&full, &empty);
    assert_eq!(patch.to_string(), "-[b]@1,-[a]@0");
    assert_eq!(apply_sectioned(&patch, &full).unwrap(), empty);
}
