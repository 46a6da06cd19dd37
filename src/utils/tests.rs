use super::*;

#[test]
fn index_middle_to_old_replay() {
    let mut map = IndexMiddleToOld::identity(4);
    map.remove(2);
    map.remove(0);
    map.insert_placeholder(0);
    map.insert_placeholder(3);
    assert_eq!(map.len(), 4);
    assert_eq!(map.get(0), None);
    assert_eq!(map.get(1), Some(1));
    assert_eq!(map.get(2), Some(3));
    assert_eq!(map.get(3), None);
    assert_eq!(map.get(4), None);
}

#[test]
fn index_middle_to_old_identity() {
    let map = IndexMiddleToOld::identity(3);
    assert_eq!(map, IndexMiddleToOld(vec![Some(0), Some(1), Some(2)]));
}

#[test]
fn sorted_by_key() {
    assert!(is_sorted_by_key(&[1, 2, 2, 5], |x| *x));
    assert!(!is_sorted_by_key(&[3, 1], |x| *x));
    assert!(is_sorted_by_key(&[3, 1], |x| -x));
    assert!(is_sorted_by_key::<i32, i32>(&[], |x| *x));
}
