use ndfixed::prelude::*;

#[test]
fn checked_access() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(*a.at(&[0, 0]).unwrap(), 1);
    assert_eq!(*a.at(&[1, 2]).unwrap(), 6);
    assert_eq!(a.at(&[0]).unwrap_err().kind(), ErrorKind::RankMismatch);
    assert_eq!(a.at(&[0, 0, 0]).unwrap_err().kind(), ErrorKind::RankMismatch);
    assert_eq!(a.at(&[2, 0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.at(&[0, 3]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn arity_is_checked_before_extents() {
    let a = Array::<i32, Rank2<2, 3>>::new();
    // Wrong in both ways; the rank check runs first.
    assert_eq!(a.at(&[9, 9, 9]).unwrap_err().kind(), ErrorKind::RankMismatch);
}

#[test]
fn at_mut_writes_through() {
    let mut a = Array2::<i32, 2, 2>::new();
    *a.at_mut(&[1, 0]).unwrap() = 7;
    assert_eq!(a.as_slice(), &[0, 0, 7, 0]);
    assert_eq!(a.at_mut(&[1]).unwrap_err().kind(), ErrorKind::RankMismatch);
}

#[test]
fn flat_indexing() {
    let mut a = Array1::<i32, 3>::from_vec(vec![1, 2, 3]).unwrap();
    assert_eq!(a[0], 1);
    a[2] = 9;
    assert_eq!(a[2], 9);
}

#[test]
#[should_panic]
fn flat_indexing_out_of_bounds() {
    let a = Array1::<i32, 3>::new();
    let _ = a[3];
}

#[test]
fn unchecked_access() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    unsafe {
        assert_eq!(*a.uget(0), 1);
        assert_eq!(*a.uget(5), 6);
    }
    let mut b = a.clone();
    unsafe {
        *b.uget_mut(3) = 0;
    }
    assert_eq!(b.as_slice(), &[1, 2, 3, 0, 5, 6]);
}

#[test]
fn size_and_rank_are_type_constants() {
    let a = Array3::<u8, 2, 3, 4>::new();
    assert_eq!(a.len(), 24);
    assert_eq!(a.ndim(), 3);
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(a.strides(), &[12, 4, 1]);
    assert!(!a.is_empty());
}

#[test]
fn scalar_array() {
    let mut a = Array0::<i32>::new();
    assert_eq!(a.len(), 1);
    assert_eq!(a.ndim(), 0);
    *a.at_mut(&[]).unwrap() = 5;
    assert_eq!(*a.at(&[]).unwrap(), 5);
    assert_eq!(a[0], 5);
}

#[test]
fn clone_is_deep() {
    let a = Array1::<i32, 3>::from_vec(vec![1, 2, 3]).unwrap();
    let mut b = a.clone();
    b[0] = 99;
    assert_eq!(a[0], 1);
    assert_eq!(b[0], 99);
    assert_ne!(a, b);
}

#[test]
fn move_transfers_storage() {
    let a = Array1::<i32, 3>::from_vec(vec![1, 2, 3]).unwrap();
    let b = a;
    // `a` is statically unusable from here on; the elements moved with `b`.
    assert_eq!(b[0], 1);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
}

#[test]
fn fill_and_swap() {
    let mut a = Array1::<i32, 4>::from_vec(vec![1, 2, 3, 4]).unwrap();
    a.swap(0, 3);
    assert_eq!(a.as_slice(), &[4, 2, 3, 1]);
    a.fill(0);
    assert_eq!(a.as_slice(), &[0; 4]);
}

#[test]
fn eq_across_owners_and_views() {
    let a = Array::<i32, Rank2<2, 2>>::from_vec(vec![1, 2, 3, 4]).unwrap();
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(a.view(), b.view());
    assert_eq!(a.view(), b);
    let c = Array::<i32, Rank2<2, 2>>::new();
    assert_ne!(a, c);
}

#[test]
fn hash_agrees_with_eq() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    let a = Array::<i32, Rank2<2, 2>>::from_vec(vec![1, 2, 3, 4]).unwrap();
    assert_eq!(hash_of(&a), hash_of(&a.clone()));
}

#[test]
fn as_ref_as_mut() {
    let mut a = Array1::<i32, 3>::from_vec(vec![1, 2, 3]).unwrap();
    let r: &[i32] = a.as_ref();
    assert_eq!(r, &[1, 2, 3]);
    let m: &mut [i32] = a.as_mut();
    m[0] = 10;
    assert_eq!(a[0], 10);
}

#[test]
fn empty_extent() {
    let a = Array2::<i32, 0, 3>::new();
    assert!(a.is_empty());
    assert_eq!(a.len(), 0);
    assert_eq!(a.iter().count(), 0);
    assert_eq!(a.at(&[0, 0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}
