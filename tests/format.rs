use ndfixed::prelude::*;

#[test]
fn display_rank0() {
    let mut a = Array0::<i32>::new();
    *a.at_mut(&[]).unwrap() = 5;
    assert_eq!(format!("{}", a), "5");
}

#[test]
fn display_rank1() {
    let a = Array1::<i32, 3>::from_vec(vec![1, 2, 3]).unwrap();
    assert_eq!(format!("{}", a), "[1, 2, 3]");
}

#[test]
fn display_rank2() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(
        format!("{}", a),
        "[[1, 2, 3],\n \
         [4, 5, 6]]"
    );
}

#[test]
fn display_rank3() {
    let a = Array3::<i32, 2, 2, 2>::from_vec((0..8).collect()).unwrap();
    assert_eq!(
        format!("{}", a),
        "[[[0, 1],\n  \
           [2, 3]],\n \
          [[4, 5],\n  \
           [6, 7]]]"
    );
}

#[test]
fn display_a_view() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(format!("{}", a.subview(1).unwrap()), "[4, 5, 6]");
}

#[test]
fn debug_appends_layout() {
    let a = Array1::<i32, 2>::from_vec(vec![1, 2]).unwrap();
    assert_eq!(format!("{:?}", a), "[1, 2] shape=[2], strides=[1], ndim=1");
}

#[test]
fn display_empty() {
    let a = Array1::<i32, 0>::new();
    assert_eq!(format!("{}", a), "[]");
}
