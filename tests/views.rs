use ndfixed::prelude::*;

#[test]
fn outer_begin_covers_first_stripe() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    let v = a.outer_begin();
    assert_eq!(v.ndim(), 1);
    assert_eq!(v.len(), 3);
    assert_eq!(v.shape(), &[3]);
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(*v.at(&[1]).unwrap(), 2);
}

#[test]
fn advance_walks_the_outer_axis() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    let mut v = a.outer_begin();
    v.advance();
    assert_eq!(v[1], 5);
    assert_eq!(v[1], *a.at(&[1, 1]).unwrap());
}

#[test]
fn view_agrees_with_owner_after_n_advances() {
    let a = Array3::<i32, 3, 2, 2>::from_vec((1..=12).collect()).unwrap();
    let mut v = a.outer_begin();
    let mut ix = [0; 2];
    for p in 0..3 {
        for j in 0..v.len() {
            <Rank2<2, 2>>::unflatten_into(j, &mut ix).unwrap();
            assert_eq!(v[j], *a.at(&[p, ix[0], ix[1]]).unwrap());
        }
        v.advance();
    }
}

#[test]
fn retreat_from_the_end_cursor() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    let mut v = a.outer_end();
    v.retreat();
    assert_eq!(v.as_slice(), &[4, 5, 6]);
    v.retreat();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn end_cursor_rejects_checked_access() {
    let a = Array::<i32, Rank2<2, 3>>::new();
    let v = a.outer_end();
    assert_eq!(v.at(&[0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn derailed_cursor_fails_loudly_not_silently() {
    let a = Array::<i32, Rank2<2, 3>>::new();
    let mut v = a.outer_begin();
    v.advance();
    v.advance();
    // Past the last stripe: same state as `outer_end()`.
    assert_eq!(v.at(&[0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
    // And below the first stripe.
    let mut w = a.outer_begin();
    w.retreat();
    assert_eq!(w.at(&[0]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn subview_selects_a_stripe() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.subview(0).unwrap().as_slice(), &[1, 2, 3]);
    assert_eq!(a.subview(1).unwrap().as_slice(), &[4, 5, 6]);
    assert_eq!(a.subview(2).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn mutation_through_a_view() {
    let mut a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    {
        let mut v = a.outer_begin_mut();
        v.advance();
        v[0] = 40;
        *v.at_mut(&[2]).unwrap() = 60;
    }
    assert_eq!(a.as_slice(), &[1, 2, 3, 40, 5, 60]);
}

#[test]
fn views_of_rank1_arrays_are_scalars() {
    let a = Array1::<i32, 3>::from_vec(vec![7, 8, 9]).unwrap();
    let mut v = a.outer_begin();
    assert_eq!(v.ndim(), 0);
    assert_eq!(v.len(), 1);
    v.advance();
    assert_eq!(*v.at(&[]).unwrap(), 8);
}

#[test]
fn whole_array_views() {
    let a = Array::<i32, Rank2<2, 2>>::from_vec(vec![1, 2, 3, 4]).unwrap();
    let v = a.view();
    assert_eq!(v, a);

    let mut b = Array1::<i32, 3>::new();
    b.view_mut().fill(5);
    assert_eq!(b.as_slice(), &[5, 5, 5]);
}

#[test]
fn views_of_views_walk_the_same_storage() {
    let a = Array3::<i32, 2, 2, 2>::from_vec((0..8).collect()).unwrap();
    let outer = a.subview(1).unwrap();
    let mut inner = outer.outer_begin();
    inner.advance();
    assert_eq!(inner.as_slice(), &[6, 7]);
}

#[test]
fn to_owned_detaches_from_the_owner() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    let mut o = a.outer_begin().to_owned();
    o[0] = 100;
    assert_eq!(a[0], 1);
    assert_eq!(o.as_slice(), &[100, 2, 3]);
}

#[test]
fn view_clone_is_the_same_cursor() {
    let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    let mut v = a.outer_begin();
    v.advance();
    let w = v.clone();
    assert_eq!(w.as_slice(), &[4, 5, 6]);
}
