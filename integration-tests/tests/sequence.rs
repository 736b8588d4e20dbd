use weft_core::{Container, Dense, Tagged};
use weft_dispatch::reduce_max;
use weft_seq::{Fibonacci, Phase};

#[test]
fn first_ten_terms() {
    let terms: Vec<u64> = Fibonacci::new(10).collect();
    assert_eq!(terms, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
}

#[test]
fn zero_terms() {
    let mut fib = Fibonacci::<u64>::new(0);
    assert_eq!(fib.next(), None);
    assert_eq!(fib.phase(), Phase::Done);
}

#[test]
fn instances_do_not_share_state() {
    let mut a = Fibonacci::<u64>::new(5);
    let mut b = Fibonacci::<u64>::new(5);

    a.next();
    a.next();
    a.next();

    assert_eq!(b.next(), Some(1));
    assert_eq!(a.next(), Some(3));
    assert_eq!(a.index(), 4);
    assert_eq!(b.index(), 1);
}

#[test]
fn terms_feed_a_container() {
    let terms = Dense::new(&[2, 5], Fibonacci::<u64>::new(10).collect()).unwrap();
    assert_eq!(terms.get(&[1, 0]), Ok(8_u64));

    let doubled = terms.map(Tagged::increasing(|x: u64| x * 2));
    assert_eq!(reduce_max(&doubled), Ok(110));
}
