//! Index editors: splice, delete, rewrite and partition at known positions,
//! with the untouched members kept in order.

use kindling::edit::{Altered, Inserted, Modified, Removed, RemovedRun};
use kindling::list::{Joined, List, Nil, PopBack, PrefixOf, ReverseOnto, Reversed, SuffixOf};
use kindling::logic::Same;
use kindling::peano::{P0, P1, P2};
use kindling::segment::Segmented;
use kindling::sieve::Among;
use kindling::slot::Unary;
use kindling::value::{Constant, Sum, Value, Values};
use kindling::vessel::ContentOf;
use kindling::{capsule, shuttle, tlist, vals};

fn same<A: Same<B>, B>() {}

/// Adds one to a type-level integer, symbolically.
struct AddOne;

impl<V: Value> Unary<V> for AddOne {
    type Out = Sum<V, Constant<1>>;
}

/// A list-valued hormone: reverses the run it is handed.
struct FlipRun;

impl<L: ReverseOnto<Nil>> Unary<L> for FlipRun {
    type Out = Reversed<L>;
}

/// A list-valued hormone: discards the run it is handed.
struct DropRun;

impl<L: List> Unary<L> for DropRun {
    type Out = Nil;
}

#[test]
fn insert_splices_at_the_position() {
    same::<Inserted<capsule!(u8, u16, u32), P1, tlist!(bool)>, capsule!(u8, bool, u16, u32)>();
    // both ends of a one-member pack are valid positions
    same::<Inserted<capsule!(u8), P0, tlist!(bool)>, capsule!(bool, u8)>();
    same::<Inserted<capsule!(u8), P1, tlist!(bool)>, capsule!(u8, bool)>();
    // the spliced pack may have any length
    same::<Inserted<shuttle!(1, 4), P1, vals!(2, 3)>, shuttle!(1, 2, 3, 4)>();
}

#[test]
fn remove_deletes_one_member_or_a_run() {
    same::<Removed<capsule!(u8, u16, u32), P1>, capsule!(u8, u32)>();
    same::<RemovedRun<shuttle!(1, 2, 3, 4), P1, P2>, shuttle!(1, 4)>();
    // a zero-length run is the identity
    same::<RemovedRun<shuttle!(1, 2), P1, P0>, shuttle!(1, 2)>();
}

#[test]
fn modify_touches_only_its_slot() {
    type After = Modified<shuttle!(10, 20, 30), P1, AddOne>;
    assert_eq!(<ContentOf<After> as Values>::values(), vec![10, 21, 30]);
}

#[test]
fn alter_replaces_a_whole_run() {
    type Flipped = Altered<shuttle!(1, 2, 3, 4), P1, P2, FlipRun>;
    assert_eq!(<ContentOf<Flipped> as Values>::values(), vec![1, 3, 2, 4]);

    // the replacement may shrink the pack
    type Shrunk = Altered<shuttle!(1, 2, 3), P0, P2, DropRun>;
    assert_eq!(<ContentOf<Shrunk> as Values>::values(), vec![3]);
}

#[test]
fn split_and_segment_cut_by_counts() {
    same::<PrefixOf<tlist!(u8, u16, u32), P2>, tlist!(u8, u16)>();
    same::<SuffixOf<tlist!(u8, u16, u32), P2>, tlist!(u32)>();

    same::<
        Segmented<vals!(1, 2, 3, 4, 5), tlist!(P2, P2)>,
        tlist!(vals!(1, 2), vals!(3, 4), vals!(5)),
    >();
    // the remainder chunk is present even when empty
    same::<Segmented<vals!(1, 2), tlist!(P2)>, tlist!(vals!(1, 2), Nil)>();
    // no cut points: one chunk, the whole pack
    same::<Segmented<vals!(1, 2), Nil>, tlist!(vals!(1, 2))>();
}

#[test]
fn pop_back_round_trips() {
    type L = vals!(7, 8, 9);
    same::<Joined<<L as PopBack>::Rest, tlist!(<L as PopBack>::Last)>, L>();
    assert_eq!(<<L as PopBack>::Rest as Values>::values(), vec![7, 8]);
    assert_eq!(<<L as PopBack>::Last as Value>::VAL, 9);
}

#[test]
fn among_picks_by_position() {
    same::<Among<capsule!(u8, u16, u32), P0>, u8>();
    same::<Among<capsule!(u8, u16, u32), P2>, u32>();
    assert_eq!(<Among<shuttle!(4, 5, 6), P1> as Value>::VAL, 5);

    assert_eq!(<ContentOf<capsule!(u8, u16)> as List>::LEN, 2);
}
