//! The dispatcher is the part everything else leans on: one `Sent` spelling
//! per call site, whatever the kind of the pack being sent.

use core::marker::PhantomData;

use kindling::convey::{Pressed, Sent};
use kindling::list::{Concat, Joined, List, Nil, ReverseOnto};
use kindling::logic::Same;
use kindling::pipeline::{Roam, Rove, Trekked, Tripped, Unveiled};
use kindling::slot;
use kindling::slot::Unary;
use kindling::value::{Constant, Sum, Value, Values};
use kindling::vessel::{Capsule, Carrier, ContentOf, Halcyon, Shuttle, Vehicle};
use kindling::{capsule, shuttle, tlist, vals};
use static_assertions::assert_type_eq_all;

fn same<A: Same<B>, B>() {}

/// Flips the contents of whatever pack it is given. Implements four slots,
/// so the same operation serves four kinds.
struct Flip;

impl<L: ReverseOnto<Nil>> slot::Mold<L> for Flip {
    type Out = Capsule<L::Out>;
}
impl<L: ReverseOnto<Nil>> slot::Page<L> for Flip {
    type Out = Shuttle<L::Out>;
}
impl<L: ReverseOnto<Nil>> slot::Road<L> for Flip {
    type Out = Vehicle<L::Out>;
}
impl<L: ReverseOnto<Nil>> slot::Rail<L> for Flip {
    type Out = Carrier<L::Out>;
}

/// Lifts a value pack into a type pack of its `Constant`s.
struct Promote;

impl<L: List> slot::Page<L> for Promote {
    type Out = Capsule<L>;
}

/// Adds one to a type-level integer, symbolically.
struct AddOne;

impl<V: Value> Unary<V> for AddOne {
    type Out = Sum<V, Constant<1>>;
}

#[test]
fn kind_ladder_pairs_up() {
    use kindling::kind::{Calm, Cool, Dawn, Flow, Glow, Grit, Hail, Kind, Mold, Page, Rail, Road, Sail, Snow, Will};

    // every level of the ladder has a type-rooted and a value-rooted member
    assert_eq!(Mold::LEVEL, Page::LEVEL);
    assert_eq!(Road::LEVEL, Rail::LEVEL);
    assert_eq!(Flow::LEVEL, Sail::LEVEL);
    assert_eq!(Snow::LEVEL, Hail::LEVEL);
    assert_eq!(Cool::LEVEL, Calm::LEVEL);
    assert_eq!(Grit::LEVEL, Will::LEVEL);
    assert_eq!(Glow::LEVEL, Dawn::LEVEL);

    // a level-n pack holds operations over level n-1 packs
    assert_eq!(Road::LEVEL, Mold::LEVEL + 1);
    assert_eq!(Dawn::LEVEL, 6);

    assert_eq!(Page::NAME, "Page");
    assert_eq!(Dawn::NAME, "Dawn");
}

#[test]
fn convey_routes_by_kind() {
    same::<Sent<capsule!(i8, i16, i32), Flip>, capsule!(i32, i16, i8)>();
    same::<Sent<shuttle!(1, 2, 3), Flip>, shuttle!(3, 2, 1)>();
    // a pack of operations is a pack like any other
    same::<Sent<Vehicle<tlist!(Flip, Promote)>, Flip>, Vehicle<tlist!(Promote, Flip)>>();
    same::<Sent<Carrier<tlist!(AddOne)>, Flip>, Carrier<tlist!(AddOne)>>();

    assert_eq!(
        <ContentOf<Sent<shuttle!(4, 5), Flip>> as Values>::values(),
        vec![5, 4]
    );
}

/// Flips a level-four pack; the routing is the same as at level zero.
struct SpinHalcyon;

impl<L: ReverseOnto<Nil>> slot::Calm<L> for SpinHalcyon {
    type Out = Halcyon<L::Out>;
}

#[test]
fn convey_reaches_the_high_kinds_too() {
    same::<Sent<Halcyon<tlist!(u8, u16)>, SpinHalcyon>, Halcyon<tlist!(u16, u8)>>();
}

#[test]
fn convey_result_feeds_the_next_convey() {
    // Promote changes the kind mid-flight; Flip then works on a type pack.
    type Step1 = Sent<shuttle!(1, 2, 3), Promote>;
    type Step2 = Sent<Step1, Flip>;
    assert_type_eq_all!(Step2, Capsule<vals!(3, 2, 1)>);
}

/// A curried gatherer: each pack pressed through it joins an accumulator.
struct Gather;

struct GatherWith<Acc>(PhantomData<Acc>);

impl<L: List> slot::Mold<L> for Gather {
    type Out = GatherWith<L>;
}
impl<L: List> slot::Page<L> for Gather {
    type Out = GatherWith<L>;
}
impl<Acc: Concat<L>, L: List> slot::Mold<L> for GatherWith<Acc> {
    type Out = GatherWith<Joined<Acc, L>>;
}
impl<Acc: Concat<L>, L: List> slot::Page<L> for GatherWith<Acc> {
    type Out = GatherWith<Joined<Acc, L>>;
}

#[test]
fn press_chains_mixed_kinds() {
    // three packs of two different kinds, one continuation
    type Out = Pressed<tlist!(capsule!(u8, u16), shuttle!(7), capsule!(bool)), Gather>;
    same::<Out, GatherWith<tlist!(u8, u16, Constant<7>, bool)>>();

    // the empty pack list returns the continuation untouched
    same::<Pressed<Nil, Gather>, Gather>();
}

#[test]
fn trek_threads_stages_left_to_right() {
    type Out = Trekked<tlist!(Promote, Flip), shuttle!(1, 2, 3)>;
    assert_type_eq_all!(Out, Capsule<vals!(3, 2, 1)>);

    // no stages: the input comes back as-is
    same::<Trekked<Nil, shuttle!(9)>, shuttle!(9)>();
}

#[test]
fn trip_chains_unary_stages() {
    type Out = Tripped<tlist!(AddOne, AddOne), Constant<5>>;
    assert_eq!(<Out as Value>::VAL, 7);
}

#[test]
fn rove_keeps_its_wrapper_through_a_journey() {
    // the first stage wraps; later stages convey through the wrapper
    type Out = Trekked<tlist!(Rove<Promote>, Flip), shuttle!(1, 2)>;
    assert_type_eq_all!(Unveiled<Out>, Capsule<vals!(2, 1)>);

    // Roam is the same lift under its other name
    same::<Unveiled<Trekked<tlist!(Roam<Promote>), shuttle!(9)>>, Capsule<vals!(9)>>();
}
