//! The inductive pack.
//!
//! [`Nil`]/[`Cons`] spell a pack as a cons chain so that every structural
//! operation can be written by induction on the spine: one impl for the base
//! shape, one for the step shape, and nothing else. Where the step must peel
//! the *last* element the recursion is split over `Cons<H, Nil>` and
//! `Cons<H, Cons<H2, T>>` instead, which keeps the impls coherent without
//! overlap.
//!
//! Lists are never constructed at run time; [`tlist!`](crate::tlist) and
//! [`vals!`](crate::vals) build them in type position.

use core::marker::PhantomData;

use crate::peano::{Peano, S, Z};

/// The empty pack.
pub struct Nil;

/// A pack with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// A cons-chain of members.
pub trait List {
    /// Number of members.
    const LEN: usize;
}

impl List for Nil {
    const LEN: usize = 0;
}

impl<H, T: List> List for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Appends `Rhs` after `Self`.
pub trait Concat<Rhs: List>: List {
    /// `Self` followed by `Rhs`.
    type Out: List;
}

impl<R: List> Concat<R> for Nil {
    type Out = R;
}

impl<R: List, H, T: Concat<R>> Concat<R> for Cons<H, T> {
    type Out = Cons<H, <T as Concat<R>>::Out>;
}

/// `L` followed by `R`.
pub type Joined<L, R> = <L as Concat<R>>::Out;

/// Reverses `Self` onto an accumulator.
///
/// `ReverseOnto<Nil>` is plain reversal; the accumulator form is what lets
/// the recursion run in one pass.
pub trait ReverseOnto<Acc: List>: List {
    /// `Self` reversed, followed by `Acc`.
    type Out: List;
}

impl<Acc: List> ReverseOnto<Acc> for Nil {
    type Out = Acc;
}

impl<Acc: List, H, T: ReverseOnto<Cons<H, Acc>>> ReverseOnto<Acc> for Cons<H, T> {
    type Out = <T as ReverseOnto<Cons<H, Acc>>>::Out;
}

/// `L` reversed.
pub type Reversed<L> = <L as ReverseOnto<Nil>>::Out;

/// Looks up the member at position `I`.
///
/// There is no impl once the index runs past the end, so an out-of-range
/// lookup does not compile.
pub trait AtIndex<I: Peano>: List {
    /// The member at position `I`.
    type Out;
}

impl<H, T: List> AtIndex<Z> for Cons<H, T> {
    type Out = H;
}

impl<I: Peano, H, T: AtIndex<I>> AtIndex<S<I>> for Cons<H, T> {
    type Out = <T as AtIndex<I>>::Out;
}

/// The member of `L` at position `I`.
pub type Picked<L, I> = <L as AtIndex<I>>::Out;

/// Partitions `Self` into the first `I` members and the rest.
pub trait SplitAt<I: Peano>: List {
    /// The first `I` members, in order.
    type Prefix: List;
    /// Everything after the first `I` members, in order.
    type Suffix: List;
}

impl<L: List> SplitAt<Z> for L {
    type Prefix = Nil;
    type Suffix = L;
}

impl<I: Peano, H, T: SplitAt<I>> SplitAt<S<I>> for Cons<H, T> {
    type Prefix = Cons<H, <T as SplitAt<I>>::Prefix>;
    type Suffix = <T as SplitAt<I>>::Suffix;
}

/// The first `I` members of `L`.
pub type PrefixOf<L, I> = <L as SplitAt<I>>::Prefix;

/// Everything after the first `I` members of `L`.
pub type SuffixOf<L, I> = <L as SplitAt<I>>::Suffix;

/// Detaches the last member of a non-empty pack.
///
/// The inverse of appending: `Joined<Rest, Cons<Last, Nil>>` reconstructs
/// the original list. The empty pack has no impl.
pub trait PopBack: List {
    /// Everything but the last member.
    type Rest: List;
    /// The last member.
    type Last;
}

impl<H> PopBack for Cons<H, Nil> {
    type Rest = Nil;
    type Last = H;
}

impl<H, H2, T> PopBack for Cons<H, Cons<H2, T>>
where
    Cons<H2, T>: PopBack,
{
    type Rest = Cons<H, <Cons<H2, T> as PopBack>::Rest>;
    type Last = <Cons<H2, T> as PopBack>::Last;
}

/// Concatenates `N` copies of `Self`.
pub trait Repeat<N: Peano>: List {
    /// `Self` repeated `N` times.
    type Out: List;
}

impl<L: List> Repeat<Z> for L {
    type Out = Nil;
}

impl<N: Peano, L> Repeat<S<N>> for L
where
    L: Repeat<N> + Concat<<L as Repeat<N>>::Out>,
{
    type Out = <L as Concat<<L as Repeat<N>>::Out>>::Out;
}

/// `L` repeated `N` times.
pub type Repeated<L, N> = <L as Repeat<N>>::Out;

/// Builds a [`Cons`] chain of types in type position.
///
/// `tlist!(A, B, C)` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::tlist!($($tail),*)>
    };
}

/// Builds a [`Cons`] chain of [`Constant`](crate::value::Constant)s in type
/// position.
///
/// `vals!(1, 2)` is `Cons<Constant<1>, Cons<Constant<2>, Nil>>`.
#[macro_export]
macro_rules! vals {
    () => { $crate::list::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::list::Cons<$crate::value::Constant<{ $head }>, $crate::vals!($($tail),*)>
    };
}
