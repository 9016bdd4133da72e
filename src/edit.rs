//! Index-based editors.
//!
//! Four ways to rewrite a pack at a position, all zero-indexed from the
//! front, all order-preserving for the untouched members, and all without a
//! runtime bounds check: a position outside the valid range leaves no impl
//! and the use site does not compile.
//!
//! - [`InsertAt`]: splice a pack in at a position in `[0, len]`.
//! - [`RemoveAt`] / [`RemoveRun`]: delete one member, or a run of them,
//!   at a position in `[0, len)`.
//! - [`ModifyAt`]: rewrite the single member at a position with a hormone
//!   (a [`Unary`] operation), leaving the pack's length unchanged.
//! - [`AlterAt`]: hand the run of members at a position to a list-valued
//!   operation and splice whatever comes back, which may change the
//!   length.
//!
//! The vessel-level aliases rebuild the result under the source pack's own
//! kind tag.

use crate::list::{Concat, Cons, Joined, List, PrefixOf, SplitAt, SuffixOf};
use crate::peano::{Peano, S, Z};
use crate::slot::Unary;
use crate::vessel::{ContentOf, Rehoused};

/// Splices the pack `New` into `Self` so that it starts at position `I`.
pub trait InsertAt<I: Peano, New: List>: List {
    /// The spliced pack.
    type Out: List;
}

impl<L: List, New: Concat<L>> InsertAt<Z, New> for L {
    type Out = Joined<New, L>;
}

impl<I: Peano, New: List, H, T: InsertAt<I, New>> InsertAt<S<I>, New> for Cons<H, T> {
    type Out = Cons<H, <T as InsertAt<I, New>>::Out>;
}

/// Deletes the member at position `I`.
pub trait RemoveAt<I: Peano>: List {
    /// The shortened pack.
    type Out: List;
}

impl<H, T: List> RemoveAt<Z> for Cons<H, T> {
    type Out = T;
}

impl<I: Peano, H, T: RemoveAt<I>> RemoveAt<S<I>> for Cons<H, T> {
    type Out = Cons<H, <T as RemoveAt<I>>::Out>;
}

/// Deletes the run of `N` members starting at position `I`.
pub trait RemoveRun<I: Peano, N: Peano>: List {
    /// The shortened pack.
    type Out: List;
}

impl<I: Peano, N: Peano, L> RemoveRun<I, N> for L
where
    L: SplitAt<I>,
    SuffixOf<L, I>: SplitAt<N>,
    PrefixOf<L, I>: Concat<SuffixOf<SuffixOf<L, I>, N>>,
{
    type Out = Joined<PrefixOf<L, I>, SuffixOf<SuffixOf<L, I>, N>>;
}

/// Rewrites the member at position `I` with the hormone `Op`.
pub trait ModifyAt<I: Peano, Op>: List {
    /// The pack with the targeted member rewritten.
    type Out: List;
}

impl<Op: Unary<H>, H, T: List> ModifyAt<Z, Op> for Cons<H, T> {
    type Out = Cons<<Op as Unary<H>>::Out, T>;
}

impl<I: Peano, Op, H, T: ModifyAt<I, Op>> ModifyAt<S<I>, Op> for Cons<H, T> {
    type Out = Cons<H, <T as ModifyAt<I, Op>>::Out>;
}

/// Hands the run of `N` members at position `I` to `Op` and splices the
/// returned pack back in its place.
///
/// `Op` is a [`Unary`] operation from the extracted sub-list to a
/// replacement list, so an alteration may grow or shrink the pack.
pub trait AlterAt<I: Peano, N: Peano, Op>: List {
    /// The pack with the targeted run replaced.
    type Out: List;
}

impl<I: Peano, N: Peano, Op, L> AlterAt<I, N, Op> for L
where
    L: SplitAt<I>,
    SuffixOf<L, I>: SplitAt<N>,
    Op: Unary<PrefixOf<SuffixOf<L, I>, N>>,
    <Op as Unary<PrefixOf<SuffixOf<L, I>, N>>>::Out: Concat<SuffixOf<SuffixOf<L, I>, N>>,
    PrefixOf<L, I>:
        Concat<Joined<<Op as Unary<PrefixOf<SuffixOf<L, I>, N>>>::Out, SuffixOf<SuffixOf<L, I>, N>>>,
{
    type Out = Joined<
        PrefixOf<L, I>,
        Joined<<Op as Unary<PrefixOf<SuffixOf<L, I>, N>>>::Out, SuffixOf<SuffixOf<L, I>, N>>,
    >;
}

/// `P` with `New` spliced in at position `I`, kind preserved.
pub type Inserted<P, I, New> = Rehoused<P, <ContentOf<P> as InsertAt<I, New>>::Out>;

/// `P` with the member at position `I` removed, kind preserved.
pub type Removed<P, I> = Rehoused<P, <ContentOf<P> as RemoveAt<I>>::Out>;

/// `P` with the run of `N` members at position `I` removed, kind preserved.
pub type RemovedRun<P, I, N> = Rehoused<P, <ContentOf<P> as RemoveRun<I, N>>::Out>;

/// `P` with the member at position `I` rewritten by `Op`, kind preserved.
pub type Modified<P, I, Op> = Rehoused<P, <ContentOf<P> as ModifyAt<I, Op>>::Out>;

/// `P` with the run of `N` members at position `I` replaced through `Op`,
/// kind preserved.
pub type Altered<P, I, N, Op> = Rehoused<P, <ContentOf<P> as AlterAt<I, N, Op>>::Out>;
