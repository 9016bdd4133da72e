//! Gap-size partitioning.
//!
//! [`SegmentBy`] turns a compact "how many members before each cut point"
//! encoding into the concrete partition: given gap sizes `c1, c2, ...` it
//! carves the pack into a chunk of `c1` members, then `c2`, and so on, with
//! whatever remains as the final chunk. The editors use the same
//! [`SplitAt`](crate::list::SplitAt) engine one cut at a time; `SegmentBy`
//! is the whole partition at once.
//!
//! A gap size larger than what remains leaves no [`SplitAt`] impl to
//! select, so an overlong cut list does not compile.

use crate::list::{Cons, List, Nil, PrefixOf, SplitAt, SuffixOf};
use crate::peano::Peano;

/// Partitions `Self` into chunks by a list of gap sizes.
pub trait SegmentBy<Counts: List>: List {
    /// The chunks, in order; the final chunk is the remainder and is
    /// present even when empty.
    type Chunks: List;
}

impl<L: List> SegmentBy<Nil> for L {
    type Chunks = Cons<L, Nil>;
}

impl<C: Peano, Cs: List, L> SegmentBy<Cons<C, Cs>> for L
where
    L: SplitAt<C>,
    SuffixOf<L, C>: SegmentBy<Cs>,
{
    type Chunks = Cons<PrefixOf<L, C>, <SuffixOf<L, C> as SegmentBy<Cs>>::Chunks>;
}

/// The chunk partition of `L` under gap sizes `Counts`.
pub type Segmented<L, Counts> = <L as SegmentBy<Counts>>::Chunks;
