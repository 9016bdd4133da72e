//! Folds.
//!
//! The step operation is a [`Binary`]: for [`FoldLeft`] the accumulator is
//! its first argument, for [`FoldRight`] its second. [`FoldLeftFirst`] seeds
//! from the pack's head instead of an explicit initial value and therefore
//! has no impl for the empty pack; feeding it one is a compile error, there
//! being nothing to seed from.

use crate::list::{Cons, List, Nil};
use crate::slot::Binary;
use crate::vessel::ContentOf;

/// Left-associated fold: `Op(...Op(Op(Init, E0), E1)..., En)`.
pub trait FoldLeft<Op, Init>: List {
    /// The accumulated result.
    type Out;
}

impl<Op, Init> FoldLeft<Op, Init> for Nil {
    type Out = Init;
}

impl<Op, Init, H, T> FoldLeft<Op, Init> for Cons<H, T>
where
    Op: Binary<Init, H>,
    T: FoldLeft<Op, <Op as Binary<Init, H>>::Out>,
{
    type Out = <T as FoldLeft<Op, <Op as Binary<Init, H>>::Out>>::Out;
}

/// Left-associated fold seeded from the first member.
///
/// Equal to `FoldLeft<Op, E0>` over the tail; undefined (no impl) for the
/// empty pack.
pub trait FoldLeftFirst<Op>: List {
    /// The accumulated result.
    type Out;
}

impl<Op, H, T: FoldLeft<Op, H>> FoldLeftFirst<Op> for Cons<H, T> {
    type Out = <T as FoldLeft<Op, H>>::Out;
}

/// Right-associated fold: `Op(E0, Op(E1, ...Op(En, Init)...))`.
pub trait FoldRight<Op, Init>: List {
    /// The accumulated result.
    type Out;
}

impl<Op, Init> FoldRight<Op, Init> for Nil {
    type Out = Init;
}

impl<Op, Init, H, T> FoldRight<Op, Init> for Cons<H, T>
where
    T: FoldRight<Op, Init>,
    Op: Binary<H, <T as FoldRight<Op, Init>>::Out>,
{
    type Out = <Op as Binary<H, <T as FoldRight<Op, Init>>::Out>>::Out;
}

/// The left fold of pack `P` under `Op`, seeded with `Init`.
pub type FoldedLeft<P, Op, Init> = <ContentOf<P> as FoldLeft<Op, Init>>::Out;

/// The left fold of pack `P` under `Op`, seeded from its first member.
pub type FoldedLeftFirst<P, Op> = <ContentOf<P> as FoldLeftFirst<Op>>::Out;

/// The right fold of pack `P` under `Op`, seeded with `Init`.
pub type FoldedRight<P, Op, Init> = <ContentOf<P> as FoldRight<Op, Init>>::Out;
