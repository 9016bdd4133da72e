//! Elementwise rewriting.
//!
//! Three arrangements of "apply operations to members":
//!
//! - [`Map`]: one [`Unary`] operation over every member.
//! - [`Renovate`]: every operation in a pack applied to one entity.
//! - [`ZipApply`]: an operation pack and a member pack walked in lockstep,
//!   pairwise; the lengths must agree or no impl exists.
//!
//! [`Transform`] is the guarded map: only members whose [`Test`] verdict is
//! [`True`] are rewritten, the rest pass through untouched, so the
//! operation need not even be applicable to them.

use crate::list::{Cons, List, Nil, Reversed};
use crate::slot::{Test, Unary};
use crate::vessel::{ContentOf, Rehoused};

/// Rewrites every member of `Self` with `Op`.
pub trait Map<Op>: List {
    /// The rewritten pack, same length.
    type Out: List;
}

impl<Op> Map<Op> for Nil {
    type Out = Nil;
}

impl<Op: Unary<H>, H, T: Map<Op>> Map<Op> for Cons<H, T> {
    type Out = Cons<<Op as Unary<H>>::Out, <T as Map<Op>>::Out>;
}

/// Rewrites the members of `Self` whose `P` verdict is [`True`](crate::logic::True)
/// with `Op`; the rest pass through untouched.
pub trait Transform<P, Op>: List {
    /// The selectively rewritten pack, same length.
    type Out: List;
}

impl<P, Op> Transform<P, Op> for Nil {
    type Out = Nil;
}

impl<P, Op, H, T> Transform<P, Op> for Cons<H, T>
where
    P: Test<H>,
    T: Transform<P, Op>,
    <P as Test<H>>::Verdict: TransformStep<H, Op>,
{
    type Out = Cons<<<P as Test<H>>::Verdict as TransformStep<H, Op>>::Out, <T as Transform<P, Op>>::Out>;
}

/// Bool-dispatched rewrite step: apply `Op` on a hit, pass `H` through on a
/// miss. The `Op: Unary<H>` bound lives only on the hit arm, so `Op` need
/// not apply to members the predicate rejects.
pub trait TransformStep<H, Op> {
    /// The member after this step.
    type Out;
}

impl<H, Op: Unary<H>> TransformStep<H, Op> for crate::logic::True {
    type Out = <Op as Unary<H>>::Out;
}

impl<H, Op> TransformStep<H, Op> for crate::logic::False {
    type Out = H;
}

/// Applies every operation in `Self` to the single entity `X`.
pub trait Renovate<X>: List {
    /// One result per operation, in operation order.
    type Out: List;
}

impl<X> Renovate<X> for Nil {
    type Out = Nil;
}

impl<X, H: Unary<X>, T: Renovate<X>> Renovate<X> for Cons<H, T> {
    type Out = Cons<<H as Unary<X>>::Out, <T as Renovate<X>>::Out>;
}

/// Applies an operation pack to a member pack pairwise.
pub trait ZipApply<Ops: List>: List {
    /// The rewritten pack, same length as both inputs.
    type Out: List;
}

impl ZipApply<Nil> for Nil {
    type Out = Nil;
}

impl<OpH: Unary<H>, OpT: List, H, T: ZipApply<OpT>> ZipApply<Cons<OpH, OpT>> for Cons<H, T> {
    type Out = Cons<<OpH as Unary<H>>::Out, <T as ZipApply<OpT>>::Out>;
}

/// Pack `P` with every member rewritten by `Op`, kind preserved.
pub type Preened<P, Op> = Rehoused<P, <ContentOf<P> as Map<Op>>::Out>;

/// Pack `P` with the `Pred`-approved members rewritten by `Op`, kind
/// preserved.
pub type Transformed<P, Pred, Op> = Rehoused<P, <ContentOf<P> as Transform<Pred, Op>>::Out>;

/// Pack `P` rewritten pairwise by the operation pack `Ops`, kind preserved.
pub type Plumed<P, Ops> = Rehoused<P, <ContentOf<P> as ZipApply<ContentOf<Ops>>>::Out>;

/// Pack `P` reversed, kind preserved.
pub type Upended<P> = Rehoused<P, Reversed<ContentOf<P>>>;
