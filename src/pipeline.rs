//! Staged pipelines.
//!
//! [`Journey`] threads a vessel through a list of stage operations left to
//! right, each step routed by [`Convey`], so a pipeline may change the kind
//! of its working pack at every stage without any glue at the call site.
//! [`Route`] is the per-element sibling: a chain of [`Unary`] rewrites of a
//! single entity. [`Trekked`] and [`Tripped`] are their terminal
//! evaluations.
//!
//! [`Rove`] lifts one base operation (its *radio*) into a bind: the radio's
//! result comes back wrapped in `Rove` again, and a `Rove`-wrapped vessel
//! still conveys, so the wrapper rides along a whole journey and is peeled
//! once at the end with [`Unveil`].

use core::marker::PhantomData;

use crate::convey::{Convey, Sent};
use crate::list::{Cons, List, Nil};
use crate::slot;
use crate::slot::Unary;

/// Threads the vessel `Input` through `Self`'s stages, left to right.
pub trait Journey<Input>: List {
    /// The final stage's output.
    type Out;
}

impl<I> Journey<I> for Nil {
    type Out = I;
}

impl<I, H, T> Journey<I> for Cons<H, T>
where
    I: Convey<H>,
    T: Journey<Sent<I, H>>,
{
    type Out = <T as Journey<Sent<I, H>>>::Out;
}

/// The result of trekking `Input` through the stage pack `Stages`.
pub type Trekked<Stages, Input> = <Stages as Journey<Input>>::Out;

/// Rewrites a single entity through `Self`'s [`Unary`] stages, left to
/// right.
pub trait Route<X>: List {
    /// The final stage's output.
    type Out;
}

impl<X> Route<X> for Nil {
    type Out = X;
}

impl<X, H, T> Route<X> for Cons<H, T>
where
    H: Unary<X>,
    T: Route<<H as Unary<X>>::Out>,
{
    type Out = <T as Route<<H as Unary<X>>::Out>>::Out;
}

/// The result of tripping `X` through the stage pack `Stages`.
pub type Tripped<Stages, X> = <Stages as Route<X>>::Out;

/// Lifts the operation `Radio` into a bind: results come back `Rove`-wrapped
/// and keep conveying, stage after stage, until [`Unveil`] peels the
/// wrapper.
pub struct Rove<Radio>(PhantomData<Radio>);

macro_rules! roves {
    ($($K:ident),* $(,)?) => {
        $(
            impl<L: List, R: slot::$K<L>> slot::$K<L> for Rove<R> {
                type Out = Rove<<R as slot::$K<L>>::Out>;
            }
        )*
    };
}

roves! {
    Mold, Page, Road, Rail, Flow, Sail, Snow, Hail, Cool, Calm, Grit, Will,
    Glow, Dawn,
}

impl<Op, X: Convey<Op>> Convey<Op> for Rove<X> {
    type Out = Rove<Sent<X, Op>>;
}

/// Peels one [`Rove`] wrapper.
pub trait Unveil {
    /// The wrapped payload.
    type Out;
}

impl<X> Unveil for Rove<X> {
    type Out = X;
}

/// The payload under a [`Rove`] wrapper.
pub type Unveiled<R> = <R as Unveil>::Out;

/// Synonym of [`Rove`]: with a single generic carrier, roving over
/// containers and roaming over sequences are the same lift.
pub type Roam<Radio> = Rove<Radio>;

/// Synonym of [`Rove`], kept for the same reason as [`Roam`].
pub type Travel<Radio> = Rove<Radio>;
