//! The dispatcher.
//!
//! [`Convey`] is the single substitution point the rest of the crate funnels
//! through: every vessel implements it once for its own kind, unwrapping the
//! content list and re-invoking the supplied operation at the slot of that
//! kind. A caller writes [`Sent<P, Op>`](Sent) and stays oblivious to which
//! of the fourteen kinds `P` is; if `Op` lacks the needed slot there is no
//! impl to select and the call site fails to compile.
//!
//! [`Press`] chains the dispatch: a list of vessels, of freely mixed kinds,
//! is pressed through a curried operation one pack at a time, each step's
//! result becoming the operation for the next. This replaces any fixed-arity
//! enumeration of kind combinations, since every step routes independently.

use crate::kind;
use crate::list::{Cons, List, Nil};
use crate::slot;
use crate::vessel::Vessel;

/// Routes `Self`'s unwrapped contents into the matching slot of `Op`.
pub trait Convey<Op> {
    /// The operation's result for this pack's contents.
    type Out;
}

/// The result of conveying pack `P` into operation `Op`.
pub type Sent<P, Op> = <P as Convey<Op>>::Out;

macro_rules! routes {
    ($($K:ident),* $(,)?) => {
        $(
            impl<L: List, Op: slot::$K<L>> Convey<Op> for Vessel<kind::$K, L> {
                type Out = <Op as slot::$K<L>>::Out;
            }
        )*
    };
}

routes! {
    Mold, Page, Road, Rail, Flow, Sail, Snow, Hail, Cool, Calm, Grit, Will,
    Glow, Dawn,
}

/// Presses a list of vessels through a curried operation, left to right.
///
/// The first pack conveys into `Op`; whatever comes back is the operation
/// for the second pack, and so on. The final result is the last step's
/// output (or `Op` itself for the empty list). Kinds may differ freely
/// between steps.
pub trait Press<Op>: List {
    /// The operation after every pack has been pressed through it.
    type Out;
}

impl<Op> Press<Op> for Nil {
    type Out = Op;
}

impl<Op, H, T> Press<Op> for Cons<H, T>
where
    H: Convey<Op>,
    T: Press<Sent<H, Op>>,
{
    type Out = <T as Press<Sent<H, Op>>>::Out;
}

/// The result of pressing every pack in `Packs` through `Op`.
pub type Pressed<Packs, Op> = <Packs as Press<Op>>::Out;
