//! Continuation slots.
//!
//! An operation is any type implementing the slot trait of the kind it can
//! consume: [`Mold`] for type packs, [`Page`] for value packs, and so on up
//! the ladder. A composite operation may implement several slots at once;
//! the dispatcher ([`Convey`](crate::convey::Convey)) picks the one matching
//! the pack it is given.
//!
//! The fourteen traits are deliberately identical in shape and are stamped
//! from one skeleton; what distinguishes them is purely which kind of vessel
//! routes into them. Alongside them live the elementwise operation traits
//! ([`Unary`], [`Binary`], [`Test`], [`BinaryTest`]) used by the folds,
//! editors and predicates.

use crate::list::List;
use crate::logic::Bool;

macro_rules! slots {
    ($($K:ident => $Applied:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "Continuation slot for [`", stringify!($K),
                "`](crate::kind::", stringify!($K), ")-kind packs."
            )]
            pub trait $K<Args: List> {
                /// The operation's result for these arguments.
                type Out;
            }

            #[doc = concat!(
                "The result of applying `Op` at its [`", stringify!($K),
                "`] slot."
            )]
            pub type $Applied<Op, Args> = <Op as $K<Args>>::Out;
        )*
    };
}

slots! {
    Mold => Molded,
    Page => Paged,
    Road => Roaded,
    Rail => Railed,
    Flow => Flowed,
    Sail => Sailed,
    Snow => Snowed,
    Hail => Hailed,
    Cool => Cooled,
    Calm => Calmed,
    Grit => Gritted,
    Will => Willed,
    Glow => Glowed,
    Dawn => Dawned,
}

/// A single-argument operation, the shape a hormone takes in
/// [`ModifyAt`](crate::edit::ModifyAt).
pub trait Unary<X> {
    /// The rewritten element.
    type Out;
}

/// A two-argument operation, the step shape of the folds.
pub trait Binary<A, B> {
    /// The combined result.
    type Out;
}

/// A single-argument predicate.
pub trait Test<X> {
    /// Whether `X` passes.
    type Verdict: Bool;
}

/// A two-argument predicate, used by the interviews with one side curried.
pub trait BinaryTest<A, B> {
    /// Whether the pair passes.
    type Verdict: Bool;
}
