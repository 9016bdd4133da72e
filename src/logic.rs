//! Type-level booleans.
//!
//! [`True`] and [`False`] are zero-sized markers; [`Bool`] lets generic code
//! branch on them through associated types instead of runtime `if`. The
//! probe aggregations and the predicate-driven combinators are the main
//! consumers.

/// A type-level boolean, either [`True`] or [`False`].
pub trait Bool: 'static + Sized {
    /// The runtime reflection of this boolean.
    const VALUE: bool;

    /// Logical negation.
    type Not: Bool;

    /// Logical conjunction with `B`.
    type And<B: Bool>: Bool;

    /// Logical disjunction with `B`.
    type Or<B: Bool>: Bool;

    /// Selects `A` when this boolean is [`True`], `B` otherwise.
    type IfElse<A, B>;
}

/// The type-level boolean value of true.
pub struct True;

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type IfElse<A, B> = A;
}

/// The type-level boolean value of false.
pub struct False;

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type IfElse<A, B> = B;
}

/// Conjunction of two [`Bool`]s.
pub type And<A, B> = <A as Bool>::And<B>;

/// Disjunction of two [`Bool`]s.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// Negation of a [`Bool`].
pub type Not<A> = <A as Bool>::Not;

/// Branch selection on a [`Bool`].
pub type IfElse<C, A, B> = <C as Bool>::IfElse<A, B>;

/// Holds exactly when `Self` and `T` are the same type.
///
/// The only impl is the reflexive one, so a bound `A: Same<B>` is a
/// compile-time equality assertion.
pub trait Same<T> {}

impl<T> Same<T> for T {}
