//! Predicate-driven selection and search.
//!
//! [`Sieve`] keeps the members a [`Test`] approves, in order. [`Find`]
//! walks the pack front to back and reports whether a member passed and, if
//! so, where; the "where" is a [`Peano`] index that is meaningful only when
//! `Found` is [`True`]. The interviews are `Find` with one side of a
//! [`BinaryTest`] curried: [`LeftInterview`] seats the interviewer on the
//! left of each member, [`RightInterview`] on the right.
//!
//! [`Among`] is the positional inverse: the member at a known index, a
//! compile error outside `[0, len)`.

use crate::list::{Cons, List, Nil, Picked};
use crate::logic::{Bool, False, True};
use crate::peano::{Peano, S, Z};
use crate::slot::{BinaryTest, Test};
use crate::vessel::ContentOf;

/// Keeps the members of `Self` whose [`Test`] verdict is [`True`].
pub trait Sieve<P>: List {
    /// The surviving members, in their original order.
    type Out: List;
}

impl<P> Sieve<P> for Nil {
    type Out = Nil;
}

impl<P, H, T> Sieve<P> for Cons<H, T>
where
    P: Test<H>,
    T: Sieve<P>,
    <P as Test<H>>::Verdict: SelectCons<H, <T as Sieve<P>>::Out>,
{
    type Out = <<P as Test<H>>::Verdict as SelectCons<H, <T as Sieve<P>>::Out>>::Out;
}

/// Bool-dispatched cons: keep `H` in front of `T` or drop it.
pub trait SelectCons<H, T: List> {
    /// `Cons<H, T>` under [`True`], `T` under [`False`].
    type Out: List;
}

impl<H, T: List> SelectCons<H, T> for True {
    type Out = Cons<H, T>;
}

impl<H, T: List> SelectCons<H, T> for False {
    type Out = T;
}

/// The members of `L` passing `P`, in order.
pub type Sieved<L, P> = <L as Sieve<P>>::Out;

/// Searches front to back for the first member passing `P`.
pub trait Find<P>: List {
    /// Whether any member passed.
    type Found: Bool;
    /// The index of the first passing member; meaningful only when
    /// `Found` is [`True`].
    type Index: Peano;
}

impl<P> Find<P> for Nil {
    type Found = False;
    type Index = Z;
}

impl<P, H, T> Find<P> for Cons<H, T>
where
    P: Test<H>,
    T: Find<P>,
    <P as Test<H>>::Verdict: FindStep<<T as Find<P>>::Found, <T as Find<P>>::Index>,
{
    type Found =
        <<P as Test<H>>::Verdict as FindStep<<T as Find<P>>::Found, <T as Find<P>>::Index>>::Found;
    type Index =
        <<P as Test<H>>::Verdict as FindStep<<T as Find<P>>::Found, <T as Find<P>>::Index>>::Index;
}

/// Bool-dispatched search step: a hit pins index zero, a miss defers to the
/// tail and shifts its index by one.
pub trait FindStep<TailFound: Bool, TailIndex: Peano> {
    /// Verdict after this member.
    type Found: Bool;
    /// Index after this member.
    type Index: Peano;
}

impl<F: Bool, I: Peano> FindStep<F, I> for True {
    type Found = True;
    type Index = Z;
}

impl<F: Bool, I: Peano> FindStep<F, I> for False {
    type Found = F;
    type Index = S<I>;
}

/// Whether any member of `L` passes `P`.
pub type FoundIn<L, P> = <L as Find<P>>::Found;

/// The index of the first member of `L` passing `P`.
pub type IndexIn<L, P> = <L as Find<P>>::Index;

/// Searches for the first member `X` with `P(A, X)` true.
pub trait LeftInterview<P, A>: List {
    /// Whether any member passed.
    type Found: Bool;
    /// The index of the first passing member; meaningful only when
    /// `Found` is [`True`].
    type Index: Peano;
}

impl<P, A> LeftInterview<P, A> for Nil {
    type Found = False;
    type Index = Z;
}

impl<P, A, H, T> LeftInterview<P, A> for Cons<H, T>
where
    P: BinaryTest<A, H>,
    T: LeftInterview<P, A>,
    <P as BinaryTest<A, H>>::Verdict:
        FindStep<<T as LeftInterview<P, A>>::Found, <T as LeftInterview<P, A>>::Index>,
{
    type Found = <<P as BinaryTest<A, H>>::Verdict as FindStep<
        <T as LeftInterview<P, A>>::Found,
        <T as LeftInterview<P, A>>::Index,
    >>::Found;
    type Index = <<P as BinaryTest<A, H>>::Verdict as FindStep<
        <T as LeftInterview<P, A>>::Found,
        <T as LeftInterview<P, A>>::Index,
    >>::Index;
}

/// Searches for the first member `X` with `P(X, A)` true.
pub trait RightInterview<P, A>: List {
    /// Whether any member passed.
    type Found: Bool;
    /// The index of the first passing member; meaningful only when
    /// `Found` is [`True`].
    type Index: Peano;
}

impl<P, A> RightInterview<P, A> for Nil {
    type Found = False;
    type Index = Z;
}

impl<P, A, H, T> RightInterview<P, A> for Cons<H, T>
where
    P: BinaryTest<H, A>,
    T: RightInterview<P, A>,
    <P as BinaryTest<H, A>>::Verdict:
        FindStep<<T as RightInterview<P, A>>::Found, <T as RightInterview<P, A>>::Index>,
{
    type Found = <<P as BinaryTest<H, A>>::Verdict as FindStep<
        <T as RightInterview<P, A>>::Found,
        <T as RightInterview<P, A>>::Index,
    >>::Found;
    type Index = <<P as BinaryTest<H, A>>::Verdict as FindStep<
        <T as RightInterview<P, A>>::Found,
        <T as RightInterview<P, A>>::Index,
    >>::Index;
}

/// The member of pack `P` at position `I`.
pub type Among<P, I> = Picked<ContentOf<P>, I>;
