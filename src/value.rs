//! Type-level integers.
//!
//! A value pack carries its numbers as types: [`Constant`] holds a literal,
//! and arithmetic performed by operations stays symbolic ([`Sum`], [`Diff`])
//! with the result evaluated through the [`Value::VAL`] constant. Keeping the
//! arithmetic symbolic avoids any need for const expressions in generic
//! argument position; tests compare through [`Values`] or `VAL` rather than
//! through literal-type equality of computed results.

use core::marker::PhantomData;

use crate::list::{Cons, List, Nil};

/// A type-level integer.
pub trait Value: 'static {
    /// The integer this type denotes.
    const VAL: i64;
}

/// A literal type-level integer.
pub struct Constant<const V: i64>;

impl<const V: i64> Value for Constant<V> {
    const VAL: i64 = V;
}

/// The sum of two [`Value`]s, left unevaluated at the type level.
pub struct Sum<A, B>(PhantomData<(A, B)>);

impl<A: Value, B: Value> Value for Sum<A, B> {
    const VAL: i64 = A::VAL + B::VAL;
}

/// The difference of two [`Value`]s, left unevaluated at the type level.
///
/// Not commutative, which makes it the fixture of choice for pinning fold
/// associativity direction.
pub struct Diff<A, B>(PhantomData<(A, B)>);

impl<A: Value, B: Value> Value for Diff<A, B> {
    const VAL: i64 = A::VAL - B::VAL;
}

/// Renders a list of [`Value`]s to a `Vec<i64>`.
///
/// This is the bridge the tests use to compare a rewritten value pack
/// against its expected contents with a plain `assert_eq!`.
pub trait Values: List {
    /// Appends this list's values to `out`, front first.
    fn write_into(out: &mut Vec<i64>);

    /// Collects this list's values, front first.
    fn values() -> Vec<i64> {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::write_into(&mut out);
        out
    }
}

impl Values for Nil {
    fn write_into(_out: &mut Vec<i64>) {}
}

impl<H: Value, T: Values> Values for Cons<H, T> {
    fn write_into(out: &mut Vec<i64>) {
        out.push(H::VAL);
        T::write_into(out);
    }
}
