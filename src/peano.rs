//! Unary type-level numbers.
//!
//! Pack positions are spelled in unary: [`Z`] is index zero and [`S`] is the
//! successor. An index that walks off the end of a pack leaves no impl to
//! select, so out-of-range access is a compile error rather than a guarded
//! lookup.

use core::marker::PhantomData;

/// A unary type-level number.
pub trait Peano: 'static {
    /// The runtime reflection of this number.
    const USIZE: usize;
}

/// Zero.
pub struct Z;

impl Peano for Z {
    const USIZE: usize = 0;
}

/// The successor of `N`.
pub struct S<N>(PhantomData<N>);

impl<N: Peano> Peano for S<N> {
    const USIZE: usize = 1 + N::USIZE;
}

/// Index 0.
pub type P0 = Z;
/// Index 1.
pub type P1 = S<P0>;
/// Index 2.
pub type P2 = S<P1>;
/// Index 3.
pub type P3 = S<P2>;
/// Index 4.
pub type P4 = S<P3>;
/// Index 5.
pub type P5 = S<P4>;
/// Index 6.
pub type P6 = S<P5>;
/// Index 7.
pub type P7 = S<P6>;
/// Index 8.
pub type P8 = S<P7>;
/// Index 9.
pub type P9 = S<P8>;
