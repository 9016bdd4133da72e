//! The closed family of kind markers.
//!
//! A kind names the shape of a pack's members. The family is fixed and
//! [`Kind`] is sealed: the dispatcher and the probe aliases enumerate it
//! exhaustively, and nothing outside the crate can extend it. Each level of
//! the ladder comes in a pair, one member for the type-rooted column and one
//! for the value-rooted column.

mod sealed {
    pub trait Sealed {}
}

/// A kind marker. Sealed; the fourteen markers in this module are the whole
/// family.
pub trait Kind: sealed::Sealed + 'static {
    /// Meta-level of the kind: 0 for member packs, `n + 1` for packs of
    /// level-`n` operations.
    const LEVEL: usize;

    /// The marker's name, for diagnostics in tests.
    const NAME: &'static str;
}

macro_rules! kinds {
    ($($(#[$meta:meta])* $K:ident => $level:expr),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $K;

            impl sealed::Sealed for $K {}

            impl Kind for $K {
                const LEVEL: usize = $level;
                const NAME: &'static str = stringify!($K);
            }
        )*
    };
}

kinds! {
    /// Packs of plain types.
    Mold => 0,
    /// Packs of type-level values.
    Page => 0,
    /// Packs of operations over type packs.
    Road => 1,
    /// Packs of operations over value packs.
    Rail => 1,
    /// Packs of operations over [`Road`]-kind packs.
    Flow => 2,
    /// Packs of operations over [`Rail`]-kind packs.
    Sail => 2,
    /// Packs of operations over [`Flow`]-kind packs.
    Snow => 3,
    /// Packs of operations over [`Sail`]-kind packs.
    Hail => 3,
    /// Packs of operations over [`Snow`]-kind packs.
    Cool => 4,
    /// Packs of operations over [`Hail`]-kind packs.
    Calm => 4,
    /// Packs of operations over [`Cool`]-kind packs.
    Grit => 5,
    /// Packs of operations over [`Calm`]-kind packs.
    Will => 5,
    /// Packs of operations over [`Grit`]-kind packs.
    Glow => 6,
    /// Packs of operations over [`Will`]-kind packs.
    Dawn => 6,
}
