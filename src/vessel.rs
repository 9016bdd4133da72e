//! Vessels: packs made portable.
//!
//! [`Vessel`] tags an inductive list with the kind of its members so the
//! whole pack can be passed around as one ordinary type, pattern-matched by
//! the dispatcher, and unwrapped on the far side. One generic carrier serves
//! every kind; the named aliases below keep the traditional one-word
//! vocabulary for each column of the ladder.
//!
//! Rewriting operations preserve the tag: inserting into a [`Shuttle`]
//! yields a `Shuttle`.

use core::marker::PhantomData;

use crate::kind;
use crate::kind::Kind;
use crate::list::List;

/// A pack of kind `K` with contents `L`.
pub struct Vessel<K, L>(PhantomData<(K, L)>);

/// Anything that carries a kind tag and a content list.
pub trait Pack {
    /// The kind of the members.
    type Kind: Kind;
    /// The members, as an inductive list.
    type Content: List;
}

impl<K: Kind, L: List> Pack for Vessel<K, L> {
    type Kind = K;
    type Content = L;
}

/// The kind tag of a pack.
pub type KindOf<P> = <P as Pack>::Kind;

/// The content list of a pack.
pub type ContentOf<P> = <P as Pack>::Content;

/// Rebuilds a pack around new contents, keeping its kind.
pub type Rehoused<P, L> = Vessel<KindOf<P>, L>;

/// A pack of plain types ([`kind::Mold`]).
pub type Capsule<L> = Vessel<kind::Mold, L>;

/// A pack of type-level values ([`kind::Page`]).
pub type Shuttle<L> = Vessel<kind::Page, L>;

/// A pack of type-pack operations ([`kind::Road`]).
pub type Vehicle<L> = Vessel<kind::Road, L>;

/// A pack of value-pack operations ([`kind::Rail`]).
pub type Carrier<L> = Vessel<kind::Rail, L>;

/// A pack of [`Vehicle`]-consuming operations ([`kind::Flow`]).
pub type Reverie<L> = Vessel<kind::Flow, L>;

/// A pack of [`Carrier`]-consuming operations ([`kind::Sail`]).
pub type Phantom<L> = Vessel<kind::Sail, L>;

/// A pack of [`Reverie`]-consuming operations ([`kind::Snow`]).
pub type Forlorn<L> = Vessel<kind::Snow, L>;

/// A pack of [`Phantom`]-consuming operations ([`kind::Hail`]).
pub type Travail<L> = Vessel<kind::Hail, L>;

/// A pack of [`Forlorn`]-consuming operations ([`kind::Cool`]).
pub type Lullaby<L> = Vessel<kind::Cool, L>;

/// A pack of [`Travail`]-consuming operations ([`kind::Calm`]).
pub type Halcyon<L> = Vessel<kind::Calm, L>;

/// A pack of [`Lullaby`]-consuming operations ([`kind::Grit`]).
pub type Pursuit<L> = Vessel<kind::Grit, L>;

/// A pack of [`Halcyon`]-consuming operations ([`kind::Will`]).
pub type Persist<L> = Vessel<kind::Will, L>;

/// A pack of [`Pursuit`]-consuming operations ([`kind::Glow`]).
pub type Sunrise<L> = Vessel<kind::Glow, L>;

/// A pack of [`Persist`]-consuming operations ([`kind::Dawn`]).
pub type Morning<L> = Vessel<kind::Dawn, L>;

/// Builds a [`Capsule`] in type position: `capsule!(A, B)` is
/// `Capsule<tlist!(A, B)>`.
#[macro_export]
macro_rules! capsule {
    ($($member:ty),* $(,)?) => {
        $crate::vessel::Capsule<$crate::tlist!($($member),*)>
    };
}

/// Builds a [`Shuttle`] in type position: `shuttle!(1, 2)` is
/// `Shuttle<vals!(1, 2)>`.
#[macro_export]
macro_rules! shuttle {
    ($($v:expr),* $(,)?) => {
        $crate::vessel::Shuttle<$crate::vals!($($v),*)>
    };
}
