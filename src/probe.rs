//! Capability probes.
//!
//! A structure declares which continuation slots it exposes by implementing
//! [`Exposes`] for every kind, most conveniently through the
//! [`profile!`](crate::profile) macro. The probe aliases then read a single
//! declaration back (`Moldly`, `Moldless`, ...), and the aggregations fold
//! declarations across a pack of structures.
//!
//! Two conventions are load-bearing and pinned by tests:
//!
//! - `All` over the empty pack is vacuously [`True`].
//! - `Any` is literally `JustAny OR All`. For a non-empty pack the `All`
//!   disjunct is redundant, but it makes `Any` over the empty pack
//!   vacuously [`True`] as well, mirroring `All`'s convention. Callers that
//!   want the strict existential use the `JustAny` family.

use crate::kind;
use crate::kind::Kind;
use crate::list::{Cons, List, Nil};
use crate::logic::{And, Bool, False, Not, Or, True};

/// Declares whether `Self` exposes the continuation slot of kind `K`.
pub trait Exposes<K: Kind> {
    /// [`True`] when the slot is exposed.
    type Has: Bool;
}

/// Whether `S` exposes the slot of kind `K`.
pub type Has<S, K> = <S as Exposes<K>>::Has;

/// Whether every structure in `Self` exposes the slot of kind `K`.
///
/// Vacuously [`True`] for the empty pack.
pub trait AllExpose<K: Kind>: List {
    /// The aggregated verdict.
    type Has: Bool;
}

impl<K: Kind> AllExpose<K> for Nil {
    type Has = True;
}

impl<K: Kind, H: Exposes<K>, T: AllExpose<K>> AllExpose<K> for Cons<H, T> {
    type Has = And<Has<H, K>, <T as AllExpose<K>>::Has>;
}

/// Whether at least one structure in `Self` exposes the slot of kind `K`,
/// strictly: [`False`] for the empty pack.
pub trait JustAnyExpose<K: Kind>: List {
    /// The aggregated verdict.
    type Has: Bool;
}

impl<K: Kind> JustAnyExpose<K> for Nil {
    type Has = False;
}

impl<K: Kind, H: Exposes<K>, T: JustAnyExpose<K>> JustAnyExpose<K> for Cons<H, T> {
    type Has = Or<Has<H, K>, <T as JustAnyExpose<K>>::Has>;
}

/// `JustAny OR All`, the library's `Any`.
///
/// Redundant for non-empty packs, vacuously [`True`] for the empty one.
pub trait AnyExpose<K: Kind> {
    /// The aggregated verdict.
    type Has: Bool;
}

impl<K: Kind, L> AnyExpose<K> for L
where
    L: JustAnyExpose<K> + AllExpose<K>,
{
    type Has = Or<<L as JustAnyExpose<K>>::Has, <L as AllExpose<K>>::Has>;
}

macro_rules! probes {
    ($($K:ident => $Ly:ident, $Less:ident, $AllLy:ident, $JustAnyLy:ident, $AnyLy:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "[`True`] when `S` exposes the [`", stringify!($K),
                "`](kind::", stringify!($K), ") slot."
            )]
            pub type $Ly<S> = Has<S, kind::$K>;

            #[doc = concat!(
                "[`True`] when `S` does not expose the [`", stringify!($K),
                "`](kind::", stringify!($K), ") slot."
            )]
            pub type $Less<S> = Not<Has<S, kind::$K>>;

            #[doc = concat!(
                "[`True`] when every structure in `L` exposes the [`",
                stringify!($K), "`](kind::", stringify!($K), ") slot."
            )]
            pub type $AllLy<L> = <L as AllExpose<kind::$K>>::Has;

            #[doc = concat!(
                "[`True`] when some structure in `L` exposes the [`",
                stringify!($K), "`](kind::", stringify!($K),
                ") slot; [`False`] for the empty pack."
            )]
            pub type $JustAnyLy<L> = <L as JustAnyExpose<kind::$K>>::Has;

            #[doc = concat!(
                "[`True`] when some structure in `L` exposes the [`",
                stringify!($K), "`](kind::", stringify!($K),
                ") slot, or when all do (vacuously for the empty pack)."
            )]
            pub type $AnyLy<L> = <L as AnyExpose<kind::$K>>::Has;
        )*
    };
}

probes! {
    Mold => Moldly, Moldless, AllMoldly, JustAnyMoldly, AnyMoldly,
    Page => Pagely, Pageless, AllPagely, JustAnyPagely, AnyPagely,
    Road => Roadly, Roadless, AllRoadly, JustAnyRoadly, AnyRoadly,
    Rail => Railly, Railless, AllRailly, JustAnyRailly, AnyRailly,
    Flow => Flowly, Flowless, AllFlowly, JustAnyFlowly, AnyFlowly,
    Sail => Sailly, Sailless, AllSailly, JustAnySailly, AnySailly,
    Snow => Snowly, Snowless, AllSnowly, JustAnySnowly, AnySnowly,
    Hail => Haily, Hailless, AllHaily, JustAnyHaily, AnyHaily,
    Cool => Coolly, Coolless, AllCoolly, JustAnyCoolly, AnyCoolly,
    Calm => Calmly, Calmless, AllCalmly, JustAnyCalmly, AnyCalmly,
    Grit => Gritly, Gritless, AllGritly, JustAnyGritly, AnyGritly,
    Will => Willy, Willless, AllWilly, JustAnyWilly, AnyWilly,
    Glow => Glowly, Glowless, AllGlowly, JustAnyGlowly, AnyGlowly,
    Dawn => Dawnly, Dawnless, AllDawnly, JustAnyDawnly, AnyDawnly,
}

/// Implements [`Exposes`](crate::probe::Exposes) for one structure across
/// the whole kind family.
///
/// `macro_rules!` cannot take a set complement over identifiers, so the
/// profile names both sides explicitly:
///
/// ```
/// use kindling::kind::*;
/// use kindling::logic::Bool;
/// use kindling::probe::{Calmly, Coolless};
/// use kindling::profile;
///
/// struct CalmOwner;
/// profile! {
///     CalmOwner:
///     yes[Calm]
///     no[Mold, Page, Road, Rail, Flow, Sail, Snow, Hail, Cool, Grit, Will,
///        Glow, Dawn]
/// }
///
/// assert!(<Calmly<CalmOwner>>::VALUE);
/// assert!(<Coolless<CalmOwner>>::VALUE);
/// ```
#[macro_export]
macro_rules! profile {
    ($S:ty : yes[$($y:ty),* $(,)?] no[$($n:ty),* $(,)?]) => {
        $(
            impl $crate::probe::Exposes<$y> for $S {
                type Has = $crate::logic::True;
            }
        )*
        $(
            impl $crate::probe::Exposes<$n> for $S {
                type Has = $crate::logic::False;
            }
        )*
    };
}
