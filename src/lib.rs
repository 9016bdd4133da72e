#![warn(missing_docs)]

//! Compile-time pack combinators that stay polymorphic over the *kind* of the
//! pack they rewrite.
//!
//! Everything in this crate is a phantom type: there is no runtime data, no
//! allocation, and no function that does anything at run time beyond the test
//! reifiers. An "operation" is a unit struct implementing one or more slot
//! traits; "applying" it means projecting an associated type. The compiler's
//! trait solver is the evaluator, and a missing impl is the only error
//! channel: an out-of-range index or an empty pack fed to a seeded fold
//! simply does not compile.
//!
//! # Kinds, vessels and slots
//!
//! A **kind** classifies what a pack holds: plain types ([`kind::Mold`]),
//! type-level values ([`kind::Page`]), operations over type packs
//! ([`kind::Road`]), operations over value packs ([`kind::Rail`]), and so on
//! up the meta-level ladder through [`kind::Flow`], [`kind::Sail`],
//! [`kind::Snow`], [`kind::Hail`], [`kind::Cool`], [`kind::Calm`],
//! [`kind::Grit`], [`kind::Will`], [`kind::Glow`] and [`kind::Dawn`]. The
//! family is closed; [`kind::Kind`] is sealed.
//!
//! A **vessel** ([`vessel::Vessel`]) packages one inductive list of members
//! under one kind tag so the whole pack can travel as a single type.
//! [`vessel::Capsule`] is a type pack, [`vessel::Shuttle`] a value pack,
//! [`vessel::Vehicle`] a pack of type-pack operations, and each higher kind
//! has its own named alias.
//!
//! A **slot** is the continuation surface an operation offers for one kind:
//! an operation that can consume a type pack implements [`slot::Mold`], one
//! that can consume a value pack implements [`slot::Page`], and a composite
//! may implement several slots at once.
//!
//! # Conveying
//!
//! [`convey::Convey`] is the load-bearing dispatcher: given any vessel, it
//! unwraps the contents and routes them into the continuation's slot of the
//! matching kind. The caller writes [`convey::Sent`] and never names the
//! kind:
//!
//! ```
//! use kindling::convey::Sent;
//! use kindling::list::{Nil, ReverseOnto};
//! use kindling::logic::Same;
//! use kindling::slot;
//! use kindling::vessel::{Capsule, Shuttle};
//! use kindling::{capsule, shuttle};
//!
//! // One operation, two slots: it can flip a type pack or a value pack.
//! struct Flip;
//! impl<L: ReverseOnto<Nil>> slot::Mold<L> for Flip {
//!     type Out = Capsule<L::Out>;
//! }
//! impl<L: ReverseOnto<Nil>> slot::Page<L> for Flip {
//!     type Out = Shuttle<L::Out>;
//! }
//!
//! fn same<A: Same<B>, B>() {}
//!
//! // The same `Sent` spelling serves both packs.
//! same::<Sent<capsule!(u8, u16, u32), Flip>, capsule!(u32, u16, u8)>();
//! same::<Sent<shuttle!(1, 2, 3), Flip>, shuttle!(3, 2, 1)>();
//! ```
//!
//! [`convey::Press`] folds `Convey` through a curried operation chain, so a
//! list of vessels of arbitrary, mixed kinds can feed one continuation step
//! by step.
//!
//! # Vocabulary
//!
//! On top of the dispatcher sit the pack rewriters, each a trait over the
//! inductive list with a kind-preserving vessel alias:
//!
//! - index editors: [`edit::InsertAt`], [`edit::RemoveAt`],
//!   [`edit::ModifyAt`], [`edit::AlterAt`];
//! - partitioning: [`list::SplitAt`], [`segment::SegmentBy`],
//!   [`list::PopBack`];
//! - folds: [`fold::FoldLeft`], [`fold::FoldRight`],
//!   [`fold::FoldLeftFirst`];
//! - selection: [`sieve::Sieve`], [`sieve::Find`],
//!   [`sieve::LeftInterview`], [`sieve::RightInterview`],
//!   [`sieve::Among`];
//! - elementwise rewriting: [`plume::Map`], [`plume::Transform`],
//!   [`plume::ZipApply`], [`list::Repeat`], [`plume::Upended`];
//! - staged pipelines and the monadic bind: [`pipeline::Journey`],
//!   [`pipeline::Route`], [`pipeline::Rove`].
//!
//! # Capability probes
//!
//! Rust cannot ask "does this type have a member template", so a structure
//! declares which slots it exposes through [`probe::Exposes`] (usually via
//! the [`profile!`] macro), and the probe aliases (`Moldly`/`Moldless`,
//! `AllMoldly`, `AnyMoldly`, one family per kind) read those declarations
//! back as type-level booleans. `Any` is deliberately the disjunction of the
//! strict existential with `All`, which makes it vacuously true on the empty
//! pack, matching `All`'s vacuous-truth convention.

/// Type-level booleans and the reflexive type-equality trait.
pub mod logic;

/// Unary type-level numbers used as pack indices.
pub mod peano;

/// Type-level integers and their reifier.
pub mod value;

/// The inductive pack and its structural operations.
pub mod list;

/// The closed family of kind markers.
pub mod kind;

/// Vessels: one generic carrier, one named alias per kind.
pub mod vessel;

/// Continuation-slot traits and the elementwise operation traits.
pub mod slot;

/// The dispatcher: route any vessel into the matching slot.
pub mod convey;

/// Capability declarations, probes and their aggregation laws.
pub mod probe;

/// Gap-size partitioning of a pack into chunks.
pub mod segment;

/// Index-based pack editors.
pub mod edit;

/// Left and right folds over packs.
pub mod fold;

/// Staged pipelines and the kind-lifting bind.
pub mod pipeline;

/// Predicate-driven selection and search.
pub mod sieve;

/// Elementwise pack rewriting.
pub mod plume;
