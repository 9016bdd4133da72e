//! Capability probes read back exactly what a profile declares, and the
//! aggregations keep their empty-pack conventions.

use kindling::kind::*;
use kindling::list::Nil;
use kindling::logic::{And, Bool, False, IfElse, Not, Or, Same, True};
use kindling::probe::{
    AllCalmly, AnyCalmly, Calmless, Calmly, Coolless, Dawnless, JustAnyCalmly, Moldless, Moldly,
};
use kindling::{profile, tlist};

fn same<A: Same<B>, B>() {}

/// Exposes the `Calm` slot and nothing else.
struct CalmOwner;

profile! {
    CalmOwner:
    yes[Calm]
    no[Mold, Page, Road, Rail, Flow, Sail, Snow, Hail, Cool, Grit, Will,
       Glow, Dawn]
}

/// Exposes `Calm` and `Mold`.
struct CalmProprietor;

profile! {
    CalmProprietor:
    yes[Calm, Mold]
    no[Page, Road, Rail, Flow, Sail, Snow, Hail, Cool, Grit, Will, Glow,
       Dawn]
}

/// Exposes nothing at all.
struct WorkingClass;

profile! {
    WorkingClass:
    yes[]
    no[Mold, Page, Road, Rail, Flow, Sail, Snow, Hail, Cool, Calm, Grit,
       Will, Glow, Dawn]
}

#[test]
fn single_probes_are_exact() {
    assert!(<Calmly<CalmOwner> as Bool>::VALUE);
    assert!(<Coolless<CalmOwner> as Bool>::VALUE);
    assert!(!<Moldly<CalmOwner> as Bool>::VALUE);

    assert!(<Calmly<CalmProprietor> as Bool>::VALUE);
    assert!(<Moldly<CalmProprietor> as Bool>::VALUE);

    // a structure exposing nothing satisfies every negative probe
    assert!(<Moldless<WorkingClass> as Bool>::VALUE);
    assert!(<Calmless<WorkingClass> as Bool>::VALUE);
    assert!(<Dawnless<WorkingClass> as Bool>::VALUE);
}

#[test]
fn all_requires_every_member() {
    assert!(<AllCalmly<tlist!(CalmOwner, CalmProprietor)> as Bool>::VALUE);
    assert!(!<AllCalmly<tlist!(CalmOwner, WorkingClass)> as Bool>::VALUE);
    // vacuous truth over the empty pack
    assert!(<AllCalmly<Nil> as Bool>::VALUE);
}

#[test]
fn just_any_is_the_strict_existential() {
    assert!(<JustAnyCalmly<tlist!(WorkingClass, CalmOwner)> as Bool>::VALUE);
    assert!(!<JustAnyCalmly<tlist!(WorkingClass, WorkingClass)> as Bool>::VALUE);
    assert!(!<JustAnyCalmly<Nil> as Bool>::VALUE);
}

#[test]
fn any_is_just_any_or_all() {
    // some qualify
    assert!(<AnyCalmly<tlist!(WorkingClass, CalmOwner)> as Bool>::VALUE);
    // all qualify
    assert!(<AnyCalmly<tlist!(CalmOwner, CalmProprietor)> as Bool>::VALUE);
    // none qualify
    assert!(!<AnyCalmly<tlist!(WorkingClass, WorkingClass)> as Bool>::VALUE);
    // and the quirk: the empty pack is vacuously true, unlike JustAny
    assert!(<AnyCalmly<Nil> as Bool>::VALUE);
}

#[test]
fn boolean_algebra_underneath() {
    same::<And<True, True>, True>();
    same::<And<True, False>, False>();
    same::<Or<False, False>, False>();
    same::<Or<False, True>, True>();
    same::<Not<Not<True>>, True>();
    same::<IfElse<True, u8, u16>, u8>();
    same::<IfElse<False, u8, u16>, u16>();

    assert!(<True as Bool>::VALUE);
    assert!(!<False as Bool>::VALUE);
}
