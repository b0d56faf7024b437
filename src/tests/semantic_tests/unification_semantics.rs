use super::*;

// =============================================================================
// UNIFICATION SEMANTIC PROPERTIES
// =============================================================================
//
// Robinson unification over atoms, variables, and sequences. A unifier σ of
// t1 and t2 must make σ(t1) and σ(t2) syntactically equal.

// -------------------------------------------------------------------------
// Property: ground terms unify with themselves without new bindings
// -------------------------------------------------------------------------
#[test]
fn ground_term_self_unification_adds_nothing() {
    let t = app("Knows", vec![Term::atom("John"), app("Mother", vec![Term::atom("Jane")])]);
    let result = unify(&t, &t, &Substitution::empty());
    assert_eq!(result, UnifyResult::Success(Substitution::empty()));
}

#[test]
fn self_unification_preserves_incoming_substitution() {
    let incoming = Substitution::singleton("z", Term::atom("C"));
    let t = app("F", vec![Term::var("x"), Term::var("y")]);
    let result = unify(&t, &t, &incoming);
    assert_eq!(result.into_substitution(), Some(incoming));
}

// -------------------------------------------------------------------------
// Property: the unifier equalises both sides
// -------------------------------------------------------------------------
#[test]
fn unifier_makes_terms_equal() {
    let t1 = app("F", vec![Term::var("x"), app("G", vec![Term::var("y")])]);
    let t2 = app("F", vec![app("H", vec![Term::var("y")]), app("G", vec![Term::atom("A")])]);
    let sigma = unify(&t1, &t2, &Substitution::empty())
        .into_substitution()
        .expect("terms should unify");
    assert_eq!(sigma.resolve(&t1), sigma.resolve(&t2));
    assert_eq!(
        sigma.resolve(&Term::var("x")),
        app("H", vec![Term::atom("A")])
    );
}

#[test]
fn variable_chains_are_closed_by_resolve() {
    // (x y) = (y z) binds x→y and y→z; resolving x must reach z.
    let t1 = Term::seq(vec![Term::var("x"), Term::var("y")]);
    let t2 = Term::seq(vec![Term::var("y"), Term::var("z")]);
    let sigma = unify(&t1, &t2, &Substitution::empty())
        .into_substitution()
        .expect("chains should unify");
    assert_eq!(sigma.resolve(&Term::var("x")), Term::var("z"));
    let once = sigma.resolve(&t1);
    assert_eq!(sigma.resolve(&once), once, "resolve must be idempotent");
}

// -------------------------------------------------------------------------
// Property: occurs check rejects cyclic bindings
// -------------------------------------------------------------------------
#[test]
fn occurs_check_blocks_direct_cycle() {
    let t = app("F", vec![Term::var("x")]);
    let result = unify(&Term::var("x"), &t, &Substitution::empty());
    assert_eq!(
        result,
        UnifyResult::Failure(UnifyFailure::OccursCheck {
            var: "x".to_string(),
            term: t,
        })
    );
}

#[test]
fn occurs_check_blocks_indirect_cycle() {
    // x→(F y) then y = (G x) would close the loop.
    let subst = Substitution::singleton("x", app("F", vec![Term::var("y")]));
    assert!(occurs_check("y", &app("G", vec![Term::var("x")]), &subst));
    let result = unify(&Term::var("y"), &app("G", vec![Term::var("x")]), &subst);
    assert!(matches!(
        result,
        UnifyResult::Failure(UnifyFailure::OccursCheck { .. })
    ));
}

// -------------------------------------------------------------------------
// Property: structural mismatches fail
// -------------------------------------------------------------------------
#[test]
fn arity_mismatch_fails() {
    let result = unify(
        &Term::seq(vec![Term::atom("A"), Term::atom("B")]),
        &Term::seq(vec![Term::atom("A")]),
        &Substitution::empty(),
    );
    assert_eq!(
        result,
        UnifyResult::Failure(UnifyFailure::ArityMismatch { left: 2, right: 1 })
    );
}

#[test]
fn symbol_clash_inside_sequence_fails() {
    let result = unify(
        &app("F", vec![Term::atom("A")]),
        &app("F", vec![Term::atom("B")]),
        &Substitution::empty(),
    );
    assert!(result.is_failure());
}

// -------------------------------------------------------------------------
// Property: results compose
// -------------------------------------------------------------------------
#[test]
fn composition_reuses_previous_result() {
    let first = unify(
        &Term::seq(vec![Term::atom("A"), Term::var("x")]),
        &Term::seq(vec![Term::atom("A"), Term::atom("B")]),
        &Substitution::empty(),
    )
    .into_substitution()
    .expect("first step should unify");
    assert_eq!(first, Substitution::singleton("x", Term::atom("B")));

    let second = unify(&Term::var("x"), &Term::atom("B"), &first);
    assert_eq!(second.into_substitution(), Some(first.clone()));

    let conflict = unify(&Term::var("x"), &Term::atom("C"), &first);
    assert!(conflict.is_failure());
}

#[test]
fn failure_leaves_caller_substitution_usable() {
    let base = Substitution::singleton("x", Term::atom("A"));
    let failed = unify(&Term::var("x"), &Term::atom("B"), &base);
    assert!(failed.is_failure());
    let retried = unify(&Term::var("y"), &Term::var("x"), &base)
        .into_substitution()
        .expect("retry should succeed");
    assert_eq!(retried.resolve(&Term::var("y")), Term::atom("A"));
}

#[test]
fn unify_many_equals_sequence_unification() {
    let pairs = vec![
        (Term::var("x"), Term::atom("A")),
        (Term::var("y"), Term::var("x")),
    ];
    let many = unify_many(&pairs, &Substitution::empty());
    let seq = unify(
        &Term::seq(vec![Term::var("x"), Term::var("y")]),
        &Term::seq(vec![Term::atom("A"), Term::var("x")]),
        &Substitution::empty(),
    );
    assert_eq!(many, seq);
}
