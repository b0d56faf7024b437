use super::*;
use proptest::prelude::*;

// =============================================================================
// PROPERTY-BASED TESTS
// =============================================================================
//
// These use proptest to verify properties hold for arbitrary inputs.
// Variables come from a small pool so that generated terms share them.

const SYMBOLS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_var() -> impl Strategy<Value = Term> {
    prop::sample::select(vec!["x", "y", "z", "w"]).prop_map(Term::var)
}

fn arb_atom() -> impl Strategy<Value = Term> {
    "[A-Z][a-z0-9]?".prop_map(Term::atom)
}

fn arb_ground_term(depth: u32) -> impl Strategy<Value = Term> {
    if depth == 0 {
        arb_atom().boxed()
    } else {
        prop_oneof![
            arb_atom(),
            prop::collection::vec(arb_ground_term(depth - 1), 0..=3).prop_map(Term::seq)
        ]
        .boxed()
    }
}

fn arb_term(depth: u32) -> impl Strategy<Value = Term> {
    if depth == 0 {
        prop_oneof![arb_var(), arb_atom()].boxed()
    } else {
        prop_oneof![
            arb_var(),
            arb_atom(),
            prop::collection::vec(arb_term(depth - 1), 0..=3).prop_map(Term::seq)
        ]
        .boxed()
    }
}

fn arb_literal() -> impl Strategy<Value = Literal> {
    (any::<bool>(), prop::sample::select(SYMBOLS.to_vec())).prop_map(|(pos, sym)| {
        if pos {
            Literal::pos(sym)
        } else {
            Literal::neg(sym)
        }
    })
}

fn arb_clause() -> impl Strategy<Value = Clause> {
    prop::collection::vec(arb_literal(), 0..=3).prop_map(Clause::new)
}

fn arb_knowledge_base() -> impl Strategy<Value = Vec<Clause>> {
    prop::collection::vec(arb_clause(), 0..=5)
}

/// Whether `literal` holds under the assignment encoded by `bits`.
fn holds(literal: &Literal, bits: u32) -> bool {
    let index = SYMBOLS
        .iter()
        .position(|s| *s == literal.symbol)
        .unwrap_or(SYMBOLS.len());
    let value = bits & (1 << index) != 0;
    value == literal.positive
}

/// Truth-table check that no model satisfies `kb` while falsifying every
/// query literal.
fn oracle_entails(kb: &[Clause], query: &[Literal]) -> bool {
    (0..1u32 << SYMBOLS.len()).all(|bits| {
        let kb_true = kb.iter().all(|c| c.iter().any(|l| holds(l, bits)));
        let query_false = query.iter().all(|l| !holds(l, bits));
        !(kb_true && query_false)
    })
}

// -------------------------------------------------------------------------
//  Self-unification always succeeds without new bindings
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn self_unification_succeeds(term in arb_term(2)) {
        let result = unify(&term, &term, &Substitution::empty());
        prop_assert_eq!(result, UnifyResult::Success(Substitution::empty()));
    }
}

// -------------------------------------------------------------------------
//  Ground terms unify iff they are equal
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn ground_unification_is_equality(t1 in arb_ground_term(2), t2 in arb_ground_term(2)) {
        let result = unify(&t1, &t2, &Substitution::empty());
        prop_assert_eq!(result.is_success(), t1 == t2);
    }
}

// -------------------------------------------------------------------------
//  A unifier equalises both sides and resolving twice changes nothing
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn unifier_is_sound_and_idempotent(t1 in arb_term(2), t2 in arb_term(2)) {
        if let UnifyResult::Success(sigma) = unify(&t1, &t2, &Substitution::empty()) {
            let r1 = sigma.resolve(&t1);
            let r2 = sigma.resolve(&t2);
            prop_assert_eq!(&r1, &r2);
            prop_assert_eq!(sigma.resolve(&r1), r1);
        }
    }
}

// -------------------------------------------------------------------------
//  Unifiability does not depend on argument order
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn unification_success_is_symmetric(t1 in arb_term(2), t2 in arb_term(2)) {
        let forward = unify(&t1, &t2, &Substitution::empty());
        let backward = unify(&t2, &t1, &Substitution::empty());
        prop_assert_eq!(forward.is_success(), backward.is_success());
    }
}

// -------------------------------------------------------------------------
//  A variable never unifies with a sequence that contains it
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn occurs_check_rejects_containing_sequence(
        head in arb_atom(),
        rest in prop::collection::vec(arb_term(1), 0..=2),
    ) {
        let mut items = vec![head, Term::var("x")];
        items.extend(rest);
        let result = unify(&Term::var("x"), &Term::seq(items), &Substitution::empty());
        prop_assert!(result.is_failure());
    }
}

// -------------------------------------------------------------------------
//  Negation is an involution
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn negation_involution(lit in arb_literal()) {
        prop_assert_eq!(negate(&negate(&lit)), lit);
    }
}

// -------------------------------------------------------------------------
//  Resolvents only contain literals from their parents
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn resolvents_come_from_parents(c1 in arb_clause(), c2 in arb_clause()) {
        for resolvent in resolve(&c1, &c2) {
            for lit in resolvent.iter() {
                prop_assert!(c1.contains(lit) || c2.contains(lit));
            }
            prop_assert!(resolvent.len() < c1.len() + c2.len());
        }
    }
}

// -------------------------------------------------------------------------
//  Refutation is complete: every entailment the truth table finds is refuted
//
//  The converse does not hold. A resolvent drops both resolved literals
//  from the union of its parents, so a tautological parent can also drop a
//  literal contributed by the other parent (see
//  `tautological_parent_loses_a_literal`).
// -------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn refutation_is_complete(
        kb in arb_knowledge_base(),
        query in prop::collection::vec(arb_literal(), 0..=2),
    ) {
        if oracle_entails(&kb, &query) {
            let mut engine = ResolutionEngine::from_clauses(kb, &query);
            prop_assert!(engine.resolution());
        }
    }
}

// -------------------------------------------------------------------------
//  Unit knowledge bases never produce tautologies, so both directions hold
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn unit_refutation_matches_truth_table(
        units in prop::collection::vec(arb_literal(), 0..=5),
        query in prop::collection::vec(arb_literal(), 0..=2),
    ) {
        let kb: Vec<Clause> = units.into_iter().map(Clause::unit).collect();
        let expected = oracle_entails(&kb, &query);
        let mut engine = ResolutionEngine::from_clauses(kb, &query);
        prop_assert_eq!(engine.resolution(), expected);
    }
}

// -------------------------------------------------------------------------
//  Adding clauses never loses an entailment
// -------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entailment_is_monotone(
        kb in arb_knowledge_base(),
        extra in arb_knowledge_base(),
        query in arb_literal(),
    ) {
        let query = [query];
        let mut small = ResolutionEngine::from_clauses(kb.clone(), &query);
        if small.resolution() {
            let mut bigger = kb;
            bigger.extend(extra);
            let mut large = ResolutionEngine::from_clauses(bigger, &query);
            prop_assert!(large.resolution());
        }
    }
}
