use crate::prelude::*;
use proptest::prelude::*;

const VARS: usize = 5;

/// Plain description of a term, so generated cases print readably.
#[derive(Debug, Clone)]
enum TermDesc {
    Nil,
    Int(i64),
    Sym(String),
    Var(usize),
    Pair(Box<TermDesc>, Box<TermDesc>),
}

impl TermDesc {
    fn build(&self) -> Term {
        match self {
            TermDesc::Nil => Term::nil(),
            TermDesc::Int(i) => Term::new(*i),
            TermDesc::Sym(s) => Term::sym(s),
            TermDesc::Var(k) => Term::var(Var::new(*k)),
            TermDesc::Pair(a, d) => Term::cons(a.build(), d.build()),
        }
    }
}

fn ground_leaf() -> impl Strategy<Value = TermDesc> {
    prop_oneof![
        Just(TermDesc::Nil),
        (-50i64..50).prop_map(TermDesc::Int),
        "[a-e]{1,3}".prop_map(TermDesc::Sym),
    ]
}

fn var_leaf() -> impl Strategy<Value = TermDesc> {
    (0..VARS).prop_map(TermDesc::Var)
}

fn tree(leaf: BoxedStrategy<TermDesc>) -> impl Strategy<Value = TermDesc> {
    leaf.prop_recursive(4, 24, 2, |inner| {
        (inner.clone(), inner).prop_map(|(a, d)| TermDesc::Pair(Box::new(a), Box::new(d)))
    })
}

fn ground_term() -> impl Strategy<Value = TermDesc> {
    tree(ground_leaf().boxed())
}

fn open_term() -> impl Strategy<Value = TermDesc> {
    let leaf = prop_oneof![ground_leaf(), var_leaf(), var_leaf()];
    tree(leaf.boxed())
}

/// Equations to unify one after another; plenty of them relate two
/// variables directly.
fn equations() -> impl Strategy<Value = Vec<(TermDesc, TermDesc)>> {
    let equation = prop_oneof![
        (var_leaf(), var_leaf()),
        (var_leaf(), open_term()),
        (open_term(), open_term()),
    ];
    prop::collection::vec(equation, 1..12)
}

/// A variable would be bound to a term containing it.
#[derive(Debug)]
struct Cyclic;

/// Unification that takes the same steps as `Substitution::unify` but
/// refuses to create a cyclic binding.
fn unify_acyclic(s: &Substitution, u: &Term, v: &Term) -> Result<Option<Substitution>, Cyclic> {
    let (u, v) = (s.walk(u), s.walk(v));
    match (u, v) {
        (Term::Var(x), Term::Var(y)) if x == y => Ok(Some(s.clone())),
        (Term::Var(x), _) => bind(s, *x, v),
        (_, Term::Var(y)) => bind(s, *y, u),
        (Term::Pair(p), Term::Pair(q)) => match unify_acyclic(s, &p.first, &q.first)? {
            Some(s) => unify_acyclic(&s, &p.second, &q.second),
            None => Ok(None),
        },
        (Term::Atom(a), Term::Atom(b)) if a == b => Ok(Some(s.clone())),
        _ => Ok(None),
    }
}

fn bind(s: &Substitution, x: Var, t: &Term) -> Result<Option<Substitution>, Cyclic> {
    if occurs(s, x, t) {
        return Err(Cyclic);
    }
    Ok(Some(s.extend(x, t.clone())))
}

fn occurs(s: &Substitution, x: Var, t: &Term) -> bool {
    match s.walk(t) {
        Term::Var(y) => *y == x,
        Term::Pair(p) => occurs(s, x, &p.first) || occurs(s, x, &p.second),
        Term::Atom(_) => false,
    }
}

proptest! {
    #[test]
    fn unification_is_symmetric(u in open_term(), v in ground_term()) {
        let (u, v) = (u.build(), v.build());
        let s = Substitution::empty();
        let uv = s.unify(&u, &v);
        let vu = s.unify(&v, &u);
        prop_assert_eq!(uv.is_some(), vu.is_some());
        if let (Some(uv), Some(vu)) = (uv, vu) {
            prop_assert_eq!(uv.walk_star(&u), vu.walk_star(&u));
            prop_assert_eq!(uv.walk_star(&u), uv.walk_star(&v));
        }
    }

    #[test]
    fn unification_of_open_terms_is_symmetric(u in open_term(), v in open_term()) {
        let (u, v) = (u.build(), v.build());
        let s = Substitution::empty();
        let (Ok(checked_uv), Ok(checked_vu)) =
            (unify_acyclic(&s, &u, &v), unify_acyclic(&s, &v, &u))
        else {
            return Err(TestCaseError::reject("cyclic unifier"));
        };

        let uv = s.unify(&u, &v);
        let vu = s.unify(&v, &u);
        prop_assert_eq!(&uv, &checked_uv);
        prop_assert_eq!(&vu, &checked_vu);
        prop_assert_eq!(uv.is_some(), vu.is_some());

        if let (Some(uv), Some(vu)) = (uv, vu) {
            prop_assert_eq!(uv.walk_star(&u), uv.walk_star(&v));
            prop_assert_eq!(vu.walk_star(&u), vu.walk_star(&v));
            // both unifiers agree up to the names of the variables left fresh
            let both = Term::cons(u, v);
            prop_assert_eq!(uv.reify(&both), vu.reify(&both));
        }
    }

    #[test]
    fn walk_is_idempotent(u in open_term(), v in ground_term(), k in 0..VARS) {
        let Some(s) = Substitution::empty().unify(&u.build(), &v.build()) else {
            return Ok(());
        };
        let x = Term::var(Var::new(k));
        let once = s.walk(&x).clone();
        prop_assert_eq!(s.walk(&once), &once);
    }

    #[test]
    fn walk_is_idempotent_through_variable_chains(eqs in equations()) {
        let mut s = Substitution::empty();
        for (u, v) in &eqs {
            let (u, v) = (u.build(), v.build());
            if let Ok(Some(checked)) = unify_acyclic(&s, &u, &v) {
                let unified = s.unify(&u, &v);
                prop_assert_eq!(unified.as_ref(), Some(&checked));
                s = checked;
            }
        }

        for k in 0..VARS {
            let x = Term::var(Var::new(k));
            let once = s.walk(&x).clone();
            prop_assert_eq!(s.walk(&once), &once);
            if let Term::Var(end) = &once {
                prop_assert_eq!(s.lookup(*end), None);
            }

            let resolved = s.walk_star(&x);
            prop_assert_eq!(s.walk_star(&resolved), resolved);
        }
    }

    #[test]
    fn ground_terms_survive_a_search(t in ground_term()) {
        let t = t.build();
        let expected = t.clone();
        let g = fresh(move |q| equiv(q, t.clone()));
        let found: Vec<Term> = g.run_all().iter().map(State::reify_first).collect();
        prop_assert_eq!(found, vec![expected]);
    }

    #[test]
    fn ground_terms_unify_with_themselves_without_bindings(t in ground_term()) {
        let t = t.build();
        let s = Substitution::empty().unify(&t, &t);
        prop_assert_eq!(s.map(|s| s.len()), Some(0));
    }
}
