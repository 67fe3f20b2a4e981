//! Relations over lists built from pairs.

use crate::core::goal::Goal;
use crate::core::term::Term;
use crate::goals::combinators::{conj_all, delay};
use crate::goals::primitive::{conjoin, disjoin, equiv, fresh, fresh_n};

/// `p` is the pair `(a . d)`.
pub fn conso(a: impl Into<Term>, d: impl Into<Term>, p: impl Into<Term>) -> Goal {
    equiv(Term::cons(a, d), p)
}

/// `a` is the car of `p`.
pub fn caro(p: impl Into<Term>, a: impl Into<Term>) -> Goal {
    let p = p.into();
    let a = a.into();
    fresh(move |d| conso(a.clone(), d, p.clone()))
}

/// `d` is the cdr of `p`.
pub fn cdro(p: impl Into<Term>, d: impl Into<Term>) -> Goal {
    let p = p.into();
    let d = d.into();
    fresh(move |a| conso(a, d.clone(), p.clone()))
}

/// `l` is the empty list.
pub fn nullo(l: impl Into<Term>) -> Goal {
    equiv(Term::nil(), l)
}

/// `p` is a pair.
pub fn pairo(p: impl Into<Term>) -> Goal {
    let p = p.into();
    fresh_n(2, move |v| conso(v[0], v[1], p.clone()))
}

/// `x` is an element of the list `l`.
pub fn membero(x: impl Into<Term>, l: impl Into<Term>) -> Goal {
    let x = x.into();
    let l = l.into();
    let rest = {
        let (x, l) = (x.clone(), l.clone());
        fresh(move |d| {
            let x = x.clone();
            conjoin(cdro(l.clone(), d), delay(move || membero(x.clone(), d)))
        })
    };
    disjoin(caro(l, x), rest)
}

/// `out` is the concatenation of lists `l` and `t`.
pub fn appendo(l: impl Into<Term>, t: impl Into<Term>, out: impl Into<Term>) -> Goal {
    let l = l.into();
    let t = t.into();
    let out = out.into();
    let base = conjoin(nullo(l.clone()), equiv(t.clone(), out.clone()));
    let step = fresh_n(3, move |v| {
        let (a, d, res) = (v[0], v[1], v[2]);
        let t = t.clone();
        conj_all(vec![
            conso(a, d, l.clone()),
            conso(a, res, out.clone()),
            delay(move || appendo(d, t.clone(), res)),
        ])
    });
    disjoin(base, step)
}
