//! Terms are the values logic programs compute with.
//!
//! A term is an atom, a logic variable, or a pair of terms. Lists and
//! arbitrary trees are built by nesting pairs.

use crate::core::logic_variable::Var;
use crate::core::pair::Pair;
use std::fmt::{self, Formatter};
use std::rc::Rc;
use thiserror::Error;

/// Scalar values.
///
/// All atoms compare by value. Integers and floats only equal atoms of
/// their own kind, and `NaN` equals nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// The empty list.
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Sym(Rc<str>),
    /// Canonical name of a variable that remained fresh after reification.
    Reified(usize),
}

#[derive(Debug, Clone)]
pub enum Term {
    Atom(Atom),
    Var(Var),
    Pair(Rc<Pair>),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TermError {
    #[error("{op}: {term} is not a pair")]
    NotAPair { op: &'static str, term: Term },

    #[error("improper list ending in {0}")]
    ImproperList(Term),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    /// The empty list.
    pub fn nil() -> Self {
        Term::Atom(Atom::Nil)
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn sym(name: &str) -> Self {
        Term::Atom(Atom::Sym(name.into()))
    }

    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Rc::new(Pair {
            first: car.into(),
            second: cdr.into(),
        }))
    }

    /// Build a proper list from `items`.
    pub fn list<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Self {
        Term::improper_list(items, Term::nil())
    }

    /// Build a list from `items` whose final cdr is `tail`.
    pub fn improper_list<T: Into<Term>>(
        items: impl IntoIterator<Item = T>,
        tail: impl Into<Term>,
    ) -> Self {
        let items: Vec<Term> = items.into_iter().map(Into::into).collect();
        items
            .into_iter()
            .rev()
            .fold(tail.into(), |list, item| Term::cons(item, list))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Term::Pair(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Term::Atom(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Atom(Atom::Nil))
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn try_as_pair(&self) -> Option<&Pair> {
        match self {
            Term::Pair(p) => Some(p),
            _ => None,
        }
    }

    pub fn car(&self) -> Result<&Term, TermError> {
        self.try_as_pair()
            .map(|p| &p.first)
            .ok_or_else(|| TermError::NotAPair {
                op: "car",
                term: self.clone(),
            })
    }

    pub fn cdr(&self) -> Result<&Term, TermError> {
        self.try_as_pair()
            .map(|p| &p.second)
            .ok_or_else(|| TermError::NotAPair {
                op: "cdr",
                term: self.clone(),
            })
    }

    /// Collect the elements of a proper list.
    pub fn to_vec(&self) -> Result<Vec<Term>, TermError> {
        let mut items = vec![];
        let mut rest = self;
        while !rest.is_nil() {
            if !rest.is_pair() {
                return Err(TermError::ImproperList(rest.clone()));
            }
            items.push(rest.car()?.clone());
            rest = rest.cdr()?;
        }
        Ok(items)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Atom::Nil => write!(f, "()"),
            Atom::Bool(true) => write!(f, "#t"),
            Atom::Bool(false) => write!(f, "#f"),
            Atom::Int(n) => write!(f, "{}", n),
            Atom::Float(x) => write!(f, "{}", x),
            Atom::Sym(s) => write!(f, "{}", s),
            Atom::Reified(k) => write!(f, "_.{}", k),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Term::Atom(a) => write!(f, "{}", a),
            Term::Var(v) => write!(f, "{}", v),
            Term::Pair(p) => write!(f, "{}", p),
        }
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Term::Atom(a)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::nil()
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Atom(Atom::Bool(b))
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Atom(Atom::Int(n))
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Atom(Atom::Int(n.into()))
    }
}

impl From<u32> for Term {
    fn from(n: u32) -> Self {
        Term::Atom(Atom::Int(n.into()))
    }
}

impl From<f64> for Term {
    fn from(x: f64) -> Self {
        Term::Atom(Atom::Float(x))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::sym(s)
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Atom(Atom::Sym(s.into()))
    }
}

impl<A: Into<Term>, D: Into<Term>> From<(A, D)> for Term {
    fn from((car, cdr): (A, D)) -> Self {
        Term::cons(car, cdr)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::list(items)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let (mut x, mut y) = (self, other);
        loop {
            match (x, y) {
                (Term::Atom(a), Term::Atom(b)) => return a == b,
                (Term::Var(u), Term::Var(v)) => return u == v,
                (Term::Pair(p), Term::Pair(q)) => {
                    if p.first != q.first {
                        return false;
                    }
                    x = &p.second;
                    y = &q.second;
                }
                _ => return false,
            }
        }
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.try_as_var() == Some(*v)
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, s: &&str) -> bool {
        matches!(self, Term::Atom(Atom::Sym(name)) if &**name == *s)
    }
}
