//! Substitutions map variables to terms.
//!
//! A substitution is an append-only association list. Extending it
//! prepends a binding and shares the whole parent, so any number of
//! search branches can extend the same substitution independently.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use std::fmt::Formatter;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, PartialEq)]
struct Binding {
    var: Var,
    term: Term,
    next: Option<Rc<Binding>>,
}

/// Mapping of variables to terms.
#[derive(Clone, PartialEq, Default)]
pub struct Substitution {
    head: Option<Rc<Binding>>,
    len: usize,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution { head: None, len: 0 }
    }

    /// Get number of bindings
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a new substitution with `x => v` prepended.
    ///
    /// Neither cycles nor earlier bindings of `x` are checked. A variable
    /// that already has a binding must not be bound again, because
    /// `lookup` only ever sees the first one.
    pub fn extend(&self, x: Var, v: Term) -> Self {
        Substitution {
            head: Some(Rc::new(Binding {
                var: x,
                term: v,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Find the first binding of `x`, scanning from the most recent one.
    pub fn lookup(&self, x: Var) -> Option<&Term> {
        self.iter().find(|(var, _)| *var == x).map(|(_, term)| term)
    }

    /// Iterate over bindings, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = (Var, &Term)> + '_ {
        let mut next = self.head.as_deref();
        std::iter::from_fn(move || {
            let binding = next?;
            next = binding.next.as_deref();
            Some((binding.var, &binding.term))
        })
    }

    /// Resolve the value of a term through any number of variable bindings.
    ///
    /// If `v` is no variable or a variable that is not bound, `v` is
    /// returned.
    pub fn walk<'a>(&'a self, mut v: &'a Term) -> &'a Term {
        while let Term::Var(var) = v {
            match self.lookup(*var) {
                Some(next) => v = next,
                None => break,
            }
        }
        v
    }

    /// Attempt to unify terms `u` and `v` under this substitution.
    ///
    /// Returns `None` if they cannot be unified. There is no occurs check,
    /// so binding a variable to a term containing itself succeeds.
    ///
    /// Pairs are unified car first. Only cars recurse; the cdrs are
    /// unified in a loop.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        let mut s = self.clone();
        let (mut u, mut v) = (u.clone(), v.clone());
        loop {
            let wu = s.walk(&u).clone();
            let wv = s.walk(&v).clone();

            match (&wu, &wv) {
                (Term::Var(x), Term::Var(y)) if x == y => return Some(s),
                (Term::Var(x), _) => return Some(s.extend(*x, wv.clone())),
                (_, Term::Var(y)) => return Some(s.extend(*y, wu.clone())),
                (Term::Pair(p), Term::Pair(q)) => {
                    s = s.unify(&p.first, &q.first)?;
                    u = p.second.clone();
                    v = q.second.clone();
                }
                (Term::Atom(a), Term::Atom(b)) if a == b => return Some(s),
                _ => {
                    trace!(u = %wu, v = %wv, "unification clash");
                    return None;
                }
            }
        }
    }
}

impl Drop for Substitution {
    // Unlink uniquely owned bindings one at a time so that dropping a
    // long substitution does not recurse once per binding.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut binding) => next = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {}", var, val)?;
        }
        write!(f, "}}")
    }
}
