//! Turning solutions back into terms.
//!
//! Variables that remain unbound in a solution are replaced by canonical
//! names `_.0`, `_.1`, ... in the order they first occur in the term,
//! independent of their ids.

use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::substitution::Substitution;
use crate::core::term::{Atom, Term};

impl Substitution {
    /// Resolve every variable contained in `v` as far as possible.
    ///
    /// Only cars are resolved recursively; the cdr spine is followed in a
    /// loop.
    pub fn walk_star(&self, v: &Term) -> Term {
        let mut items = vec![];
        let mut rest = self.walk(v);
        while let Term::Pair(p) = rest {
            items.push(self.walk_star(&p.first));
            rest = self.walk(&p.second);
        }
        Term::improper_list(items, rest)
    }

    /// Name every variable that remains fresh in `v`.
    ///
    /// `self` is the reification substitution built so far, not the
    /// solution; each newly seen variable is bound to the next
    /// `Atom::Reified` name.
    pub fn reify_s(&self, v: &Term) -> Self {
        let mut names = self.clone();
        let mut rest = v.clone();
        loop {
            let walked = names.walk(&rest).clone();
            match walked {
                Term::Var(var) => {
                    let name = Term::Atom(Atom::Reified(names.len()));
                    return names.extend(var, name);
                }
                Term::Pair(p) => {
                    names = names.reify_s(&p.first);
                    rest = p.second.clone();
                }
                Term::Atom(_) => return names,
            }
        }
    }

    /// Replace all variables contained in `v` with their substituted
    /// values and name the variables without substitution.
    pub fn reify(&self, v: &Term) -> Term {
        let v = self.walk_star(v);
        let names = Substitution::empty().reify_s(&v);
        names.walk_star(&v)
    }
}

impl State {
    pub fn reify(&self, v: &Term) -> Term {
        self.subs().reify(v)
    }

    /// Reify the first variable a search introduced.
    pub fn reify_first(&self) -> Term {
        self.reify(&Term::var(Var::new(0)))
    }
}
