use crate::core::term::{Atom, Term};
use std::fmt::{Display, Formatter, Result};
use std::rc::Rc;

/// A cons cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub first: Term,
    pub second: Term,
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}", self.first)?;

        let mut rest = &self.second;
        loop {
            match rest {
                Term::Atom(Atom::Nil) => break,
                Term::Pair(next) => {
                    write!(f, " {}", next.first)?;
                    rest = &next.second;
                }
                tail => {
                    write!(f, " . {}", tail)?;
                    break;
                }
            }
        }

        write!(f, ")")
    }
}

impl Drop for Pair {
    // Unlink uniquely owned cdrs one at a time so that dropping a long
    // list does not recurse once per element.
    fn drop(&mut self) {
        let mut rest = std::mem::replace(&mut self.second, Term::nil());
        while let Term::Pair(next) = rest {
            match Rc::try_unwrap(next) {
                Ok(mut pair) => rest = std::mem::replace(&mut pair.second, Term::nil()),
                Err(_) => break,
            }
        }
    }
}
